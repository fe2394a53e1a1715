//! Calendar granularity for metric time dimensions.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Duration, Months, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// The calendar bucket size a metric's time dimension is aggregated by.
///
/// This is a closed set: every preset table and every equality rule
/// matches exhaustively over it, so adding a variant is a compile-time
/// event, not a runtime fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    Day,
    Week,
    Month,
    Year,
}

impl Granularity {
    /// All supported granularities, smallest bucket first.
    pub const ALL: [Granularity; 4] = [
        Granularity::Day,
        Granularity::Week,
        Granularity::Month,
        Granularity::Year,
    ];

    /// The lowercase unit name used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Granularity::Day => "day",
            Granularity::Week => "week",
            Granularity::Month => "month",
            Granularity::Year => "year",
        }
    }

    /// Truncate `instant` to the start of the bucket containing it:
    /// midnight for `Day`, Monday midnight for `Week` (ISO weeks), the
    /// first of the month or year otherwise.
    pub fn start_of(&self, instant: NaiveDateTime) -> NaiveDateTime {
        let date = instant.date();
        let start = match self {
            Granularity::Day => date,
            Granularity::Week => {
                date - Duration::days(i64::from(date.weekday().num_days_from_monday()))
            }
            Granularity::Month => date.with_day(1).expect("day 1 is valid in every month"),
            Granularity::Year => NaiveDate::from_ymd_opt(date.year(), 1, 1)
                .expect("january 1 is valid in every year"),
        };
        start.and_time(NaiveTime::MIN)
    }

    /// Step `instant` back by `count` buckets.
    ///
    /// Month and year steps are calendar-aware: the day-of-month is kept
    /// and clamped at month ends (Mar 31 minus one month lands on the
    /// last day of February).
    pub fn subtract(&self, instant: NaiveDateTime, count: u32) -> NaiveDateTime {
        match self {
            Granularity::Day => instant - Duration::days(i64::from(count)),
            Granularity::Week => instant - Duration::weeks(i64::from(count)),
            Granularity::Month => instant
                .checked_sub_months(Months::new(count))
                .expect("stepped date stays in chrono's supported range"),
            Granularity::Year => instant
                .checked_sub_months(Months::new(count * 12))
                .expect("stepped date stays in chrono's supported range"),
        }
    }

    /// Calendar-unit equality: true when both instants fall in the same
    /// bucket. Two instants on the same day compare equal under `Day`,
    /// but must share the calendar month to compare equal under `Month`.
    pub fn is_same(&self, a: NaiveDateTime, b: NaiveDateTime) -> bool {
        match self {
            Granularity::Day => a.date() == b.date(),
            Granularity::Week => a.date().iso_week() == b.date().iso_week(),
            Granularity::Month => (a.year(), a.month()) == (b.year(), b.month()),
            Granularity::Year => a.year() == b.year(),
        }
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Granularity {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "day" => Ok(Granularity::Day),
            "week" => Ok(Granularity::Week),
            "month" => Ok(Granularity::Month),
            "year" => Ok(Granularity::Year),
            other => Err(Error::UnknownGranularity(other.to_string())),
        }
    }
}
