//! Date-range selections and bound-wise calendar equality.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::granularity::Granularity;

/// Caption format for range bounds, e.g. `Jun 15, 2024`.
const DATE_FORMAT: &str = "%b %-d, %Y";

/// A date-range selection owned by the caller.
///
/// Bounds are timezone-naive local instants. Either bound may be absent;
/// a range with both bounds absent means "all time" (no filter applied).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DateRange {
    pub start: Option<NaiveDateTime>,
    pub end: Option<NaiveDateTime>,
}

impl DateRange {
    /// A range with both bounds present.
    pub fn bounded(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
        }
    }

    /// The fully unbounded range: no filter applied.
    pub fn all_time() -> Self {
        Self::default()
    }

    /// True when both bounds are absent.
    pub fn is_all_time(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    /// Bound-wise calendar-unit equality.
    ///
    /// Each bound matches independently: both absent, or both present
    /// and falling in the same calendar bucket for `granularity`. A
    /// partially unbounded range therefore never equals a fully bounded
    /// one, in either direction.
    pub fn is_same(&self, other: &DateRange, granularity: Granularity) -> bool {
        bounds_same(granularity, self.start, other.start)
            && bounds_same(granularity, self.end, other.end)
    }
}

fn bounds_same(
    granularity: Granularity,
    a: Option<NaiveDateTime>,
    b: Option<NaiveDateTime>,
) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => granularity.is_same(a, b),
        (None, None) => true,
        _ => false,
    }
}

/// Render a bound as its picker caption (`Jun 15, 2024`); absent bounds
/// stay absent.
pub fn format_date(date: Option<NaiveDateTime>) -> Option<String> {
    date.map(|d| d.format(DATE_FORMAT).to_string())
}
