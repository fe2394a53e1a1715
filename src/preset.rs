//! Quick-select date-range presets anchored to "now".
//!
//! Every preset looks back from the evaluation instant: its range always
//! ends at `now`, and its start is derived by a [`RangeRule`]. Rules are
//! plain data so a preset list is a static table; evaluation happens per
//! call against an explicit `now`, never against a hidden clock read.

use chrono::NaiveDateTime;
use tracing::debug;

use crate::granularity::Granularity;
use crate::range::DateRange;

/// How a preset derives its start bound from the evaluation instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeRule {
    /// Start of the bucket containing `now`: today, this week, ...
    CurrentPeriod(Granularity),
    /// `count` units before `now`, calendar-clamped for months and years.
    Trailing { count: u32, unit: Granularity },
    /// `count` units before `now`, snapped back to the start of that unit.
    TrailingAligned { count: u32, unit: Granularity },
}

impl RangeRule {
    /// Evaluate the rule; the resulting range always ends at `now`.
    pub fn evaluate(&self, now: NaiveDateTime) -> DateRange {
        let start = match *self {
            RangeRule::CurrentPeriod(unit) => unit.start_of(now),
            RangeRule::Trailing { count, unit } => unit.subtract(now, count),
            RangeRule::TrailingAligned { count, unit } => {
                unit.start_of(unit.subtract(now, count))
            }
        };
        DateRange::bounded(start, now)
    }
}

/// A named quick-select range option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preset {
    /// Long-form display text.
    pub label: &'static str,
    /// Compact display text; doubles as the stable identifier reported
    /// by [`matching_preset`].
    pub short_label: &'static str,
    /// Rule producing the preset's range.
    pub rule: RangeRule,
}

impl Preset {
    const fn new(label: &'static str, short_label: &'static str, rule: RangeRule) -> Self {
        Self {
            label,
            short_label,
            rule,
        }
    }

    /// The preset's range evaluated against `now`.
    pub fn range(&self, now: NaiveDateTime) -> DateRange {
        self.rule.evaluate(now)
    }
}

/// The canonical default rule for a granularity.
///
/// Pickers use it as the initial and reset selection, and the matching
/// preset list embeds the same rule under its own label ("30D", "3M",
/// "12M", "5Y" respectively). Both call sites share this single
/// definition so the listed entry cannot drift from the default.
pub const fn default_rule(granularity: Granularity) -> RangeRule {
    match granularity {
        Granularity::Day => RangeRule::Trailing {
            count: 30,
            unit: Granularity::Day,
        },
        Granularity::Week => RangeRule::Trailing {
            count: 12,
            unit: Granularity::Week,
        },
        Granularity::Month => RangeRule::Trailing {
            count: 12,
            unit: Granularity::Month,
        },
        Granularity::Year => RangeRule::Trailing {
            count: 5,
            unit: Granularity::Year,
        },
    }
}

/// [`default_rule`] evaluated against `now`.
pub fn default_range(granularity: Granularity, now: NaiveDateTime) -> DateRange {
    default_rule(granularity).evaluate(now)
}

const DAY_PRESETS: [Preset; 6] = [
    Preset::new(
        "Today",
        "Today",
        RangeRule::CurrentPeriod(Granularity::Day),
    ),
    Preset::new(
        "Past 7 days",
        "7D",
        RangeRule::Trailing {
            count: 7,
            unit: Granularity::Day,
        },
    ),
    Preset::new("Past 30 days", "30D", default_rule(Granularity::Day)),
    Preset::new(
        "Past 3 months",
        "3M",
        RangeRule::Trailing {
            count: 12,
            unit: Granularity::Week,
        },
    ),
    Preset::new(
        "Past 12 months",
        "12M",
        RangeRule::Trailing {
            count: 12,
            unit: Granularity::Month,
        },
    ),
    Preset::new(
        "Past 5 years",
        "5Y",
        RangeRule::Trailing {
            count: 5,
            unit: Granularity::Year,
        },
    ),
];

const WEEK_PRESETS: [Preset; 6] = [
    Preset::new(
        "This week",
        "This week",
        RangeRule::CurrentPeriod(Granularity::Week),
    ),
    Preset::new(
        "Past 1 week",
        "1W",
        RangeRule::TrailingAligned {
            count: 1,
            unit: Granularity::Week,
        },
    ),
    Preset::new(
        "Past 4 weeks",
        "4W",
        RangeRule::TrailingAligned {
            count: 4,
            unit: Granularity::Week,
        },
    ),
    Preset::new("Past 3 months", "3M", default_rule(Granularity::Week)),
    Preset::new(
        "Past 12 months",
        "12M",
        RangeRule::TrailingAligned {
            count: 12,
            unit: Granularity::Month,
        },
    ),
    Preset::new(
        "Past 5 years",
        "5Y",
        RangeRule::TrailingAligned {
            count: 5,
            unit: Granularity::Year,
        },
    ),
];

const MONTH_PRESETS: [Preset; 5] = [
    Preset::new(
        "This month",
        "This month",
        RangeRule::CurrentPeriod(Granularity::Month),
    ),
    Preset::new(
        "Past 3 months",
        "3M",
        RangeRule::TrailingAligned {
            count: 3,
            unit: Granularity::Month,
        },
    ),
    Preset::new(
        "Past 6 months",
        "6M",
        RangeRule::TrailingAligned {
            count: 6,
            unit: Granularity::Month,
        },
    ),
    Preset::new("Past 12 months", "12M", default_rule(Granularity::Month)),
    Preset::new(
        "Past 5 years",
        "5Y",
        RangeRule::TrailingAligned {
            count: 5,
            unit: Granularity::Year,
        },
    ),
];

const YEAR_PRESETS: [Preset; 3] = [
    Preset::new(
        "This year",
        "This year",
        RangeRule::CurrentPeriod(Granularity::Year),
    ),
    Preset::new(
        "Past 1 year",
        "1Y",
        RangeRule::TrailingAligned {
            count: 1,
            unit: Granularity::Year,
        },
    ),
    Preset::new("Past 5 years", "5Y", default_rule(Granularity::Year)),
];

/// The ordered preset table for a granularity.
///
/// "All time" is deliberately not listed; the unbounded selection is
/// always available and is handled by [`matching_preset`] directly.
pub fn presets(granularity: Granularity) -> &'static [Preset] {
    match granularity {
        Granularity::Day => &DAY_PRESETS,
        Granularity::Week => &WEEK_PRESETS,
        Granularity::Month => &MONTH_PRESETS,
        Granularity::Year => &YEAR_PRESETS,
    }
}

/// Result of classifying a selection against the preset table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresetMatch {
    /// The selection is fully unbounded.
    AllTime,
    /// Short label of the first listed preset whose range matches.
    Preset(&'static str),
}

/// Classify `range` against the presets for `granularity`.
///
/// Bounds are compared bucket-wise at the granularity's own coarseness,
/// so a selection stored earlier still matches a preset recomputed from
/// a later `now` within the same bucket. Returns `None` for free-form
/// custom ranges.
pub fn matching_preset(
    range: DateRange,
    granularity: Granularity,
    now: NaiveDateTime,
) -> Option<PresetMatch> {
    if range.is_all_time() {
        return Some(PresetMatch::AllTime);
    }

    let found = presets(granularity)
        .iter()
        .find(|preset| preset.range(now).is_same(&range, granularity))
        .map(|preset| PresetMatch::Preset(preset.short_label));

    if found.is_none() {
        debug!(%granularity, "selection matches no preset, treating as custom range");
    }

    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::collections::HashSet;

    fn dt(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    #[test]
    fn tables_are_nonempty_with_unique_short_labels() {
        for granularity in Granularity::ALL {
            let table = presets(granularity);
            assert!(!table.is_empty());

            let labels: HashSet<_> = table.iter().map(|p| p.short_label).collect();
            assert_eq!(labels.len(), table.len(), "{granularity} table has duplicates");
        }
    }

    #[test]
    fn every_range_ends_at_now() {
        let now = dt(2024, 6, 15, 10);
        for granularity in Granularity::ALL {
            for preset in presets(granularity) {
                assert_eq!(preset.range(now).end, Some(now), "{}", preset.short_label);
            }
        }
    }

    #[test]
    fn day_table_concrete_starts() {
        let now = dt(2024, 6, 15, 10);
        let starts: Vec<_> = presets(Granularity::Day)
            .iter()
            .map(|p| p.range(now).start.unwrap())
            .collect();

        assert_eq!(
            starts,
            vec![
                dt(2024, 6, 15, 0),  // Today
                dt(2024, 6, 8, 10),  // 7D
                dt(2024, 5, 16, 10), // 30D
                dt(2024, 3, 23, 10), // 3M: 12 weeks
                dt(2023, 6, 15, 10), // 12M
                dt(2019, 6, 15, 10), // 5Y
            ]
        );
    }

    #[test]
    fn week_table_aligns_to_monday() {
        // 2024-06-15 is a Saturday.
        let now = dt(2024, 6, 15, 10);
        let table = presets(Granularity::Week);

        assert_eq!(table[0].range(now).start, Some(dt(2024, 6, 10, 0))); // This week
        assert_eq!(table[1].range(now).start, Some(dt(2024, 6, 3, 0))); // 1W
        assert_eq!(table[2].range(now).start, Some(dt(2024, 5, 13, 0))); // 4W
        assert_eq!(table[3].range(now).start, Some(dt(2024, 3, 23, 10))); // 3M, unaligned
        assert_eq!(table[4].range(now).start, Some(dt(2023, 6, 1, 0))); // 12M
        assert_eq!(table[5].range(now).start, Some(dt(2019, 1, 1, 0))); // 5Y
    }

    #[test]
    fn month_table_concrete_starts() {
        let now = dt(2024, 6, 15, 10);
        let table = presets(Granularity::Month);

        assert_eq!(table[0].range(now).start, Some(dt(2024, 6, 1, 0))); // This month
        assert_eq!(table[1].range(now).start, Some(dt(2024, 3, 1, 0))); // 3M
        assert_eq!(table[2].range(now).start, Some(dt(2023, 12, 1, 0))); // 6M
        assert_eq!(table[3].range(now).start, Some(dt(2023, 6, 15, 10))); // 12M, unaligned
        assert_eq!(table[4].range(now).start, Some(dt(2019, 1, 1, 0))); // 5Y
    }

    #[test]
    fn year_table_concrete_starts() {
        let now = dt(2024, 6, 15, 10);
        let table = presets(Granularity::Year);

        assert_eq!(table[0].range(now).start, Some(dt(2024, 1, 1, 0))); // This year
        assert_eq!(table[1].range(now).start, Some(dt(2023, 1, 1, 0))); // 1Y
        assert_eq!(table[2].range(now).start, Some(dt(2019, 6, 15, 10))); // 5Y, unaligned
    }

    #[test]
    fn listed_default_entry_equals_default_range() {
        let now = dt(2024, 6, 15, 10);
        let designated = [
            (Granularity::Day, "30D"),
            (Granularity::Week, "3M"),
            (Granularity::Month, "12M"),
            (Granularity::Year, "5Y"),
        ];

        for (granularity, short_label) in designated {
            let preset = presets(granularity)
                .iter()
                .find(|p| p.short_label == short_label)
                .unwrap();
            assert_eq!(preset.rule, default_rule(granularity));
            assert_eq!(preset.range(now), default_range(granularity, now));
        }
    }

    #[test]
    fn evaluation_is_deterministic() {
        let now = dt(2024, 6, 15, 10);
        for granularity in Granularity::ALL {
            let first: Vec<_> = presets(granularity).iter().map(|p| p.range(now)).collect();
            let second: Vec<_> = presets(granularity).iter().map(|p| p.range(now)).collect();
            assert_eq!(first, second);
        }
    }
}
