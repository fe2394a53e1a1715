//! Lookback - time-bucketed date-range presets for analytics pickers.
//!
//! Given a coarse time granularity, this crate produces an ordered list
//! of named date-range presets anchored to "now", and classifies an
//! arbitrary selection back to the preset that produced it. Matching is
//! bucket-wise (calendar-unit equality), not millisecond-exact, so a
//! selection stored at render time still matches a preset recomputed
//! later the same day, week, month, or year.
//!
//! The engine is pure with respect to its `now` parameter: callers pass
//! the evaluation instant explicitly, nothing reads the wall clock, and
//! every call allocates fresh results.
//!
//! # Modules
//!
//! - [`granularity`] - the closed `Day`/`Week`/`Month`/`Year` bucket enum
//!   and its calendar arithmetic
//! - [`range`] - the `DateRange` selection type and caption formatting
//! - [`preset`] - preset tables, the canonical default rule, and matching
//! - [`error`] - error types for the crate
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use lookback::{matching_preset, presets, Granularity, PresetMatch};
//!
//! let now = NaiveDate::from_ymd_opt(2024, 6, 15)
//!     .unwrap()
//!     .and_hms_opt(10, 0, 0)
//!     .unwrap();
//!
//! let today = presets(Granularity::Day)[0];
//! let selection = today.range(now);
//!
//! assert_eq!(
//!     matching_preset(selection, Granularity::Day, now),
//!     Some(PresetMatch::Preset("Today")),
//! );
//! ```

pub mod error;
pub mod granularity;
pub mod preset;
pub mod range;

pub use error::{Error, Result};
pub use granularity::Granularity;
pub use preset::{
    default_range, default_rule, matching_preset, presets, Preset, PresetMatch, RangeRule,
};
pub use range::{format_date, DateRange};
