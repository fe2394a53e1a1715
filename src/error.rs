use thiserror::Error;

/// Errors produced by this crate.
///
/// The engine itself has no runtime failure modes; the only fallible
/// surface is converting externally supplied unit strings into a
/// [`Granularity`](crate::Granularity).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("unknown granularity '{0}', expected one of: day, week, month, year")]
    UnknownGranularity(String),
}

pub type Result<T> = std::result::Result<T, Error>;
