// Domain error kinds
use super::series::SeriesKind;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatisticsError {
    #[error("{series} series has a total of zero, percentages are undefined")]
    DivisionByZero { series: SeriesKind },

    #[error("year {year} appears more than once in the {series} series")]
    DuplicateYear { series: SeriesKind, year: String },

    #[error("countries listed for {year} in the {series} series have no count for that year")]
    UnknownRosterYear { series: SeriesKind, year: String },

    #[error("year {year} is missing from the {missing_from} series; both series must cover the same years")]
    YearSetMismatch { missing_from: SeriesKind, year: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RevealError {
    #[error("counter display value {input:?} is malformed: {reason}")]
    MalformedInput { input: String, reason: &'static str },

    /// A visibility or timer event arrived after the counter was torn down.
    #[error("counter received an update after teardown")]
    PostTeardownUpdate,
}
