use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LeafError {
    #[error("Invalid month index {0}, expected 0-11")]
    InvalidMonth(u32),

    #[error("Year {0} is out of the supported calendar range")]
    YearOutOfRange(i32),

    #[error("Invalid month '{0}', expected YYYY-MM")]
    InvalidYearMonth(String),

    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Note is {len} characters long, the limit is {max}")]
    NoteTooLong { len: usize, max: usize },

    #[error("An entry needs at least one activity")]
    NoActivities,
}
