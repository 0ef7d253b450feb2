use thiserror::Error;

pub type CoreResult<T> = Result<T, CoreError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("Unknown {what} code: {code}")]
    UnknownCode { what: &'static str, code: String },

    #[error("Household occupant count out of range: {count} (expected 1-6)")]
    OccupantsOutOfRange { count: i64 },

    #[error("Usage pattern out of range: {pattern} (expected 1-6)")]
    UsagePatternOutOfRange { pattern: i64 },
}
