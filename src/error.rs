use thiserror::Error;

/// Errors returned by the string-parsing factories on [`crate::Instant`].
///
/// Both variants carry the offending input. Parsing is the only fallible
/// operation on the type; every numeric factory coerces invalid input to the
/// epoch instead of failing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unable to parse timestamp: {0}")]
    Timestamp(String),
    #[error("unable to parse date: {0}")]
    Date(String),
}
