use thiserror::Error;

/// Errors returned by smoothcast operations.
///
/// Errors are reserved for caller contract violations such as mismatched
/// sequence lengths or unparseable names. Numeric edge cases (short series,
/// empty windows, all pairs excluded from a score) degrade to undefined
/// values instead of failing.
#[derive(Error, Debug)]
pub enum SmoothcastError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unknown metric: {0}")]
    UnknownMetric(String),

    #[error("Unknown evaluation mode: {0}")]
    UnknownMode(String),

    #[error("Unknown forecast method: {0}")]
    UnknownMethod(String),
}

pub type Result<T> = std::result::Result<T, SmoothcastError>;
