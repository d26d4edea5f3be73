use thiserror::Error;

/// Errors from oracle evaluation, codec parsing, and generation parameters.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum OracleError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("division by zero")]
    DivisionByZero,
    #[error("invalid format: {0}")]
    InvalidFormat(String),
}
