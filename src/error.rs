use thiserror::Error;

/// Errors from arithmetic that is not defined for all inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum Error {
    /// The divisor was zero within the current tolerance
    #[error("Division by zero")]
    DivisionByZero,
}

pub type Result<T> = std::result::Result<T, Error>;
