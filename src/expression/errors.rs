use thiserror::Error;

/// Errors that can occur during expression evaluation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExpressionError {
    #[error("Failed to parse number '{0}'")]
    InvalidNumber(String),
    #[error("Division by zero")]
    DivisionByZero,
}
