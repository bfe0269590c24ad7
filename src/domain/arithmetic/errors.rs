//! Arithmetic Context - Errors

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum OperationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Division by zero is not allowed")]
    DivisionByZero,

    #[error("Result is out of range")]
    Overflow,
}
