//! Error types for calculator operations

use tally_types::{Operand, Operation};
use thiserror::Error;

/// Failure of an arithmetic operation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalculatorError {
    /// The divisor of a division was zero
    #[error("Cannot divide by zero")]
    DivisionByZero,

    /// The exact result does not fit in the decimal range
    #[error("Overflow: {a} {} {b} is out of decimal range", .operation.symbol())]
    Overflow { operation: Operation, a: Operand, b: Operand },
}

impl CalculatorError {
    /// Get the error category for logging and metrics
    pub fn category(&self) -> &'static str {
        match self {
            CalculatorError::DivisionByZero => "division_by_zero",
            CalculatorError::Overflow { .. } => "overflow",
        }
    }
}

/// Result type for calculator operations
pub type CalculatorResult<T> = Result<T, CalculatorError>;
