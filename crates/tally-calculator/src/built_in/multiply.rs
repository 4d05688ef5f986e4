//! Multiplication

use tally_types::{Operand, Operation};

use crate::error::{CalculatorError, CalculatorResult};

/// `a * b`
pub fn multiply(a: Operand, b: Operand) -> CalculatorResult<Operand> {
    a.checked_mul(b).ok_or(CalculatorError::Overflow { operation: Operation::Multiply, a, b })
}
