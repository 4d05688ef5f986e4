//! Division
//!
//! This is the only place a zero divisor is detected. The calculator facade
//! performs a calculation before recording it, so a rejected division never
//! reaches the history.

use tally_types::{Operand, Operation};

use crate::error::{CalculatorError, CalculatorResult};

/// `a / b`, failing with [`CalculatorError::DivisionByZero`] when `b` is zero
pub fn divide(a: Operand, b: Operand) -> CalculatorResult<Operand> {
    if b.is_zero() {
        return Err(CalculatorError::DivisionByZero);
    }
    a.checked_div(b).ok_or(CalculatorError::Overflow { operation: Operation::Divide, a, b })
}
