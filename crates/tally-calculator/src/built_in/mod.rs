//! Built-in arithmetic operations.
//!
//! Each operation is a pure function over two operands. Results use checked
//! decimal arithmetic, so an out-of-range result is reported as
//! [`CalculatorError::Overflow`](crate::CalculatorError::Overflow) rather than
//! panicking.

use tally_types::{Operand, Operation};

use crate::error::CalculatorResult;

pub mod add;
pub mod divide;
pub mod multiply;
pub mod subtract;

pub use add::add;
pub use divide::divide;
pub use multiply::multiply;
pub use subtract::subtract;

/// Signature shared by all built-in operations
pub type BinaryOperation = fn(Operand, Operand) -> CalculatorResult<Operand>;

/// The pure function implementing `operation`
pub fn function(operation: Operation) -> BinaryOperation {
    match operation {
        Operation::Add => add,
        Operation::Subtract => subtract,
        Operation::Multiply => multiply,
        Operation::Divide => divide,
    }
}

/// Apply `operation` to `a` and `b`
pub fn apply(operation: Operation, a: Operand, b: Operand) -> CalculatorResult<Operand> {
    function(operation)(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CalculatorError;

    #[test]
    fn apply_dispatches_to_each_operation() {
        let a = Operand::new(12, 0);
        let b = Operand::new(4, 0);
        assert_eq!(apply(Operation::Add, a, b).unwrap(), Operand::new(16, 0));
        assert_eq!(apply(Operation::Subtract, a, b).unwrap(), Operand::new(8, 0));
        assert_eq!(apply(Operation::Multiply, a, b).unwrap(), Operand::new(48, 0));
        assert_eq!(apply(Operation::Divide, a, b).unwrap(), Operand::new(3, 0));
    }

    #[test]
    fn apply_reports_division_by_zero() {
        let err = apply(Operation::Divide, Operand::ONE, Operand::ZERO).unwrap_err();
        assert_eq!(err, CalculatorError::DivisionByZero);
    }
}
