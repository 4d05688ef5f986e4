//! Calculation records

use serde::{Deserialize, Serialize};
use std::fmt;
use tally_types::{Operand, Operation};

use crate::built_in;
use crate::error::CalculatorResult;

/// Two operands bound to an operation.
///
/// A calculation is immutable once created: fields are private and only read
/// through accessors. The result is not stored; [`Calculation::perform`]
/// recomputes it on every call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Calculation {
    a: Operand,
    b: Operand,
    operation: Operation,
}

impl Calculation {
    /// Create a new calculation. No validation happens here; a zero divisor
    /// surfaces when the calculation is performed.
    pub fn create(a: Operand, b: Operand, operation: Operation) -> Self {
        Self { a, b, operation }
    }

    /// Apply the stored operation to the stored operands
    pub fn perform(&self) -> CalculatorResult<Operand> {
        built_in::apply(self.operation, self.a, self.b)
    }

    pub fn a(&self) -> Operand {
        self.a
    }

    pub fn b(&self) -> Operand {
        self.b
    }

    pub fn operation(&self) -> Operation {
        self.operation
    }
}

impl fmt::Display for Calculation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.a, self.operation.symbol(), self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CalculatorError;

    #[test]
    fn perform_is_repeatable() {
        let calc = Calculation::create(Operand::new(7, 0), Operand::new(2, 0), Operation::Divide);
        let first = calc.perform().unwrap();
        assert_eq!(first, Operand::new(35, 1));
        assert_eq!(calc.perform().unwrap(), first);
        assert_eq!(calc.perform().unwrap(), first);
    }

    #[test]
    fn zero_divisor_is_accepted_at_creation_and_fails_on_perform() {
        let calc = Calculation::create(Operand::TEN, Operand::ZERO, Operation::Divide);
        assert_eq!(calc.b(), Operand::ZERO);
        assert_eq!(calc.perform(), Err(CalculatorError::DivisionByZero));
    }

    #[test]
    fn displays_as_infix() {
        let calc = Calculation::create(Operand::new(25, 1), Operand::new(15, 1), Operation::Add);
        assert_eq!(calc.to_string(), "2.5 + 1.5");
    }

    #[test]
    fn serializes_operands_as_exact_strings() {
        let calc = Calculation::create(Operand::new(25, 1), Operand::new(15, 1), Operation::Add);
        let json = serde_json::to_value(calc).unwrap();
        assert_eq!(json, serde_json::json!({ "a": "2.5", "b": "1.5", "operation": "add" }));

        let back: Calculation = serde_json::from_value(json).unwrap();
        assert_eq!(back, calc);
    }
}
