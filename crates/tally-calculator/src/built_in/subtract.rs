//! Subtraction

use tally_types::{Operand, Operation};

use crate::error::{CalculatorError, CalculatorResult};

/// `a - b`
pub fn subtract(a: Operand, b: Operand) -> CalculatorResult<Operand> {
    a.checked_sub(b).ok_or(CalculatorError::Overflow { operation: Operation::Subtract, a, b })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn result_can_be_negative() {
        let diff = subtract(Operand::new(3, 0), Operand::new(55, 1)).unwrap();
        assert_eq!(diff, Operand::new(-25, 1));
    }

    #[test]
    fn overflow_is_an_error() {
        assert!(subtract(Operand::MIN, Operand::ONE).is_err());
    }
}
