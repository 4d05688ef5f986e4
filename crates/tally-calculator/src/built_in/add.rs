//! Addition

use tally_types::{Operand, Operation};

use crate::error::{CalculatorError, CalculatorResult};

/// `a + b`
pub fn add(a: Operand, b: Operand) -> CalculatorResult<Operand> {
    a.checked_add(b).ok_or(CalculatorError::Overflow { operation: Operation::Add, a, b })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_decimal_precision() {
        // 0.1 + 0.2 is exact in decimal arithmetic
        let sum = add(Operand::new(1, 1), Operand::new(2, 1)).unwrap();
        assert_eq!(sum, Operand::new(3, 1));
    }

    #[test]
    fn overflow_is_an_error() {
        let err = add(Operand::MAX, Operand::ONE).unwrap_err();
        assert_eq!(err.category(), "overflow");
    }
}
