use proptest::prelude::*;
use tally_calculator::{Calculator, CalculatorError, Decimal, Operation, built_in};

fn decimal() -> impl Strategy<Value = Decimal> {
    (any::<i32>(), 0u32..=8).prop_map(|(mantissa, scale)| Decimal::new(mantissa as i64, scale))
}

fn non_zero_decimal() -> impl Strategy<Value = Decimal> {
    decimal().prop_filter("divisor must be non-zero", |d| !d.is_zero())
}

proptest! {
    #[test]
    fn operations_match_decimal_arithmetic(a in decimal(), b in decimal()) {
        prop_assert_eq!(built_in::add(a, b).unwrap(), a + b);
        prop_assert_eq!(built_in::subtract(a, b).unwrap(), a - b);
        prop_assert_eq!(built_in::multiply(a, b).unwrap(), a * b);
    }

    #[test]
    fn division_matches_decimal_arithmetic(a in decimal(), b in non_zero_decimal()) {
        prop_assert_eq!(built_in::divide(a, b).unwrap(), a / b);
    }

    #[test]
    fn latest_entry_reproduces_returned_result(
        a in decimal(),
        b in non_zero_decimal(),
        index in 0usize..4,
    ) {
        let operation = Operation::ALL[index];
        let mut calculator = Calculator::new();
        let result = calculator.calculate(operation, a, b).unwrap();

        let latest = calculator.get_latest().unwrap();
        prop_assert_eq!(latest.operation(), operation);
        prop_assert_eq!(latest.perform().unwrap(), result);
        prop_assert_eq!(latest.perform().unwrap(), result);
    }

    #[test]
    fn division_by_zero_never_touches_history(a in decimal(), scale in 0u32..=8, prior in 0usize..5) {
        let mut calculator = Calculator::new();
        for i in 0..prior {
            calculator.add(a, Decimal::from(i as i64)).unwrap();
        }

        let zero = Decimal::new(0, scale);
        prop_assert_eq!(calculator.divide(a, zero), Err(CalculatorError::DivisionByZero));
        prop_assert_eq!(calculator.get_calculations().len(), prior);
    }
}
