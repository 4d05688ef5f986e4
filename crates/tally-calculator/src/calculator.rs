use tally_types::{Operand, Operation};
use tracing::{debug, info, instrument};

use crate::calculation::Calculation;
use crate::error::CalculatorResult;
use crate::history::History;

/// Calculator facade that records every successful operation in its history
#[derive(Debug, Default)]
pub struct Calculator {
    history: History,
}

impl Calculator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a calculator that keeps appending to an existing history
    pub fn with_history(history: History) -> Self {
        Self { history }
    }

    pub fn add(&mut self, a: Operand, b: Operand) -> CalculatorResult<Operand> {
        self.calculate(Operation::Add, a, b)
    }

    pub fn subtract(&mut self, a: Operand, b: Operand) -> CalculatorResult<Operand> {
        self.calculate(Operation::Subtract, a, b)
    }

    pub fn multiply(&mut self, a: Operand, b: Operand) -> CalculatorResult<Operand> {
        self.calculate(Operation::Multiply, a, b)
    }

    /// Divide `a` by `b`. A zero divisor fails with
    /// [`CalculatorError::DivisionByZero`](crate::CalculatorError::DivisionByZero)
    /// and leaves the history untouched.
    pub fn divide(&mut self, a: Operand, b: Operand) -> CalculatorResult<Operand> {
        self.calculate(Operation::Divide, a, b)
    }

    /// Perform `operation` and record it.
    ///
    /// The calculation is performed before it is appended, so a failing
    /// operation never reaches the history.
    #[instrument(skip(self))]
    pub fn calculate(
        &mut self,
        operation: Operation,
        a: Operand,
        b: Operand,
    ) -> CalculatorResult<Operand> {
        let calculation = Calculation::create(a, b, operation);
        let result = calculation.perform()?;
        self.history.add_calculation(calculation);

        debug!(
            %calculation,
            %result,
            history_len = self.history.len(),
            "Recorded calculation"
        );
        Ok(result)
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn get_latest(&self) -> Option<&Calculation> {
        self.history.get_latest()
    }

    pub fn get_calculations(&self) -> &[Calculation] {
        self.history.get_calculations()
    }

    #[instrument(skip(self))]
    pub fn clear_history(&mut self) {
        info!(cleared = self.history.len(), "Clearing calculation history");
        self.history.clear_history();
    }

    /// Give up the calculator, keeping its history
    pub fn into_history(self) -> History {
        self.history
    }
}
