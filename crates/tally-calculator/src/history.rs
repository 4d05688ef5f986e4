//! Ordered history of performed calculations

use serde::{Deserialize, Serialize};
use tally_types::{Operand, Operation};

use crate::calculation::Calculation;
use crate::error::CalculatorResult;

/// Calculations in the order they were recorded.
///
/// Entries are appended and never modified. Readers only get shared
/// references or a slice, so the recorded order cannot be disturbed from
/// outside.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct History {
    calculations: Vec<Calculation>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a calculation. No deduplication, no size bound.
    pub fn add_calculation(&mut self, calculation: Calculation) {
        self.calculations.push(calculation);
    }

    /// The most recently appended calculation, if any
    pub fn get_latest(&self) -> Option<&Calculation> {
        self.calculations.last()
    }

    /// All calculations, oldest first
    pub fn get_calculations(&self) -> &[Calculation] {
        &self.calculations
    }

    /// Perform every recorded calculation, oldest first
    pub fn get_results(&self) -> CalculatorResult<Vec<Operand>> {
        self.calculations.iter().map(Calculation::perform).collect()
    }

    /// Calculations of a single operation, oldest first
    pub fn find_by_operation(&self, operation: Operation) -> Vec<&Calculation> {
        self.calculations.iter().filter(|c| c.operation() == operation).collect()
    }

    pub fn clear_history(&mut self) {
        self.calculations.clear();
    }

    pub fn len(&self) -> usize {
        self.calculations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.calculations.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Calculation> {
        self.calculations.iter()
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a Calculation;
    type IntoIter = std::slice::Iter<'a, Calculation>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
