#![deny(warnings)]
//! Exact decimal arithmetic with a recorded history.
//!
//! The [`Calculator`] facade performs one of four [`Operation`]s on two
//! decimal operands, records the [`Calculation`] in its [`History`] and
//! returns the result. Operands are `rust_decimal::Decimal` values, so
//! `0.1 + 0.2` is exactly `0.3`.
//!
//! ```
//! use tally_calculator::{Calculator, Decimal};
//!
//! let mut calculator = Calculator::new();
//! let sum = calculator.add(Decimal::new(25, 1), Decimal::new(15, 1)).unwrap();
//! assert_eq!(sum, Decimal::new(40, 1));
//! assert_eq!(calculator.get_latest().unwrap().perform().unwrap(), sum);
//! ```

pub mod built_in;
pub mod calculation;
pub mod calculator;
pub mod error;
pub mod history;

pub use calculation::Calculation;
pub use calculator::Calculator;
pub use error::{CalculatorError, CalculatorResult};
pub use history::History;
pub use tally_types::{Decimal, Operand, Operation, ParseOperationError};
