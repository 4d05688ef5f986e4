//! Tally Types
//!
//! This crate defines the shared vocabulary of the Tally calculator: the
//! decimal `Operand` and the closed set of arithmetic `Operation`s. Keeping
//! them here lets `tally-calculator` and `tally-cli` agree on names, symbols
//! and serialized forms without depending on each other.

#![deny(warnings)]
#![deny(missing_docs)]

mod types;
pub use types::{Operand, Operation, ParseOperationError};

/// Arbitrary precision decimal re-exported so callers need no direct `rust_decimal` dependency.
pub use rust_decimal::Decimal;
