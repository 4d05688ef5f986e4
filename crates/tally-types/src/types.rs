use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A decimal operand. Never a floating-point approximation.
pub type Operand = Decimal;

/// The four supported binary operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// `a + b`
    Add,
    /// `a - b`
    Subtract,
    /// `a * b`
    Multiply,
    /// `a / b`, undefined for a zero divisor
    Divide,
}

impl Operation {
    /// Every operation, in declaration order
    pub const ALL: [Operation; 4] =
        [Operation::Add, Operation::Subtract, Operation::Multiply, Operation::Divide];

    /// Lowercase name used for display, parsing and serialization
    pub const fn name(&self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Divide => "divide",
        }
    }

    /// Infix symbol
    pub const fn symbol(&self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Subtract => "-",
            Operation::Multiply => "*",
            Operation::Divide => "/",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when text names neither an operation nor its symbol
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown operation '{input}' (expected one of add, subtract, multiply, divide or + - * /)")]
pub struct ParseOperationError {
    /// The rejected input, trimmed
    pub input: String,
}

impl FromStr for Operation {
    type Err = ParseOperationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Operation::ALL
            .into_iter()
            .find(|op| op.name().eq_ignore_ascii_case(trimmed) || op.symbol() == trimmed)
            .ok_or_else(|| ParseOperationError { input: trimmed.to_string() })
    }
}
