//! Command-line interface definition

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tally_calculator::{Decimal, Operation};

#[derive(Parser, Debug)]
#[command(name = "tally")]
#[command(about = "Exact decimal calculator with calculation history")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Configuration file (defaults to $TALLY_CONFIG_PATH, then tally.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Perform a single operation and print the result
    Eval {
        /// add, subtract, multiply, divide or one of + - * /
        #[arg(allow_hyphen_values = true)]
        operation: Operation,

        #[arg(allow_hyphen_values = true)]
        a: Decimal,

        #[arg(allow_hyphen_values = true)]
        b: Decimal,
    },

    /// Read commands from stdin, keeping a history for the session
    Session,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}
