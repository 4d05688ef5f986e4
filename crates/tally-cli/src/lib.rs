//! Tally command-line front end.
//!
//! Wires configuration, logging and the calculator together. All arithmetic
//! lives in `tally-calculator`; this crate only parses input and prints
//! results.

pub mod cli;
pub mod config;
pub mod logging;
pub mod session;

use anyhow::Result;
use std::io::{BufRead, Write};
use tally_calculator::Calculator;
use tracing::{info, warn};

use crate::cli::{Cli, Command, OutputFormat};
use crate::config::TallyConfig;
use crate::session::Session;

/// Load configuration and install logging for `cli`
pub fn bootstrap(cli: &Cli) -> Result<TallyConfig> {
    let loaded = TallyConfig::load(cli.config.as_deref())?;
    let mut config = loaded.config;
    let ignored = config.apply_env_overrides();
    config.validate()?;

    logging::init_tracing(&config.logging, cli.verbose)?;

    if !loaded.found {
        warn!(path = %loaded.path.display(), "Configuration file not found. Using default configuration.");
    }
    for name in ignored {
        warn!(variable = %name, "Ignoring unparseable environment override");
    }
    Ok(config)
}

/// Execute `cli` against the given streams
pub fn run<R: BufRead, W: Write>(
    cli: &Cli,
    config: &TallyConfig,
    input: R,
    mut output: W,
) -> Result<()> {
    match &cli.command {
        Command::Eval { operation, a, b } => {
            let mut calculator = Calculator::new();
            let result = calculator.calculate(*operation, *a, *b)?;
            match cli.format {
                OutputFormat::Text => writeln!(output, "{result}")?,
                OutputFormat::Json => writeln!(
                    output,
                    "{}",
                    serde_json::json!({ "calculation": calculator.get_latest(), "result": result })
                )?,
            }
        }
        Command::Session => {
            info!(display_limit = config.history.display_limit, "Starting calculator session");
            let mut session = Session::new(config.history.display_limit, cli.format);
            session.run(input, output)?;
            info!(
                calculations = session.calculator().history().len(),
                "Calculator session finished"
            );
        }
    }
    Ok(())
}
