//! Line-oriented calculator session
//!
//! Each input line is one command: `<operation> <a> <b>`, `latest`,
//! `history`, `results`, `clear`, `help` or `quit`. Failures are printed as
//! `error: ...` and the session carries on.

use anyhow::Result;
use serde::Serialize;
use std::io::{BufRead, Write};
use std::str::FromStr;
use tally_calculator::{Calculation, Calculator, Decimal, Operation};
use thiserror::Error;
use tracing::debug;

use crate::cli::OutputFormat;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Calculate { operation: Operation, a: Decimal, b: Decimal },
    Latest,
    History,
    Results,
    Clear,
    Help,
    Quit,
}

#[derive(Error, Debug)]
pub enum CommandError {
    #[error("unknown command '{0}' (try 'help')")]
    Unknown(String),

    #[error("'{command}' expects {expected} argument(s), got {found}")]
    Arity { command: String, expected: usize, found: usize },

    #[error("invalid number '{input}': {source}")]
    InvalidOperand { input: String, source: rust_decimal::Error },
}

fn parse_operand(input: &str) -> Result<Decimal, CommandError> {
    Decimal::from_str(input)
        .map_err(|source| CommandError::InvalidOperand { input: input.to_string(), source })
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut tokens = line.split_whitespace();
        let Some(head) = tokens.next() else {
            return Err(CommandError::Unknown(String::new()));
        };
        let args: Vec<&str> = tokens.collect();

        let keyword = match head.to_ascii_lowercase().as_str() {
            "latest" => Some(Command::Latest),
            "history" => Some(Command::History),
            "results" => Some(Command::Results),
            "clear" => Some(Command::Clear),
            "help" => Some(Command::Help),
            "quit" | "exit" => Some(Command::Quit),
            _ => None,
        };
        if let Some(command) = keyword {
            if !args.is_empty() {
                return Err(CommandError::Arity {
                    command: head.to_string(),
                    expected: 0,
                    found: args.len(),
                });
            }
            return Ok(command);
        }

        let operation: Operation =
            head.parse().map_err(|_| CommandError::Unknown(head.to_string()))?;
        match args.as_slice() {
            [a, b] => Ok(Command::Calculate { operation, a: parse_operand(a)?, b: parse_operand(b)? }),
            _ => Err(CommandError::Arity {
                command: head.to_string(),
                expected: 2,
                found: args.len(),
            }),
        }
    }
}

/// A recorded calculation with its result, as printed in JSON mode
#[derive(Serialize)]
struct Entry<'a> {
    #[serde(flatten)]
    calculation: &'a Calculation,
    result: Decimal,
}

const HELP: &str = "\
commands:
  <operation> <a> <b>  perform add|subtract|multiply|divide (or + - * /)
  latest               show the latest calculation
  history              show recent calculations
  results              show every result in order
  clear                clear the history
  quit                 end the session";

pub struct Session {
    calculator: Calculator,
    display_limit: usize,
    format: OutputFormat,
}

impl Session {
    pub fn new(display_limit: usize, format: OutputFormat) -> Self {
        Self { calculator: Calculator::new(), display_limit, format }
    }

    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    /// Run commands from `input` until EOF or `quit`
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<()> {
        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            if !self.handle_line(&line, &mut output)? {
                break;
            }
        }
        output.flush()?;
        Ok(())
    }

    /// Handle one line. Returns `false` once the session should end.
    pub fn handle_line<W: Write>(&mut self, line: &str, output: &mut W) -> Result<bool> {
        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                writeln!(output, "error: {e}")?;
                return Ok(true);
            }
        };
        debug!(?command, "Executing session command");

        match command {
            Command::Calculate { operation, a, b } => {
                match self.calculator.calculate(operation, a, b) {
                    Ok(result) => {
                        let calculation = Calculation::create(a, b, operation);
                        self.write_entry(output, &calculation, result)?;
                    }
                    Err(e) => writeln!(output, "error: {e}")?,
                }
            }
            Command::Latest => match self.calculator.get_latest() {
                Some(calculation) => {
                    let result = calculation.perform()?;
                    self.write_entry(output, calculation, result)?;
                }
                None => match self.format {
                    OutputFormat::Text => writeln!(output, "history is empty")?,
                    OutputFormat::Json => writeln!(output, "null")?,
                },
            },
            Command::History => self.write_history(output)?,
            Command::Results => {
                let results = self.calculator.history().get_results()?;
                match self.format {
                    OutputFormat::Text => {
                        for result in results {
                            writeln!(output, "{result}")?;
                        }
                    }
                    OutputFormat::Json => writeln!(output, "{}", serde_json::to_string(&results)?)?,
                }
            }
            Command::Clear => {
                self.calculator.clear_history();
                if self.format == OutputFormat::Text {
                    writeln!(output, "history cleared")?;
                }
            }
            Command::Help => writeln!(output, "{HELP}")?,
            Command::Quit => return Ok(false),
        }
        Ok(true)
    }

    fn write_entry<W: Write>(&self, output: &mut W, calculation: &Calculation, result: Decimal) -> Result<()> {
        match self.format {
            OutputFormat::Text => writeln!(output, "{calculation} = {result}")?,
            OutputFormat::Json => {
                writeln!(output, "{}", serde_json::to_string(&Entry { calculation, result })?)?
            }
        }
        Ok(())
    }

    fn write_history<W: Write>(&self, output: &mut W) -> Result<()> {
        let calculations = self.calculator.get_calculations();
        let skip = calculations.len().saturating_sub(self.display_limit);

        let mut entries = Vec::with_capacity(calculations.len() - skip);
        for calculation in &calculations[skip..] {
            entries.push(Entry { calculation, result: calculation.perform()? });
        }

        match self.format {
            OutputFormat::Text => {
                if entries.is_empty() {
                    writeln!(output, "history is empty")?;
                }
                for (offset, entry) in entries.iter().enumerate() {
                    writeln!(output, "{}: {} = {}", skip + offset + 1, entry.calculation, entry.result)?;
                }
            }
            OutputFormat::Json => writeln!(output, "{}", serde_json::to_string(&entries)?)?,
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_calculation_with_symbol() {
        let command: Command = "/ 10 4".parse().unwrap();
        assert_eq!(
            command,
            Command::Calculate { operation: Operation::Divide, a: Decimal::TEN, b: Decimal::from(4) }
        );
    }

    #[test]
    fn parses_keywords_case_insensitively() {
        assert_eq!("LATEST".parse::<Command>().unwrap(), Command::Latest);
        assert_eq!("exit".parse::<Command>().unwrap(), Command::Quit);
    }

    #[test]
    fn rejects_wrong_arity() {
        let err = "add 1".parse::<Command>().unwrap_err();
        assert_eq!(err.to_string(), "'add' expects 2 argument(s), got 1");
        assert!(matches!("clear now".parse::<Command>(), Err(CommandError::Arity { expected: 0, .. })));
    }

    #[test]
    fn rejects_bad_operand_and_unknown_command() {
        assert!(matches!("add 1 x".parse::<Command>(), Err(CommandError::InvalidOperand { .. })));
        assert!(matches!("pow 2 3".parse::<Command>(), Err(CommandError::Unknown(_))));
    }
}
