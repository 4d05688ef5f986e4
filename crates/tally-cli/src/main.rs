use clap::Parser;
use std::io;
use tally_cli::cli::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = tally_cli::bootstrap(&cli)?;

    let stdin = io::stdin();
    tally_cli::run(&cli, &config, stdin.lock(), io::stdout().lock())
}
