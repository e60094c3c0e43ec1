//! Command-line interface for solving stop-placement project documents.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod solve;

pub use error::CliError;

use solve::{SolveArgs, run_solve};

const ARG_SOLVE_DOCUMENT: &str = "document";
const ARG_SOLVE_MAX_WALK_DISTANCE: &str = "max-walk-distance";
const ARG_SOLVE_DEMAND_CATEGORY: &str = "demand-category";
const ARG_SOLVE_OUTPUT: &str = "output";
const ENV_SOLVE_DOCUMENT: &str = "STOPCOVER_CMDS_SOLVE_DOCUMENT_PATH";

/// Run the CLI with the current process arguments and environment.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Solve(args) => run_solve(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "stopcover",
    about = "Place bus stops so every hostel is within walking distance",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Solve a project document and print or export the result.
    Solve(SolveArgs),
}

#[cfg(test)]
mod tests;
