//! Self-verifying recursion exercise harness.
//!
//! Runs the exercise catalog against the verification engine: every
//! solution must delegate strictly smaller instances of its own problem
//! to the injected solver. `check` drives all exercises in order and
//! stops at the first failure.

mod catalog;
mod logging;
mod report;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use descent_harness::exit_codes;
use descent_harness::report::NullReport;
use descent_harness::runner::run_all;
use serde_json::json;
use tracing::debug;

use crate::report::{ConsoleReport, print_failure, print_summary};

#[derive(Parser)]
#[command(
    name = "descent",
    version,
    about = "Self-verifying recursion exercise harness"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run every exercise in catalog order, stopping at the first
    /// failure.
    Check {
        /// Emit one JSON object instead of console progress.
        #[arg(long)]
        json: bool,
    },
    /// Print exercise names in run order.
    List,
}

fn main() {
    logging::init();
    match run() {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("{err:#}");
            std::process::exit(exit_codes::FAILED);
        }
    }
}

fn run() -> Result<i32> {
    let cli = Cli::parse();
    match cli.command.unwrap_or(Command::Check { json: false }) {
        Command::Check { json } => cmd_check(json),
        Command::List => cmd_list(),
    }
}

fn cmd_list() -> Result<i32> {
    for exercise in catalog::build().exercises() {
        println!("{}", exercise.name);
    }
    Ok(exit_codes::OK)
}

fn cmd_check(json: bool) -> Result<i32> {
    let registry = catalog::build();
    debug!(exercises = registry.len(), json, "catalog built");

    if json {
        return match run_all(&registry, &mut NullReport) {
            Ok(summary) => {
                let line = serde_json::to_string(&json!({
                    "outcome": "ok",
                    "summary": summary,
                }))
                .context("serialize summary")?;
                println!("{line}");
                Ok(exit_codes::OK)
            }
            Err(failure) => {
                let line = serde_json::to_string(&json!({
                    "outcome": "failed",
                    "failure": failure,
                }))
                .context("serialize failure")?;
                println!("{line}");
                Ok(exit_codes::for_failure(&failure))
            }
        };
    }

    match run_all(&registry, &mut ConsoleReport) {
        Ok(summary) => {
            print_summary(&summary);
            Ok(exit_codes::OK)
        }
        Err(failure) => {
            print_failure(&failure);
            Ok(exit_codes::for_failure(&failure))
        }
    }
}
