//! Console rendering of run progress and outcomes.
//!
//! The engine emits structured events and data; everything printable
//! lives here. Progress and summaries go to stdout, failure details to
//! stderr.

use std::io::{self, Write};

use descent_harness::outcome::{Failure, Summary};
use descent_harness::report::Report;

/// Renders progress as one line per exercise with a dot per example.
#[derive(Debug, Default)]
pub struct ConsoleReport;

impl Report for ConsoleReport {
    fn run_started(&mut self, total: usize) {
        println!("running {total} exercises");
    }

    fn exercise_started(&mut self, name: &str) {
        print!("  {name:<20} ");
        let _ = io::stdout().flush();
    }

    fn case_passed(&mut self, _name: &str, _index: usize) {
        print!(".");
        let _ = io::stdout().flush();
    }

    fn exercise_passed(&mut self, _name: &str) {
        println!(" ok");
    }

    fn exercise_skipped(&mut self, _name: &str) {
        println!(" skipped (todo)");
    }
}

/// Render a hard failure with its full payload.
pub fn print_failure(failure: &Failure) {
    println!();
    eprintln!("TEST FAILED");
    eprintln!("  {failure}");
    match failure {
        Failure::WrongAnswer { case, .. }
        | Failure::MissingDelegation { case, .. }
        | Failure::NonShrinking { case, .. } => {
            eprintln!("  (example #{case}, counting from 0)");
        }
        Failure::Contract { .. } => {}
    }
}

/// Render the end-of-run tally.
pub fn print_summary(summary: &Summary) {
    println!("passed: {}", summary.passed);
    if summary.all_solved() {
        println!("all exercises solved. now you know recursion ;]");
    } else {
        println!(
            "skipped: {} still unimplemented: {}",
            summary.skipped,
            summary.skipped_exercises.join(", ")
        );
    }
}
