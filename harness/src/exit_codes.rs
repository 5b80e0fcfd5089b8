//! Stable exit codes for the verification CLI.

use crate::outcome::Failure;

/// Every exercise passed or was skipped as a stub.
pub const OK: i32 = 0;
/// A wrong answer, missing delegation, or non-shrinking argument.
pub const FAILED: i32 = 1;
/// Harness contract violated (e.g. solve called outside a run).
pub const CONTRACT: i32 = 2;

/// Exit code for a hard failure.
pub fn for_failure(failure: &Failure) -> i32 {
    match failure {
        Failure::Contract { .. } => CONTRACT,
        Failure::WrongAnswer { .. }
        | Failure::MissingDelegation { .. }
        | Failure::NonShrinking { .. } => FAILED,
    }
}
