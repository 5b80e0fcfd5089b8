//! Run outcomes: the structured data handed to the reporting layer.

use serde::Serialize;
use thiserror::Error;

use crate::solver::Violation;
use crate::value::{ArgList, Value};

/// Terminal state of one exercise that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Every example passed.
    Passed,
    /// The candidate body is still a stub; remaining examples were not
    /// driven. Not a failure, surfaced separately in the summary.
    Skipped,
}

/// A hard failure. The first one aborts the whole run: one problem at
/// a time.
///
/// Payloads carry everything the reporting layer needs; the core never
/// formats them for display beyond the `Display` impl used in logs.
#[derive(Debug, Clone, PartialEq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Failure {
    /// The candidate's output differs from the reference's.
    #[error("wrong answer in {exercise}{args}: expected {expected}, got {got}")]
    WrongAnswer {
        exercise: String,
        case: usize,
        args: ArgList,
        expected: Value,
        got: Value,
    },
    /// The output was correct but the required delegation never
    /// happened. The technique is under test, not just the answer.
    #[error("missing call to solve in {exercise}{args}: this case requires delegation")]
    MissingDelegation {
        exercise: String,
        case: usize,
        args: ArgList,
    },
    /// A `solve` call's arguments were not structurally less than the
    /// example's. Reported before any wrong-answer check, since an invalid
    /// recursion measure makes the result meaningless.
    #[error("non-shrinking argument in {exercise}: the exercise received {outer} but {delegate} was passed to solve")]
    NonShrinking {
        exercise: String,
        case: usize,
        outer: ArgList,
        delegate: ArgList,
    },
    /// Harness misuse, not bad exercise data.
    #[error("harness contract violated in {exercise}: {detail}")]
    Contract { exercise: String, detail: String },
}

impl Failure {
    pub(crate) fn from_violation(exercise: &str, case: usize, violation: Violation) -> Self {
        match violation {
            Violation::NoActiveCase => Failure::Contract {
                exercise: exercise.to_string(),
                detail: "solve called with no active example".to_string(),
            },
            Violation::NonShrinking { outer, delegate } => Failure::NonShrinking {
                exercise: exercise.to_string(),
                case,
                outer,
                delegate,
            },
        }
    }
}

/// End-of-run tally over all exercises.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Summary {
    /// Exercises whose every example passed.
    pub passed: usize,
    /// Exercises skipped as still-unimplemented stubs.
    pub skipped: usize,
    /// Names of the skipped exercises, in run order.
    pub skipped_exercises: Vec<String>,
}

impl Summary {
    /// True when nothing was left unimplemented.
    pub fn all_solved(&self) -> bool {
        self.skipped == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args;

    #[test]
    fn wrong_answer_serializes_with_full_payload() {
        let failure = Failure::WrongAnswer {
            exercise: "pow".to_string(),
            case: 3,
            args: ArgList(args![2, 6]),
            expected: Value::Int(64),
            got: Value::Int(32),
        };
        let json = serde_json::to_value(&failure).expect("serialize");
        assert_eq!(json["kind"], "wrong_answer");
        assert_eq!(json["exercise"], "pow");
        assert_eq!(json["args"], serde_json::json!([2, 6]));
        assert_eq!(json["expected"], 64);
        assert_eq!(json["got"], 32);
    }

    #[test]
    fn non_shrinking_display_names_both_tuples() {
        let failure = Failure::NonShrinking {
            exercise: "pow".to_string(),
            case: 0,
            outer: ArgList(args![2, 6]),
            delegate: ArgList(args![2, 6]),
        };
        let text = failure.to_string();
        assert!(text.contains("pow"));
        assert!(text.contains("(2, 6)"));
    }

    #[test]
    fn summary_tracks_unsolved_exercises() {
        let mut summary = Summary::default();
        assert!(summary.all_solved());
        summary.skipped += 1;
        summary.skipped_exercises.push("list_sort".to_string());
        assert!(!summary.all_solved());
    }
}
