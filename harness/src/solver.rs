//! The injected "already solved" helper handed to every candidate.
//!
//! A candidate body never recurses into itself through the harness.
//! Instead it calls [`Solver::solve`], which behaves like a correct
//! implementation of the exercise currently under test: it answers from
//! the exercise's reference function. Before answering, every call is
//! checked against the shrinking invariant: the arguments handed down
//! must be structurally less than the arguments of the example currently
//! being evaluated.
//!
//! One `Solver` is built per exercise and re-armed per example by the
//! runner; candidates only ever see it as `&mut Solver`.

use serde::Serialize;
use thiserror::Error;

use crate::order::args_lt;
use crate::value::{ArgList, Value};

/// Ground-truth implementation of an exercise. Pure, and correct for
/// every input its example list can produce.
pub type Reference = fn(&[Value]) -> Value;

/// A rule violation raised inside [`Solver::solve`].
///
/// Violations abort the whole run; candidates just propagate them
/// with `?`.
#[derive(Debug, Clone, PartialEq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Violation {
    /// `solve` was called while no example was being evaluated. This is
    /// harness misuse (calling a candidate outside the runner), not bad
    /// exercise data.
    #[error("solve called with no active example")]
    NoActiveCase,
    /// The arguments handed to `solve` were not structurally less than
    /// the arguments of the active example.
    #[error(
        "non-shrinking argument: the exercise received {outer} but {delegate} was passed to solve"
    )]
    NonShrinking {
        /// Arguments of the example being evaluated.
        outer: ArgList,
        /// Arguments the candidate passed down.
        delegate: ArgList,
    },
}

/// Stand-in for a correct solution to the exercise under test.
#[derive(Debug)]
pub struct Solver {
    reference: Reference,
    outer: Option<Vec<Value>>,
    delegated: bool,
}

impl Solver {
    pub(crate) fn new(reference: Reference) -> Self {
        Self {
            reference,
            outer: None,
            delegated: false,
        }
    }

    /// Arm the solver for one example: remember the outer arguments and
    /// clear the delegation flag.
    pub(crate) fn begin_case(&mut self, args: &[Value]) {
        self.outer = Some(args.to_vec());
        self.delegated = false;
    }

    /// Whether the candidate delegated at least once since `begin_case`.
    pub(crate) fn delegated(&self) -> bool {
        self.delegated
    }

    /// Solve a strictly smaller instance of the current exercise.
    ///
    /// Checks the shrinking invariant on every call, then answers with
    /// the reference result, so the candidate is always handed a
    /// correct sub-answer, whatever the state of its own logic.
    pub fn solve(&mut self, args: &[Value]) -> Result<Value, Violation> {
        let outer = self.outer.as_deref().ok_or(Violation::NoActiveCase)?;

        if !args_lt(args, outer) {
            return Err(Violation::NonShrinking {
                outer: ArgList(outer.to_vec()),
                delegate: ArgList(args.to_vec()),
            });
        }

        self.delegated = true;
        Ok((self.reference)(args))
    }
}
