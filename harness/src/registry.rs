//! Declarative exercise catalog records.
//!
//! A catalog registers one [`Exercise`] per problem: its name, a
//! reference implementation, the candidate body under test, and an
//! ordered example list. Registration order is execution and report
//! order; runs must be deterministic.

use serde::Serialize;
use tracing::warn;

use crate::solver::{Reference, Solver, Violation};
use crate::value::Value;

/// What an example demands of the candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseKind {
    /// The trivial/terminal case: a correct answer may be produced
    /// without delegating.
    Base,
    /// The general case: the candidate must call `solve` at least once
    /// while producing the answer.
    Step,
}

/// One example input for an exercise.
#[derive(Debug, Clone, PartialEq)]
pub struct Case {
    pub args: Vec<Value>,
    pub kind: CaseKind,
}

/// An example the candidate may answer without delegating.
pub fn base(args: Vec<Value>) -> Case {
    Case {
        args,
        kind: CaseKind::Base,
    }
}

/// An example the candidate must delegate for.
pub fn step(args: Vec<Value>) -> Case {
    Case {
        args,
        kind: CaseKind::Step,
    }
}

/// What a candidate produced for one example.
#[derive(Debug, Clone, PartialEq)]
pub enum Answer {
    /// A real result, to be compared against the reference.
    Solved(Value),
    /// The body is still a stub. Distinguishable from every valid
    /// output, including empty lists, zero, and `false`.
    Todo,
}

/// An exercise body under test. Receives the injected solver and the
/// example's argument tuple; propagates solver violations with `?`.
pub type Candidate = fn(&mut Solver, &[Value]) -> Result<Answer, Violation>;

/// One catalog entry, built once at startup and read-only afterwards.
pub struct Exercise {
    /// Unique name, used in reports.
    pub name: &'static str,
    /// Ground-truth implementation.
    pub reference: Reference,
    /// Body under test.
    pub candidate: Candidate,
    /// Ordered example list driven by the runner.
    pub examples: Vec<Case>,
}

/// Ordered collection of exercises.
#[derive(Default)]
pub struct Registry {
    exercises: Vec<Exercise>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an exercise. A repeated name replaces the earlier entry in
    /// place (catalogs override by re-registering), keeping its original
    /// position in the run order.
    pub fn register(&mut self, exercise: Exercise) {
        if let Some(existing) = self
            .exercises
            .iter_mut()
            .find(|existing| existing.name == exercise.name)
        {
            warn!(name = exercise.name, "replacing exercise registration");
            *existing = exercise;
        } else {
            self.exercises.push(exercise);
        }
    }

    /// All exercises, in registration order.
    pub fn exercises(&self) -> &[Exercise] {
        &self.exercises
    }

    pub fn len(&self) -> usize {
        self.exercises.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty()
    }
}
