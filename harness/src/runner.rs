//! Drives exercises against their example lists.
//!
//! One exercise at a time, examples strictly in order. For each example
//! the runner arms the exercise's solver, computes the expected output
//! from the reference, invokes the candidate with the solver injected,
//! and checks three things in order:
//!
//! 1. a solver violation propagated out of the candidate halts the run
//!    before anything else (an invalid recursion measure makes the
//!    result meaningless even if it happens to be right),
//! 2. the output must equal the reference's,
//! 3. a step example must have delegated at least once.
//!
//! A `Todo` answer skips the rest of the exercise without failing the
//! run. The first hard failure aborts everything.

use tracing::debug;

use crate::outcome::{Failure, Summary, Verdict};
use crate::registry::{Answer, CaseKind, Exercise, Registry};
use crate::report::Report;
use crate::solver::Solver;
use crate::value::ArgList;

/// Drive one exercise through its example list.
pub fn run_exercise(exercise: &Exercise, report: &mut dyn Report) -> Result<Verdict, Failure> {
    report.exercise_started(exercise.name);
    let mut solver = Solver::new(exercise.reference);

    for (index, case) in exercise.examples.iter().enumerate() {
        solver.begin_case(&case.args);
        let expected = (exercise.reference)(&case.args);

        let answer = (exercise.candidate)(&mut solver, &case.args)
            .map_err(|violation| Failure::from_violation(exercise.name, index, violation))?;

        let got = match answer {
            Answer::Todo => {
                debug!(exercise = exercise.name, case = index, "stub body, skipping");
                report.exercise_skipped(exercise.name);
                return Ok(Verdict::Skipped);
            }
            Answer::Solved(value) => value,
        };

        if got != expected {
            return Err(Failure::WrongAnswer {
                exercise: exercise.name.to_string(),
                case: index,
                args: ArgList(case.args.clone()),
                expected,
                got,
            });
        }

        if case.kind == CaseKind::Step && !solver.delegated() {
            return Err(Failure::MissingDelegation {
                exercise: exercise.name.to_string(),
                case: index,
                args: ArgList(case.args.clone()),
            });
        }

        debug!(exercise = exercise.name, case = index, "example passed");
        report.case_passed(exercise.name, index);
    }

    report.exercise_passed(exercise.name);
    Ok(Verdict::Passed)
}

/// Drive every registered exercise, in registration order, halting on
/// the first failure.
pub fn run_all(registry: &Registry, report: &mut dyn Report) -> Result<Summary, Failure> {
    report.run_started(registry.len());
    let mut summary = Summary::default();

    for exercise in registry.exercises() {
        match run_exercise(exercise, report)? {
            Verdict::Passed => summary.passed += 1,
            Verdict::Skipped => {
                summary.skipped += 1;
                summary.skipped_exercises.push(exercise.name.to_string());
            }
        }
    }

    Ok(summary)
}
