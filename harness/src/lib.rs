//! Verification engine for recursion exercises.
//!
//! Each exercise in a catalog is solved against an injected helper that
//! already knows the answer: the candidate body calls
//! [`solver::Solver::solve`] instead of recursing into itself, and the
//! solver answers from the exercise's reference implementation. The
//! engine enforces a structural discipline on those calls:
//!
//! - every `solve` call's arguments must strictly shrink under the
//!   [`order`] comparison against the example being evaluated,
//! - `step` examples must delegate at least once; `base` examples are
//!   exempt,
//! - outputs must match the reference exactly.
//!
//! The crate is pure and deterministic: no I/O beyond `tracing`
//! diagnostics. Catalogs and presentation live with the caller; the
//! engine consumes [`registry::Exercise`] records and emits structured
//! [`outcome`] data plus [`report::Report`] progress signals.

pub mod exit_codes;
pub mod order;
pub mod outcome;
pub mod registry;
pub mod report;
pub mod runner;
pub mod solver;
pub mod value;
