//! Progress signals emitted while a run is in flight.
//!
//! The core hands the reporting layer structured events and data only;
//! rendering (console dots, JSON, anything else) is the caller's
//! business. Terminal outcomes travel as return values
//! ([`crate::outcome::Summary`] / [`crate::outcome::Failure`]), not
//! through this trait.

/// Receiver for per-example progress signals.
///
/// All methods default to no-ops so a reporter only implements the
/// events it renders.
pub trait Report {
    /// A run over `total` exercises is starting.
    fn run_started(&mut self, total: usize) {
        let _ = total;
    }

    /// An exercise's example list is about to be driven.
    fn exercise_started(&mut self, name: &str) {
        let _ = name;
    }

    /// Example `index` of `name` passed.
    fn case_passed(&mut self, name: &str, index: usize) {
        let _ = (name, index);
    }

    /// Every example of `name` passed.
    fn exercise_passed(&mut self, name: &str) {
        let _ = name;
    }

    /// `name` is still a stub and was skipped.
    fn exercise_skipped(&mut self, name: &str) {
        let _ = name;
    }
}

/// Discards every signal. Useful for tests and machine-readable modes
/// that only want the returned outcome data.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullReport;

impl Report for NullReport {}
