//! Driver error types.

use thiserror::Error;

/// Errors that can occur while driving an automaton.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DriverError {
    /// The step budget ran out before the automaton resolved
    #[error("Automaton did not resolve within {limit} steps")]
    StepLimitExceeded { limit: usize },
}
