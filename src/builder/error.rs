//! Build errors for the automaton builder.

use thiserror::Error;

/// Errors that can occur when building an automaton.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial_state(state) before .build()")]
    MissingInitialState,

    #[error("Initial stack symbol not specified. Call .initial_symbol(symbol) before .build()")]
    MissingInitialSymbol,

    #[error("Transition function not specified. Call .transition(f) before .build()")]
    MissingTransitionFn,
}
