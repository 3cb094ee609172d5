//! Builder for constructing pushdown automata.

use crate::builder::error::BuildError;
use crate::core::{InputDecision, PushdownAutomaton, Symbol, TransitionFn};
use std::sync::Arc;

/// Builder for constructing automata with a fluent API.
///
/// The initial state, initial stack symbol, and transition function are
/// required; an initial input sequence is optional.
pub struct AutomatonBuilder<K: Symbol, Q: Symbol, I: Symbol> {
    initial_state: Option<Q>,
    initial_symbol: Option<K>,
    transition: Option<TransitionFn<K, Q, I>>,
    input: Vec<I>,
}

impl<K: Symbol + 'static, Q: Symbol + 'static, I: Symbol + 'static> AutomatonBuilder<K, Q, I> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial_state: None,
            initial_symbol: None,
            transition: None,
            input: Vec::new(),
        }
    }

    /// Set the initial state (required).
    pub fn initial_state(mut self, state: Q) -> Self {
        self.initial_state = Some(state);
        self
    }

    /// Set the initial control-stack symbol (required).
    pub fn initial_symbol(mut self, symbol: K) -> Self {
        self.initial_symbol = Some(symbol);
        self
    }

    /// Set the transition function (required).
    pub fn transition<F>(mut self, transition: F) -> Self
    where
        F: Fn(&Q, Option<&K>) -> InputDecision<K, Q, I> + Send + Sync + 'static,
    {
        self.transition = Some(Arc::new(transition));
        self
    }

    /// Set an initial input sequence (optional), first element consumed
    /// first.
    pub fn input<S>(mut self, symbols: S) -> Self
    where
        S: IntoIterator<Item = I>,
    {
        self.input = symbols.into_iter().collect();
        self
    }

    /// Build the automaton.
    /// Returns an error if required fields are missing.
    pub fn build(self) -> Result<PushdownAutomaton<K, Q, I>, BuildError> {
        let initial_state = self.initial_state.ok_or(BuildError::MissingInitialState)?;
        let initial_symbol = self.initial_symbol.ok_or(BuildError::MissingInitialSymbol)?;
        let transition = self.transition.ok_or(BuildError::MissingTransitionFn)?;

        let mut automaton = PushdownAutomaton::new(
            initial_state,
            initial_symbol,
            move |state: &Q, top: Option<&K>| transition(state, top),
        );

        if !self.input.is_empty() {
            automaton.set_input(self.input);
        }

        Ok(automaton)
    }
}

impl<K: Symbol + 'static, Q: Symbol + 'static, I: Symbol + 'static> Default
    for AutomatonBuilder<K, Q, I>
{
    fn default() -> Self {
        Self::new()
    }
}
