//! Pushdown: a generic pushdown automaton simulation engine
//!
//! The engine is a state-machine interpreter driven by an externally
//! supplied transition function, operating over an explicit symbol stack
//! and an input symbol queue. All domain semantics — which grammar to
//! recognize, when to accept or reject — live in the transition function
//! the caller supplies; the engine owns the configuration and applies
//! the function's decisions one step at a time.
//!
//! # Core Concepts
//!
//! - **Stack**: a generic LIFO container with a closed, uniformly
//!   dispatched action set
//! - **Transition function**: a stored closure mapping
//!   `(state, top of stack)` to an input decision and action
//! - **Step**: exactly one transition-function query and at most one
//!   control-stack mutation; the caller controls pacing
//!
//! # Example
//!
//! ```rust
//! use pushdown::core::{
//!     AutomatonAction, InputDecision, PushdownAutomaton, RunResult, StackAction,
//! };
//! use pushdown::driver::run;
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Clone, Debug, Serialize, Deserialize)]
//! enum Mark {
//!     Bottom,
//!     Paren,
//! }
//!
//! // Balanced-parentheses recognizer.
//! let mut automaton = PushdownAutomaton::new((), Mark::Bottom, |_state: &(), top| {
//!     let top = top.cloned();
//!     InputDecision::Pop(Box::new(move |symbol| match (symbol, top) {
//!         (None, Some(Mark::Bottom)) => AutomatonAction::Resolve(RunResult::Accept),
//!         (Some('('), _) => AutomatonAction::Continue {
//!             stack_action: StackAction::Push(Mark::Paren),
//!             next_state: (),
//!         },
//!         (Some(')'), Some(Mark::Paren)) => AutomatonAction::Continue {
//!             stack_action: StackAction::Delete,
//!             next_state: (),
//!         },
//!         _ => AutomatonAction::Resolve(RunResult::Reject),
//!     }))
//! });
//!
//! automaton.set_input("(())".chars());
//! assert_eq!(run(&mut automaton, 100), Ok(RunResult::Accept));
//! ```

pub mod builder;
pub mod core;
pub mod driver;
pub mod snapshot;

// Re-export commonly used types
pub use crate::core::{
    AutomatonAction, InputDecision, PushdownAutomaton, RunResult, Stack, StackAction, Symbol,
};
