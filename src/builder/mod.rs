//! Builder API for ergonomic automaton construction.
//!
//! This module provides a fluent builder for creating automata with
//! minimal boilerplate while maintaining type safety.
//!
//! # Example
//!
//! ```rust
//! use pushdown::builder::AutomatonBuilder;
//! use pushdown::core::{AutomatonAction, InputDecision, RunResult};
//!
//! let automaton = AutomatonBuilder::<char, u8, char>::new()
//!     .initial_state(0)
//!     .initial_symbol('Z')
//!     .transition(|_state, _top| {
//!         InputDecision::Ignore(AutomatonAction::Resolve(RunResult::Accept))
//!     })
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(automaton.state(), &0);
//! ```

pub mod automaton;
pub mod error;

pub use automaton::AutomatonBuilder;
pub use error::BuildError;
