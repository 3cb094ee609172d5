//! Core automaton types and logic.
//!
//! This module contains the engine proper:
//! - Alphabet bounds via the `Symbol` trait
//! - The generic LIFO `Stack` and its closed `StackAction` command set
//! - The action algebra returned by transition functions
//! - The `PushdownAutomaton` itself, stepped one transition at a time
//! - Immutable step tracing
//!
//! Everything here is synchronous and single-threaded: `step()` never
//! blocks, awaits, or loops internally.

mod action;
mod automaton;
mod stack;
mod symbol;
mod trace;

pub use action::{
    AutomatonAction, Continuation, InputDecision, RunResult, StackAction, TransitionFn,
};
pub use automaton::PushdownAutomaton;
pub use stack::Stack;
pub use symbol::Symbol;
pub use trace::{StepRecord, StepTrace};
