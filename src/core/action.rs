//! The action algebra driving the automaton.
//!
//! Transition functions communicate with the engine through a small set
//! of sum types: what to do with the input queue ([`InputDecision`]),
//! whether to continue or halt ([`AutomatonAction`]), and which stack
//! mutation to apply ([`StackAction`]). Every variant is matched
//! exhaustively by the engine, so adding a case is a compile error until
//! it is handled everywhere.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A single stack operation, applied through [`Stack::apply`].
///
/// This is the uniform command set for caller-selected stack mutations.
/// Only `Pop` produces a value; every other variant applies silently.
///
/// [`Stack::apply`]: crate::core::Stack::apply
///
/// # Example
///
/// ```rust
/// use pushdown::core::{Stack, StackAction};
///
/// let mut stack = Stack::from(vec![1, 2, 3]);
/// stack.apply(StackAction::Push(4));
/// assert_eq!(stack.apply(StackAction::Pop { default: None }), Some(4));
/// assert_eq!(stack.apply(StackAction::Delete), None);
/// assert_eq!(stack.peek(), Some(&2));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum StackAction<T> {
    /// Pop and discard the top symbol. A no-op on an empty stack.
    Delete,

    /// Push one symbol onto the top.
    Push(T),

    /// Remove and return the top symbol, or `default` if the stack is
    /// empty.
    Pop { default: Option<T> },

    /// Leave the stack untouched.
    Ignore,

    /// Remove every symbol.
    Clear,
}

/// Terminal verdict of a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunResult {
    /// The automaton accepted its input.
    Accept,
    /// The automaton rejected its input.
    Reject,
}

/// What the automaton does with the current step.
///
/// Returned (possibly via an input continuation) by the transition
/// function. `Continue` mutates the control stack and adopts a new
/// state; `Resolve` halts the run, leaving stack and state untouched.
#[derive(Clone, Debug, PartialEq)]
pub enum AutomatonAction<K, Q> {
    /// Apply `stack_action` to the control stack and move to
    /// `next_state`.
    Continue {
        stack_action: StackAction<K>,
        next_state: Q,
    },

    /// Halt with the given verdict. The control stack and current state
    /// are left exactly as they were when the step began.
    Resolve(RunResult),
}

/// Continuation invoked with the popped input symbol (`None` when the
/// input queue is empty).
pub type Continuation<K, Q, I> = Box<dyn FnOnce(Option<I>) -> AutomatonAction<K, Q>>;

/// Whether a step consumes an input symbol before acting.
///
/// The transition function returns this per step. `Pop` consumes one
/// symbol from the input queue and forwards it to the continuation;
/// `Ignore` leaves the queue untouched and carries the action directly.
pub enum InputDecision<K, Q, I> {
    /// Pop one input symbol (or `None` if the queue is empty) and pass
    /// it to the continuation to obtain the step's action.
    Pop(Continuation<K, Q, I>),

    /// Do not touch the input queue; the action is already decided.
    Ignore(AutomatonAction<K, Q>),
}

/// Type alias for stored transition functions.
///
/// The engine's only dynamic dispatch: a single-operation capability
/// mapping `(current state, top of control stack)` to an
/// [`InputDecision`]. Queried exactly once per step. The engine does not
/// validate totality — the closure must cover every `(state, symbol)`
/// pair the caller intends to reach, including `None` for an empty
/// control stack.
pub type TransitionFn<K, Q, I> =
    Arc<dyn Fn(&Q, Option<&K>) -> InputDecision<K, Q, I> + Send + Sync>;
