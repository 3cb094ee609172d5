//! Bounded driver loop.
//!
//! The engine never drives itself to completion; this module is the
//! conventional host loop, packaged with the one guard every host needs:
//! a step budget against non-terminating transition functions. The
//! engine cannot detect non-termination (a transition function that
//! never resolves is a caller bug, not an engine error), so the budget
//! lives here at the driving edge.

use crate::core::{PushdownAutomaton, RunResult, Symbol};

pub mod error;

pub use error::DriverError;

/// Step an automaton until it resolves, up to `max_steps` steps.
///
/// Stops at the first resolution observed, so a hosted run never
/// re-steps a resolved automaton. Returns an error if the budget is
/// exhausted first — the automaton is left wherever it got to, and the
/// caller may inspect or continue it.
///
/// # Example
///
/// ```rust
/// use pushdown::core::{
///     AutomatonAction, InputDecision, PushdownAutomaton, RunResult, StackAction,
/// };
/// use pushdown::driver::run;
///
/// let mut automaton = PushdownAutomaton::new((), 'Z', |_state: &(), _top: Option<&char>| {
///     InputDecision::Pop(Box::new(|symbol: Option<u8>| match symbol {
///         Some(_) => AutomatonAction::Continue {
///             stack_action: StackAction::Ignore,
///             next_state: (),
///         },
///         None => AutomatonAction::Resolve(RunResult::Accept),
///     }))
/// });
///
/// automaton.set_input(vec![1, 2, 3]);
/// assert_eq!(run(&mut automaton, 100), Ok(RunResult::Accept));
/// ```
pub fn run<K: Symbol, Q: Symbol, I: Symbol>(
    automaton: &mut PushdownAutomaton<K, Q, I>,
    max_steps: usize,
) -> Result<RunResult, DriverError> {
    if let Some(result) = automaton.result() {
        return Ok(result);
    }

    for _ in 0..max_steps {
        if let Some(result) = automaton.step() {
            return Ok(result);
        }
    }

    Err(DriverError::StepLimitExceeded { limit: max_steps })
}
