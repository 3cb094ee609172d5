//! The pushdown automaton engine.
//!
//! The automaton never drives itself to completion: each [`step`] call
//! performs exactly one transition-function query and at most one
//! control-stack mutation, and the caller decides when to stop. This
//! keeps pacing (and step budgets, see [`driver`]) entirely in the
//! caller's hands and makes single-step debugging trivial.
//!
//! [`step`]: PushdownAutomaton::step
//! [`driver`]: crate::driver

use crate::core::action::{AutomatonAction, InputDecision, RunResult, StackAction, TransitionFn};
use crate::core::stack::Stack;
use crate::core::symbol::Symbol;
use crate::core::trace::{StepRecord, StepTrace};
use chrono::Utc;
use std::sync::Arc;

/// A pushdown automaton over three independent alphabets.
///
/// `K` is the control-stack alphabet, `Q` the state alphabet, and `I`
/// the input alphabet. All domain semantics live in the caller-supplied
/// transition function; the engine only owns the configuration (control
/// stack, current state, remaining input, resolved result) and applies
/// the function's decisions one step at a time.
///
/// # Example
///
/// ```rust
/// use pushdown::core::{
///     AutomatonAction, InputDecision, PushdownAutomaton, RunResult, StackAction,
/// };
///
/// // A one-state automaton that consumes its whole input, then accepts.
/// let mut automaton = PushdownAutomaton::new((), (), |_state: &(), _top: Option<&()>| {
///     InputDecision::Pop(Box::new(|symbol: Option<char>| match symbol {
///         Some(_) => AutomatonAction::Continue {
///             stack_action: StackAction::Ignore,
///             next_state: (),
///         },
///         None => AutomatonAction::Resolve(RunResult::Accept),
///     }))
/// });
///
/// automaton.set_input(vec!['a', 'b']);
/// while automaton.step().is_none() {}
/// assert_eq!(automaton.result(), Some(RunResult::Accept));
/// ```
pub struct PushdownAutomaton<K: Symbol, Q: Symbol, I: Symbol> {
    control: Stack<K>,
    state: Q,
    input: Stack<I>,
    result: Option<RunResult>,
    transition: TransitionFn<K, Q, I>,
    trace: StepTrace<Q>,
    // Restored verbatim by reset(); never touched otherwise.
    initial_state: Q,
    initial_symbol: K,
}

impl<K: Symbol, Q: Symbol, I: Symbol> PushdownAutomaton<K, Q, I> {
    /// Create a new automaton.
    ///
    /// Post-condition: the control stack contains exactly
    /// `[initial_symbol]`, the state is `initial_state`, the result is
    /// unresolved, and the input queue is empty.
    ///
    /// The transition function must cover every `(state, top-of-stack)`
    /// pair the caller intends to reach, including `None` for an empty
    /// control stack; the engine does not validate totality.
    pub fn new<F>(initial_state: Q, initial_symbol: K, transition: F) -> Self
    where
        F: Fn(&Q, Option<&K>) -> InputDecision<K, Q, I> + Send + Sync + 'static,
    {
        Self {
            control: Stack::from(vec![initial_symbol.clone()]),
            state: initial_state.clone(),
            input: Stack::new(),
            result: None,
            transition: Arc::new(transition),
            trace: StepTrace::new(),
            initial_state,
            initial_symbol,
        }
    }

    /// Replace the input queue wholesale with `symbols`, first element
    /// consumed first. Any prior remaining input is discarded, even
    /// mid-run — sequencing a call between steps is the automaton
    /// designer's responsibility.
    pub fn set_input<S>(&mut self, symbols: S)
    where
        S: IntoIterator<Item = I>,
    {
        let mut items: Vec<I> = symbols.into_iter().collect();
        items.reverse();
        self.input = Stack::from(items);
    }

    /// Execute exactly one transition.
    ///
    /// 1. Query the transition function with the current state and the
    ///    top of the control stack (`None` if empty — an empty stack is
    ///    never auto-resolved; the termination decision belongs to the
    ///    transition function).
    /// 2. If the decision is `Pop`, pop one input symbol (`None` if the
    ///    queue is empty) and run the continuation; if `Ignore`, use the
    ///    embedded action.
    /// 3. `Resolve` records the verdict, leaving stack and state exactly
    ///    as they were. `Continue` applies the stack action and adopts
    ///    the new state.
    ///
    /// Returns the result field after the step, as a convenience for
    /// driver loops.
    ///
    /// A call after resolution is not guarded: it re-queries the
    /// transition function and may re-resolve or mutate further. Guarding
    /// against that is the caller's responsibility (the transition
    /// function sees the same configuration it resolved from).
    pub fn step(&mut self) -> Option<RunResult> {
        let decision = (self.transition)(&self.state, self.control.peek());

        let (action, consumed) = match decision {
            InputDecision::Pop(continuation) => {
                let symbol = self.input.pop();
                let consumed = symbol.is_some();
                (continuation(symbol), consumed)
            }
            InputDecision::Ignore(action) => (action, false),
        };

        match action {
            AutomatonAction::Resolve(result) => {
                self.result = Some(result);
            }
            AutomatonAction::Continue {
                stack_action,
                next_state,
            } => {
                self.control.apply(stack_action);
                self.trace = self.trace.record(StepRecord {
                    from: self.state.clone(),
                    to: next_state.clone(),
                    timestamp: Utc::now(),
                    consumed_input: consumed,
                });
                self.state = next_state;
            }
        }

        self.result
    }

    /// Restore the post-construction configuration: control stack
    /// `[initial_symbol]`, initial state, unresolved result, empty input
    /// queue, empty trace. Does NOT revert a transition function
    /// replaced via [`override_transition`](Self::override_transition).
    pub fn reset(&mut self) {
        self.control = Stack::from(vec![self.initial_symbol.clone()]);
        self.state = self.initial_state.clone();
        self.input = Stack::new();
        self.result = None;
        self.trace = StepTrace::new();
    }

    /// The resolved verdict, or `None` while the run is still open.
    pub fn result(&self) -> Option<RunResult> {
        self.result
    }

    /// Get the current state.
    pub fn state(&self) -> &Q {
        &self.state
    }

    /// Get the stored transition function (a cheap handle clone).
    pub fn transition_fn(&self) -> TransitionFn<K, Q, I> {
        Arc::clone(&self.transition)
    }

    /// The top of the control stack, or `None` if it is empty.
    pub fn top_of_stack(&self) -> Option<&K> {
        self.control.peek()
    }

    /// The next input symbol to be consumed, or `None` if the queue is
    /// empty.
    pub fn next_input(&self) -> Option<&I> {
        self.input.peek()
    }

    /// A structural copy of the control stack. Mutating the copy never
    /// affects the live stack.
    pub fn copy_stack(&self) -> Stack<K> {
        self.control.clone()
    }

    /// A structural copy of the remaining input.
    pub fn copy_remaining_input(&self) -> Stack<I> {
        self.input.clone()
    }

    /// The trace of `Continue` steps taken since construction or the
    /// last [`reset`](Self::reset).
    pub fn trace(&self) -> &StepTrace<Q> {
        &self.trace
    }

    /// The state the automaton was constructed with.
    pub fn initial_state(&self) -> &Q {
        &self.initial_state
    }

    /// The stack symbol the automaton was constructed with.
    pub fn initial_symbol(&self) -> &K {
        &self.initial_symbol
    }

    /// Rebuild an automaton from a captured configuration. Used by the
    /// snapshot layer; the transition function is supplied fresh because
    /// closures are not serializable.
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn from_configuration(
        initial_state: Q,
        initial_symbol: K,
        state: Q,
        control: Stack<K>,
        input: Stack<I>,
        result: Option<RunResult>,
        trace: StepTrace<Q>,
        transition: TransitionFn<K, Q, I>,
    ) -> Self {
        Self {
            control,
            state,
            input,
            result,
            transition,
            trace,
            initial_state,
            initial_symbol,
        }
    }
}

/// Escape hatches.
///
/// These bypass the step protocol for composition and instrumentation —
/// splicing automata together, rewriting a configuration mid-run,
/// driving a stack directly. Misuse can produce an automaton whose
/// configuration no transition function expects; the engine raises no
/// error for that, it is a contract risk the caller accepts. None of
/// these are used by [`step`](PushdownAutomaton::step) itself.
impl<K: Symbol, Q: Symbol, I: Symbol> PushdownAutomaton<K, Q, I> {
    /// Borrow the live control stack mutably. The borrow must end before
    /// the next `step()`, which the borrow checker enforces.
    pub fn stack_mut(&mut self) -> &mut Stack<K> {
        &mut self.control
    }

    /// Borrow the live input queue mutably.
    pub fn input_mut(&mut self) -> &mut Stack<I> {
        &mut self.input
    }

    /// Overwrite the current state.
    pub fn override_state(&mut self, state: Q) {
        self.state = state;
    }

    /// Replace the transition function, affecting only future steps.
    /// Not reverted by [`reset`](Self::reset).
    pub fn override_transition<F>(&mut self, transition: F)
    where
        F: Fn(&Q, Option<&K>) -> InputDecision<K, Q, I> + Send + Sync + 'static,
    {
        self.transition = Arc::new(transition);
    }

    /// Replace the control stack wholesale.
    pub fn replace_stack(&mut self, stack: Stack<K>) {
        self.control = stack;
    }

    /// Replace the input queue wholesale.
    pub fn replace_input(&mut self, input: Stack<I>) {
        self.input = input;
    }

    /// Apply an arbitrary action directly to the control stack.
    pub fn apply_to_stack(&mut self, action: StackAction<K>) -> Option<K> {
        self.control.apply(action)
    }

    /// Apply an arbitrary action directly to the input queue.
    pub fn apply_to_input(&mut self, action: StackAction<I>) -> Option<I> {
        self.input.apply(action)
    }

    /// Queue input symbols behind any pending input, without discarding
    /// it. Symbols are consumed in the order given, after everything
    /// already pending.
    pub fn feed<S>(&mut self, symbols: S)
    where
        S: IntoIterator<Item = I>,
    {
        for symbol in symbols {
            self.input.push_bottom(symbol);
        }
    }
}
