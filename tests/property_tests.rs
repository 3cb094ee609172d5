//! Property-based tests for the automaton engine.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated inputs.

use proptest::prelude::*;
use pushdown::core::{
    AutomatonAction, InputDecision, PushdownAutomaton, RunResult, Stack, StackAction,
};
use pushdown::driver::run;
use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
enum Mark {
    Bottom,
    Paren,
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
enum ScanState {
    Scanning,
}

fn parens_automaton() -> PushdownAutomaton<Mark, ScanState, char> {
    PushdownAutomaton::new(ScanState::Scanning, Mark::Bottom, |_state, top| {
        let top = top.cloned();
        InputDecision::Pop(Box::new(move |symbol| match (symbol, top) {
            (None, Some(Mark::Bottom)) => AutomatonAction::Resolve(RunResult::Accept),
            (None, _) => AutomatonAction::Resolve(RunResult::Reject),
            (Some('('), _) => AutomatonAction::Continue {
                stack_action: StackAction::Push(Mark::Paren),
                next_state: ScanState::Scanning,
            },
            (Some(')'), Some(Mark::Paren)) => AutomatonAction::Continue {
                stack_action: StackAction::Delete,
                next_state: ScanState::Scanning,
            },
            _ => AutomatonAction::Resolve(RunResult::Reject),
        }))
    })
}

/// Reference check: balanced iff every prefix has at least as many '('
/// as ')' and the totals match.
fn is_balanced(input: &[char]) -> bool {
    let mut depth: i64 = 0;
    for c in input {
        match c {
            '(' => depth += 1,
            ')' => depth -= 1,
            _ => return false,
        }
        if depth < 0 {
            return false;
        }
    }
    depth == 0
}

/// A non-Clear stack command together with its effect on stack size.
#[derive(Clone, Debug)]
enum SizeNeutralAction {
    Push(u8),
    Delete,
    Ignore,
}

prop_compose! {
    fn arbitrary_paren_input()(chars in prop::collection::vec(prop::sample::select(vec!['(', ')']), 0..40)) -> Vec<char> {
        chars
    }
}

prop_compose! {
    fn arbitrary_action()(variant in 0..3u8, item in any::<u8>()) -> SizeNeutralAction {
        match variant {
            0 => SizeNeutralAction::Push(item),
            1 => SizeNeutralAction::Delete,
            _ => SizeNeutralAction::Ignore,
        }
    }
}

proptest! {
    #[test]
    fn recognizer_matches_reference(input in arbitrary_paren_input()) {
        let mut automaton = parens_automaton();
        automaton.set_input(input.clone());

        let result = run(&mut automaton, input.len() + 2).unwrap();
        let expected = if is_balanced(&input) {
            RunResult::Accept
        } else {
            RunResult::Reject
        };
        prop_assert_eq!(result, expected);
    }

    #[test]
    fn recognizer_is_deterministic(input in arbitrary_paren_input()) {
        let mut first = parens_automaton();
        first.set_input(input.clone());
        let mut second = parens_automaton();
        second.set_input(input.clone());

        prop_assert_eq!(
            run(&mut first, input.len() + 2).unwrap(),
            run(&mut second, input.len() + 2).unwrap()
        );
    }

    #[test]
    fn stack_size_follows_conservation_law(actions in prop::collection::vec(arbitrary_action(), 0..50)) {
        let mut stack: Stack<u8> = Stack::from(vec![0]);
        let mut expected: i64 = 1;

        for action in actions {
            let was_empty = stack.is_empty();
            match action {
                SizeNeutralAction::Push(item) => {
                    stack.apply(StackAction::Push(item));
                    expected += 1;
                }
                SizeNeutralAction::Delete => {
                    stack.apply(StackAction::Delete);
                    // Delete on an empty stack is a no-op, not an error.
                    if !was_empty {
                        expected -= 1;
                    }
                }
                SizeNeutralAction::Ignore => {
                    stack.apply(StackAction::Ignore);
                }
            }
            prop_assert!(expected >= 0);
            prop_assert_eq!(stack.len() as i64, expected);
        }
    }

    #[test]
    fn pop_default_law(contents in prop::collection::vec(any::<u8>(), 0..10), default in any::<u8>()) {
        let mut stack = Stack::from(contents.clone());
        let popped = stack.apply(StackAction::Pop { default: Some(default) });

        if contents.is_empty() {
            prop_assert_eq!(popped, Some(default));
            prop_assert!(stack.is_empty());
        } else {
            prop_assert_eq!(popped, Some(*contents.last().unwrap()));
            prop_assert_eq!(stack.len(), contents.len() - 1);
        }
    }

    #[test]
    fn clear_always_empties(contents in prop::collection::vec(any::<u8>(), 0..20)) {
        let mut stack = Stack::from(contents);
        stack.apply(StackAction::Clear);
        prop_assert!(stack.is_empty());
    }

    #[test]
    fn copies_never_alias(input in arbitrary_paren_input()) {
        let mut automaton = parens_automaton();
        automaton.set_input(input.clone());

        let mut copy = automaton.copy_remaining_input();
        copy.clear();

        prop_assert_eq!(automaton.copy_remaining_input().len(), input.len());
    }

    #[test]
    fn reset_is_total_amnesia(input in arbitrary_paren_input()) {
        let mut automaton = parens_automaton();
        automaton.set_input(input.clone());
        let _ = run(&mut automaton, input.len() + 2);

        automaton.reset();

        prop_assert_eq!(automaton.result(), None);
        prop_assert_eq!(automaton.state(), &ScanState::Scanning);
        prop_assert_eq!(automaton.copy_stack().len(), 1);
        prop_assert!(automaton.copy_remaining_input().is_empty());
    }

    #[test]
    fn steps_consume_input_monotonically(input in arbitrary_paren_input()) {
        let mut automaton = parens_automaton();
        automaton.set_input(input.clone());

        let mut remaining = input.len();
        while automaton.result().is_none() {
            automaton.step();
            let now = automaton.copy_remaining_input().len();
            // Each step pops at most one symbol off the queue.
            prop_assert!(now == remaining || now + 1 == remaining);
            remaining = now;
            if automaton.trace().records().len() > input.len() + 2 {
                break;
            }
        }
    }

    #[test]
    fn snapshot_roundtrip_preserves_stacks(input in arbitrary_paren_input()) {
        let mut automaton = parens_automaton();
        automaton.set_input(input);
        automaton.step();

        let snapshot = automaton.snapshot();
        let json = snapshot.to_json().unwrap();
        let decoded = pushdown::snapshot::Snapshot::<Mark, ScanState, char>::from_json(&json).unwrap();

        prop_assert_eq!(decoded.control_stack, automaton.copy_stack());
        prop_assert_eq!(decoded.input_queue, automaton.copy_remaining_input());
        prop_assert_eq!(decoded.result, automaton.result());
    }
}
