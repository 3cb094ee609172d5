//! Balanced-Parentheses Recognizer
//!
//! This example demonstrates the classic pushdown automaton use case:
//! recognizing a context-free language that no finite state machine can.
//!
//! Key concepts:
//! - A transition function encoding push/pop rules for a grammar
//! - Caller-paced stepping with per-step introspection
//! - Accept/reject resolution from the bottom-of-stack marker
//!
//! Run with: cargo run --example balanced_parens

use pushdown::core::{
    AutomatonAction, InputDecision, PushdownAutomaton, RunResult, StackAction,
};
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

fn recognizer() -> PushdownAutomaton<Mark, ScanState, char> {
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

fn recognize(input: &str) {
    let mut automaton = recognizer();
    automaton.set_input(input.chars());

    println!("Input: {input:?}");

    let mut steps = 0;
    let verdict = loop {
        if let Some(result) = automaton.step() {
            break result;
        }
        steps += 1;
        println!(
            "  step {steps}: stack depth {}, {} symbol(s) left",
            automaton.copy_stack().len(),
            automaton.copy_remaining_input().len(),
        );
    };

    println!("  => {verdict:?} after {} step(s)\n", steps + 1);
}

fn main() {
    println!("=== Balanced-Parentheses Recognizer ===\n");

    recognize("()()");
    recognize("((()))");
    recognize(")");
    recognize("(()");
    recognize("");

    println!("The control stack counts unmatched '(' markers; the bottom");
    println!("marker resolves the run once the input is exhausted.");
}
