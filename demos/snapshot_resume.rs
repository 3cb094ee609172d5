//! Snapshot and Resume
//!
//! This example demonstrates persisting an automaton mid-run and
//! resuming it from the captured configuration.
//!
//! Key concepts:
//! - Capturing a serializable snapshot of a live run
//! - JSON roundtrip of the configuration
//! - Restoring with a freshly supplied transition function
//!   (closures are not serializable)
//!
//! Run with: cargo run --example snapshot_resume

use pushdown::core::{
    AutomatonAction, InputDecision, PushdownAutomaton, RunResult, StackAction,
};
use pushdown::snapshot::Snapshot;
use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
enum Mark {
    Bottom,
    Item,
}

/// Pushes one marker per input symbol, accepting when input runs out.
fn transition(_state: &u32, _top: Option<&Mark>) -> InputDecision<Mark, u32, char> {
    InputDecision::Pop(Box::new(|symbol| match symbol {
        Some(_) => AutomatonAction::Continue {
            stack_action: StackAction::Push(Mark::Item),
            next_state: 1,
        },
        None => AutomatonAction::Resolve(RunResult::Accept),
    }))
}

fn main() {
    println!("=== Snapshot and Resume ===\n");

    let mut automaton = PushdownAutomaton::new(0u32, Mark::Bottom, transition);
    automaton.set_input("abcde".chars());

    // Run partway.
    automaton.step();
    automaton.step();
    println!(
        "After 2 steps: stack depth {}, {} symbol(s) pending",
        automaton.copy_stack().len(),
        automaton.copy_remaining_input().len(),
    );

    // Persist the configuration.
    let json = automaton
        .snapshot()
        .to_json()
        .expect("snapshot serializes");
    println!("Snapshot captured ({} bytes of JSON)", json.len());
    drop(automaton);

    // Later, possibly in another process: decode and resume.
    let snapshot: Snapshot<Mark, u32, char> =
        Snapshot::from_json(&json).expect("snapshot decodes");
    println!("Restoring snapshot {}", snapshot.id);

    let mut resumed = snapshot.restore(transition).expect("version is supported");
    let verdict = loop {
        if let Some(result) = resumed.step() {
            break result;
        }
    };

    println!(
        "Resumed run finished: {:?}, final stack depth {}",
        verdict,
        resumed.copy_stack().len(),
    );
    println!("Steps traced across both runs: {}", resumed.trace().records().len());
}
