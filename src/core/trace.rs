//! Step trace tracking.
//!
//! Provides immutable tracking of an automaton's state transitions over
//! a run. Each recorded step notes where the automaton moved and whether
//! it consumed an input symbol on the way.

use crate::core::symbol::Symbol;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single `Continue` step.
///
/// Records are immutable values. Resolutions are not recorded — a
/// resolving step changes neither state nor stack, and its verdict lives
/// in the automaton's result field.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StepRecord<Q: Symbol> {
    /// The state the automaton stepped from
    pub from: Q,
    /// The state the automaton stepped to
    pub to: Q,
    /// When the step occurred
    pub timestamp: DateTime<Utc>,
    /// Whether the step popped a symbol off the input queue
    pub consumed_input: bool,
}

/// Ordered trace of the steps taken during a run.
///
/// The trace is immutable — [`record`](Self::record) returns a new trace
/// with the step added, leaving the original untouched.
///
/// # Example
///
/// ```rust
/// use pushdown::core::{StepRecord, StepTrace};
/// use chrono::Utc;
///
/// let trace: StepTrace<u8> = StepTrace::new();
/// let trace = trace.record(StepRecord {
///     from: 0,
///     to: 1,
///     timestamp: Utc::now(),
///     consumed_input: true,
/// });
///
/// assert_eq!(trace.records().len(), 1);
/// assert_eq!(trace.get_path(), vec![&0, &1]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StepTrace<Q: Symbol> {
    records: Vec<StepRecord<Q>>,
}

impl<Q: Symbol> Default for StepTrace<Q> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Q: Symbol> StepTrace<Q> {
    /// Create a new empty trace.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Record a step, returning a new trace.
    pub fn record(&self, record: StepRecord<Q>) -> Self {
        let mut records = self.records.clone();
        records.push(record);
        Self { records }
    }

    /// Get the path of states traversed: the first record's `from`
    /// state, then the `to` state of each record in order.
    pub fn get_path(&self) -> Vec<&Q> {
        let mut path = Vec::new();
        if let Some(first) = self.records.first() {
            path.push(&first.from);
        }
        for record in &self.records {
            path.push(&record.to);
        }
        path
    }

    /// Number of input symbols consumed over the traced steps.
    pub fn consumed_count(&self) -> usize {
        self.records.iter().filter(|r| r.consumed_input).count()
    }

    /// Total duration from first to last recorded step, or `None` if
    /// the trace is empty.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.records.first(), self.records.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// Get all recorded steps in order.
    pub fn records(&self) -> &[StepRecord<Q>] {
        &self.records
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum TestState {
        Scanning,
        Matching,
        Draining,
    }

    fn step(from: TestState, to: TestState, consumed: bool) -> StepRecord<TestState> {
        StepRecord {
            from,
            to,
            timestamp: Utc::now(),
            consumed_input: consumed,
        }
    }

    #[test]
    fn new_trace_is_empty() {
        let trace: StepTrace<TestState> = StepTrace::new();
        assert_eq!(trace.records().len(), 0);
        assert!(trace.get_path().is_empty());
        assert!(trace.duration().is_none());
        assert_eq!(trace.consumed_count(), 0);
    }

    #[test]
    fn record_is_immutable() {
        let trace = StepTrace::new();
        let new_trace = trace.record(step(TestState::Scanning, TestState::Matching, true));

        assert_eq!(trace.records().len(), 0);
        assert_eq!(new_trace.records().len(), 1);
    }

    #[test]
    fn get_path_returns_state_sequence() {
        let trace = StepTrace::new()
            .record(step(TestState::Scanning, TestState::Matching, true))
            .record(step(TestState::Matching, TestState::Draining, false));

        let path = trace.get_path();
        assert_eq!(path.len(), 3);
        assert_eq!(path[0], &TestState::Scanning);
        assert_eq!(path[1], &TestState::Matching);
        assert_eq!(path[2], &TestState::Draining);
    }

    #[test]
    fn consumed_count_tallies_input_pops() {
        let trace = StepTrace::new()
            .record(step(TestState::Scanning, TestState::Scanning, true))
            .record(step(TestState::Scanning, TestState::Scanning, false))
            .record(step(TestState::Scanning, TestState::Draining, true));

        assert_eq!(trace.consumed_count(), 2);
    }

    #[test]
    fn duration_calculates_elapsed_time() {
        let trace = StepTrace::new().record(step(TestState::Scanning, TestState::Matching, true));

        std::thread::sleep(std::time::Duration::from_millis(10));

        let trace = trace.record(step(TestState::Matching, TestState::Draining, false));

        let duration = trace.duration();
        assert!(duration.is_some());
        assert!(duration.unwrap() >= std::time::Duration::from_millis(10));
    }

    #[test]
    fn single_record_has_duration_zero() {
        let trace = StepTrace::new().record(step(TestState::Scanning, TestState::Matching, true));
        assert_eq!(trace.duration(), Some(std::time::Duration::from_secs(0)));
    }

    #[test]
    fn trace_serializes_correctly() {
        let trace = StepTrace::new().record(step(TestState::Scanning, TestState::Matching, true));

        let json = serde_json::to_string(&trace).unwrap();
        let deserialized: StepTrace<TestState> = serde_json::from_str(&json).unwrap();

        assert_eq!(trace.records().len(), deserialized.records().len());
        assert_eq!(deserialized.records()[0].to, TestState::Matching);
    }
}
