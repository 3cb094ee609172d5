//! Snapshot and restore functionality for automata.
//!
//! This module provides serialization and deserialization of an
//! automaton's configuration, enabling a run to be persisted mid-flight
//! and resumed later — in another process, or alongside the original
//! for exploratory stepping.
//!
//! A snapshot captures everything except the transition function
//! (closures are not serializable); [`Snapshot::restore`] takes a fresh
//! one.

use crate::core::{
    InputDecision, PushdownAutomaton, RunResult, Stack, StepTrace, Symbol, TransitionFn,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

pub mod error;

pub use error::SnapshotError;

/// Version identifier for the snapshot format
pub const SNAPSHOT_VERSION: u32 = 1;

/// Serializable snapshot of an automaton configuration.
/// Does NOT include the transition function (not serializable).
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Snapshot<K: Symbol, Q: Symbol, I: Symbol> {
    /// Snapshot format version
    pub version: u32,

    /// Unique snapshot identifier
    pub id: String,

    /// When the snapshot was captured
    pub timestamp: DateTime<Utc>,

    /// Initial state of the automaton
    pub initial_state: Q,

    /// Initial control-stack symbol of the automaton
    pub initial_symbol: K,

    /// Current state of the automaton
    pub current_state: Q,

    /// The control stack at capture time
    pub control_stack: Stack<K>,

    /// The remaining input at capture time
    pub input_queue: Stack<I>,

    /// The resolved verdict, if the run had resolved
    pub result: Option<RunResult>,

    /// The step trace up to capture time
    pub trace: StepTrace<Q>,
}

impl<K: Symbol, Q: Symbol, I: Symbol> Snapshot<K, Q, I> {
    /// Capture the configuration of a live automaton.
    pub fn capture(automaton: &PushdownAutomaton<K, Q, I>) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            id: Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            initial_state: automaton.initial_state().clone(),
            initial_symbol: automaton.initial_symbol().clone(),
            current_state: automaton.state().clone(),
            control_stack: automaton.copy_stack(),
            input_queue: automaton.copy_remaining_input(),
            result: automaton.result(),
            trace: automaton.trace().clone(),
        }
    }

    /// Rebuild an automaton from this snapshot with a freshly supplied
    /// transition function.
    ///
    /// Fails if the snapshot was captured by an incompatible format
    /// version.
    pub fn restore<F>(self, transition: F) -> Result<PushdownAutomaton<K, Q, I>, SnapshotError>
    where
        F: Fn(&Q, Option<&K>) -> InputDecision<K, Q, I> + Send + Sync + 'static,
    {
        if self.version != SNAPSHOT_VERSION {
            return Err(SnapshotError::UnsupportedVersion {
                found: self.version,
                supported: SNAPSHOT_VERSION,
            });
        }

        let transition: TransitionFn<K, Q, I> = Arc::new(transition);
        Ok(PushdownAutomaton::from_configuration(
            self.initial_state,
            self.initial_symbol,
            self.current_state,
            self.control_stack,
            self.input_queue,
            self.result,
            self.trace,
            transition,
        ))
    }

    /// Serialize to JSON.
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        serde_json::to_string(self).map_err(|e| SnapshotError::SerializationFailed(e.to_string()))
    }

    /// Deserialize from JSON.
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        let snapshot: Self = serde_json::from_str(json)
            .map_err(|e| SnapshotError::DeserializationFailed(e.to_string()))?;
        snapshot.validate_version()?;
        Ok(snapshot)
    }

    /// Serialize to a compact binary format.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        bincode::serialize(self).map_err(|e| SnapshotError::SerializationFailed(e.to_string()))
    }

    /// Deserialize from the binary format.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        let snapshot: Self = bincode::deserialize(bytes)
            .map_err(|e| SnapshotError::DeserializationFailed(e.to_string()))?;
        snapshot.validate_version()?;
        Ok(snapshot)
    }

    fn validate_version(&self) -> Result<(), SnapshotError> {
        if self.version != SNAPSHOT_VERSION {
            return Err(SnapshotError::UnsupportedVersion {
                found: self.version,
                supported: SNAPSHOT_VERSION,
            });
        }
        Ok(())
    }
}

impl<K: Symbol, Q: Symbol, I: Symbol> PushdownAutomaton<K, Q, I> {
    /// Capture a [`Snapshot`] of the current configuration.
    pub fn snapshot(&self) -> Snapshot<K, Q, I> {
        Snapshot::capture(self)
    }
}
