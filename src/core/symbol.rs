//! Core Symbol trait for automaton alphabets.
//!
//! The three alphabets of a pushdown automaton (stack, state, input) are
//! independent type parameters, each bounded only by this trait.

use serde::{de::DeserializeOwned, Serialize};
use std::fmt::Debug;

/// Trait bound for alphabet symbols.
///
/// Symbols are opaque values to the engine: it never compares them for
/// equality and never inspects them beyond handing them to the
/// caller-supplied transition function. The bounds exist for the
/// machinery around the engine rather than the engine itself:
///
/// - `Clone`: symbols are copied into traces, snapshots, and stack copies
/// - `Debug`: symbols must be debuggable for diagnostics
/// - `Serialize` + `DeserializeOwned`: symbols must be serializable so an
///   automaton configuration can be snapshotted and restored
/// - `Send` + `Sync`: automata can be moved between threads (each
///   instance is still driven from one thread at a time)
///
/// The trait is blanket-implemented; any type meeting the bounds is a
/// symbol. `PartialEq` is deliberately not required — transition
/// functions match on symbols themselves, typically with exhaustive
/// `match` over an enum alphabet.
///
/// # Example
///
/// ```rust
/// use pushdown::core::Symbol;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, Debug, Serialize, Deserialize)]
/// enum StackSymbol {
///     Bottom,
///     Paren,
/// }
///
/// fn assert_symbol<T: Symbol>() {}
/// assert_symbol::<StackSymbol>();
/// ```
pub trait Symbol: Clone + Debug + Serialize + DeserializeOwned + Send + Sync {}

impl<T> Symbol for T where T: Clone + Debug + Serialize + DeserializeOwned + Send + Sync {}
