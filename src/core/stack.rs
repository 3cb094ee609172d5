//! Generic LIFO symbol stack.
//!
//! Both of an automaton's containers — the control stack and the
//! remaining-input queue — are instances of [`Stack`]. All operations
//! are top-relative; nothing exposes indexed access. Exhaustion is
//! always `None`, never an error.

use crate::core::action::StackAction;
use serde::{Deserialize, Serialize};

/// A last-in-first-out container over a symbol alphabet `T`.
///
/// Created empty or from an existing sequence; copied structurally via
/// `Clone` (mutating a copy never affects the original). No operation
/// fails: popping or peeking an empty stack yields `None`.
///
/// # Example
///
/// ```rust
/// use pushdown::core::Stack;
///
/// let mut stack = Stack::new();
/// stack.push('a');
/// stack.push('b');
///
/// assert_eq!(stack.peek(), Some(&'b'));
/// assert_eq!(stack.pop(), Some('b'));
/// assert_eq!(stack.pop(), Some('a'));
/// assert_eq!(stack.pop(), None);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for Stack<T> {
    /// Build a stack from an existing sequence. The vector's last
    /// element becomes the top.
    fn from(items: Vec<T>) -> Self {
        Self { items }
    }
}

impl<T> Stack<T> {
    /// Create a new, empty stack.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Push one symbol onto the top.
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Remove and return the top symbol, or `None` if the stack is
    /// empty.
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Return the top symbol without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    /// Pop and discard the top symbol. A no-op on an empty stack.
    pub fn delete(&mut self) {
        self.items.pop();
    }

    /// Remove every symbol.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Push a sequence of symbols in order, equivalent to repeated
    /// [`push`](Self::push). The sequence's last element ends up on top.
    pub fn extend<S>(&mut self, items: S)
    where
        S: IntoIterator<Item = T>,
    {
        self.items.extend(items);
    }

    /// Insert a symbol beneath the bottom element.
    ///
    /// Used to queue input symbols behind pending ones when a stack
    /// models the front-on-top remaining input of an automaton.
    pub fn push_bottom(&mut self, item: T) {
        self.items.insert(0, item);
    }

    /// Number of symbols on the stack.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the stack holds no symbols.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Apply a caller-selected operation, the uniform dispatch for the
    /// closed [`StackAction`] command set.
    ///
    /// Only `Pop` produces a value: the removed top symbol, or the
    /// action's embedded default when the stack is empty. Every other
    /// action returns `None`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pushdown::core::{Stack, StackAction};
    ///
    /// let mut stack: Stack<u8> = Stack::new();
    /// assert_eq!(stack.apply(StackAction::Pop { default: Some(0) }), Some(0));
    ///
    /// stack.apply(StackAction::Push(7));
    /// assert_eq!(stack.apply(StackAction::Pop { default: Some(0) }), Some(7));
    /// ```
    pub fn apply(&mut self, action: StackAction<T>) -> Option<T> {
        match action {
            StackAction::Delete => {
                self.delete();
                None
            }
            StackAction::Push(item) => {
                self.push(item);
                None
            }
            StackAction::Pop { default } => self.pop().or(default),
            StackAction::Ignore => None,
            StackAction::Clear => {
                self.clear();
                None
            }
        }
    }
}
