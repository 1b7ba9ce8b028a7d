//! Errors reported by the tree operations.

use thiserror::Error;

/// The failure modes of [`AvlTree`](crate::AvlTree) operations.
///
/// There is no variant for a non-comparable element type: the `T: Ord`
/// bound on the tree rules that out at compile time.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TreeError {
    /// The target element is not present in the tree.
    #[error("element not found in the tree")]
    ElementNotFound,

    /// A query or removal that needs at least one element was called on an
    /// empty tree.
    #[error("operation on an empty tree")]
    EmptyCollection,
}

/// Shorthand for results carrying a [`TreeError`].
pub type Result<T> = std::result::Result<T, TreeError>;
