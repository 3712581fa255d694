//! Errors returned by [`Tree`][crate::Tree] queries with preconditions.

use thiserror::Error;

/// Why a query on a [`Tree`][crate::Tree] could not produce a value.
///
/// Looking up or deleting an absent value is not an error; those operations
/// report absence through `bool`/`Option` instead.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeError {
    /// A minimum or maximum was requested from a tree with no nodes.
    #[error("the tree is empty")]
    EmptyTree,

    /// `k` was zero or larger than the number of values in the tree.
    #[error("no {k}-th largest value in the tree")]
    RankOutOfRange {
        /// The rank that was asked for.
        k: usize,
    },
}

/// Shorthand for results of fallible tree queries.
pub type Result<T> = std::result::Result<T, TreeError>;
