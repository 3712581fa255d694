//! This crate exposes a plain, unbalanced Binary Search Tree (BST) over a
//! single ordered value type.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored values. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores the value that
//! was inserted and will sometimes have child `Node`s. The invariants of
//! this BST are:
//!
//! 1. For every `Node`, all the `Node`s in its left subtree have a value
//!    less than or equal to its own value. Duplicates are always routed left.
//! 2. For every `Node`, all the `Node`s in its right subtree have a value
//!    strictly greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Both invariants hold against every descendant, not only direct children, and
//! they survive deletion even when the tree holds duplicates: deleting a node
//! with two children promotes the first copy of its in-order successor and moves
//! any other copies of that value into the left subtree.
//!
//! Searching for a value takes `O(height)` where `height` is the longest
//! path from the root `Node` to a leaf `Node`. This tree never rebalances,
//! so inserting values in sorted order degenerates it into a list of
//! `height == size`. Operations whose depth is otherwise unbounded (insert,
//! lookup, min/max and disposal) walk the tree iteratively for that reason.
//!
//! The tree also answers order statistic queries: the k-th largest value is
//! found with a reverse in-order walk that stops as soon as it is reached.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::{Order, Tree};
//!
//! let mut tree: Tree<i32> = [41, 20, 11, 29, 32, 65, 70].into_iter().collect();
//!
//! assert_eq!(tree.render(Order::InOrder), "11 20 29 32 41 65 70");
//! assert_eq!(tree.kth_largest(2), Ok(&65));
//!
//! assert_eq!(tree.delete(&20), Some(20));
//! assert_eq!(tree.render(Order::PreOrder), "41 29 11 32 65 70");
//!
//! tree.dispose();
//! assert!(tree.is_empty());
//! ```

#![deny(missing_docs)]

pub mod error;
pub mod traversal;
pub mod tree;

pub use error::{Result, TreeError};
pub use traversal::Order;
pub use tree::Tree;
