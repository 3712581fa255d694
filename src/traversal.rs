//! Whole-tree walks. Every walk is eager: it hands each value to a visitor
//! as it goes and only returns once it is done.

use std::fmt::{self, Write};

use crate::error::{Result, TreeError};
use crate::tree::{Link, Tree};

/// When a node is visited relative to its children.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Order {
    /// Left subtree, node, right subtree. Yields values in sorted order.
    InOrder,
    /// Node, left subtree, right subtree.
    PreOrder,
    /// Left subtree, right subtree, node.
    PostOrder,
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::InOrder => "In-order",
            Self::PreOrder => "Pre-order",
            Self::PostOrder => "Post-order",
        })
    }
}

impl<T> Tree<T> {
    /// Calls `visit` on every value in the given order.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::{Order, Tree};
    ///
    /// let tree: Tree<_> = [2, 1, 3].into_iter().collect();
    /// let mut sum = 0;
    /// tree.traverse(Order::PostOrder, |x| sum += x);
    ///
    /// assert_eq!(sum, 6);
    /// ```
    pub fn traverse<F>(&self, order: Order, mut visit: F)
    where
        F: FnMut(&T),
    {
        walk(&self.root, order, &mut visit);
    }

    /// Calls `visit` on every value from smallest to largest.
    pub fn in_order<F: FnMut(&T)>(&self, visit: F) {
        self.traverse(Order::InOrder, visit);
    }

    /// Calls `visit` on every node before either of its children.
    pub fn pre_order<F: FnMut(&T)>(&self, visit: F) {
        self.traverse(Order::PreOrder, visit);
    }

    /// Calls `visit` on every node after both of its children.
    pub fn post_order<F: FnMut(&T)>(&self, visit: F) {
        self.traverse(Order::PostOrder, visit);
    }

    /// The values in the given order separated by single spaces.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::{Order, Tree};
    ///
    /// let tree: Tree<_> = [41, 20, 11, 29, 32, 65, 70].into_iter().collect();
    ///
    /// assert_eq!(tree.render(Order::InOrder), "11 20 29 32 41 65 70");
    /// assert_eq!(tree.render(Order::PreOrder), "41 20 11 29 32 65 70");
    /// assert_eq!(tree.render(Order::PostOrder), "11 32 29 20 70 65 41");
    /// ```
    pub fn render(&self, order: Order) -> String
    where
        T: fmt::Display,
    {
        let mut out = String::new();
        self.traverse(order, |value| {
            if !out.is_empty() {
                out.push(' ');
            }
            // Writing into a `String` cannot fail.
            let _ = write!(out, "{}", value);
        });
        out
    }

    /// The value that would sit at position `k` (counting from 1) if all the
    /// values were sorted from largest to smallest. Duplicates count once per
    /// copy.
    ///
    /// The tree is walked right to left and the walk stops at the `k`-th
    /// node, so only the nodes above and right of the answer are visited.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::{Tree, TreeError};
    ///
    /// let tree: Tree<_> = [41, 29, 11, 32, 65, 70].into_iter().collect();
    ///
    /// assert_eq!(tree.kth_largest(1), Ok(&70));
    /// assert_eq!(tree.kth_largest(2), Ok(&65));
    /// assert_eq!(tree.kth_largest(7), Err(TreeError::RankOutOfRange { k: 7 }));
    /// ```
    pub fn kth_largest(&self, k: usize) -> Result<&T> {
        let mut remaining = k;
        if remaining == 0 {
            return Err(TreeError::RankOutOfRange { k });
        }
        kth_largest(&self.root, &mut remaining).ok_or(TreeError::RankOutOfRange { k })
    }
}

fn walk<T, F>(link: &Link<T>, order: Order, visit: &mut F)
where
    F: FnMut(&T),
{
    let Some(node) = link.as_deref() else {
        return;
    };
    if order == Order::PreOrder {
        visit(&node.value);
    }
    walk(&node.left, order, visit);
    if order == Order::InOrder {
        visit(&node.value);
    }
    walk(&node.right, order, visit);
    if order == Order::PostOrder {
        visit(&node.value);
    }
}

/// Reverse in-order walk counting `remaining` down once per node. Always
/// entered with `remaining >= 1`.
fn kth_largest<'a, T>(link: &'a Link<T>, remaining: &mut usize) -> Option<&'a T> {
    let node = link.as_deref()?;
    if let Some(found) = kth_largest(&node.right, remaining) {
        return Some(found);
    }
    *remaining -= 1;
    if *remaining == 0 {
        return Some(&node.value);
    }
    kth_largest(&node.left, remaining)
}
