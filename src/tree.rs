//! An unbalanced BST where every node exclusively owns its children.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::{Tree, TreeError};
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.contains(&1));
//! assert_eq!(tree.find_min(), Err(TreeError::EmptyTree));
//!
//! tree.insert(1);
//! tree.insert(1);
//! assert_eq!(tree.size(), 2);
//!
//! // Deleting removes one copy at a time and hands it back.
//! assert_eq!(tree.delete(&1), Some(1));
//! assert!(tree.contains(&1));
//! assert_eq!(tree.delete(&1), Some(1));
//! assert_eq!(tree.delete(&1), None);
//! ```

use std::cmp::Ordering;
use std::fmt;

use log::{debug, trace};

use crate::error::{Result, TreeError};

/// An owned, possibly empty, subtree.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// An unbalanced Binary Search Tree over values of type `T`.
///
/// Values equal to a node's value are stored in its left subtree, so the tree
/// happily holds duplicates.
pub struct Tree<T> {
    pub(crate) root: Link<T>,
}

#[derive(Debug)]
pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Tree<T> {
    fn drop(&mut self) {
        self.dispose();
    }
}

/// Prints the nested node structure. Formatting recurses once per level, so
/// unlike dropping, it can overflow the stack on a tree degenerated into a very
/// long spine.
impl<T> fmt::Debug for Tree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree").field("root", &self.root).finish()
    }
}

impl<T> FromIterator<T> for Tree<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T> Extend<T> for Tree<T>
where
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Whether the tree has no nodes. This is cheaper than `size() == 0`.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Inserts `value` as a new leaf. Values less than or equal to a node go
    /// to its left, greater values to its right. Inserting never fails and
    /// never reshapes existing nodes.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::{Order, Tree};
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(2);
    /// tree.insert(1);
    /// tree.insert(2);
    ///
    /// // The duplicate went left of the root, then right of 1.
    /// assert_eq!(tree.render(Order::PreOrder), "2 1 2");
    /// ```
    pub fn insert(&mut self, value: T)
    where
        T: Ord,
    {
        let mut link = &mut self.root;
        let mut depth = 1;
        while let Some(node) = link {
            link = if value <= node.value {
                &mut node.left
            } else {
                &mut node.right
            };
            depth += 1;
        }
        *link = Some(Node::new_boxed(value));
        trace!("inserted leaf at depth {}", depth);
    }

    /// Number of nodes in the tree.
    pub fn size(&self) -> usize {
        Node::size(&self.root)
    }

    /// Number of nodes on the longest path from the root to a leaf. An empty
    /// tree has a depth of 0 and a lone root a depth of 1.
    pub fn max_depth(&self) -> usize {
        Node::max_depth(&self.root)
    }

    /// Whether some node holds a value equal to `target`. Only the path the
    /// BST ordering points to is visited.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::Tree;
    ///
    /// let tree: Tree<_> = [41, 20, 65].into_iter().collect();
    ///
    /// assert!(tree.contains(&65));
    /// assert!(!tree.contains(&15));
    /// ```
    pub fn contains(&self, target: &T) -> bool
    where
        T: Ord,
    {
        let mut link = &self.root;
        while let Some(node) = link {
            link = match target.cmp(&node.value) {
                Ordering::Less => &node.left,
                Ordering::Equal => return true,
                Ordering::Greater => &node.right,
            };
        }
        false
    }

    /// The smallest value, found by following left children.
    pub fn find_min(&self) -> Result<&T> {
        let mut node = self.root.as_deref().ok_or(TreeError::EmptyTree)?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Ok(&node.value)
    }

    /// The largest value, found by following right children.
    pub fn find_max(&self) -> Result<&T> {
        let mut node = self.root.as_deref().ok_or(TreeError::EmptyTree)?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Ok(&node.value)
    }

    /// Same as [`find_min`][Tree::find_min] but recursing once per level.
    pub fn find_min_recursive(&self) -> Result<&T> {
        self.root
            .as_deref()
            .map(Node::min_recursive)
            .ok_or(TreeError::EmptyTree)
    }

    /// Same as [`find_max`][Tree::find_max] but recursing once per level.
    pub fn find_max_recursive(&self) -> Result<&T> {
        self.root
            .as_deref()
            .map(Node::max_recursive)
            .ok_or(TreeError::EmptyTree)
    }

    /// Removes one node holding a value equal to `target` and returns that
    /// value. If no node matches, the tree is left untouched and `None` is
    /// returned.
    ///
    /// A node with two children takes the value of its in-order successor
    /// (the smallest value of its right subtree), and the successor's node
    /// is removed instead. Other copies of the successor's value move into
    /// the left subtree, so the right subtree stays strictly greater.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::{Order, Tree};
    ///
    /// let mut tree: Tree<_> = [41, 20, 11, 29, 32, 65, 70].into_iter().collect();
    ///
    /// assert_eq!(tree.delete(&20), Some(20));
    /// assert_eq!(tree.render(Order::PreOrder), "41 29 11 32 65 70");
    ///
    /// assert_eq!(tree.delete(&20), None);
    /// ```
    pub fn delete(&mut self, target: &T) -> Option<T>
    where
        T: Ord,
    {
        Node::delete_in(&mut self.root, target)
    }

    /// Destroys every node, children before their parent, and leaves the tree
    /// empty. Returns how many nodes were destroyed, so disposing an already
    /// empty tree returns 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::Tree;
    ///
    /// let mut tree: Tree<_> = (0..10).collect();
    ///
    /// assert_eq!(tree.dispose(), 10);
    /// assert!(tree.is_empty());
    /// assert_eq!(tree.dispose(), 0);
    /// ```
    pub fn dispose(&mut self) -> usize {
        // Each node is pushed back below its detached children, so it is only
        // popped (and dropped) once both of them are gone.
        let mut stack: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        let mut disposed = 0;
        while let Some(mut node) = stack.pop() {
            if node.left.is_none() && node.right.is_none() {
                drop(node);
                disposed += 1;
                continue;
            }
            let left = node.left.take();
            let right = node.right.take();
            stack.push(node);
            stack.extend(right);
            stack.extend(left);
        }
        if disposed > 0 {
            debug!("disposed {} nodes", disposed);
        }
        disposed
    }
}

impl<T> Node<T> {
    fn new_boxed(value: T) -> Box<Self> {
        Box::new(Self {
            value,
            left: None,
            right: None,
        })
    }

    fn size(link: &Link<T>) -> usize {
        match link {
            None => 0,
            Some(n) => 1 + Self::size(&n.left) + Self::size(&n.right),
        }
    }

    fn max_depth(link: &Link<T>) -> usize {
        match link {
            None => 0,
            Some(n) => 1 + Self::max_depth(&n.left).max(Self::max_depth(&n.right)),
        }
    }

    fn min_recursive(&self) -> &T {
        match self.left.as_deref() {
            Some(left) => left.min_recursive(),
            None => &self.value,
        }
    }

    fn max_recursive(&self) -> &T {
        match self.right.as_deref() {
            Some(right) => right.max_recursive(),
            None => &self.value,
        }
    }

    /// Deletes `target` from the subtree behind `link` and stores the new
    /// subtree root back into `link`.
    fn delete_in(link: &mut Link<T>, target: &T) -> Option<T>
    where
        T: Ord,
    {
        let node = link.take()?;
        let (subtree, removed) = node.delete(target);
        *link = subtree;
        removed
    }

    /// Returns the new root of this subtree alongside the removed value.
    fn delete(mut self: Box<Self>, target: &T) -> (Link<T>, Option<T>)
    where
        T: Ord,
    {
        match target.cmp(&self.value) {
            Ordering::Less => {
                let removed = Self::delete_in(&mut self.left, target);
                (Some(self), removed)
            }
            Ordering::Greater => {
                let removed = Self::delete_in(&mut self.right, target);
                (Some(self), removed)
            }
            Ordering::Equal => {
                let (subtree, value) = self.unlink();
                (subtree, Some(value))
            }
        }
    }

    /// Removes this node from its subtree, returning whatever should take its
    /// place and the value it held.
    fn unlink(mut self: Box<Self>) -> (Link<T>, T)
    where
        T: Ord,
    {
        match (self.left.take(), self.right.take()) {
            (None, None) => {
                debug!("deleted a leaf");
                let Node { value, .. } = *self;
                (None, value)
            }
            (Some(child), None) | (None, Some(child)) => {
                debug!("deleted a node with one child");
                let Node { value, .. } = *self;
                (Some(child), value)
            }
            (Some(left), Some(right)) => {
                debug!("deleted a node with two children");
                // Promote the topmost copy of the right subtree's minimum. Any
                // other copies hang off its left as a chain of equal values.
                // They belong left of the promoted value and exceed everything
                // already there, so they go to the far right of the left subtree.
                let depth = right.min_run_depth();
                let (successor, right) = right.take_left_spine(depth);
                let Node {
                    value: successor,
                    left: copies,
                    ..
                } = *successor;
                let value = std::mem::replace(&mut self.value, successor);
                let mut left = Some(left);
                Self::append_max(&mut left, copies);
                self.left = left;
                self.right = right;
                (Some(self), value)
            }
        }
    }

    /// Number of steps down the left spine to the first node holding the
    /// smallest value of this subtree. Every copy of that value lies on the
    /// spine at or below it.
    fn min_run_depth(&self) -> usize
    where
        T: Ord,
    {
        let mut node = self;
        let mut depth = 0;
        let mut run_start = 0;
        while let Some(left) = node.left.as_deref() {
            depth += 1;
            if left.value < node.value {
                run_start = depth;
            }
            node = left;
        }
        run_start
    }

    /// Detaches the node `depth` steps down the left spine (or the last spine
    /// node if the spine is shorter), putting its right child in its place.
    /// Returns the detached node, which keeps its left subtree, and the
    /// remaining subtree.
    fn take_left_spine(mut self: Box<Self>, depth: usize) -> (Box<Self>, Link<T>) {
        match self.left.take() {
            Some(left) if depth > 0 => {
                let (detached, rest) = left.take_left_spine(depth - 1);
                self.left = rest;
                (detached, Some(self))
            }
            left => {
                self.left = left;
                let rest = self.right.take();
                (self, rest)
            }
        }
    }

    /// Hangs `subtree` off the rightmost empty link of `link`. Every value in
    /// `subtree` must be greater than or equal to everything in `link`.
    fn append_max(link: &mut Link<T>, subtree: Link<T>) {
        let mut link = link;
        while let Some(node) = link {
            link = &mut node.right;
        }
        *link = subtree;
    }
}
