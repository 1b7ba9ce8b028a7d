//! Implementation of the AVL search tree.
//! Balanced by caching subtree heights in the nodes. Every structural change
//! rebalances the whole ancestor path on the way back up from the recursion,
//! which keeps the worst-case height logarithmic in the number of elements.

use std::cmp::Ordering;
use std::fmt;

use log::trace;

use crate::error::{Result, TreeError};
use crate::node::{link_height, Link, Node};

/// An AVL search tree over elements of type `T`.
///
/// Elements are kept in search order: strictly smaller elements live in left
/// subtrees, equal or greater elements in right subtrees. A duplicate is
/// therefore inserted to the right of the element it ties with and is never
/// overwritten; removal peels off one occurrence at a time.
///
/// The ordering requirement on `T` is the `T: Ord` bound on the tree's
/// operations, so a non-comparable element type is rejected at compile time.
///
/// ```
/// use arbor::AvlTree;
///
/// let mut tree = AvlTree::new();
/// for x in [5, 3, 8, 1, 4] {
///     tree.insert(x);
/// }
/// assert_eq!(tree.find(&4), Ok(&4));
/// assert!(tree.contains(&8));
/// assert_eq!(tree.size(), 5);
/// # tree.assert_invariants();
/// ```
pub struct AvlTree<T> {
    root: Link<T>,
}

impl<T: Ord> AvlTree<T> {
    /// Creates an empty tree.
    pub fn new() -> Self {
        AvlTree { root: None }
    }

    /// Inserts `element` in search order. Equal elements go to the right of
    /// the element they tie with, so nothing is ever overwritten.
    ///
    /// ```
    /// use arbor::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// tree.insert(7);
    /// tree.insert(7);
    /// tree.remove(&7).unwrap();
    /// assert_eq!(tree.find(&7), Ok(&7));
    /// # tree.assert_invariants();
    /// ```
    pub fn insert(&mut self, element: T) {
        Self::insert_rec(&mut self.root, element);
    }

    fn insert_rec(link: &mut Link<T>, element: T) {
        let node = match link {
            None => {
                *link = Some(Box::new(Node::new(element)));
                return;
            }
            Some(node) => node,
        };
        // Strictly smaller elements go left; ties go right with the greater
        // ones, so duplicates accumulate on the right spine of their equal.
        if element < node.element {
            Self::insert_rec(&mut node.left, element);
        } else {
            Self::insert_rec(&mut node.right, element);
        }
        Self::rebalance_link(link);
    }

    /// Returns a reference to the stored element equal to `target`, or
    /// [`TreeError::ElementNotFound`] if there is none.
    pub fn find(&self, target: &T) -> Result<&T> {
        Self::find_rec(&self.root, target)
    }

    fn find_rec<'a>(link: &'a Link<T>, target: &T) -> Result<&'a T> {
        let node = match link {
            None => return Err(TreeError::ElementNotFound),
            Some(node) => node,
        };
        // The exact-match check fires before branching, so an equal element
        // sitting higher up is returned without descending to duplicates.
        match target.cmp(node.element()) {
            Ordering::Equal => Ok(node.element()),
            Ordering::Less => Self::find_rec(&node.left, target),
            Ordering::Greater => Self::find_rec(&node.right, target),
        }
    }

    /// Whether an element equal to `target` is present.
    pub fn contains(&self, target: &T) -> bool {
        self.find(target).is_ok()
    }

    /// Removes one occurrence of `target`, or fails with
    /// [`TreeError::ElementNotFound`] leaving the tree untouched.
    ///
    /// ```
    /// use arbor::{AvlTree, TreeError};
    ///
    /// let mut tree: AvlTree<i32> = (1..=10).collect();
    /// assert_eq!(tree.remove(&4), Ok(()));
    /// assert_eq!(tree.remove(&4), Err(TreeError::ElementNotFound));
    /// # tree.assert_invariants();
    /// ```
    pub fn remove(&mut self, target: &T) -> Result<()> {
        Self::remove_rec(&mut self.root, target)
    }

    fn remove_rec(link: &mut Link<T>, target: &T) -> Result<()> {
        let node = match link {
            None => return Err(TreeError::ElementNotFound),
            Some(node) => node,
        };
        match target.cmp(&node.element) {
            Ordering::Less => Self::remove_rec(&mut node.left, target)?,
            Ordering::Greater => Self::remove_rec(&mut node.right, target)?,
            Ordering::Equal => Self::remove_node(link),
        }
        Self::rebalance_link(link);
        Ok(())
    }

    /// Unlinks the matched node behind `link` according to how many children
    /// it has. The caller rebalances `link` afterwards.
    fn remove_node(link: &mut Link<T>) {
        let mut node = link.take().unwrap();
        *link = match (node.left.take(), node.right.take()) {
            (None, None) => {
                trace!("remove: leaf, spliced out");
                None
            }
            (Some(left), None) => {
                trace!("remove: one child, left subtree attached");
                Some(left)
            }
            (None, Some(right)) => {
                trace!("remove: one child, right subtree attached");
                Some(right)
            }
            (Some(left), Some(right)) => {
                // Two children: move the in-order successor's element into
                // this node and detach the successor from the right subtree.
                // The successor has no left child, so its removal is one of
                // the simple cases, and take_min rebalances the descent path.
                trace!("remove: two children, replaced by in-order successor");
                let mut right = Some(right);
                node.element = Self::take_min(&mut right);
                node.left = Some(left);
                node.right = right;
                Some(node)
            }
        };
    }

    /// Removes every occurrence of `target`. Never fails: a miss is the
    /// loop's termination signal here, not an error.
    pub fn remove_all_occurrences(&mut self, target: &T) {
        while self.remove(target).is_ok() {}
    }

    /// Removes and returns the smallest element, or fails with
    /// [`TreeError::EmptyCollection`].
    pub fn remove_min(&mut self) -> Result<T> {
        if self.root.is_none() {
            return Err(TreeError::EmptyCollection);
        }
        Ok(Self::take_min(&mut self.root))
    }

    /// Removes and returns the greatest element, or fails with
    /// [`TreeError::EmptyCollection`].
    pub fn remove_max(&mut self) -> Result<T> {
        if self.root.is_none() {
            return Err(TreeError::EmptyCollection);
        }
        Ok(Self::take_max(&mut self.root))
    }

    /// Detaches the minimum of a non-empty subtree and returns its element,
    /// rebalancing the descent path on the way back up.
    fn take_min(link: &mut Link<T>) -> T {
        let node = link.as_deref_mut().unwrap();
        if node.left.is_some() {
            let element = Self::take_min(&mut node.left);
            Self::rebalance_link(link);
            element
        } else {
            let node = *link.take().unwrap();
            *link = node.right;
            node.element
        }
    }

    /// Mirror of [`take_min`][Self::take_min].
    fn take_max(link: &mut Link<T>) -> T {
        let node = link.as_deref_mut().unwrap();
        if node.right.is_some() {
            let element = Self::take_max(&mut node.right);
            Self::rebalance_link(link);
            element
        } else {
            let node = *link.take().unwrap();
            *link = node.left;
            node.element
        }
    }

    /// Returns the smallest element without removing it, or fails with
    /// [`TreeError::EmptyCollection`].
    pub fn find_min(&self) -> Result<&T> {
        let mut node = match self.root.as_deref() {
            None => return Err(TreeError::EmptyCollection),
            Some(node) => node,
        };
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Ok(node.element())
    }

    /// Returns the greatest element without removing it, or fails with
    /// [`TreeError::EmptyCollection`].
    pub fn find_max(&self) -> Result<&T> {
        let mut node = match self.root.as_deref() {
            None => return Err(TreeError::EmptyCollection),
            Some(node) => node,
        };
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Ok(node.element())
    }

    /// Asserts that every node satisfies the search-order invariant, that
    /// every cached height matches its children and that every balance
    /// factor is in `{-1, 0, 1}`. Panics otherwise.
    pub fn assert_invariants(&self) {
        Self::assert_invariants_rec(&self.root, None, None);
    }

    fn assert_invariants_rec<'a>(
        link: &'a Link<T>,
        lower: Option<&'a T>,
        upper: Option<&'a T>,
    ) -> i32 {
        let node = match link {
            None => return -1,
            Some(node) => node,
        };
        if let Some(lower) = lower {
            assert!(*node.element() >= *lower, "search order violated");
        }
        if let Some(upper) = upper {
            assert!(*node.element() <= *upper, "search order violated");
        }
        let left = Self::assert_invariants_rec(&node.left, lower, Some(node.element()));
        let right = Self::assert_invariants_rec(&node.right, Some(node.element()), upper);
        assert_eq!(node.height(), 1 + left.max(right), "stale cached height");
        let bf = right - left;
        assert!((-1..=1).contains(&bf), "balance factor {} out of range", bf);
        node.height()
    }

    /// `height(right) - height(left)` of the subtrees under `node`.
    fn balance_factor(node: &Node<T>) -> i32 {
        link_height(&node.right) - link_height(&node.left)
    }

    fn update_height(node: &mut Node<T>) {
        node.height = 1 + link_height(&node.left).max(link_height(&node.right));
    }

    /// Re-establishes the balance invariant at the subtree behind `link`
    /// (a no-op for an empty link) after one of its children changed.
    fn rebalance_link(link: &mut Link<T>) {
        if let Some(node) = link.take() {
            *link = Some(Self::balance(node));
        }
    }

    /// Restores the balance invariant at `node` after a structural change in
    /// one of its subtrees, then refreshes the cached height. Child heights
    /// are already correct because the recursion rebalances bottom-up.
    fn balance(node: Box<Node<T>>) -> Box<Node<T>> {
        let bf = Self::balance_factor(&node);
        let mut node = if bf == -2 {
            if Self::balance_factor(node.left.as_deref().unwrap()) <= 0 {
                trace!("balance factor -2: single right rotation");
                Self::rotate_right(node)
            } else {
                trace!("balance factor -2: left-right double rotation");
                Self::rotate_left_right(node)
            }
        } else if bf == 2 {
            if Self::balance_factor(node.right.as_deref().unwrap()) >= 0 {
                trace!("balance factor 2: single left rotation");
                Self::rotate_left(node)
            } else {
                trace!("balance factor 2: right-left double rotation");
                Self::rotate_right_left(node)
            }
        } else {
            node
        };
        Self::update_height(&mut node);
        node
    }

    /// Promotes the left child to subtree root. The old root adopts the
    /// former left child's right subtree, then becomes that child's right
    /// subtree. Heights are recomputed bottom-up: demoted node first.
    fn rotate_right(mut old_root: Box<Node<T>>) -> Box<Node<T>> {
        let mut new_root = old_root.left.take().unwrap();
        old_root.left = new_root.right.take();
        Self::update_height(&mut old_root);
        new_root.right = Some(old_root);
        Self::update_height(&mut new_root);
        new_root
    }

    /// Mirror of [`rotate_right`][Self::rotate_right]: promotes the right
    /// child to subtree root.
    fn rotate_left(mut old_root: Box<Node<T>>) -> Box<Node<T>> {
        let mut new_root = old_root.right.take().unwrap();
        old_root.right = new_root.left.take();
        Self::update_height(&mut old_root);
        new_root.left = Some(old_root);
        Self::update_height(&mut new_root);
        new_root
    }

    /// Left-rotates the left child in place, then right-rotates at the root.
    fn rotate_left_right(mut old_root: Box<Node<T>>) -> Box<Node<T>> {
        let left = old_root.left.take().unwrap();
        old_root.left = Some(Self::rotate_left(left));
        Self::rotate_right(old_root)
    }

    /// Right-rotates the right child in place, then left-rotates at the root.
    fn rotate_right_left(mut old_root: Box<Node<T>>) -> Box<Node<T>> {
        let right = old_root.right.take().unwrap();
        old_root.right = Some(Self::rotate_right(right));
        Self::rotate_left(old_root)
    }
}

impl<T> AvlTree<T> {
    /// Whether the tree holds no elements.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The number of elements in the tree.
    pub fn size(&self) -> usize {
        match &self.root {
            None => 0,
            Some(node) => 1 + node.num_children(),
        }
    }

    /// The height of the tree: `-1` when empty, `0` for a single element.
    pub fn height(&self) -> i32 {
        link_height(&self.root)
    }

    /// Borrows the root node, if any.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }
}

impl<T: Ord> Default for AvlTree<T> {
    fn default() -> Self {
        AvlTree::new()
    }
}

impl<T: Ord> std::iter::FromIterator<T> for AvlTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = AvlTree::new();
        for element in iter {
            tree.insert(element);
        }
        tree
    }
}

impl<T: fmt::Display> fmt::Display for AvlTree<T> {
    /// Writes the sideways rendering of the tree; an empty tree writes
    /// nothing.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.root {
            None => Ok(()),
            Some(node) => write!(f, "{}", node.render()),
        }
    }
}
