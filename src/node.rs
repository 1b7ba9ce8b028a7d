//! The binary tree node module.
//! This module implements the plain node shape the AVL tree is built from:
//! an element, two owned child links and a cached subtree height.

use std::fmt;

/// An owning link to a child subtree. `None` is the empty subtree.
pub type Link<T> = Option<Box<Node<T>>>;

/// Returns the cached height of a subtree behind a link.
/// An empty subtree has height `-1`, so that a leaf node has height `0`.
pub fn link_height<T>(link: &Link<T>) -> i32 {
    match link {
        None => -1,
        Some(node) => node.height,
    }
}

/// A node in a binary tree, exclusively owning its left and right subtrees.
///
/// The node does no validation of its own. The tree layer is responsible for
/// keeping the search-order and balance invariants intact whenever it
/// relinks children through [`set_left`][Node::set_left] and
/// [`set_right`][Node::set_right].
pub struct Node<T> {
    pub(crate) element: T,
    pub(crate) height: i32,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

impl<T> Node<T> {
    /// Creates a new leaf node holding `element`.
    pub fn new(element: T) -> Node<T> {
        Node {
            element,
            height: 0,
            left: None,
            right: None,
        }
    }

    /// Returns the element stored at this node.
    pub fn element(&self) -> &T {
        &self.element
    }

    /// Replaces the stored element, leaving the links untouched.
    /// The two-children deletion case uses this to move a successor's value
    /// into place without restructuring the tree.
    pub fn set_element(&mut self, element: T) {
        self.element = element;
    }

    /// Returns the left child, if any.
    pub fn left(&self) -> Option<&Node<T>> {
        self.left.as_deref()
    }

    /// Returns the right child, if any.
    pub fn right(&self) -> Option<&Node<T>> {
        self.right.as_deref()
    }

    /// Replaces the left subtree wholesale, dropping the old one.
    pub fn set_left(&mut self, link: Link<T>) {
        self.left = link;
    }

    /// Replaces the right subtree wholesale, dropping the old one.
    pub fn set_right(&mut self, link: Link<T>) {
        self.right = link;
    }

    /// The cached height of the subtree rooted at this node.
    /// A leaf has height `0`.
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Counts every descendant of this node, i.e. the subtree size minus one.
    ///
    /// ```
    /// use arbor::Node;
    ///
    /// let mut node = Node::new(2);
    /// node.set_left(Some(Box::new(Node::new(1))));
    /// node.set_right(Some(Box::new(Node::new(3))));
    /// assert_eq!(node.num_children(), 2);
    /// ```
    pub fn num_children(&self) -> usize {
        let mut children = 0;
        if let Some(left) = &self.left {
            children += 1 + left.num_children();
        }
        if let Some(right) = &self.right {
            children += 1 + right.num_children();
        }
        children
    }
}

impl<T: fmt::Display> Node<T> {
    /// Renders the subtree sideways: the right subtree is printed above this
    /// node and the left subtree below it, with indentation growing with
    /// depth. Presentation only, nothing depends on the output shape.
    pub fn render(&self) -> String {
        let mut out = String::new();
        if let Some(right) = &self.right {
            right.render_rec(true, "", &mut out);
        }
        out.push_str(&format!("{}\n", self.element));
        if let Some(left) = &self.left {
            left.render_rec(false, "", &mut out);
        }
        out
    }

    fn render_rec(&self, is_right: bool, indent: &str, out: &mut String) {
        if let Some(right) = &self.right {
            let deeper = format!("{}{}", indent, if is_right { "        " } else { " |      " });
            right.render_rec(true, &deeper, out);
        }
        out.push_str(indent);
        out.push_str(if is_right { " /" } else { " \\" });
        out.push_str(&format!("----- {}\n", self.element));
        if let Some(left) = &self.left {
            let deeper = format!("{}{}", indent, if is_right { " |      " } else { "        " });
            left.render_rec(false, &deeper, out);
        }
    }
}

impl<T: fmt::Display> fmt::Display for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.element)
    }
}
