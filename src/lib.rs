//! A linked AVL search tree.
//!
//! The tree keeps its elements in search order and stays balanced by caching
//! subtree heights in the nodes and rotating on the way back up from every
//! structural change. Equal elements are kept rather than overwritten: a
//! duplicate is inserted to the right of the element it ties with.
//!
//! ```
//! use arbor::{AvlTree, TreeError};
//!
//! let mut tree = AvlTree::new();
//! for x in [17, 3, 25, 9, 3] {
//!     tree.insert(x);
//! }
//! assert_eq!(tree.find(&9), Ok(&9));
//! assert_eq!(tree.remove_min(), Ok(3));
//! tree.remove_all_occurrences(&3);
//! assert_eq!(tree.find(&3), Err(TreeError::ElementNotFound));
//! # tree.assert_invariants();
//! ```

pub mod avl;
pub mod error;
pub mod node;

pub use avl::AvlTree;
pub use error::{Result, TreeError};
pub use node::{Link, Node};
