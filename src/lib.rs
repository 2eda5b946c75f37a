//! Binary trees and binary search trees with pluggable traversal orders.
//!
//! Two trees share the [`Tree`] trait:
//!
//! - [`BinaryTree`] places nodes in level order, keeping the tree complete as nodes are added
//!   and removed. Its keys need only be comparable for equality.
//! - [`SearchTree`] orders nodes by a [`Compare`](compare::Compare) comparator and rejects
//!   duplicate keys.
//!
//! Every traversal takes an [`Order`]: pre-order, in-order, post-order or level order.
//! Traversals are lazy iterators that borrow the tree, so the tree cannot change while one is
//! in use.
//!
//! # Examples
//!
//! ```
//! use bintree::{BinaryTree, Order, SearchTree, Tree};
//!
//! let tree: BinaryTree<_, _> = (1..8).map(|key| (key, key * 10)).collect();
//! assert!(tree.is_perfect());
//! assert_eq!(tree.find_value(Order::PreOrder, |value, _, _| *value > 20), Some(&40));
//!
//! let mut tree = SearchTree::new();
//! tree.add_many(vec![(4, 'd'), (2, 'b'), (6, 'f'), (1, 'a'), (3, 'c'), (5, 'e'), (7, 'g')]);
//! assert!(tree.is_perfect());
//! assert_eq!(tree.values(Order::InOrder).collect::<String>(), "abcdefg");
//! ```

pub mod calc;
pub mod queue;
pub mod search;
pub mod shape;

mod binary;
mod node;
mod tree;

#[cfg(feature = "ordered_iter")]
mod ordered_iter;

#[cfg(feature = "quickcheck")]
mod quickcheck;

pub use binary::BinaryTree;
pub use node::{Entries, IterMut, Keys, LevelOrder, Link, Node, Nodes, Order, Values};
pub use queue::{Queue, Underflow};
pub use search::SearchTree;
pub use tree::Tree;
