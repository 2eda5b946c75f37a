//! Structural predicates over trees.
//!
//! Each predicate takes the root of a tree, or `None` for an empty tree, which satisfies all of
//! them.

use std::collections::VecDeque;
use super::calc;
use super::queue::Queue;
use super::Node;

/// Checks if two trees have the same shape and equal values at every position.
///
/// Keys are not compared.
pub fn is_equal<K, V>(a: Option<&Node<K, V>>, b: Option<&Node<K, V>>) -> bool where V: PartialEq {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) =>
            a.value() == b.value() && is_equal(a.left(), b.left()) && is_equal(a.right(), b.right()),
        _ => false,
    }
}

/// Checks if every internal node has two children and every leaf sits on the deepest level.
///
/// # Examples
///
/// ```
/// use bintree::{shape, Node};
///
/// let root = Node::new(2, ()).with_left(Node::new(1, ())).with_right(Node::new(3, ()));
/// assert!(shape::is_perfect(Some(&root)));
///
/// let root = Node::new(2, ()).with_left(Node::new(1, ()));
/// assert!(!shape::is_perfect(Some(&root)));
/// ```
pub fn is_perfect<K, V>(root: Option<&Node<K, V>>) -> bool {
    fn perfect_at<K, V>(node: &Node<K, V>, depth: usize, level: usize) -> bool {
        match (node.left(), node.right()) {
            (None, None) => level + 1 == depth,
            (Some(left), Some(right)) =>
                perfect_at(left, depth, level + 1) && perfect_at(right, depth, level + 1),
            _ => false,
        }
    }

    root.map_or(true, |root| perfect_at(root, calc::max_depth(Some(root)), 0))
}

/// Checks if no node has exactly one child.
pub fn is_full<K, V>(root: Option<&Node<K, V>>) -> bool {
    root.map_or(true, |node| {
        node.left().is_some() == node.right().is_some()
            && is_full(node.left())
            && is_full(node.right())
    })
}

/// Checks if every level but the last is full and the last level is filled from the left.
pub fn is_complete<K, V>(root: Option<&Node<K, V>>) -> bool {
    let mut queue: VecDeque<Option<&Node<K, V>>> = VecDeque::new();
    let mut gap = false;

    if root.is_some() { queue.enqueue(root); }

    while !queue.is_empty() {
        match queue.dequeue().expect("queue checked non-empty") {
            None => gap = true,
            Some(_) if gap => return false,
            Some(node) => {
                queue.enqueue(node.left());
                queue.enqueue(node.right());
            }
        }
    }

    true
}

/// Checks if the depths of every node's two subtrees differ by at most one.
pub fn is_balanced<K, V>(root: Option<&Node<K, V>>) -> bool {
    // The subtree's depth, or `None` once any node in it is out of balance.
    fn depth<K, V>(root: Option<&Node<K, V>>) -> Option<usize> {
        match root {
            None => Some(0),
            Some(node) => {
                let left = depth(node.left())?;
                let right = depth(node.right())?;
                if left.abs_diff(right) <= 1 { Some(1 + left.max(right)) } else { None }
            }
        }
    }

    depth(root).is_some()
}
