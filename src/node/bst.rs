//! Comparator-driven binary search tree algorithms.
//!
//! None of these rebalance; only `from_sorted` builds a height-balanced tree.

use compare::Compare;
use std::cmp::Ordering::*;
use std::mem::replace;
use super::{Link, Node};

/// Returns the link holding `key`, or the empty link where it would be attached.
pub fn get<'a, K, V, C>(mut link: &'a Link<K, V>, cmp: &C, key: &K) -> &'a Link<K, V>
    where C: Compare<K> {

    while let Some(ref node) = *link {
        link = match cmp.compare(key, &node.key) {
            Equal => break,
            Less => &node.left,
            Greater => &node.right,
        };
    }

    link
}

/// Returns the link holding `key`, or the empty link where it would be attached.
pub fn get_mut<'a, K, V, C>(link: &'a mut Link<K, V>, cmp: &C, key: &K) -> &'a mut Link<K, V>
    where C: Compare<K> {

    let order = match *link {
        None => return link,
        Some(ref node) => cmp.compare(key, &node.key),
    };

    match (order, link) {
        (Less, &mut Some(ref mut node)) => get_mut(&mut node.left, cmp, key),
        (Greater, &mut Some(ref mut node)) => get_mut(&mut node.right, cmp, key),
        (_, link) => link,
    }
}

/// Attaches a new node at the empty link where `key` belongs.
///
/// Returns `false`, leaving the tree untouched, if the tree already holds `key`.
pub fn add<K, V, C>(link: &mut Link<K, V>, cmp: &C, key: K, value: V) -> bool
    where C: Compare<K> {

    match *link {
        None => {
            *link = Some(Box::new(Node::new(key, value)));
            true
        }
        Some(ref mut node) => match cmp.compare(&key, &node.key) {
            Equal => false,
            Less => add(&mut node.left, cmp, key, value),
            Greater => add(&mut node.right, cmp, key, value),
        },
    }
}

/// Removes the node holding `key`, returning its key and value.
///
/// A node with two children takes over its in-order successor's payload, and the successor is
/// unlinked instead.
pub fn remove<K, V, C>(link: &mut Link<K, V>, cmp: &C, key: &K) -> Option<(K, V)>
    where C: Compare<K> {

    let node = link.as_mut()?;

    match cmp.compare(key, &node.key) {
        Less => return remove(&mut node.left, cmp, key),
        Greater => return remove(&mut node.right, cmp, key),
        Equal => {}
    }

    if node.left.is_some() && node.right.is_some() {
        let (key, value) = remove_min(&mut node.right)?;
        return Some((replace(&mut node.key, key), replace(&mut node.value, value)));
    }

    let Node { key, value, left, right } = *link.take()?;
    *link = left.or(right);
    Some((key, value))
}

/// Unlinks the leftmost node under `link`, returning its key and value.
pub fn remove_min<K, V>(link: &mut Link<K, V>) -> Option<(K, V)> {
    match *link {
        Some(ref mut node) if node.left.is_some() => remove_min(&mut node.left),
        _ => link.take().map(|node| {
            let Node { key, value, right, .. } = *node;
            *link = right;
            (key, value)
        }),
    }
}

/// Builds a height-balanced tree from the next `len` entries, which must be in ascending key
/// order.
///
/// Each subtree is rooted at the lower middle of its range.
pub fn from_sorted<K, V, I>(entries: &mut I, len: usize) -> Link<K, V>
    where I: Iterator<Item=(K, V)> {

    if len == 0 { return None; }

    let mid = (len - 1) / 2;
    let left = from_sorted(entries, mid);
    let (key, value) = entries.next()?;
    let right = from_sorted(entries, len - mid - 1);

    Some(Box::new(Node { key, value, left, right }))
}
