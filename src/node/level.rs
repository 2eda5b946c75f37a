//! Level-order mutation for trees whose keys carry no ordering.
//!
//! Insertion fills the shallowest, leftmost open slot and removal backfills from the deepest,
//! rightmost node, so a tree built only through these functions stays complete.

use std::collections::VecDeque;
use std::mem::replace;
use super::{LevelOrder, Link, Node};

/// Attaches a new node at the shallowest, leftmost open slot.
pub fn add<K, V>(link: &mut Link<K, V>, key: K, value: V) {
    add_many(link, Some((key, value)));
}

/// Attaches each entry in turn at the shallowest, leftmost open slot, returning the number of
/// nodes added.
///
/// The walk never restarts: every node it dequeues has both slots filled before it moves on,
/// which places the entries exactly where repeated calls to `add` would.
pub fn add_many<K, V, I>(link: &mut Link<K, V>, entries: I) -> usize
    where I: IntoIterator<Item=(K, V)> {

    let mut entries = entries.into_iter().peekable();
    let mut added = 0;

    if link.is_none() {
        match entries.next() {
            None => return 0,
            Some((key, value)) => {
                *link = Some(Box::new(Node::new(key, value)));
                added += 1;
            }
        }
    }

    let mut queue: VecDeque<&mut Node<K, V>> = link.as_deref_mut().into_iter().collect();

    while entries.peek().is_some() {
        // A finite tree always has an open slot on its last level.
        let Some(node) = queue.pop_front() else { break };

        for slot in [&mut node.left, &mut node.right] {
            if slot.is_none() {
                if let Some((key, value)) = entries.next() {
                    *slot = Some(Box::new(Node::new(key, value)));
                    added += 1;
                }
            }

            if let Some(child) = slot.as_deref_mut() { queue.push_back(child); }
        }
    }

    added
}

/// Removes the last node in level order whose key equals `key`, returning its key and value.
///
/// The deepest, rightmost node is detached and its payload moved into the removed node's
/// position, so no other node changes place.
pub fn remove<K, V>(link: &mut Link<K, V>, key: &K) -> Option<(K, V)> where K: PartialEq {
    let mut target = None;
    let mut parent = None;
    let mut last = 0;

    for (index, node) in LevelOrder::new(link.as_deref()).enumerate() {
        if node.key == *key { target = Some(index); }
        if !node.is_leaf() { parent = Some(index); }
        last = index;
    }

    let target = target?;

    // Children appear in level order in the same order as their parents, so the last node is a
    // child of the last node that has any.
    let deepest = match parent {
        None => return link.take().map(|node| node.into_entry()),
        Some(parent) => {
            let parent = nth_mut(link, parent)?;
            parent.right.take().or_else(|| parent.left.take())?
        }
    };

    let Node { key, value, .. } = *deepest;

    if target == last { return Some((key, value)); }

    let node = nth_mut(link, target)?;
    Some((replace(&mut node.key, key), replace(&mut node.value, value)))
}

/// Returns the `n`th node in level order.
fn nth_mut<K, V>(link: &mut Link<K, V>, n: usize) -> Option<&mut Node<K, V>> {
    let mut queue: VecDeque<&mut Node<K, V>> = link.as_deref_mut().into_iter().collect();

    for _ in 0..n {
        let node = queue.pop_front()?;
        queue.extend(node.left.as_deref_mut());
        queue.extend(node.right.as_deref_mut());
    }

    queue.pop_front()
}
