//! A binary tree whose keys carry no ordering.

use log::trace;
use std::fmt::{self, Debug};
use std::iter::FromIterator;
use super::node::{level, Entries, IterMut, Link, Node, Nodes, Order};
use super::{calc, Tree};

/// A binary tree that places nodes in level order.
///
/// `add` attaches each new node at the shallowest, leftmost open slot, and `remove` backfills
/// the removed node's position from the deepest, rightmost node, so a tree built and shrunk
/// only through these operations is always complete. Keys need only be comparable for
/// equality, and a key may appear more than once.
///
/// Two trees are equal if they have the same shape with equal keys and values at every
/// position.
///
/// # Examples
///
/// ```
/// use bintree::{BinaryTree, Order, Tree};
///
/// let mut tree = BinaryTree::new();
///
/// tree.add(1, "a");
/// tree.add(2, "b");
/// tree.add(3, "c");
/// tree.add(4, "d");
///
/// //       1
/// //      / \
/// //     2   3
/// //    /
/// //   4
/// assert!(tree.is_complete());
/// assert_eq!(tree.keys(Order::LevelOrder).collect::<Vec<_>>(), [&1, &2, &3, &4]);
///
/// assert!(tree.delete(&2));
/// assert_eq!(tree.keys(Order::LevelOrder).collect::<Vec<_>>(), [&1, &4, &3]);
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BinaryTree<K, V> {
    root: Link<K, V>,
    len: usize,
}

impl<K, V> BinaryTree<K, V> {
    /// Creates an empty tree.
    pub fn new() -> Self { BinaryTree { root: None, len: 0 } }

    /// Creates a tree holding the given node and its subtrees.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::{BinaryTree, Node, Tree};
    ///
    /// let tree = BinaryTree::from_root(Node::new(1, ()).with_right(Node::new(2, ())));
    /// assert_eq!(tree.len(), 2);
    /// assert!(!tree.is_complete());
    /// ```
    pub fn from_root(root: Node<K, V>) -> Self {
        let len = calc::size(Some(&root));
        BinaryTree { root: Some(Box::new(root)), len }
    }

    /// Creates a tree by adding the given entries in turn.
    pub fn from_entries<I>(entries: I) -> Self where I: IntoIterator<Item=(K, V)> {
        let mut tree = BinaryTree::new();
        tree.extend(entries);
        tree
    }

    /// Consumes the tree, returning its root node.
    pub fn into_root(self) -> Option<Node<K, V>> { self.root.map(|node| *node) }

    /// Returns an iterator over the tree's entries in the given order, with mutable references
    /// to the values.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::{BinaryTree, Order, Tree};
    ///
    /// let mut tree = BinaryTree::from_entries(vec![(1, 1), (2, 2), (3, 3)]);
    ///
    /// for (key, value) in tree.iter_mut(Order::PreOrder) { *value *= 10 * key; }
    ///
    /// assert_eq!(tree.values(Order::LevelOrder).collect::<Vec<_>>(), [&10, &40, &90]);
    /// ```
    pub fn iter_mut(&mut self, order: Order) -> IterMut<'_, K, V> {
        IterMut::new(self.root.as_deref_mut(), order, self.len)
    }
}

impl<K, V> BinaryTree<K, V> where K: PartialEq {
    /// Returns a reference to the first node, in the given order, holding the given key.
    pub fn node_in(&self, key: &K, order: Order) -> Option<&Node<K, V>> {
        self.find_node(order, |_, k, _| k == key)
    }

    /// Returns a reference to the value of the first node, in the given order, holding the
    /// given key.
    pub fn get_in(&self, key: &K, order: Order) -> Option<&V> {
        self.node_in(key, order).map(Node::value)
    }

    /// Checks if the tree contains the given key.
    pub fn has_in(&self, key: &K, order: Order) -> bool { self.node_in(key, order).is_some() }

    /// Replaces the value of the first node, in the given order, holding the given key.
    ///
    /// Returns `false` if the tree does not contain the key.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::{BinaryTree, Order, Tree};
    ///
    /// let mut tree = BinaryTree::from_entries(vec![(1, "a"), (0, "b"), (0, "c")]);
    ///
    /// assert!(tree.set_in(&0, "z", Order::PostOrder));
    /// assert_eq!(tree.values(Order::LevelOrder).collect::<Vec<_>>(), [&"a", &"z", &"c"]);
    ///
    /// assert!(tree.set_in(&0, "y", Order::PreOrder));
    /// assert_eq!(tree.values(Order::LevelOrder).collect::<Vec<_>>(), [&"a", &"y", &"c"]);
    ///
    /// assert!(!tree.set_in(&2, "x", Order::PreOrder));
    /// ```
    pub fn set_in(&mut self, key: &K, value: V, order: Order) -> bool {
        match self.iter_mut(order).find(|&(k, _)| k == key) {
            Some((_, slot)) => {
                *slot = value;
                true
            }
            None => false,
        }
    }
}

impl<K, V> Tree<K, V> for BinaryTree<K, V> where K: PartialEq {
    fn root(&self) -> Option<&Node<K, V>> { self.root.as_deref() }

    fn len(&self) -> usize { self.len }

    fn clear(&mut self) {
        self.root = None;
        self.len = 0;
    }

    /// Returns a reference to the first node, in order, holding the given key.
    fn node(&self, key: &K) -> Option<&Node<K, V>> { self.node_in(key, Order::InOrder) }

    /// Replaces the value of the first node, in order, holding the given key.
    fn set(&mut self, key: &K, value: V) -> bool { self.set_in(key, value, Order::InOrder) }

    /// Attaches a node at the shallowest, leftmost open slot. Never rejects a node.
    fn add(&mut self, key: K, value: V) -> bool {
        level::add(&mut self.root, key, value);
        self.len += 1;
        trace!("added node at level-order position {}", self.len - 1);
        true
    }

    fn add_many<I>(&mut self, entries: I) -> usize where I: IntoIterator<Item=(K, V)> {
        let added = level::add_many(&mut self.root, entries);
        self.len += added;
        trace!("added {} nodes, len {}", added, self.len);
        added
    }

    /// Removes the last node, in level order, holding the given key.
    fn remove(&mut self, key: &K) -> Option<(K, V)> {
        let entry = level::remove(&mut self.root, key);

        if entry.is_some() {
            self.len -= 1;
            trace!("removed node, len {}", self.len);
        }

        entry
    }
}

impl<K, V> Debug for BinaryTree<K, V> where K: Debug, V: Debug {
    /// Formats the tree's entries in level order.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let entries = Entries(Nodes::new(self.root.as_deref(), Order::LevelOrder, self.len));
        f.debug_map().entries(entries).finish()
    }
}

impl<K, V> Default for BinaryTree<K, V> {
    fn default() -> Self { BinaryTree::new() }
}

impl<K, V> Extend<(K, V)> for BinaryTree<K, V> {
    fn extend<I: IntoIterator<Item=(K, V)>>(&mut self, it: I) {
        let added = level::add_many(&mut self.root, it);
        self.len += added;
        trace!("added {} nodes, len {}", added, self.len);
    }
}

impl<K, V> FromIterator<(K, V)> for BinaryTree<K, V> {
    fn from_iter<I: IntoIterator<Item=(K, V)>>(it: I) -> Self { BinaryTree::from_entries(it) }
}

/// Iterates in order.
impl<'a, K, V> IntoIterator for &'a BinaryTree<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Entries<'a, K, V>;

    fn into_iter(self) -> Entries<'a, K, V> {
        Entries(Nodes::new(self.root.as_deref(), Order::InOrder, self.len))
    }
}

/// Iterates in order.
impl<'a, K, V> IntoIterator for &'a mut BinaryTree<K, V> {
    type Item = (&'a K, &'a mut V);
    type IntoIter = IterMut<'a, K, V>;
    fn into_iter(self) -> IterMut<'a, K, V> { self.iter_mut(Order::InOrder) }
}

#[cfg(test)]
mod tests {
    use super::BinaryTree;
    use crate::{Order, Tree};

    #[test]
    fn debug_in_level_order() {
        let tree = BinaryTree::from_entries(vec![(2, 'b'), (1, 'a'), (3, 'c')]);
        assert_eq!(format!("{:?}", tree), "{2: 'b', 1: 'a', 3: 'c'}");
    }

    #[test]
    fn duplicate_keys() {
        let mut tree = BinaryTree::new();
        assert!(tree.add(1, 'a'));
        assert!(tree.add(1, 'b'));
        assert_eq!(tree.len(), 2);

        assert_eq!(tree.get_in(&1, Order::PreOrder), Some(&'a'));
        assert_eq!(tree.get_in(&1, Order::InOrder), Some(&'b'));
    }

    #[test]
    fn clear_and_into_root() {
        let mut tree: BinaryTree<_, _> = (0..5).map(|key| (key, ())).collect();
        let root = tree.clone().into_root().unwrap();
        assert_eq!(root.key(), &0);
        assert_eq!(BinaryTree::from_root(root), tree);

        tree.clear();
        assert!(tree.is_empty());
        assert_eq!(tree.into_root(), None);
    }

    #[test]
    fn lookups_through_tree_trait() {
        fn lookup<T: Tree<u8, char>>(tree: &T, key: u8) -> (Option<&char>, Option<&char>) {
            (tree.get(&key), tree.find_value(Order::LevelOrder, |_, &k, _| k == key))
        }

        let tree = BinaryTree::from_entries(vec![(1, 'a'), (2, 'b'), (2, 'c')]);
        assert_eq!(lookup(&tree, 1), (Some(&'a'), Some(&'a')));
        assert_eq!(lookup(&tree, 2), (Some(&'b'), Some(&'b')));
        assert_eq!(lookup(&tree, 3), (None, None));

        let tree: crate::SearchTree<_, _> =
            tree.entries(Order::InOrder).map(|(&k, &v)| (k, v)).collect();
        assert_eq!(lookup(&tree, 2), (Some(&'b'), Some(&'b')));
    }
}
