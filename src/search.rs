//! A binary search tree ordered by a comparator.

use compare::{Compare, Natural};
use log::{debug, trace};
use std::cmp::Ordering;
use std::fmt::{self, Debug};
use std::iter::FromIterator;
use std::ops;
use super::node::{bst, Entries, IterMut, Link, LinkExt, Node, Nodes, Order};
use super::{calc, Tree};

/// A binary search tree.
///
/// Every key in a node's left subtree orders before the node's key, and every key in its right
/// subtree orders after it. The tree holds each key at most once and never rebalances, so its
/// height depends on the order in which keys are added; `from_sorted_entries` builds a
/// height-balanced tree in one step.
///
/// The behavior of this tree is undefined if the comparator is not a total order, or if a
/// key's ordering relative to any other key changes while the key is in the tree.
///
/// # Examples
///
/// ```
/// use bintree::{Order, SearchTree, Tree};
///
/// let mut tree = SearchTree::new();
/// for key in [3, 1, 5, 0, 2, 4, 6] { tree.add(key, key * 10); }
///
/// assert!(!tree.add(3, 0));
/// assert_eq!(tree.len(), 7);
///
/// //       3              4
/// //     /   \          /   \
/// //    1     5   =>   1     5
/// //   / \   / \      / \     \
/// //  0   2 4   6    0   2     6
/// assert_eq!(tree.remove(&3), Some((3, 30)));
/// assert_eq!(tree.root().map(|node| *node.key()), Some(4));
/// assert_eq!(tree.keys(Order::PreOrder).collect::<Vec<_>>(), [&4, &1, &0, &2, &5, &6]);
/// ```
#[derive(Clone)]
pub struct SearchTree<K, V, C = Natural<K>> where C: Compare<K> {
    root: Link<K, V>,
    len: usize,
    cmp: C,
}

impl<K, V> SearchTree<K, V> where K: Ord {
    /// Creates an empty tree ordered according to the natural order of its keys.
    pub fn new() -> Self { SearchTree::with_cmp(compare::natural()) }

    /// Creates a height-balanced tree from entries in ascending key order.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::{Order, SearchTree, Tree};
    ///
    /// let tree = SearchTree::from_sorted_entries((1..8).map(|key| (key, ())));
    ///
    /// assert!(tree.is_perfect());
    /// assert_eq!(tree.keys(Order::LevelOrder).collect::<Vec<_>>(),
    ///            [&4, &2, &6, &1, &3, &5, &7]);
    /// ```
    pub fn from_sorted_entries<I>(entries: I) -> Self
        where I: IntoIterator<Item=(K, V)>, I::IntoIter: ExactSizeIterator {

        SearchTree::from_sorted_entries_with_cmp(entries, compare::natural())
    }

    /// Creates a tree holding the given node and its subtrees, ordered according to the natural
    /// order of its keys.
    ///
    /// The node must already satisfy the search tree ordering; it is not checked.
    pub fn from_root(root: Node<K, V>) -> Self {
        SearchTree::from_root_with_cmp(root, compare::natural())
    }
}

impl<K, V, C> SearchTree<K, V, C> where C: Compare<K> {
    /// Creates an empty tree ordered according to the given comparator.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::{Order, SearchTree, Tree};
    /// use compare::{natural, Compare};
    ///
    /// let mut tree = SearchTree::with_cmp(natural().rev());
    ///
    /// tree.add(2, "b");
    /// tree.add(1, "a");
    /// tree.add(3, "c");
    ///
    /// assert_eq!(tree.keys(Order::InOrder).collect::<Vec<_>>(), [&3, &2, &1]);
    /// ```
    pub fn with_cmp(cmp: C) -> Self { SearchTree { root: None, len: 0, cmp } }

    /// Creates a height-balanced tree from entries in ascending order according to the given
    /// comparator.
    ///
    /// Each subtree is rooted at the lower middle of its range of entries.
    pub fn from_sorted_entries_with_cmp<I>(entries: I, cmp: C) -> Self
        where I: IntoIterator<Item=(K, V)>, I::IntoIter: ExactSizeIterator {

        let mut entries = entries.into_iter();
        let len = entries.len();
        let root = bst::from_sorted(&mut entries, len);
        let len = calc::size(root.as_deref());
        trace!("built balanced tree, len {}", len);
        SearchTree { root, len, cmp }
    }

    /// Creates a tree holding the given node and its subtrees, ordered according to the given
    /// comparator.
    ///
    /// The node must already satisfy the search tree ordering under `cmp`; it is not checked.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::{Node, SearchTree, Tree};
    /// use compare::{natural, Compare};
    ///
    /// let root = Node::new(2, "b").with_left(Node::new(3, "c")).with_right(Node::new(1, "a"));
    /// let tree = SearchTree::from_root_with_cmp(root, natural().rev());
    ///
    /// assert_eq!(tree.len(), 3);
    /// assert_eq!(tree.get(&1), Some(&"a"));
    /// ```
    pub fn from_root_with_cmp(root: Node<K, V>, cmp: C) -> Self {
        let len = calc::size(Some(&root));
        SearchTree { root: Some(Box::new(root)), len, cmp }
    }

    /// Returns a reference to the tree's comparator.
    pub fn cmp(&self) -> &C { &self.cmp }

    /// Returns a mutable reference to the value associated with the given key, or `None` if
    /// the tree does not contain the key.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::{SearchTree, Tree};
    ///
    /// let mut tree = SearchTree::new();
    /// tree.add(1, "a");
    ///
    /// if let Some(value) = tree.get_mut(&1) { *value = "b"; }
    ///
    /// assert_eq!(tree.get(&1), Some(&"b"));
    /// assert_eq!(tree.get_mut(&2), None);
    /// ```
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        bst::get_mut(&mut self.root, &self.cmp, key).key_value_mut().map(|e| e.1)
    }

    /// Returns an iterator over the tree's entries in ascending key order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter(Entries(Nodes::new(self.root.as_deref(), Order::InOrder, self.len)))
    }

    /// Returns an iterator over the tree's entries in the given order, with mutable references
    /// to the values.
    pub fn iter_mut(&mut self, order: Order) -> IterMut<'_, K, V> {
        IterMut::new(self.root.as_deref_mut(), order, self.len)
    }
}

impl<K, V, C> Tree<K, V> for SearchTree<K, V, C> where C: Compare<K> {
    fn root(&self) -> Option<&Node<K, V>> { self.root.as_deref() }

    fn len(&self) -> usize { self.len }

    fn clear(&mut self) {
        self.root = None;
        self.len = 0;
    }

    fn node(&self, key: &K) -> Option<&Node<K, V>> {
        bst::get(&self.root, &self.cmp, key).as_deref()
    }

    fn get<'a>(&'a self, key: &K) -> Option<&'a V> where K: 'a {
        bst::get(&self.root, &self.cmp, key).key_value().map(|e| e.1)
    }

    fn set(&mut self, key: &K, value: V) -> bool {
        match self.get_mut(key) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    /// Adds a node where the key belongs, returning `false` and leaving the tree untouched if
    /// the tree already contains the key.
    fn add(&mut self, key: K, value: V) -> bool {
        if bst::add(&mut self.root, &self.cmp, key, value) {
            self.len += 1;
            trace!("added node, len {}", self.len);
            true
        } else {
            debug!("rejected duplicate key");
            false
        }
    }

    /// Removes the node holding the given key.
    ///
    /// If the node has two children, its in-order successor's key and value move into its
    /// position and the successor's node is unlinked instead.
    fn remove(&mut self, key: &K) -> Option<(K, V)> {
        let entry = bst::remove(&mut self.root, &self.cmp, key);

        if entry.is_some() {
            self.len -= 1;
            trace!("removed node, len {}", self.len);
        }

        entry
    }
}

impl<K, V, C> Debug for SearchTree<K, V, C> where K: Debug, V: Debug, C: Compare<K> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V, C> Default for SearchTree<K, V, C> where C: Compare<K> + Default {
    fn default() -> Self { SearchTree::with_cmp(Default::default()) }
}

impl<K, V, C> Extend<(K, V)> for SearchTree<K, V, C> where C: Compare<K> {
    /// Adds each entry in turn, skipping keys already in the tree.
    fn extend<I: IntoIterator<Item=(K, V)>>(&mut self, it: I) {
        for (k, v) in it { self.add(k, v); }
    }
}

impl<K, V, C> FromIterator<(K, V)> for SearchTree<K, V, C> where C: Compare<K> + Default {
    fn from_iter<I: IntoIterator<Item=(K, V)>>(it: I) -> Self {
        let mut tree: SearchTree<K, V, C> = Default::default();
        tree.extend(it);
        tree
    }
}

impl<K, V, C> ops::Index<&K> for SearchTree<K, V, C> where C: Compare<K> {
    type Output = V;
    fn index(&self, key: &K) -> &V { self.get(key).expect("key not found") }
}

impl<'a, K, V, C> IntoIterator for &'a SearchTree<K, V, C> where C: Compare<K> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;
    fn into_iter(self) -> Iter<'a, K, V> { self.iter() }
}

/// Iterates in ascending key order.
impl<'a, K, V, C> IntoIterator for &'a mut SearchTree<K, V, C> where C: Compare<K> {
    type Item = (&'a K, &'a mut V);
    type IntoIter = IterMut<'a, K, V>;
    fn into_iter(self) -> IterMut<'a, K, V> { self.iter_mut(Order::InOrder) }
}

impl<K, V, C> PartialEq for SearchTree<K, V, C> where K: PartialEq, V: PartialEq, C: Compare<K> {
    fn eq(&self, other: &Self) -> bool { self.len == other.len && self.iter().eq(other.iter()) }
}

impl<K, V, C> Eq for SearchTree<K, V, C> where K: Eq, V: Eq, C: Compare<K> {}

/// An iterator over a search tree's entries in ascending key order.
pub struct Iter<'a, K, V>(Entries<'a, K, V>);

impl<'a, K, V> Clone for Iter<'a, K, V> {
    fn clone(&self) -> Self { Iter(self.0.clone()) }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);
    fn next(&mut self) -> Option<(&'a K, &'a V)> { self.0.next() }
    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<'a, K, V> ExactSizeIterator for Iter<'a, K, V> {}

/// A comparator that orders strings character by character, ignoring case.
///
/// # Examples
///
/// ```
/// use bintree::{Order, SearchTree, Tree};
/// use bintree::search::IgnoreCase;
///
/// let mut tree = SearchTree::with_cmp(IgnoreCase);
///
/// assert!(tree.add("beta", 2));
/// assert!(tree.add("Alpha", 1));
/// assert!(!tree.add("ALPHA", 3));
///
/// assert_eq!(tree.keys(Order::InOrder).collect::<Vec<_>>(), [&"Alpha", &"beta"]);
/// assert_eq!(tree.get(&"alpha"), Some(&1));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct IgnoreCase;

impl<T> Compare<T> for IgnoreCase where T: AsRef<str> + ?Sized {
    fn compare(&self, l: &T, r: &T) -> Ordering { folded(l.as_ref()).cmp(folded(r.as_ref())) }
}

fn folded(s: &str) -> impl Iterator<Item=char> + '_ { s.chars().flat_map(char::to_lowercase) }
