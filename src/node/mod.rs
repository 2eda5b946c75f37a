pub mod bst;
pub mod iter;
pub mod level;

#[cfg(test)]
mod test;

pub use self::iter::{Entries, IterMut, Keys, LevelOrder, Nodes, Order, Values};

/// An owning link to a child node, or `None` for an empty slot.
pub type Link<K, V> = Option<Box<Node<K, V>>>;

pub trait LinkExt: Sized {
    type K;
    type V;
    fn key_value(&self) -> Option<(&Self::K, &Self::V)>;
    fn key_value_mut(&mut self) -> Option<(&Self::K, &mut Self::V)>;
}

impl<K, V> LinkExt for Link<K, V> {
    type K = K;
    type V = V;

    fn key_value(&self) -> Option<(&K, &V)> {
        self.as_ref().map(|node| (&node.key, &node.value))
    }

    fn key_value_mut(&mut self) -> Option<(&K, &mut V)> {
        self.as_mut().map(|node| { let node = &mut **node; (&node.key, &mut node.value) })
    }
}

/// A binary tree node.
///
/// A node owns its children exclusively, so every node is reachable from exactly one parent
/// slot and trees never share or cycle.
///
/// # Examples
///
/// ```
/// use bintree::Node;
///
/// //     1
/// //    / \
/// //   2   3
/// let root = Node::new(1, "a")
///     .with_left(Node::new(2, "b"))
///     .with_right(Node::new(3, "c"));
///
/// assert_eq!(root.left().map(Node::key), Some(&2));
/// assert_eq!(root.right().map(Node::value), Some(&"c"));
/// assert!(!root.is_leaf());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Node<K, V> {
    key: K,
    value: V,
    left: Link<K, V>,
    right: Link<K, V>,
}

impl<K, V> Node<K, V> {
    /// Creates a leaf node.
    pub fn new(key: K, value: V) -> Self {
        Node { key, value, left: None, right: None }
    }

    /// Replaces the node's left child, returning the node.
    pub fn with_left(mut self, left: Node<K, V>) -> Self {
        self.left = Some(Box::new(left));
        self
    }

    /// Replaces the node's right child, returning the node.
    pub fn with_right(mut self, right: Node<K, V>) -> Self {
        self.right = Some(Box::new(right));
        self
    }

    /// Returns a reference to the node's key.
    pub fn key(&self) -> &K { &self.key }

    /// Returns a reference to the node's value.
    pub fn value(&self) -> &V { &self.value }

    /// Returns a mutable reference to the node's value.
    pub fn value_mut(&mut self) -> &mut V { &mut self.value }

    /// Returns a reference to the node's left child, if any.
    pub fn left(&self) -> Option<&Node<K, V>> { self.left.as_deref() }

    /// Returns a reference to the node's right child, if any.
    pub fn right(&self) -> Option<&Node<K, V>> { self.right.as_deref() }

    /// Returns a mutable reference to the node's left child, if any.
    pub fn left_mut(&mut self) -> Option<&mut Node<K, V>> { self.left.as_deref_mut() }

    /// Returns a mutable reference to the node's right child, if any.
    pub fn right_mut(&mut self) -> Option<&mut Node<K, V>> { self.right.as_deref_mut() }

    /// Detaches and returns the node's left subtree.
    pub fn take_left(&mut self) -> Option<Node<K, V>> { self.left.take().map(|node| *node) }

    /// Detaches and returns the node's right subtree.
    pub fn take_right(&mut self) -> Option<Node<K, V>> { self.right.take().map(|node| *node) }

    /// Checks if the node has no children.
    pub fn is_leaf(&self) -> bool { self.left.is_none() && self.right.is_none() }

    /// Consumes the node, dropping its subtrees, and returns its key and value.
    pub fn into_entry(self) -> (K, V) { (self.key, self.value) }
}
