use super::{calc, shape};
use super::node::{Entries, Keys, Node, Nodes, Order, Values};

/// The operations shared by every tree.
///
/// Implementors supply the placement strategy (lookup, insertion, removal and the value
/// update); traversal, queries and shape checks are provided on top of it.
///
/// Traversals borrow the tree, so the tree cannot change while one is in use.
pub trait Tree<K, V> {
    /// Returns a reference to the tree's root node, or `None` if the tree is empty.
    fn root(&self) -> Option<&Node<K, V>>;

    /// Returns the number of nodes in the tree.
    fn len(&self) -> usize;

    /// Removes all nodes from the tree.
    fn clear(&mut self);

    /// Returns a reference to the node holding the given key, or `None` if the tree does not
    /// contain the key.
    fn node(&self, key: &K) -> Option<&Node<K, V>>;

    /// Replaces the value of the node holding the given key, returning `false` if the tree does
    /// not contain the key.
    fn set(&mut self, key: &K, value: V) -> bool;

    /// Adds a node to the tree, returning `false` if the tree rejected it.
    fn add(&mut self, key: K, value: V) -> bool;

    /// Removes the node holding the given key and returns its key and value, or `None` if the
    /// tree does not contain the key.
    fn remove(&mut self, key: &K) -> Option<(K, V)>;

    /// Checks if the tree is empty.
    fn is_empty(&self) -> bool { self.len() == 0 }

    /// Returns a reference to the value associated with the given key, or `None` if the tree
    /// does not contain the key.
    fn get<'a>(&'a self, key: &K) -> Option<&'a V> where K: 'a {
        self.node(key).map(Node::value)
    }

    /// Checks if the tree contains the given key.
    fn has(&self, key: &K) -> bool { self.node(key).is_some() }

    /// Removes the node holding the given key, returning `false` if the tree does not contain
    /// the key.
    fn delete(&mut self, key: &K) -> bool { self.remove(key).is_some() }

    /// Adds each entry in turn, returning the number of nodes added.
    fn add_many<I>(&mut self, entries: I) -> usize where I: IntoIterator<Item=(K, V)> {
        entries.into_iter().fold(0, |added, (key, value)| {
            if self.add(key, value) { added + 1 } else { added }
        })
    }

    /// Returns an iterator over the tree's nodes in the given order.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::{BinaryTree, Node, Order, Tree};
    ///
    /// let tree: BinaryTree<_, _> = (1..8).map(|key| (key, ())).collect();
    ///
    /// let keys = |order| tree.nodes(order).map(Node::key).copied().collect::<Vec<_>>();
    /// assert_eq!(keys(Order::LevelOrder), [1, 2, 3, 4, 5, 6, 7]);
    /// assert_eq!(keys(Order::PreOrder), [1, 2, 4, 5, 3, 6, 7]);
    /// assert_eq!(keys(Order::InOrder), [4, 2, 5, 1, 6, 3, 7]);
    /// assert_eq!(keys(Order::PostOrder), [4, 5, 2, 6, 7, 3, 1]);
    /// ```
    fn nodes(&self, order: Order) -> Nodes<'_, K, V> { Nodes::new(self.root(), order, self.len()) }

    /// Returns an iterator over the tree's keys in the given order.
    fn keys(&self, order: Order) -> Keys<'_, K, V> { Keys(self.nodes(order)) }

    /// Returns an iterator over the tree's values in the given order.
    fn values(&self, order: Order) -> Values<'_, K, V> { Values(self.nodes(order)) }

    /// Returns an iterator over the tree's entries in the given order.
    fn entries(&self, order: Order) -> Entries<'_, K, V> { Entries(self.nodes(order)) }

    /// Calls `f` with the value, key and node of every node, in the given order.
    fn for_each<F>(&self, order: Order, mut f: F) where F: FnMut(&V, &K, &Node<K, V>) {
        for node in self.nodes(order) { f(node.value(), node.key(), node); }
    }

    /// Returns the first node, in the given order, whose value, key and node satisfy the
    /// predicate.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::{BinaryTree, Node, Order, Tree};
    ///
    /// let tree: BinaryTree<_, _> = vec![(1, "a"), (2, "bb"), (3, "cc")].into_iter().collect();
    ///
    /// let node = tree.find_node(Order::LevelOrder, |value, _, _| value.len() == 2);
    /// assert_eq!(node.map(Node::key), Some(&2));
    ///
    /// let node = tree.find_node(Order::PostOrder, |value, _, _| value.len() == 2);
    /// assert_eq!(node.map(Node::key), Some(&2));
    ///
    /// let node = tree.find_node(Order::InOrder, |_, _, node| node.is_leaf() && *node.key() > 2);
    /// assert_eq!(node.map(Node::key), Some(&3));
    /// ```
    fn find_node<F>(&self, order: Order, mut f: F) -> Option<&Node<K, V>>
        where F: FnMut(&V, &K, &Node<K, V>) -> bool {

        self.nodes(order).find(|node| f(node.value(), node.key(), node))
    }

    /// Returns the value of the first node, in the given order, whose value, key and node
    /// satisfy the predicate.
    fn find_value<'a, F>(&'a self, order: Order, f: F) -> Option<&'a V>
        where F: FnMut(&V, &K, &Node<K, V>) -> bool, K: 'a {

        self.find_node(order, f).map(Node::value)
    }

    /// Checks if any node satisfies the predicate, stopping at the first that does.
    fn some<F>(&self, order: Order, mut f: F) -> bool where F: FnMut(&V, &K, &Node<K, V>) -> bool {
        self.nodes(order).any(|node| f(node.value(), node.key(), node))
    }

    /// Checks if every node satisfies the predicate, stopping at the first that does not.
    ///
    /// An empty tree satisfies every predicate.
    fn every<F>(&self, order: Order, mut f: F) -> bool where F: FnMut(&V, &K, &Node<K, V>) -> bool {
        self.nodes(order).all(|node| f(node.value(), node.key(), node))
    }

    /// Returns the number of levels in the tree.
    fn max_depth(&self) -> usize { calc::max_depth(self.root()) }

    /// Checks if the tree has the same shape as the tree rooted at `other`, with equal values
    /// at every position.
    fn is_equal(&self, other: Option<&Node<K, V>>) -> bool where V: PartialEq {
        shape::is_equal(self.root(), other)
    }

    /// Checks if every internal node has two children and every leaf sits on the deepest level.
    fn is_perfect(&self) -> bool { shape::is_perfect(self.root()) }

    /// Checks if no node has exactly one child.
    fn is_full(&self) -> bool { shape::is_full(self.root()) }

    /// Checks if every level but the last is full and the last level is filled from the left.
    fn is_complete(&self) -> bool { shape::is_complete(self.root()) }

    /// Checks if the depths of every node's two subtrees differ by at most one.
    fn is_balanced(&self) -> bool { shape::is_balanced(self.root()) }
}
