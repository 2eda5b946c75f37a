use std::collections::VecDeque;
use std::marker::PhantomData;
use crate::queue::Queue;
use super::Node;

/// The order in which a traversal visits a tree's nodes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Order {
    /// Node, then left subtree, then right subtree.
    PreOrder,
    /// Left subtree, then node, then right subtree.
    #[default]
    InOrder,
    /// Left subtree, then right subtree, then node.
    PostOrder,
    /// Breadth-first, top to bottom and left to right within a level.
    LevelOrder,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Seen {
    N,
    L,
    B,
}

struct Visit<'a, K, V> {
    node: &'a Node<K, V>,
    seen: Seen,
}

impl<'a, K, V> Clone for Visit<'a, K, V> {
    fn clone(&self) -> Self { *self }
}

impl<'a, K, V> Copy for Visit<'a, K, V> {}

impl<'a, K, V> Visit<'a, K, V> {
    fn new(node: &'a Node<K, V>) -> Self { Visit { node, seen: Seen::N } }
}

// Keeps the path from the root to the current node on an explicit stack, so a tree of height
// `h` costs `O(h)` space.
pub(crate) struct DepthFirst<'a, K, V> {
    visits: Vec<Visit<'a, K, V>>,
    order: Order,
}

impl<'a, K, V> DepthFirst<'a, K, V> {
    pub(crate) fn new(root: Option<&'a Node<K, V>>, order: Order) -> Self {
        debug_assert!(order != Order::LevelOrder);
        DepthFirst { visits: root.into_iter().map(Visit::new).collect(), order }
    }
}

impl<'a, K, V> Clone for DepthFirst<'a, K, V> {
    fn clone(&self) -> Self { DepthFirst { visits: self.visits.clone(), order: self.order } }
}

impl<'a, K, V> Iterator for DepthFirst<'a, K, V> {
    type Item = &'a Node<K, V>;

    fn next(&mut self) -> Option<&'a Node<K, V>> {
        loop {
            let visit = self.visits.last_mut()?;
            let node = visit.node;

            match visit.seen {
                Seen::N => {
                    visit.seen = Seen::L;
                    if let Some(left) = node.left() { self.visits.push(Visit::new(left)); }
                    if self.order == Order::PreOrder { return Some(node); }
                }
                Seen::L => {
                    visit.seen = Seen::B;
                    if let Some(right) = node.right() { self.visits.push(Visit::new(right)); }
                    if self.order == Order::InOrder { return Some(node); }
                }
                Seen::B => {
                    self.visits.pop();
                    if self.order == Order::PostOrder { return Some(node); }
                }
            }
        }
    }
}

/// A breadth-first cursor yielding nodes level by level, left to right.
///
/// The cursor runs on any [`Queue`](crate::Queue); it holds at most one level's
/// worth of nodes at a time.
///
/// # Examples
///
/// ```
/// use bintree::{LevelOrder, Node};
///
/// let root = Node::new(1, ())
///     .with_left(Node::new(2, ()).with_right(Node::new(4, ())))
///     .with_right(Node::new(3, ()));
///
/// let keys: Vec<_> = LevelOrder::new(Some(&root)).map(Node::key).collect();
/// assert_eq!(keys, [&1, &2, &3, &4]);
/// ```
pub struct LevelOrder<'a, K, V, Q = VecDeque<&'a Node<K, V>>> {
    queue: Q,
    _nodes: PhantomData<&'a Node<K, V>>,
}

impl<'a, K, V> LevelOrder<'a, K, V> {
    /// Creates a cursor over the tree rooted at `root`, queuing nodes in a `VecDeque`.
    pub fn new(root: Option<&'a Node<K, V>>) -> Self { LevelOrder::with_queue(root, VecDeque::new()) }
}

impl<'a, K, V, Q> LevelOrder<'a, K, V, Q> where Q: Queue<&'a Node<K, V>> {
    /// Creates a cursor over the tree rooted at `root`, queuing nodes in the given queue.
    ///
    /// The queue should be empty.
    pub fn with_queue(root: Option<&'a Node<K, V>>, mut queue: Q) -> Self {
        if let Some(root) = root { queue.enqueue(root); }
        LevelOrder { queue, _nodes: PhantomData }
    }
}

impl<'a, K, V, Q> Clone for LevelOrder<'a, K, V, Q> where Q: Clone {
    fn clone(&self) -> Self { LevelOrder { queue: self.queue.clone(), _nodes: PhantomData } }
}

impl<'a, K, V, Q> Iterator for LevelOrder<'a, K, V, Q> where Q: Queue<&'a Node<K, V>> {
    type Item = &'a Node<K, V>;

    fn next(&mut self) -> Option<&'a Node<K, V>> {
        if self.queue.is_empty() { return None; }

        let node = self.queue.dequeue().expect("queue checked non-empty");
        if let Some(left) = node.left() { self.queue.enqueue(left); }
        if let Some(right) = node.right() { self.queue.enqueue(right); }
        Some(node)
    }
}

enum Walk<'a, K, V> {
    DepthFirst(DepthFirst<'a, K, V>),
    LevelOrder(LevelOrder<'a, K, V>),
}

/// An iterator over a tree's nodes in a given order.
///
/// The iterator borrows the tree, so the tree cannot change while it is in use. Each call to
/// [`Tree::nodes`](crate::Tree::nodes) starts a fresh traversal.
pub struct Nodes<'a, K, V> {
    walk: Walk<'a, K, V>,
    len: usize,
}

impl<'a, K, V> Nodes<'a, K, V> {
    /// Creates an iterator over the `len` nodes reachable from `root`.
    pub(crate) fn new(root: Option<&'a Node<K, V>>, order: Order, len: usize) -> Self {
        let walk = match order {
            Order::LevelOrder => Walk::LevelOrder(LevelOrder::new(root)),
            order => Walk::DepthFirst(DepthFirst::new(root, order)),
        };

        Nodes { walk, len }
    }
}

impl<'a, K, V> Clone for Nodes<'a, K, V> {
    fn clone(&self) -> Self {
        let walk = match self.walk {
            Walk::DepthFirst(ref it) => Walk::DepthFirst(it.clone()),
            Walk::LevelOrder(ref it) => Walk::LevelOrder(it.clone()),
        };

        Nodes { walk, len: self.len }
    }
}

impl<'a, K, V> Iterator for Nodes<'a, K, V> {
    type Item = &'a Node<K, V>;

    fn next(&mut self) -> Option<&'a Node<K, V>> {
        let node = match self.walk {
            Walk::DepthFirst(ref mut it) => it.next(),
            Walk::LevelOrder(ref mut it) => it.next(),
        }?;

        self.len -= 1;
        Some(node)
    }

    fn size_hint(&self) -> (usize, Option<usize>) { (self.len, Some(self.len)) }
}

impl<'a, K, V> ExactSizeIterator for Nodes<'a, K, V> {}

/// An iterator over a tree's keys in a given order.
pub struct Keys<'a, K, V>(pub(crate) Nodes<'a, K, V>);

impl<'a, K, V> Clone for Keys<'a, K, V> {
    fn clone(&self) -> Self { Keys(self.0.clone()) }
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;
    fn next(&mut self) -> Option<&'a K> { self.0.next().map(Node::key) }
    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<'a, K, V> ExactSizeIterator for Keys<'a, K, V> {}

/// An iterator over a tree's values in a given order.
pub struct Values<'a, K, V>(pub(crate) Nodes<'a, K, V>);

impl<'a, K, V> Clone for Values<'a, K, V> {
    fn clone(&self) -> Self { Values(self.0.clone()) }
}

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;
    fn next(&mut self) -> Option<&'a V> { self.0.next().map(Node::value) }
    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<'a, K, V> ExactSizeIterator for Values<'a, K, V> {}

/// An iterator over a tree's entries in a given order.
pub struct Entries<'a, K, V>(pub(crate) Nodes<'a, K, V>);

impl<'a, K, V> Clone for Entries<'a, K, V> {
    fn clone(&self) -> Self { Entries(self.0.clone()) }
}

impl<'a, K, V> Iterator for Entries<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<(&'a K, &'a V)> {
        self.0.next().map(|node| (&node.key, &node.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<'a, K, V> ExactSizeIterator for Entries<'a, K, V> {}

struct VisitMut<'a, K, V> {
    key: &'a K,
    value: Option<&'a mut V>,
    left: Option<&'a mut Node<K, V>>,
    right: Option<&'a mut Node<K, V>>,
    seen: Seen,
}

impl<'a, K, V> VisitMut<'a, K, V> {
    fn new(node: &'a mut Node<K, V>) -> Self {
        let Node { key, value, left, right } = node;

        VisitMut {
            key,
            value: Some(value),
            left: left.as_deref_mut(),
            right: right.as_deref_mut(),
            seen: Seen::N,
        }
    }

    fn item(&mut self, emit: bool) -> Option<(&'a K, &'a mut V)> {
        if emit { self.value.take().map(|value| (self.key, value)) } else { None }
    }
}

enum WalkMut<'a, K, V> {
    DepthFirst(Vec<VisitMut<'a, K, V>>, Order),
    LevelOrder(VecDeque<&'a mut Node<K, V>>),
}

/// An iterator over a tree's entries with mutable references to the values, in a given order.
///
/// Keys stay immutable: the tree's shape depends on them.
pub struct IterMut<'a, K, V> {
    walk: WalkMut<'a, K, V>,
    len: usize,
}

impl<'a, K, V> IterMut<'a, K, V> {
    /// Creates an iterator over the `len` nodes reachable from `root`.
    pub(crate) fn new(root: Option<&'a mut Node<K, V>>, order: Order, len: usize) -> Self {
        let walk = match order {
            Order::LevelOrder => WalkMut::LevelOrder(root.into_iter().collect()),
            order => WalkMut::DepthFirst(root.into_iter().map(VisitMut::new).collect(), order),
        };

        IterMut { walk, len }
    }
}

impl<'a, K, V> Iterator for IterMut<'a, K, V> {
    type Item = (&'a K, &'a mut V);

    fn next(&mut self) -> Option<(&'a K, &'a mut V)> {
        let item = match self.walk {
            WalkMut::LevelOrder(ref mut queue) => {
                let Node { key, value, left, right } = queue.pop_front()?;
                if let Some(left) = left.as_deref_mut() { queue.push_back(left); }
                if let Some(right) = right.as_deref_mut() { queue.push_back(right); }
                (&*key, value)
            }
            WalkMut::DepthFirst(ref mut visits, order) => loop {
                let visit = visits.last_mut()?;

                let (child, item) = match visit.seen {
                    Seen::N => {
                        visit.seen = Seen::L;
                        (visit.left.take(), visit.item(order == Order::PreOrder))
                    }
                    Seen::L => {
                        visit.seen = Seen::B;
                        (visit.right.take(), visit.item(order == Order::InOrder))
                    }
                    Seen::B => {
                        let item = visit.item(order == Order::PostOrder);
                        visits.pop();
                        (None, item)
                    }
                };

                if let Some(child) = child { visits.push(VisitMut::new(child)); }
                if let Some(item) = item { break item; }
            },
        };

        self.len -= 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) { (self.len, Some(self.len)) }
}

impl<'a, K, V> ExactSizeIterator for IterMut<'a, K, V> {}
