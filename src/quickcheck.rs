use compare::Compare;
use ::quickcheck::{Arbitrary, Gen};
use super::{BinaryTree, Node, Order, SearchTree, Tree};

/// Grows a tree of `len` nodes with randomly sized subtrees, taking entries in pre-order.
fn grow<K, V, I>(entries: &mut I, len: usize, gen: &mut Gen) -> Option<Node<K, V>>
    where I: Iterator<Item=(K, V)> {

    if len == 0 { return None; }

    let (key, value) = entries.next()?;
    let left_len = usize::arbitrary(gen) % len;
    let mut node = Node::new(key, value);

    if let Some(left) = grow(entries, left_len, gen) { node = node.with_left(left); }
    if let Some(right) = grow(entries, len - 1 - left_len, gen) { node = node.with_right(right); }

    Some(node)
}

/// Trees of any shape, not only the complete ones that `add` builds.
impl<K, V> Arbitrary for BinaryTree<K, V> where K: Arbitrary, V: Arbitrary {
    fn arbitrary(gen: &mut Gen) -> Self {
        let entries = Vec::<(K, V)>::arbitrary(gen);
        let len = entries.len();

        grow(&mut entries.into_iter(), len, gen).map_or_else(BinaryTree::new, BinaryTree::from_root)
    }

    fn shrink(&self) -> Box<dyn Iterator<Item=Self>> {
        let mut subtrees = vec![];

        if let Some(mut root) = self.clone().into_root() {
            subtrees.extend(root.take_left().map(BinaryTree::from_root));
            subtrees.extend(root.take_right().map(BinaryTree::from_root));
        }

        Box::new(subtrees.into_iter())
    }
}

impl<K, V, C> Arbitrary for SearchTree<K, V, C>
    where K: Arbitrary, V: Arbitrary, C: 'static + Clone + Compare<K> + Default {

    fn arbitrary(gen: &mut Gen) -> Self { Vec::<(K, V)>::arbitrary(gen).into_iter().collect() }

    fn shrink(&self) -> Box<dyn Iterator<Item=Self>> {
        // Re-adding in pre-order rebuilds the same shape.
        let vec: Vec<(K, V)> = self.entries(Order::PreOrder)
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();

        Box::new(vec.shrink().map(|vec| vec.into_iter().collect()))
    }
}
