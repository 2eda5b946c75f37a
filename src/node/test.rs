use compare::{natural, Natural};
use super::{bst, level, IterMut, LevelOrder, Link, Node, Nodes, Order};
use crate::{calc, shape};

type N = Node<u8, char>;

/// A leaf whose value is the key's letter: 1 is 'A', 2 is 'B' and so on.
fn n(key: u8) -> N { Node::new(key, (b'@' + key) as char) }

fn link(node: N) -> Link<u8, char> { Some(Box::new(node)) }

//      1
//    /   \
//   2     3
//  / \     \
// 4   5     7
//          /
//        14
fn tree() -> N {
    n(1).with_left(n(2).with_left(n(4)).with_right(n(5)))
        .with_right(n(3).with_right(n(7).with_left(n(14))))
}

fn perfect() -> N {
    n(1).with_left(n(2).with_left(n(4)).with_right(n(5)))
        .with_right(n(3).with_left(n(6)).with_right(n(7)))
}

fn perfect_15() -> N {
    fn grow(key: u8) -> N {
        if key > 7 { return n(key); }
        n(key).with_left(grow(2 * key)).with_right(grow(2 * key + 1))
    }

    grow(1)
}

fn full() -> N { n(1).with_left(n(2).with_left(n(4)).with_right(n(5))).with_right(n(3)) }

fn complete() -> N { n(1).with_left(n(2).with_left(n(4))).with_right(n(3)) }

fn balanced() -> N { n(1).with_left(n(2)).with_right(n(3).with_right(n(7))) }

fn keys(root: &N, order: Order) -> Vec<u8> {
    Nodes::new(Some(root), order, calc::size(Some(root))).map(|node| node.key).collect()
}

#[test]
fn test_traversal_orders() {
    let root = perfect();

    assert_eq!(keys(&root, Order::PreOrder), [1, 2, 4, 5, 3, 6, 7]);
    assert_eq!(keys(&root, Order::InOrder), [4, 2, 5, 1, 6, 3, 7]);
    assert_eq!(keys(&root, Order::PostOrder), [4, 5, 2, 6, 7, 3, 1]);
    assert_eq!(keys(&root, Order::LevelOrder), [1, 2, 3, 4, 5, 6, 7]);

    let root = tree();

    assert_eq!(keys(&root, Order::PreOrder), [1, 2, 4, 5, 3, 7, 14]);
    assert_eq!(keys(&root, Order::InOrder), [4, 2, 5, 1, 3, 14, 7]);
    assert_eq!(keys(&root, Order::PostOrder), [4, 5, 2, 14, 7, 3, 1]);
    assert_eq!(keys(&root, Order::LevelOrder), [1, 2, 3, 4, 5, 7, 14]);
}

#[test]
fn test_traversal_empty() {
    for &order in &[Order::PreOrder, Order::InOrder, Order::PostOrder, Order::LevelOrder] {
        assert_eq!(Nodes::<u8, char>::new(None, order, 0).next(), None);
        assert_eq!(IterMut::<u8, char>::new(None, order, 0).next(), None);
    }

    assert_eq!(LevelOrder::<u8, char>::new(None).count(), 0);
}

#[test]
fn test_traversal_size_hint() {
    let root = tree();
    let mut nodes = Nodes::new(Some(&root), Order::PostOrder, 7);

    assert_eq!(nodes.len(), 7);
    nodes.next();
    nodes.next();
    assert_eq!(nodes.size_hint(), (5, Some(5)));
    assert_eq!(nodes.count(), 5);
}

#[test]
fn test_traversal_clone() {
    let root = perfect();
    let mut nodes = Nodes::new(Some(&root), Order::InOrder, 7);
    nodes.next();

    let rest: Vec<_> = nodes.clone().map(|node| node.key).collect();
    assert_eq!(rest, [2, 5, 1, 6, 3, 7]);
    assert_eq!(nodes.map(|node| node.key).collect::<Vec<_>>(), rest);
}

#[test]
fn test_iter_mut_orders() {
    for &order in &[Order::PreOrder, Order::InOrder, Order::PostOrder, Order::LevelOrder] {
        let mut root = link(tree());
        let expected = keys(root.as_ref().unwrap(), order);

        let visited: Vec<u8> = IterMut::new(root.as_deref_mut(), order, 7)
            .map(|(key, value)| { *value = value.to_ascii_lowercase(); *key })
            .collect();

        assert_eq!(visited, expected);
        assert_eq!(root.as_ref().unwrap().right.as_ref().unwrap().value, 'c');
        assert_eq!(root.as_ref().unwrap().value, 'a');
    }
}

#[test]
fn test_level_add() {
    let mut root = link(complete());
    level::add(&mut root, 5, 'E');
    assert_eq!(root, link(full()));

    let mut root = None;
    level::add(&mut root, 1, 'A');
    assert_eq!(root, link(n(1)));
}

#[test]
fn test_level_add_many() {
    let mut root = None;
    let entries = (1..6).map(|key| (key, (b'@' + key) as char));
    assert_eq!(level::add_many(&mut root, entries), 5);
    assert_eq!(root, link(full()));

    let mut root = link(complete());
    assert_eq!(level::add_many(&mut root, vec![(5, 'E'), (6, 'F'), (7, 'G')]), 3);
    assert_eq!(root, link(perfect()));

    let mut root = link(balanced());
    assert_eq!(level::add_many(&mut root, vec![(4, 'D'), (5, 'E'), (6, 'F')]), 3);
    assert_eq!(root, link(perfect()));

    let mut root = link(tree());
    let entries = [6, 8, 9, 10, 11, 12, 13, 15].iter().map(|&key| (key, (b'@' + key) as char));
    assert_eq!(level::add_many(&mut root, entries), 8);
    assert_eq!(root, link(perfect_15()));

    let mut root = link(perfect());
    assert_eq!(level::add_many(&mut root, vec![]), 0);
    assert_eq!(root, link(perfect()));
}

#[test]
fn test_level_remove() {
    let mut root: Link<u8, char> = None;
    assert_eq!(level::remove(&mut root, &1), None);

    let mut root = link(n(1));
    assert_eq!(level::remove(&mut root, &1), Some((1, 'A')));
    assert_eq!(root, None);

    let mut root = link(perfect());
    assert_eq!(level::remove(&mut root, &20), None);
    assert_eq!(root, link(perfect()));

    let mut root = link(full());
    assert_eq!(level::remove(&mut root, &5), Some((5, 'E')));
    assert_eq!(root, link(complete()));
}

#[test]
fn test_level_remove_backfills() {
    let mut root = link(perfect());
    assert_eq!(level::remove(&mut root, &1), Some((1, 'A')));
    assert_eq!(root, link(n(7).with_left(n(2).with_left(n(4)).with_right(n(5)))
                              .with_right(n(3).with_left(n(6)))));

    // The deepest node's parent is the last node with any child, even a left one only.
    let mut root = link(complete());
    assert_eq!(level::remove(&mut root, &3), Some((3, 'C')));
    assert_eq!(root, link(n(1).with_left(n(2)).with_right(n(4))));
}

#[test]
fn test_level_remove_last_match() {
    // The last match is the deepest node itself, so nothing is copied.
    let mut root = link(Node::new(1, 'a').with_left(Node::new(2, 'b')).with_right(Node::new(2, 'c')));
    assert_eq!(level::remove(&mut root, &2), Some((2, 'c')));
    assert_eq!(root, link(Node::new(1, 'a').with_left(Node::new(2, 'b'))));

    let mut root = link(Node::new(2, 'a')
        .with_left(Node::new(1, 'b').with_left(Node::new(3, 'd')))
        .with_right(Node::new(2, 'c')));
    assert_eq!(level::remove(&mut root, &2), Some((2, 'c')));
    assert_eq!(root, link(Node::new(2, 'a').with_left(Node::new(1, 'b')).with_right(Node::new(3, 'd'))));
}

/// A search tree leaf whose value is the key's letter: 0 is 'A', 1 is 'B' and so on.
fn s(key: u8) -> N { Node::new(key, (b'A' + key) as char) }

//      3
//    /   \
//   1     5
//  / \   / \
// 0   2 4   6
fn search() -> Link<u8, char> {
    link(s(3).with_left(s(1).with_left(s(0)).with_right(s(2)))
             .with_right(s(5).with_left(s(4)).with_right(s(6))))
}

#[test]
fn test_bst_get() {
    let root = search();
    let cmp: Natural<u8> = natural();

    for key in 0..7 {
        assert_eq!(bst::get(&root, &cmp, &key).as_ref().map(|node| node.key), Some(key));
    }

    assert!(bst::get(&root, &cmp, &7).is_none());

    let mut root = root;
    bst::get_mut(&mut root, &cmp, &4).as_mut().unwrap().value = 'x';
    assert_eq!(bst::get(&root, &cmp, &4).as_ref().unwrap().value, 'x');
    assert!(bst::get_mut(&mut root, &cmp, &9).is_none());
}

#[test]
fn test_bst_add() {
    let mut root = None;
    let cmp = natural();

    for &key in &[3, 1, 5, 0, 2, 4, 6] { assert!(bst::add(&mut root, &cmp, key, (b'A' + key) as char)); }
    assert_eq!(root, search());

    assert!(!bst::add(&mut root, &cmp, 3, 'z'));
    assert_eq!(root, search());
}

#[test]
fn test_bst_remove() {
    let cmp = natural();

    let mut root = search();
    assert_eq!(bst::remove(&mut root, &cmp, &3), Some((3, 'D')));
    assert_eq!(root, link(s(4).with_left(s(1).with_left(s(0)).with_right(s(2)))
                              .with_right(s(5).with_right(s(6)))));

    let mut root = search();
    assert_eq!(bst::remove(&mut root, &cmp, &4), Some((4, 'E')));
    assert_eq!(root, link(s(3).with_left(s(1).with_left(s(0)).with_right(s(2)))
                              .with_right(s(5).with_right(s(6)))));

    let mut root = search();
    assert_eq!(bst::remove(&mut root, &cmp, &1), Some((1, 'B')));
    assert_eq!(root, link(s(3).with_left(s(2).with_left(s(0)))
                              .with_right(s(5).with_left(s(4)).with_right(s(6)))));

    assert_eq!(bst::remove(&mut root, &cmp, &2), Some((2, 'C')));
    assert_eq!(root, link(s(3).with_left(s(0)).with_right(s(5).with_left(s(4)).with_right(s(6)))));

    assert_eq!(bst::remove(&mut root, &cmp, &7), None);
    assert_eq!(bst::remove(&mut None::<Box<N>>, &cmp, &7), None);
}

#[test]
fn test_bst_remove_min() {
    let mut root = search();
    assert_eq!(bst::remove_min(&mut root), Some((0, 'A')));
    assert_eq!(bst::remove_min(&mut root), Some((1, 'B')));
    assert_eq!(bst::remove_min(&mut root), Some((2, 'C')));
    assert_eq!(root, link(s(3).with_right(s(5).with_left(s(4)).with_right(s(6)))));
}

#[test]
fn test_bst_from_sorted() {
    let mut entries = (0..7).map(|key| (key, (b'A' + key) as char));
    assert_eq!(bst::from_sorted(&mut entries, 7), search());

    for len in 0..40 {
        let root = bst::from_sorted(&mut (0..len).map(|key| (key, ())), len);
        assert_eq!(calc::size(root.as_deref()), len);
        assert!(shape::is_balanced(root.as_deref()));
        assert_eq!(calc::max_depth(root.as_deref()), (usize::BITS - len.leading_zeros()) as usize);
    }

    // Even ranges root at the lower middle.
    let root = bst::from_sorted(&mut (1..5).map(|key| (key, ())), 4).unwrap();
    assert_eq!(root.key, 2);
    assert_eq!(root.right.as_ref().map(|node| node.key), Some(3));
}

#[test]
fn test_shapes() {
    let cases = [
        // (tree, perfect, full, complete, balanced)
        (perfect(), true, true, true, true),
        (perfect_15(), true, true, true, true),
        (full(), false, true, true, true),
        (complete(), false, false, true, true),
        (balanced(), false, false, false, true),
        (tree(), false, false, false, false),
        (n(1), true, true, true, true),
        (n(1).with_right(n(2)), false, false, false, true),
    ];

    for (root, perfect, full, complete, balanced) in cases.iter().cloned() {
        let root = Some(&root);
        assert_eq!(shape::is_perfect(root), perfect);
        assert_eq!(shape::is_full(root), full);
        assert_eq!(shape::is_complete(root), complete);
        assert_eq!(shape::is_balanced(root), balanced);
    }

    assert!(shape::is_perfect::<u8, char>(None));
    assert!(shape::is_full::<u8, char>(None));
    assert!(shape::is_complete::<u8, char>(None));
    assert!(shape::is_balanced::<u8, char>(None));
}

#[test]
fn test_shape_depths() {
    assert_eq!(calc::max_depth(Some(&tree())), 4);
    assert_eq!(calc::max_depth(Some(&perfect_15())), 4);
    assert_eq!(calc::max_depth(Some(&balanced())), 3);
    assert_eq!(calc::size(Some(&perfect_15())), 15);
}

#[test]
fn test_is_equal() {
    assert!(shape::is_equal::<u8, char>(None, None));
    assert!(shape::is_equal(Some(&perfect()), Some(&perfect())));
    assert!(!shape::is_equal(Some(&perfect()), None));
    assert!(!shape::is_equal(Some(&full()), Some(&complete())));

    // Keys play no part.
    let relabeled = Node::new(9, 'A').with_left(Node::new(8, 'B')).with_right(Node::new(7, 'C'));
    assert!(shape::is_equal(Some(&n(1).with_left(n(2)).with_right(n(3))), Some(&relabeled)));

    let swapped = Node::new(1, 'A').with_left(Node::new(3, 'C')).with_right(Node::new(2, 'B'));
    assert!(!shape::is_equal(Some(&n(1).with_left(n(2)).with_right(n(3))), Some(&swapped)));
}
