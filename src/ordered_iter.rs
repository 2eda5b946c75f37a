use ::ordered_iter::OrderedMapIterator;
use super::search;

impl<'a, K, V> OrderedMapIterator for search::Iter<'a, K, V> where K: Ord {
    type Key = &'a K;
    type Val = &'a V;
}
