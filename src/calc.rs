//! Depth and size calculations.
//!
//! `max_depth` and `size` walk a tree; the remaining functions are closed forms relating a
//! tree's depth to how many nodes or leaves it can hold.

use thiserror::Error;
use super::Node;

/// An error returned by the closed-form helpers for an argument that describes no tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum InvalidArgument {
    /// A depth of zero.
    #[error("number of levels must be greater than 0")]
    ZeroDepth,
    /// A depth whose node count does not fit in a `usize`.
    #[error("a tree with {0} levels has more nodes than fit in a usize")]
    DepthOverflow(u32),
    /// A node count of zero.
    #[error("number of nodes must be greater than 0")]
    ZeroNodes,
    /// A leaf count of zero.
    #[error("number of leaves must be greater than 0")]
    ZeroLeaves,
}

/// Returns the number of levels in the tree rooted at `root`, or 0 for an empty tree.
pub fn max_depth<K, V>(root: Option<&Node<K, V>>) -> usize {
    root.map_or(0, |node| 1 + max_depth(node.left()).max(max_depth(node.right())))
}

/// Returns the number of nodes in the tree rooted at `root`.
pub fn size<K, V>(root: Option<&Node<K, V>>) -> usize {
    root.map_or(0, |node| 1 + size(node.left()) + size(node.right()))
}

/// Returns the number of nodes in a perfect tree of the given depth, `2^depth - 1`.
///
/// # Examples
///
/// ```
/// use bintree::calc::{self, InvalidArgument};
///
/// assert_eq!(calc::max_nodes_at_depth(3), Ok(7));
/// assert_eq!(calc::max_nodes_at_depth(0), Err(InvalidArgument::ZeroDepth));
/// ```
pub fn max_nodes_at_depth(depth: u32) -> Result<usize, InvalidArgument> {
    if depth == 0 { return Err(InvalidArgument::ZeroDepth); }

    usize::BITS.checked_sub(depth)
        .map(|shift| usize::MAX >> shift)
        .ok_or(InvalidArgument::DepthOverflow(depth))
}

/// Returns the depth of the shallowest tree holding `size` nodes with every level full,
/// `floor(log2(size + 1))`.
pub fn min_depth_at_nodes_size(size: usize) -> Result<u32, InvalidArgument> {
    if size == 0 { return Err(InvalidArgument::ZeroNodes); }
    Ok(size.checked_add(1).map_or(usize::BITS, usize::ilog2))
}

/// Returns the depth of the shallowest tree with `leaves` leaves, `floor(log2(leaves)) + 1`.
pub fn min_depth_at_leaves_size(leaves: usize) -> Result<u32, InvalidArgument> {
    if leaves == 0 { return Err(InvalidArgument::ZeroLeaves); }
    Ok(leaves.ilog2() + 1)
}
