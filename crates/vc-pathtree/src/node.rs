//! Strongly typed index into a `PathTree`'s node pool.

use std::fmt;

/// Index of a node in a [`PathTree`][crate::PathTree]'s arena.
///
/// `Copy + Ord + Hash` so it can be used as a queue element or map key
/// without ceremony. The inner integer is `pub` to allow direct indexing
/// into the arena `Vec` via `id.0`, mirroring the `typed_id!` wrappers used
/// elsewhere in this codebase's lineage.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct NodeId(pub usize);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}
