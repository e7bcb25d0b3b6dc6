//! Breadth-first search over a `PathTree`, expanding against discovered wall
//! knowledge.

use std::collections::VecDeque;

use vc_core::{Direction, Position};

use crate::node::NodeId;
use crate::tree::PathTree;

/// What the searcher knows about a position's walls so far.
///
/// Implemented by the planner's `wall_map` (a position absent from the map
/// has simply never been sensed, and is treated as unexplored — not open).
pub trait WallKnowledge {
    /// `Some(true)` if known to be a wall, `Some(false)` if known open,
    /// `None` if never sensed.
    fn wall_state(&self, position: Position) -> Option<bool>;
}

/// Breadth-first search from `start`, expanding in the fixed direction order
/// `[North, East, South, West]`, stopping at the first node (including the
/// start itself) that satisfies `found`.
///
/// `max_depth` bounds how far any branch may extend; a child deeper than
/// `max_depth` is never inserted. Returns `None` if the predicate is never
/// satisfied before the frontier is exhausted.
///
/// Determinism: the fixed direction order and FIFO expansion make the
/// returned node's path deterministic given identical wall knowledge.
pub fn bfs<W, F>(
    tree: &mut PathTree,
    start: NodeId,
    walls: &W,
    max_depth: usize,
    is_scoring: impl Fn(Position) -> bool,
    found: F,
) -> Option<NodeId>
where
    W: WallKnowledge,
    F: Fn(Position) -> bool,
{
    let start_pos = tree.position(start).ok()?;
    if found(start_pos) {
        return Some(start);
    }

    let mut queue = VecDeque::new();
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        let depth = tree.depth(current).ok()?;
        if depth >= max_depth {
            continue;
        }
        let current_pos = tree.position(current).ok()?;

        for direction in Direction::ALL {
            let child_pos = current_pos.moved(direction);

            match walls.wall_state(child_pos) {
                None | Some(true) => continue,
                Some(false) => {}
            }

            let child = match tree.insert_child(current, direction, child_pos, is_scoring(child_pos)) {
                Ok(Some(id)) => id,
                Ok(None) | Err(_) => continue,
            };

            if found(child_pos) {
                return Some(child);
            }
            queue.push_back(child);
        }
    }

    None
}

/// Walk from `id` to the tree's root, collecting each node's
/// `direction_from_parent` in root-to-`id` order.
pub fn reconstruct_path(tree: &PathTree, mut id: NodeId) -> Vec<Direction> {
    let mut reversed = Vec::new();
    while let Ok(Some(parent)) = tree.parent(id) {
        if let Ok(dir) = tree.direction_from_parent(id) {
            reversed.push(dir);
        }
        id = parent;
    }
    reversed.reverse();
    reversed
}
