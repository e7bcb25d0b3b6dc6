//! The `PathTree` arena.
//!
//! The root node is the planner's starting position; end nodes are positions
//! that satisfied a search's found-criteria and were explicitly registered.
//! Branches represent possible paths to those end nodes.
//!
//! A position may recur across different branches of the same tree, but never
//! twice within the same branch — enforced by `visited_positions`, which is
//! per-tree and discarded with it. Each node carries the aggregated score of
//! the path from the root: the count of "scoring" (todo) positions visited
//! along the way, which lets a caller prefer opportunistic paths that also
//! pass through dirt.

use std::collections::HashSet;

use vc_core::{Direction, Position};

use crate::error::{PathTreeError, PathTreeResult};
use crate::node::NodeId;

struct PathNode {
    parent: Option<NodeId>,
    direction_from_parent: Direction,
    position: Position,
    depth: usize,
    score: usize,
}

/// Arena of parent-linked search nodes with a per-tree visited-position set.
#[derive(Default)]
pub struct PathTree {
    nodes: Vec<PathNode>,
    end_nodes: Vec<NodeId>,
    visited: HashSet<Position>,
}

impl PathTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert the root node at `position`. Must be called exactly once,
    /// before any `insert_child` call.
    pub fn insert_root(&mut self, position: Position) -> NodeId {
        debug_assert!(self.nodes.is_empty(), "insert_root called more than once");
        self.nodes.push(PathNode {
            parent: None,
            // Arbitrary: the root has no incoming direction.
            direction_from_parent: Direction::North,
            position,
            depth: 0,
            score: 0,
        });
        self.visited.insert(position);
        NodeId(0)
    }

    /// Insert a child of `parent` reached via `direction`, at `child_position`.
    ///
    /// Returns `None` without mutating the tree if `child_position` is
    /// already visited in this tree (any branch). `is_scoring` marks whether
    /// the child counts toward the path's accumulated score (typically: is
    /// `child_position` a todo position).
    pub fn insert_child(
        &mut self,
        parent: NodeId,
        direction: Direction,
        child_position: Position,
        is_scoring: bool,
    ) -> PathTreeResult<Option<NodeId>> {
        self.validate(parent)?;
        if self.visited.contains(&child_position) {
            return Ok(None);
        }

        let parent_node = &self.nodes[parent.0];
        let depth = parent_node.depth + 1;
        let score = parent_node.score + usize::from(is_scoring);

        self.nodes.push(PathNode {
            parent: Some(parent),
            direction_from_parent: direction,
            position: child_position,
            depth,
            score,
        });
        self.visited.insert(child_position);

        Ok(Some(NodeId(self.nodes.len() - 1)))
    }

    pub fn parent(&self, id: NodeId) -> PathTreeResult<Option<NodeId>> {
        Ok(self.node(id)?.parent)
    }

    pub fn direction_from_parent(&self, id: NodeId) -> PathTreeResult<Direction> {
        Ok(self.node(id)?.direction_from_parent)
    }

    pub fn position(&self, id: NodeId) -> PathTreeResult<Position> {
        Ok(self.node(id)?.position)
    }

    pub fn depth(&self, id: NodeId) -> PathTreeResult<usize> {
        Ok(self.node(id)?.depth)
    }

    pub fn score(&self, id: NodeId) -> PathTreeResult<usize> {
        Ok(self.node(id)?.score)
    }

    /// Mark `id` as a candidate end node for [`best_end_by_score`][Self::best_end_by_score].
    pub fn register_end(&mut self, id: NodeId) -> PathTreeResult<()> {
        self.validate(id)?;
        self.end_nodes.push(id);
        Ok(())
    }

    /// The registered end node with the highest score; ties go to whichever
    /// was registered first.
    pub fn best_end_by_score(&self) -> Option<NodeId> {
        let mut best: Option<(NodeId, usize)> = None;
        for &id in &self.end_nodes {
            let score = self.nodes[id.0].score;
            match best {
                Some((_, best_score)) if score <= best_score => {}
                _ => best = Some((id, score)),
            }
        }
        best.map(|(id, _)| id)
    }

    /// `true` if `position` has already been visited by this tree, in any
    /// branch.
    pub fn is_visited(&self, position: Position) -> bool {
        self.visited.contains(&position)
    }

    fn node(&self, id: NodeId) -> PathTreeResult<&PathNode> {
        self.validate(id)?;
        Ok(&self.nodes[id.0])
    }

    fn validate(&self, id: NodeId) -> PathTreeResult<()> {
        if id.0 >= self.nodes.len() {
            return Err(PathTreeError::OutOfRange(id));
        }
        Ok(())
    }
}
