//! `vc-pathtree` — the planner's search scaffolding.
//!
//! # What lives here
//!
//! | Module    | Contents                                                  |
//! |-----------|------------------------------------------------------------|
//! | [`node`]  | `NodeId`                                                   |
//! | [`tree`]  | `PathTree` arena: insertion, accessors, best-end lookup     |
//! | [`search`] | `bfs`, `reconstruct_path` — breadth-first search over a tree |
//! | [`error`] | `PathTreeError`, `PathTreeResult`                           |
//!
//! A `PathTree` is not itself a BFS tree: the same position may be visited in
//! more than one branch, but never twice within one branch (enforced by a
//! per-tree visited-position set). One tree is built per planning call and
//! discarded afterward.

pub mod error;
pub mod node;
pub mod search;
pub mod tree;


pub use error::{PathTreeError, PathTreeResult};
pub use node::NodeId;
pub use search::{bfs, reconstruct_path, WallKnowledge};
pub use tree::PathTree;
