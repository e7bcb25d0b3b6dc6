//! `vc-planner` — the navigation planner: incremental map, BFS search
//! primitives, the per-turn decision state machine, and the two built-in
//! target-selection strategies.
//!
//! # What lives here
//!
//! | Module       | Contents                                                |
//! |--------------|-----------------------------------------------------------|
//! | [`state`]    | `PlannerState` — wall map, todo set, budget figures        |
//! | [`search`]   | BFS convenience wrappers over `vc_pathtree`                |
//! | [`decision`] | The §4.4 rule table                                        |
//! | [`strategy`] | `TargetStrategy`, `Greedy`, `Dfs`                           |
//! | [`planner`]  | `Planner` trait, `NavigationPlanner`, `GreedyPlanner`, `DfsPlanner` |
//! | [`registry`] | Process-wide planner registrar                             |
//! | [`error`]    | `PlannerError`, `PlannerResult`                             |

pub mod decision;
pub mod error;
pub mod planner;
pub mod registry;
pub mod search;
pub mod state;
pub mod strategy;


pub use error::{PlannerError, PlannerResult};
pub use planner::{DfsPlanner, GreedyPlanner, NavigationPlanner, Planner};
pub use registry::{count, create, names, register, PlannerFactory, PlannerRegistration};
pub use strategy::{Dfs, Greedy, TargetStrategy};
