//! `vc-house` — the authoritative environment the Simulator mutates and the
//! planner senses indirectly through [`vc_core::WallsSensor`]/[`vc_core::DirtSensor`].
//!
//! # What lives here
//!
//! | Module   | Contents                                    |
//! |----------|-----------------------------------------------|
//! | [`grid`] | `Grid` — rectangular wall/dirt matrix          |
//! | [`house`] | `House` — grid + dock + agent position, Step semantics |
//! | [`error`] | `HouseError`, `HouseResult`                   |

pub mod error;
pub mod grid;
pub mod house;

#[cfg(test)]
mod tests;

pub use error::{HouseError, HouseResult};
pub use grid::Grid;
pub use house::House;
