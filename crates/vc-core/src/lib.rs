//! `vc-core` — foundational types for the vacuum-robot simulation harness.
//!
//! This crate is a dependency of every other `vc-*` crate. It intentionally
//! has no `vc-*` dependencies and minimal external ones (only `thiserror`,
//! plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                              |
//! |-------------|---------------------------------------------------------|
//! | [`position`] | `Position`, `Direction`                              |
//! | [`step`]     | `Step`                                                |
//! | [`sensors`]  | `WallsSensor`, `DirtSensor`, `BatteryMeter`           |
//! | [`error`]    | `VcError`, `VcResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod position;
pub mod sensors;
pub mod step;

#[cfg(test)]
mod tests;

pub use error::{VcError, VcResult};
pub use position::{Direction, Position};
pub use sensors::{BatteryMeter, DirtSensor, WallsSensor};
pub use step::Step;
