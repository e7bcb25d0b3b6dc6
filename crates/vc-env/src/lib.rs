//! `vc-env` — the `*.house` environment file parser (§6.2).
//!
//! | Module     | Contents                              |
//! |------------|------------------------------------------|
//! | [`parser`] | `parse_path`, `parse_reader`             |
//! | [`spec`]   | `EnvironmentSpec`                         |
//! | [`error`]  | `EnvError`, `EnvResult`                  |

pub mod error;
pub mod parser;
pub mod spec;


pub use error::{EnvError, EnvResult};
pub use parser::{parse_path, parse_reader};
pub use spec::EnvironmentSpec;
