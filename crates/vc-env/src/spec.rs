//! The deserialized form of a `*.house` file (§3.1, §6.2).

use vc_core::Position;
use vc_house::Grid;

/// Everything parsed out of a `*.house` file, before a [`vc_house::House`]
/// is constructed from it.
#[derive(Clone, Debug)]
pub struct EnvironmentSpec {
    pub max_steps: u32,
    pub max_battery: u32,
    pub rows: usize,
    pub cols: usize,
    /// The optional 5th header line. Parsed for fidelity with the format
    /// but not consulted by the parser itself — `vc-cli`/`vc-output` name
    /// artifacts after the `*.house` file's stem, not this field.
    pub name: Option<String>,
    pub grid: Grid,
    pub dock: Position,
}
