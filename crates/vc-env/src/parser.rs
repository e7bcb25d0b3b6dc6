//! The `*.house` file parser: header parameters, then a grid of cell
//! characters. Grounded in `original_source/src/deserializer.cc`'s
//! trim-then-parse-then-validate pipeline.

use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use vc_core::Position;
use vc_house::Grid;

use crate::error::{EnvError, EnvResult};
use crate::spec::EnvironmentSpec;

const MAX_STEPS: &str = "MaxSteps";
const MAX_BATTERY: &str = "MaxBattery";
const ROWS: &str = "Rows";
const COLS: &str = "Cols";

/// Parse a `*.house` file from disk.
pub fn parse_path(path: &Path) -> EnvResult<EnvironmentSpec> {
    let file = std::fs::File::open(path)?;
    parse_reader(file)
}

/// Parse a `*.house` file from any [`Read`] source — useful for tests.
pub fn parse_reader<R: Read>(reader: R) -> EnvResult<EnvironmentSpec> {
    let mut lines = BufReader::new(reader).lines();

    let max_steps = parse_parameter(&mut lines, MAX_STEPS)?;
    let max_battery = parse_parameter(&mut lines, MAX_BATTERY)?;
    let rows = parse_parameter(&mut lines, ROWS)? as usize;
    let cols = parse_parameter(&mut lines, COLS)? as usize;

    // Optional 5th header line (internal name) — always consumed if present,
    // never required.
    let name = lines.next().transpose()?.filter(|line| !line.is_empty());

    let mut walls = vec![false; rows * cols];
    let mut dirt = vec![0u32; rows * cols];
    let mut dock = None;

    for (row, line) in lines.enumerate().take(rows) {
        let line = line?;
        for (col, ch) in line.chars().enumerate().take(cols) {
            let index = row * cols + col;
            match ch {
                '0'..='9' => dirt[index] = ch as u32 - '0' as u32,
                'D' => {
                    if dock.is_some() {
                        return Err(EnvError::DuplicateDock);
                    }
                    dock = Some(Position::new(row as i32, col as i32));
                }
                'W' => walls[index] = true,
                _ => {}
            }
        }
    }

    let dock = dock.ok_or(EnvError::MissingDock)?;

    Ok(EnvironmentSpec {
        max_steps,
        max_battery,
        rows,
        cols,
        name,
        grid: Grid::new(rows, cols, walls, dirt),
        dock,
    })
}

/// Read one `key = value` line, validate `key == name`, and parse `value`
/// as a non-negative integer.
fn parse_parameter(lines: &mut std::io::Lines<impl BufRead>, name: &'static str) -> EnvResult<u32> {
    let line = lines
        .next()
        .transpose()?
        .ok_or(EnvError::MissingParameter(name))?;

    let Some((key, value)) = line.split_once('=') else {
        return Err(EnvError::MissingParameter(name));
    };

    if key.trim() != name {
        return Err(EnvError::MissingParameter(name));
    }

    let value = value.trim();
    let parsed: i64 = value
        .parse()
        .map_err(|_| EnvError::NotAnInteger { name, value: value.to_string() })?;

    if parsed < 0 {
        return Err(EnvError::Negative { name, value: value.to_string() });
    }

    Ok(parsed as u32)
}
