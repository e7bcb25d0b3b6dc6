//! Per-simulation text artifacts (§6.3).
//!
//! One file per `(house, algorithm)` pairing, named `<house_name>-<algorithm_name>.txt`
//! per `original_source/src/output_handler.h`, opened in append mode so
//! repeated runs against the same working directory accumulate rather than
//! clobber — matching the original.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use vc_sim::SimulationStatistics;

use crate::error::OutputResult;

/// Write one simulation's artifact into `dir`.
///
/// Format:
/// ```text
/// NumSteps = <int>
/// DirtLeft = <int>
/// Status = FINISHED|WORKING|DEAD
/// InDock = TRUE|FALSE
/// Score = <int>
/// Steps:
/// <concatenated single-char steps>
/// ```
pub fn write_simulation_artifact(
    dir: &Path,
    house_name: &str,
    algorithm_name: &str,
    stats: &SimulationStatistics,
) -> OutputResult<()> {
    let path = dir.join(format!("{house_name}-{algorithm_name}.txt"));
    let mut file = OpenOptions::new().create(true).append(true).open(&path)?;

    let steps: String = stats.step_history.iter().map(|s| s.as_char()).collect();
    let in_dock = if stats.is_at_docking_station { "TRUE" } else { "FALSE" };

    writeln!(file, "NumSteps = {}", stats.num_steps_taken)?;
    writeln!(file, "DirtLeft = {}", stats.dirt_left)?;
    writeln!(file, "Status = {}", stats.status)?;
    writeln!(file, "InDock = {in_dock}")?;
    writeln!(file, "Score = {}", stats.score)?;
    writeln!(file, "Steps:")?;
    writeln!(file, "{steps}")?;

    log::info!("wrote simulation artifact {}", path.display());
    Ok(())
}
