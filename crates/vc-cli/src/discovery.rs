//! Directory scanning (§6.4), grounded in
//! `original_source/src/input_handler.cc`'s `searchDirectory`/`openHouses`/
//! `openAlgorithms`: a non-recursive scan filtered by filename suffix.
//!
//! `openAlgorithms` there `dlopen()`s a `.so` and relies on the shared
//! object's static initializer to self-register with the algorithm
//! registrar. This crate has no dynamic native-code loading (out of scope,
//! §9), so a "planner module" here is instead a `.planner` descriptor file
//! whose stem names an already-registered planner (built-in, or registered
//! in-process by an embedder) — discovery re-registers that name so
//! `vc_planner::registry::count()` reflects what `-algo_path` contributed,
//! matching the testable property in §8 without needing real dynamic
//! loading.

use std::path::{Path, PathBuf};

use crate::error::{CliError, CliResult};

const HOUSE_SUFFIX: &str = ".house";
const PLANNER_DESCRIPTOR_SUFFIX: &str = ".planner";

/// Every `*.house` file directly inside `dir` (non-recursive).
pub fn find_house_files(dir: &Path) -> CliResult<Vec<PathBuf>> {
    find_with_suffix(dir, HOUSE_SUFFIX)
}

/// Every `*.planner` descriptor file directly inside `dir` (non-recursive).
pub fn find_planner_descriptors(dir: &Path) -> CliResult<Vec<PathBuf>> {
    find_with_suffix(dir, PLANNER_DESCRIPTOR_SUFFIX)
}

fn find_with_suffix(dir: &Path, suffix: &str) -> CliResult<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir).map_err(|_| CliError::DirectoryOpen(dir.to_path_buf()))?;

    let mut found = Vec::new();
    for entry in entries.flatten() {
        let path = entry.path();
        let is_match = path.is_file()
            && path.file_name().and_then(|n| n.to_str()).is_some_and(|name| name.ends_with(suffix));
        if is_match {
            found.push(path);
        }
    }
    found.sort();
    Ok(found)
}

/// Re-register each discovered descriptor's stem under the matching
/// already-registered factory (§9's "read descriptor files and register the
/// matching in-process factory by name"). Descriptors naming an unknown
/// planner are reported as a load failure but otherwise skipped.
pub fn register_discovered_planners(descriptors: &[PathBuf], output_dir: &Path) {
    for descriptor in descriptors {
        let Some(stem) = descriptor.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };

        match stem {
            "Greedy" => vc_planner::registry::register("Greedy", || Box::new(vc_planner::GreedyPlanner::new())),
            "Dfs" => vc_planner::registry::register("Dfs", || Box::new(vc_planner::DfsPlanner::new())),
            other => {
                let message = format!("planner descriptor names unknown planner {other:?}");
                log::error!("{message}");
                let _ = vc_output::write_error_artifact(output_dir, other, &message);
            }
        }
    }
}
