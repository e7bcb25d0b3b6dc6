//! `<module>.error` artifacts (§6.3, §7) — appended whenever a planner or
//! environment raises during load or run.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use crate::error::OutputResult;

/// Append one error line to `<module_name>.error` in `dir`.
pub fn write_error_artifact(dir: &Path, module_name: &str, message: &str) -> OutputResult<()> {
    let path = dir.join(format!("{module_name}.error"));
    let mut file = OpenOptions::new().create(true).append(true).open(&path)?;
    writeln!(file, "{message}")?;
    log::error!("{module_name}: {message}");
    Ok(())
}
