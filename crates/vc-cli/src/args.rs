//! CLI argument parsing (§6.4), hand-rolled rather than pulled from a flags
//! crate: it mirrors `original_source/src/input_handler.cc`'s
//! `parseArgument`/`parseCmdArguments` character-for-character (`-key=value`,
//! no `--`-style long flags, `-h`/`-help`/`--help` short-circuits to usage).

use std::path::PathBuf;

use crate::error::{CliError, CliResult};

pub const USAGE: &str =
    "Usage: myrobot [-house_path=<path>] [-algo_path=<path>] [-num_threads=<num>] [-summary_only]";

const DEFAULT_NUM_THREADS: usize = 10;

#[derive(Clone, Debug)]
pub struct Arguments {
    pub house_path: PathBuf,
    pub algo_path: PathBuf,
    pub num_threads: usize,
    pub summary_only: bool,
}

impl Default for Arguments {
    /// `house_path`/`algo_path` default to the current working directory,
    /// `num_threads` to 10 (§6.4, grounded in `input_handler.cc`).
    fn default() -> Self {
        Self {
            house_path: PathBuf::from("."),
            algo_path: PathBuf::from("."),
            num_threads: DEFAULT_NUM_THREADS,
            summary_only: false,
        }
    }
}

/// `Some(args)` on success; `None` if `-h`/`-help`/`--help` was seen (caller
/// should print [`USAGE`] and exit 0 without running anything).
pub fn parse_args<I: IntoIterator<Item = String>>(raw: I) -> CliResult<Option<Arguments>> {
    let mut args = Arguments::default();

    for raw_argument in raw {
        // Order matters: `-house_path` also starts with `-h`, so the
        // specific flags must all be tried before the help short-circuit,
        // exactly as `input_handler.cc`'s `if`/`else if` chain orders them.
        if let Some(value) = strip_key(&raw_argument, "-house_path") {
            args.house_path = PathBuf::from(value);
        } else if let Some(value) = strip_key(&raw_argument, "-algo_path") {
            args.algo_path = PathBuf::from(value);
        } else if raw_argument.starts_with("-num_threads") {
            let value = strip_key(&raw_argument, "-num_threads").ok_or(CliError::MissingValue("num_threads"))?;
            args.num_threads = value
                .parse()
                .map_err(|_| CliError::NotAnInteger { name: "num_threads", value: value.to_string() })?;
        } else if raw_argument == "-summary_only" {
            args.summary_only = true;
        } else if raw_argument.starts_with("-h") || raw_argument.starts_with("-help") || raw_argument.starts_with("--help") {
            return Ok(None);
        } else {
            return Err(CliError::InvalidArgument(raw_argument));
        }
    }

    Ok(Some(args))
}

fn strip_key<'a>(raw_argument: &'a str, key: &str) -> Option<&'a str> {
    raw_argument.starts_with(key).then(|| raw_argument.split_once('=').map(|(_, v)| v)).flatten()
}
