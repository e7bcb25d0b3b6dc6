//! `myrobot` — scans a house directory and an algorithm directory, runs
//! every (planner, house) pairing through [`vc_scheduler::Scheduler`], and
//! writes the §6.3 output artifacts into the current working directory.
//!
//! Composes every library crate's `Result<T, E>` behind `anyhow::Result` at
//! this one boundary, the same line `examples/xsmall` draws between
//! library-crate errors and binary-level `anyhow`.

mod args;
mod discovery;
mod error;
mod run;

#[cfg(test)]
mod tests;

use args::{parse_args, USAGE};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let Some(arguments) = parse_args(std::env::args().skip(1))? else {
        println!("{USAGE}");
        return Ok(());
    };

    let output_dir = std::env::current_dir()?;
    run::run(&arguments, &output_dir)
}
