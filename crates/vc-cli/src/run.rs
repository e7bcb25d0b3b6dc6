//! Wires environment parsing, the scheduler, and output artifacts together
//! for one invocation (§6.4).

use std::path::{Path, PathBuf};

use vc_battery::Battery;
use vc_env::EnvironmentSpec;
use vc_house::House;
use vc_output::RunSummary;
use vc_scheduler::{Scheduler, TaskOutcome, TaskSpec};

use crate::args::Arguments;
use crate::discovery;

/// A house file that parsed successfully, ready to be turned into a
/// [`TaskSpec`] per planner.
struct LoadedHouse {
    name: String,
    spec: EnvironmentSpec,
}

/// Parse every `*.house` file under `args.house_path`, writing an error
/// artifact (named after the file's stem) for any that fails to parse, and
/// register planners discovered under `args.algo_path`.
///
/// Returns the list of environments that parsed cleanly.
fn load_environments(args: &Arguments, output_dir: &Path) -> Vec<LoadedHouse> {
    let house_files = discovery::find_house_files(&args.house_path).unwrap_or_else(|err| {
        log::error!("{err}");
        Vec::new()
    });

    let mut loaded = Vec::new();
    for path in house_files {
        let name = house_name(&path);
        match vc_env::parse_path(&path) {
            Ok(spec) => loaded.push(LoadedHouse { name, spec }),
            Err(err) => {
                log::error!("{name}: failed to parse house file: {err}");
                let _ = vc_output::write_error_artifact(output_dir, &name, &err.to_string());
            }
        }
    }
    loaded
}

fn house_name(path: &Path) -> String {
    path.file_stem().and_then(|s| s.to_str()).unwrap_or("house").to_string()
}

/// Run every `(planner, house)` pairing and write the artifacts specified by
/// §6.3. `output_dir` is the working directory artifacts are written into.
pub fn run(args: &Arguments, output_dir: &Path) -> anyhow::Result<()> {
    let descriptors = discovery::find_planner_descriptors(&args.algo_path).unwrap_or_else(|err| {
        log::error!("{err}");
        Vec::new()
    });
    discovery::register_discovered_planners(&descriptors, output_dir);

    let environments = load_environments(args, output_dir);
    let mut planner_names = vc_planner::registry::names();
    planner_names.sort();
    planner_names.dedup();

    log::info!(
        "running {} planner(s) across {} house(s) with {} worker(s)",
        planner_names.len(),
        environments.len(),
        args.num_threads
    );

    let specs = build_task_specs(&environments, &planner_names);
    let outcomes = Scheduler::with_registry(specs, args.num_threads).run();

    write_outcomes(&outcomes, args, output_dir)?;
    Ok(())
}

fn build_task_specs(environments: &[LoadedHouse], planner_names: &[String]) -> Vec<TaskSpec> {
    let mut specs = Vec::with_capacity(environments.len() * planner_names.len());
    for env in environments {
        for planner_name in planner_names {
            let house = match House::new(env.spec.grid.clone(), env.spec.dock) {
                Ok(house) => house,
                Err(err) => {
                    log::error!("{}: {err}", env.name);
                    continue;
                }
            };
            specs.push(TaskSpec {
                planner_name: planner_name.clone(),
                house_name: env.name.clone(),
                house,
                battery: Battery::new(env.spec.max_battery),
                max_steps: env.spec.max_steps as usize,
            });
        }
    }
    specs
}

fn write_outcomes(outcomes: &[TaskOutcome], args: &Arguments, output_dir: &Path) -> anyhow::Result<()> {
    let mut summary = RunSummary::new();

    for outcome in outcomes {
        summary.record(&outcome.house_name, &outcome.planner_name, outcome.score);

        if args.summary_only {
            continue;
        }

        match (&outcome.stats, &outcome.error) {
            (Some(stats), _) => {
                vc_output::write_simulation_artifact(output_dir, &outcome.house_name, &outcome.planner_name, stats)?;
            }
            (None, Some(message)) => {
                let module = format!("{}-{}", outcome.house_name, outcome.planner_name);
                vc_output::write_error_artifact(output_dir, &module, message)?;
            }
            (None, None) => {
                // Timed out: no final simulator state to report, and no
                // error either — nothing to write beyond the summary row.
            }
        }
    }

    let summary_path: PathBuf = output_dir.join("summary.csv");
    summary.write_csv(&summary_path)?;
    Ok(())
}
