use tempfile::TempDir;
use vc_core::Step;
use vc_sim::{SimulationStatistics, Status};

use crate::artifact::write_simulation_artifact;
use crate::error_log::write_error_artifact;
use crate::summary::RunSummary;

fn tmp() -> TempDir {
    tempfile::tempdir().expect("create temp dir")
}

fn stats(steps: Vec<Step>, dirt_left: u32, in_dock: bool, status: Status, score: u32) -> SimulationStatistics {
    SimulationStatistics {
        num_steps_taken: steps.iter().filter(|s| **s != Step::Finish).count(),
        step_history: steps,
        dirt_left,
        is_at_docking_station: in_dock,
        status,
        score,
    }
}

#[test]
fn simulation_artifact_contains_every_required_field() {
    let dir = tmp();
    let s = stats(vec![Step::East, Step::Stay, Step::West, Step::Finish], 0, true, Status::Finished, 3);

    write_simulation_artifact(dir.path(), "house1", "Greedy", &s).unwrap();

    let contents = std::fs::read_to_string(dir.path().join("house1-Greedy.txt")).unwrap();
    assert!(contents.contains("NumSteps = 3"));
    assert!(contents.contains("DirtLeft = 0"));
    assert!(contents.contains("Status = FINISHED"));
    assert!(contents.contains("InDock = TRUE"));
    assert!(contents.contains("Score = 3"));
    assert!(contents.contains("Steps:"));
    assert!(contents.contains("EsWF"));
}

#[test]
fn simulation_artifact_reports_not_in_dock_as_false() {
    let dir = tmp();
    let s = stats(vec![Step::North], 2, false, Status::Dead, 900);

    write_simulation_artifact(dir.path(), "trap", "Dfs", &s).unwrap();

    let contents = std::fs::read_to_string(dir.path().join("trap-Dfs.txt")).unwrap();
    assert!(contents.contains("Status = DEAD"));
    assert!(contents.contains("InDock = FALSE"));
}

#[test]
fn simulation_artifact_file_accumulates_across_runs() {
    let dir = tmp();
    let s = stats(vec![Step::Finish], 0, true, Status::Finished, 0);

    write_simulation_artifact(dir.path(), "a", "Greedy", &s).unwrap();
    write_simulation_artifact(dir.path(), "a", "Greedy", &s).unwrap();

    let contents = std::fs::read_to_string(dir.path().join("a-Greedy.txt")).unwrap();
    assert_eq!(contents.matches("NumSteps = 0").count(), 2);
}

#[test]
fn error_artifact_appends_rather_than_clobbers() {
    let dir = tmp();

    write_error_artifact(dir.path(), "vc_env", "first failure").unwrap();
    write_error_artifact(dir.path(), "vc_env", "second failure").unwrap();

    let contents = std::fs::read_to_string(dir.path().join("vc_env.error")).unwrap();
    assert!(contents.contains("first failure"));
    assert!(contents.contains("second failure"));
}

#[test]
fn run_summary_csv_header_lists_houses_and_rows_list_algorithms() {
    let dir = tmp();
    let mut summary = RunSummary::new();
    summary.record("house1", "Greedy", 100);
    summary.record("house2", "Greedy", 150);
    summary.record("house1", "Dfs", 120);

    let path = dir.path().join("summary.csv");
    summary.write_csv(&path).unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    let mut lines = contents.lines();
    assert_eq!(lines.next().unwrap(), "algorithm,house1,house2");

    let rows: Vec<&str> = lines.collect();
    assert_eq!(rows, vec!["Dfs,120,", "Greedy,100,150"]);
}

#[test]
fn run_summary_is_deterministic_regardless_of_recording_order() {
    let dir = tmp();

    let mut a = RunSummary::new();
    a.record("house2", "Dfs", 1);
    a.record("house1", "Greedy", 2);
    a.record("house1", "Dfs", 3);

    let mut b = RunSummary::new();
    b.record("house1", "Greedy", 2);
    b.record("house1", "Dfs", 3);
    b.record("house2", "Dfs", 1);

    let path_a = dir.path().join("a.csv");
    let path_b = dir.path().join("b.csv");
    a.write_csv(&path_a).unwrap();
    b.write_csv(&path_b).unwrap();

    assert_eq!(std::fs::read_to_string(path_a).unwrap(), std::fs::read_to_string(path_b).unwrap());
}
