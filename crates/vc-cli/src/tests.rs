use crate::args::parse_args;
use crate::discovery::{find_house_files, find_planner_descriptors};
use crate::error::CliError;

fn args(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|s| s.to_string()).collect()
}

#[test]
fn no_arguments_yields_defaults() {
    let parsed = parse_args(args(&[])).unwrap().unwrap();
    assert_eq!(parsed.house_path, std::path::PathBuf::from("."));
    assert_eq!(parsed.algo_path, std::path::PathBuf::from("."));
    assert_eq!(parsed.num_threads, 10);
    assert!(!parsed.summary_only);
}

#[test]
fn help_flags_short_circuit_to_none_regardless_of_position() {
    assert!(parse_args(args(&["-h"])).unwrap().is_none());
    assert!(parse_args(args(&["-help"])).unwrap().is_none());
    assert!(parse_args(args(&["--help"])).unwrap().is_none());
    assert!(parse_args(args(&["-num_threads=4", "-h"])).unwrap().is_none());
}

#[test]
fn recognized_flags_populate_arguments() {
    let parsed = parse_args(args(&["-house_path=/tmp/houses", "-algo_path=/tmp/algos", "-num_threads=4", "-summary_only"]))
        .unwrap()
        .unwrap();
    assert_eq!(parsed.house_path, std::path::PathBuf::from("/tmp/houses"));
    assert_eq!(parsed.algo_path, std::path::PathBuf::from("/tmp/algos"));
    assert_eq!(parsed.num_threads, 4);
    assert!(parsed.summary_only);
}

#[test]
fn unknown_flag_is_rejected() {
    let err = parse_args(args(&["-bogus_flag"])).unwrap_err();
    assert!(matches!(err, CliError::InvalidArgument(flag) if flag == "-bogus_flag"));
}

#[test]
fn non_integer_num_threads_is_rejected() {
    let err = parse_args(args(&["-num_threads=four"])).unwrap_err();
    assert!(matches!(err, CliError::NotAnInteger { name: "num_threads", .. }));
}

#[test]
fn house_file_discovery_is_non_recursive_and_sorted() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("b.house"), "").unwrap();
    std::fs::write(dir.path().join("a.house"), "").unwrap();
    std::fs::write(dir.path().join("notes.txt"), "").unwrap();
    std::fs::create_dir(dir.path().join("nested")).unwrap();
    std::fs::write(dir.path().join("nested/c.house"), "").unwrap();

    let found = find_house_files(dir.path()).unwrap();
    let names: Vec<&str> = found.iter().map(|p| p.file_name().unwrap().to_str().unwrap()).collect();
    assert_eq!(names, vec!["a.house", "b.house"]);
}

#[test]
fn planner_descriptor_discovery_filters_by_suffix() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("Greedy.planner"), "").unwrap();
    std::fs::write(dir.path().join("readme.md"), "").unwrap();

    let found = find_planner_descriptors(dir.path()).unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].file_name().unwrap(), "Greedy.planner");
}

#[test]
fn scanning_a_missing_directory_reports_directory_open_error() {
    let err = find_house_files(std::path::Path::new("/no/such/directory/here")).unwrap_err();
    assert!(matches!(err, CliError::DirectoryOpen(_)));
}
