use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use serde_json::Value;
use tempfile::TempDir;

const CHAIN: &str = "4\n1 2\n2 3\n3 4\n";

fn stdout_of(args: &[&str], stdin: &str) -> String {
    let output = cargo_bin_cmd!("route-graph")
        .args(args)
        .env_remove("ROUTE_GRAPH_CONFIG")
        .write_stdin(stdin)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    String::from_utf8(output).expect("utf-8 stdout")
}

#[test]
fn show_prints_adjacency() {
    let text = stdout_of(&["show"], "3\n1 2 1 3\n3 1\n");
    assert_eq!(text, "1: (2, 0) (3, 0)\n3: (1, 0)\n");
}

#[test]
fn bfs_on_chain() {
    let text = stdout_of(&["bfs", "1"], CHAIN);
    let rows: Vec<Vec<&str>> = text
        .lines()
        .skip(1)
        .map(|l| l.split_whitespace().collect())
        .collect();
    assert_eq!(
        rows,
        vec![
            vec!["1", "0", "-1"],
            vec!["2", "1", "1"],
            vec!["3", "2", "2"],
            vec!["4", "3", "3"],
        ]
    );
}

#[test]
fn bfs_emits_json() {
    let text = stdout_of(&["--format", "json", "bfs", "2"], CHAIN);
    let json: Value = serde_json::from_str(&text).expect("valid json");
    assert_eq!(json["distances"], serde_json::json!([null, 0, 1, 2]));
    assert_eq!(json["predecessors"], serde_json::json!([null, null, 2, 3]));
}

#[test]
fn vertices_flag_skips_header() {
    let text = stdout_of(&["--vertices", "3", "path", "1", "3"], "1 2 2 3");
    assert_eq!(text, "1 -> 2 -> 3\n2 hops\n");
}

#[test]
fn path_reports_unreachable() {
    let text = stdout_of(&["path", "4", "1"], CHAIN);
    assert_eq!(text, "no path from 4 to 1\n");
}

#[test]
fn transpose_zeroes_weights_and_reverses() {
    let text = stdout_of(&["transpose"], "3\n1 2\n2 3\n");
    assert_eq!(text, "2: (1, 0)\n3: (2, 0)\n-- 3 vertices, 2 edges\n");
}

#[test]
fn routes_from_input_file() {
    let dir = TempDir::new().expect("tempdir");
    let input = dir.path().join("edges.txt");
    fs::write(&input, "6\n1 2\n1 3\n2 4\n3 4\n4 5\n1 6\n6 5\n2 6\n").unwrap();

    let text = stdout_of(&["--input", input.to_str().unwrap(), "routes", "1", "5"], "");
    assert_eq!(text, "1: (6, 0)\n6: (5, 0)\n-- 6 vertices, 2 edges\n");
}

#[test]
fn out_of_bounds_input_fails() {
    let assert = cargo_bin_cmd!("route-graph")
        .args(["show"])
        .env_remove("ROUTE_GRAPH_CONFIG")
        .write_stdin("3\n1 2\n2 7\n")
        .assert()
        .failure()
        .code(1);
    let stderr = String::from_utf8(assert.get_output().stderr.clone()).unwrap();
    assert!(stderr.contains("malformed input at line 3"), "stderr: {stderr}");
    assert!(assert.get_output().stdout.is_empty());
}

#[test]
fn out_of_bounds_source_fails() {
    cargo_bin_cmd!("route-graph")
        .args(["bfs", "9"])
        .env_remove("ROUTE_GRAPH_CONFIG")
        .write_stdin(CHAIN)
        .assert()
        .failure();
}

#[test]
fn config_file_sets_defaults_and_flags_override() {
    let dir = TempDir::new().expect("tempdir");
    let config = dir.path().join("route-graph.toml");
    fs::write(&config, "format = \"json\"\nweights = \"preserve\"\n").unwrap();
    let config = config.to_str().unwrap();

    let text = stdout_of(&["--config", config, "transpose"], "2\n1 2\n");
    let json: Value = serde_json::from_str(&text).expect("valid json");
    assert_eq!(json[1]["adjacency"][0]["neighbor"], 1);

    let text = stdout_of(&["--config", config, "--format", "text", "show"], "2\n1 2\n");
    assert_eq!(text, "1: (2, 0)\n");
}

#[test]
fn max_vertices_limit_enforced() {
    let dir = TempDir::new().expect("tempdir");
    let config = dir.path().join("route-graph.toml");
    fs::write(&config, "max_vertices = 10\n").unwrap();

    cargo_bin_cmd!("route-graph")
        .args(["--config", config.to_str().unwrap(), "show"])
        .write_stdin("11\n")
        .assert()
        .failure();
    cargo_bin_cmd!("route-graph")
        .args(["--config", config.to_str().unwrap(), "--vertices", "11", "show"])
        .write_stdin("")
        .assert()
        .failure();
}
