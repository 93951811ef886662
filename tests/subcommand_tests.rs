//! Integration tests for the individual wgraph subcommands and JSON output

mod support;

use predicates::prelude::*;
use serde_json::{json, Value};
use support::{fixture, wgraph_in};
use tempfile::tempdir;

fn stdout_json(output: &std::process::Output) -> Value {
    serde_json::from_slice(&output.stdout).expect("stdout is JSON")
}

#[test]
fn test_show_prints_adjacency_only() {
    let dir = tempdir().unwrap();
    wgraph_in(dir.path())
        .arg("--file")
        .arg(fixture("graphData.txt"))
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("0: (1, 1) -> (2, 1) -> nullptr\n"))
        .stdout(predicate::str::contains("5: nullptr\n"))
        .stdout(predicate::str::contains("Traversal").not());
}

#[test]
fn test_traverse_defaults_to_depth_first() {
    let dir = tempdir().unwrap();
    wgraph_in(dir.path())
        .arg("--file")
        .arg(fixture("WgraphData.txt"))
        .arg("traverse")
        .assert()
        .success()
        .stdout("Depth First Traversal: 0 1 2 5 6 3 4\n");
}

#[test]
fn test_traverse_breadth_first() {
    let dir = tempdir().unwrap();
    wgraph_in(dir.path())
        .arg("--file")
        .arg(fixture("WgraphData.txt"))
        .args(["traverse", "--order", "bfs"])
        .assert()
        .success()
        .stdout("Breadth First Traversal: 0 1 2 3 4 5 6\n");
}

#[test]
fn test_traverse_unknown_order_exit_code_2() {
    let dir = tempdir().unwrap();
    wgraph_in(dir.path())
        .arg("--file")
        .arg(fixture("WgraphData.txt"))
        .args(["traverse", "--order", "topological"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unknown traversal order"));
}

#[test]
fn test_costs_from_source() {
    let dir = tempdir().unwrap();
    wgraph_in(dir.path())
        .arg("--file")
        .arg(fixture("WgraphData.txt"))
        .args(["costs", "--source", "3"])
        .assert()
        .success()
        .stdout("Smallest cost from vertex 3: inf inf 1 0 2 3 5\n");
}

#[test]
fn test_costs_source_out_of_range() {
    let dir = tempdir().unwrap();
    wgraph_in(dir.path())
        .arg("--file")
        .arg(fixture("WgraphData.txt"))
        .args(["costs", "--source", "7"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("vertex 7 is out of range"));
}

#[test]
fn test_path_between_vertices() {
    let dir = tempdir().unwrap();
    wgraph_in(dir.path())
        .arg("--file")
        .arg(fixture("WgraphData.txt"))
        .args(["path", "--source", "3", "--target", "6"])
        .assert()
        .success()
        .stdout("Path from 3 to 6: 3 -> 2 -> 5 -> 6\n");
}

#[test]
fn test_path_to_unreachable_vertex() {
    let dir = tempdir().unwrap();
    wgraph_in(dir.path())
        .arg("--file")
        .arg(fixture("WgraphData.txt"))
        .args(["path", "--source", "6", "--target", "0"])
        .assert()
        .code(3)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("no path exists from 6 to 0"));
}

#[test]
fn test_json_report() {
    let dir = tempdir().unwrap();
    let output = wgraph_in(dir.path())
        .args(["--format", "json", "--file"])
        .arg(fixture("graphData.txt"))
        .output()
        .unwrap();
    assert!(output.status.success());

    let doc = stdout_json(&output);
    assert_eq!(doc["vertex_count"], 8);
    assert_eq!(
        doc["adjacency"][0],
        json!([{"to": 1, "weight": 1}, {"to": 2, "weight": 1}])
    );
    assert_eq!(doc["adjacency"][5], json!([]));
    assert_eq!(doc["depth_first"], json!([0, 1, 3, 6, 2, 4, 5, 7]));
    assert_eq!(doc["breadth_first"], json!([0, 1, 2, 3, 6, 4, 5, 7]));
    assert_eq!(doc["source"], 0);
    assert_eq!(doc["costs"], json!([0, 1, 1, 2, null, null, 3, null]));
    assert_eq!(
        doc["predecessors"],
        json!([null, 0, 0, 1, null, null, 3, null])
    );
    assert_eq!(
        doc["path"],
        json!({"from": 0, "to": 6, "vertices": [0, 1, 3, 6]})
    );
}

#[test]
fn test_json_report_failure_prints_nothing_on_stdout() {
    let dir = tempdir().unwrap();
    wgraph_in(dir.path())
        .args(["--format", "json", "--file"])
        .arg(fixture("graphData.txt"))
        .args(["report", "--target", "7"])
        .assert()
        .code(3)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("\"type\":\"no_path_exists\""));
}

#[test]
fn test_json_subcommand_emits_only_its_keys() {
    let dir = tempdir().unwrap();
    let output = wgraph_in(dir.path())
        .args(["--format", "json", "--file"])
        .arg(fixture("WgraphData.txt"))
        .args(["traverse", "--order", "bfs"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let doc = stdout_json(&output);
    assert_eq!(doc, json!({"breadth_first": [0, 1, 2, 3, 4, 5, 6]}));
}

#[test]
fn test_json_path() {
    let dir = tempdir().unwrap();
    let output = wgraph_in(dir.path())
        .args(["--format", "json", "--file"])
        .arg(fixture("WgraphData.txt"))
        .args(["path", "--target", "4"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let doc = stdout_json(&output);
    assert_eq!(
        doc,
        json!({"path": {"from": 0, "to": 4, "vertices": [0, 1, 3, 4]}})
    );
}
