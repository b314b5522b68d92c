//! End-to-end tests for the `reach` binary, human and JSON modes.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;

fn reach() -> Command {
    Command::cargo_bin("reach").expect("binary builds")
}

fn json_stdout(args: &[&str]) -> Value {
    let output = reach().args(args).output().expect("command runs");
    assert!(output.status.success(), "expected success: {output:?}");
    serde_json::from_slice(&output.stdout).expect("stdout is JSON")
}

// ---------------------------------------------------------------------------
// show
// ---------------------------------------------------------------------------

#[test]
fn show_renders_one_line_per_edge() {
    reach()
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("0 --(2)--> 1"))
        .stdout(predicate::str::contains("3 --(-4)--> 8"))
        .stdout(predicate::str::contains("7 --(2)--> 8"));
}

#[test]
fn show_json_reports_counts() {
    let v = json_stdout(&["show", "--json"]);
    assert_eq!(v["node_count"], 9);
    assert_eq!(v["edge_count"], 15);
    assert_eq!(v["nodes"][0], "0");
    assert_eq!(v["edges"].as_array().map(Vec::len), Some(15));
}

// ---------------------------------------------------------------------------
// paths
// ---------------------------------------------------------------------------

#[test]
fn paths_human_lists_heaviest_first() {
    reach()
        .args(["paths", "0", "8"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "10 simple paths from '0' to '8', heaviest first:",
        ))
        .stdout(predicate::str::contains("1 - 0 -> 6 -> 7 -> 8  (weight 13)"));
}

#[test]
fn paths_json_enumerates_all_ten() {
    let v = json_stdout(&["paths", "0", "8", "--json"]);
    assert_eq!(v["path_count"], 10);

    let first = &v["paths"][0];
    assert_eq!(first["nodes"], serde_json::json!(["0", "6", "7", "8"]));
    assert_eq!(first["total_weight"], 13.0);
}

#[test]
fn paths_respects_depth_cap() {
    let v = json_stdout(&["paths", "0", "8", "--max-depth", "3", "--json"]);
    // Only the 3-node paths survive: 0-4-8 and 0-5-8.
    assert_eq!(v["path_count"], 2);
}

#[test]
fn paths_unknown_node_is_an_error() {
    reach()
        .args(["paths", "0", "99"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("node \"99\" is not in the graph"));
}

// ---------------------------------------------------------------------------
// rank
// ---------------------------------------------------------------------------

#[test]
fn rank_puts_the_sink_first() {
    let v = json_stdout(&["rank", "--json"]);
    assert_eq!(v["source"], "0");
    assert_eq!(v["ranking"][0]["name"], "8");
    assert_eq!(v["ranking"][0]["path_count"], 10);
    assert_eq!(v["ranking"].as_array().map(Vec::len), Some(9));
}

// ---------------------------------------------------------------------------
// augment
// ---------------------------------------------------------------------------

#[test]
fn augment_on_fixture_reports_goal_unmet() {
    reach()
        .arg("augment")
        .assert()
        .failure()
        .stderr(predicate::str::contains("needed more than 10"));
}

#[test]
fn augment_json_error_carries_a_stable_code() {
    reach()
        .args(["augment", "--json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("goal_unmet"));
}

// ---------------------------------------------------------------------------
// demo
// ---------------------------------------------------------------------------

#[test]
fn demo_surfaces_the_failed_experiment_and_exits_zero() {
    reach()
        .arg("demo")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "the node reachable by the most simple paths from '0' is '8', with 10 paths",
        ))
        .stdout(predicate::str::contains("0 -> 2 -> 3 -> 8"))
        .stdout(predicate::str::contains(
            "goal not met, hub reached by 4 paths but needed more than 10",
        ));
}

#[test]
fn demo_json_summarizes_every_stage() {
    let v = json_stdout(&["demo", "--json"]);
    assert_eq!(v["most_reachable"]["name"], "8");
    assert_eq!(v["most_reachable"]["path_count"], 10);
    assert_eq!(v["paths"].as_array().map(Vec::len), Some(10));
    assert_eq!(v["augmentation"]["outcome"], "goal_unmet");
    assert_eq!(v["augmentation"]["achieved"], 4);
    assert_eq!(v["augmentation"]["required"], 10);
}
