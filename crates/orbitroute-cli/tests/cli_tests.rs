use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../docs/fixtures/orbital_network.csv")
        .canonicalize()
        .expect("fixture network present")
}

fn cli(network: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("orbitroute-cli");
    cmd.env("RUST_LOG", "error").arg("--network").arg(network);
    cmd
}

#[test]
fn survey_lists_ranked_routes_and_best() {
    let mut cmd = cli(&fixture_path());
    cmd.arg("survey").arg("--from").arg("Terra").arg("--to").arg("Centauri");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "Routes from Terra to Centauri (max 10 stations):",
        ))
        .stdout(predicate::str::contains(
            "Best route: Terra -> (5) Marte -> (3) Jupiter -> (10) Centauri (total 18)",
        ))
        .stdout(predicate::str::contains("Redundant stations:"))
        .stdout(predicate::str::contains(" - Marte reachable via 2 routes"));
}

#[test]
fn survey_respects_the_depth_bound() {
    let mut cmd = cli(&fixture_path());
    cmd.arg("survey")
        .arg("--from")
        .arg("Terra")
        .arg("--to")
        .arg("Centauri")
        .arg("--max-depth")
        .arg("3");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "Best route: Terra -> (12) Jupiter -> (10) Centauri (total 22)",
        ))
        .stdout(predicate::str::contains("Marte -> (3) Jupiter").not());
}

#[test]
fn survey_without_route_reports_absence_and_succeeds() {
    let mut cmd = cli(&fixture_path());
    cmd.arg("survey").arg("--from").arg("Centauri").arg("--to").arg("Terra");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "No route found between Centauri and Terra.",
        ));
}

#[test]
fn survey_json_output_is_parseable() {
    let mut cmd = cli(&fixture_path());
    let assert = cmd
        .arg("survey")
        .arg("--from")
        .arg("Terra")
        .arg("--to")
        .arg("Centauri")
        .arg("--format")
        .arg("json")
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).expect("utf8 output");
    let value: serde_json::Value = serde_json::from_str(&stdout).expect("valid json");

    assert_eq!(value["start"], "Terra");
    assert_eq!(value["goal"], "Centauri");
    assert_eq!(value["best"]["total_duration"], 18);
    assert_eq!(value["routes"].as_array().expect("routes array").len(), 3);
    assert_eq!(value["redundancy"][0]["station"], "Centauri");
}

#[test]
fn stations_lists_the_sorted_inventory() {
    let mut cmd = cli(&fixture_path());
    cmd.arg("stations");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("- Centauri (0 outgoing)"))
        .stdout(predicate::str::contains("- Terra (2 outgoing)"))
        .stdout(predicate::str::contains("- Vega (1 outgoing)"));
}

#[test]
fn missing_network_file_fails_with_context() {
    let temp_dir = tempdir().expect("create temp dir");
    let missing = temp_dir.path().join("absent.csv");
    let mut cmd = cli(&missing);
    cmd.arg("stations");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("failed to load network from"))
        .stderr(predicate::str::contains("network file not found"));
}

#[test]
fn malformed_pairs_do_not_abort_a_survey() {
    let temp_dir = tempdir().expect("create temp dir");
    let path = temp_dir.path().join("records.csv");
    fs::write(&path, "Terra,Marte,oops,Centauri,4\nMarte,Centauri,2\n").expect("write records");

    let mut cmd = cli(&path);
    cmd.arg("survey").arg("--from").arg("Terra").arg("--to").arg("Centauri");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "Best route: Terra -> (4) Centauri (total 4)",
        ));
}
