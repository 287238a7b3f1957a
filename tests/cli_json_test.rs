//! End-to-end checks that `--json` output is machine-parseable.

use std::process::Command;

use civic_connect::config::{CONFIG_PATH_ENV, Config, Latencies};

fn zero_latency_config() -> (tempfile::TempDir, std::path::PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    let config = Config {
        latencies: Latencies::zero(),
        ..Config::default()
    };
    config.save_to(&path).unwrap();
    (dir, path)
}

fn run(path: &std::path::Path, args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_civic-connect"))
        .env(CONFIG_PATH_ENV, path)
        .args(args)
        .output()
        .unwrap()
}

#[test]
fn test_vote_json_with_near_is_a_single_document() {
    let (_dir, path) = zero_latency_config();

    let output = run(&path, &["vote", "2", "--near", "Bandra", "--json"]);

    assert!(output.status.success());
    // The nearby-issues listing must not precede the JSON payload
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["id"], 2);
}

#[test]
fn test_vote_json_near_only_lists_similar_issues() {
    let (_dir, path) = zero_latency_config();

    let output = run(&path, &["vote", "--near", "Bandra", "--json"]);

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(value.as_array().is_some_and(|issues| !issues.is_empty()));
}
