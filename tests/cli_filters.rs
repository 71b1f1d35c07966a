mod common;
use assert_cmd::Command;
use common::cli::{PodiumWorkspace, run_podium, run_podium_with_stdin};
use predicates::prelude::*;

#[test]
fn strip_removes_markup_from_argument() {
    let workspace = PodiumWorkspace::new();
    let output = run_podium(&workspace, ["strip", "<b>x</b>&nbsp;y"], "strip_arg");
    assert!(output.status.success(), "strip failed: {}", output.stderr);
    assert_eq!(output.stdout, "x y\n");
}

#[test]
fn strip_reads_stdin_when_no_argument() {
    let workspace = PodiumWorkspace::new();
    let output = run_podium_with_stdin(
        &workspace,
        ["strip"],
        Some("<p>hello <em>world</em></p>\n"),
        "strip_stdin",
    );
    assert!(output.status.success(), "strip failed: {}", output.stderr);
    assert_eq!(output.stdout, "hello world\n");
}

#[test]
fn version_prints_package_version() {
    Command::cargo_bin("podium")
        .expect("podium binary builds")
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn version_json_is_structured() {
    let workspace = PodiumWorkspace::new();
    let output = run_podium(&workspace, ["version", "--json"], "version_json");
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_str(&output.stdout).expect("valid json");
    assert_eq!(value["version"], env!("CARGO_PKG_VERSION"));
}

#[test]
fn bare_invocation_prints_usage_hint() {
    let workspace = PodiumWorkspace::new();
    let output = run_podium(&workspace, [], "bare");
    assert!(output.status.success());
    assert!(output.stdout.contains("--help"));
}
