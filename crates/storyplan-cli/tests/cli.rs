use assert_cmd::Command;
use predicates::prelude::*;

fn storyplan() -> Command {
    let mut cmd = Command::cargo_bin("storyplan").unwrap();
    // Point at a dead endpoint so every run exercises the sample path.
    cmd.arg("--api-url").arg("http://127.0.0.1:1");
    cmd
}

#[test]
fn generate_succeeds_offline_with_sample_data() {
    storyplan()
        .args(["generate", "--theme", "travel", "--platform", "tiktok"])
        .assert()
        .success()
        .stdout(predicate::str::contains("TikTok • 35-50 seconds"))
        .stdout(predicate::str::contains("sample data"));
}

#[test]
fn generate_json_reports_sample_mode() {
    let output = storyplan()
        .args(["generate", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(json["mode"], "sample");
    assert_eq!(json["idea"]["platform"]["name"], "YouTube");
    assert_eq!(json["idea"]["outline"].as_array().unwrap().len(), 4);
}

#[test]
fn generate_defaults_unknown_keys() {
    let output = storyplan()
        .args(["generate", "--theme", "unknown", "--pacing", "unknown", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(json["idea"]["platform"]["name"], "YouTube");
    assert_eq!(json["idea"]["pacing"], "Balanced");
}

#[test]
fn options_lists_catalog_in_sample_mode() {
    storyplan()
        .arg("options")
        .assert()
        .success()
        .stdout(predicate::str::contains("wellness"))
        .stdout(predicate::str::contains("Instagram Reels"))
        .stdout(predicate::str::contains("Running in sample mode"));
}

#[test]
fn demo_renders_a_full_storyboard() {
    storyplan()
        .arg("demo")
        .assert()
        .success()
        .stdout(predicate::str::contains("Rolled: theme="))
        .stdout(predicate::str::contains("Outline:"))
        .stdout(predicate::str::contains("Call to action:"));
}
