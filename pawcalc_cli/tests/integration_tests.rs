//! Integration tests for the pawcalc binary.
//!
//! These tests verify end-to-end behavior of the one-shot commands:
//! - Calorie and age calculations
//! - Breed registry browsing
//! - Error reporting for unusable input
//! - Configuration defaults

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Helper to create an isolated config file
fn setup_config(contents: &str) -> (TempDir, PathBuf) {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = temp_dir.path().join("config.toml");
    fs::write(&path, contents).expect("Failed to write config");
    (temp_dir, path)
}

/// Helper to get the CLI binary pointed at a test config
fn cli(config: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("pawcalc"));
    cmd.arg("--config").arg(config);
    cmd
}

fn json_output(cmd: &mut Command) -> Value {
    let output = cmd.assert().success().get_output().stdout.clone();
    serde_json::from_slice(&output).expect("stdout should be JSON")
}

#[test]
fn test_cli_help() {
    Command::new(assert_cmd::cargo::cargo_bin!("pawcalc"))
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Dog calorie and age calculators"));
}

#[test]
fn test_calories_reference_value() {
    let (_dir, config) = setup_config("");

    cli(&config)
        .args(["calories", "--weight", "10", "--name", "Rex"])
        .assert()
        .success()
        .stdout(predicate::str::contains("551 kcal/day"))
        .stdout(predicate::str::contains("Rex is at a healthy weight"));
}

#[test]
fn test_calories_in_pounds() {
    let (_dir, config) = setup_config("");

    cli(&config)
        .args(["calories", "--weight", "22.0462", "--unit", "lbs"])
        .assert()
        .success()
        .stdout(predicate::str::contains("551 kcal/day"));
}

#[test]
fn test_calories_with_breed_json() {
    let (_dir, config) = setup_config("");

    let report = json_output(cli(&config).args([
        "calories",
        "--weight",
        "10",
        "--breed",
        "german-shepherd",
        "--json",
    ]));

    assert_eq!(report["daily_calories"], 661);
    assert_eq!(report["breed"], "german-shepherd");
    assert_eq!(report["breed_multiplier"], 1.2);
}

#[test]
fn test_calories_activity_and_condition() {
    let (_dir, config) = setup_config("");

    let lazy = json_output(cli(&config).args([
        "calories",
        "--weight",
        "20",
        "--activity",
        "sedentary",
        "--condition",
        "overweight",
        "--json",
    ]));
    let athlete = json_output(cli(&config).args([
        "calories",
        "--weight",
        "20",
        "--activity",
        "very-active",
        "--condition",
        "underweight",
        "--json",
    ]));

    assert!(lazy["daily_calories"].as_u64().unwrap() < athlete["daily_calories"].as_u64().unwrap());
}

#[test]
fn test_calories_rejects_zero_weight() {
    let (_dir, config) = setup_config("");

    cli(&config)
        .args(["calories", "--weight", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("weight must be a positive number"));
}

#[test]
fn test_calories_rejects_negative_weight() {
    let (_dir, config) = setup_config("");

    cli(&config)
        .args(["calories", "--weight", "-5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("weight must be a positive number"));
}

#[test]
fn test_calories_unknown_breed() {
    let (_dir, config) = setup_config("");

    cli(&config)
        .args(["calories", "--weight", "10", "--breed", "unicorn"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no breed with slug 'unicorn'"));
}

#[test]
fn test_calories_unknown_activity() {
    let (_dir, config) = setup_config("");

    cli(&config)
        .args(["calories", "--weight", "10", "--activity", "lazy"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown activity level"));
}

#[test]
fn test_age_two_year_medium() {
    let (_dir, config) = setup_config("");

    cli(&config)
        .args(["age", "--age", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("is 24 in human years"))
        .stdout(predicate::str::contains("Young Adult"));
}

#[test]
fn test_age_json() {
    let (_dir, config) = setup_config("");

    let result = json_output(cli(&config).args(["age", "--age", "8", "--size", "large", "--json"]));

    assert_eq!(result["human_age"], 60);
    assert_eq!(result["life_stage"], "Mature");
    assert_eq!(result["advisory"].as_array().unwrap().len(), 4);
}

#[test]
fn test_age_in_months() {
    let (_dir, config) = setup_config("");

    let result = json_output(cli(&config).args([
        "age", "--age", "96", "--unit", "months", "--size", "large", "--json",
    ]));

    assert_eq!(result["human_age"], 60);
}

#[test]
fn test_age_out_of_range() {
    let (_dir, config) = setup_config("");

    cli(&config)
        .args(["age", "--age", "31"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("exceeds the supported maximum"));
}

#[test]
fn test_breeds_list() {
    let (_dir, config) = setup_config("");

    let mut assert = cli(&config).arg("breeds").assert().success();
    for slug in [
        "french-bulldog",
        "german-shepherd",
        "golden-retriever",
        "labrador-retriever",
        "poodle",
    ] {
        assert = assert.stdout(predicate::str::contains(slug));
    }
}

#[test]
fn test_breeds_json() {
    let (_dir, config) = setup_config("");

    let breeds = json_output(cli(&config).args(["breeds", "--json"]));
    let breeds = breeds.as_array().unwrap();

    assert_eq!(breeds.len(), 5);
    assert_eq!(breeds[0]["slug"], "french-bulldog");
    assert_eq!(breeds[0]["activity_level"], "low");
}

#[test]
fn test_breed_detail() {
    let (_dir, config) = setup_config("");

    cli(&config)
        .args(["breed", "poodle"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Poodle"))
        .stdout(predicate::str::contains("Progressive retinal atrophy"));
}

#[test]
fn test_breed_not_found() {
    let (_dir, config) = setup_config("");

    cli(&config)
        .args(["breed", "unicorn"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("NotFound"));
}

#[test]
fn test_config_default_unit() {
    let (_dir, config) = setup_config(
        r#"
[units]
weight_unit = "lbs"
"#,
    );

    cli(&config)
        .args(["calories", "--weight", "22.0462"])
        .assert()
        .success()
        .stdout(predicate::str::contains("551 kcal/day"));
}

#[test]
fn test_invalid_config_reported() {
    let (_dir, config) = setup_config("[units]\nweight_unit = \"stone\"\n");

    cli(&config)
        .args(["calories", "--weight", "10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Toml"));
}

#[test]
fn test_calories_shows_pounds() {
    let (_dir, config) = setup_config("");

    cli(&config)
        .args(["calories", "--weight", "10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("10.0 kg (22.0 lbs)"));
}

#[test]
fn test_calories_out_of_range_result() {
    let (_dir, config) = setup_config("");

    cli(&config)
        .args(["calories", "--weight", "1e30"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of range"));
}

#[test]
fn test_defaults_saved_and_applied() {
    let (_dir, config) = setup_config("");

    cli(&config)
        .args(["defaults", "--weight-unit", "lbs", "--size", "large"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved defaults"))
        .stdout(predicate::str::contains("weight unit:    lbs"));

    let saved = fs::read_to_string(&config).unwrap();
    assert!(saved.contains("weight_unit = \"lbs\""));

    cli(&config)
        .args(["calories", "--weight", "22.0462"])
        .assert()
        .success()
        .stdout(predicate::str::contains("551 kcal/day"));

    let result = json_output(cli(&config).args(["age", "--age", "8", "--json"]));
    assert_eq!(result["human_age"], 60);
}

#[test]
fn test_defaults_show_only() {
    let (_dir, config) = setup_config("");

    cli(&config)
        .arg("defaults")
        .assert()
        .success()
        .stdout(predicate::str::contains("weight unit:    kg"))
        .stdout(predicate::str::contains("Saved defaults").not());

    assert_eq!(fs::read_to_string(&config).unwrap(), "");
}

#[test]
fn test_defaults_rejects_unknown_value() {
    let (_dir, config) = setup_config("");

    cli(&config)
        .args(["defaults", "--activity", "lazy"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown activity level"));

    assert_eq!(fs::read_to_string(&config).unwrap(), "");
}
