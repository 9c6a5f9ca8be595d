//! Tests for the interactive wizard, driven through stdin.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn wizard(args: &[&str], stdin: &str) -> (TempDir, assert_cmd::assert::Assert) {
    let temp_dir = tempfile::tempdir().expect("temp dir");
    let config = temp_dir.path().join("config.toml");
    fs::write(&config, "").expect("write config");

    let assert = Command::new(assert_cmd::cargo::cargo_bin!("pawcalc"))
        .arg("--config")
        .arg(&config)
        .arg("wizard")
        .args(args)
        .write_stdin(stdin)
        .assert();
    (temp_dir, assert)
}

fn stdout_of(assert: &assert_cmd::assert::Assert) -> String {
    String::from_utf8_lossy(&assert.get_output().stdout).into_owned()
}

#[test]
fn calorie_wizard_full_run() {
    let (_dir, assert) = wizard(&[], "Rex\n10\n\n\n\n");

    assert
        .success()
        .stdout(predicate::str::contains("Dog Calorie Calculator"))
        .stdout(predicate::str::contains("Rex's Daily Calorie Needs"))
        .stdout(predicate::str::contains("551 kcal/day"));
}

#[test]
fn empty_name_blocks_progress() {
    let (_dir, assert) = wizard(&[], "\nRex\n");
    let assert = assert.success();
    let out = stdout_of(&assert);

    assert!(out.contains("Can't continue from name: a name is required"));
    assert_eq!(out.matches("Step 1/5: Name").count(), 2);
    assert!(out.contains("Step 2/5: Weight"));
}

#[test]
fn zero_weight_blocks_progress() {
    let (_dir, assert) = wizard(&[], "Rex\n\n0\n");
    let out = stdout_of(&assert.success());

    assert_eq!(
        out.matches("Can't continue from weight").count(),
        2,
        "blank and zero weight should both be refused"
    );
    assert!(!out.contains("Step 3/5"));
}

#[test]
fn unparsable_weight_is_reported() {
    let (_dir, assert) = wizard(&[], "Rex\nabc\n26 lbs\n");
    let out = stdout_of(&assert.success());

    assert!(out.contains("'abc' is not a number"));
    assert!(out.contains("Step 3/5: Body"));
}

#[test]
fn back_at_first_step_is_noop() {
    let (_dir, assert) = wizard(&[], "b\nRex\nb\n");
    let out = stdout_of(&assert.success());

    // b on step 1 stays put; b on step 2 returns to step 1 with the name kept
    assert_eq!(out.matches("Step 1/5: Name").count(), 3);
    assert!(out.contains("Current: Rex"));
}

#[test]
fn reset_clears_input() {
    let (_dir, assert) = wizard(&[], "Rex\n10\nr\n");
    let out = stdout_of(&assert.success());

    assert!(out.contains("Starting over."));
    let after_reset = out.rsplit("Starting over.").next().unwrap();
    assert!(after_reset.contains("Step 1/5: Name"));
    assert!(!after_reset.contains("Current: Rex"));
}

#[test]
fn calculate_again_from_results() {
    let (_dir, assert) = wizard(&[], "Rex\n10\n\n\nr\nMax\n20\n\n\n\n");
    let out = stdout_of(&assert.success());

    assert!(out.contains("Rex's Daily Calorie Needs"));
    assert!(out.contains("Max's Daily Calorie Needs"));
}

#[test]
fn breed_wizard_quick_select_and_multiplier() {
    let (_dir, assert) = wizard(&["--breed", "german-shepherd"], "\n2\n10\n\n\n\n");

    assert
        .success()
        .stdout(predicate::str::contains(
            "German Shepherd Calorie Calculator",
        ))
        .stdout(predicate::str::contains("Popular German Shepherd names"))
        .stdout(predicate::str::contains("Zeus's Daily Calorie Needs"))
        .stdout(predicate::str::contains("661 kcal/day"))
        .stdout(predicate::str::contains("Degenerative myelopathy"));
}

#[test]
fn breed_wizard_prefills_weight() {
    let (_dir, assert) = wizard(&["--breed", "german-shepherd"], "\nMax\n");

    assert
        .success()
        .stdout(predicate::str::contains("typically weigh 22-40 kg"))
        .stdout(predicate::str::contains("Current: 31 kg"));
}

#[test]
fn unknown_breed_falls_back_to_generic() {
    let (_dir, assert) = wizard(&["--breed", "unicorn"], "Rex\n10\n\n\n\n");

    assert
        .success()
        .stdout(predicate::str::contains("Breed 'unicorn' not found"))
        .stdout(predicate::str::contains("Dog Calorie Calculator"))
        .stdout(predicate::str::contains("551 kcal/day"));
}

#[test]
fn age_wizard_full_run() {
    let (_dir, assert) = wizard(&["age", "--name", "Bella"], "8\n3\n\n");

    assert
        .success()
        .stdout(predicate::str::contains("Dog Age Calculator"))
        .stdout(predicate::str::contains("Bella is 60 in human years"))
        .stdout(predicate::str::contains("Life stage: Mature"));
}

#[test]
fn age_wizard_accepts_months() {
    let (_dir, assert) = wizard(&["age"], "6 months\nsmall\n\n");

    assert
        .success()
        .stdout(predicate::str::contains("is 8 in human years"))
        .stdout(predicate::str::contains("Life stage: Junior"));
}

#[test]
fn age_wizard_blocks_zero() {
    let (_dir, assert) = wizard(&["age"], "0\n");

    assert
        .success()
        .stdout(predicate::str::contains("Can't continue from age"));
}

#[test]
fn unknown_calculator_fails() {
    let (_dir, assert) = wizard(&["horoscope"], "");

    assert
        .failure()
        .stderr(predicate::str::contains("unknown calculator"));
}

#[test]
fn name_option_survives_reset() {
    let (_dir, assert) = wizard(&["age", "--name", "Bella"], "8\n3\nr\n8\n3\n\n");
    let out = stdout_of(&assert.success());

    assert_eq!(out.matches("Bella is 60 in human years").count(), 2);
    assert!(!out.contains("Your dog is"));
}

#[test]
fn obesity_note_for_prone_breeds() {
    let (_dir, assert) = wizard(&["--breed", "golden-retriever"], "\nMax\n\n");

    assert.success().stdout(predicate::str::contains(
        "Golden Retrievers are prone to obesity. Regular weight monitoring is recommended.",
    ));
}

#[test]
fn no_obesity_note_for_other_breeds() {
    let (_dir, assert) = wizard(&["--breed", "german-shepherd"], "\nMax\n\n");
    let out = stdout_of(&assert.success());

    assert!(out.contains("Step 4/6: Body"));
    assert!(!out.contains("prone to obesity"));
}
