//! Integration tests for the fitcycle binary.
//!
//! These tests verify end-to-end behavior including:
//! - Plan resolution for dates around the reference date
//! - Task completion logging and persistence
//! - Recipe lookup from meal labels
//! - Calculators and goals

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Helper to create a test data directory
fn setup_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

/// CLI pointed at a private config and data directory
fn cli(dir: &Path) -> Command {
    let config_path = dir.join("config.toml");
    if !config_path.exists() {
        fs::write(&config_path, "[plan]\nreference_start_date = \"2024-01-01\"\n")
            .expect("Failed to write config");
    }

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("fitcycle"));
    cmd.arg("--config")
        .arg(&config_path)
        .arg("--data-dir")
        .arg(dir.join("data"));
    cmd
}

#[test]
fn test_cli_help() {
    Command::new(assert_cmd::cargo::cargo_bin!("fitcycle"))
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Cyclical workout and nutrition planner",
        ));
}

#[test]
fn test_plan_on_reference_date() {
    let temp_dir = setup_test_dir();

    cli(temp_dir.path())
        .args(["plan", "--date", "2024-01-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Monday, January 1, 2024"))
        .stdout(predicate::str::contains("Strength Training"))
        .stdout(predicate::str::contains("Breakfast: Protein Oatmeal"))
        .stdout(predicate::str::contains("Squats: 3 sets x 12 reps"));
}

#[test]
fn test_plan_before_reference_date_uses_last_slot() {
    let temp_dir = setup_test_dir();

    cli(temp_dir.path())
        .args(["plan", "--date", "2023-12-31"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rest Day"))
        .stdout(predicate::str::contains("Breakfast: Greek Yogurt with Granola"));
}

#[test]
fn test_done_toggles_and_persists() {
    let temp_dir = setup_test_dir();
    let log_path = temp_dir.path().join("data/task_log.json");

    cli(temp_dir.path())
        .args(["done", "Breakfast: Protein Oatmeal", "--date", "2024-01-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Marked 'protein' done for 2024-01-01"));

    let raw = fs::read_to_string(&log_path).expect("Failed to read task log");
    let json: serde_json::Value = serde_json::from_str(&raw).expect("Task log is not JSON");
    assert_eq!(json["days"]["2024-01-01"]["protein"], serde_json::Value::Bool(true));

    cli(temp_dir.path())
        .args(["plan", "--date", "2024-01-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[✓] Breakfast: Protein Oatmeal"))
        .stdout(predicate::str::contains("1/3 done"));

    cli(temp_dir.path())
        .args(["done", "Breakfast: Protein Oatmeal", "--date", "2024-01-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Marked 'protein' not done"));
}

#[test]
fn test_done_is_per_date() {
    let temp_dir = setup_test_dir();

    cli(temp_dir.path())
        .args(["done", "Lunch: Grilled Chicken Salad", "--date", "2024-01-01"])
        .assert()
        .success();

    // Same meal a week later is a fresh day
    cli(temp_dir.path())
        .args(["plan", "--date", "2024-01-08"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[ ] Lunch: Grilled Chicken Salad"));
}

#[test]
fn test_done_rejects_untrackable_label() {
    let temp_dir = setup_test_dir();

    cli(temp_dir.path())
        .args(["done", "   ", "--date", "2024-01-01"])
        .assert()
        .failure();
}

#[test]
fn test_done_notes_meal_outside_plan() {
    let temp_dir = setup_test_dir();

    cli(temp_dir.path())
        .args(["done", "Snack: Mixed Nuts", "--date", "2024-01-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("no meal in the plan"));
}

#[test]
fn test_recipe_lookup() {
    let temp_dir = setup_test_dir();

    cli(temp_dir.path())
        .args(["recipe", "Lunch: Quinoa Bowl"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 cup cooked quinoa"));

    cli(temp_dir.path())
        .args(["recipe", "Lunch: Tuna Salad"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No recipe found"));
}

#[test]
fn test_week_lists_seven_days() {
    let temp_dir = setup_test_dir();

    let output = cli(temp_dir.path())
        .args(["week", "--date", "2024-01-01"])
        .output()
        .expect("Failed to run week");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().count(), 7);
    assert!(stdout.contains("Mon 2024-01-01"));
    assert!(stdout.contains("Rest Day"));
}

#[test]
fn test_calendar_month() {
    let temp_dir = setup_test_dir();

    cli(temp_dir.path())
        .args(["calendar", "--year", "2024", "--month", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("February 2024"))
        .stdout(predicate::str::contains("29"))
        .stdout(predicate::str::contains("S=Strength"));
}

#[test]
fn test_bmi() {
    let temp_dir = setup_test_dir();

    cli(temp_dir.path())
        .args(["bmi", "--weight", "70", "--height", "175"])
        .assert()
        .success()
        .stdout(predicate::str::contains("BMI: 22.9 (Normal weight)"));

    cli(temp_dir.path())
        .args(["bmi", "--weight", "0", "--height", "175"])
        .assert()
        .failure();
}

#[test]
fn test_calories() {
    let temp_dir = setup_test_dir();

    cli(temp_dir.path())
        .args([
            "calories",
            "--age",
            "30",
            "--sex",
            "male",
            "--weight",
            "80",
            "--height",
            "180",
            "--activity",
            "moderately_active",
            "--goal",
            "lose_0.5",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Target calories: 2259 kcal"))
        .stdout(predicate::str::contains("198 g"));
}

#[test]
fn test_goal_progress() {
    let temp_dir = setup_test_dir();

    cli(temp_dir.path())
        .args([
            "goal",
            "--type",
            "weight_loss",
            "--start",
            "90",
            "--target",
            "80",
            "--target-date",
            "2000-01-01",
            "--current",
            "85",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Progress: 50%"))
        .stdout(predicate::str::contains("Goal period ended"));
}

#[test]
fn test_goal_needs_current_weight() {
    let temp_dir = setup_test_dir();

    cli(temp_dir.path())
        .args([
            "goal",
            "--type",
            "muscle_gain",
            "--start",
            "70",
            "--target",
            "75",
            "--target-date",
            "2999-01-01",
        ])
        .assert()
        .failure();
}

#[test]
fn test_affirmation_for_date() {
    let temp_dir = setup_test_dir();

    cli(temp_dir.path())
        .args(["affirmation", "--date", "2024-01-07"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Every step forward is progress."));
}

#[test]
fn test_meals_lists_options_with_recipes() {
    let temp_dir = setup_test_dir();

    cli(temp_dir.path())
        .arg("meals")
        .assert()
        .success()
        .stdout(predicate::str::contains("Lunch Options"))
        .stdout(predicate::str::contains("Quinoa Bowl  📖"))
        .stdout(predicate::str::contains("Vegetarian: Quinoa Buddha Bowl"));
}

#[test]
fn test_calendar_markers_distinct_for_similar_tags() {
    let temp_dir = setup_test_dir();
    fs::write(
        temp_dir.path().join("config.toml"),
        r#"
[plan]
reference_start_date = "2024-01-01"
cycle_length = 3
nutrition_cycle = [["Breakfast: Eggs"], ["Lunch: Soup"], ["Dinner: Chili"]]
workout_details = []

[[plan.workout_cycle]]
id = "lift"
name = "Lift"
tag = "Strength"
color = "blue"

[[plan.workout_cycle]]
id = "yoga"
name = "Yoga"
tag = "Stretch"
color = "green"

[[plan.workout_cycle]]
id = "off"
name = "Off"
tag = "Rest"
color = "gray"
"#,
    )
    .expect("Failed to write config");

    cli(temp_dir.path())
        .args(["calendar", "--year", "2024", "--month", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("S=Strength  T=Stretch  R=Rest"))
        .stdout(predicate::str::contains("  1S  2T  3R"));
}

#[test]
fn test_plan_with_non_latin_meal() {
    let temp_dir = setup_test_dir();
    fs::write(
        temp_dir.path().join("config.toml"),
        r#"
[plan]
reference_start_date = "2024-01-01"
cycle_length = 1
nutrition_cycle = [["Breakfast: Oatmeal", "Lunch: 寿司"]]
workout_details = []

[[plan.workout_cycle]]
id = "rest"
name = "Rest Day"
tag = "Rest"
color = "gray"
"#,
    )
    .expect("Failed to write config");

    cli(temp_dir.path())
        .args(["plan", "--date", "2024-01-05"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[ ] Lunch: 寿司"))
        .stdout(predicate::str::contains("0/1 done"));
}

#[test]
fn test_done_logs_to_stderr_when_enabled() {
    let temp_dir = setup_test_dir();

    cli(temp_dir.path())
        .env("RUST_LOG", "debug")
        .args(["done", "Snack: Mixed Nuts", "--date", "2024-01-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Toggled task").not())
        .stderr(predicate::str::contains("Toggled task mixed on 2024-01-01"))
        .stderr(predicate::str::contains("not part of the 2024-01-01 plan"));

    cli(temp_dir.path())
        .env_remove("RUST_LOG")
        .args(["done", "Snack: Mixed Nuts", "--date", "2024-01-01"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}
