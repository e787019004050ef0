use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::env;
use std::fs;

mod common;
use common::{add_trip, init_db_with_trips, setup_test_db, sk, temp_out};

#[test]
fn test_init_applies_migrations() {
    let db_path = setup_test_db("init_applies_migrations");

    sk().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Created trips table"))
        .stdout(contains("Database initialized"));

    // Second run: schema already current.
    sk().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Created trips table").not());
}

#[test]
fn test_relative_db_name_is_shared_by_init_and_add() {
    let root = env::temp_dir().join("relative_db_name");
    let home = root.join("home");
    let cwd = root.join("cwd");
    fs::remove_dir_all(&root).ok();
    fs::create_dir_all(&home).expect("create home");
    fs::create_dir_all(&cwd).expect("create cwd");

    let in_config_dir = home.join(".sparktracker").join("rel.sqlite");

    sk().env("HOME", &home)
        .current_dir(&cwd)
        .args(["--db", "rel.sqlite", "--test", "init"])
        .assert()
        .success()
        .stdout(contains(in_config_dir.to_string_lossy().to_string()));

    sk().env("HOME", &home)
        .current_dir(&cwd)
        .args(["--db", "rel.sqlite", "add", "--at", "2025-09-01 10:00", "--gross", "10"])
        .assert()
        .success();

    assert!(in_config_dir.exists());
    assert!(!cwd.join("rel.sqlite").exists());

    sk().env("HOME", &home)
        .current_dir(&cwd)
        .args(["--db", "rel.sqlite", "list"])
        .assert()
        .success()
        .stdout(contains("2025-09-01 10:00"));
}

#[test]
fn test_add_prints_derived_values() {
    let db_path = setup_test_db("add_prints_derived_values");

    sk().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    sk().args([
        "--db", &db_path, "add", "--at", "2025-09-01 10:00", "--vehicle", "sedan", "--engine",
        "4-cylinder", "--miles", "100", "--gross", "50", "--tips", "10", "--minutes", "60",
        "--fuel-price", "3.50",
    ])
    .assert()
    .success()
    .stdout(contains("Trip added!"))
    .stdout(contains("Great"))
    .stdout(contains("Net: $47.50"))
    .stdout(contains("Earnings/hour: $60.00"))
    .stdout(contains("Fuel cost: $12.50"));
}

#[test]
fn test_add_rejects_invalid_values() {
    let db_path = setup_test_db("add_rejects_invalid_values");

    sk().args(["--db", &db_path, "add", "--vehicle", "tractor"])
        .assert()
        .failure()
        .stderr(contains("Invalid vehicle 'tractor'"));

    sk().args(["--db", &db_path, "add", "--mpg", "60"])
        .assert()
        .failure()
        .stderr(contains("mpg must be between"));

    sk().args(["--db", &db_path, "add", "--minutes", "0"])
        .assert()
        .failure()
        .stderr(contains("trip minutes must be between"));

    sk().args(["--db", &db_path, "add", "--quality", "superb"])
        .assert()
        .failure()
        .stderr(contains("Invalid quality"));

    sk().args(["--db", &db_path, "add", "--at", "yesterday"])
        .assert()
        .failure()
        .stderr(contains("Invalid date format"));

    // Nothing was stored.
    sk().args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("No trips found."));
}

#[test]
fn test_shopping_items_require_shopping_flag() {
    let db_path = setup_test_db("shopping_items_require_flag");

    sk().args(["--db", &db_path, "add", "--items", "3"])
        .assert()
        .failure();

    sk().args([
        "--db", &db_path, "add", "--shopping", "--items", "3", "--shopping-minutes", "10",
    ])
    .assert()
    .success();
}

#[test]
fn test_list_shows_trips_and_override_marker() {
    let db_path = setup_test_db("list_shows_trips");
    init_db_with_trips(&db_path);

    sk().args([
        "--db", &db_path, "add", "--at", "2025-10-04 09:00", "--gross", "40", "--minutes", "60",
        "--quality", "bad", "--zip", "90210",
    ])
    .assert()
    .success()
    .stdout(contains("Auto-suggested quality was"));

    sk().args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("2025-09-01 10:00"))
        .stdout(contains("2025-10-03 12:15"))
        .stdout(contains("Bad*"))
        .stdout(contains("90210"));
}

#[test]
fn test_list_range_filter() {
    let db_path = setup_test_db("list_range_filter");
    init_db_with_trips(&db_path);

    sk().args(["--db", &db_path, "list", "--range", "2025-10"])
        .assert()
        .success()
        .stdout(contains("2025-10-03"))
        .stdout(contains("2025-09-01").not());

    sk().args(["--db", &db_path, "list", "--range", "2025-09-01:2025-09-30"])
        .assert()
        .success()
        .stdout(contains("2025-09-01 18:30"))
        .stdout(contains("2025-10-03").not());

    sk().args(["--db", &db_path, "list", "--range", "2025-13"])
        .assert()
        .failure()
        .stderr(contains("Invalid range"));
}

#[test]
fn test_summary_daily_merges_same_day() {
    let db_path = setup_test_db("summary_daily");
    init_db_with_trips(&db_path);

    sk().args(["--db", &db_path, "summary"])
        .assert()
        .success()
        .stdout(contains("Earnings by Daily"))
        .stdout(contains("2025-09-01"))
        .stdout(contains("$100.00"))
        .stdout(contains("2025-10-03"))
        .stdout(contains("Gross Total: $108.00"))
        .stdout(contains("Net Total: $91.75"));
}

#[test]
fn test_summary_weekly_monthly_yearly() {
    let db_path = setup_test_db("summary_periods");
    init_db_with_trips(&db_path);

    sk().args(["--db", &db_path, "summary", "--period", "weekly"])
        .assert()
        .success()
        .stdout(contains("2025-W36"))
        .stdout(contains("2025-W40"));

    sk().args(["--db", &db_path, "summary", "--period", "monthly"])
        .assert()
        .success()
        .stdout(contains("2025-09"))
        .stdout(contains("2025-10"));

    sk().args(["--db", &db_path, "summary", "--period", "yearly"])
        .assert()
        .success()
        .stdout(contains("Earnings by Yearly"))
        .stdout(contains("2025"));
}

#[test]
fn test_summary_empty_log() {
    let db_path = setup_test_db("summary_empty");

    sk().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    sk().args(["--db", &db_path, "summary"])
        .assert()
        .success()
        .stdout(contains("No trips recorded yet"))
        .stdout(contains("Gross Total: $0.00"))
        .stdout(contains("Net Total: $0.00"));
}

#[test]
fn test_summary_range_and_chart() {
    let db_path = setup_test_db("summary_chart");
    init_db_with_trips(&db_path);
    let chart = temp_out("summary_chart", "svg");

    sk().args([
        "--db", &db_path, "summary", "--period", "monthly", "--range", "2025", "--chart", &chart,
    ])
    .assert()
    .success()
    .stdout(contains("Chart written"));

    let svg = fs::read_to_string(&chart).expect("read chart");
    assert!(svg.contains("<svg"));
    assert!(svg.contains("Earnings by Monthly"));
    assert!(svg.contains("2025-09"));
    assert!(svg.contains("lightblue"));
    assert!(svg.contains("darkblue"));

    sk().args(["--db", &db_path, "summary", "--range", "2025-10"])
        .assert()
        .success()
        .stdout(contains("Gross Total: $8.00"))
        .stdout(contains("2025-09-01").not());
}

#[test]
fn test_clear_requires_confirmation() {
    let db_path = setup_test_db("clear_confirmation");
    init_db_with_trips(&db_path);

    sk().args(["--db", &db_path, "clear"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("Clear cancelled."));

    sk().args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("2025-09-01"));

    sk().args(["--db", &db_path, "clear", "--force"])
        .assert()
        .success()
        .stdout(contains("Cleared 3 trips."));

    sk().args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("No trips found."));

    sk().args(["--db", &db_path, "summary"])
        .assert()
        .success()
        .stdout(contains("Gross Total: $0.00"))
        .stdout(contains("Net Total: $0.00"));

    // Appending after a clear starts a fresh log.
    add_trip(&db_path, "2025-11-01 08:00", "0", "12", "0", "30");
    sk().args(["--db", &db_path, "summary", "--period", "yearly"])
        .assert()
        .success()
        .stdout(contains("Gross Total: $12.00"));
}

#[test]
fn test_chat_single_message_is_logged() {
    let log = temp_out("chat_single_message", "txt");

    sk().args(["chat", "hello there", "--log", &log])
        .assert()
        .success()
        .stdout(contains("You said: hello there"));

    sk().args(["chat", "show me the Commands", "--log", &log])
        .assert()
        .success()
        .stdout(contains("Here's what I can do"));

    let content = fs::read_to_string(&log).expect("read chat log");
    assert!(content.contains("You: hello there"));
    assert!(content.contains("Spark: You said: hello there"));
    assert!(content.contains("You: show me the Commands"));
    assert_eq!(content.matches("] You:").count(), 2);
}

#[test]
fn test_chat_interactive_ignores_blank_lines() {
    let log = temp_out("chat_interactive", "txt");

    sk().args(["chat", "--log", &log])
        .write_stdin("first\n\n   \nsecond\nexit\nnever\n")
        .assert()
        .success()
        .stdout(contains("You said: first"))
        .stdout(contains("You said: second"))
        .stdout(contains("never").not());

    let content = fs::read_to_string(&log).expect("read chat log");
    assert_eq!(content.matches("] You:").count(), 2);
}

#[test]
fn test_vehicles_table() {
    sk().args(["vehicles"])
        .assert()
        .success()
        .stdout(contains("Default MPG"))
        .stdout(contains("Pickup"))
        .stdout(contains("8-cylinder"));
}

#[test]
fn test_internal_log_records_operations() {
    let db_path = setup_test_db("internal_log");
    init_db_with_trips(&db_path);

    sk().args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("migration_applied"))
        .stdout(contains("init"))
        .stdout(contains("add"));
}

#[test]
fn test_db_info_and_check() {
    let db_path = setup_test_db("db_info");
    init_db_with_trips(&db_path);

    sk().args(["--db", &db_path, "db", "--info", "--check"])
        .assert()
        .success()
        .stdout(contains("Total trips:"))
        .stdout(contains("2025-09-01"))
        .stdout(contains("2025-10-03"))
        .stdout(contains("Integrity check passed."));
}

#[test]
fn test_backup_plain_and_compressed() {
    let db_path = setup_test_db("backup");
    init_db_with_trips(&db_path);

    let plain = temp_out("backup_plain", "sqlite");
    sk().args(["--db", &db_path, "backup", "--file", &plain])
        .assert()
        .success()
        .stdout(contains("Backup created"));
    assert!(fs::metadata(&plain).expect("backup exists").len() > 0);

    let zipped = temp_out("backup_zipped", "sqlite");
    let zip_path = zipped.replace(".sqlite", ".zip");
    fs::remove_file(&zip_path).ok();

    sk().args(["--db", &db_path, "backup", "--file", &zipped, "--compress"])
        .assert()
        .success()
        .stdout(contains("Compressed"));

    assert!(fs::metadata(&zip_path).is_ok());
    assert!(fs::metadata(&zipped).is_err());
}
