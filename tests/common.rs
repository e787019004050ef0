#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDateTime;
use sparktracker::core::builder::build;
use sparktracker::models::trip::{TripInputs, TripRecord};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn sk() -> Command {
    cargo_bin_cmd!("sparktracker")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_sparktracker.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize DB and add three trips: two on 2025-09-01, one on 2025-10-03.
pub fn init_db_with_trips(db_path: &str) {
    sk().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    add_trip(db_path, "2025-09-01 10:00", "100", "50", "10", "60");
    add_trip(db_path, "2025-09-01 18:30", "20", "30", "10", "45");
    add_trip(db_path, "2025-10-03 12:15", "10", "8", "0", "40");
}

/// Add one Sedan / 4-cylinder trip at $3.50 per gallon via the CLI.
pub fn add_trip(db_path: &str, at: &str, miles: &str, gross: &str, tips: &str, minutes: &str) {
    sk().args([
        "--db", db_path, "add", "--at", at, "--miles", miles, "--gross", gross, "--tips", tips,
        "--minutes", minutes, "--vehicle", "sedan", "--engine", "4", "--fuel", "gas",
        "--fuel-price", "3.50",
    ])
    .assert()
    .success();
}

pub fn ts(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").expect("valid timestamp")
}

/// Build a default Sedan trip with the given economics at `at`.
pub fn trip(at: &str, miles: f64, gross: f64, tips: f64, minutes: u32) -> TripRecord {
    let inputs = TripInputs {
        miles_driven: miles,
        gross_pay: gross,
        tips,
        trip_minutes: minutes,
        ..TripInputs::default()
    };
    build(&inputs, ts(at)).expect("build trip")
}

pub fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}
