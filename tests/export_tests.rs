mod common;
use common::{init_db_with_trips, setup_test_db, sk, temp_out, ts};
use predicates::str::contains;
use sparktracker::core::builder::build;
use sparktracker::export::TripExport;
use sparktracker::models::trip::TripInputs;
use std::fs;

#[test]
fn test_export_row_keeps_full_precision() {
    // 1 mile at 8 MPG and $1.00/gal is half a cent past $0.12.
    let inputs = TripInputs {
        mpg: Some(8.0),
        miles_driven: 1.0,
        fuel_price: 1.0,
        gross_pay: 10.0,
        ..TripInputs::default()
    };
    let t = build(&inputs, ts("2025-09-01 10:00")).expect("build");
    let row = TripExport::from(&t);

    assert_eq!(row.fuel_cost, 0.125);
    assert_eq!(row.net_pay, 9.875);
    assert_eq!(row.total_gross, row.gross_pay + row.tips);
    assert_eq!(row.net_pay, row.total_gross - row.fuel_cost);
    assert_eq!(row.earnings_per_hour, t.earnings_per_hour());
}

#[test]
fn test_export_csv_all() {
    let db_path = setup_test_db("export_csv_all");
    init_db_with_trips(&db_path);

    let out = temp_out("export_csv_all", "csv");

    sk().args(["--db", &db_path, "export", "--format", "csv", "--file", &out])
        .assert()
        .success()
        .stdout(contains("CSV export completed"));

    let content = fs::read_to_string(&out).expect("read exported csv");
    let mut lines = content.lines();
    let header = lines.next().expect("header");
    assert!(header.starts_with("timestamp,vehicle_type,engine_type,fuel_type,mpg"));
    assert!(header.ends_with("suggested_quality,quality"));
    assert_eq!(lines.count(), 3);

    assert!(content.contains("2025-09-01 10:00:00,Sedan,4-cylinder,Gas"));
    assert!(content.contains("47.5"));
    assert!(content.contains("2025-10-03 12:15:00"));
}

#[test]
fn test_export_json_matches_recorded_values() {
    let db_path = setup_test_db("export_json_values");
    init_db_with_trips(&db_path);

    let out = temp_out("export_json_values", "json");

    sk().args(["--db", &db_path, "export", "--format", "json", "--file", &out])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    let rows: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    let rows = rows.as_array().expect("array");
    assert_eq!(rows.len(), 3);

    // Values reloaded from the database equal the ones computed at add time.
    let first = &rows[0];
    assert_eq!(first["timestamp"], "2025-09-01 10:00:00");
    assert_eq!(first["mpg"], 28.0);
    assert_eq!(first["total_gross"], 60.0);
    assert_eq!(first["earnings_per_hour"], 60.0);

    let fuel = first["fuel_cost"].as_f64().expect("fuel_cost");
    let net = first["net_pay"].as_f64().expect("net_pay");
    assert!((fuel - 12.5).abs() < 1e-9);
    assert!((net - 47.5).abs() < 1e-9);
    assert_eq!(net, 60.0 - fuel);
    assert_eq!(first["quality"], "Great");
    assert_eq!(first["suggested_quality"], "Great");

    // Insertion order is kept.
    assert_eq!(rows[2]["timestamp"], "2025-10-03 12:15:00");
}

#[test]
fn test_export_json_range() {
    let db_path = setup_test_db("export_json_range");
    init_db_with_trips(&db_path);

    let out = temp_out("export_json_range", "json");

    sk().args([
        "--db", &db_path, "export", "--format", "json", "--file", &out, "--range", "2025-09",
    ])
    .assert()
    .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    assert!(content.contains("2025-09-01 10:00:00"));
    assert!(content.contains("2025-09-01 18:30:00"));
    assert!(!content.contains("2025-10-03"));
}

#[test]
fn test_export_xlsx() {
    let db_path = setup_test_db("export_xlsx");
    init_db_with_trips(&db_path);

    let out = temp_out("export_xlsx", "xlsx");

    sk().args(["--db", &db_path, "export", "--format", "xlsx", "--file", &out])
        .assert()
        .success()
        .stdout(contains("XLSX export completed"));

    let bytes = fs::read(&out).expect("read xlsx");
    assert!(bytes.starts_with(b"PK"));
}

#[test]
fn test_export_empty_range_writes_nothing() {
    let db_path = setup_test_db("export_empty_range");
    init_db_with_trips(&db_path);

    let out = temp_out("export_empty_range", "csv");

    sk().args([
        "--db", &db_path, "export", "--format", "csv", "--file", &out, "--range", "2019",
    ])
    .assert()
    .success()
    .stdout(contains("No trips found for selected range."));

    assert!(fs::metadata(&out).is_err());
}

#[test]
fn test_export_overwrite() {
    let db_path = setup_test_db("export_overwrite");
    init_db_with_trips(&db_path);

    let out = temp_out("export_overwrite", "csv");
    fs::write(&out, "old content").expect("seed file");

    sk().args(["--db", &db_path, "export", "--format", "csv", "--file", &out])
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(contains("not overwritten"));
    assert_eq!(fs::read_to_string(&out).expect("read"), "old content");

    sk().args([
        "--db", &db_path, "export", "--format", "csv", "--file", &out, "--force",
    ])
    .assert()
    .success();
    assert!(fs::read_to_string(&out).expect("read").starts_with("timestamp,"));
}

#[test]
fn test_export_invalid_range() {
    let db_path = setup_test_db("export_invalid_range");
    init_db_with_trips(&db_path);

    sk().args(["--db", &db_path, "export", "--range", "2025-10:2025-09"])
        .assert()
        .failure()
        .stderr(contains("start is after end"));

    sk().args(["--db", &db_path, "export", "--range", "2025:2025-09"])
        .assert()
        .failure()
        .stderr(contains("same format"));
}
