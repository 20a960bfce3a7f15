use predicates::str::contains;
use std::fs;

mod common;
use common::{init_db_with_family, rcl, setup_test_db, temp_out};

#[test]
fn export_events_csv_all() {
    let db_path = setup_test_db("export_csv_all");
    let out = temp_out("export_csv_all", "csv");
    init_db_with_family(&db_path);

    rcl()
        .args([
            "--db",
            &db_path,
            "event",
            "--add",
            "Dentist",
            "--date",
            "2026-03-10",
            "--assign",
            "2",
        ])
        .assert()
        .success();

    rcl()
        .args(["--db", &db_path, "export", "--format", "csv", "--file", &out])
        .assert()
        .success()
        .stdout(contains("CSV export completed"));

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.contains("Dentist"));
    assert!(content.contains("2026-03-10"));
    // Assignee resolved to a name, not an id.
    assert!(content.contains("Bob"));
}

#[test]
fn export_events_json_pretty() {
    let db_path = setup_test_db("export_json");
    let out = temp_out("export_json", "json");
    init_db_with_family(&db_path);

    rcl()
        .args([
            "--db",
            &db_path,
            "event",
            "--add",
            "School play",
            "--date",
            "2026-05-02",
        ])
        .assert()
        .success();

    rcl()
        .args([
            "--db",
            &db_path,
            "export",
            "--format",
            "json",
            "--file",
            &out,
        ])
        .assert()
        .success()
        .stdout(contains("JSON export completed"));

    let content = fs::read_to_string(&out).expect("read exported json");
    assert!(content.contains("\"title\": \"School play\""));
    assert!(content.contains("\"date\": \"2026-05-02\""));
}

#[test]
fn export_honors_the_range_filter() {
    let db_path = setup_test_db("export_range");
    let out = temp_out("export_range", "csv");
    init_db_with_family(&db_path);

    rcl()
        .args([
            "--db",
            &db_path,
            "event",
            "--add",
            "Old event",
            "--date",
            "2025-02-01",
        ])
        .assert()
        .success();
    rcl()
        .args([
            "--db",
            &db_path,
            "event",
            "--add",
            "New event",
            "--date",
            "2026-02-01",
        ])
        .assert()
        .success();

    rcl()
        .args([
            "--db",
            &db_path,
            "export",
            "--file",
            &out,
            "--range",
            "2026",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.contains("New event"));
    assert!(!content.contains("Old event"));
}

#[test]
fn month_range_reaches_the_leap_day() {
    let db_path = setup_test_db("export_leap");
    let out = temp_out("export_leap", "csv");
    init_db_with_family(&db_path);

    rcl()
        .args([
            "--db",
            &db_path,
            "event",
            "--add",
            "Leap day lunch",
            "--date",
            "2024-02-29",
        ])
        .assert()
        .success();
    rcl()
        .args([
            "--db",
            &db_path,
            "event",
            "--add",
            "March event",
            "--date",
            "2024-03-01",
        ])
        .assert()
        .success();

    // 2024-02 must cover the 29th but stop before March.
    rcl()
        .args([
            "--db",
            &db_path,
            "export",
            "--file",
            &out,
            "--range",
            "2024-02",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.contains("Leap day lunch"));
    assert!(!content.contains("March event"));
}

#[test]
fn export_with_empty_range_warns_and_writes_nothing() {
    let db_path = setup_test_db("export_empty");
    let out = temp_out("export_empty", "csv");
    init_db_with_family(&db_path);

    rcl()
        .args([
            "--db",
            &db_path,
            "export",
            "--file",
            &out,
            "--range",
            "2019",
        ])
        .assert()
        .success()
        .stdout(contains("No events found"));

    assert!(!std::path::Path::new(&out).exists());
}

#[test]
fn export_requires_an_absolute_path() {
    let db_path = setup_test_db("export_relpath");
    init_db_with_family(&db_path);

    rcl()
        .args(["--db", &db_path, "export", "--file", "relative.csv"])
        .assert()
        .failure()
        .stderr(contains("must be absolute"));
}

#[test]
fn export_overwrites_with_force() {
    let db_path = setup_test_db("export_force");
    let out = temp_out("export_force", "csv");
    init_db_with_family(&db_path);

    rcl()
        .args([
            "--db",
            &db_path,
            "event",
            "--add",
            "Picnic",
            "--date",
            "2026-07-04",
        ])
        .assert()
        .success();

    rcl()
        .args(["--db", &db_path, "export", "--file", &out])
        .assert()
        .success();

    rcl()
        .args(["--db", &db_path, "export", "--file", &out, "--force"])
        .assert()
        .success()
        .stdout(contains("CSV export completed"));
}
