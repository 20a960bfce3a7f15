use predicates::str::contains;

mod common;
use common::{init_db_with_family, rcl, setup_test_db};

#[test]
fn duty_on_the_epoch_names_the_first_member() {
    let db_path = setup_test_db("duty_epoch");
    init_db_with_family(&db_path);

    rcl()
        .args([
            "--db",
            &db_path,
            "duty",
            "--date",
            "2024-01-01",
            "--frequency",
            "2",
        ])
        .assert()
        .success()
        .stdout(contains("2024-01-01"))
        .stdout(contains("Alice"));
}

#[test]
fn duty_on_a_rest_day_says_nobody_cleans() {
    let db_path = setup_test_db("duty_rest");
    init_db_with_family(&db_path);

    rcl()
        .args([
            "--db",
            &db_path,
            "duty",
            "--date",
            "2024-01-02",
            "--frequency",
            "2",
        ])
        .assert()
        .success()
        .stdout(contains("rest day"));
}

#[test]
fn duty_before_the_epoch_still_resolves() {
    let db_path = setup_test_db("duty_preepoch");
    init_db_with_family(&db_path);

    rcl()
        .args([
            "--db",
            &db_path,
            "duty",
            "--date",
            "2023-12-30",
            "--frequency",
            "2",
        ])
        .assert()
        .success()
        .stdout(contains("Carlos"));
}

#[test]
fn duty_with_empty_roster_warns() {
    let db_path = setup_test_db("duty_empty");

    rcl()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    rcl()
        .args(["--db", &db_path, "duty", "--date", "2024-01-01"])
        .assert()
        .success()
        .stdout(contains("No members"));
}

#[test]
fn duty_month_lists_every_duty_day() {
    let db_path = setup_test_db("duty_month");
    init_db_with_family(&db_path);

    // January 2024 with frequency 2: days 1,3,5,...,31 → 16 duty days.
    rcl()
        .args([
            "--db",
            &db_path,
            "duty",
            "--month",
            "2024-01",
            "--frequency",
            "2",
        ])
        .assert()
        .success()
        .stdout(contains("2024-01-01"))
        .stdout(contains("2024-01-03"))
        .stdout(contains("2024-01-31"));
}

#[test]
fn duty_rejects_zero_frequency() {
    let db_path = setup_test_db("duty_zerofreq");
    init_db_with_family(&db_path);

    rcl()
        .args([
            "--db",
            &db_path,
            "duty",
            "--date",
            "2024-01-01",
            "--frequency",
            "0",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid rotation frequency"));
}

#[test]
fn duty_rejects_invalid_date() {
    let db_path = setup_test_db("duty_baddate");
    init_db_with_family(&db_path);

    rcl()
        .args(["--db", &db_path, "duty", "--date", "not-a-date"])
        .assert()
        .failure()
        .stderr(contains("Invalid date"));
}
