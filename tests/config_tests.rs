use predicates::str::contains;

mod common;
use common::{init_db_with_family, rcl, setup_test_db};

#[test]
fn frequency_outside_the_allowed_set_is_rejected() {
    let db_path = setup_test_db("config_badfreq");
    init_db_with_family(&db_path);

    rcl()
        .args(["--db", &db_path, "--test", "config", "--frequency", "5"])
        .assert()
        .failure()
        .stderr(contains("Invalid rotation frequency"));

    rcl()
        .args(["--db", &db_path, "--test", "config", "--frequency", "0"])
        .assert()
        .failure()
        .stderr(contains("Invalid rotation frequency"));
}

#[test]
fn allowed_frequency_is_accepted() {
    let db_path = setup_test_db("config_goodfreq");
    init_db_with_family(&db_path);

    rcl()
        .args(["--db", &db_path, "--test", "config", "--frequency", "3"])
        .assert()
        .success()
        .stdout(contains("frequency set to every 3 day(s)"));
}

#[test]
fn config_print_shows_the_yaml() {
    let db_path = setup_test_db("config_print");
    init_db_with_family(&db_path);

    rcl()
        .args(["--db", &db_path, "--test", "config", "--print"])
        .assert()
        .success()
        .stdout(contains("database:"))
        .stdout(contains("cleaning_frequency:"));
}

#[test]
fn db_check_passes_on_a_fresh_database() {
    let db_path = setup_test_db("db_check");
    init_db_with_family(&db_path);

    rcl()
        .args(["--db", &db_path, "db", "--check"])
        .assert()
        .success()
        .stdout(contains("Integrity check passed"));
}

#[test]
fn db_info_reports_counts() {
    let db_path = setup_test_db("db_info");
    init_db_with_family(&db_path);

    rcl()
        .args(["--db", &db_path, "db", "--info"])
        .assert()
        .success()
        .stdout(contains("Members:"))
        .stdout(contains("Calendar events:"));
}

#[test]
fn db_migrate_is_idempotent() {
    let db_path = setup_test_db("db_migrate");
    init_db_with_family(&db_path);

    for _ in 0..2 {
        rcl()
            .args(["--db", &db_path, "db", "--migrate"])
            .assert()
            .success()
            .stdout(contains("Migration completed"));
    }
}

#[test]
fn internal_log_records_init() {
    let db_path = setup_test_db("log_print");
    init_db_with_family(&db_path);

    rcl()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("init"))
        .stdout(contains("Database initialized"));
}
