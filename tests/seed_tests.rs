use predicates::str::contains;

mod common;
use common::{init_db_with_family, rcl, setup_test_db};

#[test]
fn seeding_2025_every_other_day_inserts_183_events() {
    let db_path = setup_test_db("seed_2025");
    init_db_with_family(&db_path);

    // 2024 is a leap year, so 2025-01-01 is offset 366 from the epoch:
    // an even offset, hence a duty day. 2025 then holds 183 duty days.
    rcl()
        .args([
            "--db",
            &db_path,
            "seed",
            "--year",
            "2025",
            "--frequency",
            "2",
        ])
        .assert()
        .success()
        .stdout(contains("183 cleaning events"));

    rcl()
        .args(["--db", &db_path, "event", "--list", "--range", "2025-01-01"])
        .assert()
        .success()
        .stdout(contains("House cleaning"));
}

#[test]
fn seeding_twice_requires_force() {
    let db_path = setup_test_db("seed_force");
    init_db_with_family(&db_path);

    rcl()
        .args(["--db", &db_path, "seed", "--year", "2026", "--frequency", "2"])
        .assert()
        .success();

    rcl()
        .args(["--db", &db_path, "seed", "--year", "2026", "--frequency", "2"])
        .assert()
        .failure()
        .stderr(contains("--force"));

    rcl()
        .args([
            "--db",
            &db_path,
            "seed",
            "--year",
            "2026",
            "--frequency",
            "2",
            "--force",
        ])
        .assert()
        .success()
        .stdout(contains("cleaning events"));
}

#[test]
fn seeding_without_members_fails() {
    let db_path = setup_test_db("seed_nomembers");

    rcl()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    rcl()
        .args(["--db", &db_path, "seed", "--year", "2025"])
        .assert()
        .failure()
        .stderr(contains("without members"));
}

#[test]
fn demo_seed_creates_the_demo_family() {
    let db_path = setup_test_db("seed_demo");

    rcl()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    rcl()
        .args([
            "--db",
            &db_path,
            "seed",
            "--year",
            "2025",
            "--demo",
            "--frequency",
            "2",
        ])
        .assert()
        .success()
        .stdout(contains("Demo data inserted"));

    rcl()
        .args(["--db", &db_path, "member", "--list"])
        .assert()
        .success()
        .stdout(contains("Andres"))
        .stdout(contains("Carlos"));
}

#[test]
fn demo_family_starts_with_their_track_record() {
    let db_path = setup_test_db("seed_demo_stats");

    rcl()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    rcl()
        .args(["--db", &db_path, "seed", "--year", "2025", "--demo"])
        .assert()
        .success();

    // The demo members arrive with points, completed tasks and streaks,
    // not a blank slate.
    rcl()
        .args(["--db", &db_path, "member", "--list"])
        .assert()
        .success()
        .stdout(contains("Streak"))
        .stdout(contains("350"))
        .stdout(contains("420"))
        .stdout(contains("190"))
        .stdout(contains("25d"));
}

#[test]
fn daily_seed_covers_every_day() {
    let db_path = setup_test_db("seed_daily");
    init_db_with_family(&db_path);

    rcl()
        .args(["--db", &db_path, "seed", "--year", "2025", "--frequency", "1"])
        .assert()
        .success()
        .stdout(contains("365 cleaning events"));
}
