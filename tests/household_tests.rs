use predicates::str::contains;

mod common;
use common::{init_db_with_family, rcl, setup_test_db};

#[test]
fn shopping_list_roundtrip() {
    let db_path = setup_test_db("shopping");
    init_db_with_family(&db_path);

    rcl()
        .args(["--db", &db_path, "shopping", "--add", "Milk", "--by", "1"])
        .assert()
        .success()
        .stdout(contains("Shopping item added"));

    rcl()
        .args(["--db", &db_path, "shopping", "--add", "Bread"])
        .assert()
        .success();

    rcl()
        .args(["--db", &db_path, "shopping", "--list"])
        .assert()
        .success()
        .stdout(contains("Milk"))
        .stdout(contains("Bread"));

    rcl()
        .args(["--db", &db_path, "shopping", "--done", "1"])
        .assert()
        .success();

    rcl()
        .args(["--db", &db_path, "shopping", "--clear"])
        .assert()
        .success()
        .stdout(contains("Removed 1 checked-off item(s)"));

    rcl()
        .args(["--db", &db_path, "shopping", "--list"])
        .assert()
        .success()
        .stdout(contains("Bread"));
}

#[test]
fn budget_tracks_spent_and_remaining() {
    let db_path = setup_test_db("budget");
    init_db_with_family(&db_path);

    rcl()
        .args([
            "--db",
            &db_path,
            "budget",
            "--category",
            "Food",
            "--amount",
            "1200",
        ])
        .assert()
        .success()
        .stdout(contains("Budget category added"));

    rcl()
        .args([
            "--db",
            &db_path,
            "budget",
            "--expense",
            "Groceries",
            "--on",
            "Food",
            "--cost",
            "200",
            "--date",
            "2026-08-20",
        ])
        .assert()
        .success()
        .stdout(contains("Expense recorded"));

    rcl()
        .args(["--db", &db_path, "budget", "--list"])
        .assert()
        .success()
        .stdout(contains("Food"))
        .stdout(contains("$1200.00"))
        .stdout(contains("$200.00"))
        .stdout(contains("$1000.00"))
        .stdout(contains("Groceries"));
}

#[test]
fn expense_on_unknown_category_fails() {
    let db_path = setup_test_db("budget_badcat");
    init_db_with_family(&db_path);

    rcl()
        .args([
            "--db",
            &db_path,
            "budget",
            "--expense",
            "Cinema",
            "--on",
            "Leisure",
            "--cost",
            "30",
        ])
        .assert()
        .failure()
        .stderr(contains("Budget category not found"));
}

#[test]
fn meal_plan_upsert_only_touches_given_fields() {
    let db_path = setup_test_db("meal");
    init_db_with_family(&db_path);

    rcl()
        .args([
            "--db",
            &db_path,
            "meal",
            "--day",
            "Monday",
            "--breakfast",
            "Eggs",
            "--dinner",
            "Soup",
        ])
        .assert()
        .success();

    // A second update must leave breakfast untouched.
    rcl()
        .args(["--db", &db_path, "meal", "--day", "Monday", "--dinner", "Pasta"])
        .assert()
        .success();

    rcl()
        .args(["--db", &db_path, "meal", "--list"])
        .assert()
        .success()
        .stdout(contains("Eggs"))
        .stdout(contains("Pasta"));
}

#[test]
fn goal_progress_clamps_and_completes() {
    let db_path = setup_test_db("goal");
    init_db_with_family(&db_path);

    rcl()
        .args([
            "--db",
            &db_path,
            "goal",
            "--add",
            "Read 4 books",
            "--target",
            "4",
        ])
        .assert()
        .success();

    rcl()
        .args(["--db", &db_path, "goal", "--progress", "1", "--by", "2"])
        .assert()
        .success()
        .stdout(contains("2/4"));

    // Overshooting clamps at the target and completes the goal.
    rcl()
        .args(["--db", &db_path, "goal", "--progress", "1", "--by", "10"])
        .assert()
        .success()
        .stdout(contains("completed"))
        .stdout(contains("4/4"));
}

#[test]
fn goal_with_negative_target_is_rejected() {
    let db_path = setup_test_db("goal_negtarget");
    init_db_with_family(&db_path);

    rcl()
        .args(["--db", &db_path, "goal", "--add", "Broken", "--target=-5"])
        .assert()
        .failure()
        .stderr(contains("zero or positive"));
}

#[test]
fn advancing_a_legacy_negative_target_goal_does_not_abort() {
    let db_path = setup_test_db("goal_legacy_target");
    init_db_with_family(&db_path);

    // Rows written before target validation may carry a negative target;
    // advancing such a goal must return normally, not crash the process.
    let conn = rusqlite::Connection::open(&db_path).unwrap();
    conn.execute(
        "INSERT INTO goals (title, description, category, target, current, due_date, points)
         VALUES ('Legacy', '', '', -5, 0, NULL, 0)",
        [],
    )
    .unwrap();

    let goal = rchorelog::db::queries::goals::advance_goal(&conn, 1, 1).unwrap();
    assert_eq!(goal.current, 0);
    assert!(!goal.completed);
}

#[test]
fn reward_redeem_checks_the_balance() {
    let db_path = setup_test_db("reward");
    init_db_with_family(&db_path);

    rcl()
        .args([
            "--db",
            &db_path,
            "reward",
            "--add",
            "Movie night",
            "--cost",
            "10",
        ])
        .assert()
        .success();

    // Nobody has points yet.
    rcl()
        .args(["--db", &db_path, "reward", "--redeem", "1", "--member", "1"])
        .assert()
        .failure()
        .stderr(contains("Not enough points"));

    // Earn points through a task, then redeem.
    rcl()
        .args([
            "--db",
            &db_path,
            "task",
            "--add",
            "Tidy the garage",
            "--points",
            "25",
            "--assign",
            "1",
        ])
        .assert()
        .success();
    rcl()
        .args(["--db", &db_path, "task", "--done", "1"])
        .assert()
        .success();

    rcl()
        .args(["--db", &db_path, "reward", "--redeem", "1", "--member", "1"])
        .assert()
        .success()
        .stdout(contains("redeemed"));
}

#[test]
fn notes_pin_and_resolve() {
    let db_path = setup_test_db("notes");
    init_db_with_family(&db_path);

    rcl()
        .args([
            "--db",
            &db_path,
            "note",
            "--add",
            "Plumber on Friday",
            "--priority",
            "high",
            "--author",
            "1",
        ])
        .assert()
        .success();

    rcl()
        .args(["--db", &db_path, "note", "--pin", "1"])
        .assert()
        .success()
        .stdout(contains("Note pinned"));

    rcl()
        .args(["--db", &db_path, "note", "--list"])
        .assert()
        .success()
        .stdout(contains("Plumber on Friday"))
        .stdout(contains("High"));

    rcl()
        .args(["--db", &db_path, "note", "--done", "1"])
        .assert()
        .success();

    rcl()
        .args(["--db", &db_path, "note", "--del", "1"])
        .assert()
        .success();

    rcl()
        .args(["--db", &db_path, "note", "--del", "1"])
        .assert()
        .failure()
        .stderr(contains("Note not found"));
}

#[test]
fn activity_feed_records_completions_and_fines() {
    let db_path = setup_test_db("activity");
    init_db_with_family(&db_path);

    rcl()
        .args([
            "--db",
            &db_path,
            "task",
            "--add",
            "Water the plants",
            "--points",
            "5",
            "--assign",
            "2",
        ])
        .assert()
        .success();
    rcl()
        .args(["--db", &db_path, "task", "--done", "1"])
        .assert()
        .success();

    rcl()
        .args(["--db", &db_path, "member", "--fine", "3"])
        .assert()
        .success();

    rcl()
        .args(["--db", &db_path, "activity"])
        .assert()
        .success()
        .stdout(contains("Bob completed task 'Water the plants'"))
        .stdout(contains("Carlos was fined"))
        .stdout(contains("+5"));
}
