use predicates::str::contains;

mod common;
use common::{init_db_with_family, rcl, setup_test_db};

#[test]
fn task_insert_is_atomic_with_its_assignments() {
    let db_path = setup_test_db("task_atomic");
    init_db_with_family(&db_path);

    // With foreign keys enforced, an assignment pointing at a member that
    // does not exist fails mid-insert; the task row must roll back too.
    let mut conn = rusqlite::Connection::open(&db_path).unwrap();
    conn.execute_batch("PRAGMA foreign_keys = ON;").unwrap();

    let task = rchorelog::models::task::Task::new(
        "Ghost task",
        "",
        "",
        rchorelog::models::priority::Priority::Medium,
        None,
        5,
    );
    let res = rchorelog::db::queries::tasks::insert_task(&mut conn, &task, &[999]);
    assert!(res.is_err());

    let tasks: i64 = conn
        .query_row("SELECT COUNT(*) FROM tasks", [], |r| r.get(0))
        .unwrap();
    assert_eq!(tasks, 0);

    let assignments: i64 = conn
        .query_row("SELECT COUNT(*) FROM task_assignments", [], |r| r.get(0))
        .unwrap();
    assert_eq!(assignments, 0);
}

#[test]
fn member_add_and_list() {
    let db_path = setup_test_db("member_add_list");

    rcl()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    rcl()
        .args([
            "--db",
            &db_path,
            "member",
            "--add",
            "Magda",
            "--role",
            "Mother",
            "--birthday",
            "1980-05-12",
        ])
        .assert()
        .success()
        .stdout(contains("Member added: Magda"));

    rcl()
        .args(["--db", &db_path, "member", "--list"])
        .assert()
        .success()
        .stdout(contains("Magda"))
        .stdout(contains("Mother"))
        .stdout(contains("1980-05-12"));
}

#[test]
fn member_delete_removes_from_roster() {
    let db_path = setup_test_db("member_del");
    init_db_with_family(&db_path);

    rcl()
        .args(["--db", &db_path, "member", "--del", "2"])
        .assert()
        .success()
        .stdout(contains("Member deleted: Bob"));

    rcl()
        .args(["--db", &db_path, "member", "--del", "2"])
        .assert()
        .failure()
        .stderr(contains("Member not found"));
}

#[test]
fn fining_a_member_increases_debt() {
    let db_path = setup_test_db("member_fine");
    init_db_with_family(&db_path);

    rcl()
        .args(["--db", &db_path, "member", "--fine", "1"])
        .assert()
        .success()
        .stdout(contains("Alice fined $50"))
        .stdout(contains("total debt: $50"));

    rcl()
        .args(["--db", &db_path, "member", "--fine", "1"])
        .assert()
        .success()
        .stdout(contains("total debt: $100"));
}

#[test]
fn completing_a_task_awards_points_to_every_assignee() {
    let db_path = setup_test_db("task_points");
    init_db_with_family(&db_path);

    rcl()
        .args([
            "--db",
            &db_path,
            "task",
            "--add",
            "Wash the dishes",
            "--priority",
            "high",
            "--points",
            "15",
            "--assign",
            "1",
            "--assign",
            "2",
        ])
        .assert()
        .success()
        .stdout(contains("Task added"));

    rcl()
        .args(["--db", &db_path, "task", "--done", "1"])
        .assert()
        .success()
        .stdout(contains("Points awarded to: Alice, Bob"));

    // Completing again is a no-op, points are not double-awarded.
    rcl()
        .args(["--db", &db_path, "task", "--done", "1"])
        .assert()
        .success()
        .stdout(contains("already completed"));

    rcl()
        .args(["--db", &db_path, "member", "--list"])
        .assert()
        .success()
        .stdout(contains("15"));
}

#[test]
fn task_list_shows_priority_and_assignees() {
    let db_path = setup_test_db("task_list");
    init_db_with_family(&db_path);

    rcl()
        .args([
            "--db",
            &db_path,
            "task",
            "--add",
            "Mow the lawn",
            "--priority",
            "low",
            "--due",
            "2026-09-15",
            "--assign",
            "3",
        ])
        .assert()
        .success();

    rcl()
        .args(["--db", &db_path, "task", "--list"])
        .assert()
        .success()
        .stdout(contains("Mow the lawn"))
        .stdout(contains("Low"))
        .stdout(contains("2026-09-15"))
        .stdout(contains("Carlos"));
}

#[test]
fn task_rejects_unknown_priority() {
    let db_path = setup_test_db("task_badprio");
    init_db_with_family(&db_path);

    rcl()
        .args([
            "--db",
            &db_path,
            "task",
            "--add",
            "Vacuum",
            "--priority",
            "urgent",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid priority"));
}

#[test]
fn completing_a_cleaning_event_awards_its_points() {
    let db_path = setup_test_db("event_points");
    init_db_with_family(&db_path);

    // Seed a future year so the events are still pending, then complete
    // the first one.
    rcl()
        .args(["--db", &db_path, "seed", "--year", "2030", "--frequency", "3"])
        .assert()
        .success();

    rcl()
        .args(["--db", &db_path, "event", "--done", "1"])
        .assert()
        .success()
        .stdout(contains("Points awarded to"));
}
