//! Library-level tests for the cleaning-rotation scheduler.

use chrono::NaiveDate;
use rchorelog::core::rotation;
use rchorelog::models::member::Member;

fn member(id: i64, name: &str) -> Member {
    Member {
        id,
        name: name.to_string(),
        role: String::new(),
        color: "#6B7280".to_string(),
        birthday: None,
        job: None,
        points: 0,
        tasks_completed: 0,
        streak: 0,
        debt: 0,
        created_at: String::new(),
    }
}

fn roster() -> Vec<Member> {
    vec![member(1, "Alice"), member(2, "Bob"), member(3, "Carlos")]
}

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

#[test]
fn epoch_day_goes_to_first_member() {
    let roster = roster();
    for freq in 1..=3 {
        let got = rotation::assignee_for_date(d(2024, 1, 1), &roster, freq)
            .unwrap()
            .unwrap();
        assert_eq!(got.name, "Alice");
    }
}

#[test]
fn daily_frequency_assigns_every_day_and_rotates() {
    let roster = roster();

    let jan1 = rotation::assignee_for_date(d(2024, 1, 1), &roster, 1)
        .unwrap()
        .unwrap();
    let jan2 = rotation::assignee_for_date(d(2024, 1, 2), &roster, 1)
        .unwrap()
        .unwrap();
    let jan4 = rotation::assignee_for_date(d(2024, 1, 4), &roster, 1)
        .unwrap()
        .unwrap();

    assert_eq!(jan1.name, "Alice");
    assert_eq!(jan2.name, "Bob");
    // Wraps around after Carlos.
    assert_eq!(jan4.name, "Alice");
}

#[test]
fn every_other_day_skips_rest_days() {
    let roster = roster();

    assert_eq!(
        rotation::assignee_for_date(d(2024, 1, 1), &roster, 2)
            .unwrap()
            .unwrap()
            .name,
        "Alice"
    );
    // Odd offset: rest day.
    assert!(
        rotation::assignee_for_date(d(2024, 1, 2), &roster, 2)
            .unwrap()
            .is_none()
    );
    assert_eq!(
        rotation::assignee_for_date(d(2024, 1, 3), &roster, 2)
            .unwrap()
            .unwrap()
            .name,
        "Bob"
    );
    assert_eq!(
        rotation::assignee_for_date(d(2024, 1, 5), &roster, 2)
            .unwrap()
            .unwrap()
            .name,
        "Carlos"
    );
    // Full cycle: back to the first member.
    assert_eq!(
        rotation::assignee_for_date(d(2024, 1, 7), &roster, 2)
            .unwrap()
            .unwrap()
            .name,
        "Alice"
    );
}

#[test]
fn two_member_daily_rotation_alternates() {
    let pair = vec![member(1, "Alice"), member(2, "Bob")];

    for (day, expected) in [(1, "Alice"), (2, "Bob"), (3, "Alice"), (4, "Bob")] {
        let got = rotation::assignee_for_date(d(2024, 1, day), &pair, 1)
            .unwrap()
            .unwrap();
        assert_eq!(got.name, expected);
    }
}

#[test]
fn empty_roster_means_nobody() {
    let empty: Vec<Member> = Vec::new();
    let got = rotation::assignee_for_date(d(2024, 1, 1), &empty, 2).unwrap();
    assert!(got.is_none());
}

#[test]
fn dates_before_the_epoch_use_floored_arithmetic() {
    let roster = roster();

    // 2023-12-30 is offset -2: duty day, turn -1, index (-1).rem_euclid(3) = 2.
    assert_eq!(
        rotation::assignee_for_date(d(2023, 12, 30), &roster, 2)
            .unwrap()
            .unwrap()
            .name,
        "Carlos"
    );
    // Offset -1: rest day.
    assert!(
        rotation::assignee_for_date(d(2023, 12, 31), &roster, 2)
            .unwrap()
            .is_none()
    );
    // Offset -4: turn -2, index 1.
    assert_eq!(
        rotation::assignee_for_date(d(2023, 12, 28), &roster, 2)
            .unwrap()
            .unwrap()
            .name,
        "Bob"
    );
}

#[test]
fn same_inputs_always_give_same_answer() {
    let roster = roster();
    let day = d(2025, 6, 15);

    let first = rotation::assignee_for_date(day, &roster, 3)
        .unwrap()
        .map(|m| m.id);

    for _ in 0..10 {
        let again = rotation::assignee_for_date(day, &roster, 3)
            .unwrap()
            .map(|m| m.id);
        assert_eq!(first, again);
    }
}

#[test]
fn zero_frequency_is_rejected() {
    let roster = roster();
    assert!(rotation::assignee_for_date(d(2024, 1, 1), &roster, 0).is_err());

    // Rejected even when the roster is empty: validation comes first.
    let empty: Vec<Member> = Vec::new();
    assert!(rotation::assignee_for_date(d(2024, 1, 1), &empty, 0).is_err());
}

#[test]
fn duty_days_keeps_only_assigned_days() {
    let roster = roster();
    let week: Vec<NaiveDate> = (1..=7).map(|day| d(2024, 1, day)).collect();

    let duties = rotation::duty_days(&week, &roster, 2).unwrap();

    let got: Vec<(NaiveDate, &str)> = duties
        .iter()
        .map(|(day, m)| (*day, m.name.as_str()))
        .collect();

    assert_eq!(
        got,
        vec![
            (d(2024, 1, 1), "Alice"),
            (d(2024, 1, 3), "Bob"),
            (d(2024, 1, 5), "Carlos"),
            (d(2024, 1, 7), "Alice"),
        ]
    );
}
