//! Seed-data generation.
//!
//! The year pass walks every day of the target year through the canonical
//! rotation scheduler and records one cleaning event per duty day. Earlier
//! versions of this tool shipped a hardcoded "every even day" shortcut in
//! the seeder; that special case disagreed with the dashboard for any
//! frequency other than 2, so the seeder now calls the same function as
//! every other consumer.

use crate::config::Config;
use crate::core::rotation;
use crate::db::pool::DbPool;
use crate::db::queries::{budget, events, meals, members};
use crate::errors::{AppError, AppResult};
use crate::models::event::Event;
use crate::models::event_kind::EventKind;
use crate::utils::date;

pub const CLEANING_EVENT_TITLE: &str = "House cleaning";

/// Insert the demo family, budget categories and week meal plan.
/// Skipped silently when members already exist.
pub fn seed_demo_data(pool: &mut DbPool) -> AppResult<usize> {
    let existing = members::load_roster(pool)?;
    if !existing.is_empty() {
        return Ok(0);
    }

    // name, role, color, points, tasks completed, streak. The family
    // arrives with a track record so the dashboards have something to
    // show right away.
    let family: [(&str, &str, &str, i64, i64, i64); 5] = [
        ("Andres", "Father", "#10B981", 350, 42, 21),
        ("Magda", "Mother", "#8B5CF6", 420, 56, 18),
        ("Juan", "Older son", "#3B82F6", 285, 38, 14),
        ("Ana", "Daughter", "#EC4899", 320, 45, 25),
        ("Carlos", "Younger son", "#F59E0B", 190, 28, 7),
    ];

    for (name, role, color, points, tasks_completed, streak) in family {
        let id = members::insert_member(&pool.conn, name, role, color, None, None)?;
        members::set_stats(&pool.conn, id, points, tasks_completed, streak)?;
    }

    let categories: [(&str, f64, &str); 6] = [
        ("Food", 1200.0, "#10B981"),
        ("Utilities", 800.0, "#3B82F6"),
        ("Transport", 600.0, "#F59E0B"),
        ("Entertainment", 400.0, "#8B5CF6"),
        ("Savings", 1000.0, "#EC4899"),
        ("Other", 500.0, "#6B7280"),
    ];

    for (name, budget_amount, color) in categories {
        budget::insert_category(&pool.conn, name, budget_amount, color)?;
    }

    let week = [
        "Monday",
        "Tuesday",
        "Wednesday",
        "Thursday",
        "Friday",
        "Saturday",
        "Sunday",
    ];
    let breakfasts = ["Eggs", "Toast", "Orange juice"];
    let lunches = ["Roast chicken", "Rice", "Salad"];
    let dinners = ["Soup", "Sandwiches", "Pasta"];

    for (i, day) in week.iter().enumerate() {
        let notes = if i == 6 { "Family dinner" } else { "" };
        meals::upsert_meal(
            &pool.conn,
            day,
            Some(breakfasts[i % 3]),
            Some(lunches[i % 3]),
            Some(dinners[i % 3]),
            Some(notes),
        )?;
    }

    Ok(family.len())
}

/// Pre-populate one full year of cleaning events.
///
/// Every day of `year` is resolved through `rotation::assignee_for_date`
/// with the given frequency; only duty days produce a row. Days already
/// in the past are recorded as completed.
///
/// Returns the number of events inserted.
pub fn seed_year_calendar(
    pool: &mut DbPool,
    cfg: &Config,
    year: i32,
    frequency: u32,
    force: bool,
) -> AppResult<usize> {
    let roster = members::load_roster(pool)?;
    if roster.is_empty() {
        return Err(AppError::Other(
            "Cannot seed a calendar without members. Add members first (or use --demo).".to_string(),
        ));
    }

    let existing = events::count_cleaning_events_in_year(&pool.conn, year)?;
    if existing > 0 {
        if !force {
            return Err(AppError::Other(format!(
                "Year {year} already has {existing} cleaning events. Use --force to replace them."
            )));
        }
        events::delete_cleaning_events_in_year(&pool.conn, year)?;
    }

    let days = date::all_days_of_year(year);
    let duties = rotation::duty_days(&days, &roster, frequency)?;

    let today = date::today();
    let mut inserted = 0;

    for (day, member) in duties {
        let ev = Event::new(
            CLEANING_EVENT_TITLE,
            day,
            EventKind::Cleaning,
            Some(member.id),
            cfg.duty_points,
            day < today,
        );
        events::insert_event(&pool.conn, &ev)?;
        inserted += 1;
    }

    Ok(inserted)
}
