use super::event_kind::EventKind;
use chrono::{Local, NaiveDate};
use serde::Serialize;

/// A recorded calendar entry.
///
/// Cleaning events *record* an assignment ("cleaning done by X on date Y")
/// and are owned by the CRUD layer: changing the rotation frequency never
/// rewrites rows that are already here.
#[derive(Debug, Clone, Serialize)]
pub struct Event {
    pub id: i64,
    pub title: String,
    pub date: NaiveDate,              // ⇔ events.date (TEXT "YYYY-MM-DD")
    pub kind: EventKind,              // ⇔ events.kind ('cleaning' | 'general')
    pub assigned_to: Option<i64>,     // ⇔ events.assigned_to (member id)
    pub points: i64,
    pub completed: bool,
    pub created_at: String,           // ISO8601
}

impl Event {
    pub fn new(
        title: &str,
        date: NaiveDate,
        kind: EventKind,
        assigned_to: Option<i64>,
        points: i64,
        completed: bool,
    ) -> Self {
        Self {
            id: 0,
            title: title.to_string(),
            date,
            kind,
            assigned_to,
            points,
            completed,
            created_at: Local::now().to_rfc3339(),
        }
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}
