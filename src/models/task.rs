use super::priority::Priority;
use chrono::{Local, NaiveDate};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub category: String,
    pub priority: Priority,
    pub due_date: Option<NaiveDate>,
    pub points: i64,
    pub completed: bool,
    pub created_at: String,
    /// Assignee names, resolved via task_assignments (display only).
    pub assigned_to: Vec<String>,
}

impl Task {
    pub fn new(
        title: &str,
        description: &str,
        category: &str,
        priority: Priority,
        due_date: Option<NaiveDate>,
        points: i64,
    ) -> Self {
        Self {
            id: 0,
            title: title.to_string(),
            description: description.to_string(),
            category: category.to_string(),
            priority,
            due_date,
            points,
            completed: false,
            created_at: Local::now().to_rfc3339(),
            assigned_to: Vec::new(),
        }
    }
}
