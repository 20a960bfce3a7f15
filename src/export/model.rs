// src/export/model.rs

use serde::Serialize;

/// Flat row for calendar-event exports; the assignee id is resolved to a
/// name so the file is readable on its own.
#[derive(Serialize, Clone, Debug)]
pub struct EventExport {
    pub id: i64,
    pub date: String,
    pub title: String,
    pub kind: String,
    pub assigned_to: String,
    pub points: i64,
    pub completed: bool,
}
