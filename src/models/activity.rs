use serde::Serialize;

/// One line of the append-only activity feed.
#[derive(Debug, Clone, Serialize)]
pub struct Activity {
    pub id: i64,
    pub kind: String, // "task" | "cleaning" | "reward" | "fine" | ...
    pub member_id: Option<i64>,
    pub text: String,
    pub points: i64,
    pub time: String, // ISO8601
}
