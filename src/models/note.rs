use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Note {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub priority: String,
    pub author_id: Option<i64>,
    pub date: String,
    pub pinned: bool,
    pub completed: bool,
}
