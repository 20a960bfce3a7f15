use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Goal {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub category: String,
    pub target: i64,
    pub current: i64,
    pub due_date: Option<String>,
    pub points: i64,
    pub completed: bool,
}

impl Goal {
    pub fn progress_pct(&self) -> f64 {
        if self.target <= 0 {
            return 0.0;
        }
        (self.current as f64 / self.target as f64 * 100.0).min(100.0)
    }
}
