use serde::Serialize;

/// One row of the weekly meal plan (keyed by day name).
#[derive(Debug, Clone, Serialize)]
pub struct Meal {
    pub id: i64,
    pub day: String,
    pub breakfast: String,
    pub lunch: String,
    pub dinner: String,
    pub notes: String,
}
