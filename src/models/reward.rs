use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Reward {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub category: String,
    pub cost: i64,
}
