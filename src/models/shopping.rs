use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ShoppingItem {
    pub id: i64,
    pub item: String,
    pub added_by: Option<i64>,
    pub completed: bool,
    pub created_at: String,
}
