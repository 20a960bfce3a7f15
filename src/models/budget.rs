use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct BudgetCategory {
    pub id: i64,
    pub name: String,
    pub budget: f64,
    pub spent: f64,
    pub color: String,
}

impl BudgetCategory {
    pub fn remaining(&self) -> f64 {
        self.budget - self.spent
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Expense {
    pub id: i64,
    pub description: String,
    pub category_name: String,
    pub amount: f64,
    pub date: String, // "YYYY-MM-DD"
    pub notes: String,
}
