use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::budget::{BudgetCategory, Expense};
use rusqlite::{Connection, Result, Row, params};

fn map_category(row: &Row) -> Result<BudgetCategory> {
    Ok(BudgetCategory {
        id: row.get("id")?,
        name: row.get("name")?,
        budget: row.get("budget")?,
        spent: row.get("spent")?,
        color: row.get("color")?,
    })
}

fn map_expense(row: &Row) -> Result<Expense> {
    Ok(Expense {
        id: row.get("id")?,
        description: row.get("description")?,
        category_name: row.get("category_name")?,
        amount: row.get("amount")?,
        date: row.get("date")?,
        notes: row.get("notes")?,
    })
}

pub fn insert_category(
    conn: &Connection,
    name: &str,
    budget: f64,
    color: &str,
) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO budget_categories (name, budget, color) VALUES (?1, ?2, ?3)",
        params![name, budget, color],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn load_categories(pool: &mut DbPool) -> AppResult<Vec<BudgetCategory>> {
    let mut stmt = pool
        .conn
        .prepare("SELECT * FROM budget_categories ORDER BY id ASC")?;

    let rows = stmt.query_map([], map_category)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Record an expense and bump the category's running `spent` total
/// in one transaction, so the two can never drift apart.
pub fn add_expense(conn: &mut Connection, expense: &Expense) -> AppResult<()> {
    let tx = conn.transaction()?;

    let changes = tx.execute(
        "UPDATE budget_categories SET spent = spent + ?1 WHERE name = ?2",
        params![expense.amount, expense.category_name],
    )?;
    if changes == 0 {
        return Err(AppError::CategoryNotFound(expense.category_name.clone()));
    }

    tx.execute(
        "INSERT INTO expenses (description, category_name, amount, date, notes)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            expense.description,
            expense.category_name,
            expense.amount,
            expense.date,
            expense.notes,
        ],
    )?;

    tx.commit()?;
    Ok(())
}

pub fn load_expenses(pool: &mut DbPool) -> AppResult<Vec<Expense>> {
    let mut stmt = pool
        .conn
        .prepare("SELECT * FROM expenses ORDER BY date DESC, id DESC")?;

    let rows = stmt.query_map([], map_expense)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
