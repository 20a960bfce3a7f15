use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::shopping::ShoppingItem;
use chrono::Local;
use rusqlite::{Connection, Result, Row, params};

fn map_row(row: &Row) -> Result<ShoppingItem> {
    Ok(ShoppingItem {
        id: row.get("id")?,
        item: row.get("item")?,
        added_by: row.get("added_by")?,
        completed: row.get::<_, i64>("completed")? == 1,
        created_at: row.get("created_at")?,
    })
}

pub fn insert_item(conn: &Connection, item: &str, added_by: Option<i64>) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO shopping_list (item, added_by, created_at) VALUES (?1, ?2, ?3)",
        params![item, added_by, Local::now().to_rfc3339()],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn load_items(pool: &mut DbPool) -> AppResult<Vec<ShoppingItem>> {
    let mut stmt = pool.conn.prepare(
        "SELECT * FROM shopping_list ORDER BY completed ASC, created_at DESC",
    )?;

    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn mark_completed(conn: &Connection, id: i64) -> AppResult<()> {
    let changes = conn.execute(
        "UPDATE shopping_list SET completed = 1 WHERE id = ?1",
        [id],
    )?;
    if changes == 0 {
        return Err(AppError::Other(format!("Shopping item not found: {id}")));
    }
    Ok(())
}

pub fn delete_item(conn: &Connection, id: i64) -> AppResult<()> {
    let changes = conn.execute("DELETE FROM shopping_list WHERE id = ?1", [id])?;
    if changes == 0 {
        return Err(AppError::Other(format!("Shopping item not found: {id}")));
    }
    Ok(())
}

/// Drop every checked-off item.
pub fn clear_completed(conn: &Connection) -> AppResult<usize> {
    let changes = conn.execute("DELETE FROM shopping_list WHERE completed = 1", [])?;
    Ok(changes)
}
