use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::note::Note;
use chrono::Local;
use rusqlite::{Connection, Result, Row, params};

fn map_row(row: &Row) -> Result<Note> {
    Ok(Note {
        id: row.get("id")?,
        title: row.get("title")?,
        content: row.get("content")?,
        priority: row.get("priority")?,
        author_id: row.get("author_id")?,
        date: row.get("date")?,
        pinned: row.get::<_, i64>("pinned")? == 1,
        completed: row.get::<_, i64>("completed")? == 1,
    })
}

pub fn insert_note(
    conn: &Connection,
    title: &str,
    content: &str,
    priority: &str,
    author_id: Option<i64>,
) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO notes (title, content, priority, author_id, date)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            title,
            content,
            priority,
            author_id,
            Local::now().format("%Y-%m-%d").to_string(),
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Pinned first, then newest.
pub fn load_notes(pool: &mut DbPool) -> AppResult<Vec<Note>> {
    let mut stmt = pool
        .conn
        .prepare("SELECT * FROM notes ORDER BY pinned DESC, id DESC")?;

    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn set_pinned(conn: &Connection, id: i64, pinned: bool) -> AppResult<()> {
    let changes = conn.execute(
        "UPDATE notes SET pinned = ?1 WHERE id = ?2",
        params![if pinned { 1 } else { 0 }, id],
    )?;
    if changes == 0 {
        return Err(AppError::Other(format!("Note not found: {id}")));
    }
    Ok(())
}

pub fn mark_completed(conn: &Connection, id: i64) -> AppResult<()> {
    let changes = conn.execute("UPDATE notes SET completed = 1 WHERE id = ?1", [id])?;
    if changes == 0 {
        return Err(AppError::Other(format!("Note not found: {id}")));
    }
    Ok(())
}

pub fn delete_note(conn: &Connection, id: i64) -> AppResult<()> {
    let changes = conn.execute("DELETE FROM notes WHERE id = ?1", [id])?;
    if changes == 0 {
        return Err(AppError::Other(format!("Note not found: {id}")));
    }
    Ok(())
}
