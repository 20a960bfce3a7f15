use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::event::Event;
use crate::models::event_kind::EventKind;
use chrono::NaiveDate;
use rusqlite::{Connection, Result, Row, params};

pub fn map_row(row: &Row) -> Result<Event> {
    let date_str: String = row.get("date")?;

    let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(date_str.clone())),
        )
    })?;

    let kind_str: String = row.get("kind")?;
    let kind = EventKind::from_db_str(&kind_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidEventKind(kind_str.clone())),
        )
    })?;

    Ok(Event {
        id: row.get("id")?,
        title: row.get("title")?,
        date,
        kind,
        assigned_to: row.get("assigned_to")?,
        points: row.get("points")?,
        completed: row.get::<_, i64>("completed")? == 1,
        created_at: row.get("created_at")?,
    })
}

pub fn insert_event(conn: &Connection, ev: &Event) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO events (title, date, kind, assigned_to, points, completed, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            ev.title,
            ev.date_str(),
            ev.kind.to_db_str(),
            ev.assigned_to,
            ev.points,
            if ev.completed { 1 } else { 0 },
            ev.created_at,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn load_event(conn: &Connection, id: i64) -> AppResult<Event> {
    let mut stmt = conn.prepare("SELECT * FROM events WHERE id = ?1")?;

    stmt.query_row([id], map_row).map_err(|e| match e {
        rusqlite::Error::QueryReturnedNoRows => AppError::EventNotFound(id),
        other => AppError::Db(other),
    })
}

pub fn load_events_between(
    pool: &mut DbPool,
    start: NaiveDate,
    end: NaiveDate,
) -> AppResult<Vec<Event>> {
    let mut stmt = pool.conn.prepare(
        "SELECT * FROM events
         WHERE date BETWEEN ?1 AND ?2
         ORDER BY date ASC, id ASC",
    )?;

    let rows = stmt.query_map(
        params![start.to_string(), end.to_string()],
        map_row,
    )?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn load_all_events(pool: &mut DbPool) -> AppResult<Vec<Event>> {
    let mut stmt = pool
        .conn
        .prepare("SELECT * FROM events ORDER BY date ASC, id ASC")?;

    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn mark_completed(conn: &Connection, id: i64) -> AppResult<()> {
    let changes = conn.execute("UPDATE events SET completed = 1 WHERE id = ?1", [id])?;
    if changes == 0 {
        return Err(AppError::EventNotFound(id));
    }
    Ok(())
}

pub fn delete_event(conn: &Connection, id: i64) -> AppResult<()> {
    let changes = conn.execute("DELETE FROM events WHERE id = ?1", [id])?;
    if changes == 0 {
        return Err(AppError::EventNotFound(id));
    }
    Ok(())
}

/// How many cleaning events are already recorded for a given year.
/// The seed generator refuses to run twice on the same year without --force.
pub fn count_cleaning_events_in_year(conn: &Connection, year: i32) -> AppResult<i64> {
    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM events
         WHERE kind = 'cleaning' AND date BETWEEN ?1 AND ?2",
        params![format!("{year}-01-01"), format!("{year}-12-31")],
        |row| row.get(0),
    )?;
    Ok(count)
}

pub fn delete_cleaning_events_in_year(conn: &Connection, year: i32) -> AppResult<usize> {
    let changes = conn.execute(
        "DELETE FROM events
         WHERE kind = 'cleaning' AND date BETWEEN ?1 AND ?2",
        params![format!("{year}-01-01"), format!("{year}-12-31")],
    )?;
    Ok(changes)
}
