use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::activity::Activity;
use chrono::Local;
use rusqlite::{Connection, Result, Row, params};

fn map_row(row: &Row) -> Result<Activity> {
    Ok(Activity {
        id: row.get("id")?,
        kind: row.get("kind")?,
        member_id: row.get("member_id")?,
        text: row.get("text")?,
        points: row.get("points")?,
        time: row.get("time")?,
    })
}

/// Append one line to the activity feed.
pub fn record(
    conn: &Connection,
    kind: &str,
    member_id: Option<i64>,
    text: &str,
    points: i64,
) -> AppResult<()> {
    conn.execute(
        "INSERT INTO activities (kind, member_id, text, points, time)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![kind, member_id, text, points, Local::now().to_rfc3339()],
    )?;
    Ok(())
}

/// Newest first, bounded — the feed is a dashboard widget, not an archive.
pub fn load_recent(pool: &mut DbPool, limit: i64) -> AppResult<Vec<Activity>> {
    let mut stmt = pool
        .conn
        .prepare("SELECT * FROM activities ORDER BY id DESC LIMIT ?1")?;

    let rows = stmt.query_map([limit], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
