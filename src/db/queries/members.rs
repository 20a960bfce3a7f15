use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::member::Member;
use chrono::Local;
use rusqlite::{Connection, Result, Row, params};

pub fn map_row(row: &Row) -> Result<Member> {
    Ok(Member {
        id: row.get("id")?,
        name: row.get("name")?,
        role: row.get("role")?,
        color: row.get("color")?,
        birthday: row.get("birthday")?,
        job: row.get("job")?,
        points: row.get("points")?,
        tasks_completed: row.get("tasks_completed")?,
        streak: row.get("streak")?,
        debt: row.get("debt")?,
        created_at: row.get("created_at")?,
    })
}

/// Load the roster in rotation order (ascending id — insertion order).
pub fn load_roster(pool: &mut DbPool) -> AppResult<Vec<Member>> {
    let mut stmt = pool
        .conn
        .prepare("SELECT * FROM members ORDER BY id ASC")?;

    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn load_member(conn: &Connection, id: i64) -> AppResult<Member> {
    let mut stmt = conn.prepare("SELECT * FROM members WHERE id = ?1")?;

    stmt.query_row([id], map_row)
        .map_err(|e| match e {
            rusqlite::Error::QueryReturnedNoRows => AppError::MemberNotFound(id),
            other => AppError::Db(other),
        })
}

pub fn insert_member(
    conn: &Connection,
    name: &str,
    role: &str,
    color: &str,
    birthday: Option<&str>,
    job: Option<&str>,
) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO members (name, role, color, birthday, job, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![name, role, color, birthday, job, Local::now().to_rfc3339()],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Overwrite the running stats in one shot; used by the demo seeder.
pub fn set_stats(
    conn: &Connection,
    id: i64,
    points: i64,
    tasks_completed: i64,
    streak: i64,
) -> AppResult<()> {
    let changes = conn.execute(
        "UPDATE members SET points = ?1, tasks_completed = ?2, streak = ?3 WHERE id = ?4",
        params![points, tasks_completed, streak, id],
    )?;
    if changes == 0 {
        return Err(AppError::MemberNotFound(id));
    }
    Ok(())
}

pub fn delete_member(conn: &Connection, id: i64) -> AppResult<()> {
    let changes = conn.execute("DELETE FROM members WHERE id = ?1", [id])?;
    if changes == 0 {
        return Err(AppError::MemberNotFound(id));
    }
    Ok(())
}

/// Award (or with a negative delta, deduct) points.
pub fn add_points(conn: &Connection, id: i64, delta: i64) -> AppResult<()> {
    let changes = conn.execute(
        "UPDATE members SET points = points + ?1 WHERE id = ?2",
        params![delta, id],
    )?;
    if changes == 0 {
        return Err(AppError::MemberNotFound(id));
    }
    Ok(())
}

pub fn bump_tasks_completed(conn: &Connection, id: i64) -> AppResult<()> {
    conn.execute(
        "UPDATE members SET tasks_completed = tasks_completed + 1 WHERE id = ?1",
        [id],
    )?;
    Ok(())
}

/// Charge a fine: the member owes `amount` more.
pub fn add_debt(conn: &Connection, id: i64, amount: i64) -> AppResult<()> {
    let changes = conn.execute(
        "UPDATE members SET debt = debt + ?1 WHERE id = ?2",
        params![amount, id],
    )?;
    if changes == 0 {
        return Err(AppError::MemberNotFound(id));
    }
    Ok(())
}
