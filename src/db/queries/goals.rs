use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::goal::Goal;
use rusqlite::{Connection, Result, Row, params};

fn map_row(row: &Row) -> Result<Goal> {
    Ok(Goal {
        id: row.get("id")?,
        title: row.get("title")?,
        description: row.get("description")?,
        category: row.get("category")?,
        target: row.get("target")?,
        current: row.get("current")?,
        due_date: row.get("due_date")?,
        points: row.get("points")?,
        completed: row.get::<_, i64>("completed")? == 1,
    })
}

pub fn insert_goal(conn: &Connection, goal: &Goal) -> AppResult<i64> {
    if goal.target < 0 {
        return Err(AppError::Other(format!(
            "Goal target must be zero or positive (got {})",
            goal.target
        )));
    }

    conn.execute(
        "INSERT INTO goals (title, description, category, target, current, due_date, points)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            goal.title,
            goal.description,
            goal.category,
            goal.target,
            goal.current,
            goal.due_date,
            goal.points,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn load_goals(pool: &mut DbPool) -> AppResult<Vec<Goal>> {
    let mut stmt = pool
        .conn
        .prepare("SELECT * FROM goals ORDER BY completed ASC, id ASC")?;

    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn load_goal(conn: &Connection, id: i64) -> AppResult<Goal> {
    let mut stmt = conn.prepare("SELECT * FROM goals WHERE id = ?1")?;

    stmt.query_row([id], map_row).map_err(|e| match e {
        rusqlite::Error::QueryReturnedNoRows => AppError::GoalNotFound(id),
        other => AppError::Db(other),
    })
}

/// Advance a goal; progress clamps at target, and reaching the target
/// marks the goal completed.
pub fn advance_goal(conn: &Connection, id: i64, by: i64) -> AppResult<Goal> {
    let goal = load_goal(conn, id)?;

    // Rows written before target validation existed may carry a negative
    // target; treat those as an unreachable goal instead of panicking in
    // `clamp`.
    let ceiling = goal.target.max(0);
    let current = (goal.current + by).clamp(0, ceiling);
    let completed = current >= goal.target && goal.target > 0;

    conn.execute(
        "UPDATE goals SET current = ?1, completed = ?2 WHERE id = ?3",
        params![current, if completed { 1 } else { 0 }, id],
    )?;

    load_goal(conn, id)
}
