use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::priority::Priority;
use crate::models::task::Task;
use chrono::NaiveDate;
use rusqlite::{Connection, Result, Row, params};

fn map_row(row: &Row) -> Result<Task> {
    let priority_str: String = row.get("priority")?;
    let priority = Priority::from_db_str(&priority_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidPriority(priority_str.clone())),
        )
    })?;

    let due_str: Option<String> = row.get("due_date")?;
    let due_date = match due_str {
        Some(s) => Some(NaiveDate::parse_from_str(&s, "%Y-%m-%d").map_err(|_| {
            rusqlite::Error::FromSqlConversionFailure(
                0,
                rusqlite::types::Type::Text,
                Box::new(AppError::InvalidDate(s.clone())),
            )
        })?),
        None => None,
    };

    Ok(Task {
        id: row.get("id")?,
        title: row.get("title")?,
        description: row.get("description")?,
        category: row.get("category")?,
        priority,
        due_date,
        points: row.get("points")?,
        completed: row.get::<_, i64>("completed")? == 1,
        created_at: row.get("created_at")?,
        assigned_to: Vec::new(),
    })
}

/// Insert a task together with its assignments, atomically: a failed
/// assignment row must not leave an orphan task behind.
pub fn insert_task(conn: &mut Connection, task: &Task, assignees: &[i64]) -> AppResult<i64> {
    let tx = conn.transaction()?;

    tx.execute(
        "INSERT INTO tasks (title, description, category, priority, due_date, points, completed, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, 0, ?7)",
        params![
            task.title,
            task.description,
            task.category,
            task.priority.to_db_str(),
            task.due_date.map(|d| d.to_string()),
            task.points,
            task.created_at,
        ],
    )?;
    let task_id = tx.last_insert_rowid();

    for member_id in assignees {
        tx.execute(
            "INSERT INTO task_assignments (task_id, member_id) VALUES (?1, ?2)",
            params![task_id, member_id],
        )?;
    }

    tx.commit()?;
    Ok(task_id)
}

/// Load all tasks with their assignee names resolved.
pub fn load_tasks(pool: &mut DbPool) -> AppResult<Vec<Task>> {
    let mut tasks = {
        let mut stmt = pool
            .conn
            .prepare("SELECT * FROM tasks ORDER BY completed ASC, id ASC")?;

        let rows = stmt.query_map([], map_row)?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        out
    };

    let mut stmt = pool.conn.prepare(
        "SELECT m.name FROM task_assignments ta
         JOIN members m ON ta.member_id = m.id
         WHERE ta.task_id = ?1
         ORDER BY m.id ASC",
    )?;

    for task in &mut tasks {
        let rows = stmt.query_map([task.id], |row| row.get::<_, String>(0))?;
        for name in rows {
            task.assigned_to.push(name?);
        }
    }

    Ok(tasks)
}

pub fn load_task(conn: &Connection, id: i64) -> AppResult<Task> {
    let mut stmt = conn.prepare("SELECT * FROM tasks WHERE id = ?1")?;

    stmt.query_row([id], map_row).map_err(|e| match e {
        rusqlite::Error::QueryReturnedNoRows => AppError::TaskNotFound(id),
        other => AppError::Db(other),
    })
}

pub fn assignee_ids(conn: &Connection, task_id: i64) -> AppResult<Vec<i64>> {
    let mut stmt = conn.prepare(
        "SELECT member_id FROM task_assignments WHERE task_id = ?1 ORDER BY member_id ASC",
    )?;

    let rows = stmt.query_map([task_id], |row| row.get::<_, i64>(0))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn mark_completed(conn: &Connection, id: i64) -> AppResult<()> {
    let changes = conn.execute("UPDATE tasks SET completed = 1 WHERE id = ?1", [id])?;
    if changes == 0 {
        return Err(AppError::TaskNotFound(id));
    }
    Ok(())
}

pub fn delete_task(conn: &Connection, id: i64) -> AppResult<()> {
    let changes = conn.execute("DELETE FROM tasks WHERE id = ?1", [id])?;
    if changes == 0 {
        return Err(AppError::TaskNotFound(id));
    }
    Ok(())
}
