use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::reward::Reward;
use rusqlite::{Connection, Result, Row, params};

fn map_row(row: &Row) -> Result<Reward> {
    Ok(Reward {
        id: row.get("id")?,
        name: row.get("name")?,
        description: row.get("description")?,
        icon: row.get("icon")?,
        category: row.get("category")?,
        cost: row.get("cost")?,
    })
}

pub fn insert_reward(conn: &Connection, reward: &Reward) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO rewards (name, description, icon, category, cost)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            reward.name,
            reward.description,
            reward.icon,
            reward.category,
            reward.cost,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn load_rewards(pool: &mut DbPool) -> AppResult<Vec<Reward>> {
    let mut stmt = pool.conn.prepare("SELECT * FROM rewards ORDER BY cost ASC")?;

    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn load_reward(conn: &Connection, id: i64) -> AppResult<Reward> {
    let mut stmt = conn.prepare("SELECT * FROM rewards WHERE id = ?1")?;

    stmt.query_row([id], map_row).map_err(|e| match e {
        rusqlite::Error::QueryReturnedNoRows => AppError::RewardNotFound(id),
        other => AppError::Db(other),
    })
}
