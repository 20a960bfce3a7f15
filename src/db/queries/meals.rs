use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::meal::Meal;
use rusqlite::{Connection, Result, Row, params};

fn map_row(row: &Row) -> Result<Meal> {
    Ok(Meal {
        id: row.get("id")?,
        day: row.get("day")?,
        breakfast: row.get("breakfast")?,
        lunch: row.get("lunch")?,
        dinner: row.get("dinner")?,
        notes: row.get("notes")?,
    })
}

/// Upsert the plan for one day (the week has at most 7 rows).
pub fn upsert_meal(
    conn: &Connection,
    day: &str,
    breakfast: Option<&str>,
    lunch: Option<&str>,
    dinner: Option<&str>,
    notes: Option<&str>,
) -> AppResult<()> {
    conn.execute(
        "INSERT INTO meals (day, breakfast, lunch, dinner, notes)
         VALUES (?1, COALESCE(?2, ''), COALESCE(?3, ''), COALESCE(?4, ''), COALESCE(?5, ''))
         ON CONFLICT(day) DO UPDATE SET
             breakfast = COALESCE(?2, breakfast),
             lunch     = COALESCE(?3, lunch),
             dinner    = COALESCE(?4, dinner),
             notes     = COALESCE(?5, notes)",
        params![day, breakfast, lunch, dinner, notes],
    )?;
    Ok(())
}

pub fn load_meals(pool: &mut DbPool) -> AppResult<Vec<Meal>> {
    let mut stmt = pool.conn.prepare("SELECT * FROM meals ORDER BY id ASC")?;

    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
