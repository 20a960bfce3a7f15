use crate::db::pool::DbPool;
use crate::errors::AppResult;

/// Run SQLite's integrity_check pragma.
pub fn integrity_check(pool: &mut DbPool) -> AppResult<String> {
    let result: String = pool
        .conn
        .query_row("PRAGMA integrity_check;", [], |row| row.get(0))?;
    Ok(result)
}

/// Reclaim free pages.
pub fn vacuum(pool: &mut DbPool) -> AppResult<()> {
    pool.conn.execute_batch("VACUUM;")?;
    Ok(())
}
