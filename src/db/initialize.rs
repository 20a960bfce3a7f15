use crate::db::migrate::run_pending_migrations;
use crate::errors::AppResult;
use rusqlite::Connection;

/// Bring a freshly opened database up to the current household schema.
///
/// There is no ad-hoc DDL anywhere else: every table this tool touches
/// is created and upgraded by the versioned migrations, so `init` and
/// the test fixtures go through this one entry point.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    run_pending_migrations(conn)?;
    Ok(())
}
