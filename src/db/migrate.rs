use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists. It doubles as the migration
/// ledger (`operation = 'migration_applied'`).
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn migration_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn mark_applied(conn: &Connection, version: &str, message: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;
    Ok(())
}

/// Check if a table exists.
fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Check if a table has a given column.
fn has_column(conn: &Connection, table: &str, column: &str) -> Result<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info('{}')", table))?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == column {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Create the base schema (all household tables).
fn create_base_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS members (
            id              INTEGER PRIMARY KEY AUTOINCREMENT,
            name            TEXT NOT NULL,
            role            TEXT NOT NULL DEFAULT '',
            color           TEXT NOT NULL DEFAULT '#6B7280',
            birthday        TEXT,
            job             TEXT,
            points          INTEGER NOT NULL DEFAULT 0,
            tasks_completed INTEGER NOT NULL DEFAULT 0,
            streak          INTEGER NOT NULL DEFAULT 0,
            debt            INTEGER NOT NULL DEFAULT 0,
            created_at      TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS events (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            title       TEXT NOT NULL,
            date        TEXT NOT NULL,
            kind        TEXT NOT NULL DEFAULT 'general' CHECK(kind IN ('cleaning','general')),
            assigned_to INTEGER REFERENCES members(id) ON DELETE SET NULL,
            points      INTEGER NOT NULL DEFAULT 0,
            completed   INTEGER NOT NULL DEFAULT 0,
            created_at  TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_events_date ON events(date);
        CREATE INDEX IF NOT EXISTS idx_events_date_kind ON events(date, kind);

        CREATE TABLE IF NOT EXISTS tasks (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            title       TEXT NOT NULL,
            description TEXT NOT NULL DEFAULT '',
            category    TEXT NOT NULL DEFAULT '',
            priority    TEXT NOT NULL DEFAULT 'medium' CHECK(priority IN ('low','medium','high')),
            due_date    TEXT,
            points      INTEGER NOT NULL DEFAULT 0,
            completed   INTEGER NOT NULL DEFAULT 0,
            created_at  TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS task_assignments (
            task_id   INTEGER NOT NULL REFERENCES tasks(id) ON DELETE CASCADE,
            member_id INTEGER NOT NULL REFERENCES members(id) ON DELETE CASCADE
        );

        CREATE TABLE IF NOT EXISTS shopping_list (
            id         INTEGER PRIMARY KEY AUTOINCREMENT,
            item       TEXT NOT NULL,
            added_by   INTEGER REFERENCES members(id) ON DELETE SET NULL,
            completed  INTEGER NOT NULL DEFAULT 0,
            created_at TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS budget_categories (
            id     INTEGER PRIMARY KEY AUTOINCREMENT,
            name   TEXT NOT NULL UNIQUE,
            budget REAL NOT NULL DEFAULT 0,
            spent  REAL NOT NULL DEFAULT 0,
            color  TEXT NOT NULL DEFAULT '#6B7280'
        );

        CREATE TABLE IF NOT EXISTS expenses (
            id            INTEGER PRIMARY KEY AUTOINCREMENT,
            description   TEXT NOT NULL DEFAULT '',
            category_name TEXT NOT NULL,
            amount        REAL NOT NULL,
            date          TEXT NOT NULL,
            notes         TEXT NOT NULL DEFAULT ''
        );

        CREATE TABLE IF NOT EXISTS meals (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            day       TEXT NOT NULL UNIQUE,
            breakfast TEXT NOT NULL DEFAULT '',
            lunch     TEXT NOT NULL DEFAULT '',
            dinner    TEXT NOT NULL DEFAULT '',
            notes     TEXT NOT NULL DEFAULT ''
        );

        CREATE TABLE IF NOT EXISTS goals (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            title       TEXT NOT NULL,
            description TEXT NOT NULL DEFAULT '',
            category    TEXT NOT NULL DEFAULT '',
            target      INTEGER NOT NULL DEFAULT 0,
            current     INTEGER NOT NULL DEFAULT 0,
            due_date    TEXT,
            points      INTEGER NOT NULL DEFAULT 0,
            completed   INTEGER NOT NULL DEFAULT 0
        );

        CREATE TABLE IF NOT EXISTS rewards (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            name        TEXT NOT NULL,
            description TEXT NOT NULL DEFAULT '',
            icon        TEXT NOT NULL DEFAULT '',
            category    TEXT NOT NULL DEFAULT '',
            cost        INTEGER NOT NULL DEFAULT 0
        );

        CREATE TABLE IF NOT EXISTS activities (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            kind      TEXT NOT NULL DEFAULT '',
            member_id INTEGER REFERENCES members(id) ON DELETE SET NULL,
            text      TEXT NOT NULL,
            points    INTEGER NOT NULL DEFAULT 0,
            time      TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS notes (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            title     TEXT NOT NULL,
            content   TEXT NOT NULL DEFAULT '',
            priority  TEXT NOT NULL DEFAULT 'medium',
            author_id INTEGER REFERENCES members(id) ON DELETE SET NULL,
            date      TEXT NOT NULL,
            pinned    INTEGER NOT NULL DEFAULT 0,
            completed INTEGER NOT NULL DEFAULT 0
        );
        "#,
    )?;
    Ok(())
}

/// Early layouts kept member fines in a separate table; the model now is
/// a plain `debt` counter on the member row, same as birthday/job which
/// arrived after the first release.
fn migrate_add_member_extras(conn: &Connection) -> Result<()> {
    let version = "20260105_0002_add_member_extras";

    if migration_applied(conn, version)? {
        return Ok(());
    }

    if !has_column(conn, "members", "birthday")? {
        conn.execute("ALTER TABLE members ADD COLUMN birthday TEXT", [])?;
    }
    if !has_column(conn, "members", "job")? {
        conn.execute("ALTER TABLE members ADD COLUMN job TEXT", [])?;
    }
    if !has_column(conn, "members", "debt")? {
        conn.execute(
            "ALTER TABLE members ADD COLUMN debt INTEGER NOT NULL DEFAULT 0",
            [],
        )?;
    }

    mark_applied(conn, version, "Added birthday/job/debt columns to members")?;

    success(format!(
        "Migration applied: {} → added birthday/job/debt to members table",
        version
    ));

    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invoked from db::init_db().
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    // 1) Ensure log table
    ensure_log_table(conn)?;

    // 2) Base schema
    let fresh = !table_exists(conn, "members")?;
    create_base_schema(conn)?;

    if fresh {
        success("Created household schema.");
    }

    // 3) Incremental migrations
    migrate_add_member_extras(conn)?;

    Ok(())
}
