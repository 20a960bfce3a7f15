use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Log { print: true }) {
        let mut pool = DbPool::new(&cfg.database)?;
        print_log(&mut pool, cfg)?;
    }

    Ok(())
}

/// Dump the internal `log` table, oldest first.
fn print_log(pool: &mut DbPool, cfg: &Config) -> AppResult<()> {
    header("Internal log");

    let mut stmt = pool
        .conn
        .prepare("SELECT id, date, operation, target, message FROM log ORDER BY id ASC")?;

    let rows = stmt.query_map([], |row| {
        Ok((
            row.get::<_, i64>(0)?,
            row.get::<_, String>(1)?,
            row.get::<_, String>(2)?,
            row.get::<_, String>(3)?,
            row.get::<_, String>(4)?,
        ))
    })?;

    let mut table = Table::new(vec![
        Column {
            header: "ID".to_string(),
            width: 5,
        },
        Column {
            header: "Date".to_string(),
            width: 26,
        },
        Column {
            header: "Operation".to_string(),
            width: 20,
        },
        Column {
            header: "Target".to_string(),
            width: 34,
        },
        Column {
            header: "Message".to_string(),
            width: 44,
        },
    ]);

    for r in rows {
        let (id, date, operation, target, message) = r?;
        table.add_row(vec![id.to_string(), date, operation, target, message]);
    }

    let total_width: usize = table.columns.iter().map(|c| c.width + 1).sum();

    let rendered = table.render();
    let mut lines = rendered.lines();

    if let Some(head) = lines.next() {
        println!("{}", head);
        // Configurable separator glyph between header and rows.
        println!("{}", cfg.separator_char.repeat(total_width));
    }
    for line in lines {
        println!("{}", line);
    }

    Ok(())
}
