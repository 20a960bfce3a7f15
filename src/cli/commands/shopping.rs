use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries::shopping;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::colors::colorize_done;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Shopping {
        add,
        by,
        done,
        del,
        clear,
        list,
    } = cmd
    {
        let mut pool = DbPool::new(&cfg.database)?;

        if let Some(item) = add {
            let id = shopping::insert_item(&pool.conn, item, *by)?;
            success(format!("Shopping item added: '{}' (id {})", item, id));
        }

        if let Some(id) = done {
            shopping::mark_completed(&pool.conn, *id)?;
            success(format!("Shopping item checked off: {}", id));
        }

        if let Some(id) = del {
            shopping::delete_item(&pool.conn, *id)?;
            success(format!("Shopping item deleted: {}", id));
        }

        if *clear {
            let removed = shopping::clear_completed(&pool.conn)?;
            success(format!("Removed {} checked-off item(s).", removed));
        }

        if *list {
            let items = shopping::load_items(&mut pool)?;

            if items.is_empty() {
                println!("Shopping list is empty.");
                return Ok(());
            }

            let mut table = Table::new(vec![
                Column {
                    header: "ID".to_string(),
                    width: 5,
                },
                Column {
                    header: "Item".to_string(),
                    width: 28,
                },
                Column {
                    header: "Added by".to_string(),
                    width: 10,
                },
                Column {
                    header: "Status".to_string(),
                    width: 9,
                },
            ]);

            for it in &items {
                let status = if it.completed { "done" } else { "open" };
                table.add_row(vec![
                    it.id.to_string(),
                    it.item.clone(),
                    it.added_by
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| "--".to_string()),
                    colorize_done(status, it.completed),
                ]);
            }

            println!("{}", table.render());
        }
    }

    Ok(())
}
