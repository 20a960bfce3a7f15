use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries::notes;
use crate::errors::{AppError, AppResult};
use crate::models::priority::Priority;
use crate::ui::messages::success;
use crate::utils::colors::colorize_done;
use crate::utils::formatting::describe_priority;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Note {
        add,
        content,
        priority,
        author,
        pin,
        done,
        del,
        list,
    } = cmd
    {
        let mut pool = DbPool::new(&cfg.database)?;

        // ---- ADD ----
        if let Some(title) = add {
            let prio = match priority {
                Some(code) => Priority::from_code(code)
                    .ok_or_else(|| AppError::InvalidPriority(code.clone()))?,
                None => Priority::Medium,
            };

            let id = notes::insert_note(
                &pool.conn,
                title,
                content.as_deref().unwrap_or(""),
                prio.to_db_str(),
                *author,
            )?;
            success(format!("Note added: '{}' (id {})", title, id));
        }

        // ---- PIN ----
        if let Some(id) = pin {
            notes::set_pinned(&pool.conn, *id, true)?;
            success(format!("Note pinned: {}", id));
        }

        // ---- DONE ----
        if let Some(id) = done {
            notes::mark_completed(&pool.conn, *id)?;
            success(format!("Note resolved: {}", id));
        }

        // ---- DELETE ----
        if let Some(id) = del {
            notes::delete_note(&pool.conn, *id)?;
            success(format!("Note deleted: {}", id));
        }

        // ---- LIST ----
        if *list {
            let all = notes::load_notes(&mut pool)?;

            if all.is_empty() {
                println!("No notes yet.");
                return Ok(());
            }

            let mut table = Table::new(vec![
                Column {
                    header: "ID".to_string(),
                    width: 5,
                },
                Column {
                    header: "Title".to_string(),
                    width: 24,
                },
                Column {
                    header: "Priority".to_string(),
                    width: 10,
                },
                Column {
                    header: "Date".to_string(),
                    width: 12,
                },
                Column {
                    header: "Pin".to_string(),
                    width: 5,
                },
                Column {
                    header: "Status".to_string(),
                    width: 9,
                },
            ]);

            for n in &all {
                let (prio_label, _) = describe_priority(&n.priority);
                let status = if n.completed { "done" } else { "open" };
                table.add_row(vec![
                    n.id.to_string(),
                    n.title.clone(),
                    prio_label,
                    n.date.clone(),
                    (if n.pinned { "📌" } else { "" }).to_string(),
                    colorize_done(status, n.completed),
                ]);
            }

            println!("{}", table.render());
        }
    }

    Ok(())
}
