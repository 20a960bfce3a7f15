use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::points;
use crate::db::log::oplog;
use crate::db::pool::DbPool;
use crate::db::queries::members;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::colors::colorize_optional;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Member {
        add,
        role,
        color,
        birthday,
        job,
        list,
        del,
        fine,
    } = cmd
    {
        let mut pool = DbPool::new(&cfg.database)?;

        // ---- ADD ----
        if let Some(name) = add {
            let id = members::insert_member(
                &pool.conn,
                name,
                role.as_deref().unwrap_or(""),
                color.as_deref().unwrap_or("#6B7280"),
                birthday.as_deref(),
                job.as_deref(),
            )?;

            oplog(
                &pool.conn,
                "member_add",
                &id.to_string(),
                &format!("Added member '{}'", name),
            )?;
            success(format!("Member added: {} (id {})", name, id));
        }

        // ---- FINE ----
        if let Some(id) = fine {
            let member = points::fine_member(&mut pool, cfg, *id)?;
            success(format!(
                "{} fined ${} (total debt: ${})",
                member.name, cfg.fine_amount, member.debt
            ));
        }

        // ---- DELETE ----
        if let Some(id) = del {
            let member = members::load_member(&pool.conn, *id)?;
            members::delete_member(&pool.conn, *id)?;

            oplog(
                &pool.conn,
                "member_del",
                &id.to_string(),
                &format!("Deleted member '{}'", member.name),
            )?;
            success(format!("Member deleted: {}", member.name));
        }

        // ---- LIST ----
        if *list {
            let roster = members::load_roster(&mut pool)?;

            if roster.is_empty() {
                println!("No members yet. Add one with `member --add NAME`.");
                return Ok(());
            }

            let mut table = Table::new(vec![
                Column {
                    header: "ID".to_string(),
                    width: 5,
                },
                Column {
                    header: "Name".to_string(),
                    width: 16,
                },
                Column {
                    header: "Role".to_string(),
                    width: 14,
                },
                Column {
                    header: "Birthday".to_string(),
                    width: 12,
                },
                Column {
                    header: "Points".to_string(),
                    width: 8,
                },
                Column {
                    header: "Tasks".to_string(),
                    width: 7,
                },
                Column {
                    header: "Streak".to_string(),
                    width: 8,
                },
                Column {
                    header: "Debt".to_string(),
                    width: 7,
                },
            ]);

            for m in &roster {
                table.add_row(vec![
                    m.id.to_string(),
                    m.name.clone(),
                    colorize_optional(&m.role),
                    colorize_optional(m.birthday.as_deref().unwrap_or("--")),
                    m.points.to_string(),
                    m.tasks_completed.to_string(),
                    format!("{}d", m.streak),
                    format!("${}", m.debt),
                ]);
            }

            println!("{}", table.render());
        }
    }

    Ok(())
}
