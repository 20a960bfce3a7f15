use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::points;
use crate::db::log::oplog;
use crate::db::pool::DbPool;
use crate::db::queries::tasks;
use crate::errors::{AppError, AppResult};
use crate::models::priority::Priority;
use crate::models::task::Task;
use crate::ui::messages::{info, success};
use crate::utils::colors::colorize_done;
use crate::utils::date;
use crate::utils::formatting::describe_priority;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Task {
        add,
        description,
        category,
        priority,
        due,
        points: points_arg,
        assign,
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

            let due_date = match due {
                Some(s) => Some(
                    date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?,
                ),
                None => None,
            };

            let task = Task::new(
                title,
                description.as_deref().unwrap_or(""),
                category.as_deref().unwrap_or(""),
                prio,
                due_date,
                points_arg.unwrap_or(0),
            );

            let id = tasks::insert_task(&mut pool.conn, &task, assign)?;

            oplog(
                &pool.conn,
                "task_add",
                &id.to_string(),
                &format!("Added task '{}'", title),
            )?;
            success(format!("Task added: '{}' (id {})", title, id));
        }

        // ---- DONE ----
        if let Some(id) = done {
            let names = points::complete_task(&mut pool, *id)?;
            if names.is_empty() {
                info(format!("Task {} was already completed (or unassigned).", id));
            } else {
                success(format!(
                    "Task {} completed. Points awarded to: {}",
                    id,
                    names.join(", ")
                ));
            }
        }

        // ---- DELETE ----
        if let Some(id) = del {
            tasks::delete_task(&pool.conn, *id)?;
            success(format!("Task deleted: {}", id));
        }

        // ---- LIST ----
        if *list {
            let all = tasks::load_tasks(&mut pool)?;

            if all.is_empty() {
                println!("No tasks found.");
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
                    header: "Due".to_string(),
                    width: 12,
                },
                Column {
                    header: "Pts".to_string(),
                    width: 5,
                },
                Column {
                    header: "Assignees".to_string(),
                    width: 24,
                },
                Column {
                    header: "Status".to_string(),
                    width: 9,
                },
            ]);

            for t in &all {
                let (prio_label, _) = describe_priority(t.priority.to_db_str());
                let status = if t.completed { "done" } else { "pending" };

                table.add_row(vec![
                    t.id.to_string(),
                    t.title.clone(),
                    prio_label,
                    t.due_date
                        .map(|d| d.to_string())
                        .unwrap_or_else(|| "--".to_string()),
                    t.points.to_string(),
                    t.assigned_to.join(", "),
                    colorize_done(status, t.completed),
                ]);
            }

            println!("{}", table.render());
        }
    }

    Ok(())
}
