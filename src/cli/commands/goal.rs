use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries::goals;
use crate::errors::AppResult;
use crate::models::goal::Goal;
use crate::ui::messages::success;
use crate::utils::colors::colorize_done;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Goal {
        add,
        description,
        category,
        target,
        due,
        points,
        progress,
        by,
        list,
    } = cmd
    {
        let mut pool = DbPool::new(&cfg.database)?;

        // ---- ADD ----
        if let Some(title) = add {
            let goal = Goal {
                id: 0,
                title: title.clone(),
                description: description.clone().unwrap_or_default(),
                category: category.clone().unwrap_or_default(),
                target: target.unwrap_or(0),
                current: 0,
                due_date: due.clone(),
                points: points.unwrap_or(0),
                completed: false,
            };

            let id = goals::insert_goal(&pool.conn, &goal)?;
            success(format!("Goal added: '{}' (id {})", title, id));
        }

        // ---- PROGRESS ----
        if let Some(id) = progress {
            let goal = goals::advance_goal(&pool.conn, *id, by.unwrap_or(1))?;

            if goal.completed {
                success(format!(
                    "Goal '{}' completed! ({}/{})",
                    goal.title, goal.current, goal.target
                ));
            } else {
                success(format!(
                    "Goal '{}' advanced: {}/{} ({:.0}%)",
                    goal.title,
                    goal.current,
                    goal.target,
                    goal.progress_pct()
                ));
            }
        }

        // ---- LIST ----
        if *list {
            let all = goals::load_goals(&mut pool)?;

            if all.is_empty() {
                println!("No goals yet.");
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
                    header: "Progress".to_string(),
                    width: 12,
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
                    header: "Status".to_string(),
                    width: 9,
                },
            ]);

            for g in &all {
                let status = if g.completed { "done" } else { "open" };
                table.add_row(vec![
                    g.id.to_string(),
                    g.title.clone(),
                    format!("{}/{}", g.current, g.target),
                    g.due_date.clone().unwrap_or_else(|| "--".to_string()),
                    g.points.to_string(),
                    colorize_done(status, g.completed),
                ]);
            }

            println!("{}", table.render());
        }
    }

    Ok(())
}
