use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::points;
use crate::db::log::oplog;
use crate::db::pool::DbPool;
use crate::db::queries::events;
use crate::errors::{AppError, AppResult};
use crate::export::range::parse_range;
use crate::models::event::Event;
use crate::models::event_kind::EventKind;
use crate::ui::messages::success;
use crate::utils::colors::colorize_done;
use crate::utils::date;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Event {
        add,
        date: date_arg,
        assign,
        points: points_arg,
        done,
        del,
        list,
        range,
    } = cmd
    {
        let mut pool = DbPool::new(&cfg.database)?;

        // ---- ADD ----
        if let Some(title) = add {
            let day = match date_arg {
                Some(s) => date::parse_date(s)
                    .ok_or_else(|| AppError::InvalidDate(s.clone()))?,
                None => date::today(),
            };

            let ev = Event::new(
                title,
                day,
                EventKind::General,
                *assign,
                points_arg.unwrap_or(0),
                false,
            );
            let id = events::insert_event(&pool.conn, &ev)?;

            oplog(
                &pool.conn,
                "event_add",
                &id.to_string(),
                &format!("Added event '{}' on {}", title, day),
            )?;
            success(format!("Event added: '{}' on {} (id {})", title, day, id));
        }

        // ---- DONE ----
        if let Some(id) = done {
            match points::complete_event(&mut pool, *id)? {
                Some(member) => success(format!(
                    "Event {} completed. Points awarded to {}.",
                    id, member.name
                )),
                None => success(format!("Event {} completed.", id)),
            }
        }

        // ---- DELETE ----
        if let Some(id) = del {
            events::delete_event(&pool.conn, *id)?;
            success(format!("Event deleted: {}", id));
        }

        // ---- LIST ----
        if *list {
            let evs = match range {
                Some(r) if !r.eq_ignore_ascii_case("all") => {
                    let (start, end) = parse_range(r)?;
                    events::load_events_between(&mut pool, start, end)?
                }
                _ => events::load_all_events(&mut pool)?,
            };

            if evs.is_empty() {
                println!("No events found.");
                return Ok(());
            }

            let mut table = Table::new(vec![
                Column {
                    header: "ID".to_string(),
                    width: 5,
                },
                Column {
                    header: "Date".to_string(),
                    width: 12,
                },
                Column {
                    header: "Title".to_string(),
                    width: 24,
                },
                Column {
                    header: "Kind".to_string(),
                    width: 10,
                },
                Column {
                    header: "Assignee".to_string(),
                    width: 10,
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

            for ev in &evs {
                let status = if ev.completed { "done" } else { "pending" };
                table.add_row(vec![
                    ev.id.to_string(),
                    ev.date_str(),
                    ev.title.clone(),
                    ev.kind.to_db_str().to_string(),
                    ev.assigned_to
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| "--".to_string()),
                    ev.points.to_string(),
                    colorize_done(status, ev.completed),
                ]);
            }

            println!("{}", table.render());
        }
    }

    Ok(())
}
