use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries::meals;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::colors::colorize_optional;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Meal {
        day,
        breakfast,
        lunch,
        dinner,
        notes,
        list,
    } = cmd
    {
        let mut pool = DbPool::new(&cfg.database)?;

        // Fields left out stay untouched (COALESCE in the upsert).
        if let Some(d) = day {
            meals::upsert_meal(
                &pool.conn,
                d,
                breakfast.as_deref(),
                lunch.as_deref(),
                dinner.as_deref(),
                notes.as_deref(),
            )?;
            success(format!("Meal plan updated for {}.", d));
        }

        if *list {
            let plan = meals::load_meals(&mut pool)?;

            if plan.is_empty() {
                println!("No meal plan yet.");
                return Ok(());
            }

            let mut table = Table::new(vec![
                Column {
                    header: "Day".to_string(),
                    width: 11,
                },
                Column {
                    header: "Breakfast".to_string(),
                    width: 18,
                },
                Column {
                    header: "Lunch".to_string(),
                    width: 18,
                },
                Column {
                    header: "Dinner".to_string(),
                    width: 18,
                },
                Column {
                    header: "Notes".to_string(),
                    width: 18,
                },
            ]);

            for m in &plan {
                table.add_row(vec![
                    m.day.clone(),
                    colorize_optional(&m.breakfast),
                    colorize_optional(&m.lunch),
                    colorize_optional(&m.dinner),
                    colorize_optional(&m.notes),
                ]);
            }

            println!("{}", table.render());
        }
    }

    Ok(())
}
