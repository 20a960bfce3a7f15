use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries::budget;
use crate::errors::{AppError, AppResult};
use crate::models::budget::Expense;
use crate::ui::messages::{header, success};
use crate::utils::colors::{RESET, color_for_remaining};
use crate::utils::date;
use crate::utils::formatting::money;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Budget {
        category,
        amount,
        color,
        expense,
        on,
        cost,
        date: date_arg,
        notes,
        list,
    } = cmd
    {
        let mut pool = DbPool::new(&cfg.database)?;

        // ---- NEW CATEGORY ----
        if let Some(name) = category {
            let id = budget::insert_category(
                &pool.conn,
                name,
                amount.unwrap_or(0.0),
                color.as_deref().unwrap_or("#6B7280"),
            )?;
            success(format!("Budget category added: '{}' (id {})", name, id));
        }

        // ---- NEW EXPENSE ----
        if let Some(desc) = expense {
            let cat = on.as_ref().ok_or_else(|| {
                AppError::Other("An expense needs --on CATEGORY".to_string())
            })?;
            let amount = cost.ok_or_else(|| {
                AppError::Other("An expense needs --cost AMOUNT".to_string())
            })?;

            let day = match date_arg {
                Some(s) => date::parse_date(s)
                    .ok_or_else(|| AppError::InvalidDate(s.clone()))?,
                None => date::today(),
            };

            let exp = Expense {
                id: 0,
                description: desc.clone(),
                category_name: cat.clone(),
                amount,
                date: day.to_string(),
                notes: notes.clone().unwrap_or_default(),
            };

            budget::add_expense(&mut pool.conn, &exp)?;
            success(format!(
                "Expense recorded: '{}' {} on '{}'",
                desc,
                money(amount),
                cat
            ));
        }

        // ---- LIST ----
        if *list {
            let categories = budget::load_categories(&mut pool)?;

            if categories.is_empty() {
                println!("No budget categories yet.");
                return Ok(());
            }

            header("Budget");

            let mut table = Table::new(vec![
                Column {
                    header: "Category".to_string(),
                    width: 16,
                },
                Column {
                    header: "Budget".to_string(),
                    width: 11,
                },
                Column {
                    header: "Spent".to_string(),
                    width: 11,
                },
                Column {
                    header: "Remaining".to_string(),
                    width: 16,
                },
            ]);

            let mut total_budget = 0.0;
            let mut total_spent = 0.0;

            for c in &categories {
                let remaining = c.remaining();
                total_budget += c.budget;
                total_spent += c.spent;

                table.add_row(vec![
                    c.name.clone(),
                    money(c.budget),
                    money(c.spent),
                    format!(
                        "{}{}{}",
                        color_for_remaining(remaining),
                        money(remaining),
                        RESET
                    ),
                ]);
            }

            let total_remaining = total_budget - total_spent;
            table.add_row(vec![
                "TOTAL".to_string(),
                money(total_budget),
                money(total_spent),
                format!(
                    "{}{}{}",
                    color_for_remaining(total_remaining),
                    money(total_remaining),
                    RESET
                ),
            ]);

            println!("{}", table.render());

            let expenses = budget::load_expenses(&mut pool)?;
            if !expenses.is_empty() {
                header("Recent expenses");

                let mut table = Table::new(vec![
                    Column {
                        header: "Date".to_string(),
                        width: 12,
                    },
                    Column {
                        header: "Description".to_string(),
                        width: 24,
                    },
                    Column {
                        header: "Category".to_string(),
                        width: 16,
                    },
                    Column {
                        header: "Amount".to_string(),
                        width: 11,
                    },
                ]);

                for e in &expenses {
                    table.add_row(vec![
                        e.date.clone(),
                        e.description.clone(),
                        e.category_name.clone(),
                        money(e.amount),
                    ]);
                }

                println!("{}", table.render());
            }
        }
    }

    Ok(())
}
