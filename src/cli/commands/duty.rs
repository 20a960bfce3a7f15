use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::rotation;
use crate::db::pool::DbPool;
use crate::db::queries::members;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{header, info, warning};
use crate::utils::date;
use crate::utils::table::{Column, Table};

/// Handle the `duty` subcommand: answer "who cleans?" for a single day
/// or a whole month, without touching recorded events.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Duty {
        date: date_arg,
        month,
        frequency,
    } = cmd
    {
        let mut pool = DbPool::new(&cfg.database)?;
        let roster = members::load_roster(&mut pool)?;

        // Per-call override wins over the persisted setting.
        let freq = frequency.unwrap_or(cfg.cleaning_frequency);

        if let Some(m) = month {
            let (year, mm) = date::parse_month(m)
                .ok_or_else(|| AppError::InvalidDate(m.clone()))?;

            let days = date::all_days_of_month(year, mm);
            let duties = rotation::duty_days(&days, &roster, freq)?;

            header(format!(
                "Cleaning duty — {} {} (every {} day(s))",
                date::month_name(&format!("{:02}", mm)),
                year,
                freq
            ));

            if duties.is_empty() {
                warning("No duty days: the roster is empty.");
                return Ok(());
            }

            let mut table = Table::new(vec![
                Column {
                    header: "Date".to_string(),
                    width: 12,
                },
                Column {
                    header: "Assignee".to_string(),
                    width: 24,
                },
            ]);

            for (day, member) in duties {
                table.add_row(vec![day.to_string(), member.display_label()]);
            }

            println!("{}", table.render());
            return Ok(());
        }

        let day = match date_arg {
            Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?,
            None => date::today(),
        };

        match rotation::assignee_for_date(day, &roster, freq)? {
            Some(member) => {
                info(format!(
                    "Cleaning duty on {}: {}",
                    day,
                    member.display_label()
                ));
            }
            None if roster.is_empty() => {
                warning("No members yet; nobody can have cleaning duty.");
            }
            None => {
                info(format!("{} is a rest day. Nobody cleans.", day));
            }
        }
    }

    Ok(())
}
