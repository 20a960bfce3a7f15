use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::seed;
use crate::db::log::oplog;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Seed {
        year,
        force,
        demo,
        frequency,
    } = cmd
    {
        let mut pool = DbPool::new(&cfg.database)?;

        if *demo {
            let added = seed::seed_demo_data(&mut pool)?;
            if added > 0 {
                success(format!("Demo data inserted ({} members).", added));
            } else {
                info("Members already present; demo data skipped.");
            }
        }

        let freq = frequency.unwrap_or(cfg.cleaning_frequency);

        let inserted = seed::seed_year_calendar(&mut pool, cfg, *year, freq, *force)?;

        oplog(
            &pool.conn,
            "seed",
            &year.to_string(),
            &format!(
                "Seeded {} cleaning events for {} (every {} day(s))",
                inserted, year, freq
            ),
        )?;

        success(format!(
            "Seeded {} cleaning events for {} (every {} day(s)).",
            inserted, year, freq
        ));
    }

    Ok(())
}
