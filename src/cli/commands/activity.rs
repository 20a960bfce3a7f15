use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries::activities;
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::utils::formatting::signed_points;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Activity { limit } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;

        let feed = activities::load_recent(&mut pool, *limit)?;

        if feed.is_empty() {
            println!("No activity yet.");
            return Ok(());
        }

        header("Activity feed");

        let mut table = Table::new(vec![
            Column {
                header: "Time".to_string(),
                width: 26,
            },
            Column {
                header: "Kind".to_string(),
                width: 10,
            },
            Column {
                header: "What".to_string(),
                width: 48,
            },
            Column {
                header: "Pts".to_string(),
                width: 5,
            },
        ]);

        for a in &feed {
            table.add_row(vec![
                a.time.clone(),
                a.kind.clone(),
                a.text.clone(),
                signed_points(a.points),
            ]);
        }

        println!("{}", table.render());
    }

    Ok(())
}
