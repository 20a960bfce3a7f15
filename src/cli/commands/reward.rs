use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::points;
use crate::db::pool::DbPool;
use crate::db::queries::rewards;
use crate::errors::{AppError, AppResult};
use crate::models::reward::Reward;
use crate::ui::messages::success;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Reward {
        add,
        description,
        icon,
        category,
        cost,
        redeem,
        member,
        list,
    } = cmd
    {
        let mut pool = DbPool::new(&cfg.database)?;

        // ---- ADD ----
        if let Some(name) = add {
            let reward = Reward {
                id: 0,
                name: name.clone(),
                description: description.clone().unwrap_or_default(),
                icon: icon.clone().unwrap_or_default(),
                category: category.clone().unwrap_or_default(),
                cost: cost.unwrap_or(0),
            };

            let id = rewards::insert_reward(&pool.conn, &reward)?;
            success(format!("Reward added: '{}' (id {})", name, id));
        }

        // ---- REDEEM ----
        if let Some(reward_id) = redeem {
            let member_id = member.ok_or_else(|| {
                AppError::Other("Redeeming needs --member MEMBER_ID".to_string())
            })?;

            points::redeem_reward(&mut pool, *reward_id, member_id)?;
            success(format!(
                "Reward {} redeemed by member {}.",
                reward_id, member_id
            ));
        }

        // ---- LIST ----
        if *list {
            let all = rewards::load_rewards(&mut pool)?;

            if all.is_empty() {
                println!("No rewards yet.");
                return Ok(());
            }

            let mut table = Table::new(vec![
                Column {
                    header: "ID".to_string(),
                    width: 5,
                },
                Column {
                    header: "Reward".to_string(),
                    width: 26,
                },
                Column {
                    header: "Category".to_string(),
                    width: 14,
                },
                Column {
                    header: "Cost".to_string(),
                    width: 7,
                },
            ]);

            for r in &all {
                let label = if r.icon.is_empty() {
                    r.name.clone()
                } else {
                    format!("{} {}", r.icon, r.name)
                };
                table.add_row(vec![
                    r.id.to_string(),
                    label,
                    r.category.clone(),
                    r.cost.to_string(),
                ]);
            }

            println!("{}", table.render());
        }
    }

    Ok(())
}
