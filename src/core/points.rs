//! Points bookkeeping: task/cleaning completion, reward redemption and
//! fines. Every mutation here also appends to the activity feed so the
//! dashboard stays in sync with member totals.

use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries::{activities, events, members, rewards, tasks};
use crate::errors::{AppError, AppResult};
use crate::models::member::Member;

/// Mark a task done and award its points to every assignee.
pub fn complete_task(pool: &mut DbPool, task_id: i64) -> AppResult<Vec<String>> {
    let task = tasks::load_task(&pool.conn, task_id)?;

    if task.completed {
        return Ok(Vec::new()); // already done, nothing to award
    }

    tasks::mark_completed(&pool.conn, task_id)?;

    let assignees = tasks::assignee_ids(&pool.conn, task_id)?;
    let mut names = Vec::new();

    for member_id in assignees {
        let member = members::load_member(&pool.conn, member_id)?;

        members::add_points(&pool.conn, member_id, task.points)?;
        members::bump_tasks_completed(&pool.conn, member_id)?;
        activities::record(
            &pool.conn,
            "task",
            Some(member_id),
            &format!("{} completed task '{}'", member.name, task.title),
            task.points,
        )?;

        names.push(member.name);
    }

    Ok(names)
}

/// Mark a calendar event done. A cleaning event awards its points to the
/// assigned member and feeds the activity log; a general event is just
/// flipped to completed.
pub fn complete_event(pool: &mut DbPool, event_id: i64) -> AppResult<Option<Member>> {
    let ev = events::load_event(&pool.conn, event_id)?;

    if ev.completed {
        return Ok(None);
    }

    events::mark_completed(&pool.conn, event_id)?;

    let Some(member_id) = ev.assigned_to else {
        return Ok(None);
    };

    let member = members::load_member(&pool.conn, member_id)?;

    members::add_points(&pool.conn, member_id, ev.points)?;
    activities::record(
        &pool.conn,
        "cleaning",
        Some(member_id),
        &format!("{} finished '{}' on {}", member.name, ev.title, ev.date_str()),
        ev.points,
    )?;

    Ok(Some(member))
}

/// Redeem a reward: rejects when the member cannot afford it.
pub fn redeem_reward(pool: &mut DbPool, reward_id: i64, member_id: i64) -> AppResult<()> {
    let reward = rewards::load_reward(&pool.conn, reward_id)?;
    let member = members::load_member(&pool.conn, member_id)?;

    if member.points < reward.cost {
        return Err(AppError::InsufficientPoints {
            member: member.name,
            available: member.points,
            cost: reward.cost,
        });
    }

    members::add_points(&pool.conn, member_id, -reward.cost)?;
    activities::record(
        &pool.conn,
        "reward",
        Some(member_id),
        &format!("{} redeemed '{}'", member.name, reward.name),
        -reward.cost,
    )?;

    Ok(())
}

/// Charge the house rule fine for a skipped cleaning turn.
pub fn fine_member(pool: &mut DbPool, cfg: &Config, member_id: i64) -> AppResult<Member> {
    let member = members::load_member(&pool.conn, member_id)?;

    members::add_debt(&pool.conn, member_id, cfg.fine_amount)?;
    activities::record(
        &pool.conn,
        "fine",
        Some(member_id),
        &format!(
            "{} was fined ${} for skipping a cleaning turn",
            member.name, cfg.fine_amount
        ),
        0,
    )?;

    members::load_member(&pool.conn, member_id)
}
