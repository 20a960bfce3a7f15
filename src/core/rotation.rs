//! Cleaning-rotation scheduler.
//!
//! Pure date arithmetic: given a calendar date, the ordered roster and a
//! rotation frequency, decide who (if anyone) has cleaning duty that day.
//! The same function feeds the `duty` views and the yearly seed generator,
//! so the calendar and the dashboard can never disagree.

use crate::errors::{AppError, AppResult};
use crate::models::member::Member;
use chrono::NaiveDate;

/// Fixed reference date from which day-offsets are measured.
/// Moving it would shift every historical assignment, so it never changes.
pub fn epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

/// Who cleans on `date`?
///
/// Returns `Ok(None)` on rest days and for an empty roster. Frequency 0
/// is rejected instead of guessing a fallback.
///
/// `NaiveDate` carries no time-of-day, so two timestamps on the same
/// calendar day always resolve to the same answer. Dates before the epoch
/// are valid: `div_euclid`/`rem_euclid` floor toward negative infinity,
/// so the turn index stays well-defined instead of going off-by-one.
pub fn assignee_for_date<'a>(
    date: NaiveDate,
    roster: &'a [Member],
    frequency: u32,
) -> AppResult<Option<&'a Member>> {
    if frequency == 0 {
        return Err(AppError::InvalidFrequency(
            "frequency must be at least 1".to_string(),
        ));
    }

    // Empty roster → nobody, checked before any modulo on roster.len().
    if roster.is_empty() {
        return Ok(None);
    }

    let diff_days = (date - epoch()).num_days();
    let freq = i64::from(frequency);

    if diff_days.rem_euclid(freq) != 0 {
        return Ok(None); // rest day
    }

    let turn_index = diff_days.div_euclid(freq);
    let member_index = turn_index.rem_euclid(roster.len() as i64) as usize;

    Ok(Some(&roster[member_index]))
}

/// Bulk variant: resolve every duty day in `dates`.
///
/// Used by the month view and the yearly seed generator, which both walk
/// a date list and keep only the days with an assignee.
pub fn duty_days<'a>(
    dates: &[NaiveDate],
    roster: &'a [Member],
    frequency: u32,
) -> AppResult<Vec<(NaiveDate, &'a Member)>> {
    let mut out = Vec::new();

    for d in dates {
        if let Some(m) = assignee_for_date(*d, roster, frequency)? {
            out.push((*d, m));
        }
    }

    Ok(out)
}
