use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;

/// Parse the `--range` grammar: a single year, month or day, or a
/// `start:end` pair where both ends use the same shape.
///
/// YYYY | YYYY-MM | YYYY-MM-DD | YYYY:YYYY | YYYY-MM:YYYY-MM |
/// YYYY-MM-DD:YYYY-MM-DD
pub(crate) fn parse_range(r: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    match r.split_once(':') {
        Some((start, end)) => {
            let (start, end) = (start.trim(), end.trim());
            if start.len() != end.len() {
                return Err(AppError::InvalidDate(format!(
                    "{r} (both ends of a range must use the same format)"
                )));
            }
            Ok((first_day(start)?, last_day(end)?))
        }
        None => Ok((first_day(r)?, last_day(r)?)),
    }
}

/// Earliest date a year / month / day expression covers.
fn first_day(s: &str) -> AppResult<NaiveDate> {
    match s.len() {
        4 => NaiveDate::from_ymd_opt(parse_year(s)?, 1, 1).ok_or_else(|| invalid(s)),
        7 => {
            let (y, m) = parse_year_month(s)?;
            NaiveDate::from_ymd_opt(y, m, 1).ok_or_else(|| invalid(s))
        }
        10 => NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| invalid(s)),
        _ => Err(invalid(s)),
    }
}

/// Latest date the same expression covers.
fn last_day(s: &str) -> AppResult<NaiveDate> {
    match s.len() {
        4 => NaiveDate::from_ymd_opt(parse_year(s)?, 12, 31).ok_or_else(|| invalid(s)),
        7 => {
            let (y, m) = parse_year_month(s)?;
            month_end(y, m).ok_or_else(|| invalid(s))
        }
        10 => NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| invalid(s)),
        _ => Err(invalid(s)),
    }
}

/// Last calendar day of a month: day one of the following month, minus
/// one day. Chrono takes care of leap years.
fn month_end(y: i32, m: u32) -> Option<NaiveDate> {
    let next = if m == 12 {
        NaiveDate::from_ymd_opt(y + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(y, m + 1, 1)
    };
    next.and_then(|d| d.pred_opt())
}

fn parse_year(s: &str) -> AppResult<i32> {
    s.parse().map_err(|_| invalid(s))
}

fn parse_year_month(s: &str) -> AppResult<(i32, u32)> {
    let (y, m) = s.split_once('-').ok_or_else(|| invalid(s))?;
    Ok((
        y.parse().map_err(|_| invalid(s))?,
        m.parse().map_err(|_| invalid(s))?,
    ))
}

fn invalid(s: &str) -> AppError {
    AppError::InvalidDate(s.to_string())
}
