// src/export/range.rs

use crate::errors::{AppError, AppResult};
use crate::utils::date::month_last_day;
use chrono::NaiveDate;

/// Parse a `--range` expression into inclusive date bounds.
///
/// Supports:
/// - YYYY
/// - YYYY-MM
/// - YYYY-MM-DD
/// - YYYY:YYYY
/// - YYYY-MM:YYYY-MM
/// - YYYY-MM-DD:YYYY-MM-DD
pub fn parse_range(r: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let r = r.trim();

    let (start, end) = match r.split_once(':') {
        Some((start_raw, end_raw)) => {
            let (start, end) = (start_raw.trim(), end_raw.trim());
            if start.len() != end.len() {
                return Err(AppError::InvalidRange(format!(
                    "start and end must have the same format: {r}"
                )));
            }
            (bounds_of(start)?.0, bounds_of(end)?.1)
        }
        None => bounds_of(r)?,
    };

    if start > end {
        return Err(AppError::InvalidRange(format!("start is after end: {r}")));
    }
    Ok((start, end))
}

/// `None` and "all" mean no filtering.
pub fn parse_optional_range(range: Option<&str>) -> AppResult<Option<(NaiveDate, NaiveDate)>> {
    match range {
        None => Ok(None),
        Some(r) if r.trim().eq_ignore_ascii_case("all") => Ok(None),
        Some(r) => parse_range(r).map(Some),
    }
}

/// First and last day covered by a single YYYY / YYYY-MM / YYYY-MM-DD token.
fn bounds_of(token: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let invalid = || AppError::InvalidRange(format!("unsupported range format: {token}"));

    match token.len() {
        // YYYY
        4 => {
            let y: i32 = token.parse().map_err(|_| invalid())?;
            let d1 = NaiveDate::from_ymd_opt(y, 1, 1).ok_or_else(invalid)?;
            let d2 = NaiveDate::from_ymd_opt(y, 12, 31).ok_or_else(invalid)?;
            Ok((d1, d2))
        }
        // YYYY-MM
        7 => {
            let (ys, ms) = token.split_once('-').ok_or_else(invalid)?;
            let y: i32 = ys.parse().map_err(|_| invalid())?;
            let m: u32 = ms.parse().map_err(|_| invalid())?;
            let last = month_last_day(y, m).ok_or_else(invalid)?;

            let d1 = NaiveDate::from_ymd_opt(y, m, 1).ok_or_else(invalid)?;
            let d2 = NaiveDate::from_ymd_opt(y, m, last).ok_or_else(invalid)?;
            Ok((d1, d2))
        }
        // YYYY-MM-DD
        10 => {
            let d = NaiveDate::parse_from_str(token, "%Y-%m-%d").map_err(|_| invalid())?;
            Ok((d, d))
        }
        _ => Err(invalid()),
    }
}
