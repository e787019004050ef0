use crate::db::pool::DbPool;
use crate::db::queries::count_trips;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use chrono::NaiveDate;
use rusqlite::OptionalExtension;
use std::fs;

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);

    //
    // 2) TOTAL TRIPS
    //
    let count = count_trips(&pool.conn)?;
    println!("{}• Total trips:{} {}{}{}", CYAN, RESET, GREEN, count, RESET);

    //
    // 3) DATE RANGE
    //
    let (first, last): (Option<String>, Option<String>) = pool
        .conn
        .query_row(
            "SELECT MIN(substr(timestamp, 1, 10)), MAX(substr(timestamp, 1, 10)) FROM trips",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )
        .optional()?
        .unwrap_or((None, None));

    let dash = format!("{GREY}--{RESET}");
    println!("{}• Date range:{}", CYAN, RESET);
    println!("    from: {}", first.as_deref().unwrap_or(&dash));
    println!("    to:   {}", last.as_deref().unwrap_or(&dash));

    //
    // 4) AVERAGE TRIPS/DAY
    //
    if let (Some(f), Some(l)) = (first, last)
        && let (Ok(d1), Ok(d2)) = (
            NaiveDate::parse_from_str(&f, "%Y-%m-%d"),
            NaiveDate::parse_from_str(&l, "%Y-%m-%d"),
        )
    {
        let days = (d2 - d1).num_days() + 1;
        let avg = count as f64 / days as f64;
        println!("{}• Average trips/day:{} {:.2}", CYAN, RESET, avg);
    }

    println!();
    Ok(())
}
