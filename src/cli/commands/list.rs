use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries::load_trips_in;
use crate::errors::AppResult;
use crate::export::range::parse_optional_range;
use crate::models::trip_log::TripLog;
use crate::ui::messages::info;
use crate::utils::colors::{GREY, color_for_net, color_for_quality};
use crate::utils::table::{Column, Table};
use crate::utils::money;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { range } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;
        let bounds = parse_optional_range(range.as_deref())?;
        let log = load_trips_in(&mut pool, bounds)?;

        if log.is_empty() {
            info("No trips found.");
            return Ok(());
        }

        print_trips(&log, cfg);
    }
    Ok(())
}

fn print_trips(log: &TripLog, cfg: &Config) {
    let mut table = Table::new(vec![
        Column::right("#"),
        Column::left("date"),
        Column::left("vehicle"),
        Column::right("miles"),
        Column::right("min"),
        Column::right("gross"),
        Column::right("fuel"),
        Column::right("net"),
        Column::right("$/h"),
        Column::left("quality"),
        Column::left("zip"),
    ]);

    for (i, t) in log.iter().enumerate() {
        let quality = if t.quality_overridden() {
            format!("{}*", t.quality())
        } else {
            t.quality().to_string()
        };

        table.add_colored_row(
            vec![
                (i + 1).to_string(),
                t.timestamp().format("%Y-%m-%d %H:%M").to_string(),
                format!("{} {}", t.vehicle_type(), t.engine_type()),
                format!("{:.1}", t.miles_driven()),
                t.trip_minutes().to_string(),
                money(t.total_gross(), &cfg.currency),
                money(t.fuel_cost(), &cfg.currency),
                money(t.net_pay(), &cfg.currency),
                money(t.earnings_per_hour(), &cfg.currency),
                quality,
                t.zip_code().unwrap_or("--").to_string(),
            ],
            vec![
                None,
                None,
                None,
                None,
                None,
                None,
                None,
                Some(color_for_net(t.net_pay())),
                None,
                Some(color_for_quality(t.quality())),
                t.zip_code().is_none().then_some(GREY),
            ],
        );
    }

    println!("{}", table.render(&cfg.separator_char));

    if log.iter().any(|t| t.quality_overridden()) {
        println!("* quality set by hand (differs from the suggested tier)");
    }
}
