use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::summary::SummaryLogic;
use crate::db::pool::DbPool;
use crate::db::queries::load_trips_in;
use crate::errors::AppResult;
use crate::export::chart::write_chart;
use crate::export::range::parse_optional_range;
use crate::ui::messages::{success, warning};
use crate::utils::path::resolve_output;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Summary {
        period,
        range,
        chart,
    } = cmd
    {
        let mut pool = DbPool::new(&cfg.database)?;
        let bounds = parse_optional_range(range.as_deref())?;
        let log = load_trips_in(&mut pool, bounds)?;

        let buckets = SummaryLogic::print(&log, *period, cfg);

        if let Some(file) = chart {
            if buckets.is_empty() {
                warning("No data to chart.");
                return Ok(());
            }

            let path = resolve_output(file)?;
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            write_chart(&buckets, *period, &cfg.currency, &path)?;
            success(format!("Chart written: {}", path.display()));
        }
    }
    Ok(())
}
