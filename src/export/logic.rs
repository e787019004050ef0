// src/export/logic.rs

use crate::db::log::ttlog_lenient;
use crate::db::pool::DbPool;
use crate::db::queries::load_trips_in;
use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::TripExport;
use crate::export::range::parse_optional_range;
use crate::export::xlsx::export_xlsx;
use crate::models::trip_log::TripLog;
use crate::ui::messages::warning;
use crate::utils::date::today;
use crate::utils::path::resolve_output;
use std::path::{Path, PathBuf};

/// High-level export driver.
pub struct ExportLogic;

impl ExportLogic {
    /// Export the trip log.
    ///
    /// - `format`: csv | json | xlsx
    /// - `file`: output path; `None` → `spark_trips_YYYYMMDD.<ext>` in the
    ///   current directory. Relative paths are resolved against it.
    /// - `range`: `None`, `"all"` or YYYY / YYYY-MM / YYYY-MM-DD, optionally
    ///   as `start:end`.
    ///
    /// Returns the written path, or `None` when nothing matched.
    pub fn export(
        pool: &mut DbPool,
        format: ExportFormat,
        file: Option<&str>,
        range: Option<&str>,
        force: bool,
    ) -> AppResult<Option<PathBuf>> {
        let path = match file {
            Some(f) => resolve_output(f)?,
            None => resolve_output(&default_file_name(&format))?,
        };

        let bounds = parse_optional_range(range)?;
        let log = load_trips_in(pool, bounds)?;

        if log.is_empty() {
            warning("No trips found for selected range.");
            return Ok(None);
        }

        ensure_writable(&path, force)?;
        Self::write(&log, format.clone(), &path)?;

        ttlog_lenient(
            &pool.conn,
            "export",
            &path.to_string_lossy(),
            &format!("Exported {} trips as {}", log.len(), format.as_str()),
        );

        Ok(Some(path))
    }

    /// Serialize a log snapshot to `path` in the given format.
    pub fn write(log: &TripLog, format: ExportFormat, path: &Path) -> AppResult<()> {
        let rows: Vec<TripExport> = log.iter().map(TripExport::from).collect();

        match format {
            ExportFormat::Csv => export_csv(&rows, path),
            ExportFormat::Json => export_json(&rows, path),
            ExportFormat::Xlsx => export_xlsx(&rows, path),
        }
    }
}

pub fn default_file_name(format: &ExportFormat) -> String {
    format!(
        "spark_trips_{}.{}",
        today().format("%Y%m%d"),
        format.as_str()
    )
}
