use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::session::Session;
use crate::errors::AppResult;
use crate::export::fs_utils::ask_confirmation;
use crate::ui::messages::{info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Clear { force } = cmd {
        let mut session = Session::open(&cfg.database)?;

        if session.log().is_empty() {
            info("No trips to clear.");
            return Ok(());
        }

        let count = session.log().len();
        if !*force && !ask_confirmation(&format!("Delete ALL {count} recorded trips?")) {
            info("Clear cancelled.");
            return Ok(());
        }

        let removed = session.clear()?;
        success(format!("Cleared {removed} trips."));
    }
    Ok(())
}
