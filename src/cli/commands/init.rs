use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::log::ttlog_lenient;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use rusqlite::Connection;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped with `--test`)
///  - the SQLite database and every pending migration
pub fn handle(cli: &Cli) -> AppResult<()> {
    //
    // 1. Configuration
    //
    let db_path = Config::init_all(cli.db.as_deref(), cli.test)?;
    let db_path = db_path.to_string_lossy().to_string();

    println!("⚙️  Initializing sparktracker…");
    if !cli.test {
        println!("📄 Config file : {}", Config::config_file().display());
    }
    println!("🗄️  Database   : {}", &db_path);

    //
    // 2. Schema + migrations
    //
    let conn = Connection::open(&db_path)?;
    let applied = init_db(&conn)?;

    for migration in &applied {
        info(format!("Migration applied: {migration}"));
    }

    success(format!("Database initialized at {}", &db_path));

    ttlog_lenient(
        &conn,
        "init",
        &db_path,
        &format!("Database initialized ({} migrations applied)", applied.len()),
    );

    Ok(())
}
