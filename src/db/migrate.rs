use crate::errors::{AppError, AppResult};
use rusqlite::{Connection, OptionalExtension};

/// Ensure that the `log` table exists. Migrations record themselves in it,
/// so it has to be created before anything else.
fn ensure_log_table(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

struct Migration {
    version: &'static str,
    description: &'static str,
    sql: &'static str,
}

/// Ordered schema history. Never edit an entry once released; append a new one.
const MIGRATIONS: &[Migration] = &[
    Migration {
        version: "20250601_0001_create_trips",
        description: "Created trips table",
        sql: r#"
        CREATE TABLE IF NOT EXISTS trips (
            id                INTEGER PRIMARY KEY AUTOINCREMENT,
            timestamp         TEXT NOT NULL,
            vehicle_type      TEXT NOT NULL CHECK(vehicle_type IN ('Sedan','SUV','Pickup','Van')),
            engine_type       TEXT NOT NULL CHECK(engine_type IN ('4-cylinder','6-cylinder','8-cylinder')),
            fuel_type         TEXT NOT NULL CHECK(fuel_type IN ('Gas','Hybrid','Electric')),
            mpg               REAL NOT NULL,
            fuel_price        REAL NOT NULL,
            miles_driven      REAL NOT NULL DEFAULT 0,
            stops             INTEGER NOT NULL DEFAULT 1,
            shopping          INTEGER NOT NULL DEFAULT 0,
            shopping_items    INTEGER NOT NULL DEFAULT 0,
            shopping_minutes  INTEGER NOT NULL DEFAULT 0,
            trip_minutes      INTEGER NOT NULL,
            gross_pay         REAL NOT NULL DEFAULT 0,
            tips              REAL NOT NULL DEFAULT 0,
            quality_override  TEXT,
            created_at        TEXT NOT NULL
        );
        "#,
    },
    Migration {
        version: "20250601_0002_trips_timestamp_index",
        description: "Added trips timestamp index",
        sql: "CREATE INDEX IF NOT EXISTS idx_trips_timestamp ON trips(timestamp);",
    },
    Migration {
        version: "20250714_0003_add_zip_code",
        description: "Added zip_code column to trips",
        sql: "ALTER TABLE trips ADD COLUMN zip_code TEXT;",
    },
];

fn is_applied(conn: &Connection, version: &str) -> AppResult<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

/// Public entry point: run all pending migrations.
///
/// Returns the descriptions of the migrations applied by this call, so the
/// caller decides whether to print them.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<Vec<&'static str>> {
    ensure_log_table(conn)?;

    let mut applied = Vec::new();

    for m in MIGRATIONS {
        if is_applied(conn, m.version)? {
            continue;
        }

        let tx = conn.unchecked_transaction()?;
        tx.execute_batch(m.sql)
            .map_err(|e| AppError::Schema(format!("{}: {}", m.version, e)))?;
        tx.execute(
            "INSERT INTO log (date, operation, target, message)
             VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
            [m.version, m.description],
        )?;
        tx.commit()?;

        applied.push(m.description);
    }

    Ok(applied)
}
