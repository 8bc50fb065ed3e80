use crate::errors::{AppError, AppResult};
use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists. Applied migrations are recorded there.
fn ensure_log_table(conn: &Connection) -> Result<()> {
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

const MIGRATIONS: &[Migration] = &[
    Migration {
        version: "20250301_0001_create_people",
        description: "Created people table",
        sql: r#"
        CREATE TABLE IF NOT EXISTS people (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            name        TEXT NOT NULL UNIQUE,
            created_at  TEXT NOT NULL
        );
        "#,
    },
    Migration {
        version: "20250301_0002_create_work_sessions",
        description: "Created work_sessions table",
        sql: r#"
        CREATE TABLE IF NOT EXISTS work_sessions (
            id                      INTEGER PRIMARY KEY AUTOINCREMENT,
            person_id               INTEGER NOT NULL REFERENCES people(id),
            date                    TEXT NOT NULL,
            actual_start            TEXT,
            actual_end              TEXT,
            lunch_start             TEXT,
            lunch_end               TEXT,
            lunch_duration_minutes  INTEGER,
            actual_hours            REAL,
            created_at              TEXT NOT NULL,
            UNIQUE(person_id, date)
        );
        "#,
    },
    Migration {
        version: "20250315_0003_work_sessions_date_index",
        description: "Added date index on work_sessions",
        sql: r#"
        CREATE INDEX IF NOT EXISTS idx_work_sessions_date ON work_sessions(date);
        "#,
    },
];

fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn apply(conn: &Connection, m: &Migration) -> Result<()> {
    conn.execute_batch(m.sql)?;

    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [m.version, m.description],
    )?;
    Ok(())
}

/// A migration applied by the current run.
#[derive(Debug, Clone, PartialEq)]
pub struct AppliedMigration {
    pub version: &'static str,
    pub description: &'static str,
}

/// Run all pending migrations, oldest first, without printing anything.
/// Callers that talk to the user report the returned list themselves.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<Vec<AppliedMigration>> {
    run_migrations(conn, MIGRATIONS)
}

/// Versions not yet recorded in the `log` table.
pub fn pending_migrations(conn: &Connection) -> AppResult<Vec<&'static str>> {
    ensure_log_table(conn).map_err(|e| AppError::Migration(e.to_string()))?;

    let mut pending = Vec::new();
    for m in MIGRATIONS {
        if !is_applied(conn, m.version)? {
            pending.push(m.version);
        }
    }
    Ok(pending)
}

fn run_migrations(conn: &Connection, migrations: &[Migration]) -> AppResult<Vec<AppliedMigration>> {
    ensure_log_table(conn).map_err(|e| AppError::Migration(format!("log table: {e}")))?;

    let mut applied = Vec::new();
    for m in migrations {
        if is_applied(conn, m.version)? {
            continue;
        }
        apply(conn, m).map_err(|e| AppError::Migration(format!("{}: {}", m.version, e)))?;
        applied.push(AppliedMigration {
            version: m.version,
            description: m.description,
        });
    }

    Ok(applied)
}
