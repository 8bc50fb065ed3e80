use crate::db::migrate::{AppliedMigration, run_pending_migrations};
use crate::errors::AppResult;
use rusqlite::Connection;

/// Initialize the database.
/// All schema creation goes through the migration runner; the applied
/// migrations are returned for the caller to report.
pub fn init_db(conn: &Connection) -> AppResult<Vec<AppliedMigration>> {
    run_pending_migrations(conn)
}
