pub mod config;
pub mod db;
pub mod init;
pub mod log;
pub mod person;
pub mod session;
pub mod status;
pub mod watch;

use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

/// Open the configured database with the schema up to date.
///
/// A missing file is created and migrated. Nothing is printed, so commands
/// with machine-readable output keep stdout clean.
pub(crate) fn open_pool(cfg: &Config) -> AppResult<DbPool> {
    let pool = DbPool::new(&cfg.database)?;
    init_db(&pool.conn)?;
    Ok(pool)
}
