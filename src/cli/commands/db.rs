use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::migrate::pending_migrations;
use crate::db::pool::DbPool;
use crate::db::stats;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Db {
        migrate,
        check,
        info: show_info,
    } = cmd
    else {
        return Ok(());
    };

    let mut pool = DbPool::new(&cfg.database)?;

    if *migrate {
        migrate_db(&pool)?;
    }

    if *show_info {
        init_db(&pool.conn)?;
        stats::print_db_info(&mut pool, &cfg.database)?;
    }

    if *check {
        check_db(&pool)?;
    }

    Ok(())
}

fn migrate_db(pool: &DbPool) -> AppResult<()> {
    let applied = init_db(&pool.conn)?;
    if applied.is_empty() {
        info("Schema is up to date.");
        return Ok(());
    }
    for m in &applied {
        info(format!("Migration applied: {} → {}", m.version, m.description));
    }
    success(format!("{} migration(s) applied.", applied.len()));
    Ok(())
}

/// SQLite integrity, schema version and session consistency.
fn check_db(pool: &DbPool) -> AppResult<()> {
    let integrity: String = pool
        .conn
        .query_row("PRAGMA integrity_check;", [], |row| row.get(0))?;
    if integrity == "ok" {
        success("Integrity check passed.");
    } else {
        warning(format!("Integrity check failed: {}", integrity));
    }

    let pending = pending_migrations(&pool.conn)?;
    if !pending.is_empty() {
        // session checks need the schema; run `db --migrate` first
        warning(format!(
            "{} pending migration(s): {}",
            pending.len(),
            pending.join(", ")
        ));
        return Ok(());
    }

    let broken = stats::inconsistent_sessions(&pool.conn)?;
    if broken.is_empty() {
        success("Session check passed.");
    } else {
        warning(format!(
            "{} session(s) with times out of order: ids {}",
            broken.len(),
            broken
                .iter()
                .map(i64::to_string)
                .collect::<Vec<_>>()
                .join(", ")
        ));
    }
    Ok(())
}
