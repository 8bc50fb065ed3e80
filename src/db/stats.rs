use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::{Connection, OptionalExtension};
use std::fs;

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    //
    // 2) COUNTS
    //
    let people: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM people", [], |row| row.get(0))?;
    let sessions: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM work_sessions", [], |row| row.get(0))?;
    let open: i64 = pool.conn.query_row(
        "SELECT COUNT(*) FROM work_sessions WHERE actual_start IS NOT NULL AND actual_end IS NULL",
        [],
        |row| row.get(0),
    )?;

    println!("{}• People:{} {}{}{}", CYAN, RESET, GREEN, people, RESET);
    println!("{}• Sessions:{} {}{}{}", CYAN, RESET, GREEN, sessions, RESET);
    println!("{}• Open sessions:{} {}", CYAN, RESET, open);

    //
    // 3) DATE RANGE
    //
    let first_date: Option<String> = pool
        .conn
        .query_row("SELECT MIN(date) FROM work_sessions", [], |row| {
            row.get::<_, Option<String>>(0)
        })
        .optional()?
        .flatten();
    let last_date: Option<String> = pool
        .conn
        .query_row("SELECT MAX(date) FROM work_sessions", [], |row| {
            row.get::<_, Option<String>>(0)
        })
        .optional()?
        .flatten();

    println!("{}• Date range:{}", CYAN, RESET);
    println!(
        "    from: {}",
        first_date.unwrap_or_else(|| format!("{GREY}--{RESET}"))
    );
    println!(
        "    to:   {}",
        last_date.unwrap_or_else(|| format!("{GREY}--{RESET}"))
    );

    println!();
    Ok(())
}

/// Ids of sessions whose recorded times contradict the session lifecycle:
/// an end without a start, a lunch end without a lunch start, or any time
/// earlier than the one recorded before it.
pub fn inconsistent_sessions(conn: &Connection) -> AppResult<Vec<i64>> {
    let mut stmt = conn.prepare(
        "SELECT id FROM work_sessions
         WHERE (actual_start IS NULL AND (actual_end IS NOT NULL OR lunch_start IS NOT NULL))
            OR (lunch_end IS NOT NULL AND lunch_start IS NULL)
            OR (lunch_start < actual_start)
            OR (lunch_end < lunch_start)
            OR (actual_end < actual_start)
            OR (actual_end < lunch_end)
         ORDER BY id",
    )?;
    let ids = stmt
        .query_map([], |row| row.get(0))?
        .collect::<Result<Vec<i64>, _>>()?;
    Ok(ids)
}
