use crate::errors::{AppError, AppResult};
use crate::models::session::{NewSession, SessionPatch, WorkSession};
use crate::utils::{date, time};
use chrono::{NaiveDate, NaiveTime};
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

const SESSION_COLUMNS: &str = "id, person_id, date, actual_start, actual_end, lunch_start, \
                               lunch_end, lunch_duration_minutes, actual_hours, created_at";

fn conversion_error(err: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(err))
}

fn get_time(row: &Row, col: &str) -> Result<Option<NaiveTime>> {
    let raw: Option<String> = row.get(col)?;
    match raw {
        None => Ok(None),
        Some(s) => time::parse_time(&s)
            .map(Some)
            .ok_or_else(|| conversion_error(AppError::InvalidTime(s))),
    }
}

pub fn map_session(row: &Row) -> Result<WorkSession> {
    let date_str: String = row.get("date")?;
    let date = date::parse_date(&date_str)
        .ok_or_else(|| conversion_error(AppError::InvalidDate(date_str.clone())))?;

    Ok(WorkSession {
        id: row.get("id")?,
        person_id: row.get("person_id")?,
        date,
        actual_start: get_time(row, "actual_start")?,
        actual_end: get_time(row, "actual_end")?,
        lunch_start: get_time(row, "lunch_start")?,
        lunch_end: get_time(row, "lunch_end")?,
        lunch_duration_minutes: row.get("lunch_duration_minutes")?,
        actual_hours: row.get("actual_hours")?,
        created_at: row.get("created_at")?,
    })
}

pub fn find_session(conn: &Connection, person_id: i64, date: NaiveDate) -> AppResult<Option<WorkSession>> {
    let sql = format!("SELECT {SESSION_COLUMNS} FROM work_sessions WHERE person_id = ?1 AND date = ?2");
    let mut stmt = conn.prepare_cached(&sql)?;

    let row = stmt
        .query_row(params![person_id, date::to_db(date)], map_session)
        .optional()?;
    Ok(row)
}

pub fn load_session(conn: &Connection, id: i64) -> AppResult<WorkSession> {
    let sql = format!("SELECT {SESSION_COLUMNS} FROM work_sessions WHERE id = ?1");
    let mut stmt = conn.prepare_cached(&sql)?;

    stmt.query_row([id], map_session)
        .optional()?
        .ok_or(AppError::SessionNotFound(id))
}

pub fn load_sessions_by_date(conn: &Connection, date: NaiveDate) -> AppResult<Vec<WorkSession>> {
    let sql = format!("SELECT {SESSION_COLUMNS} FROM work_sessions WHERE date = ?1 ORDER BY person_id ASC");
    let mut stmt = conn.prepare_cached(&sql)?;

    let rows = stmt.query_map([date::to_db(date)], map_session)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Insert a new session. A `(person_id, date)` clash is reported as
/// `DuplicateSession` and an unknown person as `PersonNotFound`.
pub fn insert_session(conn: &Connection, s: &NewSession) -> AppResult<i64> {
    let res = conn.execute(
        "INSERT INTO work_sessions (person_id, date, actual_start, created_at)
         VALUES (?1, ?2, ?3, ?4)",
        params![
            s.person_id,
            date::to_db(s.date),
            time::to_db(s.actual_start),
            s.created_at,
        ],
    );

    match res {
        Ok(_) => Ok(conn.last_insert_rowid()),
        Err(rusqlite::Error::SqliteFailure(e, _))
            if e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE =>
        {
            Err(AppError::DuplicateSession {
                person_id: s.person_id,
                date: s.date,
            })
        }
        Err(rusqlite::Error::SqliteFailure(e, _))
            if e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_FOREIGNKEY =>
        {
            Err(AppError::PersonNotFound(s.person_id.to_string()))
        }
        Err(e) => Err(e.into()),
    }
}

/// Write only the fields present in the patch.
pub fn update_session(conn: &Connection, id: i64, patch: &SessionPatch) -> AppResult<()> {
    let changed = conn.execute(
        "UPDATE work_sessions
         SET actual_end             = COALESCE(?1, actual_end),
             actual_hours           = COALESCE(?2, actual_hours),
             lunch_start            = COALESCE(?3, lunch_start),
             lunch_end              = COALESCE(?4, lunch_end),
             lunch_duration_minutes = COALESCE(?5, lunch_duration_minutes)
         WHERE id = ?6",
        params![
            patch.actual_end.map(time::to_db),
            patch.actual_hours,
            patch.lunch_start.map(time::to_db),
            patch.lunch_end.map(time::to_db),
            patch.lunch_duration_minutes,
            id,
        ],
    )?;

    if changed == 0 {
        return Err(AppError::SessionNotFound(id));
    }
    Ok(())
}
