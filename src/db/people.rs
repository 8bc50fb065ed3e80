use crate::errors::{AppError, AppResult};
use crate::models::person::Person;
use chrono::Local;
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

fn map_person(row: &Row) -> Result<Person> {
    Ok(Person {
        id: row.get("id")?,
        name: row.get("name")?,
        created_at: row.get("created_at")?,
    })
}

pub fn add_person(conn: &Connection, name: &str) -> AppResult<Person> {
    let name = name.trim();
    if name.is_empty() {
        return Err(AppError::InvalidPerson("name must not be empty".into()));
    }
    if name.parse::<i64>().is_ok() {
        return Err(AppError::InvalidPerson(format!(
            "'{}' is numeric and would be read as an id",
            name
        )));
    }

    let res = conn.execute(
        "INSERT INTO people (name, created_at) VALUES (?1, ?2)",
        params![name, Local::now().to_rfc3339()],
    );

    match res {
        Ok(_) => {}
        Err(rusqlite::Error::SqliteFailure(e, _))
            if e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE =>
        {
            return Err(AppError::InvalidPerson(format!("'{}' already exists", name)));
        }
        Err(e) => return Err(e.into()),
    }

    find_person_by_id(conn, conn.last_insert_rowid())?
        .ok_or_else(|| AppError::PersonNotFound(name.to_string()))
}

pub fn list_people(conn: &Connection) -> AppResult<Vec<Person>> {
    let mut stmt = conn.prepare_cached("SELECT id, name, created_at FROM people ORDER BY name ASC")?;
    let rows = stmt.query_map([], map_person)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn find_person_by_id(conn: &Connection, id: i64) -> AppResult<Option<Person>> {
    let mut stmt = conn.prepare_cached("SELECT id, name, created_at FROM people WHERE id = ?1")?;
    Ok(stmt.query_row([id], map_person).optional()?)
}

pub fn find_person_by_name(conn: &Connection, name: &str) -> AppResult<Option<Person>> {
    let mut stmt = conn.prepare_cached("SELECT id, name, created_at FROM people WHERE name = ?1")?;
    Ok(stmt.query_row([name.trim()], map_person).optional()?)
}

/// Resolve a CLI reference: numeric id first, exact name otherwise.
pub fn resolve_person(conn: &Connection, reference: &str) -> AppResult<Person> {
    let found = match reference.trim().parse::<i64>() {
        Ok(id) => find_person_by_id(conn, id)?,
        Err(_) => find_person_by_name(conn, reference)?,
    };

    found.ok_or_else(|| AppError::PersonNotFound(reference.to_string()))
}
