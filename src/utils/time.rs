//! Time utilities: parsing HH:MM, now/at resolution, DB encoding.

use crate::errors::{AppError, AppResult};
use chrono::{Local, NaiveTime, Timelike};

pub const DB_TIME_FORMAT: &str = "%H:%M:%S";

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(t, "%H:%M"))
        .ok()
}

pub fn parse_optional_time(input: Option<&String>) -> AppResult<Option<NaiveTime>> {
    if let Some(s) = input {
        let t = parse_time(s).ok_or_else(|| AppError::InvalidTime(s.to_string()))?;
        Ok(Some(t))
    } else {
        Ok(None)
    }
}

/// Current local wall-clock time, truncated to the second.
pub fn now() -> NaiveTime {
    let t = Local::now().time();
    t.with_nanosecond(0).unwrap_or(t)
}

/// `--at HH:MM` if given, otherwise the current time.
pub fn resolve_at(at: Option<&String>) -> AppResult<NaiveTime> {
    Ok(parse_optional_time(at)?.unwrap_or_else(now))
}

pub fn to_db(t: NaiveTime) -> String {
    t.format(DB_TIME_FORMAT).to_string()
}

pub fn hhmm(t: NaiveTime) -> String {
    t.format("%H:%M").to_string()
}
