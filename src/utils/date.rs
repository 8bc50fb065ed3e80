use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// `--date YYYY-MM-DD` if given, otherwise today.
pub fn resolve_date(date: Option<&String>) -> AppResult<NaiveDate> {
    match date {
        Some(s) => parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string())),
        None => Ok(today()),
    }
}

pub fn to_db(d: NaiveDate) -> String {
    d.format("%Y-%m-%d").to_string()
}
