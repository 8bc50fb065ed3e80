//! Unified application error type.
//! All modules (db, store, core, cli) return AppError so that every failure
//! reaches the user as a single readable message.

use chrono::{NaiveDate, NaiveTime};
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Store-related
    // ---------------------------
    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Migration failed: {0}")]
    Migration(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Invalid person: {0}")]
    InvalidPerson(String),

    // ---------------------------
    // Session transitions
    // ---------------------------
    #[error("Person {person_id} already checked in on {date}")]
    DuplicateSession { person_id: i64, date: NaiveDate },

    #[error("Person {person_id} has not checked in on {date}")]
    SessionNotStarted { person_id: i64, date: NaiveDate },

    #[error("Session of person {person_id} on {date} is already completed")]
    SessionCompleted { person_id: i64, date: NaiveDate },

    #[error("Lunch has not been started for person {person_id} on {date}")]
    LunchNotStarted { person_id: i64, date: NaiveDate },

    #[error("Person {person_id} is already on lunch since {since}")]
    LunchInProgress { person_id: i64, since: NaiveTime },

    #[error("Lunch already taken by person {person_id} on {date}")]
    LunchAlreadyTaken { person_id: i64, date: NaiveDate },

    #[error("{field} at {time} is earlier than {previous}")]
    TimeOutOfOrder {
        field: &'static str,
        time: NaiveTime,
        previous: NaiveTime,
    },

    #[error("Session {0} not found")]
    SessionNotFound(i64),

    #[error("Person not found: {0}")]
    PersonNotFound(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<rusqlite::Error> for AppError {
    fn from(e: rusqlite::Error) -> Self {
        AppError::StoreUnavailable(e.to_string())
    }
}

impl From<serde_yaml::Error> for AppError {
    fn from(e: serde_yaml::Error) -> Self {
        AppError::Config(e.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
