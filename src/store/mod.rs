//! Data-store interface consumed by the session engine.
//!
//! Any tabular store satisfies it as long as `create_session` enforces
//! `(person_id, date)` uniqueness and reports a clash as
//! `AppError::DuplicateSession`.

pub mod memory;

use crate::errors::AppResult;
use crate::models::session::{NewSession, SessionPatch, WorkSession};
use chrono::NaiveDate;

pub trait SessionStore {
    fn find_session(&self, person_id: i64, date: NaiveDate) -> AppResult<Option<WorkSession>>;

    fn create_session(&mut self, session: &NewSession) -> AppResult<WorkSession>;

    fn update_session(&mut self, id: i64, patch: &SessionPatch) -> AppResult<WorkSession>;

    /// Every session recorded on `date`, used by the polling read.
    fn sessions_for_date(&self, date: NaiveDate) -> AppResult<Vec<WorkSession>>;
}
