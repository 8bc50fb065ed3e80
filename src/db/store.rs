//! `SessionStore` backed by the SQLite `work_sessions` table.

use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppResult;
use crate::models::session::{NewSession, SessionPatch, WorkSession};
use crate::store::SessionStore;
use chrono::NaiveDate;

impl SessionStore for DbPool {
    fn find_session(&self, person_id: i64, date: NaiveDate) -> AppResult<Option<WorkSession>> {
        queries::find_session(&self.conn, person_id, date)
    }

    fn create_session(&mut self, session: &NewSession) -> AppResult<WorkSession> {
        let id = queries::insert_session(&self.conn, session)?;
        queries::load_session(&self.conn, id)
    }

    fn update_session(&mut self, id: i64, patch: &SessionPatch) -> AppResult<WorkSession> {
        queries::update_session(&self.conn, id, patch)?;
        queries::load_session(&self.conn, id)
    }

    fn sessions_for_date(&self, date: NaiveDate) -> AppResult<Vec<WorkSession>> {
        queries::load_sessions_by_date(&self.conn, date)
    }
}
