//! In-memory session store keyed by `(person_id, date)`.

use crate::errors::{AppError, AppResult};
use crate::models::session::{NewSession, SessionPatch, WorkSession};
use crate::store::SessionStore;
use chrono::NaiveDate;
use std::collections::HashMap;

#[derive(Debug, Default)]
pub struct MemoryStore {
    rows: HashMap<(i64, NaiveDate), WorkSession>,
    next_id: i64,
    is_offline: bool,
    writes: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulate an outage: every call fails with `StoreUnavailable`.
    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    /// Number of successful create/update calls so far.
    pub fn writes(&self) -> usize {
        self.writes
    }

    fn check_online(&self) -> AppResult<()> {
        if self.is_offline {
            return Err(AppError::StoreUnavailable("memory store offline".into()));
        }
        Ok(())
    }
}

impl SessionStore for MemoryStore {
    fn find_session(&self, person_id: i64, date: NaiveDate) -> AppResult<Option<WorkSession>> {
        self.check_online()?;
        Ok(self.rows.get(&(person_id, date)).cloned())
    }

    fn create_session(&mut self, session: &NewSession) -> AppResult<WorkSession> {
        self.check_online()?;

        let key = (session.person_id, session.date);
        if self.rows.contains_key(&key) {
            return Err(AppError::DuplicateSession {
                person_id: session.person_id,
                date: session.date,
            });
        }

        self.next_id += 1;
        let mut row = WorkSession::blank(session.person_id, session.date);
        row.id = self.next_id;
        row.actual_start = Some(session.actual_start);
        row.created_at = session.created_at.clone();

        self.rows.insert(key, row.clone());
        self.writes += 1;
        Ok(row)
    }

    fn update_session(&mut self, id: i64, patch: &SessionPatch) -> AppResult<WorkSession> {
        self.check_online()?;

        let row = self
            .rows
            .values_mut()
            .find(|s| s.id == id)
            .ok_or(AppError::SessionNotFound(id))?;

        row.apply(patch);
        self.writes += 1;
        Ok(row.clone())
    }

    fn sessions_for_date(&self, date: NaiveDate) -> AppResult<Vec<WorkSession>> {
        self.check_online()?;
        let mut out: Vec<WorkSession> = self
            .rows
            .values()
            .filter(|s| s.date == date)
            .cloned()
            .collect();
        out.sort_by_key(|s| s.person_id);
        Ok(out)
    }
}
