//! Write side of the attendance engine: the four session transitions.
//!
//! Every action reads the current session, validates the transition and then
//! performs exactly one write against the store. A failed action never writes.

use crate::core::duration::{hours_between, minutes_between};
use crate::core::status::derive_status;
use crate::errors::{AppError, AppResult};
use crate::models::session::{NewSession, SessionPatch, WorkSession};
use crate::store::SessionStore;
use chrono::{NaiveDate, NaiveTime};

pub struct SessionLogic;

impl SessionLogic {
    /// Open the day's session for `person_id` at `at`.
    pub fn check_in<S: SessionStore>(
        store: &mut S,
        person_id: i64,
        date: NaiveDate,
        at: NaiveTime,
    ) -> AppResult<WorkSession> {
        if store.find_session(person_id, date)?.is_some() {
            return Err(AppError::DuplicateSession { person_id, date });
        }

        store.create_session(&NewSession::new(person_id, date, at))
    }

    /// Close the day's session and persist the worked hours.
    pub fn check_out<S: SessionStore>(
        store: &mut S,
        person_id: i64,
        date: NaiveDate,
        at: NaiveTime,
    ) -> AppResult<WorkSession> {
        let session = load_open(store, person_id, date)?;
        let start = started_at(&session)?;

        let latest = [session.lunch_start, session.lunch_end]
            .into_iter()
            .flatten()
            .fold(start, |acc, t| acc.max(t));
        ensure_not_before("check-out", at, latest)?;

        let patch = SessionPatch {
            actual_end: Some(at),
            actual_hours: Some(hours_between(start, at)),
            ..SessionPatch::default()
        };
        store.update_session(session.id, &patch)
    }

    pub fn lunch_start<S: SessionStore>(
        store: &mut S,
        person_id: i64,
        date: NaiveDate,
        at: NaiveTime,
    ) -> AppResult<WorkSession> {
        let session = load_open(store, person_id, date)?;
        let start = started_at(&session)?;

        if session.lunch_end.is_some() {
            return Err(AppError::LunchAlreadyTaken { person_id, date });
        }
        if let Some(since) = session.lunch_start {
            return Err(AppError::LunchInProgress { person_id, since });
        }
        ensure_not_before("lunch start", at, start)?;

        let patch = SessionPatch {
            lunch_start: Some(at),
            ..SessionPatch::default()
        };
        store.update_session(session.id, &patch)
    }

    pub fn lunch_end<S: SessionStore>(
        store: &mut S,
        person_id: i64,
        date: NaiveDate,
        at: NaiveTime,
    ) -> AppResult<WorkSession> {
        let session = load_open(store, person_id, date)?;

        let lunch_start = session
            .lunch_start
            .ok_or(AppError::LunchNotStarted { person_id, date })?;
        if session.lunch_end.is_some() {
            return Err(AppError::LunchAlreadyTaken { person_id, date });
        }
        ensure_not_before("lunch end", at, lunch_start)?;

        let patch = SessionPatch {
            lunch_end: Some(at),
            lunch_duration_minutes: Some(minutes_between(lunch_start, at)),
            ..SessionPatch::default()
        };
        store.update_session(session.id, &patch)
    }
}

/// Load the session and reject missing or completed ones.
fn load_open<S: SessionStore>(
    store: &S,
    person_id: i64,
    date: NaiveDate,
) -> AppResult<WorkSession> {
    let session = store
        .find_session(person_id, date)?
        .ok_or(AppError::SessionNotStarted { person_id, date })?;

    if derive_status(&session).is_terminal() {
        return Err(AppError::SessionCompleted { person_id, date });
    }
    Ok(session)
}

fn started_at(session: &WorkSession) -> AppResult<NaiveTime> {
    session.actual_start.ok_or(AppError::SessionNotStarted {
        person_id: session.person_id,
        date: session.date,
    })
}

fn ensure_not_before(field: &'static str, time: NaiveTime, previous: NaiveTime) -> AppResult<()> {
    if time < previous {
        return Err(AppError::TimeOutOfOrder {
            field,
            time,
            previous,
        });
    }
    Ok(())
}
