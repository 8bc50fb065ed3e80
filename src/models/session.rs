use chrono::{Local, NaiveDate, NaiveTime};
use serde::Serialize;

/// One day's attendance record for one person.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkSession {
    pub id: i64,
    pub person_id: i64,                      // ⇔ work_sessions.person_id
    pub date: NaiveDate,                     // ⇔ work_sessions.date (TEXT "YYYY-MM-DD")
    pub actual_start: Option<NaiveTime>,     // ⇔ work_sessions.actual_start (TEXT "HH:MM:SS")
    pub actual_end: Option<NaiveTime>,       // ⇔ work_sessions.actual_end
    pub lunch_start: Option<NaiveTime>,      // ⇔ work_sessions.lunch_start
    pub lunch_end: Option<NaiveTime>,        // ⇔ work_sessions.lunch_end
    pub lunch_duration_minutes: Option<i64>, // ⇔ work_sessions.lunch_duration_minutes
    pub actual_hours: Option<f64>,           // ⇔ work_sessions.actual_hours (REAL)
    pub created_at: String,                  // ⇔ work_sessions.created_at (ISO8601)
}

impl WorkSession {
    /// Empty record for a (person, date) pair that has no stored session yet.
    pub fn blank(person_id: i64, date: NaiveDate) -> Self {
        Self {
            id: 0,
            person_id,
            date,
            actual_start: None,
            actual_end: None,
            lunch_start: None,
            lunch_end: None,
            lunch_duration_minutes: None,
            actual_hours: None,
            created_at: String::new(),
        }
    }

    /// Apply a patch in place; absent patch fields leave the record untouched.
    pub fn apply(&mut self, patch: &SessionPatch) {
        if let Some(t) = patch.actual_end {
            self.actual_end = Some(t);
        }
        if let Some(h) = patch.actual_hours {
            self.actual_hours = Some(h);
        }
        if let Some(t) = patch.lunch_start {
            self.lunch_start = Some(t);
        }
        if let Some(t) = patch.lunch_end {
            self.lunch_end = Some(t);
        }
        if let Some(m) = patch.lunch_duration_minutes {
            self.lunch_duration_minutes = Some(m);
        }
    }
}

/// What a check-in writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSession {
    pub person_id: i64,
    pub date: NaiveDate,
    pub actual_start: NaiveTime,
    pub created_at: String,
}

impl NewSession {
    pub fn new(person_id: i64, date: NaiveDate, actual_start: NaiveTime) -> Self {
        Self {
            person_id,
            date,
            actual_start,
            created_at: Local::now().to_rfc3339(),
        }
    }
}

/// Partial update written by check-out and the lunch actions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionPatch {
    pub actual_end: Option<NaiveTime>,
    pub actual_hours: Option<f64>,
    pub lunch_start: Option<NaiveTime>,
    pub lunch_end: Option<NaiveTime>,
    pub lunch_duration_minutes: Option<i64>,
}
