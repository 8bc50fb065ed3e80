use super::status::SessionStatus;
use chrono::NaiveDate;
use serde::Serialize;

/// One row of the status board, as handed to the display layer.
#[derive(Debug, Clone, Serialize)]
pub struct SessionView {
    pub person_id: i64,
    pub person_name: String,
    pub date: NaiveDate,
    pub status: SessionStatus,
    pub status_label: String,
    pub elapsed: String,
    pub lunch_info: String,
    pub start: Option<String>,
    pub end: Option<String>,
}
