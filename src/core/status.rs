//! Status derivation: a pure function of the session fields.

use crate::core::duration::{elapsed_minutes, format_elapsed, minutes_between};
use crate::models::session::WorkSession;
use crate::models::status::SessionStatus;
use crate::utils::time::hhmm;
use chrono::NaiveTime;

pub fn derive_status(session: &WorkSession) -> SessionStatus {
    if session.actual_start.is_none() {
        return SessionStatus::NotStarted;
    }
    if session.actual_end.is_some() {
        return SessionStatus::Completed;
    }
    if session.lunch_start.is_some() && session.lunch_end.is_none() {
        return SessionStatus::OnLunch;
    }
    SessionStatus::Working
}

/// Minutes to display for a session at `now`.
///
/// Open sessions count up to `now`; completed ones show their full span.
pub fn elapsed_for(session: &WorkSession, now: NaiveTime) -> i64 {
    match (session.actual_start, session.actual_end) {
        (None, _) => 0,
        (Some(start), Some(end)) => minutes_between(start, end).max(0),
        (Some(start), None) => elapsed_minutes(start, now),
    }
}

pub fn elapsed_label(session: &WorkSession, now: NaiveTime) -> String {
    format_elapsed(elapsed_for(session, now))
}

/// Lunch column of the board. A lunch left open at check-out ends with the
/// session and is marked `(open)`.
pub fn lunch_info(session: &WorkSession) -> String {
    match (session.lunch_start, session.lunch_end) {
        (None, _) => "-".to_string(),
        (Some(start), None) => match session.actual_end {
            Some(end) => format!("{}-{} (open)", hhmm(start), hhmm(end)),
            None => format!("since {}", hhmm(start)),
        },
        (Some(start), Some(end)) => {
            let mins = session
                .lunch_duration_minutes
                .unwrap_or_else(|| minutes_between(start, end));
            format!("{}-{} ({}m)", hhmm(start), hhmm(end), mins)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn session() -> WorkSession {
        WorkSession::blank(1, NaiveDate::from_ymd_opt(2025, 3, 10).unwrap())
    }

    #[test]
    fn not_started_iff_no_start() {
        let mut s = session();
        assert_eq!(derive_status(&s), SessionStatus::NotStarted);

        // a stray lunch without a start still reads as not started
        s.lunch_start = Some(t(13, 0));
        assert_eq!(derive_status(&s), SessionStatus::NotStarted);

        s.actual_start = Some(t(9, 0));
        assert_ne!(derive_status(&s), SessionStatus::NotStarted);
    }

    #[test]
    fn open_lunch_wins_over_working() {
        let mut s = session();
        s.actual_start = Some(t(9, 0));
        assert_eq!(derive_status(&s), SessionStatus::Working);

        s.lunch_start = Some(t(13, 0));
        assert_eq!(derive_status(&s), SessionStatus::OnLunch);

        s.lunch_end = Some(t(13, 45));
        assert_eq!(derive_status(&s), SessionStatus::Working);
    }

    #[test]
    fn end_means_completed() {
        let mut s = session();
        s.actual_start = Some(t(9, 0));
        s.lunch_start = Some(t(13, 0));
        s.actual_end = Some(t(17, 0));
        assert_eq!(derive_status(&s), SessionStatus::Completed);
        assert!(derive_status(&s).is_terminal());
    }

    #[test]
    fn elapsed_counts_to_now_or_end() {
        let mut s = session();
        assert_eq!(elapsed_label(&s, t(12, 0)), "0m");

        s.actual_start = Some(t(9, 0));
        assert_eq!(elapsed_label(&s, t(11, 5)), "2h 5m");
        assert_eq!(elapsed_label(&s, t(9, 45)), "45m");

        s.actual_end = Some(t(17, 30));
        assert_eq!(elapsed_label(&s, t(23, 0)), "8h 30m");
    }

    #[test]
    fn lunch_info_variants() {
        let mut s = session();
        assert_eq!(lunch_info(&s), "-");
        s.lunch_start = Some(t(13, 0));
        assert_eq!(lunch_info(&s), "since 13:00");
        s.lunch_end = Some(t(13, 45));
        assert_eq!(lunch_info(&s), "13:00-13:45 (45m)");
    }

    #[test]
    fn lunch_open_at_check_out_is_not_running() {
        let mut s = session();
        s.actual_start = Some(t(9, 0));
        s.lunch_start = Some(t(13, 0));
        s.actual_end = Some(t(14, 0));

        assert_eq!(derive_status(&s), SessionStatus::Completed);
        assert_eq!(lunch_info(&s), "13:00-14:00 (open)");
    }
}
