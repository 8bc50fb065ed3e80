//! Duration arithmetic on wall-clock times of an implicit reference date.

use chrono::NaiveTime;

/// Whole minutes from `start` to `end`, seconds discarded. Negative when
/// `end` is earlier than `start`.
pub fn minutes_between(start: NaiveTime, end: NaiveTime) -> i64 {
    (end - start).num_minutes()
}

/// Hours between two times, rounded to two decimals.
pub fn hours_between(start: NaiveTime, end: NaiveTime) -> f64 {
    let secs = (end - start).num_seconds() as f64;
    (secs / 3600.0 * 100.0).round() / 100.0
}

/// Elapsed minutes since `start`, never negative.
pub fn elapsed_minutes(start: NaiveTime, now: NaiveTime) -> i64 {
    minutes_between(start, now).max(0)
}

/// `"2h 5m"` from one hour upwards, `"45m"` below.
pub fn format_elapsed(mins: i64) -> String {
    let m = mins.max(0);
    let hours = m / 60;
    let minutes = m % 60;

    if hours >= 1 {
        format!("{}h {}m", hours, minutes)
    } else {
        format!("{}m", minutes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(h: u32, m: u32, s: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, s).unwrap()
    }

    #[test]
    fn formats_hours_and_minutes() {
        assert_eq!(format_elapsed(125), "2h 5m");
        assert_eq!(format_elapsed(60), "1h 0m");
        assert_eq!(format_elapsed(45), "45m");
        assert_eq!(format_elapsed(0), "0m");
    }

    #[test]
    fn negative_elapsed_is_clamped() {
        assert_eq!(format_elapsed(-10), "0m");
        assert_eq!(elapsed_minutes(t(10, 0, 0), t(9, 0, 0)), 0);
    }

    #[test]
    fn seconds_are_discarded() {
        assert_eq!(minutes_between(t(9, 0, 0), t(9, 44, 59)), 44);
        assert_eq!(elapsed_minutes(t(9, 0, 30), t(11, 5, 10)), 124);
    }

    #[test]
    fn hours_are_fractional() {
        assert_eq!(hours_between(t(9, 0, 0), t(17, 30, 0)), 8.5);
        assert_eq!(hours_between(t(9, 0, 0), t(9, 20, 0)), 0.33);
    }
}
