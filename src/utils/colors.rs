//! ANSI color helper utilities for terminal output.
use crate::models::status::SessionStatus;

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// NOT_STARTED → grey, WORKING → green, ON_LUNCH → yellow, COMPLETED → cyan
pub fn color_for_status(status: SessionStatus) -> &'static str {
    match status {
        SessionStatus::NotStarted => GREY,
        SessionStatus::Working => GREEN,
        SessionStatus::OnLunch => YELLOW,
        SessionStatus::Completed => CYAN,
    }
}
