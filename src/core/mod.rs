pub mod board;
pub mod duration;
pub mod log;
pub mod schedule;
pub mod session;
pub mod status;
