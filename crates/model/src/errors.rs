use chrono::NaiveDate;
use thiserror::Error;

use crate::session::SessionStatus;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("Invalid date range: {start} is after {end}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },
    #[error("Invalid weekday index: {0}, expected 0..=6 (Monday = 0)")]
    InvalidWeekday(u8),
    #[error("Schedule entry for {date} is filed under weekday index {index}")]
    WeekdayMismatch { date: NaiveDate, index: u8 },
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ProgressError {
    #[error("Invalid contract: {session_count} sessions recorded against a contract of {total_sessions}")]
    InvalidContract {
        total_sessions: u32,
        session_count: usize,
    },
    #[error("Invalid status transition: {from:?} -> {to:?}")]
    InvalidTransition {
        from: SessionStatus,
        to: SessionStatus,
    },
}
