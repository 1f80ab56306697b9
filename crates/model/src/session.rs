use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{
    errors::ProgressError,
    ids::{BookingId, SessionId},
    slot::{occupies_cell, TimeSlot},
};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionStatus {
    Pending,
    Upcoming,
    InProgress,
    Processing,
    Completed,
    Cancelled,
}

impl SessionStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, SessionStatus::Completed | SessionStatus::Cancelled)
    }

    /// The one terminal state that counts toward progress and earnings.
    pub fn is_realized(&self) -> bool {
        matches!(self, SessionStatus::Completed)
    }

    pub fn can_cancel(&self) -> bool {
        !self.is_terminal()
    }

    pub fn can_complete(&self) -> bool {
        matches!(self, SessionStatus::InProgress | SessionStatus::Processing)
    }

    /// Statuses move forward only: a session never returns to an earlier
    /// stage, and terminal states transition nowhere. Cancellation is allowed
    /// from any non-terminal stage.
    pub fn can_transition_to(&self, next: SessionStatus) -> bool {
        if self.is_terminal() {
            return false;
        }
        if next == SessionStatus::Cancelled {
            return true;
        }
        next.rank() > self.rank()
    }

    fn rank(&self) -> u8 {
        match self {
            SessionStatus::Pending => 0,
            SessionStatus::Upcoming => 1,
            SessionStatus::InProgress => 2,
            SessionStatus::Processing => 3,
            SessionStatus::Completed => 4,
            SessionStatus::Cancelled => 5,
        }
    }
}

/// One concrete, dated occurrence of a class within a booking. Records are
/// never deleted; a session that falls through is cancelled and kept.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct SessionRecord {
    pub id: SessionId,
    pub booking: BookingId,
    pub date: NaiveDate,
    pub slot: TimeSlot,
    status: SessionStatus,
}

impl SessionRecord {
    pub fn new(id: SessionId, booking: BookingId, date: NaiveDate, slot: TimeSlot) -> SessionRecord {
        SessionRecord {
            id,
            booking,
            date,
            slot,
            status: SessionStatus::Upcoming,
        }
    }

    pub fn with_status(
        id: SessionId,
        booking: BookingId,
        date: NaiveDate,
        slot: TimeSlot,
        status: SessionStatus,
    ) -> SessionRecord {
        SessionRecord {
            id,
            booking,
            date,
            slot,
            status,
        }
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    /// Does this session occupy the calendar cell at (`date`, `start`)?
    pub fn occupies(&self, date: NaiveDate, start: &str) -> bool {
        occupies_cell(self.date, &self.slot, date, start)
    }

    pub fn transition(&mut self, next: SessionStatus) -> Result<(), ProgressError> {
        if !self.status.can_transition_to(next) {
            return Err(ProgressError::InvalidTransition {
                from: self.status,
                to: next,
            });
        }
        self.status = next;
        Ok(())
    }
}
