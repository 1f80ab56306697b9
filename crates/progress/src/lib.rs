use serde::{Deserialize, Serialize};

use model::{
    amount::Amount,
    contract::BookingContract,
    errors::ProgressError,
    session::{SessionRecord, SessionStatus},
};

/// Per-status counts over a session list. Dashboards read these instead of
/// re-deriving "is this session done" from raw status comparisons.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusBreakdown {
    pub pending: u32,
    pub upcoming: u32,
    pub in_progress: u32,
    pub processing: u32,
    pub completed: u32,
    pub cancelled: u32,
}

impl StatusBreakdown {
    pub fn new<'s>(sessions: impl Iterator<Item = &'s SessionRecord>) -> StatusBreakdown {
        sessions.fold(StatusBreakdown::default(), |mut acc, session| {
            match session.status() {
                SessionStatus::Pending => acc.pending += 1,
                SessionStatus::Upcoming => acc.upcoming += 1,
                SessionStatus::InProgress => acc.in_progress += 1,
                SessionStatus::Processing => acc.processing += 1,
                SessionStatus::Completed => acc.completed += 1,
                SessionStatus::Cancelled => acc.cancelled += 1,
            }
            acc
        })
    }

    /// Sessions that are neither realized nor written off.
    pub fn open(&self) -> u32 {
        self.pending + self.upcoming + self.in_progress + self.processing
    }

    pub fn total(&self) -> u32 {
        self.open() + self.completed + self.cancelled
    }
}

/// Completion and accrual figures for one booking, consumed directly for
/// display.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct ProgressSummary {
    pub completed: u32,
    pub remaining: u32,
    pub percent: u8,
    pub amount_earned: Amount,
    pub amount_remaining: Amount,
}

impl ProgressSummary {
    fn zero() -> ProgressSummary {
        ProgressSummary {
            completed: 0,
            remaining: 0,
            percent: 0,
            amount_earned: Amount::zero(),
            amount_remaining: Amount::zero(),
        }
    }
}

/// Summarizes a booking's session list against its contract.
///
/// Only `Completed` sessions count as realized. Cancelled sessions are
/// terminal but non-productive: excluded from both completed and remaining.
/// The per-session rate is the even division of the contracted total, so
/// `amount_earned + amount_remaining` equals `total_amount` exactly; the
/// remainder of the division is absorbed into `amount_remaining`.
pub fn summarize(
    sessions: &[SessionRecord],
    contract: &BookingContract,
) -> Result<ProgressSummary, ProgressError> {
    if contract.total_sessions == 0 {
        if sessions.is_empty() {
            return Ok(ProgressSummary::zero());
        }
        // sessions recorded against a contract that declares none of them
        return Err(ProgressError::InvalidContract {
            total_sessions: contract.total_sessions,
            session_count: sessions.len(),
        });
    }

    let breakdown = StatusBreakdown::new(sessions.iter());
    let completed = breakdown.completed;
    let total = contract.total_sessions;

    let percent = percent_of(completed, total);
    let amount_earned = (contract.unit_amount() * completed).min(contract.total_amount);
    let amount_remaining = contract.total_amount - amount_earned;

    if completed > total {
        log::warn!(
            "booking over-completed: {} sessions against a contract of {}",
            completed,
            total
        );
    }

    Ok(ProgressSummary {
        completed,
        remaining: total.saturating_sub(completed),
        percent,
        amount_earned,
        amount_remaining,
    })
}

/// Half-up rounded completion percentage, clamped to 0..=100.
fn percent_of(completed: u32, total: u32) -> u8 {
    let raw = (completed as u64 * 100 + total as u64 / 2) / total as u64;
    raw.min(100) as u8
}
