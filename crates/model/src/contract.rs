use serde::{Deserialize, Serialize};

use crate::amount::Amount;

/// The agreed scope of a booking: how many sessions, for how much in total.
///
/// `total_amount` is the authoritative figure. The per-session rate is always
/// derived by even division of the total, never stored independently, so that
/// earned and remaining amounts add back up to the total exactly.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct BookingContract {
    pub total_sessions: u32,
    pub total_amount: Amount,
}

impl BookingContract {
    pub fn new(total_sessions: u32, total_amount: Amount) -> BookingContract {
        BookingContract {
            total_sessions,
            total_amount,
        }
    }

    /// Derived per-session rate, truncated at minor-unit precision. Zero for
    /// a contract without sessions.
    pub fn unit_amount(&self) -> Amount {
        if self.total_sessions == 0 {
            return Amount::zero();
        }
        self.total_amount / self.total_sessions
    }
}
