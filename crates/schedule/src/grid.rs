use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use model::{
    session::{SessionRecord, SessionStatus},
    slot::{SlotCatalog, TimeSlot},
};

use crate::{plan::ScheduleMap, week::WeekWindow};

/// State of one calendar cell, as both the admin viewer and the learner
/// booking grid see it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellState {
    /// Not offered on this date (unconfigured and configured-empty read the
    /// same at the grid level).
    Unavailable,
    /// Offered and not taken.
    Free,
    /// An active session occupies the cell.
    Booked,
}

/// The active session occupying the cell at (`date`, `start`), if any.
/// Cancelled sessions stay on record but no longer hold their cell.
pub fn find_session<'a>(
    sessions: &'a [SessionRecord],
    date: NaiveDate,
    start: &str,
) -> Option<&'a SessionRecord> {
    sessions
        .iter()
        .filter(|session| session.status() != SessionStatus::Cancelled)
        .find(|session| session.occupies(date, start))
}

pub fn cell_state(
    map: &ScheduleMap,
    sessions: &[SessionRecord],
    date: NaiveDate,
    slot: &TimeSlot,
) -> CellState {
    if find_session(sessions, date, &slot.start_key()).is_some() {
        CellState::Booked
    } else if map.is_offered(date, slot.id) {
        CellState::Free
    } else {
        CellState::Unavailable
    }
}

/// One rendered grid row: a catalog slot across the seven days of a week.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridRow {
    pub slot: TimeSlot,
    pub cells: [CellState; 7],
}

/// Resolves a full week of the calendar grid: one row per catalog slot, one
/// cell per weekday column, Monday first.
pub fn build_week(
    window: WeekWindow,
    catalog: &SlotCatalog,
    map: &ScheduleMap,
    sessions: &[SessionRecord],
) -> Vec<GridRow> {
    let days = window.days();
    catalog
        .iter()
        .map(|slot| GridRow {
            slot: *slot,
            cells: std::array::from_fn(|i| cell_state(map, sessions, days[i], slot)),
        })
        .collect()
}
