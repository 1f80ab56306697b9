use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::ids::SlotId;

const HHMM: &str = "%H:%M";

/// A fixed daily time interval from the reference catalog, e.g. 06:00-07:00.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct TimeSlot {
    pub id: SlotId,
    start: NaiveTime,
    end: NaiveTime,
}

impl TimeSlot {
    pub fn new(id: SlotId, start: NaiveTime, end: NaiveTime) -> Result<TimeSlot, eyre::Error> {
        if start >= end {
            return Err(eyre::eyre!("Slot must start before it ends: {start} >= {end}"));
        }
        Ok(TimeSlot { id, start, end })
    }

    pub fn from_hhmm(id: SlotId, start: &str, end: &str) -> Result<TimeSlot, eyre::Error> {
        let start = NaiveTime::parse_from_str(start, HHMM)
            .map_err(|err| eyre::eyre!("Bad slot start time {start:?}: {err}"))?;
        let end = NaiveTime::parse_from_str(end, HHMM)
            .map_err(|err| eyre::eyre!("Bad slot end time {end:?}: {err}"))?;
        TimeSlot::new(id, start, end)
    }

    pub fn start(&self) -> NaiveTime {
        self.start
    }

    pub fn end(&self) -> NaiveTime {
        self.end
    }

    /// Zero-padded `HH:MM` rendering of the start time. The calendar grid is
    /// indexed by this key.
    pub fn start_key(&self) -> String {
        self.start.format(HHMM).to_string()
    }

    /// Textual match against a grid key. `"9:00"` does not match a 09:00 slot;
    /// keys are always zero-padded.
    pub fn starts_at(&self, key: &str) -> bool {
        self.start_key() == key
    }
}

impl std::fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.start.format(HHMM), self.end.format(HHMM))
    }
}

/// Whether a stored record occupies the calendar cell at (`cell_date`,
/// `cell_start`). A cell is identified by its start boundary only; the slot
/// end never takes part in matching. Both the read-only availability viewer
/// and the interactive booking grid resolve cells through this predicate.
pub fn occupies_cell(
    record_date: NaiveDate,
    record_slot: &TimeSlot,
    cell_date: NaiveDate,
    cell_start: &str,
) -> bool {
    record_date == cell_date && record_slot.starts_at(cell_start)
}

/// Ordered, non-overlapping reference catalog of the slots a day is divided
/// into. Loaded once from master data and treated as read-only.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct SlotCatalog {
    slots: Vec<TimeSlot>,
}

impl SlotCatalog {
    pub fn new(slots: Vec<TimeSlot>) -> Result<SlotCatalog, eyre::Error> {
        for pair in slots.windows(2) {
            if pair[0].start >= pair[1].start {
                return Err(eyre::eyre!(
                    "Slot catalog must be ordered by start time: {} before {}",
                    pair[0],
                    pair[1]
                ));
            }
            if pair[0].end > pair[1].start {
                return Err(eyre::eyre!(
                    "Slot catalog must not overlap: {} and {}",
                    pair[0],
                    pair[1]
                ));
            }
        }

        let mut ids: Vec<_> = slots.iter().map(|slot| slot.id).collect();
        ids.sort();
        ids.dedup();
        if ids.len() != slots.len() {
            return Err(eyre::eyre!("Slot catalog contains duplicate ids"));
        }

        Ok(SlotCatalog { slots })
    }

    pub fn get(&self, id: SlotId) -> Option<&TimeSlot> {
        self.slots.iter().find(|slot| slot.id == id)
    }

    pub fn by_start(&self, key: &str) -> Option<&TimeSlot> {
        self.slots.iter().find(|slot| slot.starts_at(key))
    }

    pub fn iter(&self) -> impl Iterator<Item = &TimeSlot> {
        self.slots.iter()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot(id: u32, start: &str, end: &str) -> TimeSlot {
        TimeSlot::from_hhmm(SlotId::new(id), start, end).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_slot_parse_and_key() {
        let slot = slot(1, "06:00", "07:00");
        assert_eq!(slot.start_key(), "06:00");
        assert_eq!(format!("{}", slot), "06:00-07:00");
    }

    #[test]
    fn test_slot_rejects_inverted_interval() {
        assert!(TimeSlot::from_hhmm(SlotId::new(1), "07:00", "06:00").is_err());
        assert!(TimeSlot::from_hhmm(SlotId::new(1), "07:00", "07:00").is_err());
    }

    #[test]
    fn test_starts_at_requires_zero_padding() {
        let slot = slot(1, "09:00", "10:00");
        assert!(slot.starts_at("09:00"));
        assert!(!slot.starts_at("9:00"));
        assert!(!slot.starts_at("09:01"));
    }

    #[test]
    fn test_occupies_cell_matches_day_and_start() {
        let slot = slot(3, "14:00", "15:00");
        let day = date(2024, 3, 4);

        assert!(occupies_cell(day, &slot, day, "14:00"));
        assert!(!occupies_cell(day, &slot, date(2024, 3, 5), "14:00"));
        assert!(!occupies_cell(day, &slot, day, "15:00"));
    }

    #[test]
    fn test_catalog_lookup() {
        let catalog = SlotCatalog::new(vec![
            slot(1, "06:00", "07:00"),
            slot(2, "07:00", "08:00"),
            slot(3, "14:00", "15:00"),
        ])
        .unwrap();

        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.get(SlotId::new(2)).unwrap().start_key(), "07:00");
        assert_eq!(catalog.by_start("14:00").unwrap().id, SlotId::new(3));
        assert!(catalog.get(SlotId::new(9)).is_none());
    }

    #[test]
    fn test_catalog_rejects_overlap_and_disorder() {
        assert!(SlotCatalog::new(vec![
            slot(1, "06:00", "07:30"),
            slot(2, "07:00", "08:00"),
        ])
        .is_err());

        assert!(SlotCatalog::new(vec![
            slot(1, "07:00", "08:00"),
            slot(2, "06:00", "07:00"),
        ])
        .is_err());

        assert!(SlotCatalog::new(vec![
            slot(1, "06:00", "07:00"),
            slot(1, "07:00", "08:00"),
        ])
        .is_err());
    }

    #[test]
    fn test_adjacent_slots_allowed() {
        assert!(SlotCatalog::new(vec![
            slot(1, "06:00", "07:00"),
            slot(2, "07:00", "08:00"),
        ])
        .is_ok());
    }
}
