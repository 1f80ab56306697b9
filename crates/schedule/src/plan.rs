use std::collections::{BTreeMap, BTreeSet};

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Deserializer, Serialize};

use model::{errors::ScheduleError, ids::SlotId, range::DateRange};

use crate::week::{weekday_from_index, weekday_index};

/// Per-date record of which slots are offered, keyed as
/// date -> canonical weekday index (Monday = 0) -> ordered slot-id set.
///
/// Two different signals live here: a date with no entry has not been
/// configured yet, while a date holding an empty slot set was explicitly
/// marked unavailable.
///
/// Every edit returns a new map and leaves the receiver untouched, so a
/// caller holding a map value can tell whether an edit has been applied by
/// plain value equality.
///
/// Every stored weekday index equals its date's own computed weekday. The
/// `apply_*` methods uphold this by construction; deserialization checks it
/// and rejects misfiled entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ScheduleMap {
    entries: BTreeMap<NaiveDate, BTreeMap<u8, BTreeSet<SlotId>>>,
}

impl<'de> Deserialize<'de> for ScheduleMap {
    fn deserialize<D>(deserializer: D) -> Result<ScheduleMap, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::Error;

        let entries =
            BTreeMap::<NaiveDate, BTreeMap<u8, BTreeSet<SlotId>>>::deserialize(deserializer)?;
        for (date, day) in &entries {
            for &index in day.keys() {
                weekday_from_index(index).map_err(D::Error::custom)?;
                if index != weekday_index(date.weekday()) {
                    return Err(D::Error::custom(ScheduleError::WeekdayMismatch {
                        date: *date,
                        index,
                    }));
                }
            }
        }
        Ok(ScheduleMap { entries })
    }
}

impl ScheduleMap {
    pub fn new() -> ScheduleMap {
        ScheduleMap::default()
    }

    /// Writes `slots` on every date in `range` that falls on `weekday`,
    /// replacing whatever that date held for the weekday before. Last write
    /// wins; this is "replace this weekday's pattern", not an additive merge.
    /// An empty `slots` still writes an explicit empty entry.
    pub fn apply_weekly(
        &self,
        range: &DateRange,
        weekday: Weekday,
        slots: &BTreeSet<SlotId>,
    ) -> ScheduleMap {
        let mut next = self.clone();
        let mut written = 0usize;
        for date in range.iter() {
            if date.weekday() != weekday {
                continue;
            }
            next.entries
                .entry(date)
                .or_default()
                .insert(weekday_index(weekday), slots.clone());
            written += 1;
        }
        log::debug!(
            "weekly pattern for {:?} wrote {} dates in {}..={}",
            weekday,
            written,
            range.start(),
            range.end()
        );
        next
    }

    /// UI-edge variant of [`apply_weekly`](Self::apply_weekly) taking the
    /// canonical weekday index. An index outside 0..=6 is rejected, never
    /// clamped; clamping would file availability under the wrong weekday.
    pub fn apply_weekly_index(
        &self,
        range: &DateRange,
        index: u8,
        slots: &BTreeSet<SlotId>,
    ) -> Result<ScheduleMap, ScheduleError> {
        let weekday = weekday_from_index(index)?;
        Ok(self.apply_weekly(range, weekday, slots))
    }

    /// Non-recurring mode: writes exactly one date's entry under that date's
    /// own weekday.
    pub fn apply_single(&self, date: NaiveDate, slots: &BTreeSet<SlotId>) -> ScheduleMap {
        let mut next = self.clone();
        next.entries
            .entry(date)
            .or_default()
            .insert(weekday_index(date.weekday()), slots.clone());
        next
    }

    /// The slots offered on `date`, or `None` when the date was never
    /// configured. An explicit empty set means "configured as unavailable".
    pub fn slots_on(&self, date: NaiveDate) -> Option<&BTreeSet<SlotId>> {
        self.entries
            .get(&date)
            .and_then(|day| day.get(&weekday_index(date.weekday())))
    }

    pub fn is_configured(&self, date: NaiveDate) -> bool {
        self.slots_on(date).is_some()
    }

    pub fn is_offered(&self, date: NaiveDate, slot: SlotId) -> bool {
        self.slots_on(date)
            .map(|slots| slots.contains(&slot))
            .unwrap_or(false)
    }

    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.entries.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
