use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::errors::ScheduleError;

/// Validity window of a recurring availability plan. Both ends are inclusive
/// and `start <= end` holds for every constructed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawDateRange")]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<DateRange, ScheduleError> {
        if start > end {
            return Err(ScheduleError::InvalidRange { start, end });
        }
        Ok(DateRange { start, end })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    pub fn days(&self) -> u64 {
        (self.end - self.start).num_days() as u64 + 1
    }

    pub fn iter(&self) -> DateRangeIter {
        DateRangeIter {
            next: Some(self.start),
            end: self.end,
        }
    }
}

impl IntoIterator for &DateRange {
    type Item = NaiveDate;
    type IntoIter = DateRangeIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

pub struct DateRangeIter {
    next: Option<NaiveDate>,
    end: NaiveDate,
}

impl Iterator for DateRangeIter {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<NaiveDate> {
        let date = self.next?;
        if date > self.end {
            self.next = None;
            return None;
        }
        self.next = date.checked_add_days(Days::new(1));
        Some(date)
    }
}

#[derive(Deserialize)]
struct RawDateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl TryFrom<RawDateRange> for DateRange {
    type Error = ScheduleError;

    fn try_from(raw: RawDateRange) -> Result<DateRange, ScheduleError> {
        DateRange::new(raw.start, raw.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_inverted_range_rejected() {
        let err = DateRange::new(date(2024, 3, 24), date(2024, 3, 4)).unwrap_err();
        assert_eq!(
            err,
            ScheduleError::InvalidRange {
                start: date(2024, 3, 24),
                end: date(2024, 3, 4),
            }
        );
    }

    #[test]
    fn test_iter_inclusive_both_ends() {
        let range = DateRange::new(date(2024, 3, 4), date(2024, 3, 6)).unwrap();
        let days: Vec<_> = range.iter().collect();
        assert_eq!(
            days,
            vec![date(2024, 3, 4), date(2024, 3, 5), date(2024, 3, 6)]
        );
        assert_eq!(range.days(), 3);
    }

    #[test]
    fn test_single_day_range() {
        let range = DateRange::new(date(2024, 3, 4), date(2024, 3, 4)).unwrap();
        assert_eq!(range.iter().collect::<Vec<_>>(), vec![date(2024, 3, 4)]);
        assert!(range.contains(date(2024, 3, 4)));
        assert!(!range.contains(date(2024, 3, 5)));
    }

    #[test]
    fn test_deserialize_validates() {
        let ok: DateRange =
            serde_json::from_str(r#"{"start":"2024-03-04","end":"2024-03-24"}"#).unwrap();
        assert_eq!(ok.start(), date(2024, 3, 4));
        assert_eq!(ok.end(), date(2024, 3, 24));

        let bad =
            serde_json::from_str::<DateRange>(r#"{"start":"2024-03-24","end":"2024-03-04"}"#);
        assert!(bad.is_err());
    }
}
