use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use model::errors::ScheduleError;

/// Canonical weekday numbering: Monday = 0 .. Sunday = 6. This is the only
/// place integer indices are translated to `chrono::Weekday`; everything past
/// this boundary works with the typed weekday.
pub fn weekday_from_index(index: u8) -> Result<Weekday, ScheduleError> {
    match index {
        0 => Ok(Weekday::Mon),
        1 => Ok(Weekday::Tue),
        2 => Ok(Weekday::Wed),
        3 => Ok(Weekday::Thu),
        4 => Ok(Weekday::Fri),
        5 => Ok(Weekday::Sat),
        6 => Ok(Weekday::Sun),
        other => Err(ScheduleError::InvalidWeekday(other)),
    }
}

pub fn weekday_index(weekday: Weekday) -> u8 {
    weekday.num_days_from_monday() as u8
}

/// A Monday-starting calendar week. A Sunday belongs to the week whose Monday
/// is six days earlier, never to the week it would start in a Sunday-first
/// convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekWindow {
    monday: NaiveDate,
}

impl WeekWindow {
    pub fn containing(date: NaiveDate) -> WeekWindow {
        WeekWindow {
            monday: date.week(Weekday::Mon).first_day(),
        }
    }

    /// The week `offset` weeks away; negative offsets go back in time.
    pub fn shifted(&self, offset: i64) -> WeekWindow {
        WeekWindow {
            monday: self.monday + chrono::Duration::days(offset * 7),
        }
    }

    pub fn next(&self) -> WeekWindow {
        self.shifted(1)
    }

    pub fn prev(&self) -> WeekWindow {
        self.shifted(-1)
    }

    pub fn monday(&self) -> NaiveDate {
        self.monday
    }

    pub fn sunday(&self) -> NaiveDate {
        self.monday + chrono::Duration::days(6)
    }

    /// The date a weekday column resolves to within this week.
    pub fn day(&self, weekday: Weekday) -> NaiveDate {
        self.monday + chrono::Duration::days(weekday.num_days_from_monday() as i64)
    }

    /// Monday..Sunday, in order.
    pub fn days(&self) -> [NaiveDate; 7] {
        std::array::from_fn(|i| self.monday + chrono::Duration::days(i as i64))
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.monday <= date && date <= self.sunday()
    }
}

#[cfg(test)]
mod tests {
    use chrono::Datelike;

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_window_starts_on_monday() {
        // 2024-03-06 is a Wednesday
        let window = WeekWindow::containing(date(2024, 3, 6));
        assert_eq!(window.monday(), date(2024, 3, 4));
        assert_eq!(window.monday().weekday(), Weekday::Mon);
        assert!(window.contains(date(2024, 3, 6)));
    }

    #[test]
    fn test_sunday_belongs_to_previous_monday() {
        // 2024-03-10 is a Sunday; its week starts six days earlier
        let window = WeekWindow::containing(date(2024, 3, 10));
        assert_eq!(window.monday(), date(2024, 3, 4));
        assert_eq!(window.sunday(), date(2024, 3, 10));
    }

    #[test]
    fn test_days_are_seven_consecutive() {
        let window = WeekWindow::containing(date(2024, 3, 4));
        let days = window.days();
        assert_eq!(days.len(), 7);
        assert_eq!(days[0], date(2024, 3, 4));
        assert_eq!(days[6], date(2024, 3, 10));
        for pair in days.windows(2) {
            assert_eq!(pair[1] - pair[0], chrono::Duration::days(1));
        }
    }

    #[test]
    fn test_shift_composes_with_date_arithmetic() {
        let base = WeekWindow::containing(date(2024, 3, 6));
        for offset in [-52i64, -3, -1, 0, 1, 4, 52] {
            let shifted = base.shifted(offset);
            let direct =
                WeekWindow::containing(base.monday() + chrono::Duration::days(offset * 7));
            assert_eq!(shifted, direct);
            assert_eq!(shifted.monday().weekday(), Weekday::Mon);
        }
    }

    #[test]
    fn test_shift_across_year_boundary() {
        // 2023-12-31 is a Sunday
        let window = WeekWindow::containing(date(2023, 12, 31));
        assert_eq!(window.monday(), date(2023, 12, 25));
        assert_eq!(window.next().monday(), date(2024, 1, 1));
    }

    #[test]
    fn test_day_by_weekday() {
        let window = WeekWindow::containing(date(2024, 3, 4));
        assert_eq!(window.day(Weekday::Mon), date(2024, 3, 4));
        assert_eq!(window.day(Weekday::Thu), date(2024, 3, 7));
        assert_eq!(window.day(Weekday::Sun), date(2024, 3, 10));
    }

    #[test]
    fn test_weekday_index_round_trip() {
        for index in 0u8..7 {
            let weekday = weekday_from_index(index).unwrap();
            assert_eq!(weekday_index(weekday), index);
        }
        assert_eq!(weekday_from_index(0).unwrap(), Weekday::Mon);
        assert_eq!(weekday_from_index(6).unwrap(), Weekday::Sun);
    }

    #[test]
    fn test_weekday_index_out_of_range() {
        assert_eq!(
            weekday_from_index(7).unwrap_err(),
            ScheduleError::InvalidWeekday(7)
        );
        assert!(weekday_from_index(255).is_err());
    }
}
