use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::api::{ClassId, TimeOfDay, TimetableId};

/// One class entry on a concrete calendar date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarEntry {
    pub class_id: ClassId,
    pub course_name: String,
    /// Start of the resolved span; `None` when the start period is unknown
    pub start: Option<TimeOfDay>,
    /// End of the resolved span; `None` on overflow or unknown start
    pub end: Option<TimeOfDay>,
}

/// One cell of the month calendar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthCell<E> {
    pub date: NaiveDate,
    /// False for leading and trailing cells outside the displayed month
    pub is_current_month: bool,
    pub entries: Vec<E>,
}

/// Month calendar for one timetable: a fixed 6x7 window of 42 cells.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthViewData {
    pub timetable_id: TimetableId,
    /// Date whose month the window is anchored on
    pub display_date: NaiveDate,
    /// First weekday of each calendar row
    pub week_start: Weekday,
    pub cells: Vec<MonthCell<CalendarEntry>>,
}

pub const GET_MONTH_VIEW: &str = "get_month_view";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_cell_clone() {
        let cell = MonthCell {
            date: NaiveDate::from_ymd_opt(2024, 2, 29).unwrap(),
            is_current_month: true,
            entries: vec![CalendarEntry {
                class_id: ClassId::new(1),
                course_name: "Mathematics".to_string(),
                start: TimeOfDay::from_hm(8, 0),
                end: TimeOfDay::from_hm(9, 30),
            }],
        };
        let cloned = cell.clone();
        assert!(cloned.is_current_month);
        assert_eq!(cloned.entries.len(), 1);
    }

    #[test]
    fn test_month_cell_generic_over_entry_type() {
        let cell: MonthCell<String> = MonthCell {
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            is_current_month: false,
            entries: vec!["note".to_string()],
        };
        assert_eq!(cell.entries[0], "note");
    }

    #[test]
    fn test_calendar_entry_serde_round_trip() {
        let entry = CalendarEntry {
            class_id: ClassId::new(5),
            course_name: "History".to_string(),
            start: TimeOfDay::from_hm(11, 30),
            end: None,
        };
        let json = serde_json::to_string(&entry).unwrap();
        let back: CalendarEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entry);
    }

    #[test]
    fn test_const_values() {
        assert_eq!(GET_MONTH_VIEW, "get_month_view");
    }
}
