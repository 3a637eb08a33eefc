//! Projections of stored occurrences into view shapes.
//!
//! The weekly grid groups occurrences by typed cell coordinate; the month
//! calendar lays a fixed 42-cell window over date-keyed entries. Both are
//! pure functions over already-retrieved data.

use chrono::{Datelike, Days, NaiveDate, Weekday};
use std::collections::BTreeMap;

use crate::api::{
    CalendarEntry, Class, GridCell, GridCellKey, GridEntry, MonthCell, MonthViewData, Occurrence,
    ResolvedSpan, TimetableStructure, WeekGridData,
};
use crate::models::PeriodSequence;
use crate::services::resolver;

/// Number of cells in the month window: six full weeks.
pub const MONTH_CELLS: usize = 42;

/// Group occurrences by grid cell, preserving input order within each cell.
pub fn project_grid(occurrences: &[Occurrence]) -> BTreeMap<GridCellKey, Vec<Occurrence>> {
    let mut cells: BTreeMap<GridCellKey, Vec<Occurrence>> = BTreeMap::new();
    for occurrence in occurrences {
        let key = GridCellKey::new(occurrence.day_id, occurrence.start_period_id);
        cells.entry(key).or_default().push(*occurrence);
    }
    cells
}

/// Assemble the weekly grid view for a timetable.
///
/// Entries keep the order classes and their occurrences were supplied in.
/// Each entry carries its resolved span, degraded to start-only on overflow
/// and to no times at all when the start period is unknown.
pub fn build_week_grid(
    structure: &TimetableStructure,
    classes: &[Class],
    sequence: &PeriodSequence,
) -> WeekGridData {
    let mut cells: BTreeMap<GridCellKey, Vec<GridEntry>> = BTreeMap::new();

    for class in classes {
        for occurrence in &class.occurrences {
            let key = GridCellKey::new(occurrence.day_id, occurrence.start_period_id);
            cells
                .entry(key)
                .or_default()
                .push(grid_entry(class, occurrence, sequence));
        }
    }

    WeekGridData {
        timetable_id: structure.id,
        days: structure.days.clone(),
        periods: sequence.periods().to_vec(),
        cells: cells
            .into_iter()
            .map(|(key, entries)| GridCell { key, entries })
            .collect(),
    }
}

fn grid_entry(class: &Class, occurrence: &Occurrence, sequence: &PeriodSequence) -> GridEntry {
    let span = resolver::resolve_occurrence(occurrence, sequence).ok();
    GridEntry {
        class_id: class.id,
        occurrence_id: occurrence.id,
        course_name: class.course.name.clone(),
        course_code: class.course.code.clone(),
        teacher_name: class.teacher.as_ref().map(|t| t.name.clone()),
        day_id: occurrence.day_id,
        start_period_id: occurrence.start_period_id,
        length: occurrence.length,
        start: span.as_ref().map(|s| s.start()),
        end: span.as_ref().and_then(|s| s.end()),
        available_length: match span {
            Some(ResolvedSpan::Overflow {
                available_length, ..
            }) => Some(available_length),
            _ => None,
        },
    }
}

/// Lay the fixed 42-cell month window over date-keyed entries.
///
/// The window starts on the first `week_start` on or before the first day of
/// `display_date`'s month and always spans exactly [`MONTH_CELLS`]
/// consecutive dates. Cells outside the displayed month are flagged, not
/// dropped, and keep their entries.
pub fn project_month<E: Clone>(
    display_date: NaiveDate,
    entries: &BTreeMap<NaiveDate, Vec<E>>,
    week_start: Weekday,
) -> Vec<MonthCell<E>> {
    month_window(display_date, week_start)
        .map(|date| MonthCell {
            date,
            is_current_month: date.month() == display_date.month()
                && date.year() == display_date.year(),
            entries: entries.get(&date).cloned().unwrap_or_default(),
        })
        .collect()
}

/// The 42 consecutive dates of the month window around `display_date`.
fn month_window(display_date: NaiveDate, week_start: Weekday) -> impl Iterator<Item = NaiveDate> {
    let first_of_month = display_date.with_day(1).unwrap_or(display_date);
    let offset = first_of_month.weekday().days_since(week_start);
    let anchor = first_of_month
        .checked_sub_days(Days::new(u64::from(offset)))
        .unwrap_or(first_of_month);
    anchor.iter_days().take(MONTH_CELLS)
}

/// Assemble the month calendar view for a timetable.
///
/// Weekly occurrences land on every date in the window whose calendar
/// weekday matches the occurrence's day. Days whose names do not map onto a
/// weekday contribute nothing. Entries within a date are ordered by start
/// time, then class id.
pub fn materialize_month(
    structure: &TimetableStructure,
    classes: &[Class],
    sequence: &PeriodSequence,
    display_date: NaiveDate,
    week_start: Weekday,
) -> MonthViewData {
    let mut weekly: Vec<(Weekday, CalendarEntry)> = Vec::new();
    for class in classes {
        for occurrence in &class.occurrences {
            let weekday = structure
                .day(occurrence.day_id)
                .and_then(|day| day.weekday());
            if let Some(weekday) = weekday {
                let span = resolver::resolve_occurrence(occurrence, sequence).ok();
                weekly.push((
                    weekday,
                    CalendarEntry {
                        class_id: class.id,
                        course_name: class.course.name.clone(),
                        start: span.as_ref().map(|s| s.start()),
                        end: span.as_ref().and_then(|s| s.end()),
                    },
                ));
            }
        }
    }

    let mut dated: BTreeMap<NaiveDate, Vec<CalendarEntry>> = BTreeMap::new();
    for date in month_window(display_date, week_start) {
        let mut entries: Vec<CalendarEntry> = weekly
            .iter()
            .filter(|(weekday, _)| *weekday == date.weekday())
            .map(|(_, entry)| entry.clone())
            .collect();
        if !entries.is_empty() {
            entries.sort_by_key(|entry| (entry.start, entry.class_id));
            dated.insert(date, entries);
        }
    }

    MonthViewData {
        timetable_id: structure.id,
        display_date,
        week_start,
        cells: project_month(display_date, &dated, week_start),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ClassId, Course, CourseId, Day, DayId, Period, PeriodId, TimeOfDay, TimetableId};

    fn period(id: i64, start: (u32, u32), end: (u32, u32)) -> Period {
        Period::new(
            PeriodId::new(id),
            TimeOfDay::from_hm(start.0, start.1).unwrap(),
            TimeOfDay::from_hm(end.0, end.1).unwrap(),
        )
        .unwrap()
    }

    fn demo_structure() -> TimetableStructure {
        TimetableStructure::new(
            TimetableId::new(1),
            "Demo".to_string(),
            vec![
                Day::new(DayId::new(1), "Monday"),
                Day::new(DayId::new(2), "Tuesday"),
            ],
            vec![
                period(1, (8, 0), (9, 30)),
                period(2, (9, 45), (11, 15)),
                period(3, (11, 30), (13, 0)),
            ],
        )
    }

    fn occurrence(day: i64, start: i64, length: u32) -> Occurrence {
        Occurrence {
            id: None,
            day_id: DayId::new(day),
            start_period_id: PeriodId::new(start),
            length,
        }
    }

    fn class(id: i64, course_name: &str, occurrences: Vec<Occurrence>) -> Class {
        Class {
            id: ClassId::new(id),
            timetable_id: TimetableId::new(1),
            course: Course {
                id: CourseId::new(id),
                name: course_name.to_string(),
                code: course_name[..course_name.len().min(4)].to_uppercase(),
            },
            teacher: None,
            occurrences,
        }
    }

    #[test]
    fn test_project_grid_groups_by_cell_in_input_order() {
        let occurrences = vec![
            occurrence(1, 2, 1),
            occurrence(2, 1, 1),
            occurrence(1, 2, 2),
        ];
        let cells = project_grid(&occurrences);

        assert_eq!(cells.len(), 2);
        let shared = &cells[&GridCellKey::new(DayId::new(1), PeriodId::new(2))];
        assert_eq!(shared.len(), 2);
        assert_eq!(shared[0].length, 1);
        assert_eq!(shared[1].length, 2);
    }

    #[test]
    fn test_week_grid_resolves_spans() {
        let structure = demo_structure();
        let sequence = PeriodSequence::from_structure(&structure);
        let classes = vec![class(1, "Mathematics", vec![occurrence(1, 2, 2)])];

        let grid = build_week_grid(&structure, &classes, &sequence);
        assert_eq!(grid.cells.len(), 1);

        let entry = &grid.cells[0].entries[0];
        assert_eq!(entry.start, TimeOfDay::from_hm(9, 45));
        assert_eq!(entry.end, TimeOfDay::from_hm(13, 0));
        assert_eq!(entry.available_length, None);
    }

    #[test]
    fn test_week_grid_overflow_entry_degrades() {
        let structure = demo_structure();
        let sequence = PeriodSequence::from_structure(&structure);
        let classes = vec![class(1, "History", vec![occurrence(1, 3, 4)])];

        let grid = build_week_grid(&structure, &classes, &sequence);
        let entry = &grid.cells[0].entries[0];
        assert_eq!(entry.start, TimeOfDay::from_hm(11, 30));
        assert_eq!(entry.end, None);
        assert_eq!(entry.available_length, Some(1));
    }

    #[test]
    fn test_week_grid_unknown_period_entry_has_no_times() {
        let structure = demo_structure();
        let sequence = PeriodSequence::from_structure(&structure);
        let classes = vec![class(1, "Arts", vec![occurrence(1, 99, 1)])];

        let grid = build_week_grid(&structure, &classes, &sequence);
        let entry = &grid.cells[0].entries[0];
        assert_eq!(entry.start, None);
        assert_eq!(entry.end, None);
        assert_eq!(entry.available_length, None);
    }

    #[test]
    fn test_week_grid_cell_order_and_shared_cells() {
        let structure = demo_structure();
        let sequence = PeriodSequence::from_structure(&structure);
        let classes = vec![
            class(2, "History", vec![occurrence(2, 1, 1)]),
            class(1, "Mathematics", vec![occurrence(1, 1, 1)]),
            class(3, "Arts", vec![occurrence(2, 1, 1)]),
        ];

        let grid = build_week_grid(&structure, &classes, &sequence);
        let keys: Vec<GridCellKey> = grid.cells.iter().map(|c| c.key).collect();
        assert_eq!(
            keys,
            vec![
                GridCellKey::new(DayId::new(1), PeriodId::new(1)),
                GridCellKey::new(DayId::new(2), PeriodId::new(1)),
            ]
        );

        // Shared cell keeps class input order.
        let shared = &grid.cells[1].entries;
        assert_eq!(shared[0].course_name, "History");
        assert_eq!(shared[1].course_name, "Arts");
    }

    #[test]
    fn test_month_window_always_42_cells() {
        let entries: BTreeMap<NaiveDate, Vec<String>> = BTreeMap::new();
        // February of a leap year.
        let display = NaiveDate::from_ymd_opt(2024, 2, 15).unwrap();
        let cells = project_month(display, &entries, Weekday::Mon);

        assert_eq!(cells.len(), MONTH_CELLS);
        assert_eq!(cells[0].date, NaiveDate::from_ymd_opt(2024, 1, 29).unwrap());
        assert_eq!(
            cells.iter().filter(|c| c.is_current_month).count(),
            29usize
        );
    }

    #[test]
    fn test_month_starting_on_week_start_has_no_leading_cells() {
        let entries: BTreeMap<NaiveDate, Vec<String>> = BTreeMap::new();
        // April 2024 begins on a Monday.
        let display = NaiveDate::from_ymd_opt(2024, 4, 1).unwrap();
        let cells = project_month(display, &entries, Weekday::Mon);

        assert_eq!(cells[0].date, display);
        assert!(cells[0].is_current_month);
        assert_eq!(cells.iter().filter(|c| c.is_current_month).count(), 30);
    }

    #[test]
    fn test_month_window_crosses_year_boundary() {
        let entries: BTreeMap<NaiveDate, Vec<String>> = BTreeMap::new();
        let display = NaiveDate::from_ymd_opt(2026, 1, 10).unwrap();
        let cells = project_month(display, &entries, Weekday::Mon);

        // January 2026 begins on a Thursday; the window opens in December.
        assert_eq!(
            cells[0].date,
            NaiveDate::from_ymd_opt(2025, 12, 29).unwrap()
        );
        assert!(!cells[0].is_current_month);
        assert!(cells[3].is_current_month);
        assert_eq!(cells[3].date, NaiveDate::from_ymd_opt(2026, 1, 1).unwrap());
    }

    #[test]
    fn test_month_window_respects_week_start() {
        let entries: BTreeMap<NaiveDate, Vec<String>> = BTreeMap::new();
        let display = NaiveDate::from_ymd_opt(2024, 2, 15).unwrap();
        let cells = project_month(display, &entries, Weekday::Sun);

        assert_eq!(cells[0].date, NaiveDate::from_ymd_opt(2024, 1, 28).unwrap());
        assert_eq!(cells[0].date.weekday(), Weekday::Sun);
    }

    #[test]
    fn test_out_of_month_cells_keep_entries() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 29).unwrap();
        let mut entries: BTreeMap<NaiveDate, Vec<String>> = BTreeMap::new();
        entries.insert(date, vec!["spill".to_string()]);

        let display = NaiveDate::from_ymd_opt(2024, 2, 15).unwrap();
        let cells = project_month(display, &entries, Weekday::Mon);

        assert!(!cells[0].is_current_month);
        assert_eq!(cells[0].entries, vec!["spill".to_string()]);
    }

    #[test]
    fn test_materialize_month_places_weekly_occurrences() {
        let structure = demo_structure();
        let sequence = PeriodSequence::from_structure(&structure);
        let classes = vec![class(1, "Mathematics", vec![occurrence(1, 1, 1)])];

        let display = NaiveDate::from_ymd_opt(2024, 2, 15).unwrap();
        let view = materialize_month(&structure, &classes, &sequence, display, Weekday::Mon);

        assert_eq!(view.cells.len(), MONTH_CELLS);
        // One entry on every Monday of the window, dimmed cells included.
        let mondays: Vec<&MonthCell<CalendarEntry>> = view
            .cells
            .iter()
            .filter(|c| c.date.weekday() == Weekday::Mon)
            .collect();
        assert_eq!(mondays.len(), 6);
        for cell in &mondays {
            assert_eq!(cell.entries.len(), 1);
            assert_eq!(cell.entries[0].course_name, "Mathematics");
            assert_eq!(cell.entries[0].start, TimeOfDay::from_hm(8, 0));
        }

        // Nothing lands on other weekdays.
        let rest_free = view
            .cells
            .iter()
            .filter(|c| c.date.weekday() != Weekday::Mon)
            .all(|c| c.entries.is_empty());
        assert!(rest_free);
    }

    #[test]
    fn test_materialize_month_orders_entries_by_start_time() {
        let structure = demo_structure();
        let sequence = PeriodSequence::from_structure(&structure);
        let classes = vec![
            class(1, "Late", vec![occurrence(1, 3, 1)]),
            class(2, "Early", vec![occurrence(1, 1, 1)]),
        ];

        let display = NaiveDate::from_ymd_opt(2024, 2, 15).unwrap();
        let view = materialize_month(&structure, &classes, &sequence, display, Weekday::Mon);

        let monday = view
            .cells
            .iter()
            .find(|c| c.date.weekday() == Weekday::Mon)
            .unwrap();
        assert_eq!(monday.entries[0].course_name, "Early");
        assert_eq!(monday.entries[1].course_name, "Late");
    }

    #[test]
    fn test_materialize_month_skips_unmapped_day_names() {
        let mut structure = demo_structure();
        structure.days.push(Day::new(DayId::new(7), "Projects"));
        let sequence = PeriodSequence::from_structure(&structure);
        let classes = vec![class(1, "Workshop", vec![occurrence(7, 1, 1)])];

        let display = NaiveDate::from_ymd_opt(2024, 2, 15).unwrap();
        let view = materialize_month(&structure, &classes, &sequence, display, Weekday::Mon);
        assert!(view.cells.iter().all(|c| c.entries.is_empty()));
    }
}
