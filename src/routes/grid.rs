use crate::api::{ClassId, Day, DayId, OccurrenceId, Period, PeriodId, TimeOfDay, TimetableId};
use serde::{Deserialize, Serialize};

/// Typed cell coordinate in the weekly grid: a day column plus the starting
/// period row.
///
/// Ordering is by day id then starting period id, which fixes the iteration
/// order of grid cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GridCellKey {
    pub day_id: DayId,
    pub start_period_id: PeriodId,
}

impl GridCellKey {
    pub fn new(day_id: DayId, start_period_id: PeriodId) -> Self {
        Self {
            day_id,
            start_period_id,
        }
    }
}

/// One class occurrence rendered into a grid cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridEntry {
    pub class_id: ClassId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub occurrence_id: Option<OccurrenceId>,
    pub course_name: String,
    pub course_code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub teacher_name: Option<String>,
    pub day_id: DayId,
    pub start_period_id: PeriodId,
    pub length: u32,
    /// Start of the resolved span; `None` when the start period is unknown
    pub start: Option<TimeOfDay>,
    /// End of the resolved span; `None` on overflow or unknown start
    pub end: Option<TimeOfDay>,
    /// Periods actually available, present only when the span overflows
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available_length: Option<u32>,
}

/// All entries sharing one grid cell, in input order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridCell {
    pub key: GridCellKey,
    pub entries: Vec<GridEntry>,
}

/// Weekly grid for one timetable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekGridData {
    pub timetable_id: TimetableId,
    /// Day columns in display order
    pub days: Vec<Day>,
    /// Period rows in chronological order
    pub periods: Vec<Period>,
    /// Occupied cells, ordered by day then starting period
    pub cells: Vec<GridCell>,
}

pub const GET_WEEK_GRID: &str = "get_week_grid";
