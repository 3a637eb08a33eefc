//! Public API surface for the Rust backend.
//!
//! This file consolidates the domain records and DTO types for the HTTP API.
//! All persisted types derive Serialize/Deserialize for JSON serialization.

pub use crate::routes::grid::GridCell;
pub use crate::routes::grid::GridCellKey;
pub use crate::routes::grid::GridEntry;
pub use crate::routes::grid::WeekGridData;
pub use crate::routes::landing::TimetableInfo;
pub use crate::routes::month::CalendarEntry;
pub use crate::routes::month::MonthCell;
pub use crate::routes::month::MonthViewData;
pub use crate::routes::validation::FieldError;
pub use crate::routes::validation::FieldErrorKind;
pub use crate::routes::validation::FormReport;
pub use crate::routes::validation::OccurrenceErrors;
pub use crate::routes::validation::OccurrenceField;

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::define_id_type;

define_id_type!(
    /// Timetable identifier (database primary key).
    i64, TimetableId
);

define_id_type!(
    /// Day identifier, unique within a timetable.
    i64, DayId
);

define_id_type!(
    /// Period identifier, unique within a timetable.
    i64, PeriodId
);

define_id_type!(
    /// Class identifier (database primary key).
    i64, ClassId
);

define_id_type!(
    /// Course identifier (catalog primary key).
    i64, CourseId
);

define_id_type!(
    /// Teacher identifier (catalog primary key).
    i64, TeacherId
);

define_id_type!(
    /// Occurrence identifier (database primary key).
    i64, OccurrenceId
);

pub use crate::models::TimeOfDay;

/// A fixed teaching slot within the school day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    /// Period identifier, unique within a timetable
    pub id: PeriodId,
    /// Slot start time
    pub start: TimeOfDay,
    /// Slot end time, strictly after `start`
    pub end: TimeOfDay,
}

impl Period {
    /// Create a period. Returns `None` unless `start < end`.
    pub fn new(id: PeriodId, start: TimeOfDay, end: TimeOfDay) -> Option<Self> {
        if start < end {
            Some(Self { id, start, end })
        } else {
            None
        }
    }
}

/// A teaching day column in the weekly grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Day {
    /// Day identifier, unique within a timetable
    pub id: DayId,
    /// Display name, e.g. "Monday"
    pub name: String,
}

impl Day {
    pub fn new(id: DayId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Best-effort mapping of the display name onto a calendar weekday.
    ///
    /// Accepts full English names and three-letter abbreviations, case
    /// insensitive. Returns `None` for names that are not weekdays.
    pub fn weekday(&self) -> Option<Weekday> {
        self.name.trim().parse().ok()
    }
}

/// Top-level timetable structure: the day columns and period rows every
/// occurrence is placed against.
///
/// Structures are supplied by the timetable owner and are read-only here;
/// derived state keys off [`StructureVersion`](crate::models::StructureVersion)
/// to notice replacements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimetableStructure {
    /// Database ID
    pub id: TimetableId,
    /// Timetable name
    #[serde(default)]
    pub name: String,
    /// Teaching days in display order
    pub days: Vec<Day>,
    /// Teaching periods; display order is by start time, not input order
    pub periods: Vec<Period>,
}

impl TimetableStructure {
    pub fn new(id: TimetableId, name: String, days: Vec<Day>, periods: Vec<Period>) -> Self {
        Self {
            id,
            name,
            days,
            periods,
        }
    }

    /// Look up a day by its identifier.
    pub fn day(&self, id: DayId) -> Option<&Day> {
        self.days.iter().find(|d| d.id == id)
    }

    /// Look up a period by its identifier.
    pub fn period(&self, id: PeriodId) -> Option<&Period> {
        self.periods.iter().find(|p| p.id == id)
    }
}

/// Course catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Database ID
    pub id: CourseId,
    /// Display name, e.g. "Mathematics"
    pub name: String,
    /// Short code shown inside grid cells, e.g. "MATH"
    pub code: String,
}

/// Teacher catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Teacher {
    /// Database ID
    pub id: TeacherId,
    /// Display name
    pub name: String,
    /// Role label, e.g. "titular"
    #[serde(rename = "type", default)]
    pub kind: String,
}

/// One weekly placement of a class: a day, a starting period and the number
/// of consecutive periods it spans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Occurrence {
    /// Database ID (optional on input, server-assigned)
    #[serde(default)]
    pub id: Option<OccurrenceId>,
    /// Day the class meets
    pub day_id: DayId,
    /// First period of the span
    pub start_period_id: PeriodId,
    /// Number of consecutive periods spanned, at least 1
    pub length: u32,
}

/// A scheduled class: a course, an optional teacher and the weekly
/// occurrences placing it on the grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Class {
    /// Database ID
    pub id: ClassId,
    /// Owning timetable
    pub timetable_id: TimetableId,
    /// Course taught in this class
    pub course: Course,
    /// Assigned teacher, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub teacher: Option<Teacher>,
    /// Weekly placements
    pub occurrences: Vec<Occurrence>,
}

/// Occurrence payload inside a class creation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewOccurrence {
    pub day_id: DayId,
    pub start_period_id: PeriodId,
    /// Number of consecutive periods, at least 1
    pub length: u32,
}

/// Request to create a class with its full batch of occurrences.
///
/// The batch is atomic: it is either accepted whole or rejected whole.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateClassRequest {
    /// Target timetable
    pub timetable_id: TimetableId,
    /// Course to schedule
    pub course_id: CourseId,
    /// Teacher to assign, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub teacher_id: Option<TeacherId>,
    /// Weekly placements, at least one
    pub occurrences: Vec<NewOccurrence>,
}

/// Contiguous wall-clock interval covered by a resolved occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeRange {
    pub start: TimeOfDay,
    pub end: TimeOfDay,
}

impl TimeRange {
    pub fn new(start: TimeOfDay, end: TimeOfDay) -> Self {
        Self { start, end }
    }
}

/// Outcome of resolving an occurrence against the period sequence.
///
/// Overflow is a reportable value, not an error: the occurrence starts at a
/// known period but asks for more consecutive periods than the day has left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolvedSpan {
    /// The occurrence fits; it covers the returned range.
    Fits(TimeRange),
    /// The occurrence runs past the last period of the day.
    Overflow {
        /// Start time of the first period
        start: TimeOfDay,
        /// Periods the occurrence asked for
        requested_length: u32,
        /// Periods actually available from the start period onwards
        available_length: u32,
    },
}

impl ResolvedSpan {
    /// Start time of the span; present in both outcomes.
    pub fn start(&self) -> TimeOfDay {
        match self {
            ResolvedSpan::Fits(range) => range.start,
            ResolvedSpan::Overflow { start, .. } => *start,
        }
    }

    /// End time of the span; `None` when the span overflows the day.
    pub fn end(&self) -> Option<TimeOfDay> {
        match self {
            ResolvedSpan::Fits(range) => Some(range.end),
            ResolvedSpan::Overflow { .. } => None,
        }
    }

    pub fn is_overflow(&self) -> bool {
        matches!(self, ResolvedSpan::Overflow { .. })
    }
}
