//! Data Transfer Objects for the HTTP API.
//!
//! These DTOs are used for request/response serialization in the REST API.
//! The view DTOs are re-exported from the routes module since they already
//! derive Serialize/Deserialize.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// Re-export existing DTOs that are already serializable
pub use crate::api::{
    // Grid view
    GridCell,
    GridCellKey,
    GridEntry,
    WeekGridData,
    // Month view
    CalendarEntry,
    MonthCell,
    MonthViewData,
    // Landing
    TimetableInfo,
    // Validation
    FieldError,
    FieldErrorKind,
    FormReport,
    OccurrenceErrors,
    OccurrenceField,
    // Domain records
    Class,
    Course,
    CreateClassRequest,
    Teacher,
    TimetableStructure,
};

/// Request body for storing a timetable structure.
///
/// The structure arrives as raw JSON and goes through the same shape and
/// semantic checks as any other supplier input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTimetableRequest {
    /// Structure JSON with `id`, `name`, `days` and `periods` fields
    pub structure: serde_json::Value,
}

/// Response for structure storage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTimetableResponse {
    /// Id the structure was stored under
    pub timetable_id: i64,
}

/// Query parameters for the month view endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct MonthQuery {
    /// Date whose month to display (`YYYY-MM-DD`); defaults to today
    #[serde(default)]
    pub display: Option<NaiveDate>,
}

/// Request body for adding a course to the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddCourseRequest {
    pub name: String,
    pub code: String,
}

/// Request body for adding a teacher to the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddTeacherRequest {
    pub name: String,
    /// Role label, e.g. "titular"
    #[serde(rename = "type", default)]
    pub kind: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Storage backend status
    pub store: String,
}

/// Timetable list response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimetableListResponse {
    /// List of stored timetables
    pub timetables: Vec<TimetableInfo>,
    /// Total count
    pub total: usize,
}

/// Class list response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassListResponse {
    /// Classes of the requested timetable
    pub classes: Vec<Class>,
    /// Total count
    pub total: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_query_parses_date() {
        let query: MonthQuery = serde_json::from_str(r#"{"display":"2024-02-15"}"#).unwrap();
        assert_eq!(query.display, NaiveDate::from_ymd_opt(2024, 2, 15));
    }

    #[test]
    fn test_month_query_display_is_optional() {
        let query: MonthQuery = serde_json::from_str("{}").unwrap();
        assert!(query.display.is_none());
    }

    #[test]
    fn test_add_teacher_request_renames_kind() {
        let request: AddTeacherRequest =
            serde_json::from_str(r#"{"name":"Ada","type":"titular"}"#).unwrap();
        assert_eq!(request.kind, "titular");
    }
}
