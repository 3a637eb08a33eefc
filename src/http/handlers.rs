//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! store service layer for the actual work.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::Local;

use super::dto::{
    AddCourseRequest, AddTeacherRequest, ClassListResponse, CreateTimetableRequest,
    CreateTimetableResponse, HealthResponse, MonthQuery, TimetableListResponse,
};
use super::error::AppError;
use super::state::AppState;
use crate::api::{
    Class, ClassId, Course, CreateClassRequest, MonthViewData, Teacher, TimetableId,
    TimetableStructure, WeekGridData,
};
use crate::models::parse_structure_json_str;
use crate::store::services;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Health check endpoint to verify the service is running and the store
/// is answering.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let store_status = match services::health_check(state.repository.as_ref()).await {
        Ok(true) => "connected".to_string(),
        Ok(false) => "disconnected".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        store: store_status,
    }))
}

// =============================================================================
// Timetables
// =============================================================================

/// GET /v1/timetables
///
/// List all stored timetables.
pub async fn list_timetables(
    State(state): State<AppState>,
) -> HandlerResult<TimetableListResponse> {
    let timetables = services::list_timetables(state.repository.as_ref()).await?;
    let total = timetables.len();

    Ok(Json(TimetableListResponse { timetables, total }))
}

/// POST /v1/timetables
///
/// Store a timetable structure, replacing any structure with the same id.
pub async fn create_timetable(
    State(state): State<AppState>,
    Json(request): Json<CreateTimetableRequest>,
) -> Result<(StatusCode, Json<CreateTimetableResponse>), AppError> {
    let structure_json = serde_json::to_string(&request.structure)
        .map_err(|e| AppError::BadRequest(format!("Invalid structure JSON: {}", e)))?;
    let structure = parse_structure_json_str(&structure_json)
        .map_err(|e| AppError::BadRequest(format!("{:#}", e)))?;

    let id = services::store_structure(state.repository.as_ref(), &state.sequences, structure)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateTimetableResponse {
            timetable_id: id.value(),
        }),
    ))
}

/// GET /v1/timetables/{timetable_id}
///
/// Fetch one timetable structure.
pub async fn get_timetable(
    State(state): State<AppState>,
    Path(timetable_id): Path<i64>,
) -> HandlerResult<TimetableStructure> {
    let structure =
        services::get_structure(state.repository.as_ref(), TimetableId::new(timetable_id))
            .await?;
    Ok(Json(structure))
}

/// GET /v1/timetables/{timetable_id}/classes
///
/// List the classes of one timetable.
pub async fn list_classes(
    State(state): State<AppState>,
    Path(timetable_id): Path<i64>,
) -> HandlerResult<ClassListResponse> {
    let classes =
        services::list_classes(state.repository.as_ref(), TimetableId::new(timetable_id))
            .await?;
    let total = classes.len();

    Ok(Json(ClassListResponse { classes, total }))
}

// =============================================================================
// Projections
// =============================================================================

/// GET /v1/timetables/{timetable_id}/grid
///
/// Weekly grid view of a timetable's classes.
pub async fn get_week_grid(
    State(state): State<AppState>,
    Path(timetable_id): Path<i64>,
) -> HandlerResult<WeekGridData> {
    let grid = services::week_grid(
        state.repository.as_ref(),
        &state.sequences,
        TimetableId::new(timetable_id),
    )
    .await?;
    Ok(Json(grid))
}

/// GET /v1/timetables/{timetable_id}/month?display=YYYY-MM-DD
///
/// Month calendar view of a timetable's classes. Without a `display`
/// parameter the current month is shown.
pub async fn get_month_view(
    State(state): State<AppState>,
    Path(timetable_id): Path<i64>,
    Query(query): Query<MonthQuery>,
) -> HandlerResult<MonthViewData> {
    let display = query.display.unwrap_or_else(|| Local::now().date_naive());

    let view = services::month_view(
        state.repository.as_ref(),
        &state.sequences,
        TimetableId::new(timetable_id),
        display,
        state.week_start,
    )
    .await?;
    Ok(Json(view))
}

// =============================================================================
// Classes
// =============================================================================

/// GET /v1/classes/{class_id}
///
/// Fetch one class with its occurrences.
pub async fn get_class(
    State(state): State<AppState>,
    Path(class_id): Path<i64>,
) -> HandlerResult<Class> {
    let class = services::get_class(state.repository.as_ref(), ClassId::new(class_id)).await?;
    Ok(Json(class))
}

/// POST /v1/classes
///
/// Create a class with its occurrence batch. Invalid batches are rejected
/// whole with a 422 carrying the field report.
pub async fn create_class(
    State(state): State<AppState>,
    Json(request): Json<CreateClassRequest>,
) -> Result<(StatusCode, Json<Class>), AppError> {
    let class =
        services::create_class(state.repository.as_ref(), &state.sequences, request).await?;
    Ok((StatusCode::CREATED, Json(class)))
}

// =============================================================================
// Catalog
// =============================================================================

/// GET /v1/courses
///
/// List all courses.
pub async fn list_courses(State(state): State<AppState>) -> HandlerResult<Vec<Course>> {
    let courses = services::list_courses(state.repository.as_ref()).await?;
    Ok(Json(courses))
}

/// POST /v1/courses
///
/// Add a course to the catalog.
pub async fn add_course(
    State(state): State<AppState>,
    Json(request): Json<AddCourseRequest>,
) -> Result<(StatusCode, Json<Course>), AppError> {
    let course =
        services::add_course(state.repository.as_ref(), request.name, request.code).await?;
    Ok((StatusCode::CREATED, Json(course)))
}

/// GET /v1/teachers
///
/// List all teachers.
pub async fn list_teachers(State(state): State<AppState>) -> HandlerResult<Vec<Teacher>> {
    let teachers = services::list_teachers(state.repository.as_ref()).await?;
    Ok(Json(teachers))
}

/// POST /v1/teachers
///
/// Add a teacher to the catalog.
pub async fn add_teacher(
    State(state): State<AppState>,
    Json(request): Json<AddTeacherRequest>,
) -> Result<(StatusCode, Json<Teacher>), AppError> {
    let teacher =
        services::add_teacher(state.repository.as_ref(), request.name, request.kind).await?;
    Ok((StatusCode::CREATED, Json(teacher)))
}
