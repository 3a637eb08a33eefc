//! High-level store operations over any repository backend.
//!
//! These functions are the recommended entry points: they combine
//! repository calls with structure validation, the class submission gate
//! and the projection services, so callers never hand unchecked input to a
//! backend or re-sort periods themselves.

use chrono::{NaiveDate, Weekday};
use log::warn;

use super::repository::{FullRepository, RepositoryError, RepositoryResult};
use crate::api::{
    Class, ClassId, Course, CreateClassRequest, MonthViewData, Teacher, TimetableId,
    TimetableInfo, TimetableStructure, WeekGridData,
};
use crate::models::{validate_structure, SequenceCache};
use crate::services::{projection, validator};

/// Check that the backend is reachable.
pub async fn health_check(repo: &dyn FullRepository) -> RepositoryResult<bool> {
    repo.health_check().await
}

/// Validate and store a timetable structure.
///
/// Storing under an existing id replaces the structure; the cached period
/// sequence for that timetable is dropped so the next lookup rebuilds it.
pub async fn store_structure(
    repo: &dyn FullRepository,
    sequences: &SequenceCache,
    structure: TimetableStructure,
) -> RepositoryResult<TimetableId> {
    validate_structure(&structure).map_err(|e| RepositoryError::validation(e.to_string()))?;

    let id = repo.store_structure(structure).await?;
    sequences.invalidate(id);
    Ok(id)
}

/// Fetch one structure by id.
pub async fn get_structure(
    repo: &dyn FullRepository,
    id: TimetableId,
) -> RepositoryResult<TimetableStructure> {
    repo.get_structure(id).await
}

/// List all stored timetables.
pub async fn list_timetables(repo: &dyn FullRepository) -> RepositoryResult<Vec<TimetableInfo>> {
    repo.list_timetables().await
}

/// List the classes of one timetable.
pub async fn list_classes(
    repo: &dyn FullRepository,
    timetable_id: TimetableId,
) -> RepositoryResult<Vec<Class>> {
    repo.list_classes(timetable_id).await
}

/// Fetch one class by id.
pub async fn get_class(repo: &dyn FullRepository, id: ClassId) -> RepositoryResult<Class> {
    repo.get_class(id).await
}

/// Validate and store a class creation batch.
///
/// This is the submission gate: the request is validated against the
/// timetable's structure and period sequence, and an invalid batch is
/// rejected whole with the field report attached. Only clean batches reach
/// the repository.
pub async fn create_class(
    repo: &dyn FullRepository,
    sequences: &SequenceCache,
    request: CreateClassRequest,
) -> RepositoryResult<Class> {
    let structure = repo.get_structure(request.timetable_id).await?;
    let sequence = sequences.sequence_for(&structure);

    let report = validator::validate_create_request(&request, &structure, &sequence);
    if !report.is_valid() {
        warn!(
            "Rejecting class creation for timetable {}: {} occurrence(s) with errors",
            request.timetable_id,
            report.occurrence_errors.len()
        );
        return Err(RepositoryError::validation_with_report(
            "Class creation request failed validation",
            report,
        ));
    }

    repo.create_class(request).await
}

/// List all courses.
pub async fn list_courses(repo: &dyn FullRepository) -> RepositoryResult<Vec<Course>> {
    repo.list_courses().await
}

/// Add a course to the catalog.
pub async fn add_course(
    repo: &dyn FullRepository,
    name: String,
    code: String,
) -> RepositoryResult<Course> {
    repo.add_course(name, code).await
}

/// List all teachers.
pub async fn list_teachers(repo: &dyn FullRepository) -> RepositoryResult<Vec<Teacher>> {
    repo.list_teachers().await
}

/// Add a teacher to the catalog.
pub async fn add_teacher(
    repo: &dyn FullRepository,
    name: String,
    kind: String,
) -> RepositoryResult<Teacher> {
    repo.add_teacher(name, kind).await
}

/// Assemble the weekly grid view for a timetable.
pub async fn week_grid(
    repo: &dyn FullRepository,
    sequences: &SequenceCache,
    timetable_id: TimetableId,
) -> RepositoryResult<WeekGridData> {
    let structure = repo.get_structure(timetable_id).await?;
    let classes = repo.list_classes(timetable_id).await?;
    let sequence = sequences.sequence_for(&structure);

    Ok(projection::build_week_grid(&structure, &classes, &sequence))
}

/// Assemble the month calendar view for a timetable.
pub async fn month_view(
    repo: &dyn FullRepository,
    sequences: &SequenceCache,
    timetable_id: TimetableId,
    display_date: NaiveDate,
    week_start: Weekday,
) -> RepositoryResult<MonthViewData> {
    let structure = repo.get_structure(timetable_id).await?;
    let classes = repo.list_classes(timetable_id).await?;
    let sequence = sequences.sequence_for(&structure);

    Ok(projection::materialize_month(
        &structure,
        &classes,
        &sequence,
        display_date,
        week_start,
    ))
}
