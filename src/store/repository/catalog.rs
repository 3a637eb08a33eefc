//! Catalog repository trait for course and teacher lookups.

use async_trait::async_trait;

use super::error::RepositoryResult;
use crate::api::{Course, CourseId, Teacher, TeacherId};

/// Repository trait for the course and teacher catalog.
///
/// The catalog is reference data for class creation: classes point into it
/// but never modify it.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// List all courses.
    async fn list_courses(&self) -> RepositoryResult<Vec<Course>>;

    /// Fetch one course by id.
    ///
    /// # Returns
    /// * `Ok(Course)` - The course
    /// * `Err(RepositoryError::NotFound)` - If no course has this id
    async fn get_course(&self, id: CourseId) -> RepositoryResult<Course>;

    /// Add a course and assign it an id.
    async fn add_course(&self, name: String, code: String) -> RepositoryResult<Course>;

    /// List all teachers.
    async fn list_teachers(&self) -> RepositoryResult<Vec<Teacher>>;

    /// Fetch one teacher by id.
    ///
    /// # Returns
    /// * `Ok(Teacher)` - The teacher
    /// * `Err(RepositoryError::NotFound)` - If no teacher has this id
    async fn get_teacher(&self, id: TeacherId) -> RepositoryResult<Teacher>;

    /// Add a teacher and assign them an id.
    async fn add_teacher(&self, name: String, kind: String) -> RepositoryResult<Teacher>;
}
