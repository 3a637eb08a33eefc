//! Class repository trait for class and occurrence storage.

use async_trait::async_trait;

use super::error::RepositoryResult;
use crate::api::{Class, ClassId, CreateClassRequest, TimetableId};

/// Repository trait for class operations.
///
/// Classes own their occurrences; an occurrence has no lifecycle outside
/// its class. Creation is atomic over the whole occurrence batch, and a
/// stored class is immutable afterwards, so there is no update or delete
/// surface.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait ClassRepository: Send + Sync {
    /// Create a class with its occurrence batch.
    ///
    /// Implementations must verify that the referenced timetable, course
    /// and teacher exist, and assign persistent ids to the class and each
    /// occurrence.
    ///
    /// # Arguments
    /// * `request` - The creation payload
    ///
    /// # Returns
    /// * `Ok(Class)` - The stored class with assigned ids
    /// * `Err(RepositoryError::NotFound)` - If a referenced entity is missing
    async fn create_class(&self, request: CreateClassRequest) -> RepositoryResult<Class>;

    /// Fetch one class by id.
    ///
    /// # Arguments
    /// * `id` - The class id
    ///
    /// # Returns
    /// * `Ok(Class)` - The stored class
    /// * `Err(RepositoryError::NotFound)` - If no class has this id
    async fn get_class(&self, id: ClassId) -> RepositoryResult<Class>;

    /// List the classes of one timetable in creation order.
    ///
    /// # Arguments
    /// * `timetable_id` - The owning timetable
    ///
    /// # Returns
    /// * `Ok(Vec<Class>)` - Classes of the timetable
    /// * `Err(RepositoryError::NotFound)` - If the timetable does not exist
    async fn list_classes(&self, timetable_id: TimetableId) -> RepositoryResult<Vec<Class>>;
}
