//! Timetable repository trait for structure storage operations.

use async_trait::async_trait;

use super::error::RepositoryResult;
use crate::api::{TimetableId, TimetableInfo, TimetableStructure};

/// Repository trait for timetable structure operations.
///
/// A structure is stored whole and read whole; its days and periods have no
/// lifecycle of their own. Storing under an existing id replaces the
/// previous structure.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait TimetableRepository: Send + Sync {
    /// Check that the backend is reachable and answering.
    ///
    /// # Returns
    /// * `Ok(true)` - Backend is healthy
    /// * `Err(RepositoryError)` - If the check fails
    async fn health_check(&self) -> RepositoryResult<bool>;

    /// Store a timetable structure, replacing any structure with the same id.
    ///
    /// # Arguments
    /// * `structure` - The structure to store
    ///
    /// # Returns
    /// * `Ok(TimetableId)` - Id the structure was stored under
    /// * `Err(RepositoryError)` - If the operation fails
    async fn store_structure(
        &self,
        structure: TimetableStructure,
    ) -> RepositoryResult<TimetableId>;

    /// Fetch one structure by id.
    ///
    /// # Arguments
    /// * `id` - The timetable id
    ///
    /// # Returns
    /// * `Ok(TimetableStructure)` - The stored structure
    /// * `Err(RepositoryError::NotFound)` - If no structure has this id
    async fn get_structure(&self, id: TimetableId) -> RepositoryResult<TimetableStructure>;

    /// List all stored timetables as lightweight entries.
    ///
    /// # Returns
    /// * `Ok(Vec<TimetableInfo>)` - Id and name per timetable
    /// * `Err(RepositoryError)` - If the operation fails
    async fn list_timetables(&self) -> RepositoryResult<Vec<TimetableInfo>>;
}
