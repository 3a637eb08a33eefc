//! Storage module for timetable data.
//!
//! This module provides abstractions for storage operations via the
//! Repository pattern, allowing different backends to be swapped easily.
//!
//! # Architecture
//!
//! The storage module follows a layered architecture:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  Application Layer (REST API, embedding callers)        │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Service Layer (services.rs) - Business Logic           │
//! │  - Structure validation                                  │
//! │  - Class submission gate                                 │
//! │  - Grid and month view assembly                          │
//! └───────────────────┬─────────────────────────────────────┘
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Repository Traits (repository/) - Abstract Interface   │
//! └───────────────────┬─────────────────────────────────────┘
//!     ┌──────────────────────────────────────────────┐
//!     │             Local Repository                  │
//!     │               (in-memory)                     │
//!     └──────────────────────────────────────────────┘
//! ```
//!
//! # Recommended Usage
//!
//! **For new code, use the service layer:**
//! ```ignore
//! use timetable_rust::store::{services, LocalRepository};
//! use timetable_rust::models::SequenceCache;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let repo = LocalRepository::new();
//!     let sequences = SequenceCache::new();
//!
//!     let timetables = services::list_timetables(&repo).await?;
//!     Ok(())
//! }
//! ```

pub mod repositories;
pub mod repository;
pub mod services;


// ==================== Service Layer (Recommended for new code) ====================
// Use these high-level functions that work with any repository implementation

pub use services::{
    add_course, add_teacher, create_class, get_class, get_structure, health_check, list_classes,
    list_courses, list_teachers, list_timetables, month_view, store_structure, week_grid,
};

// ==================== Repository Pattern Exports ====================

#[cfg(feature = "local-repo")]
pub use repositories::LocalRepository;
pub use repository::{
    CatalogRepository, ClassRepository, FullRepository, RepositoryError, RepositoryResult,
    TimetableRepository,
};
