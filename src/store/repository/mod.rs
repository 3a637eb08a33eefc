//! Repository trait definitions, split by concern.
//!
//! Storage is addressed through three narrow traits so callers depend only
//! on the operations they use:
//! - [`TimetableRepository`]: structure storage and listing
//! - [`ClassRepository`]: class creation and retrieval
//! - [`CatalogRepository`]: course and teacher reference data
//!
//! [`FullRepository`] rolls the three up for callers that need the whole
//! store, with a blanket impl so any complete backend qualifies.

pub mod catalog;
pub mod class;
pub mod error;
pub mod timetable;

pub use catalog::CatalogRepository;
pub use class::ClassRepository;
pub use error::{RepositoryError, RepositoryResult};
pub use timetable::TimetableRepository;

/// Composite trait for backends implementing every repository concern.
pub trait FullRepository: TimetableRepository + ClassRepository + CatalogRepository {}

impl<T> FullRepository for T where T: TimetableRepository + ClassRepository + CatalogRepository {}
