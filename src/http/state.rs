//! Application state for the HTTP server.

use std::sync::Arc;

use chrono::Weekday;

use crate::models::SequenceCache;
use crate::store::repository::FullRepository;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Repository instance for storage operations
    pub repository: Arc<dyn FullRepository>,
    /// Cached period sequences, keyed by timetable and structure version
    pub sequences: Arc<SequenceCache>,
    /// First weekday of each calendar row in month views
    pub week_start: Weekday,
}

impl AppState {
    /// Create a new application state with the given repository.
    ///
    /// Month views start their weeks on Monday; use [`with_week_start`] to
    /// change that.
    ///
    /// [`with_week_start`]: Self::with_week_start
    pub fn new(repository: Arc<dyn FullRepository>) -> Self {
        Self {
            repository,
            sequences: Arc::new(SequenceCache::new()),
            week_start: Weekday::Mon,
        }
    }

    pub fn with_week_start(mut self, week_start: Weekday) -> Self {
        self.week_start = week_start;
        self
    }
}
