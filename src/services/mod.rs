//! Service layer for resolution, validation and projection.
//!
//! This module contains the pure schedule logic that sits between the stored
//! timetable data and the HTTP surface: span resolution, occurrence
//! validation, grid and calendar projection, plus the session-scoped
//! editing and navigation state.

pub mod editor;

pub mod navigation;

pub mod projection;

pub mod resolver;

pub mod snapshot;

pub mod validator;

pub use editor::{
    ClassEditor, DraftKey, DraftOccurrence, EditorError, SubmitError, TimetableSnapshot,
};
pub use navigation::{NavigationController, ScheduleView};
pub use projection::{build_week_grid, materialize_month, project_grid, project_month};
pub use resolver::{resolve_occurrence, resolve_span, ResolveError};
pub use snapshot::{LoadTicket, SnapshotSlot};
pub use validator::{validate_create_request, validate_draft, validate_new_occurrence};
