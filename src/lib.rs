//! # Timetable Rust Backend
//!
//! Occurrence resolution and schedule projection engine for weekly school
//! timetables.
//!
//! A timetable structure defines named days and ordered time periods; classes
//! place *occurrences* on it, each a day, a starting period and a count of
//! consecutive periods. This crate turns those definitions into concrete time
//! ranges, validated submission batches, and the grid and calendar groupings
//! the views render. The optional HTTP feature exposes the engine as a REST
//! API via Axum.
//!
//! ## Features
//!
//! - **Structure Handling**: Parse and validate timetable structures from JSON
//! - **Span Resolution**: Map occurrences onto wall-clock ranges, with
//!   overflow as a reportable value rather than an error
//! - **Validation**: Independent field-level checks gating class submission
//! - **Projection**: Weekly grid cells and fixed 42-cell month calendars
//! - **HTTP API**: RESTful endpoints for frontend integration
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`api`]: Domain records, id newtypes and DTO re-exports
//! - [`models`]: Time-of-day handling, structure parsing, period sequencing
//! - [`services`]: Resolution, validation, projection, navigation and the
//!   class editing session
//! - [`routes`]: Per-view DTO types
//! - [`store`]: Repository traits, the in-memory backend and the service layer
//! - [`http`]: Axum-based HTTP server and request handlers

pub mod api;

pub mod config;

pub mod models;

pub mod routes;

pub mod services;

pub mod store;

#[cfg(feature = "http-server")]
pub mod http;
