//! Router configuration for the HTTP API.
//!
//! This module sets up all routes, middleware (CORS, compression, tracing),
//! and creates the axum router ready for serving.

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration - permissive for development, should be restricted in production
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build the API router with versioned endpoints
    let api_v1 = Router::new()
        // Timetable structures
        .route("/timetables", get(handlers::list_timetables))
        .route("/timetables", post(handlers::create_timetable))
        .route("/timetables/{timetable_id}", get(handlers::get_timetable))
        .route(
            "/timetables/{timetable_id}/classes",
            get(handlers::list_classes),
        )
        // Projections
        .route(
            "/timetables/{timetable_id}/grid",
            get(handlers::get_week_grid),
        )
        .route(
            "/timetables/{timetable_id}/month",
            get(handlers::get_month_view),
        )
        // Classes
        .route("/classes/{class_id}", get(handlers::get_class))
        .route("/classes", post(handlers::create_class))
        // Catalog
        .route("/courses", get(handlers::list_courses))
        .route("/courses", post(handlers::add_course))
        .route("/teachers", get(handlers::list_teachers))
        .route("/teachers", post(handlers::add_teacher));

    // Combine all routes
    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/v1", api_v1)
        // Structure payloads are small; anything bigger is a client bug.
        .layer(DefaultBodyLimit::max(2 * 1024 * 1024))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
