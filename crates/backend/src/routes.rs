use axum::{
    middleware,
    routing::{delete, get},
    Router,
};

use crate::{handlers, system};

/// All application routes
pub fn configure_routes() -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // SYSTEM AUTH (protected)
        // ========================================
        .route(
            "/api/system/auth/me",
            get(system::handlers::auth::current_user)
                .layer(middleware::from_fn(system::auth::middleware::require_auth)),
        )
        // ========================================
        // A001 SAVED SEARCHES (protected, scoped to the caller)
        // ========================================
        .route(
            "/api/search",
            get(handlers::a001_saved_search::list)
                .post(handlers::a001_saved_search::create)
                .layer(middleware::from_fn(system::auth::middleware::require_auth)),
        )
        .route(
            "/api/search/:id",
            delete(handlers::a001_saved_search::delete)
                .layer(middleware::from_fn(system::auth::middleware::require_auth)),
        )
        // ========================================
        // A002 JOB POSTINGS (public)
        // ========================================
        .route("/api/jobs", get(handlers::a002_job_posting::search))
}
