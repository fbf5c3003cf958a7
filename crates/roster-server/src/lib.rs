//! Roster HTTP/JSON API.
//!
//! This crate serves the staffing service over standard REST endpoints so
//! any HTTP client can manage engineers, projects, and assignments.

pub mod config;
pub mod demo;
pub mod error;
pub mod json;
pub mod routes;

pub use config::{Args, ServerConfig};
pub use error::AppError;

use std::sync::Arc;

use axum::Router;
use roster_core::Staffing;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Application state shared across all routes.
#[derive(Clone)]
pub struct AppState {
    /// Staffing service over the document store.
    pub staffing: Arc<Staffing>,
}

impl AppState {
    /// Create new application state.
    pub fn new(staffing: Staffing) -> Self {
        Self {
            staffing: Arc::new(staffing),
        }
    }
}

/// Create the router with all routes.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(routes::health::routes())
        .merge(routes::engineers::routes())
        .merge(routes::projects::routes())
        .merge(routes::assignments::routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
