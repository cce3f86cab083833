//! HTTP route handlers for the proxy surface.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                 - Health check (in main)
//!
//! # Movie proxy
//! GET  /api/movies?query=...            - Search the catalog
//! GET  /api/movies?id=...               - Movie detail lookup
//! GET  /api/movies?category=...&page=N  - Category listing
//! ```
//!
//! The proxy is the only external surface; the persistence layer
//! ([`crate::services`]) is consumed in-process, not over HTTP.

pub mod movies;

use axum::{Router, routing::get};

use crate::state::AppState;

/// Create all routes for the proxy surface.
pub fn routes() -> Router<AppState> {
    Router::new().route("/api/movies", get(movies::index))
}
