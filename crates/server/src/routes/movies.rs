//! Movie proxy route handlers.

use axum::{
    Json,
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use tracing::instrument;

use marquee_core::MovieId;

use crate::catalog::Category;
use crate::error::{AppError, Result};
use crate::state::AppState;

/// Movie proxy query parameters.
///
/// Exactly one of `id` / `query` / `category` selects the operation, in
/// that precedence order; `page` only applies to category listings.
#[derive(Debug, Deserialize)]
pub struct MoviesQuery {
    /// Search query.
    pub query: Option<String>,
    /// Numeric movie identifier for a detail lookup.
    pub id: Option<u64>,
    /// Listing category (`popular`, `top_rated`, `now_playing`, `upcoming`).
    pub category: Option<String>,
    /// Page number for category listings (positive, default 1).
    pub page: Option<u32>,
}

/// Movie proxy endpoint.
///
/// Forwards to the external catalog and returns its JSON body: a single
/// movie for `id`, a result page for `query` or `category`.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(params): Query<MoviesQuery>,
) -> Result<Response> {
    if let Some(id) = params.id {
        let movie = state.catalog().details(MovieId::new(id)).await?;
        return Ok(Json(movie).into_response());
    }

    if let Some(query) = params.query.as_deref() {
        let page = state.catalog().search(query).await?;
        return Ok(Json(page).into_response());
    }

    if let Some(category) = params.category.as_deref() {
        let category = Category::parse(category)
            .ok_or_else(|| AppError::BadRequest(format!("Unknown category: {category}")))?;

        let page_number = params.page.unwrap_or(1);
        if page_number == 0 {
            return Err(AppError::BadRequest(
                "Page must be a positive integer".to_string(),
            ));
        }

        let page = state.catalog().by_category(category, page_number).await?;
        return Ok(Json(page).into_response());
    }

    Err(AppError::BadRequest(
        "Missing query, id, or category parameter".to_string(),
    ))
}
