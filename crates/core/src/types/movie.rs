//! Movie snapshot types.
//!
//! [`Movie`] mirrors the subset of catalog fields the application keeps:
//! list endpoints omit `runtime`, detail lookups include it. A favorite
//! stores the snapshot taken at the moment of favoriting together with the
//! user's annotation.

use serde::{Deserialize, Serialize};

use crate::types::id::MovieId;
use crate::types::rating::Rating;

/// A movie as returned by the external catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    /// Catalog-assigned identifier.
    pub id: MovieId,
    /// Display title.
    pub title: String,
    /// Plot summary.
    pub overview: String,
    /// Release date (`YYYY-MM-DD`, may be empty for unreleased titles).
    #[serde(default)]
    pub release_date: String,
    /// Poster image path, relative to the catalog's image CDN.
    pub poster_path: Option<String>,
    /// Backdrop image path, relative to the catalog's image CDN.
    pub backdrop_path: Option<String>,
    /// Runtime in minutes. Only present on detail lookups.
    pub runtime: Option<u32>,
    /// Average catalog vote, 0-10 scale.
    pub vote_average: Option<f64>,
}

/// One page of catalog results.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MoviePage {
    /// Movies on this page.
    pub results: Vec<Movie>,
    /// Total matching movies across all pages.
    pub total_results: u64,
    /// Total page count.
    pub total_pages: u64,
}

impl MoviePage {
    /// An empty result page.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }
}

/// A favorited movie: the snapshot plus the user's rating and note.
///
/// Serializes flat (snapshot fields alongside `personal_rating` and `note`),
/// which is the persisted favorites-array element shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FavoriteEntry {
    /// Snapshot of the movie at the time it was favorited.
    #[serde(flatten)]
    pub movie: Movie,
    /// The user's 1-5 rating.
    pub personal_rating: Rating,
    /// Free-text note.
    #[serde(default)]
    pub note: String,
}

impl FavoriteEntry {
    /// The id of the favorited movie.
    #[must_use]
    pub const fn movie_id(&self) -> MovieId {
        self.movie.id
    }
}
