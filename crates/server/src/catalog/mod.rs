//! External movie catalog client.
//!
//! # Architecture
//!
//! - Plain REST calls via `reqwest`, JSON responses deserialized with `serde`
//! - The catalog is the source of truth - no local sync, no caching, no
//!   retry; every call goes upstream and the transport's own failure is the
//!   only failure signal
//! - The API key rides in the query string, which is the catalog's own
//!   authentication scheme
//!
//! # Example
//!
//! ```rust,ignore
//! use marquee_server::catalog::{CatalogClient, Category};
//!
//! let catalog = CatalogClient::new(&config.catalog);
//!
//! let page = catalog.search("arrival").await?;
//! let movie = catalog.details(MovieId::new(329865)).await?;
//! let popular = catalog.by_category(Category::Popular, 1).await?;
//! ```

mod client;

pub use client::{CatalogClient, Category, PosterSize};

use thiserror::Error;

/// Errors that can occur when talking to the external catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// No API key configured; the call was not attempted.
    #[error("catalog API key is not configured")]
    MissingApiKey,

    /// HTTP request failed.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// Catalog returned a non-success status.
    #[error("catalog returned status {0}")]
    Status(reqwest::StatusCode),

    /// Response body did not parse.
    #[error("response parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// A request URL could not be built.
    #[error("invalid catalog url: {0}")]
    Url(#[from] url::ParseError),
}
