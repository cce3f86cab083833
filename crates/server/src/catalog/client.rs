//! Catalog API client implementation.

use std::sync::Arc;

use secrecy::{ExposeSecret, SecretString};
use url::Url;

use marquee_core::{Movie, MovieId, MoviePage};

use crate::catalog::CatalogError;
use crate::config::CatalogConfig;

/// A fixed catalog listing category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// Currently popular titles.
    Popular,
    /// Highest rated titles.
    TopRated,
    /// In theaters now.
    NowPlaying,
    /// Announced for upcoming release.
    Upcoming,
}

impl Category {
    /// The catalog's path segment for this category.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Popular => "popular",
            Self::TopRated => "top_rated",
            Self::NowPlaying => "now_playing",
            Self::Upcoming => "upcoming",
        }
    }

    /// Parse a category from its path segment.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "popular" => Some(Self::Popular),
            "top_rated" => Some(Self::TopRated),
            "now_playing" => Some(Self::NowPlaying),
            "upcoming" => Some(Self::Upcoming),
            _ => None,
        }
    }
}

/// Poster image width served by the catalog's image CDN.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PosterSize {
    /// Thumbnail width.
    W200,
    /// Detail-view width.
    #[default]
    W500,
}

impl PosterSize {
    const fn as_str(self) -> &'static str {
        match self {
            Self::W200 => "w200",
            Self::W500 => "w500",
        }
    }
}

/// Client for the external movie catalog API.
///
/// Cheaply cloneable; all state lives behind an `Arc`. Calls are not
/// deduplicated, cached, or retried, and carry no timeout beyond the
/// transport's own.
#[derive(Clone)]
pub struct CatalogClient {
    inner: Arc<CatalogClientInner>,
}

struct CatalogClientInner {
    client: reqwest::Client,
    base_url: String,
    image_base_url: String,
    api_key: Option<SecretString>,
}

impl CatalogClient {
    /// Create a new catalog client.
    #[must_use]
    pub fn new(config: &CatalogConfig) -> Self {
        Self {
            inner: Arc::new(CatalogClientInner {
                client: reqwest::Client::new(),
                base_url: config.base_url.as_str().trim_end_matches('/').to_owned(),
                image_base_url: config
                    .image_base_url
                    .as_str()
                    .trim_end_matches('/')
                    .to_owned(),
                api_key: config.api_key.clone(),
            }),
        }
    }

    /// Execute a GET against the catalog and deserialize the JSON body.
    async fn fetch<T>(&self, path: &str, params: &[(&str, String)]) -> Result<T, CatalogError>
    where
        T: serde::de::DeserializeOwned,
    {
        let api_key = self
            .inner
            .api_key
            .as_ref()
            .ok_or(CatalogError::MissingApiKey)?;

        let mut url = Url::parse(&format!("{}/{path}", self.inner.base_url))?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("api_key", api_key.expose_secret());
            for (name, value) in params {
                pairs.append_pair(name, value);
            }
        }

        let response = self.inner.client.get(url).send().await?;
        let status = response.status();

        // Body as text first for better error diagnostics.
        let text = response.text().await?;

        if !status.is_success() {
            tracing::error!(
                %status,
                body = %text.chars().take(500).collect::<String>(),
                "catalog returned non-success status"
            );
            return Err(CatalogError::Status(status));
        }

        serde_json::from_str(&text).map_err(|error| {
            tracing::error!(
                %error,
                body = %text.chars().take(500).collect::<String>(),
                "failed to parse catalog response"
            );
            CatalogError::Parse(error)
        })
    }

    /// Search the catalog by title.
    ///
    /// A blank or whitespace-only query returns an empty page without
    /// touching the network.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] if the upstream call does not succeed.
    pub async fn search(&self, query: &str) -> Result<MoviePage, CatalogError> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(MoviePage::empty());
        }

        self.fetch("search/movie", &[("query", query.to_owned())])
            .await
    }

    /// Look up one movie's details.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] if the upstream call does not succeed.
    pub async fn details(&self, id: MovieId) -> Result<Movie, CatalogError> {
        self.fetch(&format!("movie/{id}"), &[]).await
    }

    /// List a fixed category, one page at a time.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] if the upstream call does not succeed.
    pub async fn by_category(
        &self,
        category: Category,
        page: u32,
    ) -> Result<MoviePage, CatalogError> {
        self.fetch(
            &format!("movie/{}", category.as_str()),
            &[("page", page.to_string())],
        )
        .await
    }

    /// Image CDN URL for a poster path, or `None` for a missing path.
    #[must_use]
    pub fn poster_url(&self, poster_path: Option<&str>, size: PosterSize) -> Option<Url> {
        let path = poster_path.filter(|p| !p.is_empty())?;
        let separator = if path.starts_with('/') { "" } else { "/" };

        Url::parse(&format!(
            "{}/{}{separator}{path}",
            self.inner.image_base_url,
            size.as_str()
        ))
        .ok()
    }
}
