//! Favorites store: per-user saved movies with ratings and notes.
//!
//! Each user's collection lives under its own storage key (namespaced by
//! user id) as a JSON array in first-favorited order. Every operation is
//! gated on the session store's current identity: without a session, reads
//! yield an empty view and writes report failure. Failures are silent
//! booleans so callers decide what (if anything) to tell the user.

use std::sync::Arc;

use marquee_core::{FavoriteEntry, MovieId, UserId};

use crate::services::session::SessionStore;
use crate::storage::{KeyValue, keys};

/// Per-user movie id -> favorite entry collection.
#[derive(Clone)]
pub struct FavoritesStore {
    storage: Arc<dyn KeyValue>,
    session: SessionStore,
}

impl FavoritesStore {
    /// Create a favorites store over a storage handle, gated on `session`.
    #[must_use]
    pub fn new(storage: Arc<dyn KeyValue>, session: SessionStore) -> Self {
        Self { storage, session }
    }

    /// The id of the currently logged-in user, if any.
    fn current_user(&self) -> Option<UserId> {
        self.session.current().map(|identity| identity.user.id)
    }

    /// Load a user's collection; missing or corrupt data reads empty.
    fn load(&self, user_id: &UserId) -> Vec<FavoriteEntry> {
        let text = match self.storage.get(&keys::favorites(user_id)) {
            Ok(Some(text)) => text,
            Ok(None) => return Vec::new(),
            Err(error) => {
                tracing::warn!(%error, "failed to read favorites, treating as empty");
                return Vec::new();
            }
        };

        serde_json::from_str(&text).unwrap_or_else(|error| {
            tracing::warn!(%error, "favorites collection is malformed, treating as empty");
            Vec::new()
        })
    }

    /// Persist a user's collection; `false` (logged) on failure.
    fn persist(&self, user_id: &UserId, entries: &[FavoriteEntry]) -> bool {
        let text = match serde_json::to_string(entries) {
            Ok(text) => text,
            Err(error) => {
                tracing::warn!(%error, "failed to serialize favorites");
                return false;
            }
        };

        match self.storage.set(&keys::favorites(user_id), &text) {
            Ok(()) => true,
            Err(error) => {
                tracing::warn!(%error, "failed to persist favorites");
                false
            }
        }
    }

    /// All favorites for the current user, in first-favorited order.
    ///
    /// Empty without a session, regardless of what is stored.
    #[must_use]
    pub fn list(&self) -> Vec<FavoriteEntry> {
        match self.current_user() {
            Some(user_id) => self.load(&user_id),
            None => Vec::new(),
        }
    }

    /// Insert or replace an entry, keyed by movie id.
    ///
    /// Returns `false` without a session or if the collection cannot be
    /// persisted. Replacing keeps the entry's position.
    #[must_use]
    pub fn upsert(&self, entry: FavoriteEntry) -> bool {
        let Some(user_id) = self.current_user() else {
            return false;
        };

        let mut entries = self.load(&user_id);
        match entries.iter_mut().find(|e| e.movie_id() == entry.movie_id()) {
            Some(existing) => *existing = entry,
            None => entries.push(entry),
        }

        self.persist(&user_id, &entries)
    }

    /// Remove the entry for `movie_id`.
    ///
    /// Returns `false` without a session. Removing an absent id is a no-op
    /// success.
    #[must_use]
    pub fn remove(&self, movie_id: MovieId) -> bool {
        let Some(user_id) = self.current_user() else {
            return false;
        };

        let mut entries = self.load(&user_id);
        entries.retain(|e| e.movie_id() != movie_id);

        self.persist(&user_id, &entries)
    }

    /// Whether `movie_id` is favorited. `false` without a session.
    #[must_use]
    pub fn contains(&self, movie_id: MovieId) -> bool {
        self.get(movie_id).is_some()
    }

    /// The entry for `movie_id`, if present. `None` without a session.
    #[must_use]
    pub fn get(&self, movie_id: MovieId) -> Option<FavoriteEntry> {
        let user_id = self.current_user()?;
        self.load(&user_id)
            .into_iter()
            .find(|e| e.movie_id() == movie_id)
    }
}
