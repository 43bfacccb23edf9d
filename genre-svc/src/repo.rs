//! Persistence abstraction for genres
//!
//! Handlers are polymorphic over this capability set; the storage backend
//! is chosen at construction time (see [`crate::db::SqliteGenreRepository`]).

use async_trait::async_trait;
use genre_common::{Genre, Result};

use crate::listing::ListParams;

/// Persistence operations for the genre collection
#[async_trait]
pub trait GenreRepository: Send + Sync {
    /// Persist a new genre and return it with its assigned id
    async fn create(&self, name: &str) -> Result<Genre>;

    /// Look up a genre by id
    async fn find_by_id(&self, id: i64) -> Result<Option<Genre>>;

    /// Replace the name of an existing genre; None if the id is unknown
    async fn update(&self, id: i64, name: &str) -> Result<Option<Genre>>;

    /// Remove a genre if present (no error for unknown ids)
    async fn delete(&self, id: i64) -> Result<()>;

    /// List genres: sorted, then offset, then capped
    async fn list(&self, params: &ListParams) -> Result<Vec<Genre>>;
}
