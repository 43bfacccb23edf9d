//! Domain model and command payloads

use serde::{Deserialize, Serialize};

/// A persisted music genre
///
/// `id` is server-assigned and immutable once set; `name` is non-empty
/// and mutable only through the update operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Genre {
    pub id: i64,
    pub name: String,
}

/// Creation payload: carries only the name, the id is assigned by storage
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenreSaveCommand {
    pub name: String,
}

/// Update payload: identifies the genre and the replacement name
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenreUpdateCommand {
    pub id: i64,
    pub name: String,
}
