//! genre-svc library - Genre catalog microservice
//!
//! CRUD REST resource for music genres backed by a repository abstraction.

use axum::Router;
use std::sync::Arc;

use crate::repo::GenreRepository;

pub mod api;
pub mod db;
pub mod listing;
pub mod repo;

/// Application state shared across HTTP handlers
///
/// Holds only the repository; all mutable state lives behind it.
#[derive(Clone)]
pub struct AppState {
    /// Persistence backend, injected at construction time
    pub repo: Arc<dyn GenreRepository>,
}

impl AppState {
    /// Create new application state with an explicit repository
    pub fn new(repo: Arc<dyn GenreRepository>) -> Self {
        Self { repo }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::get;

    Router::new()
        .route(
            "/genres",
            get(api::list_genres)
                .post(api::create_genre)
                .put(api::update_genre),
        )
        .route("/genres/list", get(api::list_genres))
        .route(
            "/genres/:id",
            get(api::get_genre).delete(api::delete_genre),
        )
        .merge(api::health_routes())
        .with_state(state)
}
