//! HTTP API handlers for genre-svc

pub mod genres;
pub mod health;

pub use genres::{create_genre, delete_genre, get_genre, list_genres, update_genre};
pub use health::health_routes;
