//! # Genre Catalog Common Library
//!
//! Shared code for the genre catalog service:
//! - Domain model and command payloads
//! - Error taxonomy
//! - Configuration / data folder resolution

pub mod config;
pub mod error;
pub mod model;

pub use error::{Error, Result};
pub use model::{Genre, GenreSaveCommand, GenreUpdateCommand};
