//! Genre resource handlers
//!
//! Each handler validates its input up front, delegates to the repository,
//! and maps the outcome to an HTTP status. Validation failures are rejected
//! before any repository access.

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use genre_common::{Error, Genre, GenreSaveCommand, GenreUpdateCommand};
use serde_json::json;

use crate::listing::ListQuery;
use crate::AppState;

/// POST /genres
///
/// Persists a new genre and reports its URI in the Location header.
/// Duplicate names are allowed; blank names are not.
pub async fn create_genre(
    State(state): State<AppState>,
    Json(command): Json<GenreSaveCommand>,
) -> Result<Response, GenreApiError> {
    if command.name.trim().is_empty() {
        return Err(GenreApiError::BlankName);
    }

    let genre = state.repo.create(&command.name).await?;

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, genre_location(genre.id))],
        Json(genre),
    )
        .into_response())
}

/// GET /genres/:id
pub async fn get_genre(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Genre>, GenreApiError> {
    match state.repo.find_by_id(id).await? {
        Some(genre) => Ok(Json(genre)),
        None => Err(GenreApiError::NotFound(id)),
    }
}

/// PUT /genres
///
/// Replaces the name of an existing genre. Responds 204 with the resource
/// URI echoed in the Location header, so callers can re-derive the id.
pub async fn update_genre(
    State(state): State<AppState>,
    Json(command): Json<GenreUpdateCommand>,
) -> Result<Response, GenreApiError> {
    if command.name.trim().is_empty() {
        return Err(GenreApiError::BlankName);
    }

    match state.repo.update(command.id, &command.name).await? {
        Some(genre) => Ok((
            StatusCode::NO_CONTENT,
            [(header::LOCATION, genre_location(genre.id))],
        )
            .into_response()),
        None => Err(GenreApiError::NotFound(command.id)),
    }
}

/// DELETE /genres/:id
///
/// Always 204, whether or not the id existed (idempotent cleanup).
pub async fn delete_genre(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, GenreApiError> {
    state.repo.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /genres/list (also served at GET /genres)
///
/// Returns the genre collection sorted, offset, and capped per the query
/// parameters. Unrecognized sort/order values and negative max/offset are
/// rejected with 400 before the repository is consulted.
pub async fn list_genres(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<Genre>>, GenreApiError> {
    let params = query.validate()?;
    let genres = state.repo.list(&params).await?;
    Ok(Json(genres))
}

fn genre_location(id: i64) -> String {
    format!("/genres/{}", id)
}

/// Genre API errors
#[derive(Debug)]
pub enum GenreApiError {
    BlankName,
    InvalidQuery(String),
    NotFound(i64),
    DatabaseError(String),
}

impl From<Error> for GenreApiError {
    fn from(err: Error) -> Self {
        match err {
            Error::InvalidInput(msg) => GenreApiError::InvalidQuery(msg),
            Error::Database(e) => GenreApiError::DatabaseError(e.to_string()),
            other => GenreApiError::DatabaseError(other.to_string()),
        }
    }
}

impl IntoResponse for GenreApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            GenreApiError::BlankName => {
                (StatusCode::BAD_REQUEST, "Genre name must not be blank".to_string())
            }
            GenreApiError::InvalidQuery(msg) => (StatusCode::BAD_REQUEST, msg),
            GenreApiError::NotFound(id) => {
                (StatusCode::NOT_FOUND, format!("Genre not found: {}", id))
            }
            GenreApiError::DatabaseError(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, format!("Database error: {}", msg))
            }
        };

        let body = Json(json!({
            "error": message,
        }));

        (status, body).into_response()
    }
}
