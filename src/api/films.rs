//! Film endpoints.
//!
//! Business rules live in [`FilmService`](crate::services::FilmService); the
//! handlers parse ids, validate payloads and shape the JSON envelopes.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use std::sync::Arc;

use super::validation::{parse_id, validate_film_patch, validate_new_film};
use super::{
    ApiError, ApiResponse, AppState, CreatedResponse, DeletedResponse, FilmQuery,
    UpdatedResponse,
};
use crate::domain::FilmId;
use crate::models::film::{Film, FilmDetail, FilmFilter, FilmPatch, NewFilm};

/// `GET /api/film[?title=sub]`
pub async fn list_films(
    State(state): State<Arc<AppState>>,
    Query(query): Query<FilmQuery>,
) -> Result<Json<ApiResponse<Vec<Film>>>, ApiError> {
    let filter = FilmFilter { title: query.title };
    let films = state.films().list_films(filter).await?;

    Ok(Json(ApiResponse::new(
        format!("Found {} films", films.len()),
        films,
    )))
}

/// `GET /api/film/{id}`
///
/// The film row plus an `actors` array.
pub async fn get_film(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<FilmDetail>>, ApiError> {
    let id = FilmId::new(parse_id("film", &id)?);
    let film = state.films().get_film(id).await?;

    Ok(Json(ApiResponse::new(format!("Film {}", id), film)))
}

/// `POST /api/film`
pub async fn create_film(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<NewFilm>,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    validate_new_film(&payload)?;

    let id = state.films().create_film(payload).await?;
    tracing::info!(film_id = %id, "Film created");

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            message: format!("Film {} created", id),
            id: id.value(),
        }),
    ))
}

/// `PUT /api/film/{id}`
pub async fn update_film(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(patch): Json<FilmPatch>,
) -> Result<Json<UpdatedResponse>, ApiError> {
    let id = FilmId::new(parse_id("film", &id)?);
    validate_film_patch(&patch)?;

    let updated_count = state.films().update_film(id, patch).await?;
    if updated_count == 0 {
        return Err(ApiError::not_found("Film", id));
    }

    Ok(Json(UpdatedResponse {
        message: format!("Film {} updated", id),
        updated_count,
    }))
}

/// `DELETE /api/film/{id}`
///
/// Cast rows go with the film through the link table's cascade.
pub async fn delete_film(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<DeletedResponse>, ApiError> {
    let id = FilmId::new(parse_id("film", &id)?);

    let deleted_count = state.films().delete_film(id).await?;
    if deleted_count == 0 {
        return Err(ApiError::not_found("Film", id));
    }

    tracing::info!(film_id = %id, "Film deleted");
    Ok(Json(DeletedResponse {
        message: format!("Film {} deleted", id),
        deleted_count,
    }))
}
