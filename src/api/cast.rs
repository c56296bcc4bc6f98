//! Film/actor association endpoints.
//!
//! Each association is reachable from both sides
//! (`/actor/{id}/film/{film_id}` and `/film/{id}/actor/{actor_id}`); the two
//! spellings share one implementation.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use std::sync::Arc;

use super::validation::{parse_id, validate_ids};
use super::{
    ApiError, ApiResponse, AppState, MessageResponse, ReplaceActorsRequest, ReplaceFilmsRequest,
    UpdatedResponse,
};
use crate::domain::{ActorId, FilmId};
use crate::models::actor::Actor;
use crate::models::film::Film;

async fn link(
    state: &AppState,
    actor_id: ActorId,
    film_id: FilmId,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    state
        .cast()
        .link(actor_id, film_id)
        .await
        .map_err(ApiError::from_write)?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new(format!(
            "Actor {} linked to film {}",
            actor_id, film_id
        ))),
    ))
}

async fn unlink(
    state: &AppState,
    actor_id: ActorId,
    film_id: FilmId,
) -> Result<Json<MessageResponse>, ApiError> {
    let removed = state.cast().unlink(actor_id, film_id).await?;
    if removed == 0 {
        return Err(ApiError::NotFound(format!(
            "No association between actor {} and film {}",
            actor_id, film_id
        )));
    }

    Ok(Json(MessageResponse::new(format!(
        "Actor {} unlinked from film {}",
        actor_id, film_id
    ))))
}

/// `POST /api/actor/{id}/film/{film_id}`
pub async fn link_actor_film(
    State(state): State<Arc<AppState>>,
    Path((actor_id, film_id)): Path<(String, String)>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let actor_id = ActorId::new(parse_id("actor", &actor_id)?);
    let film_id = FilmId::new(parse_id("film", &film_id)?);
    link(&state, actor_id, film_id).await
}

/// `POST /api/film/{id}/actor/{actor_id}`
pub async fn link_film_actor(
    State(state): State<Arc<AppState>>,
    Path((film_id, actor_id)): Path<(String, String)>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let film_id = FilmId::new(parse_id("film", &film_id)?);
    let actor_id = ActorId::new(parse_id("actor", &actor_id)?);
    link(&state, actor_id, film_id).await
}

/// `DELETE /api/actor/{id}/film/{film_id}`
pub async fn unlink_actor_film(
    State(state): State<Arc<AppState>>,
    Path((actor_id, film_id)): Path<(String, String)>,
) -> Result<Json<MessageResponse>, ApiError> {
    let actor_id = ActorId::new(parse_id("actor", &actor_id)?);
    let film_id = FilmId::new(parse_id("film", &film_id)?);
    unlink(&state, actor_id, film_id).await
}

/// `DELETE /api/film/{id}/actor/{actor_id}`
pub async fn unlink_film_actor(
    State(state): State<Arc<AppState>>,
    Path((film_id, actor_id)): Path<(String, String)>,
) -> Result<Json<MessageResponse>, ApiError> {
    let film_id = FilmId::new(parse_id("film", &film_id)?);
    let actor_id = ActorId::new(parse_id("actor", &actor_id)?);
    unlink(&state, actor_id, film_id).await
}

/// `GET /api/actor/{id}/films`
pub async fn list_actor_films(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Vec<Film>>>, ApiError> {
    let id = ActorId::new(parse_id("actor", &id)?);
    let films = state.cast().films_for_actor(id).await?;

    Ok(Json(ApiResponse::new(
        format!("Actor {} appears in {} films", id, films.len()),
        films,
    )))
}

/// `GET /api/film/{id}/actors`
pub async fn list_film_actors(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Vec<Actor>>>, ApiError> {
    let id = FilmId::new(parse_id("film", &id)?);
    let actors = state.cast().actors_for_film(id).await?;

    Ok(Json(ApiResponse::new(
        format!("Film {} has {} actors", id, actors.len()),
        actors,
    )))
}

/// `PUT /api/actor/{id}/films`
///
/// Replaces the actor's film list in one transaction. An unknown film id
/// leaves the previous list untouched.
pub async fn replace_actor_films(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(request): Json<ReplaceFilmsRequest>,
) -> Result<Json<UpdatedResponse>, ApiError> {
    let id = ActorId::new(parse_id("actor", &id)?);
    validate_ids("film", &request.film_ids)?;
    let film_ids = request.film_ids.into_iter().map(FilmId::new).collect();

    let updated_count = state
        .cast()
        .replace_films(id, film_ids)
        .await
        .map_err(ApiError::from_write)?;

    Ok(Json(UpdatedResponse {
        message: format!("Actor {} now appears in {} films", id, updated_count),
        updated_count,
    }))
}

/// `PUT /api/film/{id}/actors`
pub async fn replace_film_actors(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(request): Json<ReplaceActorsRequest>,
) -> Result<Json<UpdatedResponse>, ApiError> {
    let id = FilmId::new(parse_id("film", &id)?);
    validate_ids("actor", &request.actor_ids)?;
    let actor_ids = request.actor_ids.into_iter().map(ActorId::new).collect();

    let updated_count = state
        .cast()
        .replace_actors(id, actor_ids)
        .await
        .map_err(ApiError::from_write)?;

    Ok(Json(UpdatedResponse {
        message: format!("Film {} now has {} actors", id, updated_count),
        updated_count,
    }))
}
