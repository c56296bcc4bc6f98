use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use std::sync::Arc;

use super::validation::{parse_id, validate_actor_patch, validate_new_actor};
use super::{ApiError, ApiResponse, AppState, CreatedResponse, DeletedResponse, UpdatedResponse};
use crate::domain::ActorId;
use crate::models::actor::{Actor, ActorDetail, ActorPatch, NewActor};

/// `GET /api/actor`
pub async fn list_actors(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Vec<Actor>>>, ApiError> {
    let actors = state.actors().list_actors().await?;

    Ok(Json(ApiResponse::new(
        format!("Found {} actors", actors.len()),
        actors,
    )))
}

/// `GET /api/actor/{id}`
///
/// The actor row plus a `films` array.
pub async fn get_actor(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<ActorDetail>>, ApiError> {
    let id = ActorId::new(parse_id("actor", &id)?);
    let actor = state.actors().get_actor(id).await?;

    Ok(Json(ApiResponse::new(format!("Actor {}", id), actor)))
}

/// `POST /api/actor`
pub async fn create_actor(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<NewActor>,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    validate_new_actor(&payload)?;

    let id = state.actors().create_actor(payload).await?;
    tracing::info!(actor_id = %id, "Actor created");

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            message: format!("Actor {} created", id),
            id: id.value(),
        }),
    ))
}

/// `PUT /api/actor/{id}`
pub async fn update_actor(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(patch): Json<ActorPatch>,
) -> Result<Json<UpdatedResponse>, ApiError> {
    let id = ActorId::new(parse_id("actor", &id)?);
    validate_actor_patch(&patch)?;

    let updated_count = state.actors().update_actor(id, patch).await?;
    if updated_count == 0 {
        return Err(ApiError::not_found("Actor", id));
    }

    Ok(Json(UpdatedResponse {
        message: format!("Actor {} updated", id),
        updated_count,
    }))
}

/// `DELETE /api/actor/{id}`
pub async fn delete_actor(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<DeletedResponse>, ApiError> {
    let id = ActorId::new(parse_id("actor", &id)?);

    let deleted_count = state.actors().delete_actor(id).await?;
    if deleted_count == 0 {
        return Err(ApiError::not_found("Actor", id));
    }

    tracing::info!(actor_id = %id, "Actor deleted");
    Ok(Json(DeletedResponse {
        message: format!("Actor {} deleted", id),
        deleted_count,
    }))
}
