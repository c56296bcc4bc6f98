use axum::{
    Json,
    extract::{Path, State},
};
use std::sync::Arc;

use super::validation::parse_id;
use super::{ApiError, ApiResponse, AppState};
use crate::domain::CategoryId;
use crate::models::category::Category;

/// `GET /api/category`
pub async fn list_categories(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Vec<Category>>>, ApiError> {
    let categories = state.categories().list_categories().await?;

    Ok(Json(ApiResponse::new(
        format!("Found {} categories", categories.len()),
        categories,
    )))
}

/// `GET /api/category/{id}`
pub async fn get_category(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Category>>, ApiError> {
    let id = CategoryId::new(parse_id("category", &id)?);
    let category = state.categories().get_category(id).await?;

    Ok(Json(ApiResponse::new(
        format!("Category {}", category.name),
        category,
    )))
}
