use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::fmt;

use super::MessageResponse;
use crate::services::CatalogError;

#[derive(Debug)]
pub enum ApiError {
    NotFound(String),

    DatabaseError(String),

    ValidationError(String),

    Conflict(String),

    InternalError(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound(msg) => write!(f, "Not found: {}", msg),
            Self::DatabaseError(msg) => write!(f, "Database error: {}", msg),
            Self::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            Self::Conflict(msg) => write!(f, "Conflict: {}", msg),
            Self::InternalError(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            Self::DatabaseError(msg) => {
                tracing::error!("Database error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
            Self::ValidationError(msg) => (StatusCode::BAD_REQUEST, msg),
            Self::Conflict(msg) => (StatusCode::CONFLICT, msg),
            Self::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };

        (status, Json(MessageResponse::new(message))).into_response()
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        Self::InternalError(err.to_string())
    }
}

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::NotFound { .. } => Self::NotFound(err.to_string()),
            CatalogError::Constraint(msg) => Self::Conflict(msg),
            CatalogError::Database(msg) => Self::DatabaseError(msg),
        }
    }
}

impl ApiError {
    pub fn not_found(resource: &str, id: impl fmt::Display) -> Self {
        Self::NotFound(format!("{} {} not found", resource, id))
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::ValidationError(msg.into())
    }

    /// Maps store constraint rejections to a client error. Used where the
    /// caller chose the referenced ids, e.g. when linking a film and an actor.
    pub fn from_write(err: CatalogError) -> Self {
        match err {
            CatalogError::Constraint(msg) => Self::ValidationError(msg),
            other => other.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn status_and_message(err: ApiError) -> (StatusCode, String) {
        let response = err.into_response();
        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        (status, json["message"].as_str().unwrap().to_string())
    }

    #[tokio::test]
    async fn test_catalog_errors_map_to_statuses() {
        let (status, message) =
            status_and_message(CatalogError::not_found("Film", 99).into()).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(message, "Film 99 not found");

        let (status, _) =
            status_and_message(CatalogError::Constraint("FOREIGN KEY".into()).into()).await;
        assert_eq!(status, StatusCode::CONFLICT);

        let (status, message) =
            status_and_message(CatalogError::Database("disk I/O error".into()).into()).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(message, "disk I/O error");
    }

    #[tokio::test]
    async fn test_write_path_turns_constraints_into_client_errors() {
        let (status, message) = status_and_message(ApiError::from_write(CatalogError::Constraint(
            "FOREIGN KEY constraint failed".into(),
        )))
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(message, "FOREIGN KEY constraint failed");

        let (status, _) =
            status_and_message(ApiError::from_write(CatalogError::not_found("Actor", 1))).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
