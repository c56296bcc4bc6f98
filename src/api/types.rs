//! JSON envelopes shared by the HTTP endpoints and the client adapter.

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub message: String,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn new(message: impl Into<String>, data: T) -> Self {
        Self {
            message: message.into(),
            data,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreatedResponse {
    pub message: String,
    pub id: i32,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatedResponse {
    pub message: String,
    pub updated_count: u64,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletedResponse {
    pub message: String,
    pub deleted_count: u64,
}

#[derive(Debug, Default, Deserialize)]
pub struct FilmQuery {
    pub title: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ReplaceFilmsRequest {
    pub film_ids: Vec<i32>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ReplaceActorsRequest {
    pub actor_ids: Vec<i32>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SystemStatus {
    pub version: String,
    pub uptime: u64,
    pub database: bool,
    pub films: u64,
    pub actors: u64,
    pub categories: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_fields_are_camel_case() {
        let updated = serde_json::to_value(UpdatedResponse {
            message: "ok".to_string(),
            updated_count: 1,
        })
        .unwrap();
        assert_eq!(updated["updatedCount"], 1);

        let deleted = serde_json::to_value(DeletedResponse {
            message: "ok".to_string(),
            deleted_count: 0,
        })
        .unwrap();
        assert_eq!(deleted["deletedCount"], 0);
    }
}
