//! HTTP adapter for a running catalog API.
//!
//! Every call goes through one shared [`reqwest::Client`]. Non-2xx responses
//! become [`ClientError::Http`] carrying the server's `message`.

use std::time::Duration;

use reqwest::{Client, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;
use url::Url;

use crate::api::types::{
    ApiResponse, CreatedResponse, DeletedResponse, MessageResponse, ReplaceActorsRequest,
    ReplaceFilmsRequest, SystemStatus, UpdatedResponse,
};
use crate::config::ClientConfig;
use crate::models::actor::{Actor, ActorDetail, ActorPatch, NewActor};
use crate::models::category::Category;
use crate::models::film::{Film, FilmDetail, FilmPatch, NewFilm};

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl ClientError {
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::Http { status: 404, .. })
    }
}

#[derive(Clone)]
pub struct CatalogClient {
    client: Client,
    base_url: Url,
}

impl CatalogClient {
    /// Builds a client for the API rooted at `base_url`, e.g.
    /// `http://localhost:8000`.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ClientError> {
        let mut base_url = Url::parse(base_url)?;
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let client = Client::builder()
            .user_agent(concat!("cinecat/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;

        Ok(Self { client, base_url })
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self, ClientError> {
        Self::new(
            &config.base_url,
            Duration::from_secs(config.request_timeout_seconds),
        )
    }

    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url, ClientError> {
        Ok(self.base_url.join(&format!("api/{path}"))?)
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response.json().await?);
        }

        let body = response.text().await?;
        let message = serde_json::from_str::<MessageResponse>(&body)
            .map(|m| m.message)
            .unwrap_or(body);

        Err(ClientError::Http {
            status: status.as_u16(),
            message,
        })
    }

    async fn get<T: DeserializeOwned>(&self, url: Url) -> Result<T, ClientError> {
        debug!(%url, "GET");
        let response = self.client.get(url).send().await?;
        Self::decode(response).await
    }

    async fn send_json<B: Serialize + Sync, T: DeserializeOwned>(
        &self,
        method: reqwest::Method,
        url: Url,
        body: &B,
    ) -> Result<T, ClientError> {
        debug!(%url, %method, "sending JSON body");
        let response = self.client.request(method, url).json(body).send().await?;
        Self::decode(response).await
    }

    async fn send_empty<T: DeserializeOwned>(
        &self,
        method: reqwest::Method,
        url: Url,
    ) -> Result<T, ClientError> {
        debug!(%url, %method, "sending request");
        let response = self.client.request(method, url).send().await?;
        Self::decode(response).await
    }

    pub async fn list_films(&self, title: Option<&str>) -> Result<Vec<Film>, ClientError> {
        let mut url = self.endpoint("film")?;
        if let Some(title) = title {
            url.query_pairs_mut().append_pair("title", title);
        }

        let response: ApiResponse<Vec<Film>> = self.get(url).await?;
        Ok(response.data)
    }

    pub async fn get_film(&self, id: i32) -> Result<FilmDetail, ClientError> {
        let response: ApiResponse<FilmDetail> =
            self.get(self.endpoint(&format!("film/{id}"))?).await?;
        Ok(response.data)
    }

    /// Returns the id assigned to the new film.
    pub async fn create_film(&self, film: &NewFilm) -> Result<i32, ClientError> {
        let response: CreatedResponse = self
            .send_json(reqwest::Method::POST, self.endpoint("film")?, film)
            .await?;
        Ok(response.id)
    }

    pub async fn update_film(&self, id: i32, patch: &FilmPatch) -> Result<u64, ClientError> {
        let response: UpdatedResponse = self
            .send_json(
                reqwest::Method::PUT,
                self.endpoint(&format!("film/{id}"))?,
                patch,
            )
            .await?;
        Ok(response.updated_count)
    }

    pub async fn delete_film(&self, id: i32) -> Result<u64, ClientError> {
        let response: DeletedResponse = self
            .send_empty(
                reqwest::Method::DELETE,
                self.endpoint(&format!("film/{id}"))?,
            )
            .await?;
        Ok(response.deleted_count)
    }

    pub async fn list_actors(&self) -> Result<Vec<Actor>, ClientError> {
        let response: ApiResponse<Vec<Actor>> = self.get(self.endpoint("actor")?).await?;
        Ok(response.data)
    }

    pub async fn get_actor(&self, id: i32) -> Result<ActorDetail, ClientError> {
        let response: ApiResponse<ActorDetail> =
            self.get(self.endpoint(&format!("actor/{id}"))?).await?;
        Ok(response.data)
    }

    pub async fn create_actor(&self, actor: &NewActor) -> Result<i32, ClientError> {
        let response: CreatedResponse = self
            .send_json(reqwest::Method::POST, self.endpoint("actor")?, actor)
            .await?;
        Ok(response.id)
    }

    pub async fn update_actor(&self, id: i32, patch: &ActorPatch) -> Result<u64, ClientError> {
        let response: UpdatedResponse = self
            .send_json(
                reqwest::Method::PUT,
                self.endpoint(&format!("actor/{id}"))?,
                patch,
            )
            .await?;
        Ok(response.updated_count)
    }

    pub async fn delete_actor(&self, id: i32) -> Result<u64, ClientError> {
        let response: DeletedResponse = self
            .send_empty(
                reqwest::Method::DELETE,
                self.endpoint(&format!("actor/{id}"))?,
            )
            .await?;
        Ok(response.deleted_count)
    }

    pub async fn list_categories(&self) -> Result<Vec<Category>, ClientError> {
        let response: ApiResponse<Vec<Category>> = self.get(self.endpoint("category")?).await?;
        Ok(response.data)
    }

    pub async fn get_category(&self, id: i32) -> Result<Category, ClientError> {
        let response: ApiResponse<Category> =
            self.get(self.endpoint(&format!("category/{id}"))?).await?;
        Ok(response.data)
    }

    pub async fn films_for_actor(&self, actor_id: i32) -> Result<Vec<Film>, ClientError> {
        let response: ApiResponse<Vec<Film>> = self
            .get(self.endpoint(&format!("actor/{actor_id}/films"))?)
            .await?;
        Ok(response.data)
    }

    pub async fn actors_for_film(&self, film_id: i32) -> Result<Vec<Actor>, ClientError> {
        let response: ApiResponse<Vec<Actor>> = self
            .get(self.endpoint(&format!("film/{film_id}/actors"))?)
            .await?;
        Ok(response.data)
    }

    /// Links an actor to a film and returns the server's message.
    pub async fn link(&self, actor_id: i32, film_id: i32) -> Result<String, ClientError> {
        let response: MessageResponse = self
            .send_empty(
                reqwest::Method::POST,
                self.endpoint(&format!("actor/{actor_id}/film/{film_id}"))?,
            )
            .await?;
        Ok(response.message)
    }

    /// Removes the association. A missing pair is reported as HTTP 404.
    pub async fn unlink(&self, actor_id: i32, film_id: i32) -> Result<String, ClientError> {
        let response: MessageResponse = self
            .send_empty(
                reqwest::Method::DELETE,
                self.endpoint(&format!("actor/{actor_id}/film/{film_id}"))?,
            )
            .await?;
        Ok(response.message)
    }

    pub async fn replace_films(&self, actor_id: i32, film_ids: &[i32]) -> Result<u64, ClientError> {
        let body = ReplaceFilmsRequest {
            film_ids: film_ids.to_vec(),
        };
        let response: UpdatedResponse = self
            .send_json(
                reqwest::Method::PUT,
                self.endpoint(&format!("actor/{actor_id}/films"))?,
                &body,
            )
            .await?;
        Ok(response.updated_count)
    }

    pub async fn replace_actors(&self, film_id: i32, actor_ids: &[i32]) -> Result<u64, ClientError> {
        let body = ReplaceActorsRequest {
            actor_ids: actor_ids.to_vec(),
        };
        let response: UpdatedResponse = self
            .send_json(
                reqwest::Method::PUT,
                self.endpoint(&format!("film/{film_id}/actors"))?,
                &body,
            )
            .await?;
        Ok(response.updated_count)
    }

    pub async fn status(&self) -> Result<SystemStatus, ClientError> {
        let response: ApiResponse<SystemStatus> =
            self.get(self.endpoint("system/status")?).await?;
        Ok(response.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_gets_trailing_slash() {
        let client = CatalogClient::new("http://localhost:8000/catalog", Duration::from_secs(5))
            .unwrap();
        assert_eq!(client.base_url().as_str(), "http://localhost:8000/catalog/");
        assert_eq!(
            client.endpoint("film/3").unwrap().as_str(),
            "http://localhost:8000/catalog/api/film/3"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        let err = CatalogClient::new("not a url", Duration::from_secs(5))
            .err()
            .unwrap();
        assert!(matches!(err, ClientError::InvalidUrl(_)));
    }

    #[test]
    fn test_http_error_helpers() {
        let err = ClientError::Http {
            status: 404,
            message: "Film 9 not found".to_string(),
        };
        assert!(err.is_not_found());
        assert_eq!(err.status(), Some(404));
        assert_eq!(err.to_string(), "HTTP 404: Film 9 not found");
    }
}
