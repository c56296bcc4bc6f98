//! Domain service for film records.

use crate::domain::FilmId;
use crate::models::film::{Film, FilmDetail, FilmFilter, FilmPatch, NewFilm};
use crate::services::CatalogError;

/// Film CRUD. Counts returned by `update_film`/`delete_film` are affected-row
/// counts; zero means the film did not exist.
#[async_trait::async_trait]
pub trait FilmService: Send + Sync {
    async fn list_films(&self, filter: FilmFilter) -> Result<Vec<Film>, CatalogError>;

    /// Returns the film with its linked actors attached.
    ///
    /// # Errors
    ///
    /// - Returns [`CatalogError::NotFound`] if the film does not exist
    /// - Returns [`CatalogError::Database`] on connection failures
    async fn get_film(&self, id: FilmId) -> Result<FilmDetail, CatalogError>;

    async fn create_film(&self, film: NewFilm) -> Result<FilmId, CatalogError>;

    async fn update_film(&self, id: FilmId, patch: FilmPatch) -> Result<u64, CatalogError>;

    async fn delete_film(&self, id: FilmId) -> Result<u64, CatalogError>;
}
