use std::sync::Arc;

use crate::db::Store;
use crate::domain::FilmId;
use crate::models::film::{Film, FilmDetail, FilmFilter, FilmPatch, NewFilm};
use crate::services::{CatalogError, FilmService};

pub struct SeaOrmFilmService {
    store: Arc<Store>,
}

impl SeaOrmFilmService {
    #[must_use]
    pub const fn new(store: Arc<Store>) -> Self {
        Self { store }
    }
}

#[async_trait::async_trait]
impl FilmService for SeaOrmFilmService {
    async fn list_films(&self, filter: FilmFilter) -> Result<Vec<Film>, CatalogError> {
        Ok(self.store.list_films(&filter).await?)
    }

    async fn get_film(&self, id: FilmId) -> Result<FilmDetail, CatalogError> {
        let (film, actors) = tokio::join!(
            self.store.get_film(id.value()),
            self.store.list_associated_actors(id.value())
        );

        let film = film?.ok_or(CatalogError::not_found("Film", id.value()))?;
        let actors = actors?;

        Ok(FilmDetail { film, actors })
    }

    async fn create_film(&self, film: NewFilm) -> Result<FilmId, CatalogError> {
        let id = self.store.create_film(&film).await?;
        Ok(FilmId::new(id))
    }

    async fn update_film(&self, id: FilmId, patch: FilmPatch) -> Result<u64, CatalogError> {
        Ok(self.store.update_film(id.value(), &patch).await?)
    }

    async fn delete_film(&self, id: FilmId) -> Result<u64, CatalogError> {
        Ok(self.store.delete_film(id.value()).await?)
    }
}
