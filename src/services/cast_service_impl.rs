use std::sync::Arc;

use tracing::warn;

use crate::db::Store;
use crate::domain::{ActorId, FilmId};
use crate::models::actor::Actor;
use crate::models::film::Film;
use crate::services::{CastService, CatalogError};

pub struct SeaOrmCastService {
    store: Arc<Store>,
}

impl SeaOrmCastService {
    #[must_use]
    pub const fn new(store: Arc<Store>) -> Self {
        Self { store }
    }

    async fn ensure_actor(&self, id: ActorId) -> Result<(), CatalogError> {
        if self.store.actor_exists(id.value()).await? {
            Ok(())
        } else {
            Err(CatalogError::not_found("Actor", id.value()))
        }
    }

    async fn ensure_film(&self, id: FilmId) -> Result<(), CatalogError> {
        if self.store.film_exists(id.value()).await? {
            Ok(())
        } else {
            Err(CatalogError::not_found("Film", id.value()))
        }
    }
}

#[async_trait::async_trait]
impl CastService for SeaOrmCastService {
    async fn films_for_actor(&self, actor_id: ActorId) -> Result<Vec<Film>, CatalogError> {
        self.ensure_actor(actor_id).await?;
        Ok(self.store.list_associated_films(actor_id.value()).await?)
    }

    async fn actors_for_film(&self, film_id: FilmId) -> Result<Vec<Actor>, CatalogError> {
        self.ensure_film(film_id).await?;
        Ok(self.store.list_associated_actors(film_id.value()).await?)
    }

    async fn link(&self, actor_id: ActorId, film_id: FilmId) -> Result<(), CatalogError> {
        self.store
            .create_association(actor_id.value(), film_id.value())
            .await
            .map_err(|e| {
                let err = CatalogError::from(e);
                if matches!(err, CatalogError::Constraint(_)) {
                    warn!(
                        "Store rejected link of actor {} to film {}: {}",
                        actor_id, film_id, err
                    );
                }
                err
            })
    }

    async fn unlink(&self, actor_id: ActorId, film_id: FilmId) -> Result<u64, CatalogError> {
        Ok(self
            .store
            .delete_association(actor_id.value(), film_id.value())
            .await?)
    }

    async fn replace_films(
        &self,
        actor_id: ActorId,
        film_ids: Vec<FilmId>,
    ) -> Result<u64, CatalogError> {
        self.ensure_actor(actor_id).await?;

        let ids: Vec<i32> = film_ids.into_iter().map(i32::from).collect();
        Ok(self
            .store
            .replace_films_for_actor(actor_id.value(), &ids)
            .await?)
    }

    async fn replace_actors(
        &self,
        film_id: FilmId,
        actor_ids: Vec<ActorId>,
    ) -> Result<u64, CatalogError> {
        self.ensure_film(film_id).await?;

        let ids: Vec<i32> = actor_ids.into_iter().map(i32::from).collect();
        Ok(self
            .store
            .replace_actors_for_film(film_id.value(), &ids)
            .await?)
    }
}
