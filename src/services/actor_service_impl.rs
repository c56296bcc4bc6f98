use std::sync::Arc;

use crate::db::Store;
use crate::domain::ActorId;
use crate::models::actor::{Actor, ActorDetail, ActorPatch, NewActor};
use crate::services::{ActorService, CatalogError};

pub struct SeaOrmActorService {
    store: Arc<Store>,
}

impl SeaOrmActorService {
    #[must_use]
    pub const fn new(store: Arc<Store>) -> Self {
        Self { store }
    }
}

#[async_trait::async_trait]
impl ActorService for SeaOrmActorService {
    async fn list_actors(&self) -> Result<Vec<Actor>, CatalogError> {
        Ok(self.store.list_actors().await?)
    }

    async fn get_actor(&self, id: ActorId) -> Result<ActorDetail, CatalogError> {
        let (actor, films) = tokio::join!(
            self.store.get_actor(id.value()),
            self.store.list_associated_films(id.value())
        );

        let actor = actor?.ok_or(CatalogError::not_found("Actor", id.value()))?;
        let films = films?;

        Ok(ActorDetail { actor, films })
    }

    async fn create_actor(&self, actor: NewActor) -> Result<ActorId, CatalogError> {
        let id = self.store.create_actor(&actor).await?;
        Ok(ActorId::new(id))
    }

    async fn update_actor(&self, id: ActorId, patch: ActorPatch) -> Result<u64, CatalogError> {
        Ok(self.store.update_actor(id.value(), &patch).await?)
    }

    async fn delete_actor(&self, id: ActorId) -> Result<u64, CatalogError> {
        Ok(self.store.delete_actor(id.value()).await?)
    }
}
