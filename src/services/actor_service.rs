//! Domain service for actor records.

use crate::domain::ActorId;
use crate::models::actor::{Actor, ActorDetail, ActorPatch, NewActor};
use crate::services::CatalogError;

#[async_trait::async_trait]
pub trait ActorService: Send + Sync {
    async fn list_actors(&self) -> Result<Vec<Actor>, CatalogError>;

    /// Returns the actor with the films they appear in.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] if the actor does not exist.
    async fn get_actor(&self, id: ActorId) -> Result<ActorDetail, CatalogError>;

    async fn create_actor(&self, actor: NewActor) -> Result<ActorId, CatalogError>;

    async fn update_actor(&self, id: ActorId, patch: ActorPatch) -> Result<u64, CatalogError>;

    async fn delete_actor(&self, id: ActorId) -> Result<u64, CatalogError>;
}
