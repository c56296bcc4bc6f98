//! Domain service for the film/actor association.
//!
//! An association is a bare `(actor_id, film_id)` pair. Creating one relies on
//! the store to reject unknown ids and duplicate pairs; both come back as
//! [`CatalogError::Constraint`] carrying the store's message.

use crate::domain::{ActorId, FilmId};
use crate::models::actor::Actor;
use crate::models::film::Film;
use crate::services::CatalogError;

#[async_trait::async_trait]
pub trait CastService: Send + Sync {
    /// Films linked to an actor, ordered by film id.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] if the actor does not exist.
    async fn films_for_actor(&self, actor_id: ActorId) -> Result<Vec<Film>, CatalogError>;

    /// Actors linked to a film, ordered by actor id.
    async fn actors_for_film(&self, film_id: FilmId) -> Result<Vec<Actor>, CatalogError>;

    /// Links an actor to a film.
    ///
    /// # Errors
    ///
    /// - Returns [`CatalogError::Constraint`] if either side is missing or the
    ///   pair is already linked
    /// - Returns [`CatalogError::Database`] on connection failures
    async fn link(&self, actor_id: ActorId, film_id: FilmId) -> Result<(), CatalogError>;

    /// Unlinks an actor from a film and returns the number of rows removed.
    async fn unlink(&self, actor_id: ActorId, film_id: FilmId) -> Result<u64, CatalogError>;

    /// Replaces the actor's whole film list atomically.
    ///
    /// # Errors
    ///
    /// - Returns [`CatalogError::NotFound`] if the actor does not exist
    /// - Returns [`CatalogError::Constraint`] if a film id is unknown, in which
    ///   case the previous list is kept
    async fn replace_films(
        &self,
        actor_id: ActorId,
        film_ids: Vec<FilmId>,
    ) -> Result<u64, CatalogError>;

    /// Replaces the film's whole cast atomically.
    async fn replace_actors(
        &self,
        film_id: FilmId,
        actor_ids: Vec<ActorId>,
    ) -> Result<u64, CatalogError>;
}
