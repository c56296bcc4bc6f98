//! Access to the `film_actor` linking table.
//!
//! Every write here touches `film_actor` only. Existence of the referenced
//! film and actor is left to the store's foreign keys, so a bad id comes back
//! as a constraint violation rather than being checked up front.

use std::collections::BTreeSet;

use crate::entities::{actor, film, film_actor, prelude::*};
use crate::models::actor::Actor as ActorRow;
use crate::models::film::Film as FilmRow;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, JoinType, QueryFilter, QueryOrder, QuerySelect,
    RelationTrait, Set, TransactionTrait,
};
use tracing::{debug, info};

use super::actor::ActorRepository;
use super::film::FilmRepository;

pub struct CastRepository {
    conn: DatabaseConnection,
}

impl CastRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub async fn films_for_actor(&self, actor_id: i32) -> anyhow::Result<Vec<FilmRow>> {
        let rows = Film::find()
            .join(JoinType::InnerJoin, film::Relation::FilmActor.def())
            .filter(film_actor::Column::ActorId.eq(actor_id))
            .order_by_asc(film::Column::FilmId)
            .all(&self.conn)
            .await?;

        Ok(rows.into_iter().map(FilmRepository::map_model).collect())
    }

    pub async fn actors_for_film(&self, film_id: i32) -> anyhow::Result<Vec<ActorRow>> {
        let rows = Actor::find()
            .join(JoinType::InnerJoin, actor::Relation::FilmActor.def())
            .filter(film_actor::Column::FilmId.eq(film_id))
            .order_by_asc(actor::Column::ActorId)
            .all(&self.conn)
            .await?;

        Ok(rows.into_iter().map(ActorRepository::map_model).collect())
    }

    /// Inserts one link. Fails on a missing film/actor or an existing pair.
    pub async fn link(&self, actor_id: i32, film_id: i32) -> anyhow::Result<()> {
        FilmActor::insert(film_actor::ActiveModel {
            actor_id: Set(actor_id),
            film_id: Set(film_id),
            last_update: Set(super::super::timestamp()),
        })
        .exec_without_returning(&self.conn)
        .await?;

        info!("Linked actor {} to film {}", actor_id, film_id);
        Ok(())
    }

    /// Removes the link and returns the number of rows deleted.
    pub async fn unlink(&self, actor_id: i32, film_id: i32) -> anyhow::Result<u64> {
        let result = FilmActor::delete_many()
            .filter(film_actor::Column::ActorId.eq(actor_id))
            .filter(film_actor::Column::FilmId.eq(film_id))
            .exec(&self.conn)
            .await?;

        if result.rows_affected > 0 {
            info!("Unlinked actor {} from film {}", actor_id, film_id);
        }
        Ok(result.rows_affected)
    }

    /// Replaces every film linked to `actor_id` in one transaction.
    pub async fn replace_films_for_actor(
        &self,
        actor_id: i32,
        film_ids: &[i32],
    ) -> anyhow::Result<u64> {
        let film_ids: BTreeSet<i32> = film_ids.iter().copied().collect();
        let txn = self.conn.begin().await?;

        let removed = FilmActor::delete_many()
            .filter(film_actor::Column::ActorId.eq(actor_id))
            .exec(&txn)
            .await?;

        let mut inserted = 0;
        if !film_ids.is_empty() {
            let now = super::super::timestamp();
            let links: Vec<film_actor::ActiveModel> = film_ids
                .iter()
                .map(|&film_id| film_actor::ActiveModel {
                    actor_id: Set(actor_id),
                    film_id: Set(film_id),
                    last_update: Set(now.clone()),
                })
                .collect();

            inserted = FilmActor::insert_many(links)
                .exec_without_returning(&txn)
                .await?;
        }

        txn.commit().await?;

        debug!(
            "Replaced films for actor {}: removed {}, inserted {}",
            actor_id,
            removed.rows_affected, inserted
        );
        Ok(inserted)
    }

    /// Replaces every actor linked to `film_id` in one transaction.
    pub async fn replace_actors_for_film(
        &self,
        film_id: i32,
        actor_ids: &[i32],
    ) -> anyhow::Result<u64> {
        let actor_ids: BTreeSet<i32> = actor_ids.iter().copied().collect();
        let txn = self.conn.begin().await?;

        let removed = FilmActor::delete_many()
            .filter(film_actor::Column::FilmId.eq(film_id))
            .exec(&txn)
            .await?;

        let mut inserted = 0;
        if !actor_ids.is_empty() {
            let now = super::super::timestamp();
            let links: Vec<film_actor::ActiveModel> = actor_ids
                .iter()
                .map(|&actor_id| film_actor::ActiveModel {
                    actor_id: Set(actor_id),
                    film_id: Set(film_id),
                    last_update: Set(now.clone()),
                })
                .collect();

            inserted = FilmActor::insert_many(links)
                .exec_without_returning(&txn)
                .await?;
        }

        txn.commit().await?;

        debug!(
            "Replaced actors for film {}: removed {}, inserted {}",
            film_id,
            removed.rows_affected, inserted
        );
        Ok(inserted)
    }
}
