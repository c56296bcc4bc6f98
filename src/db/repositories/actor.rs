use crate::entities::{actor, prelude::*};
use crate::models::actor::{Actor as ActorRow, ActorPatch, NewActor};
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};
use tracing::info;

pub struct ActorRepository {
    conn: DatabaseConnection,
}

impl ActorRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub(crate) fn map_model(model: actor::Model) -> ActorRow {
        ActorRow {
            actor_id: model.actor_id,
            first_name: model.first_name,
            last_name: model.last_name,
            last_update: model.last_update,
        }
    }

    pub async fn list(&self) -> anyhow::Result<Vec<ActorRow>> {
        let rows = Actor::find()
            .order_by_asc(actor::Column::ActorId)
            .all(&self.conn)
            .await?;

        Ok(rows.into_iter().map(Self::map_model).collect())
    }

    pub async fn get(&self, id: i32) -> anyhow::Result<Option<ActorRow>> {
        let row = Actor::find_by_id(id).one(&self.conn).await?;
        Ok(row.map(Self::map_model))
    }

    pub async fn exists(&self, id: i32) -> anyhow::Result<bool> {
        let count = Actor::find()
            .filter(actor::Column::ActorId.eq(id))
            .count(&self.conn)
            .await?;
        Ok(count > 0)
    }

    pub async fn count(&self) -> anyhow::Result<u64> {
        Ok(Actor::find().count(&self.conn).await?)
    }

    pub async fn create(&self, new_actor: &NewActor) -> anyhow::Result<i32> {
        let active_model = actor::ActiveModel {
            first_name: Set(new_actor.first_name.trim().to_string()),
            last_name: Set(new_actor.last_name.trim().to_string()),
            last_update: Set(super::super::timestamp()),
            ..Default::default()
        };

        let result = Actor::insert(active_model).exec(&self.conn).await?;

        info!(
            "Created actor {}: {} {}",
            result.last_insert_id, new_actor.first_name, new_actor.last_name
        );
        Ok(result.last_insert_id)
    }

    pub async fn update(&self, id: i32, patch: &ActorPatch) -> anyhow::Result<u64> {
        let mut model = actor::ActiveModel {
            last_update: Set(super::super::timestamp()),
            ..Default::default()
        };

        if let Some(first_name) = &patch.first_name {
            model.first_name = Set(first_name.trim().to_string());
        }
        if let Some(last_name) = &patch.last_name {
            model.last_name = Set(last_name.trim().to_string());
        }

        let result = Actor::update_many()
            .set(model)
            .filter(actor::Column::ActorId.eq(id))
            .exec(&self.conn)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn delete(&self, id: i32) -> anyhow::Result<u64> {
        let result = Actor::delete_by_id(id).exec(&self.conn).await?;

        if result.rows_affected > 0 {
            info!("Deleted actor with ID: {}", id);
        }
        Ok(result.rows_affected)
    }
}
