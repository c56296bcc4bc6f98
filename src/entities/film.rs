use crate::models::film::Rating;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "film")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub film_id: i32,
    pub title: String,
    pub description: Option<String>,
    pub release_year: Option<i32>,
    pub rental_duration: i32,
    pub rental_rate: f64,
    pub length: Option<i32>,
    pub replacement_cost: f64,
    pub rating: Rating,
    /// Comma separated, e.g. "Trailers,Deleted Scenes".
    pub special_features: Option<String>,
    pub last_update: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::film_actor::Entity")]
    FilmActor,
}

impl Related<super::film_actor::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FilmActor.def()
    }
}

impl Related<super::actor::Entity> for Entity {
    fn to() -> RelationDef {
        super::film_actor::Relation::Actor.def()
    }
    fn via() -> Option<RelationDef> {
        Some(super::film_actor::Relation::Film.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
