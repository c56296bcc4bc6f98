use crate::entities::{category, prelude::*};
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

const CATEGORIES: [&str; 16] = [
    "Action",
    "Animation",
    "Children",
    "Classics",
    "Comedy",
    "Documentary",
    "Drama",
    "Family",
    "Foreign",
    "Games",
    "Horror",
    "Music",
    "New",
    "Sci-Fi",
    "Sports",
    "Travel",
];

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let now = chrono::Utc::now().to_rfc3339();

        let mut insert = sea_orm_migration::sea_query::Query::insert()
            .into_table(Category)
            .columns([category::Column::Name, category::Column::LastUpdate])
            .to_owned();

        for name in CATEGORIES {
            insert.values_panic([name.into(), now.clone().into()]);
        }

        insert.on_conflict(
            OnConflict::column(category::Column::Name)
                .do_nothing()
                .to_owned(),
        );

        manager.exec_stmt(insert).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let delete = sea_orm_migration::sea_query::Query::delete()
            .from_table(Category)
            .and_where(Expr::col(category::Column::Name).is_in(CATEGORIES))
            .to_owned();

        manager.exec_stmt(delete).await?;

        Ok(())
    }
}
