use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FilmActor::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(FilmActor::ActorId).integer().not_null())
                    .col(ColumnDef::new(FilmActor::FilmId).integer().not_null())
                    .col(ColumnDef::new(FilmActor::LastUpdate).string().not_null())
                    // One row per pair; a second link of the same pair is a constraint error.
                    .primary_key(
                        Index::create()
                            .name("pk_film_actor")
                            .col(FilmActor::ActorId)
                            .col(FilmActor::FilmId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_film_actor_actor_id")
                            .from(FilmActor::Table, FilmActor::ActorId)
                            .to(Actor::Table, Actor::ActorId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_film_actor_film_id")
                            .from(FilmActor::Table, FilmActor::FilmId)
                            .to(Film::Table, Film::FilmId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_film_actor_film_id")
                    .table(FilmActor::Table)
                    .col(FilmActor::FilmId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FilmActor::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Actor {
    Table,
    ActorId,
}

#[derive(DeriveIden)]
enum Film {
    Table,
    FilmId,
}

#[derive(DeriveIden)]
enum FilmActor {
    Table,
    ActorId,
    FilmId,
    LastUpdate,
}
