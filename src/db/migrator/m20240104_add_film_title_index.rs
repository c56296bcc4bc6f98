use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let conn = manager.get_connection();

        conn.execute_unprepared("CREATE INDEX IF NOT EXISTS idx_film_title ON film(title)")
            .await?;

        conn.execute_unprepared(
            "CREATE INDEX IF NOT EXISTS idx_actor_last_name ON actor(last_name)",
        )
        .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let conn = manager.get_connection();

        conn.execute_unprepared("DROP INDEX IF EXISTS idx_actor_last_name")
            .await?;
        conn.execute_unprepared("DROP INDEX IF EXISTS idx_film_title")
            .await?;

        Ok(())
    }
}
