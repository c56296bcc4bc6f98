use crate::models::actor::{Actor, ActorPatch, NewActor};
use crate::models::category::Category;
use crate::models::film::{Film, FilmFilter, FilmPatch, NewFilm};
use anyhow::Result;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Statement};
use std::path::Path;
use std::time::Duration;
use tracing::info;

pub mod migrator;
pub mod repositories;

/// RFC 3339 timestamp written to every `last_update` column.
pub(crate) fn timestamp() -> String {
    chrono::Utc::now().to_rfc3339()
}

#[derive(Clone)]
pub struct Store {
    pub conn: DatabaseConnection,
}

impl Store {
    pub async fn new(db_url: &str) -> Result<Self> {
        Self::with_pool_options(db_url, 5, 1).await
    }

    pub async fn with_pool_options(
        db_url: &str,
        max_connections: u32,
        min_connections: u32,
    ) -> Result<Self> {
        use sea_orm_migration::MigratorTrait;

        let in_memory = db_url.contains(":memory:");

        if !in_memory {
            let path_str = db_url.trim_start_matches("sqlite://").trim_start_matches("sqlite:");
            let path_str = path_str.split('?').next().unwrap_or(path_str);
            if let Some(parent) = Path::new(path_str).parent() {
                tokio::fs::create_dir_all(parent).await.ok();
            }
            if !Path::new(path_str).exists() {
                std::fs::File::create(path_str)?;
            }
        }

        // Every pooled connection to an in-memory database is its own database.
        let (max_connections, min_connections) = if in_memory {
            (1, 1)
        } else {
            (max_connections, min_connections)
        };

        let mut opt = ConnectOptions::new(db_url.to_string());
        opt.max_connections(max_connections)
            .min_connections(min_connections)
            .connect_timeout(Duration::from_secs(10))
            .acquire_timeout(Duration::from_secs(10))
            .idle_timeout(Duration::from_secs(300))
            .max_lifetime(Duration::from_secs(600))
            .sqlx_logging(false);

        let conn = Database::connect(opt).await?;

        migrator::Migrator::up(&conn, None).await?;

        info!(
            "Database connected & migrations applied (pool: {}-{})",
            min_connections, max_connections
        );

        Ok(Self { conn })
    }

    pub async fn ping(&self) -> Result<()> {
        let backend = self.conn.get_database_backend();
        self.conn
            .query_one(Statement::from_string(backend, "SELECT 1".to_string()))
            .await?;
        Ok(())
    }

    fn film_repo(&self) -> repositories::film::FilmRepository {
        repositories::film::FilmRepository::new(self.conn.clone())
    }

    fn actor_repo(&self) -> repositories::actor::ActorRepository {
        repositories::actor::ActorRepository::new(self.conn.clone())
    }

    fn category_repo(&self) -> repositories::category::CategoryRepository {
        repositories::category::CategoryRepository::new(self.conn.clone())
    }

    fn cast_repo(&self) -> repositories::cast::CastRepository {
        repositories::cast::CastRepository::new(self.conn.clone())
    }

    // ========== Film ==========

    pub async fn list_films(&self, filter: &FilmFilter) -> Result<Vec<Film>> {
        self.film_repo().list(filter).await
    }

    pub async fn get_film(&self, id: i32) -> Result<Option<Film>> {
        self.film_repo().get(id).await
    }

    pub async fn film_exists(&self, id: i32) -> Result<bool> {
        self.film_repo().exists(id).await
    }

    pub async fn count_films(&self) -> Result<u64> {
        self.film_repo().count().await
    }

    pub async fn create_film(&self, film: &NewFilm) -> Result<i32> {
        self.film_repo().create(film).await
    }

    pub async fn update_film(&self, id: i32, patch: &FilmPatch) -> Result<u64> {
        self.film_repo().update(id, patch).await
    }

    pub async fn delete_film(&self, id: i32) -> Result<u64> {
        self.film_repo().delete(id).await
    }

    // ========== Actor ==========

    pub async fn list_actors(&self) -> Result<Vec<Actor>> {
        self.actor_repo().list().await
    }

    pub async fn get_actor(&self, id: i32) -> Result<Option<Actor>> {
        self.actor_repo().get(id).await
    }

    pub async fn actor_exists(&self, id: i32) -> Result<bool> {
        self.actor_repo().exists(id).await
    }

    pub async fn count_actors(&self) -> Result<u64> {
        self.actor_repo().count().await
    }

    pub async fn create_actor(&self, actor: &NewActor) -> Result<i32> {
        self.actor_repo().create(actor).await
    }

    pub async fn update_actor(&self, id: i32, patch: &ActorPatch) -> Result<u64> {
        self.actor_repo().update(id, patch).await
    }

    pub async fn delete_actor(&self, id: i32) -> Result<u64> {
        self.actor_repo().delete(id).await
    }

    // ========== Category ==========

    pub async fn list_categories(&self) -> Result<Vec<Category>> {
        self.category_repo().list().await
    }

    pub async fn get_category(&self, id: i32) -> Result<Option<Category>> {
        self.category_repo().get(id).await
    }

    pub async fn count_categories(&self) -> Result<u64> {
        self.category_repo().count().await
    }

    // ========== Film <-> Actor links ==========

    pub async fn list_associated_films(&self, actor_id: i32) -> Result<Vec<Film>> {
        self.cast_repo().films_for_actor(actor_id).await
    }

    pub async fn list_associated_actors(&self, film_id: i32) -> Result<Vec<Actor>> {
        self.cast_repo().actors_for_film(film_id).await
    }

    pub async fn create_association(&self, actor_id: i32, film_id: i32) -> Result<()> {
        self.cast_repo().link(actor_id, film_id).await
    }

    pub async fn delete_association(&self, actor_id: i32, film_id: i32) -> Result<u64> {
        self.cast_repo().unlink(actor_id, film_id).await
    }

    pub async fn replace_films_for_actor(&self, actor_id: i32, film_ids: &[i32]) -> Result<u64> {
        self.cast_repo()
            .replace_films_for_actor(actor_id, film_ids)
            .await
    }

    pub async fn replace_actors_for_film(&self, film_id: i32, actor_ids: &[i32]) -> Result<u64> {
        self.cast_repo()
            .replace_actors_for_film(film_id, actor_ids)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::film::Rating;

    async fn test_store() -> Store {
        let path = std::env::temp_dir().join(format!("cinecat-store-{}.db", uuid::Uuid::new_v4()));
        Store::new(&format!("sqlite:{}", path.display()))
            .await
            .expect("failed to open store")
    }

    fn new_film(title: &str) -> NewFilm {
        NewFilm {
            title: title.to_string(),
            ..Default::default()
        }
    }

    fn new_actor(first: &str, last: &str) -> NewActor {
        NewActor {
            first_name: first.to_string(),
            last_name: last.to_string(),
        }
    }

    #[tokio::test]
    async fn test_categories_are_seeded() {
        let store = test_store().await;
        let categories = store.list_categories().await.unwrap();

        assert_eq!(categories.len(), 16);
        assert_eq!(categories[0].name, "Action");
        assert!(categories.iter().any(|c| c.name == "Sci-Fi"));
    }

    #[tokio::test]
    async fn test_film_defaults_applied_on_create() {
        let store = test_store().await;
        let id = store.create_film(&new_film("ACADEMY DINOSAUR")).await.unwrap();

        let film = store.get_film(id).await.unwrap().unwrap();
        assert_eq!(film.rental_duration, 3);
        assert!((film.rental_rate - 4.99).abs() < f64::EPSILON);
        assert!((film.replacement_cost - 19.99).abs() < f64::EPSILON);
        assert_eq!(film.rating, Rating::G);
        assert!(!film.last_update.is_empty());
    }

    #[tokio::test]
    async fn test_title_filter_matches_substring() {
        let store = test_store().await;
        store.create_film(&new_film("ACADEMY DINOSAUR")).await.unwrap();
        store.create_film(&new_film("ACE GOLDFINGER")).await.unwrap();
        store.create_film(&new_film("DINOSAUR SECRETARY")).await.unwrap();

        let filter = FilmFilter {
            title: Some("dinosaur".to_string()),
        };
        let films = store.list_films(&filter).await.unwrap();

        let titles: Vec<&str> = films.iter().map(|f| f.title.as_str()).collect();
        assert_eq!(titles, vec!["ACADEMY DINOSAUR", "DINOSAUR SECRETARY"]);
    }

    #[tokio::test]
    async fn test_title_filter_treats_wildcards_literally() {
        let store = test_store().await;
        store.create_film(&new_film("ACADEMY DINOSAUR")).await.unwrap();
        store.create_film(&new_film("100% LOVE")).await.unwrap();
        store.create_film(&new_film("SNAKE_EYES")).await.unwrap();

        let titles = |films: Vec<crate::models::film::Film>| -> Vec<String> {
            films.into_iter().map(|f| f.title).collect()
        };

        let percent = FilmFilter {
            title: Some("%".to_string()),
        };
        assert_eq!(titles(store.list_films(&percent).await.unwrap()), vec!["100% LOVE"]);

        let underscore = FilmFilter {
            title: Some("_".to_string()),
        };
        assert_eq!(
            titles(store.list_films(&underscore).await.unwrap()),
            vec!["SNAKE_EYES"]
        );

        let backslash = FilmFilter {
            title: Some("\\".to_string()),
        };
        assert!(store.list_films(&backslash).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_and_delete_report_row_counts() {
        let store = test_store().await;
        let id = store.create_actor(&new_actor("PENELOPE", "GUINESS")).await.unwrap();

        let patch = ActorPatch {
            last_name: Some("CRUZ".to_string()),
            ..Default::default()
        };
        assert_eq!(store.update_actor(id, &patch).await.unwrap(), 1);
        assert_eq!(store.update_actor(id + 100, &patch).await.unwrap(), 0);

        let actor = store.get_actor(id).await.unwrap().unwrap();
        assert_eq!(actor.first_name, "PENELOPE");
        assert_eq!(actor.last_name, "CRUZ");

        assert_eq!(store.delete_actor(id).await.unwrap(), 1);
        assert_eq!(store.delete_actor(id).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_association_lifecycle() {
        let store = test_store().await;
        let actor = store.create_actor(&new_actor("NICK", "WAHLBERG")).await.unwrap();
        let film = store.create_film(&new_film("ADAPTATION HOLES")).await.unwrap();

        store.create_association(actor, film).await.unwrap();
        let films = store.list_associated_films(actor).await.unwrap();
        assert_eq!(films.len(), 1);
        assert_eq!(films[0].film_id, film);

        let actors = store.list_associated_actors(film).await.unwrap();
        assert_eq!(actors[0].actor_id, actor);

        assert_eq!(store.delete_association(actor, film).await.unwrap(), 1);
        assert!(store.list_associated_films(actor).await.unwrap().is_empty());
        assert_eq!(store.delete_association(actor, film).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_association_requires_existing_rows() {
        let store = test_store().await;
        let actor = store.create_actor(&new_actor("ED", "CHASE")).await.unwrap();

        let err = store.create_association(actor, 999).await.unwrap_err();
        let db_err = err.downcast_ref::<sea_orm::DbErr>().expect("store error");
        assert!(matches!(
            db_err.sql_err(),
            Some(sea_orm::SqlErr::ForeignKeyConstraintViolation(_))
        ));
        assert!(store.list_associated_films(actor).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_duplicate_association_is_rejected() {
        let store = test_store().await;
        let actor = store.create_actor(&new_actor("JENNIFER", "DAVIS")).await.unwrap();
        let film = store.create_film(&new_film("AFRICAN EGG")).await.unwrap();

        store.create_association(actor, film).await.unwrap();
        let err = store.create_association(actor, film).await.unwrap_err();
        let db_err = err.downcast_ref::<sea_orm::DbErr>().expect("store error");
        assert!(matches!(
            db_err.sql_err(),
            Some(sea_orm::SqlErr::UniqueConstraintViolation(_))
        ));
        assert_eq!(store.list_associated_films(actor).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_replace_is_atomic() {
        let store = test_store().await;
        let actor = store.create_actor(&new_actor("JOHNNY", "LOLLOBRIGIDA")).await.unwrap();
        let first = store.create_film(&new_film("AGENT TRUMAN")).await.unwrap();
        let second = store.create_film(&new_film("AIRPLANE SIERRA")).await.unwrap();

        store.create_association(actor, first).await.unwrap();

        // Unknown film id: nothing may change.
        assert!(
            store
                .replace_films_for_actor(actor, &[second, 4242])
                .await
                .is_err()
        );
        let films = store.list_associated_films(actor).await.unwrap();
        assert_eq!(films.len(), 1);
        assert_eq!(films[0].film_id, first);

        let written = store
            .replace_films_for_actor(actor, &[second, second])
            .await
            .unwrap();
        assert_eq!(written, 1);
        let films = store.list_associated_films(actor).await.unwrap();
        assert_eq!(films.len(), 1);
        assert_eq!(films[0].film_id, second);

        assert_eq!(store.replace_films_for_actor(actor, &[]).await.unwrap(), 0);
        assert!(store.list_associated_films(actor).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_deleting_film_cascades_to_links() {
        let store = test_store().await;
        let actor = store.create_actor(&new_actor("BETTE", "NICHOLSON")).await.unwrap();
        let film = store.create_film(&new_film("ALABAMA DEVIL")).await.unwrap();
        store.create_association(actor, film).await.unwrap();

        assert_eq!(store.delete_film(film).await.unwrap(), 1);
        assert!(store.list_associated_films(actor).await.unwrap().is_empty());
    }
}
