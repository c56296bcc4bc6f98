use std::sync::Arc;

use crate::config::Config;
use crate::db::Store;
use crate::services::{
    ActorService, CastService, CategoryService, FilmService, SeaOrmActorService,
    SeaOrmCastService, SeaOrmCategoryService, SeaOrmFilmService,
};

/// Long-lived handles shared by every request.
#[derive(Clone)]
pub struct SharedState {
    pub config: Arc<Config>,

    pub store: Arc<Store>,

    pub film_service: Arc<dyn FilmService>,

    pub actor_service: Arc<dyn ActorService>,

    pub category_service: Arc<dyn CategoryService>,

    pub cast_service: Arc<dyn CastService>,
}

impl SharedState {
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        let store = Store::with_pool_options(
            &config.general.database_path,
            config.general.max_db_connections,
            config.general.min_db_connections,
        )
        .await?;

        Ok(Self::with_store(config, store))
    }

    #[must_use]
    pub fn with_store(config: Config, store: Store) -> Self {
        let store = Arc::new(store);

        Self {
            config: Arc::new(config),
            film_service: Arc::new(SeaOrmFilmService::new(store.clone())),
            actor_service: Arc::new(SeaOrmActorService::new(store.clone())),
            category_service: Arc::new(SeaOrmCategoryService::new(store.clone())),
            cast_service: Arc::new(SeaOrmCastService::new(store.clone())),
            store,
        }
    }
}
