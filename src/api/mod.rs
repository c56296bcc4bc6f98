use axum::{
    Router,
    http::HeaderValue,
    middleware,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::state::SharedState;

mod actors;
mod cast;
mod categories;
mod error;
mod films;
mod observability;
mod system;
pub mod types;
mod validation;

pub use error::ApiError;
pub use types::*;

use metrics_exporter_prometheus::PrometheusHandle;

#[derive(Clone)]
pub struct AppState {
    pub shared: Arc<SharedState>,

    pub start_time: std::time::Instant,

    pub prometheus_handle: Option<PrometheusHandle>,
}

impl AppState {
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.shared.config
    }

    #[must_use]
    pub fn store(&self) -> &crate::db::Store {
        &self.shared.store
    }

    #[must_use]
    pub fn films(&self) -> &Arc<dyn crate::services::FilmService> {
        &self.shared.film_service
    }

    #[must_use]
    pub fn actors(&self) -> &Arc<dyn crate::services::ActorService> {
        &self.shared.actor_service
    }

    #[must_use]
    pub fn categories(&self) -> &Arc<dyn crate::services::CategoryService> {
        &self.shared.category_service
    }

    #[must_use]
    pub fn cast(&self) -> &Arc<dyn crate::services::CastService> {
        &self.shared.cast_service
    }
}

#[must_use]
pub fn create_app_state(
    shared: Arc<SharedState>,
    prometheus_handle: Option<PrometheusHandle>,
) -> Arc<AppState> {
    Arc::new(AppState {
        shared,
        start_time: std::time::Instant::now(),
        prometheus_handle,
    })
}

pub async fn create_app_state_from_config(
    config: Config,
    prometheus_handle: Option<PrometheusHandle>,
) -> anyhow::Result<Arc<AppState>> {
    let shared = Arc::new(SharedState::new(config).await?);
    Ok(create_app_state(shared, prometheus_handle))
}

pub fn router(state: Arc<AppState>) -> Router {
    let cors_origins = state.config().server.cors_allowed_origins.clone();

    let api_router = create_api_router().with_state(state);

    let cors_layer = if cors_origins.contains(&"*".to_string()) {
        CorsLayer::new().allow_origin(Any)
    } else {
        let origins: Vec<HeaderValue> =
            cors_origins.iter().filter_map(|s| s.parse().ok()).collect();
        CorsLayer::new().allow_origin(origins)
    };

    Router::new()
        .nest("/api", api_router)
        .layer(cors_layer.allow_methods(Any).allow_headers(Any))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(observability::logging_middleware))
}

fn create_api_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/film", get(films::list_films).post(films::create_film))
        .route(
            "/film/{id}",
            get(films::get_film)
                .put(films::update_film)
                .delete(films::delete_film),
        )
        .route(
            "/film/{id}/actors",
            get(cast::list_film_actors).put(cast::replace_film_actors),
        )
        .route(
            "/film/{id}/actor/{actor_id}",
            post(cast::link_film_actor).delete(cast::unlink_film_actor),
        )
        .route("/actor", get(actors::list_actors).post(actors::create_actor))
        .route(
            "/actor/{id}",
            get(actors::get_actor)
                .put(actors::update_actor)
                .delete(actors::delete_actor),
        )
        .route(
            "/actor/{id}/films",
            get(cast::list_actor_films).put(cast::replace_actor_films),
        )
        .route(
            "/actor/{id}/film/{film_id}",
            post(cast::link_actor_film).delete(cast::unlink_actor_film),
        )
        .route("/category", get(categories::list_categories))
        .route("/category/{id}", get(categories::get_category))
        .route("/system/status", get(system::get_status))
        .route("/health/live", get(system::health_live))
        .route("/health/ready", get(system::health_ready))
        .route("/metrics", get(observability::get_metrics))
}
