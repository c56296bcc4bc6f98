pub mod error;
pub use error::CatalogError;

pub mod film_service;
pub mod film_service_impl;
pub use film_service::FilmService;
pub use film_service_impl::SeaOrmFilmService;

pub mod actor_service;
pub mod actor_service_impl;
pub use actor_service::ActorService;
pub use actor_service_impl::SeaOrmActorService;

pub mod category_service;
pub mod category_service_impl;
pub use category_service::CategoryService;
pub use category_service_impl::SeaOrmCategoryService;

pub mod cast_service;
pub mod cast_service_impl;
pub use cast_service::CastService;
pub use cast_service_impl::SeaOrmCastService;
