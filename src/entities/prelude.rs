pub use super::actor::Entity as Actor;
pub use super::category::Entity as Category;
pub use super::film::Entity as Film;
pub use super::film_actor::Entity as FilmActor;
