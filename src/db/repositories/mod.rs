pub mod actor;
pub mod cast;
pub mod category;
pub mod film;
