pub mod actor;
pub mod category;
pub mod film;
