//! Error taxonomy shared by the catalog services.

use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: i32 },

    /// The store refused a write because of a foreign-key or uniqueness rule.
    #[error("{0}")]
    Constraint(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl CatalogError {
    #[must_use]
    pub const fn not_found(entity: &'static str, id: i32) -> Self {
        Self::NotFound { entity, id }
    }

    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

impl From<DbErr> for CatalogError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::ForeignKeyConstraintViolation(msg))
            | Some(SqlErr::UniqueConstraintViolation(msg)) => Self::Constraint(msg),
            _ => Self::Database(err.to_string()),
        }
    }
}

impl From<anyhow::Error> for CatalogError {
    fn from(err: anyhow::Error) -> Self {
        match err.downcast::<DbErr>() {
            Ok(db_err) => db_err.into(),
            Err(other) => Self::Database(other.to_string()),
        }
    }
}
