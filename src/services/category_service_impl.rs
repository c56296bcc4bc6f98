use std::sync::Arc;

use crate::db::Store;
use crate::domain::CategoryId;
use crate::models::category::Category;
use crate::services::{CatalogError, CategoryService};

pub struct SeaOrmCategoryService {
    store: Arc<Store>,
}

impl SeaOrmCategoryService {
    #[must_use]
    pub const fn new(store: Arc<Store>) -> Self {
        Self { store }
    }
}

#[async_trait::async_trait]
impl CategoryService for SeaOrmCategoryService {
    async fn list_categories(&self) -> Result<Vec<Category>, CatalogError> {
        Ok(self.store.list_categories().await?)
    }

    async fn get_category(&self, id: CategoryId) -> Result<Category, CatalogError> {
        self.store
            .get_category(id.value())
            .await?
            .ok_or(CatalogError::not_found("Category", id.value()))
    }
}
