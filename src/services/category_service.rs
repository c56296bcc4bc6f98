use crate::domain::CategoryId;
use crate::models::category::Category;
use crate::services::CatalogError;

/// Categories are seeded by migration and never written through the API.
#[async_trait::async_trait]
pub trait CategoryService: Send + Sync {
    async fn list_categories(&self) -> Result<Vec<Category>, CatalogError>;

    async fn get_category(&self, id: CategoryId) -> Result<Category, CatalogError>;
}
