use crate::entities::{category, prelude::*};
use crate::models::category::Category as CategoryRow;
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait, QueryOrder};

pub struct CategoryRepository {
    conn: DatabaseConnection,
}

impl CategoryRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    fn map_model(model: category::Model) -> CategoryRow {
        CategoryRow {
            category_id: model.category_id,
            name: model.name,
            last_update: model.last_update,
        }
    }

    pub async fn list(&self) -> anyhow::Result<Vec<CategoryRow>> {
        let rows = Category::find()
            .order_by_asc(category::Column::CategoryId)
            .all(&self.conn)
            .await?;

        Ok(rows.into_iter().map(Self::map_model).collect())
    }

    pub async fn get(&self, id: i32) -> anyhow::Result<Option<CategoryRow>> {
        let row = Category::find_by_id(id).one(&self.conn).await?;
        Ok(row.map(Self::map_model))
    }

    pub async fn count(&self) -> anyhow::Result<u64> {
        Ok(Category::find().count(&self.conn).await?)
    }
}
