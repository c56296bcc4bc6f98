use crate::entities::{film, prelude::*};
use crate::models::film::{
    DEFAULT_RENTAL_DURATION, DEFAULT_RENTAL_RATE, DEFAULT_REPLACEMENT_COST, Film as FilmRow,
    FilmFilter, FilmPatch, NewFilm,
};
use sea_orm::sea_query::{Expr, LikeExpr};
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};
use tracing::info;

/// Escapes `LIKE` metacharacters so user input only ever matches literally.
fn escape_like(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

pub struct FilmRepository {
    conn: DatabaseConnection,
}

impl FilmRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub(crate) fn map_model(model: film::Model) -> FilmRow {
        FilmRow {
            film_id: model.film_id,
            title: model.title,
            description: model.description,
            release_year: model.release_year,
            rental_duration: model.rental_duration,
            rental_rate: model.rental_rate,
            length: model.length,
            replacement_cost: model.replacement_cost,
            rating: model.rating,
            special_features: model.special_features,
            last_update: model.last_update,
        }
    }

    pub async fn list(&self, filter: &FilmFilter) -> anyhow::Result<Vec<FilmRow>> {
        let mut query = Film::find();

        if let Some(title) = filter.title.as_deref().filter(|t| !t.is_empty()) {
            let pattern = format!("%{}%", escape_like(title));
            query = query.filter(
                Expr::col((film::Entity, film::Column::Title))
                    .like(LikeExpr::new(pattern).escape('\\')),
            );
        }

        let rows = query
            .order_by_asc(film::Column::FilmId)
            .all(&self.conn)
            .await?;

        Ok(rows.into_iter().map(Self::map_model).collect())
    }

    pub async fn get(&self, id: i32) -> anyhow::Result<Option<FilmRow>> {
        let row = Film::find_by_id(id).one(&self.conn).await?;
        Ok(row.map(Self::map_model))
    }

    pub async fn exists(&self, id: i32) -> anyhow::Result<bool> {
        let count = Film::find()
            .filter(film::Column::FilmId.eq(id))
            .count(&self.conn)
            .await?;
        Ok(count > 0)
    }

    pub async fn count(&self) -> anyhow::Result<u64> {
        Ok(Film::find().count(&self.conn).await?)
    }

    pub async fn create(&self, film: &NewFilm) -> anyhow::Result<i32> {
        let active_model = film::ActiveModel {
            title: Set(film.title.trim().to_string()),
            description: Set(film.description.clone()),
            release_year: Set(film.release_year),
            rental_duration: Set(film.rental_duration.unwrap_or(DEFAULT_RENTAL_DURATION)),
            rental_rate: Set(film.rental_rate.unwrap_or(DEFAULT_RENTAL_RATE)),
            length: Set(film.length),
            replacement_cost: Set(film
                .replacement_cost
                .unwrap_or(DEFAULT_REPLACEMENT_COST)),
            rating: Set(film.rating.unwrap_or_default()),
            special_features: Set(film.special_features.clone()),
            last_update: Set(super::super::timestamp()),
            ..Default::default()
        };

        let result = Film::insert(active_model).exec(&self.conn).await?;

        info!("Created film {}: {}", result.last_insert_id, film.title);
        Ok(result.last_insert_id)
    }

    /// Applies the supplied fields and returns the number of rows changed.
    pub async fn update(&self, id: i32, patch: &FilmPatch) -> anyhow::Result<u64> {
        let mut model = film::ActiveModel {
            last_update: Set(super::super::timestamp()),
            ..Default::default()
        };

        if let Some(title) = &patch.title {
            model.title = Set(title.trim().to_string());
        }
        if let Some(description) = &patch.description {
            model.description = Set(Some(description.clone()));
        }
        if let Some(year) = patch.release_year {
            model.release_year = Set(Some(year));
        }
        if let Some(duration) = patch.rental_duration {
            model.rental_duration = Set(duration);
        }
        if let Some(rate) = patch.rental_rate {
            model.rental_rate = Set(rate);
        }
        if let Some(length) = patch.length {
            model.length = Set(Some(length));
        }
        if let Some(cost) = patch.replacement_cost {
            model.replacement_cost = Set(cost);
        }
        if let Some(rating) = patch.rating {
            model.rating = Set(rating);
        }
        if let Some(features) = &patch.special_features {
            model.special_features = Set(Some(features.clone()));
        }

        let result = Film::update_many()
            .set(model)
            .filter(film::Column::FilmId.eq(id))
            .exec(&self.conn)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn delete(&self, id: i32) -> anyhow::Result<u64> {
        let result = Film::delete_by_id(id).exec(&self.conn).await?;

        if result.rows_affected > 0 {
            info!("Deleted film with ID: {}", id);
        }
        Ok(result.rows_affected)
    }
}

#[cfg(test)]
mod tests {
    use super::escape_like;

    #[test]
    fn test_escape_like() {
        assert_eq!(escape_like("ALIEN"), "ALIEN");
        assert_eq!(escape_like("100%"), "100\\%");
        assert_eq!(escape_like("a_b\\c"), "a\\_b\\\\c");
    }
}
