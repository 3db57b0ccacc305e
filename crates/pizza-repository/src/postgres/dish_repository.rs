//! Postgres dish repository implementation.

use crate::{traits::DishRepository, DatabasePoolInterface};
use async_trait::async_trait;
use pizza_core::{Dish, PizzaError, PizzaResult, Tags};
use shaku::Component;
use sqlx::FromRow;
use std::sync::Arc;
use tracing::debug;

/// Postgres dish repository implementation.
#[derive(Component, Clone)]
#[shaku(interface = DishRepository)]
pub struct PgDishRepository {
    #[shaku(inject)]
    pool: Arc<dyn DatabasePoolInterface>,
}

impl PgDishRepository {
    /// Creates a new Postgres dish repository.
    #[must_use]
    pub fn new(pool: Arc<dyn DatabasePoolInterface>) -> Self {
        Self { pool }
    }
}

/// Database row representation of a dish.
///
/// `tags` is selected as text so json, jsonb and text columns all decode the same way.
#[derive(Debug, FromRow)]
struct DishRow {
    id: i64,
    name: String,
    price: i64,
    description: String,
    image_url: String,
    tags: Option<String>,
}

impl TryFrom<DishRow> for Dish {
    type Error = PizzaError;

    fn try_from(row: DishRow) -> Result<Self, Self::Error> {
        let tags = Tags::decode(row.tags.as_deref().map(str::as_bytes))?;

        Ok(Self {
            id: row.id,
            name: row.name,
            price: row.price,
            description: row.description,
            image_url: row.image_url,
            tags,
        })
    }
}

#[async_trait]
impl DishRepository for PgDishRepository {
    async fn find_all(&self) -> PizzaResult<Vec<Dish>> {
        debug!("Finding all dishes");

        let rows = sqlx::query_as::<_, DishRow>(
            r"
            SELECT id::bigint AS id, name, price::bigint AS price,
                   description, image_url, tags::text AS tags
            FROM dish
            ORDER BY id
            ",
        )
        .fetch_all(self.pool.inner())
        .await?;

        rows.into_iter().map(Dish::try_from).collect()
    }
}
