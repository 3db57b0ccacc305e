//! Dish service trait definition.

use crate::dto::DishListResponse;
use async_trait::async_trait;
use pizza_core::{Interface, PizzaResult};

/// Dish service trait.
#[async_trait]
pub trait DishService: Interface + Send + Sync {
    /// Lists every dish on the menu.
    async fn list_dishes(&self) -> PizzaResult<DishListResponse>;
}
