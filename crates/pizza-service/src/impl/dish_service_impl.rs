//! Dish service implementations.

use crate::dish_service::DishService;
use crate::dto::DishListResponse;
use async_trait::async_trait;
use pizza_core::PizzaResult;
use pizza_repository::DishRepository;
use shaku::Component;
use std::sync::Arc;
use tracing::debug;

/// Generic dish service implementation (non-DI).
pub struct DishServiceImpl<R: DishRepository> {
    dish_repository: Arc<R>,
}

impl<R: DishRepository> DishServiceImpl<R> {
    /// Creates a new dish service.
    pub fn new(dish_repository: Arc<R>) -> Self {
        Self { dish_repository }
    }
}

#[async_trait]
impl<R: DishRepository + 'static> DishService for DishServiceImpl<R> {
    async fn list_dishes(&self) -> PizzaResult<DishListResponse> {
        list_dishes(&*self.dish_repository).await
    }
}

/// Concrete dish service component for Shaku DI.
#[derive(Component)]
#[shaku(interface = DishService)]
pub struct DishServiceComponent {
    #[shaku(inject)]
    dish_repository: Arc<dyn DishRepository>,
}

#[async_trait]
impl DishService for DishServiceComponent {
    async fn list_dishes(&self) -> PizzaResult<DishListResponse> {
        list_dishes(&*self.dish_repository).await
    }
}

async fn list_dishes<R: DishRepository + ?Sized>(repository: &R) -> PizzaResult<DishListResponse> {
    debug!("Listing dishes");

    let dishes = repository.find_all().await?;
    debug!("Found {} dishes", dishes.len());

    Ok(DishListResponse::from(dishes))
}
