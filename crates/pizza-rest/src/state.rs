//! Application state for Axum handlers.

use pizza_core::HealthCheck;
use pizza_service::{DishService, UserService};
use shaku::{HasComponent, Module};
use std::sync::Arc;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserService>,
    pub dish_service: Arc<dyn DishService>,
    /// Checks consulted by the readiness endpoint.
    pub health_checks: Vec<Arc<dyn HealthCheck>>,
}

impl AppState {
    /// Creates a new application state with no health checks.
    pub fn new(user_service: Arc<dyn UserService>, dish_service: Arc<dyn DishService>) -> Self {
        Self {
            user_service,
            dish_service,
            health_checks: Vec::new(),
        }
    }

    /// Resolves the services from a Shaku module.
    pub fn from_module<M>(module: &M) -> Self
    where
        M: Module + HasComponent<dyn UserService> + HasComponent<dyn DishService>,
    {
        let user_service: Arc<dyn UserService> = module.resolve();
        let dish_service: Arc<dyn DishService> = module.resolve();
        Self::new(user_service, dish_service)
    }

    /// Registers a readiness check.
    #[must_use]
    pub fn with_health_check(mut self, check: Arc<dyn HealthCheck>) -> Self {
        self.health_checks.push(check);
        self
    }
}
