//! Main application router.

use crate::{
    controllers::{auth_controller, dish_controller, health_controller, user_controller},
    middleware::logging_middleware,
    openapi::ApiDoc,
    state::AppState,
};
use axum::{middleware, routing::get, Json, Router};
use pizza_config::ServerConfig;
use pizza_core::HealthCheck;
use pizza_service::{DishService, UserService};
use shaku::{HasComponent, Module};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use utoipa::OpenApi;

/// Creates the main application router from a Shaku module.
///
/// The module must provide `UserService` and `DishService` components.
pub fn create_router<M>(
    module: &M,
    server_config: &ServerConfig,
    health_checks: Vec<Arc<dyn HealthCheck>>,
) -> Router
where
    M: Module + HasComponent<dyn UserService> + HasComponent<dyn DishService>,
{
    let state = health_checks
        .into_iter()
        .fold(AppState::from_module(module), AppState::with_health_check);

    create_router_with_state(state, server_config)
}

/// Creates the router over an already assembled state.
pub fn create_router_with_state(state: AppState, server_config: &ServerConfig) -> Router {
    let mut router = Router::new()
        .merge(health_controller::router())
        .merge(auth_controller::router())
        .merge(user_controller::router())
        .merge(dish_controller::router())
        .route("/api-docs/openapi.json", get(openapi_json))
        .with_state(state);

    if server_config.cors_enabled {
        router = router.layer(CorsLayer::permissive());
    }

    let router = router
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(logging_middleware));

    info!("Router created with REST endpoints and OpenAPI document at /api-docs/openapi.json");
    router
}

/// Serves the generated OpenAPI document.
async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
