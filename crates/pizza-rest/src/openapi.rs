//! OpenAPI documentation configuration.

use crate::controllers::HealthResponse;
use pizza_service::{
    DishListResponse, DishResponse, GetUserRequest, LoginRequest, RegisterRequest,
    UpdateUserRequest, UserResponse,
};
use utoipa::OpenApi;

/// OpenAPI documentation for the pizza API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Pizza API",
        description = "User registration, login, profiles and the dish menu",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    ),
    paths(
        crate::controllers::auth_controller::register,
        crate::controllers::auth_controller::login,
        crate::controllers::user_controller::get_user,
        crate::controllers::user_controller::update_user,
        crate::controllers::dish_controller::list_dishes,
        crate::controllers::health_controller::health_check,
        crate::controllers::health_controller::readiness_check,
        crate::controllers::health_controller::liveness_check,
    ),
    components(
        schemas(
            RegisterRequest,
            LoginRequest,
            GetUserRequest,
            UpdateUserRequest,
            UserResponse,
            DishResponse,
            DishListResponse,
            HealthResponse,
        )
    ),
    tags(
        (name = "users", description = "Registration, login and profile endpoints"),
        (name = "dishes", description = "Menu endpoints"),
        (name = "health", description = "Health check endpoints")
    )
)]
pub struct ApiDoc;
