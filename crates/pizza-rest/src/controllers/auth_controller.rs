//! Registration and login controller.

use crate::{extractors::JsonBody, responses::ApiResult, state::AppState};
use axum::{extract::State, http::StatusCode, routing::post, Router};
use pizza_service::{LoginRequest, RegisterRequest};
use tracing::debug;

/// Creates the auth router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
}

/// Register a new user.
#[utoipa::path(
    post,
    path = "/register",
    tag = "users",
    request_body = RegisterRequest,
    responses(
        (status = 200, description = "User registered"),
        (status = 400, description = "Malformed request body"),
        (status = 500, description = "Insert failed, e.g. duplicate login")
    )
)]
pub async fn register(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<RegisterRequest>,
) -> ApiResult<StatusCode> {
    debug!("Register request: {}", request.login);

    state.user_service.register(request).await?;
    Ok(StatusCode::OK)
}

/// Check a login/password pair.
#[utoipa::path(
    post,
    path = "/login",
    tag = "users",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Credentials match"),
        (status = 400, description = "Malformed request body"),
        (status = 401, description = "Invalid login credentials")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<LoginRequest>,
) -> ApiResult<StatusCode> {
    debug!("Login request: {}", request.login);

    state.user_service.login(request).await?;
    Ok(StatusCode::OK)
}
