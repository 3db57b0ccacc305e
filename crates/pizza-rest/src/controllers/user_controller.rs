//! User profile controller.

use crate::{extractors::JsonBody, responses::ApiResult, state::AppState};
use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use pizza_service::{GetUserRequest, UpdateUserRequest, UserResponse};
use tracing::debug;

/// Creates the user router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/user/get", post(get_user))
        .route("/user/set", post(update_user))
}

/// Get a user by login.
#[utoipa::path(
    post,
    path = "/user/get",
    tag = "users",
    request_body = GetUserRequest,
    responses(
        (status = 200, description = "User found", body = UserResponse),
        (status = 400, description = "Malformed request body"),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<GetUserRequest>,
) -> ApiResult<Json<UserResponse>> {
    debug!("Get user request: {}", request.login);

    let response = state.user_service.get_user(request).await?;
    Ok(Json(response))
}

/// Overwrite a user's email, phone and address.
#[utoipa::path(
    post,
    path = "/user/set",
    tag = "users",
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "Profile written"),
        (status = 400, description = "Malformed request body"),
        (status = 500, description = "Update failed")
    )
)]
pub async fn update_user(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<UpdateUserRequest>,
) -> ApiResult<StatusCode> {
    debug!("Update user request: {}", request.login);

    state.user_service.update_user(request).await?;
    Ok(StatusCode::OK)
}
