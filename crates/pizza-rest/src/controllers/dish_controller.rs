//! Menu controller.

use crate::{responses::ApiResult, state::AppState};
use axum::{extract::State, routing::get, Json, Router};
use pizza_service::DishListResponse;

/// Creates the dish router.
pub fn router() -> Router<AppState> {
    Router::new().route("/getAllDishes", get(list_dishes))
}

/// List every dish.
#[utoipa::path(
    get,
    path = "/getAllDishes",
    tag = "dishes",
    responses(
        (status = 200, description = "The full menu", body = DishListResponse),
        (status = 500, description = "Storage or tags decoding failure")
    )
)]
pub async fn list_dishes(State(state): State<AppState>) -> ApiResult<Json<DishListResponse>> {
    let response = state.dish_service.list_dishes().await?;
    Ok(Json(response))
}
