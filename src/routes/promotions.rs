use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, post},
};

use crate::{
    dto::promotions::{CreatePromotionRequest, PromotionList},
    error::AppResult,
    models::PromotionView,
    response::ApiResponse,
    services::promotion_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(list_promotions).post(create_promotion))
}

/// Merged into the product router; `{id}` is the product.
pub fn product_links() -> Router<AppState> {
    Router::new().route(
        "/{id}/promotions/{promotion_id}",
        post(attach_promotion).delete(detach_promotion),
    )
}

#[utoipa::path(
    get,
    path = "/api/promotions",
    responses(
        (status = 200, description = "List promotions", body = ApiResponse<PromotionList>),
    ),
    tag = "Promotions"
)]
pub async fn list_promotions(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<PromotionList>>> {
    let resp = promotion_service::list_promotions(&state).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/promotions",
    request_body = CreatePromotionRequest,
    responses(
        (status = 200, description = "Promotion created", body = ApiResponse<PromotionView>),
        (status = 400, description = "Validation error"),
    ),
    tag = "Promotions"
)]
pub async fn create_promotion(
    State(state): State<AppState>,
    Json(payload): Json<CreatePromotionRequest>,
) -> AppResult<Json<ApiResponse<PromotionView>>> {
    let resp = promotion_service::create_promotion(&state, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/products/{id}/promotions/{promotion_id}",
    params(
        ("id" = i32, Path, description = "Product ID"),
        ("promotion_id" = i32, Path, description = "Promotion ID"),
    ),
    responses(
        (status = 200, description = "Promotion attached", body = ApiResponse<PromotionView>),
        (status = 404, description = "Not Found"),
    ),
    tag = "Promotions"
)]
pub async fn attach_promotion(
    State(state): State<AppState>,
    Path((product_id, promotion_id)): Path<(i32, i32)>,
) -> AppResult<Json<ApiResponse<PromotionView>>> {
    let resp = promotion_service::attach_promotion(&state, product_id, promotion_id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/products/{id}/promotions/{promotion_id}",
    params(
        ("id" = i32, Path, description = "Product ID"),
        ("promotion_id" = i32, Path, description = "Promotion ID"),
    ),
    responses(
        (status = 200, description = "Promotion detached"),
        (status = 404, description = "Not Found"),
    ),
    tag = "Promotions"
)]
pub async fn detach_promotion(
    State(state): State<AppState>,
    Path((product_id, promotion_id)): Path<(i32, i32)>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let resp = promotion_service::detach_promotion(&state, product_id, promotion_id).await?;
    Ok(Json(resp))
}
