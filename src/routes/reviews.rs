use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};

use crate::{
    dto::reviews::{CreateReviewRequest, ReviewList},
    error::AppResult,
    models::ReviewView,
    response::ApiResponse,
    services::review_service,
    state::AppState,
};

/// Merged into the product router; `{id}` is the product.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{id}/reviews", get(list_reviews).post(create_review))
        .route(
            "/{id}/reviews/{review_id}",
            get(get_review).delete(delete_review),
        )
}

#[utoipa::path(
    get,
    path = "/api/products/{id}/reviews",
    params(("id" = i32, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Reviews of a product", body = ApiResponse<ReviewList>),
        (status = 404, description = "Not Found"),
    ),
    tag = "Reviews"
)]
pub async fn list_reviews(
    State(state): State<AppState>,
    Path(product_id): Path<i32>,
) -> AppResult<Json<ApiResponse<ReviewList>>> {
    let resp = review_service::list_reviews(&state, product_id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/products/{id}/reviews",
    params(("id" = i32, Path, description = "Product ID")),
    request_body = CreateReviewRequest,
    responses(
        (status = 200, description = "Review created", body = ApiResponse<ReviewView>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Not Found"),
    ),
    tag = "Reviews"
)]
pub async fn create_review(
    State(state): State<AppState>,
    Path(product_id): Path<i32>,
    Json(payload): Json<CreateReviewRequest>,
) -> AppResult<Json<ApiResponse<ReviewView>>> {
    let resp = review_service::create_review(&state, product_id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/products/{id}/reviews/{review_id}",
    params(
        ("id" = i32, Path, description = "Product ID"),
        ("review_id" = i32, Path, description = "Review ID"),
    ),
    responses(
        (status = 200, description = "Review", body = ApiResponse<ReviewView>),
        (status = 404, description = "Not Found"),
    ),
    tag = "Reviews"
)]
pub async fn get_review(
    State(state): State<AppState>,
    Path((product_id, id)): Path<(i32, i32)>,
) -> AppResult<Json<ApiResponse<ReviewView>>> {
    let resp = review_service::get_review(&state, product_id, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/products/{id}/reviews/{review_id}",
    params(
        ("id" = i32, Path, description = "Product ID"),
        ("review_id" = i32, Path, description = "Review ID"),
    ),
    responses(
        (status = 200, description = "Review deleted"),
        (status = 404, description = "Not Found"),
    ),
    tag = "Reviews"
)]
pub async fn delete_review(
    State(state): State<AppState>,
    Path((product_id, id)): Path<(i32, i32)>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let resp = review_service::delete_review(&state, product_id, id).await?;
    Ok(Json(resp))
}
