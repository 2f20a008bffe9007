use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, patch, post},
};
use uuid::Uuid;

use crate::{
    dto::cart::{AddToCartRequest, CheckoutRequest, UpdateCartItemRequest},
    error::AppResult,
    models::{CartItemView, CartView, OrderWithItems},
    response::ApiResponse,
    services::cart_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_cart))
        .route("/{id}", get(get_cart).delete(delete_cart))
        .route("/{id}/items", post(add_to_cart))
        .route(
            "/{id}/items/{item_id}",
            patch(update_cart_item).delete(remove_from_cart),
        )
        .route("/{id}/checkout", post(checkout))
}

#[utoipa::path(
    post,
    path = "/api/carts",
    responses(
        (status = 200, description = "Empty cart created", body = ApiResponse<CartView>),
    ),
    tag = "Cart"
)]
pub async fn create_cart(State(state): State<AppState>) -> AppResult<Json<ApiResponse<CartView>>> {
    let resp = cart_service::create_cart(&state).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/carts/{id}",
    params(("id" = Uuid, Path, description = "Cart ID")),
    responses(
        (status = 200, description = "Cart with lines at current prices", body = ApiResponse<CartView>),
        (status = 404, description = "Not Found"),
    ),
    tag = "Cart"
)]
pub async fn get_cart(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<CartView>>> {
    let resp = cart_service::get_cart(&state, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/carts/{id}",
    params(("id" = Uuid, Path, description = "Cart ID")),
    responses(
        (status = 200, description = "Cart deleted"),
        (status = 404, description = "Not Found"),
    ),
    tag = "Cart"
)]
pub async fn delete_cart(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let resp = cart_service::delete_cart(&state, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/carts/{id}/items",
    params(("id" = Uuid, Path, description = "Cart ID")),
    request_body = AddToCartRequest,
    responses(
        (status = 200, description = "Line added", body = ApiResponse<CartItemView>),
        (status = 400, description = "Invalid quantity, unknown or duplicate product"),
        (status = 404, description = "Not Found"),
    ),
    tag = "Cart"
)]
pub async fn add_to_cart(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<AddToCartRequest>,
) -> AppResult<Json<ApiResponse<CartItemView>>> {
    let resp = cart_service::add_item(&state, id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    patch,
    path = "/api/carts/{id}/items/{item_id}",
    params(
        ("id" = Uuid, Path, description = "Cart ID"),
        ("item_id" = i32, Path, description = "Cart item ID"),
    ),
    request_body = UpdateCartItemRequest,
    responses(
        (status = 200, description = "Quantity updated", body = ApiResponse<CartItemView>),
        (status = 400, description = "Invalid quantity"),
        (status = 404, description = "Not Found"),
    ),
    tag = "Cart"
)]
pub async fn update_cart_item(
    State(state): State<AppState>,
    Path((id, item_id)): Path<(Uuid, i32)>,
    Json(payload): Json<UpdateCartItemRequest>,
) -> AppResult<Json<ApiResponse<CartItemView>>> {
    let resp = cart_service::update_item(&state, id, item_id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/carts/{id}/items/{item_id}",
    params(
        ("id" = Uuid, Path, description = "Cart ID"),
        ("item_id" = i32, Path, description = "Cart item ID"),
    ),
    responses(
        (status = 200, description = "Line removed"),
        (status = 404, description = "Not Found"),
    ),
    tag = "Cart"
)]
pub async fn remove_from_cart(
    State(state): State<AppState>,
    Path((id, item_id)): Path<(Uuid, i32)>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let resp = cart_service::remove_item(&state, id, item_id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/carts/{id}/checkout",
    params(("id" = Uuid, Path, description = "Cart ID")),
    request_body = CheckoutRequest,
    responses(
        (status = 200, description = "Cart turned into an order", body = ApiResponse<OrderWithItems>),
        (status = 400, description = "Empty cart or unknown customer"),
        (status = 404, description = "Not Found"),
    ),
    tag = "Cart"
)]
pub async fn checkout(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<CheckoutRequest>,
) -> AppResult<Json<ApiResponse<OrderWithItems>>> {
    let resp = cart_service::checkout(&state, id, payload).await?;
    Ok(Json(resp))
}
