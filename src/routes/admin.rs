use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::{get, patch, post},
};

use crate::{
    dto::{
        admin::{
            ClearInventoryRequest, CollectionAdminList, CustomerAdminList, OrderAdminList,
            ProductAdminList,
        },
        customers::UpdateMembershipRequest,
        orders::UpdatePaymentStatusRequest,
    },
    error::AppResult,
    models::{ClearInventoryResult, CustomerView, OrderView, OrderWithItems, ProductAdminDetail},
    response::ApiResponse,
    routes::params::{AdminProductQuery, ListQuery},
    services::admin_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/products", get(list_products))
        .route("/products/clear-inventory", post(clear_inventory))
        .route("/products/{id}", get(get_product_admin))
        .route("/customers", get(list_customers))
        .route("/customers/{id}/membership", patch(update_membership))
        .route("/collections", get(list_collections))
        .route("/orders", get(list_orders))
        .route("/orders/{id}", get(get_order_admin))
        .route("/orders/{id}/payment-status", patch(update_payment_status))
}

#[utoipa::path(
    get,
    path = "/api/admin/products",
    params(AdminProductQuery),
    responses(
        (status = 200, description = "Product rows with inventory status and collection", body = ApiResponse<ProductAdminList>),
    ),
    tag = "Admin"
)]
pub async fn list_products(
    State(state): State<AppState>,
    Query(query): Query<AdminProductQuery>,
) -> AppResult<Json<ApiResponse<ProductAdminList>>> {
    let resp = admin_service::list_products(&state, query).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/admin/products/{id}",
    params(("id" = i32, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product with inline panels", body = ApiResponse<ProductAdminDetail>),
        (status = 404, description = "Not Found"),
    ),
    tag = "Admin"
)]
pub async fn get_product_admin(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<ProductAdminDetail>>> {
    let resp = admin_service::product_detail(&state, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/admin/products/clear-inventory",
    request_body = ClearInventoryRequest,
    responses(
        (status = 200, description = "Inventory cleared; reports rows actually updated", body = ApiResponse<ClearInventoryResult>),
    ),
    tag = "Admin"
)]
pub async fn clear_inventory(
    State(state): State<AppState>,
    Json(payload): Json<ClearInventoryRequest>,
) -> AppResult<Json<ApiResponse<ClearInventoryResult>>> {
    let resp = admin_service::clear_inventory(&state, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/admin/customers",
    params(ListQuery),
    responses(
        (status = 200, description = "Customer rows with ordered products", body = ApiResponse<CustomerAdminList>),
    ),
    tag = "Admin"
)]
pub async fn list_customers(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<ApiResponse<CustomerAdminList>>> {
    let resp = admin_service::list_customers(&state, query).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    patch,
    path = "/api/admin/customers/{id}/membership",
    params(("id" = i32, Path, description = "Customer ID")),
    request_body = UpdateMembershipRequest,
    responses(
        (status = 200, description = "Membership updated", body = ApiResponse<CustomerView>),
        (status = 400, description = "Unknown membership code"),
        (status = 404, description = "Not Found"),
    ),
    tag = "Admin"
)]
pub async fn update_membership(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateMembershipRequest>,
) -> AppResult<Json<ApiResponse<CustomerView>>> {
    let resp = admin_service::update_membership(&state, id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/admin/collections",
    params(ListQuery),
    responses(
        (status = 200, description = "Collection rows with product counts", body = ApiResponse<CollectionAdminList>),
    ),
    tag = "Admin"
)]
pub async fn list_collections(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<ApiResponse<CollectionAdminList>>> {
    let resp = admin_service::list_collections(&state, query).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/admin/orders",
    params(ListQuery),
    responses(
        (status = 200, description = "Order rows, newest first", body = ApiResponse<OrderAdminList>),
    ),
    tag = "Admin"
)]
pub async fn list_orders(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<ApiResponse<OrderAdminList>>> {
    let resp = admin_service::list_orders(&state, query).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/admin/orders/{id}",
    params(("id" = i32, Path, description = "Order ID")),
    responses(
        (status = 200, description = "Order with items", body = ApiResponse<OrderWithItems>),
        (status = 404, description = "Not Found"),
    ),
    tag = "Admin"
)]
pub async fn get_order_admin(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<OrderWithItems>>> {
    let resp = admin_service::order_detail(&state, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    patch,
    path = "/api/admin/orders/{id}/payment-status",
    params(("id" = i32, Path, description = "Order ID")),
    request_body = UpdatePaymentStatusRequest,
    responses(
        (status = 200, description = "Payment status updated", body = ApiResponse<OrderView>),
        (status = 400, description = "Unknown payment status"),
        (status = 404, description = "Not Found"),
    ),
    tag = "Admin"
)]
pub async fn update_payment_status(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdatePaymentStatusRequest>,
) -> AppResult<Json<ApiResponse<OrderView>>> {
    let resp = admin_service::update_payment_status(&state, id, payload).await?;
    Ok(Json(resp))
}
