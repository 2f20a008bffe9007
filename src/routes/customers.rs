use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::get,
};

use crate::{
    dto::{
        customers::{AddressList, CreateAddressRequest, CreateCustomerRequest, CustomerList},
        orders::OrderList,
    },
    error::AppResult,
    models::{AddressView, CustomerView, OrderedProducts},
    response::ApiResponse,
    routes::params::ListQuery,
    services::{customer_service, order_service},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_customers).post(create_customer))
        .route("/{id}", get(get_customer).delete(delete_customer))
        .route("/{id}/addresses", get(list_addresses).post(add_address))
        .route("/{id}/orders", get(list_customer_orders))
        .route("/{id}/ordered-products", get(ordered_products))
}

#[utoipa::path(
    get,
    path = "/api/customers",
    params(ListQuery),
    responses(
        (status = 200, description = "List customers", body = ApiResponse<CustomerList>),
    ),
    tag = "Customers"
)]
pub async fn list_customers(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<ApiResponse<CustomerList>>> {
    let resp = customer_service::list_customers(&state, query).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/customers",
    request_body = CreateCustomerRequest,
    responses(
        (status = 200, description = "Customer created", body = ApiResponse<CustomerView>),
        (status = 400, description = "Validation error"),
    ),
    tag = "Customers"
)]
pub async fn create_customer(
    State(state): State<AppState>,
    Json(payload): Json<CreateCustomerRequest>,
) -> AppResult<Json<ApiResponse<CustomerView>>> {
    let resp = customer_service::create_customer(&state, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/customers/{id}",
    params(("id" = i32, Path, description = "Customer ID")),
    responses(
        (status = 200, description = "Customer", body = ApiResponse<CustomerView>),
        (status = 404, description = "Not Found"),
    ),
    tag = "Customers"
)]
pub async fn get_customer(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<CustomerView>>> {
    let resp = customer_service::get_customer(&state, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/customers/{id}",
    params(("id" = i32, Path, description = "Customer ID")),
    responses(
        (status = 200, description = "Customer deleted"),
        (status = 404, description = "Not Found"),
        (status = 409, description = "Customer has orders"),
    ),
    tag = "Customers"
)]
pub async fn delete_customer(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let resp = customer_service::delete_customer(&state, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/customers/{id}/addresses",
    params(("id" = i32, Path, description = "Customer ID")),
    responses(
        (status = 200, description = "Customer addresses", body = ApiResponse<AddressList>),
        (status = 404, description = "Not Found"),
    ),
    tag = "Customers"
)]
pub async fn list_addresses(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<AddressList>>> {
    let resp = customer_service::list_addresses(&state, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/customers/{id}/addresses",
    params(("id" = i32, Path, description = "Customer ID")),
    request_body = CreateAddressRequest,
    responses(
        (status = 200, description = "Address created", body = ApiResponse<AddressView>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Not Found"),
    ),
    tag = "Customers"
)]
pub async fn add_address(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<CreateAddressRequest>,
) -> AppResult<Json<ApiResponse<AddressView>>> {
    let resp = customer_service::add_address(&state, id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/customers/{id}/orders",
    params(("id" = i32, Path, description = "Customer ID")),
    responses(
        (status = 200, description = "Orders of a customer, newest first", body = ApiResponse<OrderList>),
        (status = 404, description = "Not Found"),
    ),
    tag = "Customers"
)]
pub async fn list_customer_orders(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<OrderList>>> {
    let resp = order_service::list_customer_orders(&state, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/customers/{id}/ordered-products",
    params(("id" = i32, Path, description = "Customer ID")),
    responses(
        (status = 200, description = "Distinct titles the customer has ordered", body = ApiResponse<OrderedProducts>),
        (status = 404, description = "Not Found"),
    ),
    tag = "Customers"
)]
pub async fn ordered_products(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<OrderedProducts>>> {
    let resp = customer_service::ordered_products(&state, id).await?;
    Ok(Json(resp))
}
