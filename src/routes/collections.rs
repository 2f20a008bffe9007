use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::get,
};

use crate::{
    dto::collections::{CollectionList, CollectionRequest},
    error::AppResult,
    models::CollectionView,
    response::ApiResponse,
    routes::params::ListQuery,
    services::collection_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_collections).post(create_collection))
        .route(
            "/{id}",
            get(get_collection)
                .put(update_collection)
                .delete(delete_collection),
        )
}

#[utoipa::path(
    get,
    path = "/api/collections",
    params(ListQuery),
    responses(
        (status = 200, description = "Collections with product counts, ordered by title", body = ApiResponse<CollectionList>),
    ),
    tag = "Collections"
)]
pub async fn list_collections(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<ApiResponse<CollectionList>>> {
    let resp = collection_service::list_collections(&state, query).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/collections",
    request_body = CollectionRequest,
    responses(
        (status = 200, description = "Collection created", body = ApiResponse<CollectionView>),
        (status = 400, description = "Validation error"),
    ),
    tag = "Collections"
)]
pub async fn create_collection(
    State(state): State<AppState>,
    Json(payload): Json<CollectionRequest>,
) -> AppResult<Json<ApiResponse<CollectionView>>> {
    let resp = collection_service::create_collection(&state, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/collections/{id}",
    params(("id" = i32, Path, description = "Collection ID")),
    responses(
        (status = 200, description = "Collection", body = ApiResponse<CollectionView>),
        (status = 404, description = "Not Found"),
    ),
    tag = "Collections"
)]
pub async fn get_collection(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<CollectionView>>> {
    let resp = collection_service::get_collection(&state, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    put,
    path = "/api/collections/{id}",
    params(("id" = i32, Path, description = "Collection ID")),
    request_body = CollectionRequest,
    responses(
        (status = 200, description = "Collection updated", body = ApiResponse<CollectionView>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Not Found"),
    ),
    tag = "Collections"
)]
pub async fn update_collection(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<CollectionRequest>,
) -> AppResult<Json<ApiResponse<CollectionView>>> {
    let resp = collection_service::update_collection(&state, id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/collections/{id}",
    params(("id" = i32, Path, description = "Collection ID")),
    responses(
        (status = 200, description = "Collection deleted"),
        (status = 404, description = "Not Found"),
        (status = 409, description = "Collection has products"),
    ),
    tag = "Collections"
)]
pub async fn delete_collection(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let resp = collection_service::delete_collection(&state, id).await?;
    Ok(Json(resp))
}
