use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, post},
};

use crate::{
    dto::tags::{CreateTagRequest, TagList, TagObjectRequest},
    error::AppResult,
    models::TagView,
    response::ApiResponse,
    services::tag_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/tags", get(list_tags).post(create_tag))
        .route("/tags/{id}/items", post(tag_object))
        .route("/tagged/{content_kind}/{object_id}", get(list_object_tags))
}

#[utoipa::path(
    get,
    path = "/api/tags",
    responses(
        (status = 200, description = "List tags", body = ApiResponse<TagList>),
    ),
    tag = "Tags"
)]
pub async fn list_tags(State(state): State<AppState>) -> AppResult<Json<ApiResponse<TagList>>> {
    let resp = tag_service::list_tags(&state).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/tags",
    request_body = CreateTagRequest,
    responses(
        (status = 200, description = "Tag created", body = ApiResponse<TagView>),
        (status = 400, description = "Empty or duplicate label"),
    ),
    tag = "Tags"
)]
pub async fn create_tag(
    State(state): State<AppState>,
    Json(payload): Json<CreateTagRequest>,
) -> AppResult<Json<ApiResponse<TagView>>> {
    let resp = tag_service::create_tag(&state, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/tags/{id}/items",
    params(("id" = i32, Path, description = "Tag ID")),
    request_body = TagObjectRequest,
    responses(
        (status = 200, description = "Object tagged", body = ApiResponse<TagView>),
        (status = 400, description = "Unknown kind or object"),
        (status = 404, description = "Not Found"),
    ),
    tag = "Tags"
)]
pub async fn tag_object(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<TagObjectRequest>,
) -> AppResult<Json<ApiResponse<TagView>>> {
    let resp = tag_service::tag_object(&state, id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/tagged/{content_kind}/{object_id}",
    params(
        ("content_kind" = String, Path, description = "product, collection or customer"),
        ("object_id" = i32, Path, description = "Tagged object ID"),
    ),
    responses(
        (status = 200, description = "Tags of an object", body = ApiResponse<TagList>),
        (status = 400, description = "Unknown kind"),
    ),
    tag = "Tags"
)]
pub async fn list_object_tags(
    State(state): State<AppState>,
    Path((content_kind, object_id)): Path<(String, i32)>,
) -> AppResult<Json<ApiResponse<TagList>>> {
    let resp = tag_service::list_object_tags(&state, &content_kind, object_id).await?;
    Ok(Json(resp))
}
