//! Tags attach to rows of a closed set of kinds through `tagged_items`,
//! keyed by `(content_kind, object_id)`.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, JoinType, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, RelationTrait, Set,
};

use crate::{
    domain::{
        ValidationError,
        tags::{TaggableKind, validate_label},
    },
    dto::tags::{CreateTagRequest, TagList, TagObjectRequest},
    entity::{Collections, Customers, Products, TaggedItems, Tags, tagged_items, tags},
    error::{AppError, AppResult},
    models::TagView,
    response::{ApiResponse, Meta},
    state::AppState,
};

pub async fn list_tags(state: &AppState) -> AppResult<ApiResponse<TagList>> {
    let items: Vec<TagView> = Tags::find()
        .order_by_asc(tags::Column::Label)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(TagView::from)
        .collect();

    let total = items.len() as i64;
    Ok(ApiResponse::success(
        "Tags",
        TagList { items },
        Some(Meta::new(1, total, total)),
    ))
}

pub async fn create_tag(
    state: &AppState,
    payload: CreateTagRequest,
) -> AppResult<ApiResponse<TagView>> {
    let label = validate_label(&payload.label)?;
    let tag = tags::ActiveModel {
        label: Set(label),
        ..Default::default()
    }
    .insert(&state.orm)
    .await
    .map_err(|err| AppError::from_insert(err, ValidationError::new("label", "already exists")))?;

    Ok(ApiResponse::success(
        "Tag created",
        TagView::from(tag),
        Some(Meta::empty()),
    ))
}

/// Attaches a tag to an existing object. Tagging twice is a no-op.
pub async fn tag_object(
    state: &AppState,
    tag_id: i32,
    payload: TagObjectRequest,
) -> AppResult<ApiResponse<TagView>> {
    let kind = TaggableKind::parse(&payload.content_kind)?;
    let tag = Tags::find_by_id(tag_id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound)?;
    if !object_exists(&state.orm, kind, payload.object_id).await? {
        return Err(ValidationError::new("object_id", "does not exist").into());
    }

    let tagged = TaggedItems::find()
        .filter(tagged_items::Column::TagId.eq(tag_id))
        .filter(tagged_items::Column::ContentKind.eq(kind.code()))
        .filter(tagged_items::Column::ObjectId.eq(payload.object_id))
        .count(&state.orm)
        .await?
        > 0;
    if !tagged {
        tagged_items::ActiveModel {
            tag_id: Set(tag_id),
            content_kind: Set(kind.code().to_string()),
            object_id: Set(payload.object_id),
            ..Default::default()
        }
        .insert(&state.orm)
        .await?;
    }

    Ok(ApiResponse::success(
        "Tagged",
        TagView::from(tag),
        Some(Meta::empty()),
    ))
}

pub async fn list_object_tags(
    state: &AppState,
    kind: &str,
    object_id: i32,
) -> AppResult<ApiResponse<TagList>> {
    let kind = TaggableKind::parse(kind)?;
    let items = tags_for(&state.orm, kind, object_id).await?;
    let total = items.len() as i64;
    Ok(ApiResponse::success(
        "Tags",
        TagList { items },
        Some(Meta::new(1, total, total)),
    ))
}

pub(crate) async fn tags_for<C: ConnectionTrait>(
    conn: &C,
    kind: TaggableKind,
    object_id: i32,
) -> AppResult<Vec<TagView>> {
    let tags = Tags::find()
        .join(JoinType::InnerJoin, tags::Relation::TaggedItems.def())
        .filter(tagged_items::Column::ContentKind.eq(kind.code()))
        .filter(tagged_items::Column::ObjectId.eq(object_id))
        .order_by_asc(tags::Column::Label)
        .all(conn)
        .await?;
    Ok(tags.into_iter().map(TagView::from).collect())
}

async fn object_exists<C: ConnectionTrait>(
    conn: &C,
    kind: TaggableKind,
    object_id: i32,
) -> AppResult<bool> {
    let count = match kind {
        TaggableKind::Product => Products::find_by_id(object_id).count(conn).await?,
        TaggableKind::Collection => Collections::find_by_id(object_id).count(conn).await?,
        TaggableKind::Customer => Customers::find_by_id(object_id).count(conn).await?,
    };
    Ok(count > 0)
}
