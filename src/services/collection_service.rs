use sea_orm::{
    ActiveModelTrait, Condition, ConnectionTrait, EntityTrait, FromQueryResult,
    JoinType, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, RelationTrait, Set,
    sea_query::Expr,
};

use crate::{
    audit,
    domain::{ValidationError, catalog::CollectionDraft},
    dto::collections::{CollectionList, CollectionRequest},
    entity::{
        Collections, Products,
        collections::{self, ActiveModel},
        products,
    },
    error::{AppError, AppResult},
    models::CollectionView,
    response::{ApiResponse, Meta},
    routes::params::{DEFAULT_PER_PAGE, ListQuery},
    services::{aggregation, contains_ci, integrity, read_snapshot, search_term},
    state::AppState,
};

#[derive(Debug, FromQueryResult)]
struct CollectionCountRow {
    id: i32,
    title: String,
    featured_product_id: Option<i32>,
    products_count: i64,
}

impl From<CollectionCountRow> for CollectionView {
    fn from(row: CollectionCountRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            featured_product_id: row.featured_product_id,
            products_count: row.products_count,
        }
    }
}

/// Collections ordered by title, each annotated with its product count by
/// the same grouped query that selects the page.
pub async fn list_collections(
    state: &AppState,
    query: ListQuery,
) -> AppResult<ApiResponse<CollectionList>> {
    let window = query.pagination().window(DEFAULT_PER_PAGE);
    let mut condition = Condition::all();
    if let Some(search) = search_term(query.q.as_deref()) {
        condition = condition.add(contains_ci((Collections, collections::Column::Title), search));
    }

    let txn = read_snapshot(&state.orm).await?;
    let total = Collections::find()
        .filter(condition.clone())
        .count(&txn)
        .await? as i64;
    let rows = if window.is_empty() {
        Vec::new()
    } else {
        Collections::find()
            .select_only()
            .column(collections::Column::Id)
            .column(collections::Column::Title)
            .column(collections::Column::FeaturedProductId)
            .column_as(
                Expr::col((Products, products::Column::Id)).count(),
                "products_count",
            )
            .join(JoinType::LeftJoin, collections::Relation::Products.def())
            .filter(condition)
            .group_by(collections::Column::Id)
            .group_by(collections::Column::Title)
            .group_by(collections::Column::FeaturedProductId)
            .order_by_asc(collections::Column::Title)
            .order_by_asc(collections::Column::Id)
            .limit(window.per_page as u64)
            .offset(window.offset as u64)
            .into_model::<CollectionCountRow>()
            .all(&txn)
            .await?
    };
    txn.commit().await?;

    let items = rows.into_iter().map(CollectionView::from).collect();
    Ok(ApiResponse::success(
        "Collections",
        CollectionList { items },
        Some(window.meta(total)),
    ))
}

pub async fn get_collection(state: &AppState, id: i32) -> AppResult<ApiResponse<CollectionView>> {
    let collection = Collections::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound)?;
    let products_count = aggregation::products_count(&state.orm, id).await?;

    Ok(ApiResponse::success(
        "Collection",
        view(collection, products_count),
        None,
    ))
}

pub async fn create_collection(
    state: &AppState,
    payload: CollectionRequest,
) -> AppResult<ApiResponse<CollectionView>> {
    let draft = CollectionDraft::from(payload).validate()?;
    ensure_product(&state.orm, draft.featured_product_id).await?;

    let collection = ActiveModel {
        title: Set(draft.title),
        featured_product_id: Set(draft.featured_product_id),
        ..Default::default()
    }
    .insert(&state.orm)
    .await?;

    audit::record(
        &state.orm,
        "collection_create",
        "collections",
        serde_json::json!({ "collection_id": collection.id }),
    )
    .await;

    Ok(ApiResponse::success(
        "Collection created",
        view(collection, 0),
        Some(Meta::empty()),
    ))
}

pub async fn update_collection(
    state: &AppState,
    id: i32,
    payload: CollectionRequest,
) -> AppResult<ApiResponse<CollectionView>> {
    let existing = Collections::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound)?;
    let draft = CollectionDraft::from(payload).validate()?;
    ensure_product(&state.orm, draft.featured_product_id).await?;

    let mut active: ActiveModel = existing.into();
    active.title = Set(draft.title);
    active.featured_product_id = Set(draft.featured_product_id);
    let collection = active.update(&state.orm).await?;
    let products_count = aggregation::products_count(&state.orm, id).await?;

    audit::record(
        &state.orm,
        "collection_update",
        "collections",
        serde_json::json!({ "collection_id": id }),
    )
    .await;

    Ok(ApiResponse::success(
        "Updated",
        view(collection, products_count),
        Some(Meta::empty()),
    ))
}

pub async fn delete_collection(
    state: &AppState,
    id: i32,
) -> AppResult<ApiResponse<serde_json::Value>> {
    integrity::delete_collection(&state.orm, id).await?;

    audit::record(
        &state.orm,
        "collection_delete",
        "collections",
        serde_json::json!({ "collection_id": id }),
    )
    .await;

    Ok(ApiResponse::success(
        "Deleted",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}

fn view(model: collections::Model, products_count: i64) -> CollectionView {
    CollectionView {
        id: model.id,
        title: model.title,
        featured_product_id: model.featured_product_id,
        products_count,
    }
}

async fn ensure_product<C: ConnectionTrait>(conn: &C, product_id: Option<i32>) -> AppResult<()> {
    let Some(product_id) = product_id else {
        return Ok(());
    };
    if Products::find_by_id(product_id).count(conn).await? == 0 {
        return Err(ValidationError::new("featured_product_id", "does not exist").into());
    }
    Ok(())
}
