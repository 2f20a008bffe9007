use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, ConnectionTrait, EntityTrait, ModelTrait, Order,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Set,
};

use crate::{
    audit,
    domain::{
        ValidationError,
        catalog::{ProductChanges, ProductDraft, ValidProduct, cents_to_price, price_to_cents},
    },
    dto::products::{CreateProductRequest, ProductList, UpdateProductRequest},
    entity::{
        Collections, Products, Promotions,
        products::{ActiveModel, Column, Model as ProductModel},
    },
    error::{AppError, AppResult},
    models::{ProductDetail, ProductView, PromotionView},
    response::{ApiResponse, Meta},
    routes::params::{DEFAULT_PER_PAGE, ProductQuery, ProductSortBy, SortOrder},
    services::{aggregation::discounted_price, contains_ci, integrity, read_snapshot, search_term},
    state::AppState,
};

/// Filtered, sorted page of products. The page and its total are read in one
/// snapshot; ties in the sort key are broken by id so pages never overlap.
pub async fn list_products(
    state: &AppState,
    query: ProductQuery,
) -> AppResult<ApiResponse<ProductList>> {
    let window = query.pagination().window(DEFAULT_PER_PAGE);
    let condition = product_filter(&query)?;

    let sort_col = match query.sort_by.unwrap_or_default() {
        ProductSortBy::Title => Column::Title,
        ProductSortBy::UnitPrice => Column::UnitPriceCents,
        ProductSortBy::Inventory => Column::Inventory,
        ProductSortBy::LastUpdated => Column::LastUpdated,
    };
    let direction = match query.sort_order.unwrap_or_default() {
        SortOrder::Asc => Order::Asc,
        SortOrder::Desc => Order::Desc,
    };

    let finder = Products::find()
        .filter(condition)
        .order_by(sort_col, direction)
        .order_by_asc(Column::Id);

    let txn = read_snapshot(&state.orm).await?;
    let total = finder.clone().count(&txn).await? as i64;
    let models = if window.is_empty() {
        Vec::new()
    } else {
        finder
            .limit(window.per_page as u64)
            .offset(window.offset as u64)
            .all(&txn)
            .await?
    };
    txn.commit().await?;

    let items = models
        .into_iter()
        .map(|model| {
            let mut view = ProductView::from(model);
            if let Some(factor) = query.discount_factor {
                let price = discounted_price(view.unit_price, factor)
                    .ok_or_else(|| ValidationError::new("discount_factor", "is out of range"))?;
                view.discounted_price = Some(price);
            }
            Ok(view)
        })
        .collect::<Result<Vec<_>, ValidationError>>()?;

    Ok(ApiResponse::success(
        "Products",
        ProductList { items },
        Some(window.meta(total)),
    ))
}

fn product_filter(query: &ProductQuery) -> AppResult<Condition> {
    let mut condition = Condition::all();
    if let Some(collection_id) = query.collection_id {
        condition = condition.add(Column::CollectionId.eq(collection_id));
    }
    if let Some(min_price) = query.min_price {
        condition = condition.add(Column::UnitPriceCents.gte(price_to_cents("min_price", min_price)?));
    }
    if let Some(max_price) = query.max_price {
        condition = condition.add(Column::UnitPriceCents.lte(price_to_cents("max_price", max_price)?));
    }
    if let Some(search) = search_term(query.q.as_deref()) {
        condition = condition.add(contains_ci((Products, Column::Title), search));
    }
    if query.discount_factor.is_some_and(|factor| factor.is_sign_negative()) {
        return Err(ValidationError::new("discount_factor", "must not be negative").into());
    }
    Ok(condition)
}

pub async fn get_product(state: &AppState, id: i32) -> AppResult<ApiResponse<ProductDetail>> {
    let detail = load_detail(&state.orm, id).await?;
    Ok(ApiResponse::success("Product", detail, None))
}

/// A product with its collection title and promotions.
pub(crate) async fn load_detail<C: ConnectionTrait>(conn: &C, id: i32) -> AppResult<ProductDetail> {
    let (product, collection) = Products::find_by_id(id)
        .find_also_related(Collections)
        .one(conn)
        .await?
        .ok_or(AppError::NotFound)?;
    let promotions = product
        .find_related(Promotions)
        .all(conn)
        .await?
        .into_iter()
        .map(PromotionView::from)
        .collect();

    Ok(ProductDetail {
        product: ProductView::from(product),
        collection_title: collection.map(|c| c.title).unwrap_or_default(),
        promotions,
    })
}

pub async fn create_product(
    state: &AppState,
    payload: CreateProductRequest,
) -> AppResult<ApiResponse<ProductView>> {
    let product = ProductDraft::from(payload).validate()?;
    ensure_collection(&state.orm, product.collection_id).await?;

    let mut active = ActiveModel {
        ..Default::default()
    };
    assign(&mut active, product);
    let product = active.insert(&state.orm).await?;

    audit::record(
        &state.orm,
        "product_create",
        "products",
        serde_json::json!({ "product_id": product.id }),
    )
    .await;

    Ok(ApiResponse::success(
        "Product created",
        ProductView::from(product),
        Some(Meta::empty()),
    ))
}

pub async fn update_product(
    state: &AppState,
    id: i32,
    payload: UpdateProductRequest,
) -> AppResult<ApiResponse<ProductView>> {
    let existing = Products::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound)?;

    let product = ProductChanges::from(payload)
        .apply(draft_from_model(&existing))
        .validate()?;
    if product.collection_id != existing.collection_id {
        ensure_collection(&state.orm, product.collection_id).await?;
    }

    let mut active: ActiveModel = existing.into();
    assign(&mut active, product);
    let product = active.update(&state.orm).await?;

    audit::record(
        &state.orm,
        "product_update",
        "products",
        serde_json::json!({ "product_id": product.id }),
    )
    .await;

    Ok(ApiResponse::success(
        "Updated",
        ProductView::from(product),
        Some(Meta::empty()),
    ))
}

pub async fn delete_product(state: &AppState, id: i32) -> AppResult<ApiResponse<serde_json::Value>> {
    integrity::delete_product(&state.orm, id).await?;

    audit::record(
        &state.orm,
        "product_delete",
        "products",
        serde_json::json!({ "product_id": id }),
    )
    .await;

    Ok(ApiResponse::success(
        "Deleted",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}

fn assign(active: &mut ActiveModel, product: ValidProduct) {
    active.title = Set(product.title);
    active.slug = Set(product.slug);
    active.description = Set(product.description);
    active.unit_price_cents = Set(product.unit_price_cents);
    active.inventory = Set(product.inventory);
    active.collection_id = Set(product.collection_id);
    active.last_updated = Set(Utc::now().into());
}

fn draft_from_model(model: &ProductModel) -> ProductDraft {
    ProductDraft {
        title: model.title.clone(),
        slug: Some(model.slug.clone()),
        description: model.description.clone(),
        unit_price: cents_to_price(model.unit_price_cents),
        inventory: model.inventory,
        collection_id: model.collection_id,
    }
}

async fn ensure_collection<C: ConnectionTrait>(conn: &C, collection_id: i32) -> AppResult<()> {
    let exists = Collections::find_by_id(collection_id)
        .count(conn)
        .await?
        > 0;
    if !exists {
        return Err(ValidationError::new("collection_id", "does not exist").into());
    }
    Ok(())
}
