use std::collections::HashMap;

use chrono::Utc;

use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, JoinType, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, RelationTrait, TransactionTrait, sea_query::Expr,
};
use sea_orm::ActiveValue::Set;

use crate::{
    admin::InlinePanel,
    audit,
    domain::{
        catalog::cents_to_price,
        customers::Membership,
        orders::PaymentStatus,
        tags::TaggableKind,
    },
    dto::{
        admin::{
            ClearInventoryRequest, CollectionAdminList, CustomerAdminList, OrderAdminList,
            ProductAdminList,
        },
        customers::UpdateMembershipRequest,
        orders::UpdatePaymentStatusRequest,
    },
    entity::{
        collections::{Column as CollectionCol, Entity as Collections},
        customers::{ActiveModel as CustomerActive, Column as CustomerCol, Entity as Customers},
        orders::{self, ActiveModel as OrderActive, Column as OrderCol, Entity as Orders},
        products::{Column as ProdCol, Entity as Products},
    },
    error::{AppError, AppResult},
    models::{
        AdminPanels, ClearInventoryResult, CollectionAdminRow, CustomerAdminRow, CustomerView,
        OrderAdminRow, OrderView, OrderWithItems, ProductAdminDetail, ProductAdminRow,
    },
    response::{ApiResponse, Meta},
    routes::params::{AdminProductQuery, InventoryFilter, ListQuery},
    services::{
        aggregation::{self, inventory_status, low_inventory_condition},
        contains_ci, customer_service, order_service, product_service, read_snapshot,
        review_service, search_term, tag_service,
    },
    state::AppState,
};

/// Product rows with their collection title joined in the same query.
pub async fn list_products(
    state: &AppState,
    query: AdminProductQuery,
) -> AppResult<ApiResponse<ProductAdminList>> {
    let admin = &state.admin.products;
    let window = query.pagination().window(admin.list_per_page);

    let mut condition = Condition::all();
    if let Some(collection_id) = query.collection_id {
        condition = condition.add(ProdCol::CollectionId.eq(collection_id));
    }
    if let Some(InventoryFilter::Low) = query.inventory {
        condition = condition.add(low_inventory_condition(admin.low_inventory_threshold));
    }
    if let Some(period) = query.last_updated {
        let since = period.since(Utc::now()).fixed_offset();
        condition = condition.add(ProdCol::LastUpdated.gte(since));
    }
    if let Some(search) = search_term(query.q.as_deref()) {
        condition = condition.add(contains_ci((Products, ProdCol::Title), search));
    }

    let txn = read_snapshot(&state.orm).await?;
    let total = Products::find()
        .filter(condition.clone())
        .count(&txn)
        .await? as i64;
    let rows = if window.is_empty() {
        Vec::new()
    } else {
        Products::find()
            .filter(condition)
            .find_also_related(Collections)
            .order_by_asc(ProdCol::Title)
            .order_by_asc(ProdCol::Id)
            .limit(window.per_page as u64)
            .offset(window.offset as u64)
            .all(&txn)
            .await?
    };
    txn.commit().await?;

    let items = rows
        .into_iter()
        .map(|(product, collection)| ProductAdminRow {
            id: product.id,
            title: product.title,
            unit_price: cents_to_price(product.unit_price_cents),
            inventory: product.inventory,
            inventory_status: inventory_status(product.inventory),
            collection_title: collection.map(|c| c.title).unwrap_or_default(),
        })
        .collect();

    Ok(ApiResponse::success(
        "Products",
        ProductAdminList { items },
        Some(window.meta(total)),
    ))
}

/// Product detail plus whichever inline panels the product admin lists.
pub async fn product_detail(
    state: &AppState,
    id: i32,
) -> AppResult<ApiResponse<ProductAdminDetail>> {
    let product = product_service::load_detail(&state.orm, id).await?;

    let mut panels = AdminPanels::default();
    for panel in &state.admin.products.inlines {
        match panel {
            InlinePanel::Tags => {
                panels.tags =
                    Some(tag_service::tags_for(&state.orm, TaggableKind::Product, id).await?);
            }
            InlinePanel::Reviews => {
                let reviews = review_service::list_reviews(state, id).await?;
                panels.reviews = reviews.data.map(|list| list.items);
            }
            InlinePanel::Promotions => {
                panels.promotions = Some(product.promotions.clone());
            }
        }
    }

    Ok(ApiResponse::success(
        "Product",
        ProductAdminDetail { product, panels },
        None,
    ))
}

/// Sets inventory to zero for every listed product in one statement and
/// reports how many rows actually changed. Unknown ids are skipped.
pub async fn clear_inventory(
    state: &AppState,
    payload: ClearInventoryRequest,
) -> AppResult<ApiResponse<ClearInventoryResult>> {
    let updated = if payload.ids.is_empty() {
        0
    } else {
        let txn = state.orm.begin().await?;
        let result = Products::update_many()
            .col_expr(ProdCol::Inventory, Expr::value(0))
            .col_expr(
                ProdCol::LastUpdated,
                Expr::value(Utc::now().fixed_offset()),
            )
            .filter(ProdCol::Id.is_in(payload.ids.iter().copied()))
            .exec(&txn)
            .await?;
        txn.commit().await?;
        result.rows_affected
    };

    tracing::info!(requested = payload.ids.len(), updated, "inventory cleared");
    audit::record(
        &state.orm,
        "inventory_clear",
        "products",
        serde_json::json!({ "ids": payload.ids, "updated": updated }),
    )
    .await;

    Ok(ApiResponse::success(
        format!("{updated} products were successfully updated"),
        ClearInventoryResult { updated },
        Some(Meta::empty()),
    ))
}

/// Customer rows with their ordered products fetched for the whole page at
/// once.
pub async fn list_customers(
    state: &AppState,
    query: ListQuery,
) -> AppResult<ApiResponse<CustomerAdminList>> {
    let admin = &state.admin.customers;
    let window = query.pagination().window(admin.list_per_page);
    let finder = Customers::find()
        .filter(customer_service::name_prefix(query.q.as_deref()))
        .order_by_asc(CustomerCol::FirstName)
        .order_by_asc(CustomerCol::LastName)
        .order_by_asc(CustomerCol::Id);

    let txn = read_snapshot(&state.orm).await?;
    let total = finder.clone().count(&txn).await? as i64;
    let customers = if window.is_empty() {
        Vec::new()
    } else {
        finder
            .limit(window.per_page as u64)
            .offset(window.offset as u64)
            .all(&txn)
            .await?
    };
    let ids: Vec<i32> = customers.iter().map(|c| c.id).collect();
    let mut titles = aggregation::ordered_product_titles_by_customer(&txn, &ids).await?;
    txn.commit().await?;

    let items = customers
        .into_iter()
        .map(|customer| {
            let ordered = titles.remove(&customer.id).unwrap_or_default();
            CustomerAdminRow {
                id: customer.id,
                membership: Membership::parse(&customer.membership).unwrap_or_default(),
                first_name: customer.first_name,
                last_name: customer.last_name,
                ordered_products: aggregation::render_titles(&ordered, &admin.empty_list_sentinel),
            }
        })
        .collect();

    Ok(ApiResponse::success(
        "Customers",
        CustomerAdminList { items },
        Some(window.meta(total)),
    ))
}

pub async fn update_membership(
    state: &AppState,
    customer_id: i32,
    payload: UpdateMembershipRequest,
) -> AppResult<ApiResponse<CustomerView>> {
    let membership = Membership::parse(&payload.membership)?;
    let customer = Customers::find_by_id(customer_id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound)?;

    let mut active: CustomerActive = customer.into();
    active.membership = Set(membership.code().to_string());
    let customer = active.update(&state.orm).await?;

    audit::record(
        &state.orm,
        "membership_update",
        "customers",
        serde_json::json!({ "customer_id": customer.id, "membership": customer.membership }),
    )
    .await;

    Ok(ApiResponse::success(
        "Customer updated",
        CustomerView::from(customer),
        Some(Meta::empty()),
    ))
}

/// Collection rows with batch product counts and a link to the collection's
/// product listing.
pub async fn list_collections(
    state: &AppState,
    query: ListQuery,
) -> AppResult<ApiResponse<CollectionAdminList>> {
    let window = query.pagination().window(state.admin.collections.list_per_page);
    let mut condition = Condition::all();
    if let Some(search) = search_term(query.q.as_deref()) {
        condition = condition.add(contains_ci((Collections, CollectionCol::Title), search));
    }
    let finder = Collections::find()
        .filter(condition)
        .order_by_asc(CollectionCol::Title)
        .order_by_asc(CollectionCol::Id);

    let txn = read_snapshot(&state.orm).await?;
    let total = finder.clone().count(&txn).await? as i64;
    let collections = if window.is_empty() {
        Vec::new()
    } else {
        finder
            .limit(window.per_page as u64)
            .offset(window.offset as u64)
            .all(&txn)
            .await?
    };
    let ids: Vec<i32> = collections.iter().map(|c| c.id).collect();
    let counts = aggregation::products_count_by_collection(&txn, &ids).await?;
    txn.commit().await?;

    let items = collections
        .into_iter()
        .map(|collection| CollectionAdminRow {
            products_count: counts.get(&collection.id).copied().unwrap_or(0),
            products_url: format!("/api/admin/products?collection_id={}", collection.id),
            id: collection.id,
            title: collection.title,
        })
        .collect();

    Ok(ApiResponse::success(
        "Collections",
        CollectionAdminList { items },
        Some(window.meta(total)),
    ))
}

/// Order rows, newest first, with the customer's name joined in. `q`
/// matches the start of the customer's first or last name.
pub async fn list_orders(
    state: &AppState,
    query: ListQuery,
) -> AppResult<ApiResponse<OrderAdminList>> {
    let window = query.pagination().window(state.admin.orders.list_per_page);
    let finder = Orders::find()
        .join(JoinType::InnerJoin, orders::Relation::Customers.def())
        .filter(customer_service::name_prefix(query.q.as_deref()))
        .order_by_desc(OrderCol::PlacedAt)
        .order_by_desc(OrderCol::Id);

    let txn = read_snapshot(&state.orm).await?;
    let total = finder.clone().count(&txn).await? as i64;
    let orders = if window.is_empty() {
        Vec::new()
    } else {
        finder
            .limit(window.per_page as u64)
            .offset(window.offset as u64)
            .all(&txn)
            .await?
    };
    let customer_ids: Vec<i32> = orders.iter().map(|o| o.customer_id).collect();
    let names: HashMap<i32, String> = Customers::find()
        .filter(CustomerCol::Id.is_in(customer_ids))
        .all(&txn)
        .await?
        .into_iter()
        .map(|c| (c.id, format!("{} {}", c.first_name, c.last_name)))
        .collect();
    txn.commit().await?;

    let items = orders
        .into_iter()
        .map(|order| OrderAdminRow {
            id: order.id,
            customer: names.get(&order.customer_id).cloned().unwrap_or_default(),
            placed_at: order.placed_at.with_timezone(&Utc),
            payment_status: PaymentStatus::parse(&order.payment_status).unwrap_or_default(),
        })
        .collect();

    Ok(ApiResponse::success(
        "Orders",
        OrderAdminList { items },
        Some(window.meta(total)),
    ))
}

pub async fn order_detail(state: &AppState, id: i32) -> AppResult<ApiResponse<OrderWithItems>> {
    let order = order_service::load_order(&state.orm, id).await?;
    Ok(ApiResponse::success("Order found", order, Some(Meta::empty())))
}

pub async fn update_payment_status(
    state: &AppState,
    id: i32,
    payload: UpdatePaymentStatusRequest,
) -> AppResult<ApiResponse<OrderView>> {
    let status = PaymentStatus::parse(&payload.payment_status)?;
    let existing = Orders::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound)?;

    let mut active: OrderActive = existing.into();
    active.payment_status = Set(status.code().to_string());
    let order = active.update(&state.orm).await?;
    let totals = order_service::order_totals(&state.orm, &[order.id]).await?;
    let total = totals.get(&order.id).copied().unwrap_or_default();

    audit::record(
        &state.orm,
        "payment_status_update",
        "orders",
        serde_json::json!({ "order_id": order.id, "payment_status": order.payment_status }),
    )
    .await;

    Ok(ApiResponse::success(
        "Order updated",
        order_service::order_view(order, total),
        Some(Meta::empty()),
    ))
}
