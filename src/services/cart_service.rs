use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};
use uuid::Uuid;

use crate::{
    audit,
    domain::{
        ValidationError,
        catalog::cents_to_price,
        orders::{OrderLine, line_total, validate_order_lines, validate_quantity},
    },
    dto::cart::{AddToCartRequest, CheckoutRequest, UpdateCartItemRequest},
    entity::{CartItems, Carts, Products, cart_items, carts, products},
    error::{AppError, AppResult},
    models::{CartItemView, CartView, OrderWithItems},
    response::{ApiResponse, Meta},
    services::order_service,
    state::AppState,
};

pub async fn create_cart(state: &AppState) -> AppResult<ApiResponse<CartView>> {
    let cart = carts::ActiveModel {
        id: Set(Uuid::new_v4()),
        created_at: Set(Utc::now().into()),
    }
    .insert(&state.orm)
    .await?;

    Ok(ApiResponse::success(
        "Cart created",
        CartView {
            id: cart.id,
            created_at: cart.created_at.with_timezone(&Utc),
            items: Vec::new(),
            total: Default::default(),
        },
        Some(Meta::empty()),
    ))
}

pub async fn get_cart(state: &AppState, cart_id: Uuid) -> AppResult<ApiResponse<CartView>> {
    let cart = load_cart(&state.orm, cart_id).await?;
    Ok(ApiResponse::success("OK", cart, None))
}

/// The cart with its lines priced at the current product prices, read with
/// one joined query.
async fn load_cart<C: ConnectionTrait>(conn: &C, cart_id: Uuid) -> AppResult<CartView> {
    let cart = Carts::find_by_id(cart_id)
        .one(conn)
        .await?
        .ok_or(AppError::NotFound)?;
    let rows = CartItems::find()
        .filter(cart_items::Column::CartId.eq(cart_id))
        .order_by_asc(cart_items::Column::Id)
        .find_also_related(Products)
        .all(conn)
        .await?;

    let items: Vec<CartItemView> = rows
        .into_iter()
        .filter_map(|(item, product)| product.map(|product| item_view(item, &product)))
        .collect();
    let total = items.iter().map(|item| item.line_total).sum();

    Ok(CartView {
        id: cart.id,
        created_at: cart.created_at.with_timezone(&Utc),
        items,
        total,
    })
}

fn item_view(item: cart_items::Model, product: &products::Model) -> CartItemView {
    CartItemView {
        id: item.id,
        product_id: item.product_id,
        title: product.title.clone(),
        unit_price: cents_to_price(product.unit_price_cents),
        quantity: item.quantity,
        line_total: line_total(product.unit_price_cents, item.quantity),
    }
}

/// Adds a product line. A product may appear in a cart only once.
pub async fn add_item(
    state: &AppState,
    cart_id: Uuid,
    payload: AddToCartRequest,
) -> AppResult<ApiResponse<CartItemView>> {
    let quantity = validate_quantity(payload.quantity)?;
    if Carts::find_by_id(cart_id).count(&state.orm).await? == 0 {
        return Err(AppError::NotFound);
    }
    let product = Products::find_by_id(payload.product_id)
        .one(&state.orm)
        .await?
        .ok_or_else(|| ValidationError::new("product_id", "does not exist"))?;

    let duplicate = || ValidationError::new("product_id", "is already in the cart");
    let exists = CartItems::find()
        .filter(cart_items::Column::CartId.eq(cart_id))
        .filter(cart_items::Column::ProductId.eq(product.id))
        .count(&state.orm)
        .await?
        > 0;
    if exists {
        return Err(duplicate().into());
    }

    let item = cart_items::ActiveModel {
        cart_id: Set(cart_id),
        product_id: Set(product.id),
        quantity: Set(quantity),
        ..Default::default()
    }
    .insert(&state.orm)
    .await
    .map_err(|err| AppError::from_insert(err, duplicate()))?;

    Ok(ApiResponse::success(
        "Added to cart",
        item_view(item, &product),
        Some(Meta::empty()),
    ))
}

pub async fn update_item(
    state: &AppState,
    cart_id: Uuid,
    item_id: i32,
    payload: UpdateCartItemRequest,
) -> AppResult<ApiResponse<CartItemView>> {
    let quantity = validate_quantity(payload.quantity)?;
    let (item, product) = CartItems::find_by_id(item_id)
        .filter(cart_items::Column::CartId.eq(cart_id))
        .find_also_related(Products)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound)?;
    let product = product.ok_or(AppError::NotFound)?;

    let mut active: cart_items::ActiveModel = item.into();
    active.quantity = Set(quantity);
    let item = active.update(&state.orm).await?;

    Ok(ApiResponse::success(
        "Updated",
        item_view(item, &product),
        Some(Meta::empty()),
    ))
}

pub async fn remove_item(
    state: &AppState,
    cart_id: Uuid,
    item_id: i32,
) -> AppResult<ApiResponse<serde_json::Value>> {
    let result = CartItems::delete_many()
        .filter(cart_items::Column::Id.eq(item_id))
        .filter(cart_items::Column::CartId.eq(cart_id))
        .exec(&state.orm)
        .await?;

    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }

    Ok(ApiResponse::success(
        "Removed from cart",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}

pub async fn delete_cart(state: &AppState, cart_id: Uuid) -> AppResult<ApiResponse<serde_json::Value>> {
    let result = Carts::delete_by_id(cart_id).exec(&state.orm).await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }

    Ok(ApiResponse::success(
        "Deleted",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}

/// Turns the cart into an order for `customer_id` and removes the cart, in
/// one transaction.
pub async fn checkout(
    state: &AppState,
    cart_id: Uuid,
    payload: CheckoutRequest,
) -> AppResult<ApiResponse<OrderWithItems>> {
    let txn = state.orm.begin().await?;
    if Carts::find_by_id(cart_id).count(&txn).await? == 0 {
        return Err(AppError::NotFound);
    }

    let lines: Vec<OrderLine> = CartItems::find()
        .filter(cart_items::Column::CartId.eq(cart_id))
        .order_by_asc(cart_items::Column::Id)
        .all(&txn)
        .await?
        .into_iter()
        .map(|item| OrderLine {
            product_id: item.product_id,
            quantity: item.quantity,
        })
        .collect();
    validate_order_lines(&lines)?;

    let order = order_service::insert_order(&txn, payload.customer_id, &lines).await?;
    Carts::delete_by_id(cart_id).exec(&txn).await?;
    txn.commit().await?;

    audit::record(
        &state.orm,
        "cart_checkout",
        "orders",
        serde_json::json!({ "cart_id": cart_id, "order_id": order.order.id }),
    )
    .await;

    Ok(ApiResponse::success(
        "Order placed",
        order,
        Some(Meta::empty()),
    ))
}
