use std::collections::HashMap;

use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};

use crate::{
    audit,
    domain::{
        ValidationError,
        orders::{OrderLine, PaymentStatus, order_total, validate_order_lines},
    },
    dto::orders::{OrderList, PlaceOrderRequest},
    entity::{Customers, OrderItems, Orders, Products, order_items, orders, products},
    error::{AppError, AppResult},
    models::{OrderItemView, OrderView, OrderWithItems},
    response::{ApiResponse, Meta},
    state::AppState,
};

pub async fn place_order(
    state: &AppState,
    payload: PlaceOrderRequest,
) -> AppResult<ApiResponse<OrderWithItems>> {
    let lines: Vec<OrderLine> = payload.items.into_iter().map(OrderLine::from).collect();
    validate_order_lines(&lines)?;

    let txn = state.orm.begin().await?;
    let order = insert_order(&txn, payload.customer_id, &lines).await?;
    txn.commit().await?;

    audit::record(
        &state.orm,
        "order_place",
        "orders",
        serde_json::json!({ "order_id": order.order.id, "customer_id": order.order.customer_id }),
    )
    .await;

    Ok(ApiResponse::success(
        "Order placed",
        order,
        Some(Meta::empty()),
    ))
}

/// Writes an order and its lines, copying each product's current unit price
/// onto the line. Lines must already be validated.
pub(crate) async fn insert_order<C: ConnectionTrait>(
    conn: &C,
    customer_id: i32,
    lines: &[OrderLine],
) -> AppResult<OrderWithItems> {
    if Customers::find_by_id(customer_id).count(conn).await? == 0 {
        return Err(ValidationError::new("customer_id", "does not exist").into());
    }

    let product_ids: Vec<i32> = lines.iter().map(|line| line.product_id).collect();
    let prices: HashMap<i32, i64> = Products::find()
        .filter(products::Column::Id.is_in(product_ids))
        .all(conn)
        .await?
        .into_iter()
        .map(|product| (product.id, product.unit_price_cents))
        .collect();

    let order = orders::ActiveModel {
        placed_at: Set(Utc::now().into()),
        payment_status: Set(PaymentStatus::Pending.code().to_string()),
        customer_id: Set(customer_id),
        ..Default::default()
    }
    .insert(conn)
    .await?;

    let mut items = Vec::with_capacity(lines.len());
    for line in lines {
        let unit_price_cents = *prices.get(&line.product_id).ok_or_else(|| {
            ValidationError::new(
                "product_id",
                format!("product {} does not exist", line.product_id),
            )
        })?;
        let item = order_items::ActiveModel {
            order_id: Set(order.id),
            product_id: Set(line.product_id),
            quantity: Set(line.quantity),
            unit_price_cents: Set(unit_price_cents),
            ..Default::default()
        }
        .insert(conn)
        .await?;
        items.push(item);
    }

    Ok(with_items(order, items))
}

pub async fn get_order(state: &AppState, id: i32) -> AppResult<ApiResponse<OrderWithItems>> {
    let order = load_order(&state.orm, id).await?;
    Ok(ApiResponse::success("OK", order, Some(Meta::empty())))
}

pub(crate) async fn load_order<C: ConnectionTrait>(conn: &C, id: i32) -> AppResult<OrderWithItems> {
    let order = Orders::find_by_id(id)
        .one(conn)
        .await?
        .ok_or(AppError::NotFound)?;
    let items = OrderItems::find()
        .filter(order_items::Column::OrderId.eq(order.id))
        .order_by_asc(order_items::Column::Id)
        .all(conn)
        .await?;
    Ok(with_items(order, items))
}

/// A customer's orders, newest first.
pub async fn list_customer_orders(
    state: &AppState,
    customer_id: i32,
) -> AppResult<ApiResponse<OrderList>> {
    if Customers::find_by_id(customer_id).count(&state.orm).await? == 0 {
        return Err(AppError::NotFound);
    }

    let orders = Orders::find()
        .filter(orders::Column::CustomerId.eq(customer_id))
        .order_by_desc(orders::Column::PlacedAt)
        .order_by_desc(orders::Column::Id)
        .all(&state.orm)
        .await?;
    let ids: Vec<i32> = orders.iter().map(|o| o.id).collect();
    let totals = order_totals(&state.orm, &ids).await?;

    let items: Vec<OrderView> = orders
        .into_iter()
        .map(|order| {
            let total = totals.get(&order.id).copied().unwrap_or_default();
            order_view(order, total)
        })
        .collect();

    let total = items.len() as i64;
    Ok(ApiResponse::success(
        "OK",
        OrderList { items },
        Some(Meta::new(1, total, total)),
    ))
}

/// Totals for many orders from one fetch of their lines.
pub(crate) async fn order_totals<C: ConnectionTrait>(
    conn: &C,
    order_ids: &[i32],
) -> AppResult<HashMap<i32, Decimal>> {
    if order_ids.is_empty() {
        return Ok(HashMap::new());
    }
    let lines = OrderItems::find()
        .filter(order_items::Column::OrderId.is_in(order_ids.iter().copied()))
        .all(conn)
        .await?;

    let mut grouped: HashMap<i32, Vec<(i64, i32)>> = HashMap::new();
    for line in lines {
        grouped
            .entry(line.order_id)
            .or_default()
            .push((line.unit_price_cents, line.quantity));
    }
    Ok(grouped
        .into_iter()
        .map(|(id, lines)| (id, order_total(lines)))
        .collect())
}

pub(crate) fn order_view(model: orders::Model, total: Decimal) -> OrderView {
    OrderView {
        id: model.id,
        placed_at: model.placed_at.with_timezone(&Utc),
        payment_status: PaymentStatus::parse(&model.payment_status).unwrap_or_default(),
        customer_id: model.customer_id,
        total,
    }
}

fn with_items(order: orders::Model, items: Vec<order_items::Model>) -> OrderWithItems {
    let total = order_total(items.iter().map(|i| (i.unit_price_cents, i.quantity)));
    OrderWithItems {
        order: order_view(order, total),
        items: items.into_iter().map(OrderItemView::from).collect(),
    }
}
