#![allow(dead_code)]

use axum_store_api::{
    config::AppConfig,
    db::{create_orm_conn, run_migrations},
    dto::{
        collections::CollectionRequest,
        customers::CreateCustomerRequest,
        orders::{OrderLineRequest, PlaceOrderRequest},
        products::CreateProductRequest,
    },
    models::OrderWithItems,
    services::{collection_service, customer_service, order_service, product_service},
    state::AppState,
};
use rust_decimal::Decimal;

/// Fresh in-memory database with every migration applied.
pub async fn setup_state() -> anyhow::Result<AppState> {
    let url = "sqlite::memory:";
    let orm = create_orm_conn(url).await?;
    run_migrations(&orm).await?;
    Ok(AppState::new(orm, AppConfig::new(url)))
}

pub async fn create_collection(state: &AppState, title: &str) -> anyhow::Result<i32> {
    let resp = collection_service::create_collection(
        state,
        CollectionRequest {
            title: title.into(),
            featured_product_id: None,
        },
    )
    .await?;
    Ok(resp.data.expect("collection").id)
}

pub async fn create_product(
    state: &AppState,
    collection_id: i32,
    title: &str,
    unit_price: Decimal,
    inventory: i32,
) -> anyhow::Result<i32> {
    let resp = product_service::create_product(
        state,
        CreateProductRequest {
            title: title.into(),
            slug: None,
            description: None,
            unit_price,
            inventory,
            collection_id,
        },
    )
    .await?;
    Ok(resp.data.expect("product").id)
}

pub async fn create_customer(state: &AppState, first: &str, last: &str) -> anyhow::Result<i32> {
    let resp = customer_service::create_customer(
        state,
        CreateCustomerRequest {
            first_name: first.into(),
            last_name: last.into(),
            email: format!("{}.{}@example.com", first.to_lowercase(), last.to_lowercase()),
            phone: "555-0100".into(),
            birth_date: None,
            membership: None,
        },
    )
    .await?;
    Ok(resp.data.expect("customer").id)
}

pub async fn place_order(
    state: &AppState,
    customer_id: i32,
    lines: &[(i32, i32)],
) -> anyhow::Result<OrderWithItems> {
    let resp = order_service::place_order(
        state,
        PlaceOrderRequest {
            customer_id,
            items: lines
                .iter()
                .map(|&(product_id, quantity)| OrderLineRequest {
                    product_id,
                    quantity,
                })
                .collect(),
        },
    )
    .await?;
    Ok(resp.data.expect("order"))
}
