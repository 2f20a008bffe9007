mod common;

use axum_store_api::{
    domain::DeleteBlocker,
    dto::collections::CollectionRequest,
    entity::{Collections, Customers, Products},
    error::AppError,
    services::{collection_service, customer_service, integrity, product_service},
};
use rust_decimal_macros::dec;
use sea_orm::{EntityTrait, PaginatorTrait};

#[tokio::test]
async fn collection_with_products_cannot_be_deleted() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let collection = common::create_collection(&state, "Beauty").await?;
    common::create_product(&state, collection, "Soap", dec!(4.50), 12).await?;

    assert!(!integrity::can_delete_collection(&state.orm, collection).await?);
    let result = collection_service::delete_collection(&state, collection).await;
    assert!(matches!(
        result,
        Err(AppError::ReferentialConflict(
            DeleteBlocker::CollectionHasProducts
        ))
    ));

    assert_eq!(Collections::find().count(&state.orm).await?, 1);
    assert_eq!(Products::find().count(&state.orm).await?, 1);
    Ok(())
}

#[tokio::test]
async fn empty_collection_is_deleted_then_not_found() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let collection = common::create_collection(&state, "Seasonal").await?;

    assert!(integrity::can_delete_collection(&state.orm, collection).await?);
    collection_service::delete_collection(&state, collection).await?;

    let again = collection_service::delete_collection(&state, collection).await;
    assert!(matches!(again, Err(AppError::NotFound)));
    let fetch = collection_service::get_collection(&state, collection).await;
    assert!(matches!(fetch, Err(AppError::NotFound)));
    Ok(())
}

#[tokio::test]
async fn ordered_product_cannot_be_deleted() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let collection = common::create_collection(&state, "Grocery").await?;
    let ordered = common::create_product(&state, collection, "Rice", dec!(3.20), 30).await?;
    let unordered = common::create_product(&state, collection, "Beans", dec!(2.10), 30).await?;
    let customer = common::create_customer(&state, "Ada", "Lovelace").await?;
    common::place_order(&state, customer, &[(ordered, 2)]).await?;

    let result = product_service::delete_product(&state, ordered).await;
    assert!(matches!(
        result,
        Err(AppError::ReferentialConflict(
            DeleteBlocker::ProductHasOrderItems
        ))
    ));
    assert!(product_service::get_product(&state, ordered).await.is_ok());

    product_service::delete_product(&state, unordered).await?;
    let fetch = product_service::get_product(&state, unordered).await;
    assert!(matches!(fetch, Err(AppError::NotFound)));
    Ok(())
}

#[tokio::test]
async fn deleting_featured_product_clears_the_reference() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let collection = common::create_collection(&state, "Stationery").await?;
    let pen = common::create_product(&state, collection, "Pen", dec!(3.00), 10).await?;
    collection_service::update_collection(
        &state,
        collection,
        CollectionRequest {
            title: "Stationery".into(),
            featured_product_id: Some(pen),
        },
    )
    .await?;

    product_service::delete_product(&state, pen).await?;

    let view = collection_service::get_collection(&state, collection)
        .await?
        .data
        .unwrap();
    assert_eq!(view.featured_product_id, None);
    assert_eq!(view.products_count, 0);
    Ok(())
}

#[tokio::test]
async fn customer_with_orders_cannot_be_deleted() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let collection = common::create_collection(&state, "Grocery").await?;
    let rice = common::create_product(&state, collection, "Rice", dec!(3.20), 30).await?;
    let buyer = common::create_customer(&state, "Ada", "Lovelace").await?;
    let browser = common::create_customer(&state, "Grace", "Hopper").await?;
    common::place_order(&state, buyer, &[(rice, 1)]).await?;

    let result = customer_service::delete_customer(&state, buyer).await;
    assert!(matches!(
        result,
        Err(AppError::ReferentialConflict(DeleteBlocker::CustomerHasOrders))
    ));

    customer_service::delete_customer(&state, browser).await?;
    assert_eq!(Customers::find().count(&state.orm).await?, 1);
    Ok(())
}
