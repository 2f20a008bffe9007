mod common;

use axum_store_api::{
    domain::orders::PaymentStatus,
    dto::{
        cart::{AddToCartRequest, CheckoutRequest, UpdateCartItemRequest},
        orders::UpdatePaymentStatusRequest,
        products::UpdateProductRequest,
    },
    error::AppError,
    services::{admin_service, cart_service, order_service, product_service},
};
use rust_decimal_macros::dec;

// Flow: cart -> checkout -> price change leaves the order untouched.
#[tokio::test]
async fn checkout_snapshots_prices_and_removes_cart() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let collection = common::create_collection(&state, "Grocery").await?;
    let coffee = common::create_product(&state, collection, "Coffee", dec!(12.50), 40).await?;
    let tea = common::create_product(&state, collection, "Tea", dec!(4.00), 40).await?;
    let customer = common::create_customer(&state, "Ada", "Lovelace").await?;

    let cart = cart_service::create_cart(&state).await?.data.unwrap();
    cart_service::add_item(
        &state,
        cart.id,
        AddToCartRequest {
            product_id: coffee,
            quantity: 2,
        },
    )
    .await?;
    let tea_line = cart_service::add_item(
        &state,
        cart.id,
        AddToCartRequest {
            product_id: tea,
            quantity: 1,
        },
    )
    .await?
    .data
    .unwrap();
    cart_service::update_item(
        &state,
        cart.id,
        tea_line.id,
        UpdateCartItemRequest { quantity: 3 },
    )
    .await?;

    let view = cart_service::get_cart(&state, cart.id).await?.data.unwrap();
    assert_eq!(view.items.len(), 2);
    assert_eq!(view.total, dec!(37.00));

    let order = cart_service::checkout(&state, cart.id, CheckoutRequest { customer_id: customer })
        .await?
        .data
        .unwrap();
    assert_eq!(order.order.total, dec!(37.00));
    assert_eq!(order.order.payment_status, PaymentStatus::Pending);
    assert_eq!(order.items.len(), 2);

    let gone = cart_service::get_cart(&state, cart.id).await;
    assert!(matches!(gone, Err(AppError::NotFound)));

    product_service::update_product(
        &state,
        coffee,
        UpdateProductRequest {
            unit_price: Some(dec!(20.00)),
            ..Default::default()
        },
    )
    .await?;

    let reloaded = order_service::get_order(&state, order.order.id)
        .await?
        .data
        .unwrap();
    let coffee_line = reloaded
        .items
        .iter()
        .find(|item| item.product_id == coffee)
        .expect("coffee line");
    assert_eq!(coffee_line.unit_price, dec!(12.50));
    assert_eq!(coffee_line.line_total, dec!(25.00));
    assert_eq!(reloaded.order.total, dec!(37.00));

    Ok(())
}

#[tokio::test]
async fn checkout_of_empty_cart_is_rejected() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let customer = common::create_customer(&state, "Grace", "Hopper").await?;
    let cart = cart_service::create_cart(&state).await?.data.unwrap();

    let result =
        cart_service::checkout(&state, cart.id, CheckoutRequest { customer_id: customer }).await;
    match result {
        Err(AppError::Validation(err)) => assert_eq!(err.field, "items"),
        other => panic!("expected validation error, got {:?}", other.map(|r| r.message)),
    }

    // The cart survives a failed checkout.
    assert!(cart_service::get_cart(&state, cart.id).await.is_ok());
    Ok(())
}

#[tokio::test]
async fn duplicate_cart_line_is_a_validation_error() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let collection = common::create_collection(&state, "Stationery").await?;
    let pen = common::create_product(&state, collection, "Pen", dec!(3.00), 10).await?;
    let cart = cart_service::create_cart(&state).await?.data.unwrap();

    let line = AddToCartRequest {
        product_id: pen,
        quantity: 1,
    };
    cart_service::add_item(&state, cart.id, line).await?;
    let again = cart_service::add_item(
        &state,
        cart.id,
        AddToCartRequest {
            product_id: pen,
            quantity: 2,
        },
    )
    .await;
    assert!(matches!(again, Err(AppError::Validation(_))));
    Ok(())
}

#[tokio::test]
async fn placing_an_order_for_unknown_product_fails_without_side_effects() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let collection = common::create_collection(&state, "Grocery").await?;
    let bread = common::create_product(&state, collection, "Bread", dec!(2.50), 10).await?;
    let customer = common::create_customer(&state, "Alan", "Turing").await?;

    let result = common::place_order(&state, customer, &[(bread, 1), (9999, 1)]).await;
    assert!(result.is_err());

    let orders = order_service::list_customer_orders(&state, customer)
        .await?
        .data
        .unwrap();
    assert!(orders.items.is_empty());
    Ok(())
}

#[tokio::test]
async fn customer_orders_are_newest_first_with_totals() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let collection = common::create_collection(&state, "Grocery").await?;
    let milk = common::create_product(&state, collection, "Milk", dec!(1.25), 50).await?;
    let customer = common::create_customer(&state, "Edsger", "Dijkstra").await?;

    let first = common::place_order(&state, customer, &[(milk, 2)]).await?;
    let second = common::place_order(&state, customer, &[(milk, 4)]).await?;

    let orders = order_service::list_customer_orders(&state, customer)
        .await?
        .data
        .unwrap();
    let ids: Vec<i32> = orders.items.iter().map(|o| o.id).collect();
    assert_eq!(ids, vec![second.order.id, first.order.id]);
    assert_eq!(orders.items[0].total, dec!(5.00));
    assert_eq!(orders.items[1].total, dec!(2.50));

    let paid = admin_service::update_payment_status(
        &state,
        first.order.id,
        UpdatePaymentStatusRequest {
            payment_status: "C".into(),
        },
    )
    .await?
    .data
    .unwrap();
    assert_eq!(paid.payment_status, PaymentStatus::Complete);
    assert_eq!(paid.total, dec!(2.50));
    Ok(())
}
