mod common;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use axum_store_api::{routes::create_api_router, state::AppState};
use http_body_util::BodyExt;
use rust_decimal_macros::dec;
use serde_json::{Value, json};
use tower::ServiceExt;

fn app(state: AppState) -> Router {
    Router::new()
        .nest("/api", create_api_router())
        .with_state(state)
}

async fn send(app: &Router, request: Request<Body>) -> anyhow::Result<(StatusCode, Value)> {
    let response = app.clone().oneshot(request).await?;
    let status = response.status();
    let bytes = response.into_body().collect().await?.to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)?
    };
    Ok((status, body))
}

fn json_request(method: &str, uri: &str, body: Value) -> anyhow::Result<Request<Body>> {
    Ok(Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))?)
}

#[tokio::test]
async fn blocked_delete_is_conflict_and_bad_input_is_bad_request() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let collection = common::create_collection(&state, "Grocery").await?;
    let rice = common::create_product(&state, collection, "Rice", dec!(3.20), 30).await?;
    let app = app(state);

    let (status, body) = send(
        &app,
        Request::builder()
            .method("DELETE")
            .uri(format!("/api/collections/{collection}"))
            .body(Body::empty())?,
    )
    .await?;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(
        body["message"],
        "Collection cannot be deleted because it has products"
    );

    let (status, body) = send(
        &app,
        json_request(
            "PUT",
            &format!("/api/products/{rice}"),
            json!({ "inventory": 0 }),
        )?,
    )
    .await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap_or_default().contains("inventory"));

    let (status, _) = send(
        &app,
        Request::builder()
            .method("DELETE")
            .uri("/api/products/9999")
            .body(Body::empty())?,
    )
    .await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn product_listing_over_http() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let collection = common::create_collection(&state, "Grocery").await?;
    common::create_product(&state, collection, "Rice", dec!(3.20), 30).await?;
    common::create_product(&state, collection, "Saffron", dec!(20.00), 3).await?;
    let app = app(state);

    let (status, body) = send(
        &app,
        Request::builder()
            .uri("/api/products?max_price=5&unknown=1")
            .body(Body::empty())?,
    )
    .await?;
    assert_eq!(status, StatusCode::OK);
    let items = body["data"].as_array().cloned().unwrap_or_default();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["title"], "Rice");
    assert_eq!(body["meta"]["total"], 1);

    let (status, _) = send(
        &app,
        Request::builder()
            .uri("/api/products?min_price=1.234")
            .body(Body::empty())?,
    )
    .await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn order_placement_over_http() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let collection = common::create_collection(&state, "Grocery").await?;
    let rice = common::create_product(&state, collection, "Rice", dec!(3.20), 30).await?;
    let customer = common::create_customer(&state, "Ada", "Lovelace").await?;
    let app = app(state);

    let (status, body) = send(
        &app,
        json_request(
            "POST",
            "/api/orders",
            json!({ "customer_id": customer, "items": [{ "product_id": rice, "quantity": 3 }] }),
        )?,
    )
    .await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["order"]["total"], "9.60");
    assert_eq!(body["data"]["order"]["payment_status"], "P");

    let (status, _) = send(
        &app,
        json_request(
            "POST",
            "/api/orders",
            json!({ "customer_id": customer, "items": [] }),
        )?,
    )
    .await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn extreme_query_values_never_crash_a_listing() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let collection = common::create_collection(&state, "Grocery").await?;
    common::create_product(&state, collection, "Rice", dec!(3.20), 30).await?;
    common::create_customer(&state, "Ada", "Lovelace").await?;
    let app = app(state);

    let far_page = "page=9223372036854775807&per_page=100";
    for path in [
        "/api/products",
        "/api/collections",
        "/api/customers",
        "/api/admin/products",
        "/api/admin/customers",
        "/api/admin/collections",
        "/api/admin/orders",
    ] {
        let (status, body) = send(
            &app,
            Request::builder()
                .uri(format!("{path}?{far_page}"))
                .body(Body::empty())?,
        )
        .await?;
        assert_eq!(status, StatusCode::OK, "{path}");
        let empty = body["data"]
            .as_array()
            .or_else(|| body["data"]["items"].as_array())
            .is_some_and(|items| items.is_empty());
        assert!(empty, "{path} should return an empty page");
    }

    let (status, body) = send(
        &app,
        Request::builder()
            .uri(format!("/api/products?{far_page}"))
            .body(Body::empty())?,
    )
    .await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["meta"]["total"], 1);

    for query in [
        "max_price=79228162514264337593543950335",
        "min_price=79228162514264337593543950335",
        "discount_factor=79228162514264337593543950335",
        "discount_factor=-0.5",
    ] {
        let (status, _) = send(
            &app,
            Request::builder()
                .uri(format!("/api/products?{query}"))
                .body(Body::empty())?,
        )
        .await?;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{query}");
    }

    let (status, _) = send(
        &app,
        json_request(
            "POST",
            "/api/products",
            json!({
                "title": "Gold Bar",
                "unit_price": "79228162514264337593543950335",
                "inventory": 1,
                "collection_id": collection,
            }),
        )?,
    )
    .await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    Ok(())
}
