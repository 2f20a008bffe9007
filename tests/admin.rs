mod common;

use axum_store_api::{
    domain::{catalog::InventoryStatus, customers::Membership},
    dto::{
        admin::ClearInventoryRequest, customers::UpdateMembershipRequest,
        reviews::CreateReviewRequest,
    },
    entity::{Products, products},
    error::AppError,
    routes::params::{AdminProductQuery, InventoryFilter, LastUpdatedFilter, ListQuery},
    services::{admin_service, aggregation, product_service, review_service},
};
use rust_decimal_macros::dec;
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};

#[tokio::test]
async fn clear_inventory_reports_rows_changed() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let collection = common::create_collection(&state, "Grocery").await?;
    let rice = common::create_product(&state, collection, "Rice", dec!(3.20), 30).await?;
    let beans = common::create_product(&state, collection, "Beans", dec!(2.10), 15).await?;
    let salt = common::create_product(&state, collection, "Salt", dec!(1.10), 9).await?;

    let resp = admin_service::clear_inventory(
        &state,
        ClearInventoryRequest {
            ids: vec![rice, beans, 9999],
        },
    )
    .await?;
    assert_eq!(resp.message, "2 products were successfully updated");
    assert_eq!(resp.data.unwrap().updated, 2);

    for (id, inventory) in [(rice, 0), (beans, 0), (salt, 9)] {
        let detail = product_service::get_product(&state, id).await?.data.unwrap();
        assert_eq!(detail.product.inventory, inventory);
    }

    let empty = admin_service::clear_inventory(&state, ClearInventoryRequest { ids: vec![] })
        .await?;
    assert_eq!(empty.message, "0 products were successfully updated");
    Ok(())
}

#[tokio::test]
async fn product_listing_filters_and_joins_collection() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let grocery = common::create_collection(&state, "Grocery").await?;
    let stationery = common::create_collection(&state, "Stationery").await?;
    common::create_product(&state, grocery, "Rice", dec!(3.20), 30).await?;
    common::create_product(&state, grocery, "Saffron", dec!(20.00), 3).await?;
    common::create_product(&state, stationery, "Ink", dec!(6.00), 9).await?;

    let low = admin_service::list_products(
        &state,
        AdminProductQuery {
            inventory: Some(InventoryFilter::Low),
            last_updated: Some(LastUpdatedFilter::Today),
            ..Default::default()
        },
    )
    .await?;
    let rows = low.data.unwrap().items;
    let summary: Vec<(&str, &str)> = rows
        .iter()
        .map(|r| (r.title.as_str(), r.collection_title.as_str()))
        .collect();
    assert_eq!(summary, vec![("Ink", "Stationery"), ("Saffron", "Grocery")]);
    assert!(rows.iter().all(|r| r.inventory_status == InventoryStatus::Low));

    let by_collection = admin_service::list_products(
        &state,
        AdminProductQuery {
            collection_id: Some(grocery),
            q: Some("ric".into()),
            ..Default::default()
        },
    )
    .await?;
    let rows = by_collection.data.unwrap().items;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].unit_price, dec!(3.20));
    Ok(())
}

#[tokio::test]
async fn admin_lists_use_the_configured_page_size() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let collection = common::create_collection(&state, "Bulk").await?;
    for n in 0..7 {
        common::create_product(&state, collection, &format!("Item {n}"), dec!(1.00), 100).await?;
    }

    let resp = admin_service::list_products(&state, AdminProductQuery::default()).await?;
    let meta = resp.meta.unwrap();
    assert_eq!(meta.per_page, Some(state.admin.products.list_per_page));
    assert_eq!(meta.total, Some(7));
    assert_eq!(resp.data.unwrap().items.len(), 5);
    Ok(())
}

#[tokio::test]
async fn customer_rows_render_ordered_products() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let collection = common::create_collection(&state, "Grocery").await?;
    let rice = common::create_product(&state, collection, "Rice", dec!(3.20), 30).await?;
    let tea = common::create_product(&state, collection, "Tea", dec!(4.00), 30).await?;
    let ada = common::create_customer(&state, "Ada", "Lovelace").await?;
    let alan = common::create_customer(&state, "Alan", "Turing").await?;
    common::create_customer(&state, "Grace", "Hopper").await?;

    common::place_order(&state, ada, &[(rice, 1), (tea, 2)]).await?;
    common::place_order(&state, ada, &[(rice, 3)]).await?;
    common::place_order(&state, alan, &[(tea, 1)]).await?;

    let rows = admin_service::list_customers(&state, ListQuery::default())
        .await?
        .data
        .unwrap()
        .items;
    let rendered: Vec<(&str, &str)> = rows
        .iter()
        .map(|r| (r.first_name.as_str(), r.ordered_products.as_str()))
        .collect();
    assert_eq!(
        rendered,
        vec![("Ada", "Rice, Tea"), ("Alan", "Tea"), ("Grace", "-")]
    );

    // Batch and per-customer lookups agree.
    for row in &rows {
        let single = aggregation::ordered_product_titles(&state.orm, row.id).await?;
        assert_eq!(
            aggregation::render_titles(&single, "-"),
            row.ordered_products
        );
    }

    let filtered = admin_service::list_customers(
        &state,
        ListQuery {
            q: Some("al".into()),
            ..Default::default()
        },
    )
    .await?;
    let rows = filtered.data.unwrap().items;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id, alan);
    Ok(())
}

#[tokio::test]
async fn collection_rows_count_products_and_link_to_listing() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let grocery = common::create_collection(&state, "Grocery").await?;
    let archive = common::create_collection(&state, "Archive").await?;
    common::create_product(&state, grocery, "Rice", dec!(3.20), 30).await?;
    common::create_product(&state, grocery, "Tea", dec!(4.00), 30).await?;

    let rows = admin_service::list_collections(&state, ListQuery::default())
        .await?
        .data
        .unwrap()
        .items;
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].id, archive);
    assert_eq!(rows[0].products_count, 0);
    assert_eq!(rows[1].products_count, 2);
    assert_eq!(
        rows[1].products_url,
        format!("/api/admin/products?collection_id={grocery}")
    );

    // Batch counts agree with a plain per-collection filter.
    for row in &rows {
        let naive = Products::find()
            .filter(products::Column::CollectionId.eq(row.id))
            .count(&state.orm)
            .await?;
        assert_eq!(naive as i64, row.products_count);
    }
    Ok(())
}

#[tokio::test]
async fn orders_listing_joins_customer_name() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let collection = common::create_collection(&state, "Grocery").await?;
    let rice = common::create_product(&state, collection, "Rice", dec!(3.20), 30).await?;
    let ada = common::create_customer(&state, "Ada", "Lovelace").await?;
    let grace = common::create_customer(&state, "Grace", "Hopper").await?;
    common::place_order(&state, ada, &[(rice, 1)]).await?;
    let latest = common::place_order(&state, grace, &[(rice, 1)]).await?;

    let rows = admin_service::list_orders(&state, ListQuery::default())
        .await?
        .data
        .unwrap()
        .items;
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].id, latest.order.id);
    assert_eq!(rows[0].customer, "Grace Hopper");

    let only_ada = admin_service::list_orders(
        &state,
        ListQuery {
            q: Some("love".into()),
            ..Default::default()
        },
    )
    .await?;
    let rows = only_ada.data.unwrap().items;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].customer, "Ada Lovelace");
    Ok(())
}

#[tokio::test]
async fn product_detail_includes_configured_panels() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let collection = common::create_collection(&state, "Grocery").await?;
    let rice = common::create_product(&state, collection, "Rice", dec!(3.20), 30).await?;
    review_service::create_review(
        &state,
        rice,
        CreateReviewRequest {
            name: "Ada".into(),
            description: "Cooks evenly".into(),
        },
    )
    .await?;

    let detail = admin_service::product_detail(&state, rice).await?.data.unwrap();
    assert_eq!(detail.panels.reviews.map(|r| r.len()), Some(1));
    assert_eq!(detail.panels.tags.map(|t| t.len()), Some(0));
    assert!(detail.panels.promotions.is_none());

    let missing = admin_service::product_detail(&state, 999).await;
    assert!(matches!(missing, Err(AppError::NotFound)));
    Ok(())
}

#[tokio::test]
async fn membership_update_rejects_unknown_codes() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let ada = common::create_customer(&state, "Ada", "Lovelace").await?;

    let updated = admin_service::update_membership(
        &state,
        ada,
        UpdateMembershipRequest {
            membership: "G".into(),
        },
    )
    .await?
    .data
    .unwrap();
    assert_eq!(updated.membership, Membership::Gold);

    let invalid = admin_service::update_membership(
        &state,
        ada,
        UpdateMembershipRequest {
            membership: "Platinum".into(),
        },
    )
    .await;
    assert!(matches!(invalid, Err(AppError::Validation(_))));
    Ok(())
}
