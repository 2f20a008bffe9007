mod common;

use axum_store_api::{
    domain::catalog::InventoryStatus,
    dto::{
        promotions::CreatePromotionRequest,
        reviews::CreateReviewRequest,
        tags::{CreateTagRequest, TagObjectRequest},
    },
    error::AppError,
    routes::params::{ListQuery, ProductQuery, ProductSortBy, SortOrder},
    services::{
        collection_service, product_service, promotion_service, review_service, tag_service,
    },
    state::AppState,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

async fn seed_catalog(state: &AppState) -> anyhow::Result<(i32, i32)> {
    let grocery = common::create_collection(state, "Grocery").await?;
    let stationery = common::create_collection(state, "Stationery").await?;
    for (title, price, inventory) in [
        ("Coffee", dec!(15.00), 60),
        ("Green Tea", dec!(9.99), 35),
        ("Oat Milk", dec!(10.00), 20),
        ("Honey", dec!(20.00), 5),
        ("Saffron", dec!(20.01), 2),
    ] {
        common::create_product(state, grocery, title, price, inventory).await?;
    }
    common::create_product(state, stationery, "Notebook", dec!(12.00), 200).await?;
    Ok((grocery, stationery))
}

fn titles(items: &[axum_store_api::models::ProductView]) -> Vec<&str> {
    items.iter().map(|p| p.title.as_str()).collect()
}

#[tokio::test]
async fn price_range_is_inclusive_and_sorted_by_title() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    seed_catalog(&state).await?;

    let resp = product_service::list_products(
        &state,
        ProductQuery {
            min_price: Some(dec!(10)),
            max_price: Some(dec!(20)),
            ..Default::default()
        },
    )
    .await?;
    let items = resp.data.unwrap().items;
    assert_eq!(titles(&items), vec!["Coffee", "Honey", "Notebook", "Oat Milk"]);
    assert_eq!(resp.meta.unwrap().total, Some(4));
    Ok(())
}

#[tokio::test]
async fn collection_filter_search_and_descending_price() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let (grocery, _) = seed_catalog(&state).await?;

    let resp = product_service::list_products(
        &state,
        ProductQuery {
            collection_id: Some(grocery),
            sort_by: Some(ProductSortBy::UnitPrice),
            sort_order: Some(SortOrder::Desc),
            ..Default::default()
        },
    )
    .await?;
    assert_eq!(
        titles(&resp.data.unwrap().items),
        vec!["Saffron", "Honey", "Coffee", "Oat Milk", "Green Tea"]
    );

    let resp = product_service::list_products(
        &state,
        ProductQuery {
            q: Some("  TEA ".into()),
            ..Default::default()
        },
    )
    .await?;
    assert_eq!(titles(&resp.data.unwrap().items), vec!["Green Tea"]);
    Ok(())
}

#[tokio::test]
async fn search_treats_wildcards_literally() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let collection = common::create_collection(&state, "Misc").await?;
    common::create_product(&state, collection, "100% Cotton", dec!(5.00), 10).await?;
    common::create_product(&state, collection, "1000 Pins", dec!(5.00), 10).await?;

    let resp = product_service::list_products(
        &state,
        ProductQuery {
            q: Some("0%".into()),
            ..Default::default()
        },
    )
    .await?;
    assert_eq!(titles(&resp.data.unwrap().items), vec!["100% Cotton"]);
    Ok(())
}

#[tokio::test]
async fn pages_are_stable_and_out_of_range_pages_are_empty() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    seed_catalog(&state).await?;

    let mut seen = Vec::new();
    for page in 1..=3 {
        let resp = product_service::list_products(
            &state,
            ProductQuery {
                page: Some(page),
                per_page: Some(2),
                ..Default::default()
            },
        )
        .await?;
        let meta = resp.meta.unwrap();
        assert_eq!(meta.total, Some(6));
        assert_eq!(meta.pages, Some(3));
        seen.extend(resp.data.unwrap().items.into_iter().map(|p| p.title));
    }
    assert_eq!(
        seen,
        vec!["Coffee", "Green Tea", "Honey", "Notebook", "Oat Milk", "Saffron"]
    );

    for page in [0, 9] {
        let resp = product_service::list_products(
            &state,
            ProductQuery {
                page: Some(page),
                per_page: Some(2),
                ..Default::default()
            },
        )
        .await?;
        assert!(resp.data.unwrap().items.is_empty());
        assert_eq!(resp.meta.unwrap().total, Some(6));
    }
    Ok(())
}

#[tokio::test]
async fn discount_and_inventory_status_are_derived() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let collection = common::create_collection(&state, "Grocery").await?;
    common::create_product(&state, collection, "Tea", dec!(100.00), 49).await?;
    common::create_product(&state, collection, "Teapot", dec!(100.00), 50).await?;

    let resp = product_service::list_products(
        &state,
        ProductQuery {
            discount_factor: Some(dec!(0.8)),
            ..Default::default()
        },
    )
    .await?;
    let items = resp.data.unwrap().items;
    assert_eq!(items[0].discounted_price, Some(dec!(80.00)));
    assert_eq!(items[0].inventory_status, InventoryStatus::Low);
    assert_eq!(items[1].inventory_status, InventoryStatus::Ok);
    Ok(())
}

#[tokio::test]
async fn invalid_products_are_rejected() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let collection = common::create_collection(&state, "Grocery").await?;

    let cheap = common::create_product(&state, collection, "Gum", dec!(0.99), 10).await;
    let empty = common::create_product(&state, collection, "Air", dec!(1.00), 0).await;
    let orphan = common::create_product(&state, 999, "Ghost", dec!(1.00), 1).await;
    for result in [cheap, empty, orphan] {
        let err = result.expect_err("should be rejected");
        let err = err.downcast::<AppError>()?;
        assert!(matches!(err, AppError::Validation(_)), "{err}");
    }
    Ok(())
}

#[tokio::test]
async fn collections_list_their_product_counts() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let (grocery, stationery) = seed_catalog(&state).await?;
    let empty = common::create_collection(&state, "Archive").await?;

    let items = collection_service::list_collections(&state, ListQuery::default())
        .await?
        .data
        .unwrap()
        .items;
    let counts: Vec<(i32, i64)> = items.iter().map(|c| (c.id, c.products_count)).collect();
    assert_eq!(counts, vec![(empty, 0), (grocery, 5), (stationery, 1)]);
    Ok(())
}

#[tokio::test]
async fn product_detail_carries_collection_and_promotions() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let collection = common::create_collection(&state, "Grocery").await?;
    let coffee = common::create_product(&state, collection, "Coffee", dec!(15.00), 60).await?;
    let promo = promotion_service::create_promotion(
        &state,
        CreatePromotionRequest {
            description: "Spring sale".into(),
            discount: 0.15,
        },
    )
    .await?
    .data
    .unwrap();

    promotion_service::attach_promotion(&state, coffee, promo.id).await?;
    promotion_service::attach_promotion(&state, coffee, promo.id).await?;

    let detail = product_service::get_product(&state, coffee).await?.data.unwrap();
    assert_eq!(detail.collection_title, "Grocery");
    assert_eq!(detail.promotions.len(), 1);
    assert_eq!(detail.product.unit_price, Decimal::new(1500, 2));

    promotion_service::detach_promotion(&state, coffee, promo.id).await?;
    let again = promotion_service::detach_promotion(&state, coffee, promo.id).await;
    assert!(matches!(again, Err(AppError::NotFound)));
    Ok(())
}

#[tokio::test]
async fn reviews_are_scoped_to_their_product() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let collection = common::create_collection(&state, "Grocery").await?;
    let coffee = common::create_product(&state, collection, "Coffee", dec!(15.00), 60).await?;
    let tea = common::create_product(&state, collection, "Tea", dec!(5.00), 60).await?;

    let review = review_service::create_review(
        &state,
        coffee,
        CreateReviewRequest {
            name: "Ada".into(),
            description: "Strong and smooth".into(),
        },
    )
    .await?
    .data
    .unwrap();

    let listed = review_service::list_reviews(&state, coffee).await?.data.unwrap();
    assert_eq!(listed.items.len(), 1);
    assert!(review_service::list_reviews(&state, tea).await?.data.unwrap().items.is_empty());

    let wrong_product = review_service::get_review(&state, tea, review.id).await;
    assert!(matches!(wrong_product, Err(AppError::NotFound)));
    let missing_product = review_service::list_reviews(&state, 999).await;
    assert!(matches!(missing_product, Err(AppError::NotFound)));
    Ok(())
}

#[tokio::test]
async fn tags_attach_to_existing_objects_once() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let collection = common::create_collection(&state, "Grocery").await?;
    let coffee = common::create_product(&state, collection, "Coffee", dec!(15.00), 60).await?;

    let tag = tag_service::create_tag(
        &state,
        CreateTagRequest {
            label: "organic".into(),
        },
    )
    .await?
    .data
    .unwrap();
    let duplicate = tag_service::create_tag(
        &state,
        CreateTagRequest {
            label: "organic".into(),
        },
    )
    .await;
    assert!(matches!(duplicate, Err(AppError::Validation(_))));

    for _ in 0..2 {
        tag_service::tag_object(
            &state,
            tag.id,
            TagObjectRequest {
                content_kind: "product".into(),
                object_id: coffee,
            },
        )
        .await?;
    }
    let tags = tag_service::list_object_tags(&state, "product", coffee)
        .await?
        .data
        .unwrap();
    assert_eq!(tags.items.len(), 1);
    assert_eq!(tags.items[0].label, "organic");

    let missing = tag_service::tag_object(
        &state,
        tag.id,
        TagObjectRequest {
            content_kind: "product".into(),
            object_id: 999,
        },
    )
    .await;
    assert!(matches!(missing, Err(AppError::Validation(_))));
    let unknown_kind = tag_service::list_object_tags(&state, "planet", coffee).await;
    assert!(matches!(unknown_kind, Err(AppError::Validation(_))));
    Ok(())
}
