use axum_store_api::{
    config::AppConfig,
    db::{create_orm_conn, run_migrations},
    domain::{
        catalog::{ProductDraft, slugify},
        customers::Membership,
        orders::PaymentStatus,
    },
    entity::{Collections, collections, customers, order_items, orders, products},
};
use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, PaginatorTrait, Set};

const CATALOG: &[(&str, &[(&str, i64, i32)])] = &[
    (
        "Beauty",
        &[("Lavender Soap", 450, 120), ("Rose Hand Cream", 1299, 8)],
    ),
    (
        "Grocery",
        &[("Arabica Coffee Beans", 1575, 60), ("Green Tea", 675, 35)],
    ),
    (
        "Stationery",
        &[("Dot Grid Notebook", 899, 200), ("Fountain Pen", 4500, 4)],
    ),
];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();
    let config = AppConfig::from_env()?;

    let orm = create_orm_conn(&config.database_url).await?;
    run_migrations(&orm).await?;

    if Collections::find().count(&orm).await? > 0 {
        println!("Database already seeded, skipping");
        return Ok(());
    }

    let product_ids = seed_catalog(&orm).await?;
    let customer_id = seed_customer(&orm).await?;
    let order_id = seed_order(&orm, customer_id, &product_ids).await?;

    println!(
        "Seed completed. {} products, customer ID: {customer_id}, order ID: {order_id}",
        product_ids.len()
    );
    Ok(())
}

async fn seed_catalog(orm: &DatabaseConnection) -> anyhow::Result<Vec<(i32, i64)>> {
    let mut product_ids = Vec::new();
    for (title, items) in CATALOG {
        let collection = collections::ActiveModel {
            title: Set(title.to_string()),
            featured_product_id: Set(None),
            ..Default::default()
        }
        .insert(orm)
        .await?;

        for (product_title, cents, inventory) in items.iter() {
            let product = ProductDraft {
                title: product_title.to_string(),
                slug: Some(slugify(product_title)),
                description: None,
                unit_price: Decimal::new(*cents, 2),
                inventory: *inventory,
                collection_id: collection.id,
            }
            .validate()?;

            let model = products::ActiveModel {
                title: Set(product.title),
                slug: Set(product.slug),
                description: Set(product.description),
                unit_price_cents: Set(product.unit_price_cents),
                inventory: Set(product.inventory),
                last_updated: Set(Utc::now().into()),
                collection_id: Set(product.collection_id),
                ..Default::default()
            }
            .insert(orm)
            .await?;
            product_ids.push((model.id, model.unit_price_cents));
        }
    }
    Ok(product_ids)
}

async fn seed_customer(orm: &DatabaseConnection) -> anyhow::Result<i32> {
    let customer = customers::ActiveModel {
        first_name: Set("Ada".to_string()),
        last_name: Set("Lovelace".to_string()),
        email: Set("ada@example.com".to_string()),
        phone: Set("555-0100".to_string()),
        birth_date: Set(NaiveDate::from_ymd_opt(1990, 12, 10)),
        membership: Set(Membership::Gold.code().to_string()),
        ..Default::default()
    }
    .insert(orm)
    .await?;
    Ok(customer.id)
}

async fn seed_order(
    orm: &DatabaseConnection,
    customer_id: i32,
    products: &[(i32, i64)],
) -> anyhow::Result<i32> {
    let order = orders::ActiveModel {
        placed_at: Set(Utc::now().into()),
        payment_status: Set(PaymentStatus::Complete.code().to_string()),
        customer_id: Set(customer_id),
        ..Default::default()
    }
    .insert(orm)
    .await?;

    for (quantity, (product_id, cents)) in (1..).zip(products.iter().take(2)) {
        order_items::ActiveModel {
            order_id: Set(order.id),
            product_id: Set(*product_id),
            quantity: Set(quantity),
            unit_price_cents: Set(*cents),
            ..Default::default()
        }
        .insert(orm)
        .await?;
    }
    Ok(order.id)
}
