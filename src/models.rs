//! Typed read views handed to the presentation layer.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    domain::{
        catalog::{InventoryStatus, cents_to_price},
        customers::Membership,
        orders::{PaymentStatus, line_total},
    },
    entity::{addresses, customers, order_items, products, promotions, reviews, tags},
    services::aggregation::inventory_status,
};

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ProductView {
    pub id: i32,
    pub title: String,
    pub slug: String,
    pub description: Option<String>,
    pub unit_price: Decimal,
    pub inventory: i32,
    pub inventory_status: InventoryStatus,
    pub last_updated: DateTime<Utc>,
    pub collection_id: i32,
    /// Present when the caller asked for a discount factor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discounted_price: Option<Decimal>,
}

impl From<products::Model> for ProductView {
    fn from(model: products::Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            slug: model.slug,
            description: model.description,
            unit_price: cents_to_price(model.unit_price_cents),
            inventory: model.inventory,
            inventory_status: inventory_status(model.inventory),
            last_updated: model.last_updated.with_timezone(&Utc),
            collection_id: model.collection_id,
            discounted_price: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ProductDetail {
    pub product: ProductView,
    pub collection_title: String,
    pub promotions: Vec<PromotionView>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CollectionView {
    pub id: i32,
    pub title: String,
    pub featured_product_id: Option<i32>,
    pub products_count: i64,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PromotionView {
    pub id: i32,
    pub description: String,
    pub discount: f64,
}

impl From<promotions::Model> for PromotionView {
    fn from(model: promotions::Model) -> Self {
        Self {
            id: model.id,
            description: model.description,
            discount: model.discount,
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CustomerView {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub birth_date: Option<NaiveDate>,
    pub membership: Membership,
}

impl From<customers::Model> for CustomerView {
    fn from(model: customers::Model) -> Self {
        Self {
            id: model.id,
            // Stored codes are written through `Membership::code`.
            membership: Membership::parse(&model.membership).unwrap_or_default(),
            first_name: model.first_name,
            last_name: model.last_name,
            email: model.email,
            phone: model.phone,
            birth_date: model.birth_date,
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AddressView {
    pub id: i32,
    pub street: String,
    pub city: String,
    pub zip: Option<i32>,
    pub customer_id: i32,
}

impl From<addresses::Model> for AddressView {
    fn from(model: addresses::Model) -> Self {
        Self {
            id: model.id,
            street: model.street,
            city: model.city,
            zip: model.zip,
            customer_id: model.customer_id,
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct OrderView {
    pub id: i32,
    pub placed_at: DateTime<Utc>,
    pub payment_status: PaymentStatus,
    pub customer_id: i32,
    pub total: Decimal,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct OrderItemView {
    pub id: i32,
    pub order_id: i32,
    pub product_id: i32,
    pub quantity: i32,
    pub unit_price: Decimal,
    pub line_total: Decimal,
}

impl From<order_items::Model> for OrderItemView {
    fn from(model: order_items::Model) -> Self {
        Self {
            id: model.id,
            order_id: model.order_id,
            product_id: model.product_id,
            quantity: model.quantity,
            unit_price: cents_to_price(model.unit_price_cents),
            line_total: line_total(model.unit_price_cents, model.quantity),
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct OrderWithItems {
    pub order: OrderView,
    pub items: Vec<OrderItemView>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CartItemView {
    pub id: i32,
    pub product_id: i32,
    pub title: String,
    pub unit_price: Decimal,
    pub quantity: i32,
    pub line_total: Decimal,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CartView {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub items: Vec<CartItemView>,
    /// Priced at the current product prices.
    pub total: Decimal,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ReviewView {
    pub id: i32,
    pub product_id: i32,
    pub name: String,
    pub description: String,
    pub date: NaiveDate,
}

impl From<reviews::Model> for ReviewView {
    fn from(model: reviews::Model) -> Self {
        Self {
            id: model.id,
            product_id: model.product_id,
            name: model.name,
            description: model.description,
            date: model.date,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct TagView {
    pub id: i32,
    pub label: String,
}

impl From<tags::Model> for TagView {
    fn from(model: tags::Model) -> Self {
        Self {
            id: model.id,
            label: model.label,
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct OrderedProducts {
    pub customer_id: i32,
    pub titles: Vec<String>,
    pub display: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ProductAdminRow {
    pub id: i32,
    pub title: String,
    pub unit_price: Decimal,
    pub inventory: i32,
    pub inventory_status: InventoryStatus,
    pub collection_title: String,
}

#[derive(Debug, Clone, Default, Serialize, ToSchema)]
pub struct AdminPanels {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<TagView>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reviews: Option<Vec<ReviewView>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub promotions: Option<Vec<PromotionView>>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ProductAdminDetail {
    pub product: ProductDetail,
    pub panels: AdminPanels,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CustomerAdminRow {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub membership: Membership,
    pub ordered_products: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CollectionAdminRow {
    pub id: i32,
    pub title: String,
    pub products_count: i64,
    /// Product listing filtered to this collection.
    pub products_url: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct OrderAdminRow {
    pub id: i32,
    pub customer: String,
    pub placed_at: DateTime<Utc>,
    pub payment_status: PaymentStatus,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ClearInventoryResult {
    pub updated: u64,
}
