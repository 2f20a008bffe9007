use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::Serialize;
use utoipa::ToSchema;

use super::{ValidationError, require_text};

/// Products with fewer units than this are reported as `Low`.
pub const INVENTORY_STATUS_THRESHOLD: i32 = 50;

const TITLE_MAX_LEN: usize = 255;
const PRICE_SCALE: u32 = 2;
// max_digits = 6, decimal_places = 2
const MAX_PRICE_CENTS: i64 = 999_999;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub enum InventoryStatus {
    Low,
    Ok,
}

impl InventoryStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            InventoryStatus::Low => "Low",
            InventoryStatus::Ok => "Ok",
        }
    }
}

/// Stored prices are minor units; the API speaks `Decimal` with two places.
pub fn cents_to_price(cents: i64) -> Decimal {
    Decimal::new(cents, PRICE_SCALE)
}

/// Converts a price to minor units without checking the catalog minimum.
/// Used for price filters and line snapshots.
pub fn price_to_cents(field: &'static str, price: Decimal) -> Result<i64, ValidationError> {
    if price.normalize().scale() > PRICE_SCALE {
        return Err(ValidationError::new(
            field,
            "must have at most 2 decimal places",
        ));
    }
    price
        .checked_mul(Decimal::ONE_HUNDRED)
        .and_then(|cents| cents.trunc().to_i64())
        .ok_or_else(|| ValidationError::new(field, "is out of range"))
}

/// A catalog unit price: at least 1.00, at most 9999.99.
pub fn unit_price_cents(price: Decimal) -> Result<i64, ValidationError> {
    if price < Decimal::ONE {
        return Err(ValidationError::new(
            "unit_price",
            "must be greater than or equal to 1",
        ));
    }
    let cents = price_to_cents("unit_price", price)?;
    if cents > MAX_PRICE_CENTS {
        return Err(ValidationError::new(
            "unit_price",
            "must have no more than 6 digits in total",
        ));
    }
    Ok(cents)
}

pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_dash = false;
    for ch in title.chars() {
        if ch.is_ascii_alphanumeric() || ch == '_' {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(ch.to_ascii_lowercase());
        } else if ch.is_whitespace() || ch == '-' {
            pending_dash = true;
        }
    }
    slug
}

fn validate_slug(slug: &str) -> Result<String, ValidationError> {
    let slug = require_text("slug", slug, TITLE_MAX_LEN)?;
    let valid = slug
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if !valid {
        return Err(ValidationError::new(
            "slug",
            "may only contain letters, numbers, underscores or hyphens",
        ));
    }
    Ok(slug)
}

#[derive(Debug, Clone)]
pub struct ProductDraft {
    pub title: String,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub unit_price: Decimal,
    pub inventory: i32,
    pub collection_id: i32,
}

/// A product that passed every field constraint and is ready to persist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidProduct {
    pub title: String,
    pub slug: String,
    pub description: Option<String>,
    pub unit_price_cents: i64,
    pub inventory: i32,
    pub collection_id: i32,
}

impl ProductDraft {
    pub fn validate(self) -> Result<ValidProduct, ValidationError> {
        let title = require_text("title", &self.title, TITLE_MAX_LEN)?;
        let slug = match self.slug {
            Some(slug) => validate_slug(&slug)?,
            None => validate_slug(&slugify(&title))?,
        };
        let unit_price_cents = unit_price_cents(self.unit_price)?;
        if self.inventory < 1 {
            return Err(ValidationError::new(
                "inventory",
                "must be greater than or equal to 1",
            ));
        }
        let description = self
            .description
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty());
        Ok(ValidProduct {
            title,
            slug,
            description,
            unit_price_cents,
            inventory: self.inventory,
            collection_id: self.collection_id,
        })
    }
}

/// Partial update; unset fields keep their current value.
#[derive(Debug, Clone, Default)]
pub struct ProductChanges {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub unit_price: Option<Decimal>,
    pub inventory: Option<i32>,
    pub collection_id: Option<i32>,
}

impl ProductChanges {
    pub fn apply(self, current: ProductDraft) -> ProductDraft {
        ProductDraft {
            title: self.title.unwrap_or(current.title),
            slug: self.slug.or(current.slug),
            description: self.description.or(current.description),
            unit_price: self.unit_price.unwrap_or(current.unit_price),
            inventory: self.inventory.unwrap_or(current.inventory),
            collection_id: self.collection_id.unwrap_or(current.collection_id),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CollectionDraft {
    pub title: String,
    pub featured_product_id: Option<i32>,
}

impl CollectionDraft {
    pub fn validate(self) -> Result<CollectionDraft, ValidationError> {
        Ok(CollectionDraft {
            title: require_text("title", &self.title, TITLE_MAX_LEN)?,
            featured_product_id: self.featured_product_id,
        })
    }
}

#[derive(Debug, Clone)]
pub struct PromotionDraft {
    pub description: String,
    pub discount: f64,
}

impl PromotionDraft {
    pub fn validate(self) -> Result<PromotionDraft, ValidationError> {
        let description = require_text("description", &self.description, TITLE_MAX_LEN)?;
        if !self.discount.is_finite() {
            return Err(ValidationError::new("discount", "must be a finite number"));
        }
        Ok(PromotionDraft {
            description,
            discount: self.discount,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn draft() -> ProductDraft {
        ProductDraft {
            title: "Ferris Mug".into(),
            slug: None,
            description: Some("  ".into()),
            unit_price: dec!(12.50),
            inventory: 10,
            collection_id: 1,
        }
    }

    #[test]
    fn slug_is_derived_from_title() {
        let product = draft().validate().unwrap();
        assert_eq!(product.slug, "ferris-mug");
        assert_eq!(product.unit_price_cents, 1250);
        assert_eq!(product.description, None);
    }

    #[test]
    fn slugify_collapses_separators() {
        assert_eq!(slugify("  Rust -- Sticker  Pack! "), "rust-sticker-pack");
    }

    #[test]
    fn price_and_inventory_minimums() {
        let err = ProductDraft {
            unit_price: dec!(0.99),
            ..draft()
        }
        .validate()
        .unwrap_err();
        assert_eq!(err.field, "unit_price");

        let err = ProductDraft {
            inventory: 0,
            ..draft()
        }
        .validate()
        .unwrap_err();
        assert_eq!(err.field, "inventory");
    }

    #[test]
    fn price_precision_is_bounded() {
        assert!(unit_price_cents(dec!(1.005)).is_err());
        assert!(unit_price_cents(dec!(10000.00)).is_err());
        assert_eq!(unit_price_cents(dec!(9999.99)).unwrap(), 999_999);
        assert_eq!(unit_price_cents(dec!(20.000)).unwrap(), 2000);
    }

    #[test]
    fn huge_prices_are_out_of_range() {
        let err = price_to_cents("max_price", Decimal::MAX).unwrap_err();
        assert_eq!(err.field, "max_price");
        assert_eq!(err.message, "is out of range");
        assert_eq!(unit_price_cents(Decimal::MAX).unwrap_err().field, "unit_price");
    }

    #[test]
    fn changes_keep_unset_fields() {
        let changed = ProductChanges {
            inventory: Some(3),
            ..Default::default()
        }
        .apply(draft());
        assert_eq!(changed.inventory, 3);
        assert_eq!(changed.title, "Ferris Mug");
    }

    #[test]
    fn cents_round_trip_keeps_two_places() {
        assert_eq!(cents_to_price(8000).to_string(), "80.00");
    }
}
