//! Derived values computed in batch: one grouped query per listing page, never
//! one query per row.

use std::collections::{HashMap, HashSet};

use rust_decimal::{Decimal, RoundingStrategy};
use sea_orm::{
    ColumnTrait, Condition, ConnectionTrait, EntityTrait, JoinType, QueryFilter, QueryOrder,
    QuerySelect, RelationTrait, sea_query::Expr,
};

use crate::{
    domain::catalog::{INVENTORY_STATUS_THRESHOLD, InventoryStatus},
    entity::{OrderItems, Products, order_items, orders, products},
    error::AppResult,
};

pub fn inventory_status(inventory: i32) -> InventoryStatus {
    if inventory < INVENTORY_STATUS_THRESHOLD {
        InventoryStatus::Low
    } else {
        InventoryStatus::Ok
    }
}

/// `unit_price * factor`, rounded half-even to cents. `None` when the product
/// does not fit in a `Decimal`.
pub fn discounted_price(unit_price: Decimal, factor: Decimal) -> Option<Decimal> {
    unit_price
        .checked_mul(factor)
        .map(|price| price.round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven))
}

/// Products with strictly fewer than `threshold` units.
pub fn low_inventory_condition(threshold: i32) -> Condition {
    Condition::all().add(products::Column::Inventory.lt(threshold))
}

pub async fn products_count<C: ConnectionTrait>(conn: &C, collection_id: i32) -> AppResult<i64> {
    let counts = products_count_by_collection(conn, &[collection_id]).await?;
    Ok(counts.get(&collection_id).copied().unwrap_or(0))
}

/// Product counts for many collections in one grouped query. Collections
/// without products are absent from the map.
pub async fn products_count_by_collection<C: ConnectionTrait>(
    conn: &C,
    collection_ids: &[i32],
) -> AppResult<HashMap<i32, i64>> {
    if collection_ids.is_empty() {
        return Ok(HashMap::new());
    }

    let rows: Vec<(i32, i64)> = Products::find()
        .select_only()
        .column(products::Column::CollectionId)
        .column_as(Expr::col((Products, products::Column::Id)).count(), "products_count")
        .filter(products::Column::CollectionId.is_in(collection_ids.iter().copied()))
        .group_by(products::Column::CollectionId)
        .into_tuple()
        .all(conn)
        .await?;

    Ok(rows.into_iter().collect())
}

pub async fn ordered_product_titles<C: ConnectionTrait>(
    conn: &C,
    customer_id: i32,
) -> AppResult<Vec<String>> {
    let mut titles = ordered_product_titles_by_customer(conn, &[customer_id]).await?;
    Ok(titles.remove(&customer_id).unwrap_or_default())
}

/// Distinct ordered products per customer, in the order they were first
/// bought. Deduplication is by product id, so two products sharing a title
/// both appear.
pub async fn ordered_product_titles_by_customer<C: ConnectionTrait>(
    conn: &C,
    customer_ids: &[i32],
) -> AppResult<HashMap<i32, Vec<String>>> {
    if customer_ids.is_empty() {
        return Ok(HashMap::new());
    }

    let rows: Vec<(i32, i32, String)> = OrderItems::find()
        .select_only()
        .column(orders::Column::CustomerId)
        .column(products::Column::Id)
        .column(products::Column::Title)
        .join(JoinType::InnerJoin, order_items::Relation::Orders.def())
        .join(JoinType::InnerJoin, order_items::Relation::Products.def())
        .filter(orders::Column::CustomerId.is_in(customer_ids.iter().copied()))
        .order_by_asc(orders::Column::PlacedAt)
        .order_by_asc(order_items::Column::Id)
        .into_tuple()
        .all(conn)
        .await?;

    Ok(dedupe_titles(rows))
}

fn dedupe_titles(rows: Vec<(i32, i32, String)>) -> HashMap<i32, Vec<String>> {
    let mut seen: HashSet<(i32, i32)> = HashSet::new();
    let mut titles: HashMap<i32, Vec<String>> = HashMap::new();
    for (customer_id, product_id, title) in rows {
        if seen.insert((customer_id, product_id)) {
            titles.entry(customer_id).or_default().push(title);
        }
    }
    titles
}

pub fn render_titles(titles: &[String], sentinel: &str) -> String {
    if titles.is_empty() {
        sentinel.to_string()
    } else {
        titles.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn inventory_status_boundary() {
        assert_eq!(inventory_status(49), InventoryStatus::Low);
        assert_eq!(inventory_status(50), InventoryStatus::Ok);
        assert_eq!(inventory_status(0), InventoryStatus::Low);
    }

    #[test]
    fn discount_is_exact() {
        let price = discounted_price(dec!(100.00), dec!(0.8)).unwrap();
        assert_eq!(price, dec!(80.00));
        assert_eq!(price.to_string(), "80.00");
        assert_eq!(discounted_price(dec!(19.99), dec!(0.8)), Some(dec!(15.99)));
    }

    #[test]
    fn discount_overflow_is_none() {
        assert_eq!(discounted_price(dec!(9999.99), Decimal::MAX), None);
    }

    #[test]
    fn titles_dedupe_by_product_not_title() {
        let rows = vec![
            (1, 10, "Mug".to_string()),
            (1, 11, "Shirt".to_string()),
            (1, 10, "Mug".to_string()),
            (1, 12, "Mug".to_string()),
            (2, 11, "Shirt".to_string()),
        ];
        let titles = dedupe_titles(rows);
        assert_eq!(titles[&1], vec!["Mug", "Shirt", "Mug"]);
        assert_eq!(titles[&2], vec!["Shirt"]);
    }

    #[test]
    fn empty_titles_render_sentinel() {
        assert_eq!(render_titles(&[], "-"), "-");
        assert_eq!(
            render_titles(&["Mug".to_string(), "Shirt".to_string()], "-"),
            "Mug, Shirt"
        );
    }
}
