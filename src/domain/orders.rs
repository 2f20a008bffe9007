use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumString};
use utoipa::ToSchema;

use super::ValidationError;
use super::catalog::cents_to_price;

pub const MIN_ORDER_LINES: usize = 1;
pub const MAX_ORDER_LINES: usize = 100;
const MAX_QUANTITY: i32 = i16::MAX as i32;

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema, EnumString, AsRefStr,
)]
pub enum PaymentStatus {
    #[default]
    #[serde(rename = "P")]
    #[strum(serialize = "P")]
    Pending,
    #[serde(rename = "C")]
    #[strum(serialize = "C")]
    Complete,
    #[serde(rename = "F")]
    #[strum(serialize = "F")]
    Failed,
}

impl PaymentStatus {
    pub fn parse(code: &str) -> Result<Self, ValidationError> {
        PaymentStatus::from_str(code).map_err(|_| {
            ValidationError::new(
                "payment_status",
                format!("\"{code}\" is not a valid choice (P, C or F)"),
            )
        })
    }

    pub fn code(&self) -> &str {
        self.as_ref()
    }
}

/// Line quantities are positive small integers.
pub fn validate_quantity(quantity: i32) -> Result<i32, ValidationError> {
    if !(1..=MAX_QUANTITY).contains(&quantity) {
        return Err(ValidationError::new(
            "quantity",
            format!("must be between 1 and {MAX_QUANTITY}"),
        ));
    }
    Ok(quantity)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderLine {
    pub product_id: i32,
    pub quantity: i32,
}

pub fn validate_order_lines(lines: &[OrderLine]) -> Result<(), ValidationError> {
    if lines.len() < MIN_ORDER_LINES {
        return Err(ValidationError::new(
            "items",
            "an order needs at least one item",
        ));
    }
    if lines.len() > MAX_ORDER_LINES {
        return Err(ValidationError::new(
            "items",
            format!("an order may hold at most {MAX_ORDER_LINES} items"),
        ));
    }
    for line in lines {
        validate_quantity(line.quantity)?;
    }
    Ok(())
}

/// Total of a line priced from its own snapshot, never the live product price.
pub fn line_total(unit_price_cents: i64, quantity: i32) -> Decimal {
    cents_to_price(unit_price_cents) * Decimal::from(quantity)
}

pub fn order_total<I>(lines: I) -> Decimal
where
    I: IntoIterator<Item = (i64, i32)>,
{
    lines
        .into_iter()
        .map(|(cents, quantity)| line_total(cents, quantity))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn payment_status_codes() {
        assert_eq!(PaymentStatus::parse("C").unwrap(), PaymentStatus::Complete);
        assert_eq!(PaymentStatus::default().code(), "P");
        assert!(PaymentStatus::parse("paid").is_err());
    }

    #[test]
    fn order_line_bounds() {
        assert!(validate_order_lines(&[]).is_err());
        let line = OrderLine {
            product_id: 1,
            quantity: 2,
        };
        assert!(validate_order_lines(&[line]).is_ok());
        assert!(validate_order_lines(&vec![line; 101]).is_err());
        assert!(
            validate_order_lines(&[OrderLine {
                product_id: 1,
                quantity: 0
            }])
            .is_err()
        );
    }

    #[test]
    fn totals_use_snapshot_prices() {
        assert_eq!(order_total([(1999, 2), (500, 1)]), dec!(44.98));
    }
}
