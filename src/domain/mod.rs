//! Validated domain types.
//!
//! Everything in here is pure: constructors check field constraints and fail
//! with [`ValidationError`] before anything is written to storage.

use std::fmt;

use thiserror::Error;

pub mod catalog;
pub mod customers;
pub mod orders;
pub mod tags;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// The dependent relation that keeps a row from being deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteBlocker {
    CollectionHasProducts,
    ProductHasOrderItems,
    CustomerHasOrders,
}

impl fmt::Display for DeleteBlocker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            DeleteBlocker::CollectionHasProducts => {
                "Collection cannot be deleted because it has products"
            }
            DeleteBlocker::ProductHasOrderItems => {
                "Product cannot be deleted because it is associated with order items"
            }
            DeleteBlocker::CustomerHasOrders => "Customer cannot be deleted because it has orders",
        };
        f.write_str(message)
    }
}

pub(crate) fn require_text(
    field: &'static str,
    value: &str,
    max_len: usize,
) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::new(field, "must not be empty"));
    }
    if trimmed.chars().count() > max_len {
        return Err(ValidationError::new(
            field,
            format!("must be at most {max_len} characters"),
        ));
    }
    Ok(trimmed.to_string())
}
