use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumString};
use utoipa::ToSchema;

use super::{ValidationError, require_text};

/// Kinds of rows a tag can be attached to. Stored as the `content_kind`
/// column of `tagged_items`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema, EnumString, AsRefStr)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum TaggableKind {
    Product,
    Collection,
    Customer,
}

impl TaggableKind {
    pub fn parse(kind: &str) -> Result<Self, ValidationError> {
        TaggableKind::from_str(kind).map_err(|_| {
            ValidationError::new(
                "content_kind",
                format!("\"{kind}\" is not a taggable kind"),
            )
        })
    }

    pub fn code(&self) -> &str {
        self.as_ref()
    }
}

pub fn validate_label(label: &str) -> Result<String, ValidationError> {
    require_text("label", label, 255)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_are_closed() {
        assert_eq!(TaggableKind::parse("product").unwrap(), TaggableKind::Product);
        assert_eq!(TaggableKind::Collection.code(), "collection");
        assert!(TaggableKind::parse("order").is_err());
    }
}
