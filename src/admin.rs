//! Operator-facing listing configuration.
//!
//! Each admin is a plain configuration value. Extra detail panels are added
//! by listing them in `inlines`, and the whole site is assembled once by
//! [`AdminSite::from_config`] when the application state is built.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::config::AppConfig;

/// Related data rendered alongside a product on its admin detail view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum InlinePanel {
    Tags,
    Reviews,
    Promotions,
}

#[derive(Debug, Clone)]
pub struct ProductAdmin {
    pub list_per_page: i64,
    pub low_inventory_threshold: i32,
    pub inlines: Vec<InlinePanel>,
}

impl ProductAdmin {
    pub fn new(list_per_page: i64, low_inventory_threshold: i32) -> Self {
        Self {
            list_per_page,
            low_inventory_threshold,
            inlines: Vec::new(),
        }
    }

    pub fn with_inline(mut self, panel: InlinePanel) -> Self {
        if !self.inlines.contains(&panel) {
            self.inlines.push(panel);
        }
        self
    }
}

#[derive(Debug, Clone)]
pub struct CustomerAdmin {
    pub list_per_page: i64,
    pub empty_list_sentinel: String,
}

#[derive(Debug, Clone)]
pub struct CollectionAdmin {
    pub list_per_page: i64,
}

#[derive(Debug, Clone)]
pub struct OrderAdmin {
    pub list_per_page: i64,
}

#[derive(Debug, Clone)]
pub struct AdminSite {
    pub products: ProductAdmin,
    pub customers: CustomerAdmin,
    pub collections: CollectionAdmin,
    pub orders: OrderAdmin,
}

impl AdminSite {
    pub fn from_config(config: &AppConfig) -> Self {
        let per_page = config.admin_per_page;
        Self {
            products: ProductAdmin::new(per_page, config.low_inventory_threshold)
                .with_inline(InlinePanel::Tags)
                .with_inline(InlinePanel::Reviews),
            customers: CustomerAdmin {
                list_per_page: per_page,
                empty_list_sentinel: config.empty_list_sentinel.clone(),
            },
            collections: CollectionAdmin {
                list_per_page: per_page,
            },
            orders: OrderAdmin {
                list_per_page: per_page,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inlines_are_not_duplicated() {
        let admin = ProductAdmin::new(5, 10)
            .with_inline(InlinePanel::Tags)
            .with_inline(InlinePanel::Tags);
        assert_eq!(admin.inlines, vec![InlinePanel::Tags]);
    }

    #[test]
    fn site_follows_config() {
        let mut config = AppConfig::new("sqlite::memory:");
        config.admin_per_page = 7;
        let site = AdminSite::from_config(&config);
        assert_eq!(site.products.list_per_page, 7);
        assert_eq!(site.products.low_inventory_threshold, 10);
        assert_eq!(site.customers.empty_list_sentinel, "-");
    }
}
