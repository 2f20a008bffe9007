//! Query-string parameters.
//!
//! Unknown keys are ignored by the extractor, so older clients sending extra
//! filters keep working; only recognised keys affect a listing.

use chrono::{DateTime, Datelike, Duration, TimeZone, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

use crate::response::Meta;

pub const DEFAULT_PER_PAGE: i64 = 20;
pub const MAX_PER_PAGE: i64 = 100;

#[derive(Debug, Clone, Copy, Default, Deserialize, ToSchema)]
pub struct Pagination {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}

/// A resolved page. Non-positive values are kept so the caller can answer
/// with an empty page instead of an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub page: i64,
    pub per_page: i64,
    pub offset: i64,
}

impl PageWindow {
    /// Also true for a page so far out that its offset does not fit in `i64`.
    pub fn is_empty(&self) -> bool {
        self.page < 1 || self.per_page < 1 || start_offset(self.page, self.per_page).is_none()
    }

    pub fn meta(&self, total: i64) -> Meta {
        Meta::new(self.page, self.per_page, total)
    }
}

fn start_offset(page: i64, per_page: i64) -> Option<i64> {
    page.checked_sub(1)?.checked_mul(per_page)
}

impl Pagination {
    pub fn new(page: i64, per_page: i64) -> Self {
        Self {
            page: Some(page),
            per_page: Some(per_page),
        }
    }

    pub fn window(&self, default_per_page: i64) -> PageWindow {
        let page = self.page.unwrap_or(1);
        let per_page = self.per_page.unwrap_or(default_per_page).min(MAX_PER_PAGE);
        let offset = if page >= 1 && per_page >= 1 {
            start_offset(page, per_page).unwrap_or(0)
        } else {
            0
        };
        PageWindow {
            page,
            per_page,
            offset,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

#[derive(Debug, Clone, Copy, Default, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ProductSortBy {
    #[default]
    Title,
    UnitPrice,
    Inventory,
    LastUpdated,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ProductQuery {
    /// Exact collection match.
    pub collection_id: Option<i32>,
    #[schema(value_type = Option<String>)]
    #[param(value_type = Option<String>)]
    pub min_price: Option<Decimal>,
    #[schema(value_type = Option<String>)]
    #[param(value_type = Option<String>)]
    pub max_price: Option<Decimal>,
    /// Case-insensitive substring of the title.
    pub q: Option<String>,
    pub sort_by: Option<ProductSortBy>,
    pub sort_order: Option<SortOrder>,
    pub page: Option<i64>,
    pub per_page: Option<i64>,
    /// Multiplier applied to `unit_price`, e.g. `0.8` for 20% off.
    #[schema(value_type = Option<String>)]
    #[param(value_type = Option<String>)]
    pub discount_factor: Option<Decimal>,
}

impl ProductQuery {
    pub fn pagination(&self) -> Pagination {
        Pagination {
            page: self.page,
            per_page: self.per_page,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListQuery {
    /// Title or name search.
    pub q: Option<String>,
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}

impl ListQuery {
    pub fn pagination(&self) -> Pagination {
        Pagination {
            page: self.page,
            per_page: self.per_page,
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum InventoryFilter {
    Low,
}

#[derive(Debug, Clone, Copy, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum LastUpdatedFilter {
    Today,
    Past7Days,
    ThisMonth,
    ThisYear,
}

impl LastUpdatedFilter {
    /// Start of the window ending at `now`.
    pub fn since(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        let midnight = now
            .date_naive()
            .and_hms_opt(0, 0, 0)
            .map(|dt| Utc.from_utc_datetime(&dt))
            .unwrap_or(now);
        match self {
            LastUpdatedFilter::Today => midnight,
            LastUpdatedFilter::Past7Days => midnight - Duration::days(7),
            LastUpdatedFilter::ThisMonth => midnight - Duration::days(i64::from(now.day0())),
            LastUpdatedFilter::ThisYear => midnight - Duration::days(i64::from(now.ordinal0())),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AdminProductQuery {
    pub collection_id: Option<i32>,
    pub inventory: Option<InventoryFilter>,
    pub last_updated: Option<LastUpdatedFilter>,
    pub q: Option<String>,
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}

impl AdminProductQuery {
    pub fn pagination(&self) -> Pagination {
        Pagination {
            page: self.page,
            per_page: self.per_page,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_defaults_and_clamps() {
        let window = Pagination::default().window(DEFAULT_PER_PAGE);
        assert_eq!(window, PageWindow { page: 1, per_page: 20, offset: 0 });
        let window = Pagination::new(3, 500).window(DEFAULT_PER_PAGE);
        assert_eq!(window.per_page, MAX_PER_PAGE);
        assert_eq!(window.offset, 200);
    }

    #[test]
    fn invalid_windows_are_empty_not_errors() {
        assert!(Pagination::new(1, 0).window(5).is_empty());
        assert!(Pagination::new(0, 5).window(5).is_empty());
        assert!(!Pagination::new(9, 5).window(5).is_empty());
    }

    #[test]
    fn overflowing_page_is_empty() {
        let window = Pagination::new(i64::MAX, MAX_PER_PAGE).window(DEFAULT_PER_PAGE);
        assert!(window.is_empty());
        assert_eq!(window.offset, 0);
        assert_eq!(window.meta(3).total, Some(3));
        assert!(!Pagination::new(i64::MAX / MAX_PER_PAGE, MAX_PER_PAGE)
            .window(DEFAULT_PER_PAGE)
            .is_empty());
    }

    #[test]
    fn last_updated_windows() {
        let now = Utc.with_ymd_and_hms(2024, 3, 15, 12, 30, 0).unwrap();
        assert_eq!(
            LastUpdatedFilter::Today.since(now),
            Utc.with_ymd_and_hms(2024, 3, 15, 0, 0, 0).unwrap()
        );
        assert_eq!(
            LastUpdatedFilter::ThisMonth.since(now),
            Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap()
        );
        assert_eq!(
            LastUpdatedFilter::ThisYear.since(now),
            Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
        );
    }
}
