use std::env;
use std::str::FromStr;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    /// Admin "low" inventory filter: products with fewer units match.
    pub low_inventory_threshold: i32,
    /// Shown in place of an empty ordered-products list.
    pub empty_list_sentinel: String,
    pub admin_per_page: i64,
    pub concurrency_limit: usize,
    pub request_body_limit: usize,
}

impl AppConfig {
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            host: "127.0.0.1".to_string(),
            port: 3000,
            low_inventory_threshold: 10,
            empty_list_sentinel: "-".to_string(),
            admin_per_page: 5,
            concurrency_limit: 100,
            request_body_limit: 1024 * 1024,
        }
    }

    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = env::var("DATABASE_URL")?;
        let defaults = Self::new(database_url);
        Ok(Self {
            host: env::var("APP_HOST").unwrap_or(defaults.host.clone()),
            port: parse_var("APP_PORT").unwrap_or(defaults.port),
            low_inventory_threshold: parse_var("LOW_INVENTORY_THRESHOLD")
                .unwrap_or(defaults.low_inventory_threshold),
            empty_list_sentinel: env::var("EMPTY_LIST_SENTINEL")
                .unwrap_or(defaults.empty_list_sentinel.clone()),
            admin_per_page: parse_var("ADMIN_LIST_PER_PAGE")
                .filter(|n: &i64| *n > 0)
                .unwrap_or(defaults.admin_per_page),
            concurrency_limit: parse_var("CONCURRENCY_LIMIT").unwrap_or(defaults.concurrency_limit),
            request_body_limit: parse_var("REQUEST_BODY_LIMIT")
                .unwrap_or(defaults.request_body_limit),
            ..defaults
        })
    }
}

fn parse_var<T: FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|v| v.parse::<T>().ok())
}
