use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::{admin::AdminSite, config::AppConfig};

#[derive(Clone)]
pub struct AppState {
    pub orm: DatabaseConnection,
    pub config: Arc<AppConfig>,
    pub admin: Arc<AdminSite>,
}

impl AppState {
    pub fn new(orm: DatabaseConnection, config: AppConfig) -> Self {
        let admin = AdminSite::from_config(&config);
        Self {
            orm,
            config: Arc::new(config),
            admin: Arc::new(admin),
        }
    }
}
