use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{CollectionAdminRow, CustomerAdminRow, OrderAdminRow, ProductAdminRow};

#[derive(Debug, Deserialize, ToSchema)]
pub struct ClearInventoryRequest {
    pub ids: Vec<i32>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProductAdminList {
    pub items: Vec<ProductAdminRow>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CustomerAdminList {
    pub items: Vec<CustomerAdminRow>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CollectionAdminList {
    pub items: Vec<CollectionAdminRow>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderAdminList {
    pub items: Vec<OrderAdminRow>,
}
