use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    domain::catalog::{ProductChanges, ProductDraft},
    models::ProductView,
};

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateProductRequest {
    pub title: String,
    /// Derived from the title when omitted.
    pub slug: Option<String>,
    pub description: Option<String>,
    #[schema(value_type = String, example = "12.50")]
    pub unit_price: Decimal,
    pub inventory: i32,
    pub collection_id: i32,
}

impl From<CreateProductRequest> for ProductDraft {
    fn from(req: CreateProductRequest) -> Self {
        ProductDraft {
            title: req.title,
            slug: req.slug,
            description: req.description,
            unit_price: req.unit_price,
            inventory: req.inventory,
            collection_id: req.collection_id,
        }
    }
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateProductRequest {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    #[schema(value_type = Option<String>)]
    pub unit_price: Option<Decimal>,
    pub inventory: Option<i32>,
    pub collection_id: Option<i32>,
}

impl From<UpdateProductRequest> for ProductChanges {
    fn from(req: UpdateProductRequest) -> Self {
        ProductChanges {
            title: req.title,
            slug: req.slug,
            description: req.description,
            unit_price: req.unit_price,
            inventory: req.inventory,
            collection_id: req.collection_id,
        }
    }
}

#[derive(Serialize, ToSchema)]
#[serde(transparent)]
pub struct ProductList {
    #[schema(value_type = Vec<ProductView>)]
    pub items: Vec<ProductView>,
}
