use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{domain::catalog::CollectionDraft, models::CollectionView};

/// Used for both create and full update.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CollectionRequest {
    pub title: String,
    pub featured_product_id: Option<i32>,
}

impl From<CollectionRequest> for CollectionDraft {
    fn from(req: CollectionRequest) -> Self {
        CollectionDraft {
            title: req.title,
            featured_product_id: req.featured_product_id,
        }
    }
}

#[derive(Serialize, ToSchema)]
#[serde(transparent)]
pub struct CollectionList {
    #[schema(value_type = Vec<CollectionView>)]
    pub items: Vec<CollectionView>,
}
