use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{domain::catalog::PromotionDraft, models::PromotionView};

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreatePromotionRequest {
    pub description: String,
    pub discount: f64,
}

impl From<CreatePromotionRequest> for PromotionDraft {
    fn from(req: CreatePromotionRequest) -> Self {
        PromotionDraft {
            description: req.description,
            discount: req.discount,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PromotionList {
    pub items: Vec<PromotionView>,
}
