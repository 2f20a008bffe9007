use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::ReviewView;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateReviewRequest {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ReviewList {
    pub items: Vec<ReviewView>,
}
