use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::TagView;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateTagRequest {
    pub label: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct TagObjectRequest {
    /// `product`, `collection` or `customer`.
    pub content_kind: String,
    pub object_id: i32,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TagList {
    pub items: Vec<TagView>,
}
