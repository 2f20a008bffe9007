use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{domain::orders::OrderLine, models::OrderView};

#[derive(Debug, Clone, Copy, Deserialize, ToSchema)]
pub struct OrderLineRequest {
    pub product_id: i32,
    pub quantity: i32,
}

impl From<OrderLineRequest> for OrderLine {
    fn from(req: OrderLineRequest) -> Self {
        OrderLine {
            product_id: req.product_id,
            quantity: req.quantity,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct PlaceOrderRequest {
    pub customer_id: i32,
    pub items: Vec<OrderLineRequest>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdatePaymentStatusRequest {
    /// `P`, `C` or `F`.
    pub payment_status: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderList {
    pub items: Vec<OrderView>,
}
