use axum::Router;

use crate::state::AppState;

pub mod admin;
pub mod cart;
pub mod collections;
pub mod customers;
pub mod doc;
pub mod health;
pub mod orders;
pub mod params;
pub mod products;
pub mod promotions;
pub mod reviews;
pub mod tags;

// Build the API router without binding state; it will be provided at the top level.
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .nest("/products", products::router())
        .nest("/collections", collections::router())
        .nest("/promotions", promotions::router())
        .nest("/customers", customers::router())
        .nest("/orders", orders::route())
        .nest("/carts", cart::router())
        .nest("/admin", admin::router())
        .merge(tags::router())
}
