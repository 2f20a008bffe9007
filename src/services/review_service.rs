use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

use crate::{
    domain::require_text,
    dto::reviews::{CreateReviewRequest, ReviewList},
    entity::{Products, Reviews, reviews},
    error::{AppError, AppResult},
    models::ReviewView,
    response::{ApiResponse, Meta},
    state::AppState,
};

async fn ensure_product(state: &AppState, product_id: i32) -> AppResult<()> {
    if Products::find_by_id(product_id).count(&state.orm).await? == 0 {
        return Err(AppError::NotFound);
    }
    Ok(())
}

pub async fn list_reviews(state: &AppState, product_id: i32) -> AppResult<ApiResponse<ReviewList>> {
    ensure_product(state, product_id).await?;
    let items: Vec<ReviewView> = Reviews::find()
        .filter(reviews::Column::ProductId.eq(product_id))
        .order_by_asc(reviews::Column::Id)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(ReviewView::from)
        .collect();

    let total = items.len() as i64;
    Ok(ApiResponse::success(
        "Reviews",
        ReviewList { items },
        Some(Meta::new(1, total, total)),
    ))
}

pub async fn create_review(
    state: &AppState,
    product_id: i32,
    payload: CreateReviewRequest,
) -> AppResult<ApiResponse<ReviewView>> {
    let name = require_text("name", &payload.name, 255)?;
    let description = require_text("description", &payload.description, 10_000)?;
    ensure_product(state, product_id).await?;

    let review = reviews::ActiveModel {
        product_id: Set(product_id),
        name: Set(name),
        description: Set(description),
        date: Set(Utc::now().date_naive()),
        ..Default::default()
    }
    .insert(&state.orm)
    .await?;

    Ok(ApiResponse::success(
        "Review created",
        ReviewView::from(review),
        Some(Meta::empty()),
    ))
}

pub async fn get_review(
    state: &AppState,
    product_id: i32,
    id: i32,
) -> AppResult<ApiResponse<ReviewView>> {
    let review = Reviews::find_by_id(id)
        .filter(reviews::Column::ProductId.eq(product_id))
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(ApiResponse::success("Review", ReviewView::from(review), None))
}

pub async fn delete_review(
    state: &AppState,
    product_id: i32,
    id: i32,
) -> AppResult<ApiResponse<serde_json::Value>> {
    let result = Reviews::delete_many()
        .filter(reviews::Column::Id.eq(id))
        .filter(reviews::Column::ProductId.eq(product_id))
        .exec(&state.orm)
        .await?;

    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }

    Ok(ApiResponse::success(
        "Deleted",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}
