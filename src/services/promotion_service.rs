use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

use crate::{
    audit,
    domain::catalog::PromotionDraft,
    dto::promotions::{CreatePromotionRequest, PromotionList},
    entity::{ProductPromotions, Products, Promotions, product_promotions, promotions},
    error::{AppError, AppResult},
    models::PromotionView,
    response::{ApiResponse, Meta},
    state::AppState,
};

pub async fn list_promotions(state: &AppState) -> AppResult<ApiResponse<PromotionList>> {
    let items: Vec<PromotionView> = Promotions::find()
        .order_by_asc(promotions::Column::Id)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(PromotionView::from)
        .collect();

    let total = items.len() as i64;
    Ok(ApiResponse::success(
        "Promotions",
        PromotionList { items },
        Some(Meta::new(1, total, total)),
    ))
}

pub async fn create_promotion(
    state: &AppState,
    payload: CreatePromotionRequest,
) -> AppResult<ApiResponse<PromotionView>> {
    let draft = PromotionDraft::from(payload).validate()?;
    let promotion = promotions::ActiveModel {
        description: Set(draft.description),
        discount: Set(draft.discount),
        ..Default::default()
    }
    .insert(&state.orm)
    .await?;

    audit::record(
        &state.orm,
        "promotion_create",
        "promotions",
        serde_json::json!({ "promotion_id": promotion.id }),
    )
    .await;

    Ok(ApiResponse::success(
        "Promotion created",
        PromotionView::from(promotion),
        Some(Meta::empty()),
    ))
}

/// Links a promotion to a product. Linking twice is a no-op.
pub async fn attach_promotion(
    state: &AppState,
    product_id: i32,
    promotion_id: i32,
) -> AppResult<ApiResponse<PromotionView>> {
    if Products::find_by_id(product_id).count(&state.orm).await? == 0 {
        return Err(AppError::NotFound);
    }
    let promotion = Promotions::find_by_id(promotion_id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound)?;

    let linked = ProductPromotions::find_by_id((product_id, promotion_id))
        .count(&state.orm)
        .await?
        > 0;
    if !linked {
        product_promotions::ActiveModel {
            product_id: Set(product_id),
            promotion_id: Set(promotion_id),
        }
        .insert(&state.orm)
        .await?;

        audit::record(
            &state.orm,
            "promotion_attach",
            "product_promotions",
            serde_json::json!({ "product_id": product_id, "promotion_id": promotion_id }),
        )
        .await;
    }

    Ok(ApiResponse::success(
        "Promotion attached",
        PromotionView::from(promotion),
        Some(Meta::empty()),
    ))
}

pub async fn detach_promotion(
    state: &AppState,
    product_id: i32,
    promotion_id: i32,
) -> AppResult<ApiResponse<serde_json::Value>> {
    let result = ProductPromotions::delete_many()
        .filter(product_promotions::Column::ProductId.eq(product_id))
        .filter(product_promotions::Column::PromotionId.eq(promotion_id))
        .exec(&state.orm)
        .await?;

    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }

    audit::record(
        &state.orm,
        "promotion_detach",
        "product_promotions",
        serde_json::json!({ "product_id": product_id, "promotion_id": promotion_id }),
    )
    .await;

    Ok(ApiResponse::success(
        "Promotion detached",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}
