//! Guarded deletes.
//!
//! The dependent-row check and the delete share one transaction, and the
//! target row is locked first so a dependent inserted concurrently either
//! waits for us or trips the foreign key. Returning early drops the
//! transaction, which rolls it back.

use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QuerySelect, TransactionTrait, sea_query::Expr,
};

use crate::{
    domain::DeleteBlocker,
    entity::{Collections, Customers, OrderItems, Orders, Products, collections, order_items, orders, products},
    error::{AppError, AppResult},
};

pub async fn can_delete_collection<C: ConnectionTrait>(conn: &C, id: i32) -> AppResult<bool> {
    let products = Products::find()
        .filter(products::Column::CollectionId.eq(id))
        .count(conn)
        .await?;
    Ok(products == 0)
}

pub async fn can_delete_product<C: ConnectionTrait>(conn: &C, id: i32) -> AppResult<bool> {
    let items = OrderItems::find()
        .filter(order_items::Column::ProductId.eq(id))
        .count(conn)
        .await?;
    Ok(items == 0)
}

pub async fn can_delete_customer<C: ConnectionTrait>(conn: &C, id: i32) -> AppResult<bool> {
    let orders = Orders::find()
        .filter(orders::Column::CustomerId.eq(id))
        .count(conn)
        .await?;
    Ok(orders == 0)
}

pub async fn delete_collection(db: &DatabaseConnection, id: i32) -> AppResult<()> {
    let txn = db.begin().await?;
    Collections::find_by_id(id)
        .lock_exclusive()
        .one(&txn)
        .await?
        .ok_or(AppError::NotFound)?;

    let blocker = DeleteBlocker::CollectionHasProducts;
    if !can_delete_collection(&txn, id).await? {
        tracing::info!(collection_id = id, reason = %blocker, "delete refused");
        return Err(AppError::ReferentialConflict(blocker));
    }

    Collections::delete_by_id(id)
        .exec(&txn)
        .await
        .map_err(|err| AppError::from_delete(err, blocker))?;
    txn.commit().await?;
    Ok(())
}

/// Deletes a product that no order line references. Collections featuring
/// it lose their featured product; cart lines, reviews and promotion links
/// cascade.
pub async fn delete_product(db: &DatabaseConnection, id: i32) -> AppResult<()> {
    let txn = db.begin().await?;
    Products::find_by_id(id)
        .lock_exclusive()
        .one(&txn)
        .await?
        .ok_or(AppError::NotFound)?;

    let blocker = DeleteBlocker::ProductHasOrderItems;
    if !can_delete_product(&txn, id).await? {
        tracing::info!(product_id = id, reason = %blocker, "delete refused");
        return Err(AppError::ReferentialConflict(blocker));
    }

    Collections::update_many()
        .col_expr(
            collections::Column::FeaturedProductId,
            Expr::value(Option::<i32>::None),
        )
        .filter(collections::Column::FeaturedProductId.eq(id))
        .exec(&txn)
        .await?;

    Products::delete_by_id(id)
        .exec(&txn)
        .await
        .map_err(|err| AppError::from_delete(err, blocker))?;
    txn.commit().await?;
    Ok(())
}

/// Deletes a customer without orders; addresses cascade.
pub async fn delete_customer(db: &DatabaseConnection, id: i32) -> AppResult<()> {
    let txn = db.begin().await?;
    Customers::find_by_id(id)
        .lock_exclusive()
        .one(&txn)
        .await?
        .ok_or(AppError::NotFound)?;

    let blocker = DeleteBlocker::CustomerHasOrders;
    if !can_delete_customer(&txn, id).await? {
        tracing::info!(customer_id = id, reason = %blocker, "delete refused");
        return Err(AppError::ReferentialConflict(blocker));
    }

    Customers::delete_by_id(id)
        .exec(&txn)
        .await
        .map_err(|err| AppError::from_delete(err, blocker))?;
    txn.commit().await?;
    Ok(())
}
