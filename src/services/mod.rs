use sea_orm::{
    AccessMode, DatabaseConnection, DatabaseTransaction, IsolationLevel, TransactionTrait,
    sea_query::{Expr, Func, IntoColumnRef, LikeExpr, SimpleExpr},
};

use crate::error::AppResult;

pub mod admin_service;
pub mod aggregation;
pub mod cart_service;
pub mod collection_service;
pub mod customer_service;
pub mod integrity;
pub mod order_service;
pub mod product_service;
pub mod promotion_service;
pub mod review_service;
pub mod tag_service;

/// Read-only transaction used when a page and its total must come from the
/// same snapshot.
pub(crate) async fn read_snapshot(db: &DatabaseConnection) -> AppResult<DatabaseTransaction> {
    let txn = db
        .begin_with_config(
            Some(IsolationLevel::RepeatableRead),
            Some(AccessMode::ReadOnly),
        )
        .await?;
    Ok(txn)
}

fn escape_like(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

fn lower_like<C: IntoColumnRef>(column: C, pattern: String) -> SimpleExpr {
    Expr::expr(Func::lower(Expr::col(column))).like(LikeExpr::new(pattern).escape('\\'))
}

/// Case-insensitive substring match, portable across backends.
pub(crate) fn contains_ci<C: IntoColumnRef>(column: C, needle: &str) -> SimpleExpr {
    let pattern = format!("%{}%", escape_like(&needle.to_lowercase()));
    lower_like(column, pattern)
}

/// Case-insensitive prefix match.
pub(crate) fn starts_with_ci<C: IntoColumnRef>(column: C, needle: &str) -> SimpleExpr {
    let pattern = format!("{}%", escape_like(&needle.to_lowercase()));
    lower_like(column, pattern)
}

/// Trimmed, non-empty search text.
pub(crate) fn search_term(q: Option<&str>) -> Option<&str> {
    q.map(str::trim).filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn like_wildcards_are_escaped() {
        assert_eq!(escape_like("50%_off\\"), "50\\%\\_off\\\\");
        assert_eq!(search_term(Some("  ")), None);
        assert_eq!(search_term(Some(" mug ")), Some("mug"));
    }
}
