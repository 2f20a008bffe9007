use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::{DbErr, SqlErr};
use serde::Serialize;
use thiserror::Error;

use crate::{
    domain::{DeleteBlocker, ValidationError},
    response::{ApiResponse, Meta},
};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not Found")]
    NotFound,

    #[error("Bad Request {0}")]
    BadRequest(String),

    #[error("Validation error {0}")]
    Validation(#[from] ValidationError),

    #[error("{0}")]
    ReferentialConflict(DeleteBlocker),

    #[error("Storage unavailable")]
    StorageUnavailable(#[from] DbErr),

    #[error("Internal Server Error")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// A failed delete: a foreign-key violation means a dependent row slipped
    /// in, everything else is storage trouble.
    pub fn from_delete(err: DbErr, blocker: DeleteBlocker) -> Self {
        match err.sql_err() {
            Some(SqlErr::ForeignKeyConstraintViolation(_)) => AppError::ReferentialConflict(blocker),
            _ => AppError::StorageUnavailable(err),
        }
    }

    /// A failed insert where a unique violation is the caller's fault.
    pub fn from_insert(err: DbErr, duplicate: ValidationError) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => AppError::Validation(duplicate),
            _ => AppError::StorageUnavailable(err),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::ReferentialConflict(_) => StatusCode::CONFLICT,
            AppError::StorageUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Serialize)]
struct ErrorData {
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if let AppError::StorageUnavailable(err) = &self {
            tracing::error!(error = %err, "storage error");
        }

        let body = ApiResponse {
            message: self.to_string(),
            data: Some(ErrorData {
                error: self.to_string(),
            }),
            meta: Some(Meta::empty()),
        };

        (status, axum::Json(body)).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conflict_is_distinct_from_validation() {
        let conflict = AppError::ReferentialConflict(DeleteBlocker::CollectionHasProducts);
        let invalid = AppError::Validation(ValidationError::new("inventory", "too low"));
        assert_eq!(conflict.status(), StatusCode::CONFLICT);
        assert_eq!(invalid.status(), StatusCode::BAD_REQUEST);
        assert!(conflict.to_string().contains("has products"));
    }

    #[test]
    fn non_constraint_delete_errors_stay_storage_errors() {
        let err = AppError::from_delete(
            DbErr::Custom("connection reset".into()),
            DeleteBlocker::ProductHasOrderItems,
        );
        assert!(matches!(err, AppError::StorageUnavailable(_)));
    }
}
