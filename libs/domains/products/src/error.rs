use axum::response::{IntoResponse, Response};
use axum_helpers::{AppError, ErrorCode};
use database::mongodb::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProductError {
    #[error("{0}")]
    Validation(String),

    #[error("Invalid product id: {0}")]
    InvalidId(String),

    #[error("Product not found: {0}")]
    NotFound(String),

    #[error("Database not available")]
    StoreUnavailable,

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type ProductResult<T> = Result<T, ProductError>;

/// Convert ProductError to AppError for standardized error responses
impl From<ProductError> for AppError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::Validation(msg) => AppError::BadRequest(msg),
            ProductError::InvalidId(_) => AppError::InvalidId("Invalid product id".to_string()),
            ProductError::NotFound(_) => AppError::NotFound("Product not found".to_string()),
            ProductError::StoreUnavailable => {
                AppError::DatabaseUnavailable(ErrorCode::DatabaseUnavailable.default_message().to_string())
            }
            ProductError::Database(msg) => {
                tracing::error!(error_code = ErrorCode::DatabaseError.code(), "Database error: {}", msg);
                AppError::InternalServerError(ErrorCode::DatabaseError.default_message().to_string())
            }
            ProductError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                AppError::InternalServerError(ErrorCode::InternalError.default_message().to_string())
            }
        }
    }
}

impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<StoreError> for ProductError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Unavailable => ProductError::StoreUnavailable,
            StoreError::InvalidId(id) => ProductError::InvalidId(id),
            StoreError::NotFound { id, .. } => ProductError::NotFound(id),
            StoreError::Serialization(e) => ProductError::Internal(e.to_string()),
            StoreError::Mongo(e) => ProductError::Database(e.to_string()),
        }
    }
}

/// A stored document that does not fit the product shape.
impl From<mongodb::bson::de::Error> for ProductError {
    fn from(err: mongodb::bson::de::Error) -> Self {
        ProductError::Validation(format!("Stored product could not be decoded: {}", err))
    }
}

impl From<validator::ValidationErrors> for ProductError {
    fn from(errors: validator::ValidationErrors) -> Self {
        ProductError::Validation(axum_helpers::errors::describe_validation_errors(&errors))
    }
}
