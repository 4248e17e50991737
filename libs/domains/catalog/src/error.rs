use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_helpers::AppError;
use thiserror::Error;

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Catalog domain errors.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Product not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(#[from] mongodb::error::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::NotFound(msg) => AppError::NotFound(msg),
            CatalogError::Validation(msg) => AppError::BadRequest(msg),
            CatalogError::Database(err) => AppError::BadGateway(err.to_string()),
            CatalogError::Internal(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        AppError::from(self).into_response()
    }
}

impl CatalogError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            CatalogError::NotFound(_) => StatusCode::NOT_FOUND,
            CatalogError::Validation(_) => StatusCode::BAD_REQUEST,
            CatalogError::Database(_) => StatusCode::BAD_GATEWAY,
            CatalogError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
