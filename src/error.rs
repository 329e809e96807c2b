//! Error types shared across the service.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShopError {
    #[error("Cart is empty")]
    EmptyCart,

    #[error("Product not found")]
    ProductNotFound,

    #[error("Insufficient stock")]
    InsufficientStock,

    #[error("Invalid or already used discount code")]
    InvalidDiscount,

    #[error("Order not found")]
    OrderNotFound,

    #[error("User not found")]
    UserNotFound,

    #[error("{0}")]
    InvalidInput(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ShopError {
    fn status(&self) -> StatusCode {
        match self {
            Self::ProductNotFound | Self::OrderNotFound | Self::UserNotFound => {
                StatusCode::NOT_FOUND
            }
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ShopError {
    fn into_response(self) -> Response {
        let status = self.status();
        // Internal faults surface as a generic message, never the detail.
        let message = match &self {
            Self::Internal(detail) => {
                tracing::error!(%detail, "internal error");
                "Internal server error".to_string()
            }
            other => other.to_string(),
        };
        let body = Json(serde_json::json!({ "success": false, "message": message }));
        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, ShopError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(ShopError::ProductNotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(ShopError::OrderNotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(ShopError::EmptyCart.status(), StatusCode::BAD_REQUEST);
        assert_eq!(ShopError::InvalidDiscount.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ShopError::Internal("boom".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
