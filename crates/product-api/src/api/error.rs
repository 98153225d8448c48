//! HTTP error mapping.
//!
//! Every failure leaves the service as a JSON body with a single `detail` key: a list of
//! field violations for 422, a plain message otherwise.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::model::ValidationErrors;
use crate::product_actor::ProductError;

pub const NOT_FOUND_DETAIL: &str = "Product not found";

/// Application-level error type for the HTTP layer.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Path or body failed validation.
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    /// No product with the requested id.
    #[error("Product not found")]
    NotFound,

    /// The product actor could not be reached.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<ProductError> for ApiError {
    fn from(e: ProductError) -> Self {
        match e {
            ProductError::NotFound(_) => Self::NotFound,
            ProductError::RequiredField(field) => Self::Validation(ValidationErrors::single(
                &["body", field],
                "value_error",
                e.to_string(),
            )),
            ProductError::InvalidQuantity(_) => Self::Validation(ValidationErrors::single(
                &["body", "quantity"],
                "value_error",
                e.to_string(),
            )),
            ProductError::ActorCommunicationError(msg) => Self::Internal(msg),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::Validation(errors) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({ "detail": errors.violations() })),
            )
                .into_response(),
            Self::NotFound => (
                StatusCode::NOT_FOUND,
                Json(json!({ "detail": NOT_FOUND_DETAIL })),
            )
                .into_response(),
            Self::Internal(msg) => {
                tracing::error!(error = %msg, "Product request failed");
                // Don't expose internal error details to clients
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "detail": "Internal server error" })),
                )
                    .into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_errors_map_to_status() {
        fn status(err: ProductError) -> StatusCode {
            ApiError::from(err).into_response().status()
        }

        assert_eq!(status(ProductError::NotFound("7".into())), StatusCode::NOT_FOUND);
        assert_eq!(
            status(ProductError::RequiredField("name")),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            status(ProductError::InvalidQuantity(-1)),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            status(ProductError::ActorCommunicationError("closed".into())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(ApiError::NotFound.to_string(), "Product not found");
        assert_eq!(
            ApiError::Internal("boom".into()).to_string(),
            "Internal error: boom"
        );
    }
}
