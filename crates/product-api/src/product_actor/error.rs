use thiserror::Error;

/// Errors raised by the product actor and its client.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProductError {
    #[error("Product not found: {0}")]
    NotFound(String),
    #[error("Quantity must not be negative: {0}")]
    InvalidQuantity(i64),
    #[error("Field '{0}' cannot be null")]
    RequiredField(&'static str),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
