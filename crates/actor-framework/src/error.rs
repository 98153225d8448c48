//! # Framework Errors
//!
//! Errors raised by the actor plumbing itself, shared by every resource type.
//! Failures coming out of an entity hook travel as [`FrameworkError::EntityError`] and can
//! be recovered with [`FrameworkError::entity_error`].

use std::error::Error;

/// Errors that can occur within the actor framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Entity error: {0}")]
    EntityError(Box<dyn Error + Send + Sync>),
}

impl FrameworkError {
    pub(crate) fn entity(e: impl Error + Send + Sync + 'static) -> Self {
        Self::EntityError(Box::new(e))
    }

    /// Returns the entity's own error if this wraps one of type `E`.
    pub fn entity_error<E: Error + 'static>(&self) -> Option<&E> {
        match self {
            Self::EntityError(inner) => inner.downcast_ref::<E>(),
            _ => None,
        }
    }
}
