//! # Generic Messages
//!
//! Message types exchanged between a `ResourceClient` and its `ResourceActor`.

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Request sent to a [`ResourceActor`](crate::ResourceActor).
///
/// The variants map onto the standard resource lifecycle:
///
/// - **Create**: builds a new resource from [`ActorEntity::Create`] and assigns it an ID.
/// - **List**: returns every stored resource in insertion order.
/// - **Get**: fetches one resource by ID.
/// - **Replace**: rebuilds an existing resource from a full [`ActorEntity::Create`] payload.
/// - **Update**: merges a partial [`ActorEntity::Update`] onto an existing resource.
/// - **Delete**: removes a resource.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    Replace {
        id: T::Id,
        params: T::Create,
        respond_to: Response<T>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
}
