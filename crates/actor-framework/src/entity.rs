//! # ActorEntity Trait
//!
//! The `ActorEntity` trait defines the contract a resource must satisfy to be managed by the
//! generic [`ResourceActor`](crate::ResourceActor). It names the identifier, the create and
//! update payloads, the runtime context and the error type, and provides lifecycle hooks
//! (`on_create`, `on_update`, `on_delete`).
//!
//! # Provided Methods (Hooks)
//! - [`ActorEntity::on_create`]
//! - [`ActorEntity::on_delete`]
//!
//! The defaults do nothing (`Ok(())`). Only `on_update` must be written by hand, because
//! merging a partial update is always resource-specific.

use async_trait::async_trait;
use std::fmt::{Debug, Display};

/// Trait that any resource entity must implement to be managed by `ResourceActor`.
///
/// # Associated Types
/// A `Product` entity requires a `ProductCreate` payload and cannot be handed some other
/// resource's payload; the compiler rejects the mix-up.
///
/// # Async & Context
/// Hooks are `#[async_trait]` so they may await other actors. The `Context` type is
/// injected into every hook when the actor starts (`run(context)`), not at construction.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity.
    /// Must be convertible from `u64` for automatic ID generation.
    type Id: Eq + Clone + Send + Sync + Display + Debug + From<u64>;

    /// The full set of fields required to build an instance.
    ///
    /// Used both for create and for full replacement of an existing record.
    type Create: Send + Sync + Debug;

    /// A partial set of fields merged onto an existing instance.
    type Update: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error type for this entity.
    ///
    /// One error enum per actor rather than one per message: clients match on a single type.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Returns the identifier this instance is stored under.
    fn id(&self) -> &Self::Id;

    /// Construct the full entity from the ID and payload.
    /// Called synchronously before `on_create`, and again on full replacement.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    // --- Lifecycle Hooks (Async) ---

    /// Called after the entity is built and before it is stored.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Merges a partial update into this instance.
    ///
    /// The actor calls this on a copy and only stores the copy if the hook succeeds,
    /// so a failing hook never leaves a half-applied record behind.
    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Called immediately before the entity is removed from the store.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }
}
