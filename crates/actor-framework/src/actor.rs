//! # Generic Actor Server
//!
//! This module defines the `ResourceActor`, the component that owns the state of one resource
//! type. It implements the "Server" side of the Actor Model: messages are processed one at a
//! time, so the store needs no locking.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that manages an ordered collection of entities.
///
/// # Architecture Note
/// This struct is the "Server" half of the actor. It owns the state (`store` and `next_id`)
/// and the receiver end of the channel. Every client request becomes a message, and the
/// run loop handles messages sequentially. That single-writer discipline is what keeps ID
/// assignment and mutation race-free while many HTTP requests are in flight.
///
/// # Usage Pattern
///
/// 1.  **Create**: Call `ResourceActor::new()` to get the `actor` (server) and `client` (interface).
/// 2.  **Seed** (optional): Call [`ResourceActor::seed`] before the loop starts.
/// 3.  **Run**: Spawn `actor.run(context)` in a background task.
///
/// ```rust
/// use actor_framework::{ActorEntity, ResourceActor};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)] struct Note { id: u64, text: String }
/// #[derive(Debug)] struct NoteCreate { text: String }
/// #[derive(Debug)] struct NoteUpdate;
/// #[derive(Debug, thiserror::Error)] #[error("note error")] struct NoteError;
///
/// #[async_trait]
/// impl ActorEntity for Note {
///     type Id = u64;
///     type Create = NoteCreate;
///     type Update = NoteUpdate;
///     type Context = ();
///     type Error = NoteError;
///
///     fn id(&self) -> &u64 { &self.id }
///     fn from_create_params(id: u64, p: NoteCreate) -> Result<Self, Self::Error> {
///         Ok(Self { id, text: p.text })
///     }
///     async fn on_update(&mut self, _: NoteUpdate, _: &()) -> Result<(), Self::Error> { Ok(()) }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (mut actor, client) = ResourceActor::<Note>::new(10);
///     actor.seed([NoteCreate { text: "first".into() }]).unwrap();
///     tokio::spawn(actor.run(()));
///
///     let created = client.create(NoteCreate { text: "second".into() }).await.unwrap();
///     assert_eq!(created.id, 2);
///     assert_eq!(client.list().await.unwrap().len(), 2);
/// }
/// ```
///
/// # Implementation Details
///
/// The store is a `Vec` kept in insertion order; id-addressed operations locate their target
/// with a linear scan. `next_id` starts at 1, only ever increments, and is never rewound by a
/// delete, so IDs are not reused for the lifetime of the actor.
///
/// * **Create**: builds the entity under `next_id`, runs `on_create`, appends it. A create
///   rejected by either step leaves `next_id` untouched.
/// * **List**: clones the whole store.
/// * **Get**: clones the matching entity, or `None`.
/// * **Replace**: rebuilds the entity at the same position from a full payload, keeping its ID.
/// * **Update**: runs `on_update` on a copy and swaps the copy in on success.
/// * **Delete**: runs `on_delete`, then removes the entity.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: Vec<T>,
    next_id: u64,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// `buffer_size` is the capacity of the MPSC channel. When it is full, client calls wait
    /// until there is space.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: Vec::new(),
            next_id: 1,
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Loads initial records before the actor starts.
    ///
    /// Seed records draw their IDs from the same counter as later creates, so the first
    /// client-created record follows directly after the last seeded one.
    pub fn seed(&mut self, items: impl IntoIterator<Item = T::Create>) -> Result<(), T::Error> {
        for params in items {
            let id = self.allocate_id();
            let item = T::from_create_params(id, params)?;
            self.store.push(item);
        }
        Ok(())
    }

    fn allocate_id(&mut self) -> T::Id {
        let id = T::Id::from(self.next_id);
        self.next_id += 1;
        id
    }

    fn position(&self, id: &T::Id) -> Option<usize> {
        self.store.iter().position(|item| item.id() == id)
    }

    /// Runs the actor's event loop, processing messages until every client is dropped.
    ///
    /// The `context` argument is injected into every entity hook.
    pub async fn run(mut self, context: T::Context) {
        // "Product" rather than "product_api::model::product::Product"
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, size = self.store.len(), "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    // The counter only advances once the item is stored
                    let id = T::Id::from(self.next_id);

                    match T::from_create_params(id.clone(), params) {
                        Ok(mut item) => {
                            if let Err(e) = item.on_create(&context).await {
                                warn!(entity_type, error = %e, "on_create failed");
                                let _ = respond_to.send(Err(FrameworkError::entity(e)));
                                continue;
                            }
                            self.next_id += 1;
                            self.store.push(item.clone());
                            info!(entity_type, %id, size = self.store.len(), "Created");
                            let _ = respond_to.send(Ok(item));
                        }
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create failed");
                            let _ = respond_to.send(Err(FrameworkError::entity(e)));
                        }
                    }
                }
                ResourceRequest::List { respond_to } => {
                    debug!(entity_type, size = self.store.len(), "List");
                    let _ = respond_to.send(Ok(self.store.clone()));
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.position(&id).map(|pos| self.store[pos].clone());
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::Replace {
                    id,
                    params,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?params, "Replace");
                    let Some(pos) = self.position(&id) else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        continue;
                    };
                    match T::from_create_params(id.clone(), params) {
                        Ok(item) => {
                            self.store[pos] = item.clone();
                            info!(entity_type, %id, "Replaced");
                            let _ = respond_to.send(Ok(item));
                        }
                        Err(e) => {
                            warn!(entity_type, %id, error = %e, "Replace failed");
                            let _ = respond_to.send(Err(FrameworkError::entity(e)));
                        }
                    }
                }
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    let Some(pos) = self.position(&id) else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        continue;
                    };
                    let mut merged = self.store[pos].clone();
                    if let Err(e) = merged.on_update(update, &context).await {
                        warn!(entity_type, %id, error = %e, "Update failed");
                        let _ = respond_to.send(Err(FrameworkError::entity(e)));
                        continue;
                    }
                    self.store[pos] = merged.clone();
                    info!(entity_type, %id, "Updated");
                    let _ = respond_to.send(Ok(merged));
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    let Some(pos) = self.position(&id) else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        continue;
                    };
                    if let Err(e) = self.store[pos].on_delete(&context).await {
                        warn!(entity_type, %id, error = %e, "on_delete failed");
                        let _ = respond_to.send(Err(FrameworkError::entity(e)));
                        continue;
                    }
                    self.store.remove(pos);
                    info!(entity_type, %id, size = self.store.len(), "Deleted");
                    let _ = respond_to.send(Ok(()));
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }
}
