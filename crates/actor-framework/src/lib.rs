//! # Actor Framework
//!
//! Building blocks for type-safe resource actors on Tokio: a **Resource-Oriented** CRUD
//! surface (list, get, create, replace, update, delete) on top of the **Actor Model**.
//!
//! ## Why ROA + Actor Model?
//!
//! - Every resource type gets the same lifecycle operations and the same client API.
//! - Each resource store is owned by exactly one task. Requests are messages, processed one
//!   at a time, so ID assignment and mutation never race even when callers are concurrent.
//! - Callers hold a cheap, cloneable client handle instead of a reference to shared state,
//!   which makes the store easy to inject (and to fake in tests).
//!
//! ## Layers
//!
//! 1. **Entity Layer** ([`ActorEntity`]) - the resource's fields, payloads and merge rules
//! 2. **Runtime Layer** ([`ResourceActor`]) - the message loop and the ordered store
//! 3. **Interface Layer** ([`ResourceClient`], [`ActorClient`]) - type-safe requests
//!
//! ## Example
//!
//! ```rust
//! use actor_framework::{ActorEntity, ResourceActor};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)]
//! struct Book {
//!     id: u64,
//!     title: String,
//! }
//!
//! #[derive(Debug)] struct BookCreate { title: String }
//! #[derive(Debug)] struct BookUpdate { title: Option<String> }
//! #[derive(Debug, thiserror::Error)] #[error("book error")] struct BookError;
//!
//! #[async_trait]
//! impl ActorEntity for Book {
//!     type Id = u64;
//!     type Create = BookCreate;
//!     type Update = BookUpdate;
//!     type Context = ();
//!     type Error = BookError;
//!
//!     fn id(&self) -> &u64 { &self.id }
//!
//!     fn from_create_params(id: u64, params: BookCreate) -> Result<Self, Self::Error> {
//!         Ok(Self { id, title: params.title })
//!     }
//!
//!     async fn on_update(&mut self, update: BookUpdate, _ctx: &()) -> Result<(), Self::Error> {
//!         if let Some(title) = update.title { self.title = title; }
//!         Ok(())
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = ResourceActor::<Book>::new(10);
//!     tokio::spawn(actor.run(()));
//!
//!     let book = client.create(BookCreate { title: "Dune".into() }).await.unwrap();
//!     let fetched = client.get(book.id).await.unwrap().unwrap();
//!     assert_eq!(fetched.title, "Dune");
//! }
//! ```
//!
//! ## Context Injection
//!
//! Dependencies are passed to `run(context)` rather than `new()`, so actors can be created
//! first and wired afterwards. Resources without dependencies use `type Context = ()`.
//!
//! ## Testing
//!
//! The [`mock`] module answers client requests from scripted expectations, so code built on
//! a `ResourceClient` can be tested without a running actor.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod tracing;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
