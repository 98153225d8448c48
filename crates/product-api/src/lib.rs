//! # Product API Library
//!
//! An in-memory product catalogue served over HTTP. The store lives inside a single
//! [`ResourceActor`](actor_framework::ResourceActor), so concurrent requests are applied one
//! at a time and ids are handed out without locks.
//!
//! - **[model]**: [`Product`](model::Product), its request payloads and their validation.
//! - **[product_actor]**: the seeded actor and [`ProductError`](product_actor::ProductError).
//! - **[clients]**: [`ProductClient`](clients::ProductClient), the typed face of the actor.
//! - **[lifecycle]**: [`ProductSystem`](lifecycle::ProductSystem) starts and stops the actor.
//! - **[api]**: axum router, extractors and HTTP error mapping.
//! - **[config]**: environment configuration.

pub mod api;
pub mod clients;
pub mod config;
pub mod lifecycle;
pub mod model;
pub mod product_actor;
