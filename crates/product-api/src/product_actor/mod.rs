//! # Product Actor
//!
//! The Product resource actor: an ordered, in-memory catalogue seeded with four records.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for [`Product`]
//! - [`error`] - [`ProductError`] type for type-safe error handling
//! - [`new()`] - Factory function that creates the seeded actor and its client
//!
//! ## Usage
//!
//! ```rust
//! use actor_framework::ActorClient;
//! use product_api::clients::ProductClient;
//! use product_api::model::ProductCreate;
//! use product_api::product_actor;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, generic_client) = product_actor::new(32)?;
//!     let client = ProductClient::new(generic_client);
//!     tokio::spawn(actor.run(()));
//!
//!     // Seed records take ids 1 to 4, so the first new product gets 5
//!     let cup = client
//!         .create_product(ProductCreate::new("Cup", None, 5.0, 10))
//!         .await?;
//!     assert_eq!(cup.id.0, 5);
//!     assert_eq!(client.list().await?.len(), 5);
//!     Ok(())
//! }
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::model::{Product, ProductCreate};
use actor_framework::{ResourceActor, ResourceClient};
use tracing::info;

/// The catalogue every fresh process starts with, in id order.
pub fn seed_products() -> Vec<ProductCreate> {
    vec![
        ProductCreate::new("Phone", Some("A smartphone"), 699.99, 50),
        ProductCreate::new("Laptop", Some("A powerful laptop"), 999.99, 30),
        ProductCreate::new("Pen", Some("A blue ink pen"), 1.99, 100),
        ProductCreate::new("Table", Some("A wooden table"), 199.99, 20),
    ]
}

/// Creates a new Product actor, already seeded, and its client.
pub fn new(
    buffer_size: usize,
) -> Result<(ResourceActor<Product>, ResourceClient<Product>), ProductError> {
    let (mut actor, client) = ResourceActor::new(buffer_size);
    let seed = seed_products();
    let count = seed.len();
    actor.seed(seed)?;
    info!(count, "Seeded product catalogue");
    Ok((actor, client))
}
