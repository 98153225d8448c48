//! Type-safe wrappers that hide the message passing behind domain methods.

pub mod product_client;

pub use product_client::*;
