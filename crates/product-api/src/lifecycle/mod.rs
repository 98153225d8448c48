//! # System Lifecycle
//!
//! Starts the product actor, hands out its client, and shuts it down cleanly.
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients** - closes the sender side of the channel
//! 2. **Actor detects closure** - `receiver.recv()` returns `None`
//! 3. **Actor logs its final state** and its task completes
//! 4. **Await completion** - [`ProductSystem::shutdown`] joins the task
//!
//! Clones of the client held elsewhere (for example by the HTTP router) keep the actor
//! alive, so the server must be stopped before `shutdown` is awaited.
//!
//! ## Observability
//!
//! Logging is initialized once per process with
//! [`setup_tracing`](actor_framework::tracing::setup_tracing):
//!
//! ```bash
//! RUST_LOG=info product_api     # Compact logs
//! RUST_LOG=debug product_api    # Per-request actor traffic
//! ```

pub mod product_system;

pub use product_system::*;
