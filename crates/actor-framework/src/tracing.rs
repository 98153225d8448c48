//! # Observability & Tracing
//!
//! [`setup_tracing`] installs the process-wide subscriber. The format is compact and hides
//! the module path (`with_target(false)`); actors tag their events with `entity_type`
//! instead, so log lines stay short:
//!
//! ```text
//! INFO Actor started entity_type="Product" size=4
//! INFO Created entity_type="Product" id=5 size=5
//! WARN Not found entity_type="Product" id=42
//! ```
//!
//! Verbosity comes from `RUST_LOG`; `info` applies when it is unset.
//!
//! ```bash
//! RUST_LOG=debug cargo run            # include request payloads
//! RUST_LOG=actor_framework=debug,info cargo run
//! ```

use tracing_subscriber::EnvFilter;

/// Initializes structured logging for the whole process.
///
/// Safe to call more than once; later calls leave the first subscriber in place.
pub fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .try_init();
}
