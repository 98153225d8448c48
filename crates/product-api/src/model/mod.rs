//! Pure data structures: the [`Product`] entity, its request payloads, and their validation.

pub mod body;
pub mod patch;
pub mod product;
pub mod validation;

pub use body::*;
pub use patch::*;
pub use product::*;
pub use validation::*;
