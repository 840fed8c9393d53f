//! Domain Layer
//!
//! Per-call values and error types, free of any transport concerns.

pub mod entities;
pub mod errors;

// Re-exports for convenience
pub use entities::*;
pub use errors::*;
