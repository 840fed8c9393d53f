//! Ports (Interfaces)
//!
//! Abstract interfaces between the tools and the outside world: the search
//! backend they call, and the shape a host uses to call them.
//!
//! Backend implementations live in infrastructure crates.

mod search_api;
mod tool;

// Re-exports
pub use search_api::*;
pub use tool::*;
