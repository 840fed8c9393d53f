//! Domain Entities
//!
//! Values created per call and dropped once the caller consumes them.
//! - ResultRecord: One structured search hit
//! - ToolOutput: What a tool hands back to its host
//! - InvocationContext: Optional host-supplied call context

mod context;
mod output;
mod record;

pub use context::*;
pub use output::*;
pub use record::*;
