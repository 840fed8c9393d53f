//! Websearch Tool Library
//!
//! Tool adapters that forward a search query to a web search API and
//! shape the answer for a tool-calling host.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain/`): values that flow through a search call
//!   - `entities/`: `ResultRecord`, `ToolOutput`, `InvocationContext`
//!   - `errors/`: `SearchFailure` and `DomainError`
//!
//! - **Ports** (`ports/`): abstract interfaces (traits)
//!   - `SearchApi`: the search backend collaborator
//!   - `SearchTool`: the uniform shape a host invokes
//!
//! - **Tools** (`tools/`): the two adapters
//!   - `PlainResultAdapter`: plain string, failures propagate
//!   - `StructuredResultAdapter`: summary plus records, failures contained
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use websearch::{StructuredResultAdapter, SearchApi};
//!
//! let api: Arc<dyn SearchApi> = Arc::new(my_backend);
//! let tool = StructuredResultAdapter::new(api);
//! let (summary, records) = tool.run("rust async traits").await;
//! ```

pub mod domain;
pub mod ports;
pub mod tools;

// Re-export commonly used types
pub use domain::{
    render_records, DomainError, FailureKind, InvocationContext, ResponseFormat, ResultRecord,
    SearchFailure, ToolOutput,
};
pub use ports::{SearchApi, SearchTool};
pub use tools::{PlainResultAdapter, StructuredResultAdapter, DEFAULT_NUM_RESULTS};
