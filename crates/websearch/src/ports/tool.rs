//! Search Tool Port
//!
//! The uniform call signature a tool-orchestration host uses:
//! `invoke(query, optional context)`. Hosts pick tools by name and read
//! `response_format` to know which `ToolOutput` shape comes back.

use async_trait::async_trait;

use crate::domain::entities::{InvocationContext, ResponseFormat, ToolOutput};
use crate::domain::errors::SearchFailure;

#[async_trait]
pub trait SearchTool: Send + Sync {
    /// Name the host registers the tool under
    fn name(&self) -> &str;

    /// Usage hint shown to the host
    fn description(&self) -> &str;

    fn response_format(&self) -> ResponseFormat;

    /// Run the tool. The context is optional and never changes the result.
    async fn invoke(
        &self,
        query: &str,
        context: Option<&InvocationContext>,
    ) -> Result<ToolOutput, SearchFailure>;
}
