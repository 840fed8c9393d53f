//! Plain result tool
//!
//! Returns the backend's text answer untouched. Backend failures are the
//! caller's to handle.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

use crate::domain::{InvocationContext, ResponseFormat, SearchFailure, ToolOutput};
use crate::ports::{SearchApi, SearchTool};

const NAME: &str = "bing_search";
const DESCRIPTION: &str = "A simple wrapper around Bing Search API for current events. \
     Use this tool when you need a quick string-based answer to a search query.";

/// Tool that answers a query with a single string
#[derive(Clone)]
pub struct PlainResultAdapter {
    api: Arc<dyn SearchApi>,
}

impl PlainResultAdapter {
    /// Name the tool is registered under
    pub const NAME: &'static str = NAME;
    pub const DESCRIPTION: &'static str = DESCRIPTION;
    pub const RESPONSE_FORMAT: ResponseFormat = ResponseFormat::Content;

    pub fn new(api: Arc<dyn SearchApi>) -> Self {
        Self { api }
    }

    /// Forward `query` as-is and return the backend's answer as-is
    pub async fn run(&self, query: &str) -> Result<String, SearchFailure> {
        debug!(
            tool = NAME,
            backend = self.api.backend_name(),
            query_len = query.len(),
            "Running plain search"
        );
        self.api.search_plain(query).await
    }
}

#[async_trait]
impl SearchTool for PlainResultAdapter {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn description(&self) -> &str {
        Self::DESCRIPTION
    }

    fn response_format(&self) -> ResponseFormat {
        Self::RESPONSE_FORMAT
    }

    async fn invoke(
        &self,
        query: &str,
        context: Option<&InvocationContext>,
    ) -> Result<ToolOutput, SearchFailure> {
        if let Some(ctx) = context {
            debug!(tool = NAME, run_id = %ctx.run_id, tags = ?ctx.tags, "Tool invoked by host");
        }
        let content = self.run(query).await?;
        Ok(ToolOutput::content(content))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::testing::StubSearchApi;

    #[tokio::test]
    async fn test_returns_backend_answer_unmodified() {
        let stub = Arc::new(StubSearchApi::ok("  Cats are <b>small</b> felines.  ", vec![]));
        let tool = PlainResultAdapter::new(stub.clone());

        let answer = tool.run("cats").await.unwrap();

        assert_eq!(answer, "  Cats are <b>small</b> felines.  ");
        assert_eq!(stub.calls(), vec![("cats".to_string(), None)]);
    }

    #[tokio::test]
    async fn test_forwards_empty_query() {
        let stub = Arc::new(StubSearchApi::ok("", vec![]));
        let tool = PlainResultAdapter::new(stub.clone());

        assert_eq!(tool.run("").await.unwrap(), "");
        assert_eq!(stub.calls(), vec![(String::new(), None)]);
    }

    #[tokio::test]
    async fn test_failure_propagates_unchanged() {
        let failure = SearchFailure::other("RuntimeError", "quota exceeded");
        let tool = PlainResultAdapter::new(Arc::new(StubSearchApi::failing(failure.clone())));

        let err = tool.run("cats").await.unwrap_err();
        assert_eq!(err, failure);
    }

    #[tokio::test]
    async fn test_invoke_wraps_content() {
        let tool = PlainResultAdapter::new(Arc::new(StubSearchApi::ok("answer", vec![])));
        let ctx = InvocationContext::new().with_tag("test");

        let output = tool.invoke("cats", Some(&ctx)).await.unwrap();

        assert_eq!(output, ToolOutput::content("answer"));
        assert_eq!(output.format(), tool.response_format());
        assert_eq!(tool.name(), "bing_search");
    }

    #[tokio::test]
    async fn test_invoke_propagates_failure() {
        let failure = SearchFailure::rate_limited("slow down");
        let tool = PlainResultAdapter::new(Arc::new(StubSearchApi::failing(failure.clone())));

        assert_eq!(tool.invoke("cats", None).await.unwrap_err(), failure);
    }

    #[test]
    fn test_metadata_available_without_backend() {
        let tool = PlainResultAdapter::new(Arc::new(StubSearchApi::ok("", vec![])));

        assert_eq!(PlainResultAdapter::NAME, tool.name());
        assert_eq!(PlainResultAdapter::DESCRIPTION, tool.description());
        assert_eq!(PlainResultAdapter::RESPONSE_FORMAT, tool.response_format());
    }
}
