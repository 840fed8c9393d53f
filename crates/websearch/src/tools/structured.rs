//! Structured result tool
//!
//! Returns `(summary, records)`. A backend failure never escapes this tool:
//! it becomes `(failure description, [])`.

use async_trait::async_trait;
use std::num::NonZeroUsize;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::domain::{
    render_records, InvocationContext, ResponseFormat, ResultRecord, SearchFailure, ToolOutput,
};
use crate::ports::{SearchApi, SearchTool};

const NAME: &str = "bing_search_results_json";
const DESCRIPTION: &str = "Wrapper around Bing Search API. \
     Best used for getting JSON-formatted results (title, link, snippet). \
     Input should be a search query. Returns top N search results.";

/// Records requested per call unless configured otherwise
pub const DEFAULT_NUM_RESULTS: NonZeroUsize = match NonZeroUsize::new(4) {
    Some(n) => n,
    None => unreachable!(),
};

/// Tool that answers a query with a summary and the records behind it
#[derive(Clone)]
pub struct StructuredResultAdapter {
    api: Arc<dyn SearchApi>,
    num_results: NonZeroUsize,
}

impl StructuredResultAdapter {
    /// Name the tool is registered under
    pub const NAME: &'static str = NAME;
    pub const DESCRIPTION: &'static str = DESCRIPTION;
    pub const RESPONSE_FORMAT: ResponseFormat = ResponseFormat::ContentAndArtifact;

    pub fn new(api: Arc<dyn SearchApi>) -> Self {
        Self {
            api,
            num_results: DEFAULT_NUM_RESULTS,
        }
    }

    /// Override the number of records requested per call
    pub fn with_num_results(mut self, num_results: NonZeroUsize) -> Self {
        self.num_results = num_results;
        self
    }

    pub fn num_results(&self) -> NonZeroUsize {
        self.num_results
    }

    /// Search with the configured record limit
    pub async fn run(&self, query: &str) -> (String, Vec<ResultRecord>) {
        self.run_with_limit(query, self.num_results).await
    }

    /// Search with an explicit record limit
    pub async fn run_with_limit(
        &self,
        query: &str,
        limit: NonZeroUsize,
    ) -> (String, Vec<ResultRecord>) {
        debug!(
            tool = NAME,
            backend = self.api.backend_name(),
            limit = limit.get(),
            "Running structured search"
        );

        match self.api.search_structured(query, limit.get()).await {
            Ok(records) => (render_records(&records), records),
            Err(failure) => {
                warn!(
                    tool = NAME,
                    kind = failure.kind.name(),
                    error = %failure,
                    "Search failed, returning empty results"
                );
                (failure.describe(), Vec::new())
            }
        }
    }
}

#[async_trait]
impl SearchTool for StructuredResultAdapter {
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
        let (content, artifact) = self.run(query).await;
        Ok(ToolOutput::content_and_artifact(content, artifact))
    }
}
