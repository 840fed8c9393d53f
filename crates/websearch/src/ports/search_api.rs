//! Search API Port
//!
//! Abstract interface for the web search backend. Transport, paging,
//! authentication and rate limits are all the implementation's business.

use async_trait::async_trait;

use crate::domain::entities::ResultRecord;
use crate::domain::errors::SearchFailure;

/// Service interface for web search backends
///
/// # Example
///
/// ```rust,ignore
/// use websearch::ports::SearchApi;
///
/// struct BingSearchApi { /* ... */ }
///
/// #[async_trait]
/// impl SearchApi for BingSearchApi {
///     async fn search_plain(&self, query: &str) -> Result<String, SearchFailure> {
///         // Call Bing, join snippets
///     }
///     // ...
/// }
/// ```
#[async_trait]
pub trait SearchApi: Send + Sync {
    /// Search and return a single text answer
    async fn search_plain(&self, query: &str) -> Result<String, SearchFailure>;

    /// Search and return up to `limit` records, in backend order
    async fn search_structured(
        &self,
        query: &str,
        limit: usize,
    ) -> Result<Vec<ResultRecord>, SearchFailure>;

    /// Backend name (e.g., "bing")
    fn backend_name(&self) -> &str;
}
