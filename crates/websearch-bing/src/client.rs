//! SearchApi implementation for Bing Web Search v7

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::time::Duration;
use tracing::{debug, error};

use websearch::{DomainError, ResultRecord, SearchApi, SearchFailure};

use crate::config::BingConfig;

/// Answer used when Bing returns no web pages
pub const NO_RESULT_MESSAGE: &str = "No good Bing Search Result was found";

const SUBSCRIPTION_HEADER: &str = "Ocp-Apim-Subscription-Key";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Bing backend implementing the SearchApi port
#[derive(Clone)]
pub struct BingSearchApi {
    client: Client,
    config: BingConfig,
}

impl BingSearchApi {
    /// Create a new Bing backend from a validated configuration
    pub fn new(config: BingConfig) -> Result<Self, DomainError> {
        config.validate()?;

        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!("websearch-bing/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| DomainError::Configuration(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &BingConfig {
        &self.config
    }

    async fn fetch_pages(&self, query: &str, count: usize) -> Result<Vec<WebPage>, SearchFailure> {
        if query.trim().is_empty() {
            return Err(SearchFailure::empty_query());
        }

        debug!(count = %count, "Querying Bing Web Search");

        let count = count.to_string();
        let params = request_params(query, &count, &self.config.search_params);

        let response = self
            .client
            .get(&self.config.search_url)
            .header(SUBSCRIPTION_HEADER, &self.config.subscription_key)
            .query(&params)
            .send()
            .await
            .map_err(|err| SearchFailure::request_failed(err.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|err| SearchFailure::request_failed(err.to_string()))?;

        if !status.is_success() {
            error!(status = %status, "Bing API returned an error");
            return Err(map_http_error(status, &body));
        }

        parse_pages(&body)
    }
}

#[async_trait]
impl SearchApi for BingSearchApi {
    async fn search_plain(&self, query: &str) -> Result<String, SearchFailure> {
        let pages = self.fetch_pages(query, self.config.plain_count).await?;
        Ok(join_snippets(&pages))
    }

    async fn search_structured(
        &self,
        query: &str,
        limit: usize,
    ) -> Result<Vec<ResultRecord>, SearchFailure> {
        let pages = self.fetch_pages(query, limit).await?;
        Ok(to_records(pages))
    }

    fn backend_name(&self) -> &str {
        "bing"
    }
}

// ============================================
// Response Types
// ============================================

#[derive(Deserialize)]
struct SearchResponse {
    #[serde(rename = "webPages")]
    web_pages: Option<WebPages>,
}

#[derive(Deserialize)]
struct WebPages {
    #[serde(default)]
    value: Vec<WebPage>,
}

#[derive(Debug, Clone, Deserialize)]
struct WebPage {
    name: String,
    url: String,
    #[serde(default)]
    snippet: String,
}

// ============================================
// Helper Functions
// ============================================

/// Query string for one request; `q` is sent exactly as the caller gave it
fn request_params<'a>(
    query: &'a str,
    count: &'a str,
    extra: &'a BTreeMap<String, String>,
) -> Vec<(&'a str, &'a str)> {
    let mut params = vec![
        ("q", query),
        ("count", count),
        ("textDecorations", "true"),
        ("textFormat", "HTML"),
    ];
    for (key, value) in extra {
        params.push((key.as_str(), value.as_str()));
    }
    params
}

fn parse_pages(body: &str) -> Result<Vec<WebPage>, SearchFailure> {
    let response: SearchResponse =
        serde_json::from_str(body).map_err(|err| SearchFailure::parse_error(err.to_string()))?;

    Ok(response.web_pages.map(|p| p.value).unwrap_or_default())
}

fn join_snippets(pages: &[WebPage]) -> String {
    if pages.is_empty() {
        return NO_RESULT_MESSAGE.to_string();
    }

    pages
        .iter()
        .map(|page| page.snippet.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

fn to_records(pages: Vec<WebPage>) -> Vec<ResultRecord> {
    if pages.is_empty() {
        return vec![ResultRecord::new().with_field("Result", NO_RESULT_MESSAGE)];
    }

    pages
        .into_iter()
        .map(|page| {
            ResultRecord::new()
                .with_field("snippet", page.snippet)
                .with_field("title", page.name)
                .with_field("link", page.url)
        })
        .collect()
}

fn map_http_error(status: StatusCode, body: &str) -> SearchFailure {
    let message = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|json| {
            json.get("error")
                .and_then(|err| err.get("message"))
                .and_then(|msg| msg.as_str())
                .map(|msg| msg.to_string())
        })
        .unwrap_or_else(|| body.to_string());

    if status == StatusCode::TOO_MANY_REQUESTS {
        return SearchFailure::rate_limited(message);
    }

    SearchFailure::api_error(status.as_u16(), message)
}
