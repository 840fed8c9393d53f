//! Bing Web Search backend for websearch
//!
//! Implements the `SearchApi` port against the Bing Web Search v7 REST API.
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use websearch::PlainResultAdapter;
//! use websearch_bing::{BingConfig, BingSearchApi};
//!
//! let api = BingSearchApi::new(BingConfig::from_env()?)?;
//! let tool = PlainResultAdapter::new(Arc::new(api));
//! ```

mod client;
mod config;

pub use client::{BingSearchApi, NO_RESULT_MESSAGE};
pub use config::{
    BingConfig, DEFAULT_PLAIN_COUNT, DEFAULT_SEARCH_URL, ENV_SEARCH_URL, ENV_SUBSCRIPTION_KEY,
};
