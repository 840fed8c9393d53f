//! Search Tools
//!
//! Adapters that sit between a tool host and a `SearchApi` backend.
//! - PlainResultAdapter: text answer, backend failures propagate
//! - StructuredResultAdapter: summary plus records, backend failures contained

mod plain;
mod structured;

pub use plain::PlainResultAdapter;
pub use structured::{StructuredResultAdapter, DEFAULT_NUM_RESULTS};

#[cfg(test)]
pub(crate) mod testing {
    use async_trait::async_trait;
    use std::sync::Mutex;

    use crate::domain::{ResultRecord, SearchFailure};
    use crate::ports::SearchApi;

    /// Deterministic backend that records every call it receives
    pub struct StubSearchApi {
        pub plain: Result<String, SearchFailure>,
        pub structured: Result<Vec<ResultRecord>, SearchFailure>,
        pub calls: Mutex<Vec<(String, Option<usize>)>>,
    }

    impl StubSearchApi {
        pub fn ok(plain: &str, structured: Vec<ResultRecord>) -> Self {
            Self {
                plain: Ok(plain.to_string()),
                structured: Ok(structured),
                calls: Mutex::new(Vec::new()),
            }
        }

        pub fn failing(failure: SearchFailure) -> Self {
            Self {
                plain: Err(failure.clone()),
                structured: Err(failure),
                calls: Mutex::new(Vec::new()),
            }
        }

        pub fn calls(&self) -> Vec<(String, Option<usize>)> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl SearchApi for StubSearchApi {
        async fn search_plain(&self, query: &str) -> Result<String, SearchFailure> {
            self.calls.lock().unwrap().push((query.to_string(), None));
            self.plain.clone()
        }

        async fn search_structured(
            &self,
            query: &str,
            limit: usize,
        ) -> Result<Vec<ResultRecord>, SearchFailure> {
            self.calls
                .lock()
                .unwrap()
                .push((query.to_string(), Some(limit)));
            self.structured.clone()
        }

        fn backend_name(&self) -> &str {
            "stub"
        }
    }

    pub fn cats_hit() -> ResultRecord {
        ResultRecord::new()
            .with_field("title", "A")
            .with_field("link", "u1")
            .with_field("snippet", "s1")
    }
}
