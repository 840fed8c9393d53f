//! Invocation Context
//!
//! Optional context a tool-orchestration host passes along with a call.
//! Tools only log its run id and tags.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InvocationContext {
    /// Host-assigned run identifier
    pub run_id: Uuid,
    /// Free-form labels from the host
    #[serde(default)]
    pub tags: Vec<String>,
}

impl InvocationContext {
    pub fn new() -> Self {
        Self {
            run_id: Uuid::new_v4(),
            tags: Vec::new(),
        }
    }

    pub fn with_run_id(mut self, run_id: Uuid) -> Self {
        self.run_id = run_id;
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }
}

impl Default for InvocationContext {
    fn default() -> Self {
        Self::new()
    }
}
