//! Tool output shapes

use serde::{Deserialize, Serialize};

use super::record::ResultRecord;

/// Which output shape a tool produces
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ResponseFormat {
    /// A single text value
    Content,
    /// A text summary plus the raw records it was rendered from
    ContentAndArtifact,
}

impl std::fmt::Display for ResponseFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResponseFormat::Content => write!(f, "content"),
            ResponseFormat::ContentAndArtifact => write!(f, "content_and_artifact"),
        }
    }
}

/// Value a tool hands back to its host
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "format", rename_all = "snake_case")]
pub enum ToolOutput {
    Content {
        content: String,
    },
    ContentAndArtifact {
        content: String,
        artifact: Vec<ResultRecord>,
    },
}

impl ToolOutput {
    pub fn content(content: impl Into<String>) -> Self {
        Self::Content {
            content: content.into(),
        }
    }

    pub fn content_and_artifact(content: impl Into<String>, artifact: Vec<ResultRecord>) -> Self {
        Self::ContentAndArtifact {
            content: content.into(),
            artifact,
        }
    }

    /// Text part, present in both shapes
    pub fn text(&self) -> &str {
        match self {
            ToolOutput::Content { content } => content,
            ToolOutput::ContentAndArtifact { content, .. } => content,
        }
    }

    pub fn artifact(&self) -> Option<&[ResultRecord]> {
        match self {
            ToolOutput::Content { .. } => None,
            ToolOutput::ContentAndArtifact { artifact, .. } => Some(artifact),
        }
    }

    pub fn format(&self) -> ResponseFormat {
        match self {
            ToolOutput::Content { .. } => ResponseFormat::Content,
            ToolOutput::ContentAndArtifact { .. } => ResponseFormat::ContentAndArtifact,
        }
    }
}
