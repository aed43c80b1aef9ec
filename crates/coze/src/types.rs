use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TranscriptSource {
    Stream,
    FullBody,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TranscriptResult {
    pub text: String,
    pub source: TranscriptSource,
}

impl TranscriptResult {
    pub(crate) fn from_stream(text: String) -> Self {
        Self {
            text,
            source: TranscriptSource::Stream,
        }
    }

    pub(crate) fn from_full_body(text: String) -> Self {
        Self {
            text,
            source: TranscriptSource::FullBody,
        }
    }
}

/// Body of a workflow run request.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct WorkflowRequest {
    pub workflow_id: String,
    pub parameters: BTreeMap<String, String>,
}

impl WorkflowRequest {
    pub fn new(workflow_id: impl Into<String>, input: impl Into<String>) -> Self {
        let mut parameters = BTreeMap::new();
        parameters.insert("input".to_string(), input.into());
        Self {
            workflow_id: workflow_id.into(),
            parameters,
        }
    }

    pub fn parameter(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.parameters.insert(name.into(), value.into());
        self
    }
}
