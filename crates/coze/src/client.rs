use std::time::Duration;

use backon::Retryable;
use futures_util::StreamExt;
use reqwest::StatusCode;

use crate::body::error_message;
use crate::env::Env;
use crate::error::Error;
use crate::retry::{AttemptError, RetryConfig};
use crate::scanner::TranscriptScanner;
use crate::types::{TranscriptResult, WorkflowRequest};

pub const DEFAULT_API_BASE: &str = "https://api.coze.cn/v1/workflow/stream_run";

const DEFAULT_TIMEOUT_SECS: u64 = 120;

#[derive(Default)]
pub struct CozeClientBuilder {
    api_base: Option<String>,
    api_key: Option<String>,
    workflow_id: Option<String>,
    retry_config: Option<RetryConfig>,
    timeout: Option<Duration>,
}

impl CozeClientBuilder {
    pub fn api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = Some(api_base.into());
        self
    }

    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn workflow_id(mut self, workflow_id: impl Into<String>) -> Self {
        self.workflow_id = Some(workflow_id.into());
        self
    }

    pub fn retry_config(mut self, retry_config: RetryConfig) -> Self {
        self.retry_config = Some(retry_config);
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn build(self) -> Result<CozeClient, Error> {
        let api_key = self
            .api_key
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| Error::Config("api_key is required".to_string()))?;

        let workflow_id = self
            .workflow_id
            .filter(|id| !id.trim().is_empty())
            .ok_or_else(|| Error::Config("workflow_id is required".to_string()))?;

        let api_base = url::Url::parse(self.api_base.as_deref().unwrap_or(DEFAULT_API_BASE))
            .map_err(|e| Error::Config(format!("invalid api_base: {e}")))?;

        let client = reqwest::Client::builder()
            .timeout(
                self.timeout
                    .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
            )
            .build()
            .map_err(|e| Error::Config(format!("failed to build http client: {e}")))?;

        Ok(CozeClient {
            client,
            api_base,
            api_key,
            workflow_id,
            retry_config: self.retry_config.unwrap_or_default(),
        })
    }
}

/// Runs the extraction workflow and recovers the transcript it produces.
#[derive(Clone)]
pub struct CozeClient {
    client: reqwest::Client,
    api_base: url::Url,
    api_key: String,
    workflow_id: String,
    retry_config: RetryConfig,
}

impl CozeClient {
    pub fn builder() -> CozeClientBuilder {
        CozeClientBuilder::default()
    }

    pub fn from_env(env: &Env) -> Result<Self, Error> {
        let mut builder = Self::builder();

        if let Some(api_key) = &env.coze_api_key {
            builder = builder.api_key(api_key);
        }
        if let Some(workflow_id) = &env.coze_workflow_id {
            builder = builder.workflow_id(workflow_id);
        }
        if let Some(api_base) = &env.coze_api_base {
            builder = builder.api_base(api_base);
        }
        if let Some(max_retries) = env.coze_max_retries {
            builder = builder.retry_config(RetryConfig {
                max_retries,
                ..Default::default()
            });
        }

        builder.build()
    }

    pub fn workflow_id(&self) -> &str {
        &self.workflow_id
    }

    pub fn retry_config(&self) -> &RetryConfig {
        &self.retry_config
    }

    /// Submits `input` (a video link or a source text) to the workflow.
    pub async fn fetch(&self, input: &str, max_retries: usize) -> Result<TranscriptResult, Error> {
        let request = WorkflowRequest::new(&self.workflow_id, input);
        self.run(&request, max_retries).await
    }

    pub async fn run(
        &self,
        request: &WorkflowRequest,
        max_retries: usize,
    ) -> Result<TranscriptResult, Error> {
        tracing::info!(
            workflow_id = %request.workflow_id,
            max_retries = max_retries,
            "workflow_call_started"
        );

        let backoff = self.retry_config.backoff(max_retries);

        let outcome = (|| async { self.run_once(request).await })
            .retry(backoff)
            .notify(|err, dur| {
                tracing::warn!(
                    error = %err,
                    retry_delay_ms = dur.as_millis(),
                    "retrying_workflow_call"
                );
            })
            .when(AttemptError::is_retryable)
            .await;

        match outcome {
            Ok(Some(result)) => {
                tracing::info!(
                    source = ?result.source,
                    chars = result.text.chars().count(),
                    "workflow_call_succeeded"
                );
                Ok(result)
            }
            Ok(None) => {
                tracing::warn!("workflow_returned_no_content");
                Err(Error::EmptyResult)
            }
            Err(e) => {
                tracing::error!(error = %e, "workflow_call_failed");
                Err(e.into())
            }
        }
    }

    async fn run_once(
        &self,
        request: &WorkflowRequest,
    ) -> Result<Option<TranscriptResult>, AttemptError> {
        let response = self
            .client
            .post(self.api_base.clone())
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!(status = %status, "workflow_response_received");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = error_message(&body);

            return Err(if status == StatusCode::TOO_MANY_REQUESTS {
                AttemptError::RateLimited(message)
            } else {
                AttemptError::Status {
                    status: status.as_u16(),
                    message,
                }
            });
        }

        let mut scanner = TranscriptScanner::default();
        let mut chunks = response.bytes_stream();
        while let Some(chunk) = chunks.next().await {
            if scanner.feed(&chunk?) {
                break;
            }
        }

        Ok(scanner.finish())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_missing_api_key() {
        let result = CozeClient::builder().workflow_id("wf").build();
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_build_blank_api_key() {
        let result = CozeClient::builder().api_key("  ").workflow_id("wf").build();
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_build_missing_workflow_id() {
        let result = CozeClient::builder().api_key("key").build();
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_build_defaults_api_base() {
        let client = CozeClient::builder()
            .api_key("key")
            .workflow_id("wf")
            .build()
            .unwrap();
        assert_eq!(client.api_base.as_str(), DEFAULT_API_BASE);
        assert_eq!(client.retry_config().max_retries, 3);
    }

    #[test]
    fn test_from_env() {
        let env = Env {
            coze_api_key: Some("key".to_string()),
            coze_workflow_id: Some("wf".to_string()),
            coze_api_base: None,
            coze_max_retries: Some(5),
        };
        let client = CozeClient::from_env(&env).unwrap();
        assert_eq!(client.workflow_id(), "wf");
        assert_eq!(client.retry_config().max_retries, 5);

        let missing = CozeClient::from_env(&Env::default());
        assert!(matches!(missing, Err(Error::Config(_))));
    }
}
