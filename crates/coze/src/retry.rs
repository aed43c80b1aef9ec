use std::time::Duration;

use backon::ExponentialBuilder;

use crate::error::Error;

const DEFAULT_MAX_RETRIES: usize = 3;
const DEFAULT_BASE_DELAY_MS: u64 = 500;
const DEFAULT_MAX_DELAY_SECS: u64 = 8;

#[derive(Debug, Clone)]
pub struct RetryConfig {
    pub max_retries: usize,
    pub base_delay: Duration,
    pub max_delay: Duration,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: DEFAULT_MAX_RETRIES,
            base_delay: Duration::from_millis(DEFAULT_BASE_DELAY_MS),
            max_delay: Duration::from_secs(DEFAULT_MAX_DELAY_SECS),
        }
    }
}

impl RetryConfig {
    /// Delay before retry `n` is `base_delay * 2^n`, capped at `max_delay`.
    pub(crate) fn backoff(&self, max_retries: usize) -> ExponentialBuilder {
        ExponentialBuilder::default()
            .with_factor(2.0)
            .with_min_delay(self.base_delay)
            .with_max_delay(self.max_delay)
            .with_max_times(max_retries)
    }
}

/// Failure of a single workflow call, before the retry policy is applied.
#[derive(Debug, thiserror::Error)]
pub(crate) enum AttemptError {
    #[error("rate limited: {0}")]
    RateLimited(String),

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("status {status}: {message}")]
    Status { status: u16, message: String },
}

impl AttemptError {
    pub(crate) fn is_retryable(&self) -> bool {
        match self {
            Self::RateLimited(_) => true,
            Self::Transport(e) => !e.is_builder(),
            Self::Status { .. } => false,
        }
    }
}

impl From<AttemptError> for Error {
    fn from(err: AttemptError) -> Self {
        match err {
            AttemptError::RateLimited(message) => Error::RemoteCall {
                status: Some(429),
                message,
            },
            AttemptError::Transport(e) => Error::RemoteCall {
                status: e.status().map(|s| s.as_u16()),
                message: e.to_string(),
            },
            AttemptError::Status { status, message } => Error::RemoteCall {
                status: Some(status),
                message,
            },
        }
    }
}
