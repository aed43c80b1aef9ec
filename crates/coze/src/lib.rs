mod body;
mod client;
mod env;
mod error;
mod event;
mod retry;
mod scanner;
pub mod sse;
mod types;

pub use client::{CozeClient, CozeClientBuilder, DEFAULT_API_BASE};
pub use env::{Env, filter_empty};
pub use error::Error;
pub use event::{MalformedEvent, WorkflowEvent};
pub use retry::RetryConfig;
pub use scanner::{TranscriptScanner, scan_body};
pub use sse::{EventDecoder, RawEvent, RawEventKind, StreamEvent, decode_lines};
pub use types::{TranscriptResult, TranscriptSource, WorkflowRequest};
