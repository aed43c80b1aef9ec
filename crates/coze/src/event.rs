use serde::Deserialize;
use serde_json::{Map, Value};

use crate::sse::StreamEvent;

pub const MESSAGE_EVENT: &str = "Message";
pub const DONE_EVENT: &str = "Done";
pub const ERROR_EVENT: &str = "Error";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkflowEvent {
    /// A message frame. `None` when the payload carried no usable text.
    Message(Option<String>),
    Done,
    Error {
        code: Option<i64>,
        message: String,
    },
    Other(Option<String>),
}

#[derive(Debug, thiserror::Error)]
#[error("malformed {event} payload: {source}")]
pub struct MalformedEvent {
    pub event: String,
    #[source]
    pub source: serde_json::Error,
}

#[derive(Debug, Deserialize)]
struct MessagePayload {
    #[serde(default)]
    content: Option<Value>,
}

#[derive(Debug, Deserialize)]
struct ErrorPayload {
    #[serde(default)]
    error_code: Option<i64>,
    #[serde(default)]
    error_message: Option<String>,
}

impl WorkflowEvent {
    pub fn classify(event: &StreamEvent) -> Result<Self, MalformedEvent> {
        let name = event.event_name.as_deref();

        // Termination does not depend on the payload being well formed.
        if name == Some(DONE_EVENT) {
            return Ok(Self::Done);
        }

        let data = event.data.as_deref().unwrap_or_default();
        let value: Value = serde_json::from_str(data).map_err(|source| MalformedEvent {
            event: name.unwrap_or("unnamed").to_string(),
            source,
        })?;

        match name {
            Some(MESSAGE_EVENT) => {
                let payload: MessagePayload =
                    serde_json::from_value(value).map_err(|source| MalformedEvent {
                        event: MESSAGE_EVENT.to_string(),
                        source,
                    })?;
                Ok(Self::Message(payload.content.as_ref().and_then(unwrap_content)))
            }
            Some(ERROR_EVENT) => {
                let payload: ErrorPayload =
                    serde_json::from_value(value).map_err(|source| MalformedEvent {
                        event: ERROR_EVENT.to_string(),
                        source,
                    })?;
                Ok(Self::Error {
                    code: payload.error_code,
                    message: payload.error_message.unwrap_or_default(),
                })
            }
            other => Ok(Self::Other(other.map(str::to_string))),
        }
    }
}

/// `content` is usually a JSON document serialized into a string, whose
/// `output` field holds the text. Plain-text content is used as is.
fn unwrap_content(content: &Value) -> Option<String> {
    match content {
        Value::String(raw) => match serde_json::from_str::<Value>(raw) {
            Ok(Value::Object(inner)) => output_field(&inner),
            Ok(Value::String(inner)) => non_empty(inner),
            Ok(_) | Err(_) => non_empty(raw.clone()),
        },
        Value::Object(inner) => output_field(inner),
        _ => None,
    }
}

fn output_field(object: &Map<String, Value>) -> Option<String> {
    object
        .get("output")
        .and_then(Value::as_str)
        .map(str::to_string)
        .and_then(non_empty)
}

fn non_empty(text: String) -> Option<String> {
    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(name: &str, data: &str) -> StreamEvent {
        StreamEvent {
            event_name: Some(name.to_string()),
            data: Some(data.to_string()),
        }
    }

    #[test]
    fn test_message_two_level_unwrap() {
        let ev = event("Message", r#"{"content":"{\"output\":\"hello world\"}"}"#);
        assert_eq!(
            WorkflowEvent::classify(&ev).unwrap(),
            WorkflowEvent::Message(Some("hello world".to_string()))
        );
    }

    #[test]
    fn test_message_plain_content() {
        let ev = event("Message", r#"{"content":"just text"}"#);
        assert_eq!(
            WorkflowEvent::classify(&ev).unwrap(),
            WorkflowEvent::Message(Some("just text".to_string()))
        );
    }

    #[test]
    fn test_message_object_without_output() {
        let ev = event("Message", r#"{"content":"{\"node\":\"start\"}"}"#);
        assert_eq!(
            WorkflowEvent::classify(&ev).unwrap(),
            WorkflowEvent::Message(None)
        );

        let ev = event("Message", r#"{"content":"{\"output\":\"  \"}"}"#);
        assert_eq!(
            WorkflowEvent::classify(&ev).unwrap(),
            WorkflowEvent::Message(None)
        );
    }

    #[test]
    fn test_message_content_as_object() {
        let ev = event("Message", r#"{"content":{"output":"direct"}}"#);
        assert_eq!(
            WorkflowEvent::classify(&ev).unwrap(),
            WorkflowEvent::Message(Some("direct".to_string()))
        );
    }

    #[test]
    fn test_done_ignores_payload() {
        let ev = event("Done", "not json");
        assert_eq!(WorkflowEvent::classify(&ev).unwrap(), WorkflowEvent::Done);
    }

    #[test]
    fn test_error_event() {
        let ev = event(
            "Error",
            r#"{"error_code":4000,"error_message":"workflow failed"}"#,
        );
        assert_eq!(
            WorkflowEvent::classify(&ev).unwrap(),
            WorkflowEvent::Error {
                code: Some(4000),
                message: "workflow failed".to_string()
            }
        );
    }

    #[test]
    fn test_malformed_payload() {
        let ev = event("Message", "{not json");
        let err = WorkflowEvent::classify(&ev).unwrap_err();
        assert_eq!(err.event, "Message");
    }

    #[test]
    fn test_other_event() {
        let ev = event("PING", "{}");
        assert_eq!(
            WorkflowEvent::classify(&ev).unwrap(),
            WorkflowEvent::Other(Some("PING".to_string()))
        );
    }
}
