use serde::Deserialize;
use serde_json::Value;

/// Field paths tried, in order, when a response body is read as a single
/// JSON document instead of an event stream.
const FULL_BODY_FIELDS: &[&[&str]] = &[
    &["data", "content"],
    &["data", "script"],
    &["data", "text"],
    &["data"],
    &["content"],
    &["script"],
    &["text"],
    &["result"],
    &["output"],
];

/// Recovers text from a whole response body. Falls back to the raw body when
/// it is not JSON or carries none of the known fields.
pub(crate) fn text_from_full_body(body: &str) -> Option<String> {
    if body.trim().is_empty() {
        return None;
    }

    let Ok(document) = serde_json::from_str::<Value>(body) else {
        return Some(body.to_string());
    };

    FULL_BODY_FIELDS
        .iter()
        .find_map(|path| lookup_text(&document, path))
        .or_else(|| Some(body.to_string()))
}

fn lookup_text(document: &Value, path: &[&str]) -> Option<String> {
    let value = path
        .iter()
        .try_fold(document, |value, key| value.get(*key))?;

    value
        .as_str()
        .filter(|text| !text.trim().is_empty())
        .map(str::to_string)
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    msg: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// Extracts the diagnostic message of a failed call. Uses `msg` when the body
/// is a JSON error document, the trimmed body otherwise.
pub(crate) fn error_message(body: &str) -> String {
    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        if let Some(msg) = parsed.msg.or(parsed.message) {
            return msg;
        }
    }

    let trimmed = body.trim();
    if trimmed.is_empty() {
        "unknown error".to_string()
    } else {
        crate::sse::preview(trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_priority() {
        assert_eq!(
            text_from_full_body(r#"{"data":{"content":"hi there"}}"#).as_deref(),
            Some("hi there")
        );
        assert_eq!(
            text_from_full_body(r#"{"data":{"text":"t"},"content":"c"}"#).as_deref(),
            Some("t")
        );
        assert_eq!(
            text_from_full_body(r#"{"data":{"other":1},"content":"c"}"#).as_deref(),
            Some("c")
        );
        assert_eq!(
            text_from_full_body(r#"{"data":"inline"}"#).as_deref(),
            Some("inline")
        );
        assert_eq!(
            text_from_full_body(r#"{"result":"","output":"o"}"#).as_deref(),
            Some("o")
        );
    }

    #[test]
    fn test_unknown_shapes_fall_through_to_raw() {
        assert_eq!(
            text_from_full_body(r#"{"code":0}"#).as_deref(),
            Some(r#"{"code":0}"#)
        );
        assert_eq!(
            text_from_full_body("plain transcript").as_deref(),
            Some("plain transcript")
        );
        assert_eq!(text_from_full_body("  \n"), None);
    }

    #[test]
    fn test_error_message() {
        assert_eq!(error_message(r#"{"code":4100,"msg":"invalid token"}"#), "invalid token");
        assert_eq!(error_message("Bad Gateway"), "Bad Gateway");
        assert_eq!(error_message(""), "unknown error");
    }
}
