use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use crate::error::Error;

const NON_MEDIA_EXTENSIONS: &[&str] = &[
    ".ico", ".png", ".jpg", ".jpeg", ".gif", ".css", ".js", ".json", ".svg", ".txt", ".html",
];
const NON_MEDIA_KEYWORDS: &[&str] = &["icon", "logo", "image", "css", "js", "json"];
const MEDIA_KEYWORDS: &[&str] = &["video", "mp4", "xhsvideo", "play", "main", "source", "media"];

/// JSON keys whose string value is a media address wherever they appear.
const MEDIA_KEYS: &[&str] = &[
    "masterUrl",
    "master_url",
    "videoUrl",
    "video_url",
    "main_url",
    "play_url",
    "video",
];
/// Keys that hold a media address only inside a video-like object.
const NESTED_URL_KEYS: &[&str] = &["url", "url_list", "backupUrls"];

static STATE_ASSIGNMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"window\.(?:__INITIAL_STATE__|__data__|__page__|__NEXT_DATA__)\s*=\s*").unwrap()
});

static STATE_FRAGMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\{"(?:note|video)":"#).unwrap());

static UNDEFINED: LazyLock<Regex> = LazyLock::new(|| Regex::new(r":\s*undefined\b").unwrap());

static KEYED: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r#""video":\s*\{"play_addr":\s*\{"url_list":\s*\["([^"]+)""#,
        r#""video":\s*\{"url":\s*"([^"]+)""#,
        r#""videoUrl":\s*"([^"]+)""#,
        r#""video_url":\s*"([^"]+)""#,
        r#"(https://[^\s"]+\.mp4)"#,
        r#""main_url":\s*"([^"]+)""#,
        r#""play_url":\s*"([^"]+)""#,
        r#"video[^}]*"url"\s*:\s*"([^"]+)""#,
        r#"(https://[^\s"]*video[^\s"]*)"#,
        r#"(https://[^\s"]*xhsvideo[^\s"]*)"#,
        r#"(https://[^\s"]+\?[^\s"]*video[^\s"]*)"#,
    ]
    .into_iter()
    .map(|pattern| Regex::new(pattern).unwrap())
    .collect()
});

static LINK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#"https://[^\s"]+"#).unwrap());

/// One way of locating the media address inside a share page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum Strategy {
    /// Parses the page's embedded JSON state and searches it for media keys.
    EmbeddedState,
    /// Matches well-known `"key": "address"` shapes in the raw page.
    KeyedPattern,
    /// Scans every link in the page for media-looking addresses.
    LinkScan,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [Self::EmbeddedState, Self::KeyedPattern, Self::LinkScan];

    pub fn find(&self, html: &str) -> Option<String> {
        match self {
            Self::EmbeddedState => find_in_embedded_state(html),
            Self::KeyedPattern => find_by_keyed_pattern(html),
            Self::LinkScan => find_by_link_scan(html),
        }
    }
}

/// Runs every [`Strategy`] in order and returns the first address found,
/// cleaned with [`clean_media_url`].
pub fn resolve_media_url(html: &str) -> Result<String, Error> {
    for strategy in Strategy::ALL {
        if let Some(found) = strategy.find(html) {
            let url = clean_media_url(&found);
            tracing::info!(strategy = %strategy, url = %url, "media_url_resolved");
            return Ok(url);
        }
        tracing::debug!(strategy = %strategy, "media_strategy_missed");
    }

    tracing::warn!(page_bytes = html.len(), "media_url_not_found");
    Err(Error::MediaNotFound)
}

/// Undoes JSON escaping left in addresses scraped from page source and drops
/// the query string.
pub fn clean_media_url(raw: &str) -> String {
    let unescaped = raw
        .replace("\\u0026", "&")
        .replace("\\u002F", "/")
        .replace("\\/", "/")
        .replace("&amp;", "&");

    match unescaped.split_once('?') {
        Some((base, _)) => base.to_string(),
        None => unescaped,
    }
}

fn is_plausible_media(url: &str) -> bool {
    let lower = url.to_lowercase();
    !NON_MEDIA_EXTENSIONS.iter().any(|ext| lower.contains(ext))
        && !NON_MEDIA_KEYWORDS.iter().any(|kw| lower.contains(kw))
}

fn is_address(value: &str) -> bool {
    value.starts_with("https://") || value.starts_with("http://")
}

fn find_in_embedded_state(html: &str) -> Option<String> {
    let starts = STATE_ASSIGNMENT
        .find_iter(html)
        .map(|m| m.end())
        .chain(STATE_FRAGMENT.find_iter(html).map(|m| m.start()));

    starts
        .filter_map(|start| parse_leading_json(&html[start..]))
        .find_map(|state| search_value(&state, false))
}

/// Parses the JSON value at the start of `text`, ignoring whatever follows.
fn parse_leading_json(text: &str) -> Option<Value> {
    let cleaned = UNDEFINED.replace_all(text, ":null");
    let mut values = serde_json::Deserializer::from_str(&cleaned).into_iter::<Value>();

    match values.next() {
        Some(Ok(value @ Value::Object(_))) => Some(value),
        Some(Err(e)) => {
            tracing::debug!(error = %e, "embedded_state_unparseable");
            None
        }
        _ => None,
    }
}

fn search_value(value: &Value, in_media: bool) -> Option<String> {
    match value {
        Value::Object(map) => map.iter().find_map(|(key, value)| {
            let keyed = MEDIA_KEYS.contains(&key.as_str())
                || (in_media && NESTED_URL_KEYS.contains(&key.as_str()));
            if keyed {
                if let Some(found) = first_address(value) {
                    return Some(found);
                }
            }
            let lower = key.to_lowercase();
            let nested_media = in_media
                || lower.contains("video")
                || lower.contains("media")
                || lower.contains("stream");
            search_value(value, nested_media)
        }),
        Value::Array(items) => items.iter().find_map(|item| search_value(item, in_media)),
        _ => None,
    }
}

fn first_address(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if is_address(s) && is_plausible_media(s) => Some(s.clone()),
        Value::Array(items) => items.iter().find_map(first_address),
        _ => None,
    }
}

fn find_by_keyed_pattern(html: &str) -> Option<String> {
    KEYED.iter().find_map(|pattern| {
        pattern
            .captures_iter(html)
            .filter_map(|caps| caps.get(1))
            .map(|m| m.as_str())
            .find(|candidate| is_plausible_media(candidate))
            .map(str::to_string)
    })
}

fn find_by_link_scan(html: &str) -> Option<String> {
    let links: Vec<&str> = LINK.find_iter(html).map(|m| m.as_str()).collect();

    let not_static = |link: &&str| {
        let lower = link.to_lowercase();
        !NON_MEDIA_EXTENSIONS.iter().any(|ext| lower.contains(ext))
    };

    links
        .iter()
        .copied()
        .filter(not_static)
        .find(|link| {
            let lower = link.to_lowercase();
            !["icon", "logo", "image"].iter().any(|kw| lower.contains(kw))
                && MEDIA_KEYWORDS.iter().any(|kw| lower.contains(kw))
        })
        .or_else(|| {
            links.iter().copied().filter(not_static).find(|link| {
                let lower = link.to_lowercase();
                lower.contains("xhscdn") || lower.contains("video")
            })
        })
        .map(|link| link.to_string())
}

#[cfg(test)]
mod tests {
    use indoc::indoc;

    use super::*;

    #[test]
    fn test_embedded_state() {
        let html = indoc! {r#"
            <html><head><script>
            window.__INITIAL_STATE__={"user":{"avatar":"https://sns-avatar.xhscdn.com/a.jpg","loggedIn":undefined},"note":{"video":{"media":{"stream":{"h264":[{"masterUrl":"https://sns-video-bd.xhscdn.com/stream/abc.mp4?sign=1"}]}}}}}
            </script></head></html>
        "#};

        assert_eq!(
            Strategy::EmbeddedState.find(html).as_deref(),
            Some("https://sns-video-bd.xhscdn.com/stream/abc.mp4?sign=1")
        );
        assert_eq!(
            resolve_media_url(html).unwrap(),
            "https://sns-video-bd.xhscdn.com/stream/abc.mp4"
        );
    }

    #[test]
    fn test_embedded_state_ignores_unrelated_urls() {
        let html = r#"window.__INITIAL_STATE__={"share":{"url":"https://www.xiaohongshu.com/explore/1"},"video":{"url":"https://sns-video-al.xhscdn.com/v/1"}};"#;
        assert_eq!(
            Strategy::EmbeddedState.find(html).as_deref(),
            Some("https://sns-video-al.xhscdn.com/v/1")
        );
    }

    #[test]
    fn test_keyed_pattern() {
        let html = indoc! {r#"
            <script>var cfg = {"videoUrl": "https://cdn.example.com/logo.png"};</script>
            <script>var note = {"videoUrl": "https:\/\/sns-video-hw.xhscdn.com\/abc.mp4?a=1&b=2"};</script>
        "#};

        assert_eq!(Strategy::EmbeddedState.find(html), None);
        assert_eq!(
            resolve_media_url(html).unwrap(),
            "https://sns-video-hw.xhscdn.com/abc.mp4"
        );
    }

    #[test]
    fn test_link_scan() {
        let html = indoc! {r#"
            <a href="https://www.xiaohongshu.com/explore">explore</a>
            <img src="https://sns-img.xhscdn.com/icon.png">
            <source src="https://media.example.com/play/abc">
        "#};

        assert_eq!(Strategy::KeyedPattern.find(html), None);
        assert_eq!(
            resolve_media_url(html).unwrap(),
            "https://media.example.com/play/abc"
        );
    }

    #[test]
    fn test_link_scan_falls_back_to_cdn_links() {
        let html = r#"<a href="https://sns-na.xhscdn.com/abc">x</a>"#;
        assert_eq!(
            Strategy::LinkScan.find(html).as_deref(),
            Some("https://sns-na.xhscdn.com/abc")
        );
    }

    #[test]
    fn test_not_found() {
        let html = r#"<html><body><img src="https://sns-img.xhscdn.com/logo.png">nothing</body></html>"#;
        assert!(matches!(resolve_media_url(html), Err(Error::MediaNotFound)));
        assert!(matches!(resolve_media_url(""), Err(Error::MediaNotFound)));
    }

    #[test]
    fn test_clean_media_url() {
        assert_eq!(
            clean_media_url(r"https:\/\/a.com\/v.mp4?x=1&y=2"),
            "https://a.com/v.mp4"
        );
        assert_eq!(clean_media_url("https://a.com/v"), "https://a.com/v");
    }
}
