use std::sync::LazyLock;

use regex::Regex;
use url::Url;

use crate::error::Error;

pub const SUPPORTED_HOSTS: &[&str] = &["xiaohongshu.com", "xhslink.com"];

/// A link inside share text ends at whitespace, markup delimiters or wide
/// punctuation.
static SHARE_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"https?://[^\s<>"{}|\\^`\[\]，。！？；：、]+"#).unwrap()
});

/// First link in a share blurb such as
/// `"【小红书】好物分享 http://xhslink.com/a/AbC，复制本条信息打开"`.
pub fn extract_share_url(text: &str) -> Option<&str> {
    SHARE_URL.find(text).map(|m| m.as_str())
}

pub fn is_supported_host(url: &Url) -> bool {
    let Some(host) = url.host_str() else {
        return false;
    };
    let host = host.to_ascii_lowercase();

    SUPPORTED_HOSTS.iter().any(|supported| {
        host == *supported
            || host
                .strip_suffix(supported)
                .is_some_and(|prefix| prefix.ends_with('.'))
    })
}

/// Extracts, parses and checks the link carried by share text. Text without
/// an embedded link is taken to be the link itself.
pub fn parse_share_link(text: &str) -> Result<Url, Error> {
    let candidate = extract_share_url(text).unwrap_or_else(|| text.trim());

    let url = Url::parse(candidate).map_err(|_| Error::InvalidUrl(candidate.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(Error::InvalidUrl(candidate.to_string()));
    }
    if !is_supported_host(&url) {
        return Err(Error::UnsupportedHost(
            url.host_str().unwrap_or_default().to_string(),
        ));
    }

    tracing::debug!(url = %url, "share_link_parsed");
    Ok(url)
}
