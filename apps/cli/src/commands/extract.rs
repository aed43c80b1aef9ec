use anyhow::Context;
use serde::Serialize;

use hypr_coze::TranscriptSource;
use hypr_script::{NormalizedScript, ValidationReport};

use crate::{env, input};

#[derive(Serialize)]
struct Extracted {
    url: String,
    script: NormalizedScript,
    validation: ValidationReport,
    source: TranscriptSource,
}

pub async fn run(text: &str, max_retries: Option<usize>) -> anyhow::Result<()> {
    let url = hypr_share_link::parse_share_link(text).context("no usable share link")?;
    tracing::info!(url = %url, "share_link_parsed");

    let client = env::client()?;
    let max_retries = max_retries.unwrap_or(client.retry_config().max_retries);
    let transcript = client.fetch(url.as_str(), max_retries).await?;

    let cleaned = hypr_script::clean(&transcript.text);
    if !cleaned.validation.is_valid {
        tracing::warn!(
            issues = ?cleaned.validation.issues,
            "extracted_script_failed_validation"
        );
    }

    input::print_json(&Extracted {
        url: url.to_string(),
        script: cleaned.script,
        validation: cleaned.validation,
        source: transcript.source,
    })
}
