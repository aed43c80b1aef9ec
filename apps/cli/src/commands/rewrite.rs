use std::path::Path;

use serde::Serialize;

use hypr_coze::WorkflowRequest;
use hypr_script::{NormalizedScript, ValidationReport};

use crate::{env, input};

#[derive(Serialize)]
struct Rewritten {
    original_script: String,
    rewritten_script: NormalizedScript,
    validation: ValidationReport,
}

pub async fn run(
    file: &Path,
    video_url: Option<String>,
    workflow_id: Option<String>,
    max_retries: Option<usize>,
) -> anyhow::Result<()> {
    let original = input::read_text(file)?;
    if original.trim().is_empty() {
        anyhow::bail!("script to rewrite is empty");
    }

    let client = env::client()?;
    let workflow_id = workflow_id.unwrap_or_else(|| client.workflow_id().to_string());
    let max_retries = max_retries.unwrap_or(client.retry_config().max_retries);

    let mut request = WorkflowRequest::new(workflow_id, original.trim());
    if let Some(video_url) = video_url {
        request = request.parameter("video_url", video_url);
    }

    let rewritten = client.run(&request, max_retries).await?;
    let cleaned = hypr_script::clean(&rewritten.text);

    input::print_json(&Rewritten {
        original_script: original.trim().to_string(),
        rewritten_script: cleaned.script,
        validation: cleaned.validation,
    })
}
