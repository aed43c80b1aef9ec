use std::path::Path;

use crate::input;

pub fn run(file: &Path) -> anyhow::Result<()> {
    let html = input::read_text(file)?;
    let media_url = hypr_share_link::resolve_media_url(&html)?;

    input::print_json(&serde_json::json!({ "media_url": media_url }))
}
