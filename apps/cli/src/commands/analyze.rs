use std::path::Path;

use crate::input;

pub fn run(file: &Path) -> anyhow::Result<()> {
    let raw = input::read_text(file)?;
    let (script, fingerprint) = hypr_script::analyze_reference(&raw);
    if script.is_empty() {
        anyhow::bail!("reference script is empty");
    }

    input::print_json(&fingerprint)
}
