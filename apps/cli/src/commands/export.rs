use std::path::Path;

use anyhow::Context;

use hypr_script::ExportFormat;

use crate::input;

pub fn run(file: &Path, format: ExportFormat, output: Option<&Path>) -> anyhow::Result<()> {
    let script = input::read_text(file)?;
    let document = hypr_script::render(&script, format, chrono::Utc::now())?;

    match output {
        Some(path) => {
            std::fs::write(path, &document)
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), format = %format, "script_exported");
        }
        None => println!("{document}"),
    }

    Ok(())
}
