use std::path::Path;

use anyhow::Context;

/// Loads workflow settings from `.env` files and the process environment.
pub fn load() -> anyhow::Result<hypr_coze::Env> {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    let _ = dotenvy::from_path(manifest_dir.join(".env"));
    let _ = dotenvy::dotenv();

    envy::from_env().context("failed to read COZE_* environment")
}

pub fn client() -> anyhow::Result<hypr_coze::CozeClient> {
    let env = load()?;
    hypr_coze::CozeClient::from_env(&env).context("workflow client is not configured")
}
