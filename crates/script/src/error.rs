#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("nothing to export: script is empty")]
    EmptyScript,
    #[error("failed to serialize export: {0}")]
    Serialize(#[from] serde_json::Error),
}
