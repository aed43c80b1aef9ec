#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid share link: {0}")]
    InvalidUrl(String),
    #[error("unsupported host: {0}")]
    UnsupportedHost(String),
    #[error("no media address found in page")]
    MediaNotFound,
}
