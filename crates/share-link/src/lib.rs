mod error;
mod extract;
mod resolve;

pub use error::Error;
pub use extract::{SUPPORTED_HOSTS, extract_share_url, is_supported_host, parse_share_link};
pub use resolve::{Strategy, clean_media_url, resolve_media_url};
