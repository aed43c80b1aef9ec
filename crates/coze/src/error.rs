#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("{}", format_remote_call(.status, .message))]
    RemoteCall {
        status: Option<u16>,
        message: String,
    },

    #[error("workflow returned no content")]
    EmptyResult,
}

fn format_remote_call(status: &Option<u16>, message: &str) -> String {
    match status {
        Some(status) => format!("workflow call failed with status {status}: {message}"),
        None => format!("workflow call failed: {message}"),
    }
}

impl Error {
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::RemoteCall { status, .. } => *status,
            _ => None,
        }
    }
}
