use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use crate::error::Error;

pub const EXPORT_TITLE: &str = "小红书口播文案";
pub const EXPORT_SOURCE: &str = "小红书视频";

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ExportFormat {
    #[default]
    Txt,
    Json,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Txt => "txt",
            Self::Json => "json",
        }
    }

    pub fn media_type(&self) -> &'static str {
        match self {
            Self::Txt => "text/plain",
            Self::Json => "application/json",
        }
    }

    pub fn file_name(&self) -> String {
        format!("{EXPORT_TITLE}.{}", self.extension())
    }
}

#[derive(Debug, Serialize)]
struct ExportDocument<'a> {
    title: &'a str,
    content: &'a str,
    timestamp: String,
    source: &'a str,
}

/// Renders a script as the contents of an export file.
pub fn render(script: &str, format: ExportFormat, timestamp: DateTime<Utc>) -> Result<String, Error> {
    if script.trim().is_empty() {
        return Err(Error::EmptyScript);
    }

    match format {
        ExportFormat::Txt => Ok(script.to_string()),
        ExportFormat::Json => {
            let document = ExportDocument {
                title: EXPORT_TITLE,
                content: script,
                timestamp: timestamp.to_rfc3339_opts(SecondsFormat::Secs, true),
                source: EXPORT_SOURCE,
            };
            Ok(serde_json::to_string_pretty(&document)?)
        }
    }
}
