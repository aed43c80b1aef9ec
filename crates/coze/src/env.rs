use serde::{Deserialize, Deserializer};

/// Workflow settings read from the process environment.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Env {
    #[serde(default, deserialize_with = "filter_empty")]
    pub coze_api_key: Option<String>,
    #[serde(default, deserialize_with = "filter_empty")]
    pub coze_workflow_id: Option<String>,
    #[serde(default, deserialize_with = "filter_empty")]
    pub coze_api_base: Option<String>,
    #[serde(default)]
    pub coze_max_retries: Option<usize>,
}

pub fn filter_empty<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_values_are_unset() {
        let env: Env = serde_json::from_value(serde_json::json!({
            "coze_api_key": "  ",
            "coze_workflow_id": "123",
        }))
        .unwrap();

        assert_eq!(env.coze_api_key, None);
        assert_eq!(env.coze_workflow_id.as_deref(), Some("123"));
        assert_eq!(env.coze_max_retries, None);
    }
}
