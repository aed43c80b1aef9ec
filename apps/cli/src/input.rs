use std::io::Read;
use std::path::Path;

use anyhow::Context;

use hypr_script::ProductFacts;

/// Reads a text file, or stdin when the path is `-`.
pub fn read_text(path: &Path) -> anyhow::Result<String> {
    if path.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("failed to read stdin")?;
        return Ok(text);
    }

    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

/// Product facts from inline JSON, or from a JSON file.
pub fn read_product(arg: &str) -> anyhow::Result<ProductFacts> {
    let json = if arg.trim_start().starts_with('{') {
        arg.to_string()
    } else {
        read_text(Path::new(arg))?
    };

    serde_json::from_str(&json).context("invalid product JSON")
}

pub fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_read_product_inline() {
        let facts = read_product(r#"{"name": "X", "core_features": ["A"]}"#).unwrap();
        assert_eq!(facts.name.as_deref(), Some("X"));
        assert_eq!(facts.core_features, vec!["A"]);
    }

    #[test]
    fn test_read_product_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"product_name": "Y", "price_info": "99元"}}"#).unwrap();

        let facts = read_product(file.path().to_str().unwrap()).unwrap();
        assert_eq!(facts.name.as_deref(), Some("Y"));
        assert_eq!(facts.price.as_deref(), Some("99元"));
    }

    #[test]
    fn test_read_missing_file() {
        assert!(read_text(Path::new("/nonexistent/transcript.txt")).is_err());
    }
}
