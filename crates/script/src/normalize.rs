use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::segment::{SPACED_PUNCTUATION, fold_whitespace, sentences_with_breaks};

pub const PARAGRAPH_SEPARATOR: &str = "\n\n";

const SENTENCES_PER_PARAGRAPH: usize = 6;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedScript {
    pub paragraphs: Vec<String>,
    pub raw: String,
}

impl NormalizedScript {
    fn from_paragraphs(paragraphs: Vec<String>) -> Self {
        let raw = paragraphs.join(PARAGRAPH_SEPARATOR);
        Self { paragraphs, raw }
    }

    pub fn is_empty(&self) -> bool {
        self.paragraphs.is_empty()
    }
}

/// Cleans a transcript into paragraphs of at most six sentences.
///
/// Total and idempotent: feeding `raw` back in yields the same script.
pub fn normalize(text: &str) -> NormalizedScript {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return NormalizedScript::default();
    }

    let unified = trimmed.replace("\r\n", "\n").replace('\r', "\n");
    let spaced = space_after_punctuation(&collapse_blanks(&unified));

    let paragraphs = dedup_paragraphs(
        sentences_with_breaks(&spaced)
            .chunks(SENTENCES_PER_PARAGRAPH)
            .map(|chunk| chunk.join(" "))
            .collect(),
    );

    if paragraphs.is_empty() {
        tracing::warn!(
            chars = trimmed.chars().count(),
            "normalization_lost_content"
        );
        return NormalizedScript::from_paragraphs(vec![fold_whitespace(trimmed)]);
    }

    NormalizedScript::from_paragraphs(paragraphs)
}

fn collapse_blanks(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_run = false;

    for c in text.chars() {
        if c == ' ' || c == '\t' {
            if !in_run {
                out.push(' ');
            }
            in_run = true;
        } else {
            out.push(c);
            in_run = false;
        }
    }

    out
}

fn space_after_punctuation(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + text.len() / 4);
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        out.push(c);
        if SPACED_PUNCTUATION.contains(&c) && chars.peek() != Some(&' ') {
            out.push(' ');
        }
    }

    out
}

fn dedup_paragraphs(paragraphs: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    paragraphs
        .into_iter()
        .filter(|p| !p.is_empty() && seen.insert(p.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_input() {
        assert_eq!(normalize(""), NormalizedScript::default());
        assert_eq!(normalize(" \r\n\t "), NormalizedScript::default());
        assert!(normalize("\n\n").is_empty());
    }

    #[test]
    fn test_spacing_after_punctuation() {
        let script = normalize("大家好，欢迎来到我的频道！");
        assert_eq!(script.paragraphs, vec!["大家好， 欢迎来到我的频道！"]);
        assert_eq!(script.raw, "大家好， 欢迎来到我的频道！");
    }

    #[test]
    fn test_enumeration_comma_is_spaced_but_not_split() {
        let script = normalize("苹果、香蕉和橙子。");
        assert_eq!(script.raw, "苹果、 香蕉和橙子。");
    }

    #[test]
    fn test_line_breaks_and_blanks() {
        let script = normalize("  hello\t\tworld.\r\nfoo   bar\rbaz  ");
        assert_eq!(script.raw, "hello world. foo bar baz");
    }

    #[test]
    fn test_groups_six_sentences_per_paragraph() {
        let script = normalize("一。二。三。四。五。六。七。");
        assert_eq!(
            script.paragraphs,
            vec!["一。 二。 三。 四。 五。 六。", "七。"]
        );
        assert_eq!(script.raw, "一。 二。 三。 四。 五。 六。\n\n七。");
    }

    #[test]
    fn test_duplicate_paragraphs_are_dropped() {
        let block = "一。二。三。四。五。六。";
        let script = normalize(&format!("{block}\n{block}\n七。"));
        assert_eq!(
            script.paragraphs,
            vec!["一。 二。 三。 四。 五。 六。", "七。"]
        );
    }

    #[test]
    fn test_normalizing_twice_is_stable() {
        let once = normalize("今天分享一个技巧，首先打开设置。然后\n\n选择 高级 选项!最后 保存");
        assert_eq!(normalize(&once.raw), once);
    }

    #[quickcheck_macros::quickcheck]
    fn prop_idempotent(text: String) -> bool {
        let once = normalize(&text);
        normalize(&once.raw) == once
    }

    #[quickcheck_macros::quickcheck]
    fn prop_no_empty_paragraphs(text: String) -> bool {
        let script = normalize(&text);
        script.paragraphs.iter().all(|p| !p.trim().is_empty())
            && script.raw == script.paragraphs.join(PARAGRAPH_SEPARATOR)
    }

    #[quickcheck_macros::quickcheck]
    fn prop_keeps_content_of_non_blank_input(text: String) -> bool {
        text.trim().is_empty() || !normalize(&text).is_empty()
    }
}
