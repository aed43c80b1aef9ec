use std::sync::LazyLock;

use regex::Regex;

/// Clause and sentence terminators, wide and ASCII.
pub const SENTENCE_BREAKS: &[char] = &[
    '，', '。', '！', '？', '；', '：', ',', '.', '!', '?', ':', ';',
];

/// Punctuation followed by a single space in normalized text.
pub const SPACED_PUNCTUATION: &[char] = &[
    '，', '。', '！', '？', '；', '：', '、', ',', '.', '!', '?', ':', ';',
];

static CJK_OR_LATIN_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\u{4e00}-\u{9fa5}]+|[a-zA-Z]+").unwrap());

static WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\w+").unwrap());

pub fn is_sentence_break(c: char) -> bool {
    SENTENCE_BREAKS.contains(&c)
}

/// Trimmed, non-empty sentences with their terminators removed.
pub fn sentences(text: &str) -> Vec<&str> {
    text.split(is_sentence_break)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Sentences with their terminators kept and interior whitespace folded.
pub fn sentences_with_breaks(text: &str) -> Vec<String> {
    text.split_inclusive(is_sentence_break)
        .map(fold_whitespace)
        .filter(|s| !s.is_empty())
        .collect()
}

pub fn fold_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Runs of CJK ideographs or Latin letters.
pub fn cjk_or_latin_runs(text: &str) -> usize {
    CJK_OR_LATIN_RUN.find_iter(text).count()
}

pub fn words(text: &str) -> Vec<&str> {
    WORD.find_iter(text).map(|m| m.as_str()).collect()
}

pub(crate) fn contains_any(text: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| text.contains(needle))
}

pub(crate) fn count_present(text: &str, needles: &[&str]) -> usize {
    needles.iter().filter(|needle| text.contains(*needle)).count()
}
