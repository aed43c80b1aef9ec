use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::segment::{cjk_or_latin_runs, sentences};

const MIN_LENGTH: usize = 10;
const SHORT_LENGTH: usize = 50;
const BRIEF_LENGTH: usize = 100;
const MIN_SENTENCES: usize = 2;
const MIN_WORDS: usize = 5;
const MIN_UNIQUE_LINE_RATIO: f64 = 0.5;

const SYNTHETIC_MARKERS: &[&str] = &["mock", "模拟"];

/// Leftovers of markup or recognizer annotations.
static FORMAT_MARKERS: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    [
        ("[..]", r"\[.*?\]"),
        ("{..}", r"\{.*?\}"),
        ("<..>", r"<.*?>"),
        ("(..)", r"\(.*?\)"),
        ("&nbsp;", r"&nbsp;"),
        ("&amp;", r"&amp;"),
        ("&lt;", r"&lt;"),
        ("&gt;", r"&gt;"),
    ]
    .into_iter()
    .map(|(label, pattern)| (label, Regex::new(pattern).unwrap()))
    .collect()
});

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub is_valid: bool,
    pub issues: Vec<String>,
    pub warnings: Vec<String>,
    pub quality_score: f64,
    pub text_length: usize,
    pub sentence_count: usize,
    pub word_count: usize,
}

/// Scores how usable an extracted transcript is.
///
/// Never fails; problems that make the text unusable land in `issues`,
/// softer ones in `warnings`. The score starts at 1.0, deductions add up
/// and the result is clamped to `[0, 1]`.
pub fn validate(text: &str) -> ValidationReport {
    let trimmed = text.trim();
    let text_length = trimmed.chars().count();

    if text_length == 0 {
        return ValidationReport {
            is_valid: false,
            issues: vec!["empty: no text was extracted".to_string()],
            warnings: Vec::new(),
            quality_score: 0.0,
            text_length: 0,
            sentence_count: 0,
            word_count: 0,
        };
    }

    let mut issues = Vec::new();
    let mut warnings = Vec::new();
    let mut score = 1.0_f64;

    if text_length < MIN_LENGTH {
        issues.push(format!(
            "too short: {text_length} chars, extraction probably failed"
        ));
    } else if text_length < SHORT_LENGTH {
        warnings.push(format!(
            "short text: {text_length} chars, check that it is complete"
        ));
    }

    if text_length < SHORT_LENGTH {
        score -= 0.3;
    } else if text_length < BRIEF_LENGTH {
        score -= 0.1;
    }

    let sentence_count = sentences(trimmed).len();
    if sentence_count < MIN_SENTENCES {
        warnings.push("few sentences, text may be incomplete".to_string());
        score -= 0.2;
    }

    let word_count = cjk_or_latin_runs(trimmed);
    if word_count < MIN_WORDS {
        warnings.push("few words".to_string());
    }

    let lines: Vec<&str> = trimmed
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    let unique_lines = lines.iter().collect::<HashSet<_>>().len();
    if !lines.is_empty() && (unique_lines as f64) / (lines.len() as f64) < MIN_UNIQUE_LINE_RATIO
    {
        warnings.push("many repeated lines".to_string());
        score -= 0.2;
    }

    for (label, pattern) in FORMAT_MARKERS.iter() {
        if pattern.is_match(trimmed) {
            warnings.push(format!("possible format marker: {label}"));
            score -= 0.1;
        }
    }

    let lowered = trimmed.to_lowercase();
    if SYNTHETIC_MARKERS.iter().any(|marker| lowered.contains(marker)) {
        issues.push("synthetic-data marker detected".to_string());
    }

    ValidationReport {
        is_valid: issues.is_empty(),
        issues,
        warnings,
        quality_score: round2(score.clamp(0.0, 1.0)),
        text_length,
        sentence_count,
        word_count,
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
