use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::Label;
use super::keywords::*;
use crate::segment::{contains_any, sentences, words};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::AsRefStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Tone {
    FriendlyGreeting,
    Recommendation,
    Tutorial,
    #[default]
    NeutralObjective,
}

impl Label for Tone {
    fn label(&self) -> &'static str {
        match self {
            Self::FriendlyGreeting => "友好亲切",
            Self::Recommendation => "推荐种草",
            Self::Tutorial => "教程指导",
            Self::NeutralObjective => "中性客观",
        }
    }
}

/// Sentence-length register.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display, strum::AsRefStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum StyleTag {
    Concise,
    Moderate,
    Detailed,
}

impl Label for StyleTag {
    fn label(&self) -> &'static str {
        match self {
            Self::Concise => "简洁明快",
            Self::Moderate => "适中流畅",
            Self::Detailed => "详细全面",
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display, strum::AsRefStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum FeatureTag {
    EmphaticWording,
    SubjectiveVoice,
    LogicalFlow,
}

impl Label for FeatureTag {
    fn label(&self) -> &'static str {
        match self {
            Self::EmphaticWording => "使用强调词",
            Self::SubjectiveVoice => "主观性表达",
            Self::LogicalFlow => "逻辑清晰",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScriptStats {
    pub sentence_count: usize,
    pub word_count: usize,
    /// Mean sentence length in chars.
    pub average_sentence_length: f64,
    pub vocabulary_diversity: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ToneFacet {
    pub tone: Tone,
    pub style_tags: Vec<StyleTag>,
    pub feature_tags: Vec<FeatureTag>,
    pub stats: ScriptStats,
}

pub fn analyze_tone(script: &str) -> ToneFacet {
    let tone = if contains_any(script, GREETING) {
        Tone::FriendlyGreeting
    } else if contains_any(script, RECOMMENDATION) {
        Tone::Recommendation
    } else if contains_any(script, TUTORIAL) {
        Tone::Tutorial
    } else {
        Tone::NeutralObjective
    };

    let stats = stats(script);

    let style = if stats.average_sentence_length < 10.0 {
        StyleTag::Concise
    } else if stats.average_sentence_length > 20.0 {
        StyleTag::Detailed
    } else {
        StyleTag::Moderate
    };

    let feature_tags = [
        (FeatureTag::EmphaticWording, EMPHATIC),
        (FeatureTag::SubjectiveVoice, SUBJECTIVE),
        (FeatureTag::LogicalFlow, ORDINAL_CONNECTORS),
    ]
    .into_iter()
    .filter(|(_, cues)| contains_any(script, cues))
    .map(|(tag, _)| tag)
    .collect();

    ToneFacet {
        tone,
        style_tags: vec![style],
        feature_tags,
        stats,
    }
}

fn stats(script: &str) -> ScriptStats {
    let sentences = sentences(script);
    let words = words(script);

    let chars: usize = sentences.iter().map(|s| s.chars().count()).sum();
    let distinct = words.iter().collect::<HashSet<_>>().len();

    ScriptStats {
        sentence_count: sentences.len(),
        word_count: words.len(),
        average_sentence_length: ratio(chars, sentences.len()),
        vocabulary_diversity: ratio(distinct, words.len()),
    }
}

fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        return 0.0;
    }
    let value = numerator as f64 / denominator as f64;
    (value * 100.0).round() / 100.0
}
