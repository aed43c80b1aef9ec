use serde::{Deserialize, Serialize};

use super::Label;
use super::keywords::*;
use crate::segment::{contains_any, count_present};

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
pub enum Sentiment {
    Positive,
    Negative,
    #[default]
    Neutral,
}

impl Label for Sentiment {
    fn label(&self) -> &'static str {
        match self {
            Self::Positive => "积极正面",
            Self::Negative => "消极负面",
            Self::Neutral => "中性客观",
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display, strum::AsRefStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum ExpressionTag {
    PersonalExperience,
    Advisory,
    Surprise,
}

impl Label for ExpressionTag {
    fn label(&self) -> &'static str {
        match self {
            Self::PersonalExperience => "个人体验分享",
            Self::Advisory => "建议式表达",
            Self::Surprise => "惊讶式表达",
        }
    }
}

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
pub enum Intensity {
    Mild,
    #[default]
    Medium,
    Strong,
}

impl Label for Intensity {
    fn label(&self) -> &'static str {
        match self {
            Self::Mild => "温和",
            Self::Medium => "中等",
            Self::Strong => "强烈",
        }
    }
}

impl Intensity {
    pub fn from_intensifier_count(count: usize) -> Self {
        match count {
            0 => Self::Mild,
            1..=3 => Self::Medium,
            _ => Self::Strong,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EmotionFacet {
    pub sentiment: Sentiment,
    pub expression_tags: Vec<ExpressionTag>,
    pub intensity: Intensity,
}

/// Word presence tallies, not occurrence counts.
pub fn analyze_emotion(script: &str) -> EmotionFacet {
    let positive = count_present(script, POSITIVE);
    let negative = count_present(script, NEGATIVE);

    let sentiment = match positive.cmp(&negative) {
        std::cmp::Ordering::Greater => Sentiment::Positive,
        std::cmp::Ordering::Less => Sentiment::Negative,
        std::cmp::Ordering::Equal => Sentiment::Neutral,
    };

    let expression_tags = [
        (ExpressionTag::PersonalExperience, PERSONAL_EXPERIENCE),
        (ExpressionTag::Advisory, ADVISORY),
        (ExpressionTag::Surprise, SURPRISE),
    ]
    .into_iter()
    .filter(|(_, cues)| contains_any(script, cues))
    .map(|(tag, _)| tag)
    .collect();

    EmotionFacet {
        sentiment,
        expression_tags,
        intensity: Intensity::from_intensifier_count(count_present(script, INTENSIFIERS)),
    }
}
