use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::Label;
use super::keywords::*;
use crate::segment::{contains_any, sentences};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display, strum::AsRefStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum OrganizationTag {
    OrderedSteps,
    EmphasisHeavy,
    ExampleDriven,
}

impl Label for OrganizationTag {
    fn label(&self) -> &'static str {
        match self {
            Self::OrderedSteps => "步骤顺序",
            Self::EmphasisHeavy => "重点突出",
            Self::ExampleDriven => "案例辅助",
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display, strum::AsRefStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum EmphasisTag {
    Direct,
    Repetition,
}

impl Label for EmphasisTag {
    fn label(&self) -> &'static str {
        match self {
            Self::Direct => "直接强调",
            Self::Repetition => "重复强调",
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
pub enum Pace {
    Slow,
    #[default]
    Medium,
    Fast,
}

impl Label for Pace {
    fn label(&self) -> &'static str {
        match self {
            Self::Slow => "缓慢从容",
            Self::Medium => "适中平稳",
            Self::Fast => "快速紧凑",
        }
    }
}

impl Pace {
    pub fn from_sentence_count(count: usize) -> Self {
        match count {
            0..5 => Self::Slow,
            5..=15 => Self::Medium,
            _ => Self::Fast,
        }
    }
}

/// Each lead phrase followed by the rest of its clause.
static KEY_POINTS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    KEY_POINT_LEADS
        .iter()
        .map(|lead| Regex::new(&format!(r"{lead}[^，。！？；：,.!?:;]*")).unwrap())
        .collect()
});

#[derive(Debug, Clone, PartialEq)]
pub struct OrganizationFacet {
    pub tags: Vec<OrganizationTag>,
    pub key_points: Vec<String>,
    pub emphasis_tags: Vec<EmphasisTag>,
    pub pace: Pace,
}

pub fn analyze_organization(script: &str) -> OrganizationFacet {
    let tags = [
        (OrganizationTag::OrderedSteps, ORDERED_STEPS),
        (OrganizationTag::EmphasisHeavy, EMPHASIS_HEAVY),
        (OrganizationTag::ExampleDriven, EXAMPLE_DRIVEN),
    ]
    .into_iter()
    .filter(|(_, cues)| contains_any(script, cues))
    .map(|(tag, _)| tag)
    .collect();

    let emphasis_tags = [
        (EmphasisTag::Direct, DIRECT_EMPHASIS),
        (EmphasisTag::Repetition, REPETITION),
    ]
    .into_iter()
    .filter(|(_, cues)| contains_any(script, cues))
    .map(|(tag, _)| tag)
    .collect();

    OrganizationFacet {
        tags,
        key_points: key_points(script),
        emphasis_tags,
        pace: Pace::from_sentence_count(sentences(script).len()),
    }
}

fn key_points(script: &str) -> Vec<String> {
    let mut points: Vec<String> = Vec::new();

    for pattern in KEY_POINTS.iter() {
        for m in pattern.find_iter(script) {
            let point = m.as_str().trim();
            if !points.iter().any(|p| p == point) {
                points.push(point.to_string());
            }
        }
    }

    points
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags_and_emphasis() {
        let facet = analyze_organization("第一步要注意安全，比如戴好手套。记住，一定要慢。");
        assert_eq!(
            facet.tags,
            vec![
                OrganizationTag::OrderedSteps,
                OrganizationTag::EmphasisHeavy,
                OrganizationTag::ExampleDriven
            ]
        );
        assert_eq!(facet.emphasis_tags, vec![EmphasisTag::Direct]);
    }

    #[test]
    fn test_key_points() {
        let facet = analyze_organization("重点是保持干燥，这款真的很好用。推荐给新手");
        assert_eq!(
            facet.key_points,
            vec!["重点是保持干燥", "推荐给新手", "好用"]
        );
    }

    #[test]
    fn test_pace() {
        assert_eq!(Pace::from_sentence_count(0), Pace::Slow);
        assert_eq!(Pace::from_sentence_count(4), Pace::Slow);
        assert_eq!(Pace::from_sentence_count(5), Pace::Medium);
        assert_eq!(Pace::from_sentence_count(15), Pace::Medium);
        assert_eq!(Pace::from_sentence_count(16), Pace::Fast);
        assert_eq!(analyze_organization("一，二，三，四，五，六").pace, Pace::Medium);
    }
}
