use serde::{Deserialize, Serialize};

use super::Label;
use super::keywords::*;
use crate::segment::contains_any;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display, strum::AsRefStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum BodyStructure {
    StepWise,
    ProsCons,
    Comparative,
    Narrative,
}

impl Label for BodyStructure {
    fn label(&self) -> &'static str {
        match self {
            Self::StepWise => "步骤式",
            Self::ProsCons => "优缺点分析",
            Self::Comparative => "对比式",
            Self::Narrative => "叙述式",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NarrativeFacet {
    pub opening: String,
    pub closing: String,
    pub body: Vec<BodyStructure>,
    pub transitions: Vec<String>,
}

pub fn analyze_narrative(script: &str) -> NarrativeFacet {
    let lines: Vec<&str> = script
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let opening_len = lines
        .iter()
        .take_while(|line| contains_any(line, OPENING_CUES))
        .count();

    let rest = &lines[opening_len..];
    let closing_len = rest
        .iter()
        .rev()
        .take_while(|line| contains_any(line, CLOSING_CUES))
        .count();

    let mut body: Vec<BodyStructure> = [
        (BodyStructure::StepWise, STEP_WISE),
        (BodyStructure::ProsCons, PROS_CONS),
        (BodyStructure::Comparative, COMPARATIVE),
    ]
    .into_iter()
    .filter(|(_, cues)| contains_any(script, cues))
    .map(|(tag, _)| tag)
    .collect();

    if body.is_empty() {
        body.push(BodyStructure::Narrative);
    }

    let transitions = ORDINAL_CONNECTORS
        .iter()
        .filter(|connector| script.contains(*connector))
        .map(|connector| connector.to_string())
        .collect();

    NarrativeFacet {
        opening: lines[..opening_len].join(" "),
        closing: rest[rest.len() - closing_len..].join(" "),
        body,
        transitions,
    }
}
