//! Stylistic fingerprinting of a spoken script.
//!
//! Four independent facets (tone, narrative, organization, emotion) each
//! read the script on their own; [`analyze`] merges them and adds a summary.

mod emotion;
mod keywords;
mod narrative;
mod organization;
mod summary;
mod tone;

use serde::{Deserialize, Serialize};

pub use emotion::{EmotionFacet, ExpressionTag, Intensity, Sentiment, analyze_emotion};
pub use narrative::{BodyStructure, NarrativeFacet, analyze_narrative};
pub use organization::{EmphasisTag, OrganizationFacet, OrganizationTag, Pace, analyze_organization};
pub use summary::summarize;
pub use tone::{FeatureTag, ScriptStats, StyleTag, Tone, ToneFacet, analyze_tone};

/// Human-readable name of a tag, as used in summaries.
pub trait Label {
    fn label(&self) -> &'static str;
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleFingerprint {
    pub tone: Tone,
    pub style_tags: Vec<StyleTag>,
    pub feature_tags: Vec<FeatureTag>,
    pub stats: ScriptStats,

    pub opening: String,
    pub closing: String,
    pub narrative_body: Vec<BodyStructure>,
    pub transitions: Vec<String>,

    pub organization_tags: Vec<OrganizationTag>,
    pub key_points: Vec<String>,
    pub emphasis_tags: Vec<EmphasisTag>,
    pub pace: Pace,

    pub sentiment: Sentiment,
    pub expression_tags: Vec<ExpressionTag>,
    pub intensity: Intensity,

    pub summary: String,
}

impl StyleFingerprint {
    pub fn has_body(&self, structure: BodyStructure) -> bool {
        self.narrative_body.contains(&structure)
    }
}

pub fn analyze(script: &str) -> StyleFingerprint {
    let ToneFacet {
        tone,
        style_tags,
        feature_tags,
        stats,
    } = analyze_tone(script);
    let NarrativeFacet {
        opening,
        closing,
        body,
        transitions,
    } = analyze_narrative(script);
    let OrganizationFacet {
        tags,
        key_points,
        emphasis_tags,
        pace,
    } = analyze_organization(script);
    let EmotionFacet {
        sentiment,
        expression_tags,
        intensity,
    } = analyze_emotion(script);

    let mut fingerprint = StyleFingerprint {
        tone,
        style_tags,
        feature_tags,
        stats,
        opening,
        closing,
        narrative_body: body,
        transitions,
        organization_tags: tags,
        key_points,
        emphasis_tags,
        pace,
        sentiment,
        expression_tags,
        intensity,
        summary: String::new(),
    };
    fingerprint.summary = summarize(&fingerprint);

    tracing::debug!(
        tone = %fingerprint.tone,
        pace = %fingerprint.pace,
        intensity = %fingerprint.intensity,
        "script_analyzed"
    );

    fingerprint
}
