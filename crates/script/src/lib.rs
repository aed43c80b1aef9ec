mod error;
mod export;
mod normalize;
mod product;
mod segment;
mod synthesize;
mod validate;

pub mod style;

pub use error::Error;
pub use export::{EXPORT_SOURCE, EXPORT_TITLE, ExportFormat, render};
pub use normalize::{NormalizedScript, PARAGRAPH_SEPARATOR, normalize};
pub use product::ProductFacts;
pub use segment::{SENTENCE_BREAKS, sentences};
pub use style::{StyleFingerprint, analyze};
pub use synthesize::{synthesize, synthesize_unseeded};
pub use validate::{ValidationReport, validate};

use serde::Serialize;

/// A cleaned transcript together with its quality verdict.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CleanedScript {
    pub script: NormalizedScript,
    pub validation: ValidationReport,
}

/// Normalizes a raw transcript and scores the result.
pub fn clean(raw: &str) -> CleanedScript {
    let script = normalize(raw);
    let validation = validate(&script.raw);

    tracing::info!(
        paragraphs = script.paragraphs.len(),
        quality_score = validation.quality_score,
        is_valid = validation.is_valid,
        "transcript_cleaned"
    );

    CleanedScript { script, validation }
}

/// Normalizes a reference script and fingerprints its style.
pub fn analyze_reference(raw: &str) -> (NormalizedScript, StyleFingerprint) {
    let script = normalize(raw);
    let fingerprint = analyze(&script.raw);
    (script, fingerprint)
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::style::{BodyStructure, Tone};

    #[test]
    fn test_clean_flags_synthetic_transcript() {
        let cleaned = clean("这是一段模拟的转写结果，用于测试流程是否正常工作。");
        assert!(!cleaned.validation.is_valid);
        assert_eq!(cleaned.script.paragraphs.len(), 1);
    }

    #[test]
    fn test_reference_to_new_script() {
        let reference = "姐妹们，这个真的太好用了！首先打开盖子，然后倒入清水，最后按下按钮就可以了。";
        let (_, fingerprint) = analyze_reference(reference);
        assert_eq!(fingerprint.tone, Tone::Recommendation);
        assert!(fingerprint.has_body(BodyStructure::StepWise));

        let facts = ProductFacts::from_brief("产品名称：便携榨汁杯\n核心功能：无线充电\n卖点：十秒出汁");
        let script = synthesize(&fingerprint, &facts, &mut StdRng::seed_from_u64(1));

        assert!(script.contains("便携榨汁杯的核心功能是无线充电"));
        assert!(script.contains("它的最大卖点是十秒出汁"));
        assert!(validate(&script).is_valid);
    }
}
