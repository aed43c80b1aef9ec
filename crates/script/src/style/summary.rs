use super::{Label, StyleFingerprint};

const NARRATIVE_FRAME: &str = "开头-主体-结尾";

fn join_labels<T: Label>(tags: &[T], separator: &str) -> String {
    tags.iter()
        .map(Label::label)
        .collect::<Vec<_>>()
        .join(separator)
}

/// One line of prose over the primary findings of every facet.
pub fn summarize(fingerprint: &StyleFingerprint) -> String {
    let mut summary = format!("语言风格{}", fingerprint.tone.label());

    if !fingerprint.style_tags.is_empty() {
        summary.push('，');
        summary.push_str(&join_labels(&fingerprint.style_tags, "、"));
    }

    summary.push_str(&format!("。采用{NARRATIVE_FRAME}的叙事结构"));
    if !fingerprint.narrative_body.is_empty() {
        summary.push_str(&format!(
            "，主体部分为{}结构",
            join_labels(&fingerprint.narrative_body, "-")
        ));
    }

    if !fingerprint.organization_tags.is_empty() {
        summary.push_str(&format!(
            "。内容组织{}",
            join_labels(&fingerprint.organization_tags, "、")
        ));
    }
    summary.push_str(&format!("，节奏{}", fingerprint.pace.label()));

    summary.push_str(&format!(
        "。情感表达{}，强度{}。",
        fingerprint.sentiment.label(),
        fingerprint.intensity.label()
    ));

    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{BodyStructure, OrganizationTag, Pace, Tone};

    #[test]
    fn test_default_fingerprint() {
        insta::assert_snapshot!(summarize(&StyleFingerprint::default()), @"语言风格中性客观。采用开头-主体-结尾的叙事结构，节奏适中平稳。情感表达中性客观，强度中等。");
    }

    #[test]
    fn test_multiple_tags() {
        let fingerprint = StyleFingerprint {
            tone: Tone::Tutorial,
            narrative_body: vec![BodyStructure::StepWise, BodyStructure::Comparative],
            organization_tags: vec![OrganizationTag::OrderedSteps, OrganizationTag::ExampleDriven],
            pace: Pace::Fast,
            ..Default::default()
        };
        insta::assert_snapshot!(summarize(&fingerprint), @"语言风格教程指导。采用开头-主体-结尾的叙事结构，主体部分为步骤式-对比式结构。内容组织步骤顺序、案例辅助，节奏快速紧凑。情感表达中性客观，强度中等。");
    }
}
