use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// What is known about the product a new script is written for. Every field
/// may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductFacts {
    #[serde(alias = "product_name", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub core_features: Vec<String>,
    pub selling_points: Vec<String>,
    pub target_audience: Vec<String>,
    pub usage_scenarios: Vec<String>,
    pub promotion_needs: Vec<String>,
    pub competitive_advantages: Vec<String>,
    #[serde(alias = "price_info", skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
}

const CLAUSE: &str = r"[^\n，。！？；：]+";

fn labelled(label: &str) -> String {
    format!(r"{label}[:：]\s*({CLAUSE})")
}

fn cue(word: &str) -> String {
    format!(r"{word}({CLAUSE})")
}

fn compile(patterns: Vec<String>) -> Vec<Regex> {
    patterns
        .iter()
        .map(|pattern| Regex::new(pattern).unwrap())
        .collect()
}

static NAME: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(vec![
        r"产品名称[:：]\s*(.*?)(?:[\n，。！？；：]|$)".to_string(),
        r"品牌[:：]\s*(.*?)(?:[\n，。！？；：]|$)".to_string(),
        r"名称[:：]\s*(.*?)(?:[\n，。！？；：]|$)".to_string(),
        r"([^\s，。！？；：]+)\s*是\s*[一款种].*?产品".to_string(),
    ])
});

static FEATURES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(vec![
        labelled("功能"),
        labelled("特点"),
        labelled("核心功能"),
        labelled("主要功能"),
        cue("支持"),
        cue("可以"),
        cue("能够"),
    ])
});

static SELLING_POINTS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(vec![
        labelled("卖点"),
        labelled("优势"),
        labelled("好处"),
        labelled("价值"),
        cue("值得"),
        cue("推荐"),
    ])
});

static AUDIENCE: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(vec![
        labelled("目标用户"),
        cue("适合"),
        cue("针对"),
        cue("面向"),
        labelled("受众"),
    ])
});

static PROMOTION: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(vec![
        labelled("宣传需求"),
        labelled("营销目标"),
        labelled("推广重点"),
        cue("需要"),
        cue("希望"),
    ])
});

static SCENARIOS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(vec![
        labelled("使用场景"),
        labelled("适用场景"),
        labelled("场景"),
        r"(在[^\n，。！？；：]*?时使用)".to_string(),
        r"(适合在[^\n，。！？；：]*?使用)".to_string(),
    ])
});

static ADVANTAGES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(vec![
        labelled("竞争优势"),
        format!(r"相比[^\n]*?优势[:：]\s*({CLAUSE})"),
        cue("优于"),
        format!(r"比[^\n，。！？；：]*?更({CLAUSE})"),
    ])
});

static PRICE: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(vec![
        labelled("价格"),
        labelled("售价"),
        labelled("定价"),
        r"(\d+\.?\d*\s*元)".to_string(),
    ])
});

impl ProductFacts {
    /// Extracts facts from a free-text product brief.
    ///
    /// Labelled fields (`卖点：…`) and looser cues (`支持…`, `适合…`) are both
    /// collected; list entries keep their first-seen order without repeats.
    pub fn from_brief(text: &str) -> Self {
        let facts = Self {
            name: first_capture(&NAME, text),
            core_features: all_captures(&FEATURES, text),
            selling_points: all_captures(&SELLING_POINTS, text),
            target_audience: all_captures(&AUDIENCE, text),
            usage_scenarios: all_captures(&SCENARIOS, text),
            promotion_needs: all_captures(&PROMOTION, text),
            competitive_advantages: all_captures(&ADVANTAGES, text),
            price: first_capture(&PRICE, text),
        };

        tracing::debug!(
            has_name = facts.name.is_some(),
            features = facts.core_features.len(),
            selling_points = facts.selling_points.len(),
            "brief_parsed"
        );

        facts
    }

    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("新产品")
    }
}

fn first_capture(patterns: &[Regex], text: &str) -> Option<String> {
    patterns.iter().find_map(|pattern| {
        pattern
            .captures_iter(text)
            .filter_map(|caps| caps.get(1))
            .map(|m| m.as_str().trim().to_string())
            .find(|value| !value.is_empty())
    })
}

fn all_captures(patterns: &[Regex], text: &str) -> Vec<String> {
    let mut values: Vec<String> = Vec::new();

    for pattern in patterns {
        for caps in pattern.captures_iter(text) {
            let Some(m) = caps.get(1) else {
                continue;
            };
            let value = m.as_str().trim();
            if !value.is_empty() && !values.iter().any(|v| v == value) {
                values.push(value.to_string());
            }
        }
    }

    values
}
