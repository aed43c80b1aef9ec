use rand::Rng;
use rand::seq::SliceRandom;

use crate::normalize::{PARAGRAPH_SEPARATOR, normalize};
use crate::product::ProductFacts;
use crate::segment::{contains_any, sentences_with_breaks};
use crate::style::{BodyStructure, Intensity, StyleFingerprint, Tone};

const EMPHASIS_WORDS: &[&str] = &["超级", "非常", "特别", "真的", "太", "极其", "绝对"];
const EMPHASIS_TRIGGERS: &[&str] = &["好用", "推荐", "喜欢", "实用"];
const MAX_EMPHASIZED: usize = 3;

const LIST_SEPARATOR: &str = "、";

/// Writes a new script for `facts` in the voice described by `fingerprint`.
///
/// `rng` only drives emphasis injection for strongly worded references, so a
/// seeded generator gives reproducible output.
pub fn synthesize<R: Rng + ?Sized>(
    fingerprint: &StyleFingerprint,
    facts: &ProductFacts,
    rng: &mut R,
) -> String {
    let name = facts.display_name();

    let mut body = body_sentences(fingerprint, facts, name);
    if let Some(price) = &facts.price {
        body.push(format!("关于价格方面，{name}的定价是{price}，性价比非常高。"));
    }

    if body.is_empty() {
        tracing::warn!(product = name, "no_body_sentences_using_generic_script");
        return normalize(&generic_script(facts)).raw;
    }

    let mut parts = Vec::with_capacity(body.len() + 2);
    parts.push(opening(fingerprint.tone, name));
    parts.extend(body);
    parts.push(closing(fingerprint.tone, name));

    if fingerprint.intensity == Intensity::Strong {
        parts = emphasize(parts, rng);
    }

    normalize(&parts.join(PARAGRAPH_SEPARATOR)).raw
}

pub fn synthesize_unseeded(fingerprint: &StyleFingerprint, facts: &ProductFacts) -> String {
    synthesize(fingerprint, facts, &mut rand::thread_rng())
}

fn opening(tone: Tone, name: &str) -> String {
    match tone {
        Tone::FriendlyGreeting => format!(
            "大家好，欢迎来到我的小红书频道！今天我要给大家分享一个超级实用的{name}，绝对是你生活中的必备神器！"
        ),
        Tone::Recommendation => format!(
            "姐妹们！今天必须给你们安利这款{name}，我已经用了一段时间，真的太好用了！"
        ),
        Tone::Tutorial => format!(
            "大家好，今天我要给大家带来{name}的详细使用教程，让你快速上手这款神器！"
        ),
        Tone::NeutralObjective => format!("大家好，今天我要给大家介绍{name}。"),
    }
}

fn closing(tone: Tone, name: &str) -> String {
    match tone {
        Tone::FriendlyGreeting => "好了，今天的分享就到这里，如果你们觉得有用的话，记得点赞收藏哦！有什么问题可以在评论区留言，我会一一回复的。我们下期再见，拜拜！".to_string(),
        Tone::Recommendation => "话不多说，这款产品我已经加入购物车了，链接我会放在评论区，想要的小伙伴们赶紧去看看吧！记得点赞收藏，手慢无哦！".to_string(),
        Tone::Tutorial => format!(
            "以上就是{name}的详细使用方法，希望对你们有所帮助。如果还有什么不明白的地方，可以在评论区留言，我会详细解答的。记得点赞收藏，我们下期再见！"
        ),
        Tone::NeutralObjective => "好了，今天的分享就到这里，希望对你们有所帮助。记得点赞收藏，我们下期再见！".to_string(),
    }
}

fn body_sentences(fingerprint: &StyleFingerprint, facts: &ProductFacts, name: &str) -> Vec<String> {
    let feature = facts.core_features.first();
    let selling = facts.selling_points.first();
    let scenario = facts.usage_scenarios.first();
    let audience = facts.target_audience.first();

    let mut body = Vec::new();

    if fingerprint.has_body(BodyStructure::StepWise) {
        if let Some(feature) = feature {
            body.push(format!("首先，{name}的核心功能是{feature}，这一点真的非常实用。"));
        }
        if let Some(selling) = selling {
            body.push(format!("然后，它的最大卖点是{selling}，相比其他产品有很大优势。"));
        }
        if let Some(scenario) = scenario {
            body.push(format!("接下来，它特别适合{scenario}，使用场景非常广泛。"));
        }
        if let Some(audience) = audience {
            body.push(format!("最后，这款产品特别适合{audience}，是你们的理想选择。"));
        }
    } else if fingerprint.has_body(BodyStructure::ProsCons) {
        if let Some(selling) = selling {
            body.push(format!("说到{name}的优点，首先是{selling}，这一点真的让我很惊喜。"));
        }
        if let Some(feature) = feature {
            body.push(format!("其次，它的{feature}功能也非常出色，使用起来特别方便。"));
        }
        if let Some(scenario) = scenario {
            body.push(format!("另外，它在{scenario}时使用效果最佳，场景适应性很强。"));
        }
    } else if fingerprint.has_body(BodyStructure::Comparative) {
        let advantage = selling.map(String::as_str).unwrap_or("性价比高");
        body.push(format!("相比市面上其他同类产品，{name}最大的优势是{advantage}。"));
        if let Some(feature) = feature {
            body.push(format!("它的{feature}功能比其他产品更加出色，使用体验更好。"));
        }
    } else {
        if !facts.core_features.is_empty() {
            body.push(format!(
                "{name}的核心功能包括{}，这些功能真的非常实用。",
                first_three(&facts.core_features)
            ));
        }
        if !facts.selling_points.is_empty() {
            body.push(format!(
                "它的主要卖点是{}，绝对值得入手。",
                first_three(&facts.selling_points)
            ));
        }
        if !facts.usage_scenarios.is_empty() {
            body.push(format!(
                "这款产品特别适合{}，使用场景非常广泛。",
                first_three(&facts.usage_scenarios)
            ));
        }
        if !facts.target_audience.is_empty() {
            body.push(format!(
                "它的目标用户是{}，是为你们量身打造的。",
                first_three(&facts.target_audience)
            ));
        }
    }

    body
}

fn first_three(items: &[String]) -> String {
    items
        .iter()
        .take(3)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(LIST_SEPARATOR)
}

fn generic_script(facts: &ProductFacts) -> String {
    let name = facts.display_name();
    let features = if facts.core_features.is_empty() {
        "多种功能".to_string()
    } else {
        facts.core_features.join(LIST_SEPARATOR)
    };
    let audience = if facts.target_audience.is_empty() {
        "广大用户".to_string()
    } else {
        facts.target_audience.join(LIST_SEPARATOR)
    };

    [
        format!("大家好，今天我要给大家介绍{name}。"),
        format!("{name}是一款非常实用的产品，它具有{features}等特点。"),
        format!("这款产品特别适合{audience}，使用起来非常方便。"),
        "好了，今天的分享就到这里，希望对你们有所帮助。记得点赞收藏，我们下期再见！".to_string(),
    ]
    .join(PARAGRAPH_SEPARATOR)
}

/// Prepends an emphasis word to some sentences that praise the product.
fn emphasize<R: Rng + ?Sized>(parts: Vec<String>, rng: &mut R) -> Vec<String> {
    let mut remaining = MAX_EMPHASIZED;
    let mut emphasized = Vec::with_capacity(parts.len());

    for part in parts {
        let mut rewritten = String::with_capacity(part.len() + 8);
        for sentence in sentences_with_breaks(&part) {
            if remaining > 0 && contains_any(&sentence, EMPHASIS_TRIGGERS) && rng.gen_bool(0.5) {
                let word = EMPHASIS_WORDS.choose(rng).copied().unwrap_or("真的");
                rewritten.push_str(word);
                remaining -= 1;
            }
            rewritten.push_str(&sentence);
        }
        emphasized.push(rewritten);
    }

    emphasized
}
