pub const GREETING: &[&str] = &["大家好", "欢迎", "谢谢", "希望"];
pub const RECOMMENDATION: &[&str] = &["推荐", "必备", "好用", "实用"];
pub const TUTORIAL: &[&str] = &["教程", "步骤", "方法", "技巧"];

pub const EMPHATIC: &[&str] = &["超级", "非常", "特别", "真的"];
pub const SUBJECTIVE: &[&str] = &["我觉得", "个人认为", "推荐给", "适合"];
pub const ORDINAL_CONNECTORS: &[&str] = &["首先", "然后", "接下来", "最后"];

pub const OPENING_CUES: &[&str] = &["大家好", "欢迎", "今天", "分享", "介绍"];
pub const CLOSING_CUES: &[&str] = &["谢谢", "点赞", "收藏", "关注", "下期", "再见"];

pub const STEP_WISE: &[&str] = &["首先", "第一步"];
pub const PROS_CONS: &[&str] = &["优点", "好处", "优势"];
pub const COMPARATIVE: &[&str] = &["对比", "相比", "区别"];

pub const ORDERED_STEPS: &[&str] = &["第一步", "第二步", "第三步"];
pub const EMPHASIS_HEAVY: &[&str] = &["重点", "关键", "注意", "提醒"];
pub const EXAMPLE_DRIVEN: &[&str] = &["案例", "例子", "比如", "例如"];
pub const KEY_POINT_LEADS: &[&str] = &["重点是", "关键是", "注意", "提醒", "推荐", "必备", "好用"];
pub const DIRECT_EMPHASIS: &[&str] = &["记住", "一定要", "千万", "必须"];
pub const REPETITION: &[&str] = &["重复", "再说一遍", "强调"];

pub const POSITIVE: &[&str] = &["喜欢", "爱", "好用", "满意", "推荐", "惊喜", "开心", "激动"];
pub const NEGATIVE: &[&str] = &["不喜欢", "失望", "难用", "不满意", "缺点", "问题", "麻烦"];
pub const INTENSIFIERS: &[&str] = &["超级", "非常", "特别", "真的", "太", "极其", "绝对"];
pub const PERSONAL_EXPERIENCE: &[&str] = &["觉得", "感受", "体验", "分享"];
pub const ADVISORY: &[&str] = &["建议", "推荐", "应该", "可以"];
pub const SURPRISE: &[&str] = &["惊叹", "没想到", "震惊", "意外"];
