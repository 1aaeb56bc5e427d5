use super::models::Category;
use tracing::debug;

/// Keyword table, highest priority first
///
/// Matching is by plain substring, so a keyword inside an unrelated word
/// still counts.
const CATEGORY_KEYWORDS: &[(Category, &[&str])] = &[
    (
        Category::Work,
        &[
            "仕事", "会議", "ミーティング", "打ち合わせ", "出張", "業務", "案件", "クライアント",
            "プレゼン", "締め切り", "デッドライン",
        ],
    ),
    (
        Category::Family,
        &[
            "家族", "子供", "こども", "親", "兄弟", "姉妹", "夫", "妻", "父", "母", "誕生日",
            "記念日",
        ],
    ),
    (
        Category::Personal,
        &["病院", "医者", "診察", "健診", "検診", "クリニック", "歯医者"],
    ),
    (
        Category::Event,
        &[
            "ハッカソン", "イベント", "勉強会", "セミナー", "コンサート", "ライブ", "試合", "大会",
        ],
    ),
    (Category::Holiday, &["祝日", "休日", "振替休日"]),
];

/// Classify an utterance into a calendar by keyword, defaulting to personal
pub fn infer_category(text: &str) -> Category {
    for (category, keywords) in CATEGORY_KEYWORDS {
        if let Some(keyword) = keywords.iter().find(|keyword| text.contains(*keyword)) {
            debug!("Classified as {} by keyword {}", category, keyword);
            return *category;
        }
    }

    Category::default()
}
