//! Compiled patterns of the utterance grammar.
//!
//! Digits are matched as ASCII only; [`normalize_utterance`] folds the
//! full-width forms speech engines like to emit before any pattern runs.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// `3月15日`
    pub static ref MONTH_DAY_RE: Regex = Regex::new(r"([0-9]{1,2})月([0-9]{1,2})日")
        .expect("Failed to compile MONTH_DAY_RE regex");

    /// `3日後`
    pub static ref DAYS_LATER_RE: Regex = Regex::new(r"([0-9]+)日後")
        .expect("Failed to compile DAYS_LATER_RE regex");

    /// `月曜`, `次の金曜`, `来週火曜`
    pub static ref WEEKDAY_RE: Regex = Regex::new(r"(?:次の?|来週の?)?([月火水木金土日])曜")
        .expect("Failed to compile WEEKDAY_RE regex");

    /// `午後3時`, `午後 3時30分`, `午後3時半`
    pub static ref PM_TIME_RE: Regex =
        Regex::new(r"午後\s*([0-9]{1,2})時(?:\s*([0-9]{1,2})分|(半))?")
            .expect("Failed to compile PM_TIME_RE regex");

    /// `午前10時`, `午前 9時15分`
    pub static ref AM_TIME_RE: Regex =
        Regex::new(r"午前\s*([0-9]{1,2})時(?:\s*([0-9]{1,2})分|(半))?")
            .expect("Failed to compile AM_TIME_RE regex");

    /// `10時`, `10時30分`, `10時半`
    pub static ref PLAIN_TIME_RE: Regex = Regex::new(r"([0-9]{1,2})時(?:([0-9]{1,2})分|(半))?")
        .expect("Failed to compile PLAIN_TIME_RE regex");

    /// `10:30`
    pub static ref COLON_TIME_RE: Regex = Regex::new(r"([0-9]{1,2}):([0-9]{2})")
        .expect("Failed to compile COLON_TIME_RE regex");

    /// `10時から12時まで`, captures the end expression
    pub static ref RANGE_RE: Regex = Regex::new(r"から(.+?)まで")
        .expect("Failed to compile RANGE_RE regex");

    /// `2時間`
    pub static ref DURATION_RE: Regex = Regex::new(r"([0-9]+)時間")
        .expect("Failed to compile DURATION_RE regex");

    pub static ref WHITESPACE_RE: Regex = Regex::new(r"\s+")
        .expect("Failed to compile WHITESPACE_RE regex");

    /// Tokens stripped from an utterance to leave its title, in removal order
    ///
    /// Longer expressions come before the shorter ones they contain: a full
    /// date before bare counters, `2時間` before `2時`.
    pub static ref TITLE_NOISE: Vec<Regex> = [
        r"[0-9]{1,2}月[0-9]{1,2}日",
        r"明後日|あさって|今日|本日|明日|あした",
        r"[0-9]+日後",
        r"(?:次の?|来週の?)?[月火水木金土日]曜日?",
        r"午前|午後",
        r"[0-9]+時間後?",
        r"[0-9]{1,2}時(?:\s*[0-9]{1,2}分|\s*半)?",
        r"[0-9]{1,2}:[0-9]{2}",
        r"から|まで|に|で|の|を|が|は",
        r"予定|スケジュール|追加|登録|入れて|教えて",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("Failed to compile title noise regex"))
    .collect();
}

/// Trim an utterance and fold full-width digits, colons and spaces to ASCII
pub fn normalize_utterance(raw: &str) -> String {
    raw.trim()
        .chars()
        .map(|c| match c {
            '０'..='９' => char::from_u32(c as u32 - '０' as u32 + '0' as u32).unwrap_or(c),
            '：' => ':',
            '\u{3000}' => ' ',
            _ => c,
        })
        .collect::<String>()
        .trim()
        .to_string()
}
