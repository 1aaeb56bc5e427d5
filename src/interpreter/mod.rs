//! Utterance interpreter.
//!
//! Turns one free-form Japanese sentence such as `明日の午後3時に会議` into
//! a [`ParsedEvent`]. Four independent passes run over the same text (date,
//! time, category, title) and [`interpret`] combines them, deriving the
//! all-day flag and the end time.
//!
//! Interpretation never fails: text without any recognizable expression
//! becomes an all-day personal event today, titled [`DEFAULT_TITLE`].

pub mod category;
pub mod date;
pub mod models;
pub mod patterns;
pub mod time;
pub mod title;

pub use category::infer_category;
pub use date::resolve_date;
pub use models::{Category, ParsedEvent, DEFAULT_COLOR, DEFAULT_TITLE};
pub use patterns::normalize_utterance;
pub use time::resolve_time;
pub use title::extract_title;

use crate::utils::time::add_hours_wrapping;
use chrono::{Local, NaiveDateTime};
use patterns::{DURATION_RE, RANGE_RE};
use tracing::debug;

/// Interpret an utterance relative to `reference`, the instant treated as now
pub fn interpret(raw: &str, reference: NaiveDateTime) -> ParsedEvent {
    let text = normalize_utterance(raw);

    let date = resolve_date(&text, reference);
    let start_time = resolve_time(&text);
    let category_id = infer_category(&text);
    let title = extract_title(&text);

    let end_time = start_time
        .as_deref()
        .and_then(|start| resolve_end_time(&text, start));

    let event = ParsedEvent {
        title,
        date,
        is_all_day: start_time.is_none(),
        start_time,
        end_time,
        category_id,
        color: DEFAULT_COLOR.to_string(),
    };

    debug!("Interpreted '{}' as {:?}", text, event);
    event
}

/// Interpret an utterance relative to the current local time
pub fn interpret_now(raw: &str) -> ParsedEvent {
    interpret(raw, Local::now().naive_local())
}

/// End time from an explicit `から…まで` range, else from a `N時間` duration
fn resolve_end_time(text: &str, start: &str) -> Option<String> {
    let from_range = RANGE_RE
        .captures(text)
        .and_then(|caps| resolve_time(&caps[1]));
    if from_range.is_some() {
        return from_range;
    }

    let caps = DURATION_RE.captures(text)?;
    let hours = caps[1].parse::<u64>().ok()?;
    add_hours_wrapping(start, hours)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, NaiveDate, Timelike, Weekday};

    /// Tuesday, 2026-02-10 at 08:15
    fn reference() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 2, 10)
            .unwrap()
            .and_hms_opt(8, 15, 42)
            .unwrap()
    }

    #[test]
    fn test_afternoon_meeting_tomorrow() {
        let event = interpret("明日の午後3時に会議", reference());
        assert_eq!(event.date, NaiveDate::from_ymd_opt(2026, 2, 11).unwrap());
        assert_eq!(event.start_time.as_deref(), Some("15:00"));
        assert_eq!(event.end_time, None);
        assert!(!event.is_all_day);
        assert_eq!(event.category_id, Category::Work);
        assert_eq!(event.title, "会議");
        assert_eq!(event.color, DEFAULT_COLOR);
    }

    #[test]
    fn test_explicit_range() {
        let event = interpret("10時から12時半まで 打ち合わせ", reference());
        assert_eq!(event.start_time.as_deref(), Some("10:00"));
        assert_eq!(event.end_time.as_deref(), Some("12:30"));
    }

    #[test]
    fn test_range_beats_duration() {
        let event = interpret("9:00から11:00まで 2時間 研修", reference());
        assert_eq!(event.start_time.as_deref(), Some("09:00"));
        assert_eq!(event.end_time.as_deref(), Some("11:00"));
    }

    #[test]
    fn test_duration_adds_hours() {
        let wednesday = NaiveDate::from_ymd_opt(2026, 2, 11)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        let event = interpret("来週月曜 午前10時から2時間 打ち合わせ", wednesday);
        assert_eq!(event.date.weekday(), Weekday::Mon);
        assert_eq!(event.date, NaiveDate::from_ymd_opt(2026, 2, 16).unwrap());
        assert_eq!(event.start_time.as_deref(), Some("10:00"));
        assert_eq!(event.end_time.as_deref(), Some("12:00"));
        assert_eq!(event.category_id, Category::Work);
        assert_eq!(event.title, "打ち合わせ");
    }

    #[test]
    fn test_duration_wraps_past_midnight() {
        let event = interpret("午後11時から3時間 夜行バス", reference());
        assert_eq!(event.start_time.as_deref(), Some("23:00"));
        assert_eq!(event.end_time.as_deref(), Some("02:00"));
        assert_eq!(event.date, reference().date());
    }

    #[test]
    fn test_no_end_time_without_start() {
        let event = interpret("明日から3日まで 2時間 旅行", reference());
        assert!(event.is_all_day);
        assert_eq!(event.start_time, None);
        assert_eq!(event.end_time, None);
    }

    #[test]
    fn test_range_without_time_falls_back_to_duration() {
        let event = interpret("14:00 会議室から駅まで 1時間", reference());
        assert_eq!(event.start_time.as_deref(), Some("14:00"));
        assert_eq!(event.end_time.as_deref(), Some("15:00"));
    }

    #[test]
    fn test_full_width_input() {
        let event = interpret("３月１５日　１４：３０　セミナー", reference());
        assert_eq!(event.date, NaiveDate::from_ymd_opt(2026, 3, 15).unwrap());
        assert_eq!(event.start_time.as_deref(), Some("14:30"));
        assert_eq!(event.category_id, Category::Event);
        assert_eq!(event.title, "セミナー");
    }

    #[test]
    fn test_empty_utterance_defaults() {
        let event = interpret("", reference());
        assert_eq!(event.title, DEFAULT_TITLE);
        assert_eq!(event.date, reference().date());
        assert!(event.is_all_day);
        assert_eq!(event.category_id, Category::Personal);
    }

    #[test]
    fn test_date_has_no_time_component() {
        let event = interpret("明後日", reference());
        let midnight = event.date.and_hms_opt(0, 0, 0).unwrap();
        assert_eq!(midnight.hour(), 0);
        assert_eq!(midnight.date(), NaiveDate::from_ymd_opt(2026, 2, 12).unwrap());
    }

    #[test]
    fn test_interpret_now_uses_today() {
        let before = Local::now().date_naive();
        let event = interpret_now("節分");
        let after = Local::now().date_naive();
        assert!(event.date == before || event.date == after);
        assert_eq!(event.title, "節分");
    }
}
