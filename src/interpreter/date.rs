use super::patterns::{DAYS_LATER_RE, MONTH_DAY_RE, WEEKDAY_RE};
use crate::utils::time::{date_from_month_day, next_weekday, offset_days};
use chrono::{Datelike, NaiveDate, NaiveDateTime, Weekday};
use tracing::debug;

/// A date rule returns `Some` when its pattern is present in the text
type DateRule = fn(&str, NaiveDate) -> Option<NaiveDate>;

/// Date rules in priority order; the first match wins
const DATE_RULES: &[(&str, DateRule)] = &[
    ("month_day", month_day),
    ("relative_day", relative_day),
    ("days_later", days_later),
    ("weekday", weekday),
];

/// Relative day words and their offset from today, checked in this order
const RELATIVE_DAYS: &[(&[&str], i64)] = &[
    (&["今日", "本日"], 0),
    (&["明日", "あした"], 1),
    (&["明後日", "あさって"], 2),
];

/// Resolve the date an utterance refers to
///
/// Falls back to the reference date when no rule matches. Only the date
/// part of `reference` is used, so the result never carries a time.
pub fn resolve_date(text: &str, reference: NaiveDateTime) -> NaiveDate {
    let today = reference.date();

    for (name, rule) in DATE_RULES {
        if let Some(date) = rule(text, today) {
            debug!("Resolved date {} with rule {}", date, name);
            return date;
        }
    }

    debug!("No date expression found, using {}", today);
    today
}

/// `M月D日` in the reference year, without rolling over past dates
fn month_day(text: &str, today: NaiveDate) -> Option<NaiveDate> {
    let caps = MONTH_DAY_RE.captures(text)?;
    let month = caps[1].parse::<u32>().ok()?;
    let day = caps[2].parse::<u32>().ok()?;
    Some(date_from_month_day(today.year(), month, day).unwrap_or(today))
}

fn relative_day(text: &str, today: NaiveDate) -> Option<NaiveDate> {
    let (_, offset) = RELATIVE_DAYS
        .iter()
        .find(|(words, _)| words.iter().any(|word| text.contains(word)))?;
    Some(offset_days(today, *offset).unwrap_or(today))
}

/// `N日後`
fn days_later(text: &str, today: NaiveDate) -> Option<NaiveDate> {
    let caps = DAYS_LATER_RE.captures(text)?;
    let days = caps[1].parse::<i64>().ok();
    Some(days.and_then(|days| offset_days(today, days)).unwrap_or(today))
}

/// Next occurrence of a named weekday, strictly after today
fn weekday(text: &str, today: NaiveDate) -> Option<NaiveDate> {
    let caps = WEEKDAY_RE.captures(text)?;
    let target = weekday_from_kanji(&caps[1])?;
    Some(next_weekday(today, target).unwrap_or(today))
}

fn weekday_from_kanji(kanji: &str) -> Option<Weekday> {
    match kanji {
        "日" => Some(Weekday::Sun),
        "月" => Some(Weekday::Mon),
        "火" => Some(Weekday::Tue),
        "水" => Some(Weekday::Wed),
        "木" => Some(Weekday::Thu),
        "金" => Some(Weekday::Fri),
        "土" => Some(Weekday::Sat),
        _ => None,
    }
}
