use super::patterns::{AM_TIME_RE, COLON_TIME_RE, PLAIN_TIME_RE, PM_TIME_RE};
use crate::utils::time::format_hhmm;
use regex::{Captures, Regex};
use tracing::debug;

/// How the hour of a clock expression is adjusted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Meridiem {
    /// 午前: 12 o'clock is midnight
    Am,
    /// 午後: everything but 12 moves into the afternoon
    Pm,
    /// No qualifier, the hour is taken as written
    Unqualified,
}

impl Meridiem {
    fn adjust(self, hour: u32) -> u32 {
        match (self, hour) {
            (Meridiem::Am, 12) => 0,
            (Meridiem::Pm, 12) => 12,
            (Meridiem::Pm, h) => h + 12,
            (_, h) => h,
        }
    }
}

/// Resolve the start time of an utterance as HH:MM
///
/// Rules are tried in priority order (afternoon, morning, plain `時`,
/// colon) and only the first rule that matches anywhere in the text is
/// used. `None` means the event is all-day.
pub fn resolve_time(text: &str) -> Option<String> {
    let kanji_rules: [(&str, &Regex, Meridiem); 3] = [
        ("pm", &*PM_TIME_RE, Meridiem::Pm),
        ("am", &*AM_TIME_RE, Meridiem::Am),
        ("plain", &*PLAIN_TIME_RE, Meridiem::Unqualified),
    ];

    for (name, re, meridiem) in kanji_rules {
        if let Some(time) = kanji_clock(text, re, meridiem) {
            debug!("Resolved time {} with rule {}", time, name);
            return Some(time);
        }
    }

    if let Some(time) = colon_clock(text) {
        debug!("Resolved time {} with rule colon", time);
        return Some(time);
    }

    None
}

/// First `H時[M分|半]` match that is not the start of a `時間` duration
fn kanji_clock(text: &str, re: &Regex, meridiem: Meridiem) -> Option<String> {
    re.captures_iter(text)
        .find(|caps| !is_duration(text, caps))
        .and_then(|caps| {
            let hour = caps[1].parse::<u32>().ok()?;
            let minute = match (caps.get(2), caps.get(3)) {
                (Some(m), _) => m.as_str().parse::<u32>().ok()?,
                (None, Some(_)) => 30,
                (None, None) => 0,
            };
            Some(format_hhmm(meridiem.adjust(hour), minute))
        })
}

/// `2時間` reads as two hours, not two o'clock
fn is_duration(text: &str, caps: &Captures<'_>) -> bool {
    let end = caps.get(0).map_or(0, |m| m.end());
    caps.get(2).is_none() && caps.get(3).is_none() && text[end..].starts_with('間')
}

fn colon_clock(text: &str) -> Option<String> {
    let caps = COLON_TIME_RE.captures(text)?;
    let hour = caps[1].parse::<u32>().ok()?;
    Some(format!("{:02}:{}", hour, &caps[2]))
}
