use crate::calendar::{CalendarEvent, Category};
use crate::interpreter::ParsedEvent;
use chrono::NaiveDate;

/// Localized name of a calendar
pub fn calendar_name(category: Category, locale: &str) -> String {
    let name = match category {
        Category::Work => t!("calendar_work", locale = locale),
        Category::Personal => t!("calendar_personal", locale = locale),
        Category::Family => t!("calendar_family", locale = locale),
        Category::Event => t!("calendar_event", locale = locale),
        Category::Holiday => t!("calendar_holiday", locale = locale),
    };
    name.to_string()
}

fn render(
    date: NaiveDate,
    start_time: Option<&str>,
    end_time: Option<&str>,
    title: &str,
    category: Category,
    locale: &str,
) -> String {
    let date = date.format("%Y-%m-%d").to_string();
    let calendar = calendar_name(category, locale);

    let line = match (start_time, end_time) {
        (Some(start), Some(end)) => t!(
            "event_range",
            locale = locale,
            date = date,
            start = start,
            end = end,
            title = title,
            calendar = calendar
        ),
        (Some(start), None) => t!(
            "event_timed",
            locale = locale,
            date = date,
            start = start,
            title = title,
            calendar = calendar
        ),
        (None, _) => t!(
            "event_all_day",
            locale = locale,
            date = date,
            title = title,
            calendar = calendar
        ),
    };
    line.to_string()
}

/// One-line summary of a draft
pub fn describe(event: &ParsedEvent, locale: &str) -> String {
    render(
        event.date,
        event.start_time.as_deref(),
        event.end_time.as_deref(),
        &event.title,
        event.category_id,
        locale,
    )
}

/// One-line summary of a committed event
pub fn describe_calendar_event(event: &CalendarEvent, locale: &str) -> String {
    render(
        event.date,
        event.start_time.as_deref(),
        event.end_time.as_deref(),
        &event.title,
        event.category_id,
        locale,
    )
}

/// Header line followed by one line per event
pub fn describe_agenda(day: NaiveDate, events: &[CalendarEvent], locale: &str) -> String {
    let mut lines = vec![t!(
        "agenda_header",
        locale = locale,
        date = day.format("%Y-%m-%d").to_string()
    )
    .to_string()];

    if events.is_empty() {
        lines.push(t!("agenda_empty", locale = locale).to_string());
    } else {
        lines.extend(
            events
                .iter()
                .map(|event| format!("  {}", describe_calendar_event(event, locale))),
        );
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::interpret;

    fn reference() -> chrono::NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 2, 10)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_describe_timed_event() {
        let event = interpret("明日の午後3時に会議", reference());
        assert_eq!(describe(&event, "en"), "2026-02-11 15:00 会議 [Work]");
        assert_eq!(describe(&event, "ja"), "2026-02-11 15:00 会議 [仕事]");
    }

    #[test]
    fn test_describe_range_and_all_day() {
        let ranged = interpret("10時から2時間 打ち合わせ", reference());
        assert_eq!(
            describe(&ranged, "en"),
            "2026-02-10 10:00-12:00 打ち合わせ [Work]"
        );

        let all_day = interpret("3月15日 ハッカソン", reference());
        assert_eq!(
            describe(&all_day, "ja"),
            "2026-03-15（終日）ハッカソン [イベント]"
        );
    }

    #[test]
    fn test_describe_agenda() {
        let day = NaiveDate::from_ymd_opt(2026, 2, 3).unwrap();
        assert_eq!(
            describe_agenda(day, &[], "en"),
            "Agenda for 2026-02-03\nNo events"
        );

        let event = CalendarEvent::from_parsed(interpret("2月3日 節分", reference()));
        assert_eq!(
            describe_agenda(day, &[event], "en"),
            "Agenda for 2026-02-03\n  2026-02-03 (all day) 節分 [Personal]"
        );
    }
}
