use crate::interpreter::models::ParsedEvent;
use crate::utils::time::parse_time;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Colour swatches offered when editing an event
pub const COLOR_OPTIONS: [&str; 10] = [
    "#3b82f6", "#22c55e", "#f97316", "#a855f7", "#ef4444", "#06b6d4", "#f59e0b", "#ec4899",
    "#10b981", "#6366f1",
];

/// Calendar (category) an event belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Work,
    #[default]
    Personal,
    Family,
    Event,
    Holiday,
}

impl Category {
    /// Every category, in display order
    pub const ALL: [Category; 5] = [
        Category::Work,
        Category::Personal,
        Category::Family,
        Category::Event,
        Category::Holiday,
    ];

    /// Stable identifier, as used in serialized events
    pub fn id(&self) -> &'static str {
        match self {
            Category::Work => "work",
            Category::Personal => "personal",
            Category::Family => "family",
            Category::Event => "event",
            Category::Holiday => "holiday",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// A named, coloured calendar
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarGroup {
    pub category: Category,
    pub name: &'static str,
    pub color: &'static str,
}

/// The fixed set of calendars
pub static CALENDARS: [CalendarGroup; 5] = [
    CalendarGroup {
        category: Category::Work,
        name: "仕事",
        color: "#3b82f6",
    },
    CalendarGroup {
        category: Category::Personal,
        name: "個人",
        color: "#22c55e",
    },
    CalendarGroup {
        category: Category::Family,
        name: "家族",
        color: "#f97316",
    },
    CalendarGroup {
        category: Category::Event,
        name: "イベント",
        color: "#a855f7",
    },
    CalendarGroup {
        category: Category::Holiday,
        name: "祝日",
        color: "#ef4444",
    },
];

/// An event committed to the calendar
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub id: String,
    pub title: String,
    pub date: NaiveDate,
    /// Last day of a multi-day all-day event, inclusive
    pub end_date: Option<NaiveDate>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub color: String,
    pub category_id: Category,
    pub is_all_day: bool,
    pub description: Option<String>,
}

impl CalendarEvent {
    /// Commit a draft, assigning it a fresh identifier
    pub fn from_parsed(parsed: ParsedEvent) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: parsed.title,
            date: parsed.date,
            end_date: None,
            start_time: parsed.start_time,
            end_time: parsed.end_time,
            color: parsed.color,
            category_id: parsed.category_id,
            is_all_day: parsed.is_all_day,
            description: None,
        }
    }

    /// Start of the event, `None` for all-day events or unreadable times
    pub fn starts_at(&self) -> Option<NaiveDateTime> {
        let (hour, minute) = parse_time(self.start_time.as_deref()?)?;
        self.date.and_hms_opt(hour, minute, 0)
    }
}

impl From<ParsedEvent> for CalendarEvent {
    fn from(parsed: ParsedEvent) -> Self {
        Self::from_parsed(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_category_has_a_calendar() {
        let categories: Vec<Category> = CALENDARS.iter().map(|group| group.category).collect();
        assert_eq!(categories, Category::ALL.to_vec());
        assert_eq!(CALENDARS[2].name, "家族");
        assert_eq!(CALENDARS[4].color, "#ef4444");
    }

    #[test]
    fn test_category_serializes_lowercase() {
        let json = serde_json::to_string(&Category::Holiday).unwrap();
        assert_eq!(json, "\"holiday\"");
        let parsed: Category = serde_json::from_str("\"work\"").unwrap();
        assert_eq!(parsed, Category::Work);
        assert!(serde_json::from_str::<Category>("\"shopping\"").is_err());
    }

    #[test]
    fn test_default_category_is_personal() {
        assert_eq!(Category::default(), Category::Personal);
        assert_eq!(Category::default().to_string(), "personal");
    }

    #[test]
    fn test_from_parsed_assigns_unique_ids() {
        let parsed = ParsedEvent {
            title: "会議".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 2, 11).unwrap(),
            start_time: Some("15:00".to_string()),
            end_time: None,
            is_all_day: false,
            category_id: Category::Work,
            color: COLOR_OPTIONS[0].to_string(),
        };

        let first = CalendarEvent::from_parsed(parsed.clone());
        let second = CalendarEvent::from(parsed);

        assert_ne!(first.id, second.id);
        assert!(Uuid::parse_str(&first.id).is_ok());
        assert_eq!(first.title, "会議");
        assert_eq!(first.category_id, Category::Work);
        assert_eq!(first.end_date, None);
        assert_eq!(
            first.starts_at(),
            NaiveDate::from_ymd_opt(2026, 2, 11)
                .unwrap()
                .and_hms_opt(15, 0, 0)
        );
    }
}
