use crate::calendar::models::COLOR_OPTIONS;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub use crate::calendar::models::Category;

/// Title used when nothing is left of the utterance after extraction
pub const DEFAULT_TITLE: &str = "新しい予定";

/// Colour every draft starts with
pub const DEFAULT_COLOR: &str = COLOR_OPTIONS[0];

/// Event draft produced from a single utterance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedEvent {
    /// Residual title, never blank
    pub title: String,
    /// Calendar date of the event
    pub date: NaiveDate,
    /// Start time (HH:MM), absent for all-day events
    pub start_time: Option<String>,
    /// End time (HH:MM), only set together with `start_time`
    pub end_time: Option<String>,
    /// Whether the event spans the whole day
    pub is_all_day: bool,
    /// Calendar the event was classified into
    pub category_id: Category,
    /// Hex colour swatch
    pub color: String,
}

impl ParsedEvent {
    /// Replace the colour, keeping everything else
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }
}
