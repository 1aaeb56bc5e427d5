use super::models::DEFAULT_TITLE;
use super::patterns::{TITLE_NOISE, WHITESPACE_RE};
use tracing::debug;

/// Strip date, time and connective tokens from an utterance to get a title
pub fn extract_title(text: &str) -> String {
    let stripped = TITLE_NOISE
        .iter()
        .fold(text.to_string(), |acc, re| re.replace_all(&acc, "").into_owned());
    let title = WHITESPACE_RE.replace_all(&stripped, " ").trim().to_string();

    if title.is_empty() {
        debug!("Nothing left of '{}', using default title", text);
        DEFAULT_TITLE.to_string()
    } else {
        title
    }
}
