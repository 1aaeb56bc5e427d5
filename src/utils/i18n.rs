/// Locales shipped in the `locales/` directory
pub const SUPPORTED_LOCALES: &[&str] = &["ja", "en"];

/// Check whether a locale has a translation file
pub fn is_supported(locale: &str) -> bool {
    SUPPORTED_LOCALES.contains(&locale)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_locales() {
        assert!(is_supported("ja"));
        assert!(is_supported("en"));
        assert!(!is_supported("fi"));
    }
}
