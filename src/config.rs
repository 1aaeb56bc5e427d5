use crate::error::{config_error, env_error, AppResult};
use crate::utils::i18n;
use chrono::{NaiveDateTime, Utc};
use chrono_tz::Tz;
use dotenvy::dotenv;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Default time zone used to decide what "today" is
pub const DEFAULT_TIMEZONE: &str = "Asia/Tokyo";

/// Default presentation locale
pub const DEFAULT_LOCALE: &str = "ja";

/// Optional configuration file, relative to the working directory
pub const CONFIG_PATH: &str = "config/yotei.toml";

/// Application configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Time zone the reference instant is taken in
    pub timezone: Tz,
    /// Locale for human-readable output
    pub locale: String,
    /// Colour applied to drafts instead of the interpreter default
    pub default_color: Option<String>,
}

/// Keys accepted in the configuration file
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    timezone: Option<String>,
    locale: Option<String>,
    default_color: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timezone: chrono_tz::Asia::Tokyo,
            locale: DEFAULT_LOCALE.to_string(),
            default_color: None,
        }
    }
}

impl Config {
    /// Load configuration from environment and config file
    pub fn load() -> AppResult<Self> {
        // Load .env file if it exists
        dotenv().ok();

        Self::load_from(Path::new(CONFIG_PATH), |key| env::var(key).ok())
    }

    /// Build a configuration from a file path and an environment lookup
    ///
    /// Environment variables override values from the file.
    pub fn load_from<F>(path: &Path, lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let file = if path.exists() {
            debug!("Reading configuration from {}", path.display());
            toml::from_str::<FileConfig>(&fs::read_to_string(path)?)?
        } else {
            FileConfig::default()
        };

        let timezone = lookup("YOTEI_TIMEZONE")
            .or(file.timezone)
            .unwrap_or_else(|| DEFAULT_TIMEZONE.to_string());
        let timezone: Tz = timezone
            .parse()
            .map_err(|e| env_error("YOTEI_TIMEZONE", &format!("{}", e)))?;

        let locale = lookup("YOTEI_LOCALE")
            .or(file.locale)
            .unwrap_or_else(|| DEFAULT_LOCALE.to_string());
        if !i18n::is_supported(&locale) {
            return Err(config_error(&format!(
                "Unsupported locale '{}', expected one of {:?}",
                locale,
                i18n::SUPPORTED_LOCALES
            )));
        }

        let default_color = lookup("YOTEI_DEFAULT_COLOR").or(file.default_color);
        if let Some(color) = &default_color {
            if !is_hex_color(color) {
                return Err(config_error(&format!(
                    "Invalid default color '{}', expected #rrggbb",
                    color
                )));
            }
        }

        Ok(Config {
            timezone,
            locale,
            default_color,
        })
    }

    /// Current wall-clock time in the configured time zone
    pub fn reference_now(&self) -> NaiveDateTime {
        Utc::now().with_timezone(&self.timezone).naive_local()
    }
}

/// Check for a `#rrggbb` colour
pub fn is_hex_color(color: &str) -> bool {
    color.len() == 7
        && color.starts_with('#')
        && color[1..].chars().all(|c| c.is_ascii_hexdigit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn missing_path() -> &'static Path {
        Path::new("does/not/exist/yotei.toml")
    }

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::load_from(missing_path(), |_| None).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.timezone, chrono_tz::Asia::Tokyo);
    }

    #[test]
    fn test_environment_values() {
        let config = Config::load_from(
            missing_path(),
            lookup_from(&[
                ("YOTEI_TIMEZONE", "Europe/Helsinki"),
                ("YOTEI_LOCALE", "en"),
                ("YOTEI_DEFAULT_COLOR", "#a855f7"),
            ]),
        )
        .unwrap();

        assert_eq!(config.timezone, chrono_tz::Europe::Helsinki);
        assert_eq!(config.locale, "en");
        assert_eq!(config.default_color.as_deref(), Some("#a855f7"));
    }

    #[test]
    fn test_invalid_values() {
        assert!(Config::load_from(missing_path(), lookup_from(&[("YOTEI_TIMEZONE", "Mars/Base")])).is_err());
        assert!(Config::load_from(missing_path(), lookup_from(&[("YOTEI_LOCALE", "fi")])).is_err());
        assert!(Config::load_from(missing_path(), lookup_from(&[("YOTEI_DEFAULT_COLOR", "blue")])).is_err());
    }

    #[test]
    fn test_file_values_and_override() {
        let dir = env::temp_dir().join(format!("yotei-config-{}", uuid::Uuid::new_v4()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("yotei.toml");
        fs::write(
            &path,
            "timezone = \"America/New_York\"\nlocale = \"en\"\ndefault_color = \"#06b6d4\"\n",
        )
        .unwrap();

        let config = Config::load_from(&path, |_| None).unwrap();
        assert_eq!(config.timezone, chrono_tz::America::New_York);
        assert_eq!(config.default_color.as_deref(), Some("#06b6d4"));

        let overridden = Config::load_from(&path, lookup_from(&[("YOTEI_LOCALE", "ja")])).unwrap();
        assert_eq!(overridden.locale, "ja");
        assert_eq!(overridden.timezone, chrono_tz::America::New_York);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_hex_color() {
        assert!(is_hex_color("#3b82f6"));
        assert!(is_hex_color("#ABCDEF"));
        assert!(!is_hex_color("3b82f6"));
        assert!(!is_hex_color("#3b82f"));
        assert!(!is_hex_color("#3b82fg"));
    }
}
