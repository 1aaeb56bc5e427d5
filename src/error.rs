use miette::{Diagnostic, Result};
use thiserror::Error;

/// Main error type for the application
///
/// The interpreter itself never fails; these cover the layers around it.
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("Environment error: {0}")]
    #[diagnostic(code(yotei::environment))]
    Environment(String),

    #[error("Configuration error: {0}")]
    #[diagnostic(code(yotei::config))]
    Config(String),

    #[error("Event store error: {0}")]
    #[diagnostic(code(yotei::store))]
    Store(String),

    #[error("Invalid argument: {0}")]
    #[diagnostic(code(yotei::usage), help("Run with --help to see the available options"))]
    Usage(String),

    #[error(transparent)]
    #[diagnostic(code(yotei::io))]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    #[diagnostic(code(yotei::serialization))]
    Serialization(String),

    #[error("Other error: {0}")]
    #[diagnostic(code(yotei::other))]
    Other(String),
}

// Implement From for TOML deserialization errors
impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

/// Type alias for Result with our Error type
pub type AppResult<T> = Result<T, Error>;

/// Helper to create environment errors
pub fn env_error(var: &str, message: &str) -> Error {
    Error::Environment(format!("{}: {}", var, message))
}

/// Helper to create configuration errors
pub fn config_error(message: &str) -> Error {
    Error::Config(message.to_string())
}

/// Helper to create event store errors
pub fn store_error(message: &str) -> Error {
    Error::Store(message.to_string())
}

/// Helper to create command line usage errors
pub fn usage_error(message: &str) -> Error {
    Error::Usage(message.to_string())
}
