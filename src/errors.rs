use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// Network request failed
    #[error("Network error: {0}")]
    NetworkError(String),
    /// Failed to parse configuration or serialized notices
    #[error("Parse error: {0}")]
    ParseError(String),
    /// Invalid URL format
    #[error("Invalid URL: {0}")]
    UrlError(String),
    /// Regex compilation failed
    #[error("Regex error: {0}")]
    RegexError(String),
    /// Selector parsing failed
    #[error("CSS selector error: {0}")]
    SelectorError(String),
    /// The page or one of its items could not be queried at all
    #[error("Structural error: {0}")]
    StructuralError(String),
    /// Notices could not be rendered to the output format
    #[error("Serialization error: {0}")]
    SerializationError(String),
    /// Invalid input format
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    /// IO operation failed
    #[error("IO error: {0}")]
    IoError(String),
}

/// Failure of a single lookup against an item handle.
///
/// A `Miss` only costs the caller the field being looked up. `Unreachable`
/// means the item itself can no longer be queried and aborts the run.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LookupError {
    #[error("lookup failed: {0}")]
    Miss(String),
    #[error("item cannot be queried: {0}")]
    Unreachable(String),
}

// Conversion implementations for common errors
impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::NetworkError(err.to_string())
    }
}

impl From<url::ParseError> for AppError {
    fn from(err: url::ParseError) -> Self {
        AppError::UrlError(err.to_string())
    }
}

impl From<regex::Error> for AppError {
    fn from(err: regex::Error) -> Self {
        AppError::RegexError(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::IoError(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::SerializationError(err.to_string())
    }
}

impl From<serde_yaml::Error> for AppError {
    fn from(err: serde_yaml::Error) -> Self {
        AppError::SerializationError(err.to_string())
    }
}

impl From<toml::de::Error> for AppError {
    fn from(err: toml::de::Error) -> Self {
        AppError::ParseError(err.to_string())
    }
}

impl From<LookupError> for AppError {
    fn from(err: LookupError) -> Self {
        AppError::StructuralError(err.to_string())
    }
}

// Custom type alias for Results in this application
pub type AppResult<T> = Result<T, AppError>;
