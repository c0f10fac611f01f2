//! Error types for accent

use thiserror::Error;

/// Result type alias for accent operations
pub type Result<T> = std::result::Result<T, AccentError>;

/// Highlighting error types
#[derive(Error, Debug)]
pub enum AccentError {
    #[error("group, language, and theme parameters must be non-empty strings")]
    InvalidArgument,

    #[error("no grammar registered for language: {0}")]
    UnknownLanguage(String),

    #[error("theme must be a known preset [dark, light], got: {0}")]
    UnknownTheme(String),

    #[error("invalid or incomplete rule '{0}' in grammar definition")]
    BadRule(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid grammar file: {0}")]
    GrammarParse(#[from] toml::de::Error),
}
