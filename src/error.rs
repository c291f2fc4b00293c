//! Error types for stcstyle

use thiserror::Error;

/// Result type alias for stcstyle operations
pub type Result<T> = std::result::Result<T, StyleError>;

/// Styling error types
///
/// Spec parsing never fails; these cover the caller-side precondition
/// checks, surface mutation failures and theme/config loading.
#[derive(Error, Debug)]
pub enum StyleError {
    #[error("Unsupported surface: {0}")]
    UnsupportedSurface(String),

    #[error("Lexer '{name}' ({lexer}) not currently supported")]
    UnsupportedLexer { lexer: i32, name: String },

    #[error("Unknown lexer: {0}")]
    UnknownLexer(String),

    #[error("Surface error: {0}")]
    Surface(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Theme error: {0}")]
    Theme(#[from] toml::de::Error),

    #[error("{0}")]
    Message(String),
}
