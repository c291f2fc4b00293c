//! Supported wx.stc lexers
//!
//! A styled text control reports its active lexer as a numeric id. Only
//! the lexers below have entries in the built-in slot table.

use crate::error::{Result, StyleError};

/// A lexer with built-in slot assignments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lexer {
    Python,
    Cpp,
    Html,
    Yaml,
    R,
    Json,
}

impl Lexer {
    /// All supported lexers, in id order
    pub const ALL: [Lexer; 6] = [
        Lexer::Python,
        Lexer::Cpp,
        Lexer::Html,
        Lexer::Yaml,
        Lexer::R,
        Lexer::Json,
    ];

    /// The wx.stc `STC_LEX_*` id
    pub fn id(&self) -> i32 {
        match self {
            Lexer::Python => 2,
            Lexer::Cpp => 3,
            Lexer::Html => 4,
            Lexer::Yaml => 48,
            Lexer::R => 86,
            Lexer::Json => 120,
        }
    }

    /// Look up a lexer by its numeric id
    pub fn from_id(id: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|lexer| lexer.id() == id)
    }

    /// Get a human-readable name for this lexer
    pub fn name(&self) -> &'static str {
        match self {
            Lexer::Python => "python",
            Lexer::Cpp => "cpp",
            Lexer::Html => "html",
            Lexer::Yaml => "yaml",
            Lexer::R => "r",
            Lexer::Json => "json",
        }
    }

    /// Parse a lexer from a name or numeric id (for config and CLI)
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim().to_lowercase();
        if let Ok(id) = name.parse::<i32>() {
            return Self::from_id(id);
        }
        match name.as_str() {
            "python" | "py" => Some(Lexer::Python),
            "cpp" | "c++" | "c" => Some(Lexer::Cpp),
            "html" => Some(Lexer::Html),
            "yaml" | "yml" => Some(Lexer::Yaml),
            "r" => Some(Lexer::R),
            "json" => Some(Lexer::Json),
            _ => None,
        }
    }
}

/// Check that a surface's lexer id is one we have slots for
///
/// `language` is the surface's own name for its lexer, used in the error.
pub fn ensure_supported(id: i32, language: &str) -> Result<Lexer> {
    Lexer::from_id(id).ok_or_else(|| StyleError::UnsupportedLexer {
        lexer: id,
        name: language.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_roundtrip() {
        for lexer in Lexer::ALL {
            assert_eq!(Lexer::from_id(lexer.id()), Some(lexer));
            assert_eq!(Lexer::from_name(lexer.name()), Some(lexer));
        }
    }

    #[test]
    fn test_from_name_variants() {
        assert_eq!(Lexer::from_name("Python"), Some(Lexer::Python));
        assert_eq!(Lexer::from_name(" yml "), Some(Lexer::Yaml));
        assert_eq!(Lexer::from_name("120"), Some(Lexer::Json));
        assert_eq!(Lexer::from_name("sql"), None);
        assert_eq!(Lexer::from_name("7"), None);
    }

    #[test]
    fn test_ensure_supported() {
        assert_eq!(ensure_supported(86, "r").ok(), Some(Lexer::R));
        assert!(matches!(
            ensure_supported(1, "null"),
            Err(StyleError::UnsupportedLexer { lexer: 1, .. })
        ));
    }

    #[test]
    fn test_ensure_supported_names_language() {
        let err = ensure_supported(7, "sql").err().map(|e| e.to_string());
        assert_eq!(err.as_deref(), Some("Lexer 'sql' (7) not currently supported"));
    }
}
