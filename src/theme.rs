//! Themes
//!
//! A theme is a set of category specs plus the colours of the control
//! around the text. Themes are read from TOML:
//!
//! ```toml
//! name = "mine"
//! background_color = "#ffffff"
//!
//! [styles]
//! "Keyword" = "bold #008000"
//! "String.Doc" = "italic"
//! ```
//!
//! The order of the `[styles]` table is kept.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Result, StyleError};
use crate::mapper::TaxonomyStyleMap;
use crate::taxonomy::TokenCategory;

const DEFAULT_THEME: &str = include_str!("../themes/default.toml");

/// A complete style theme
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub name: String,
    /// Control background
    pub background_color: String,
    /// Selection background
    pub highlight_color: String,
    /// Spec for the line number margin
    pub line_number_color: String,
    /// Fold margin colour
    pub line_number_background_color: String,
    /// Fold margin highlight colour
    pub line_number_special_background_color: String,
    /// Category specs in theme order
    pub styles: TaxonomyStyleMap,
}

#[derive(Debug, Deserialize)]
struct ThemeFile {
    name: Option<String>,
    background_color: Option<String>,
    highlight_color: Option<String>,
    line_number_color: Option<String>,
    line_number_background_color: Option<String>,
    line_number_special_background_color: Option<String>,
    #[serde(default)]
    styles: toml::Table,
}

impl Theme {
    /// Create a theme with default chrome and no category specs
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            background_color: "#ffffff".to_string(),
            highlight_color: "#ffffcc".to_string(),
            line_number_color: "inherit".to_string(),
            line_number_background_color: "transparent".to_string(),
            line_number_special_background_color: "#ffffc0".to_string(),
            styles: TaxonomyStyleMap::new(),
        }
    }

    /// The built-in default theme
    pub fn builtin_default() -> Result<Self> {
        Self::from_toml(DEFAULT_THEME)
    }

    /// Look up a built-in theme by name
    pub fn builtin(name: &str) -> Option<Result<Self>> {
        match name {
            "default" => Some(Self::builtin_default()),
            _ => None,
        }
    }

    /// Load a theme from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let mut theme = Self::from_toml(&contents)?;
        if theme.name.is_empty() {
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                theme.name = stem.to_string();
            }
        }
        Ok(theme)
    }

    /// Parse a theme from TOML text
    pub fn from_toml(contents: &str) -> Result<Self> {
        let file: ThemeFile = toml::from_str(contents)?;
        let mut theme = Self::new(file.name.as_deref().unwrap_or(""));

        let chrome = [
            (file.background_color, &mut theme.background_color),
            (file.highlight_color, &mut theme.highlight_color),
            (file.line_number_color, &mut theme.line_number_color),
            (
                file.line_number_background_color,
                &mut theme.line_number_background_color,
            ),
            (
                file.line_number_special_background_color,
                &mut theme.line_number_special_background_color,
            ),
        ];
        for (value, field) in chrome {
            if let Some(value) = value {
                *field = value;
            }
        }

        for (key, value) in file.styles {
            let category = TokenCategory::parse(&key)
                .ok_or_else(|| StyleError::Message(format!("Invalid token category: {:?}", key)))?;
            let spec = value.as_str().ok_or_else(|| {
                StyleError::Message(format!("Style for {} must be a string", category))
            })?;
            theme.styles.insert(category, spec);
        }

        Ok(theme)
    }

    /// Builder: set the spec for a category
    pub fn with_style(mut self, category: &str, spec: &str) -> Self {
        self.styles.insert(TokenCategory::new(category), spec);
        self
    }
}
