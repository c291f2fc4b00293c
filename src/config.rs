//! Configuration file support
//!
//! Loads settings from ~/.stcstyle.conf (or %USERPROFILE%\.stcstyle.conf on Windows)
//!
//! Format: simple key=value pairs, one per line
//! Lines starting with # are comments
//!
//! Example:
//! ```text
//! # stcstyle configuration
//! theme = ~/themes/solarized.toml
//! lexer = python
//! color = true
//! pooled = false
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use crate::lexer::Lexer;

/// Configuration settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Theme file path or built-in theme name
    pub theme: String,
    /// Lexer to preview
    pub lexer: Lexer,
    /// Whether to colour the preview swatches
    pub color: bool,
    /// Whether to use the pooled all-lexer slot table
    pub pooled: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: "default".to_string(),
            lexer: Lexer::Python,
            color: true,
            pooled: false,
        }
    }
}

impl Config {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        home_dir().map(|home| home.join(".stcstyle.conf"))
    }

    /// Path of the configured theme file, with a leading `~/` expanded
    pub fn theme_path(&self) -> PathBuf {
        expand_home(&self.theme, home_dir())
    }

    /// Load configuration from file
    pub fn load() -> Self {
        let mut config = Config::default();

        if let Some(path) = Self::config_path() {
            if let Ok(contents) = fs::read_to_string(&path) {
                tracing::debug!(path = %path.display(), "loading config");
                let settings = Self::parse(&contents);
                config.apply(&settings);
            }
        }

        config
    }

    /// Parse config file contents into key-value pairs
    fn parse(contents: &str) -> HashMap<String, String> {
        let mut settings = HashMap::new();

        for line in contents.lines() {
            let line = line.trim();

            // Skip empty lines and comments
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if let Some((key, value)) = line.split_once('=') {
                let key = key.trim().to_lowercase();
                let value = value.trim().to_string();
                settings.insert(key, value);
            }
        }

        settings
    }

    /// Apply settings from parsed config
    fn apply(&mut self, settings: &HashMap<String, String>) {
        if let Some(value) = settings.get("theme") {
            if !value.is_empty() {
                self.theme = value.clone();
            }
        }

        if let Some(value) = settings.get("lexer") {
            match Lexer::from_name(value) {
                Some(lexer) => self.lexer = lexer,
                None => tracing::warn!(lexer = %value, "ignoring unknown lexer in config"),
            }
        }

        if let Some(value) = settings.get("color") {
            match parse_bool(value) {
                Some(color) => self.color = color,
                None => tracing::warn!(color = %value, "ignoring bad color setting in config"),
            }
        }

        if let Some(value) = settings.get("pooled") {
            match parse_bool(value) {
                Some(pooled) => self.pooled = pooled,
                None => tracing::warn!(pooled = %value, "ignoring bad pooled setting in config"),
            }
        }
    }
}

/// The user's home directory
fn home_dir() -> Option<PathBuf> {
    #[cfg(windows)]
    {
        std::env::var("USERPROFILE").ok().map(PathBuf::from)
    }

    #[cfg(not(windows))]
    {
        std::env::var("HOME").ok().map(PathBuf::from)
    }
}

/// Replace a leading `~/` with `home`, if known
fn expand_home(path: &str, home: Option<PathBuf>) -> PathBuf {
    match (path.strip_prefix("~/"), home) {
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(path),
    }
}

/// Parse a boolean value from string
fn parse_bool(s: &str) -> Option<bool> {
    match s.to_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}
