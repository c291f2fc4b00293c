//! Parsed style attributes

/// Background colour of a parsed spec
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Background {
    /// `bg:` with no digits: explicitly clear the background
    Clear,
    /// `bg:<hex>`: the digits exactly as written
    Color(String),
}

/// Attributes decoded from one style spec
///
/// `None` means the spec did not mention the attribute. Flags are only
/// ever set, never explicitly cleared: a `nobold` spec yields
/// `bold == false`, same as a spec that says nothing about weight.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StyleAttributes {
    /// Foreground colour including the leading `#` (e.g. `#ff0000`, `#3`)
    pub foreground: Option<String>,
    /// Background colour or the explicit clear marker
    pub background: Option<Background>,
    /// Bold text
    pub bold: bool,
    /// Italic text
    pub italic: bool,
    /// Underlined text (parsed, not encoded)
    pub underline: bool,
    /// `noinherit` marker (parsed, not encoded)
    pub noinherit: bool,
    /// Border colour digits (parsed, not encoded)
    pub border: Option<String>,
}

impl StyleAttributes {
    /// Check if nothing that the encoder emits was specified
    pub fn is_unspecified(&self) -> bool {
        self.foreground.is_none() && self.background.is_none() && !self.bold && !self.italic
    }

    /// Builder: set foreground colour
    pub fn with_foreground(mut self, color: &str) -> Self {
        self.foreground = Some(color.to_string());
        self
    }

    /// Builder: set background colour
    pub fn with_background(mut self, background: Background) -> Self {
        self.background = Some(background);
        self
    }

    /// Builder: set bold
    pub fn with_bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Builder: set italic
    pub fn with_italic(mut self) -> Self {
        self.italic = true;
        self
    }
}
