//! Theme formatter for styled text surfaces
//!
//! Unlike output formatters this one writes nothing: it styles the
//! surface it is given.

use crate::error::{Result, StyleError};
use crate::lexer::{self, Lexer};
use crate::mapper::SlotMapper;
use crate::slots::{ids::common, SlotTable};
use crate::style;
use crate::surface::StyledSurface;
use crate::theme::Theme;

/// Applies a theme to a styled text surface
pub struct Formatter {
    theme: Theme,
    pooled: bool,
}

impl Formatter {
    /// Create a formatter for a theme
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            pooled: false,
        }
    }

    /// Builder: apply every lexer's slots regardless of the active one
    pub fn with_pooled_table(mut self, pooled: bool) -> Self {
        self.pooled = pooled;
        self
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// The slot table used for a lexer
    pub fn slot_table(&self, lexer: Lexer) -> &'static SlotTable {
        if self.pooled {
            SlotTable::pooled()
        } else {
            SlotTable::for_lexer(lexer)
        }
    }

    /// Check the surface can be styled and return its lexer
    pub fn check(&self, surface: &dyn StyledSurface) -> Result<Lexer> {
        if !surface.is_valid() {
            return Err(StyleError::UnsupportedSurface(
                "surface is no longer valid".to_string(),
            ));
        }
        lexer::ensure_supported(surface.lexer(), &surface.lexer_language())
    }

    /// Style `surface` with the theme
    pub fn format<S>(&self, surface: &mut S) -> Result<()>
    where
        S: StyledSurface,
    {
        let lexer = self.check(&*surface)?;
        tracing::info!(theme = %self.theme.name, lexer = lexer.name(), pooled = self.pooled, "formatting surface");

        self.apply_chrome(surface)?;
        SlotMapper::new(self.slot_table(lexer)).apply(&self.theme.styles, surface)
    }

    /// Background, selection, line numbers and fold margin
    fn apply_chrome<S>(&self, surface: &mut S) -> Result<()>
    where
        S: StyledSurface,
    {
        let theme = &self.theme;
        surface.set_background_color(&theme.background_color)?;
        surface.set_selection_background(&theme.highlight_color)?;
        surface.assign_slot_style(
            common::STYLE_LINENUMBER,
            &style::convert(&theme.line_number_color),
        )?;
        surface.set_fold_margin_color(&theme.line_number_background_color)?;
        surface.set_fold_margin_highlight_color(&theme.line_number_special_background_color)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slots::ids::python;
    use crate::surface::{RecordingSurface, SurfaceCall};

    fn theme() -> Theme {
        let mut theme = Theme::new("test").with_style("Keyword", "bold");
        theme.line_number_color = "#888888".to_string();
        theme
    }

    #[test]
    fn test_unsupported_lexer() {
        let mut surface = RecordingSurface::new(1);
        let result = Formatter::new(theme()).format(&mut surface);
        assert!(matches!(result, Err(StyleError::UnsupportedLexer { lexer: 1, .. })));
        assert!(surface.calls.is_empty());
    }

    #[test]
    fn test_invalid_surface() {
        let mut surface = RecordingSurface::new(2);
        surface.invalidate();
        let result = Formatter::new(theme()).format(&mut surface);
        assert!(matches!(result, Err(StyleError::UnsupportedSurface(_))));
    }

    #[test]
    fn test_chrome_applied_first() {
        let mut surface = RecordingSurface::new(Lexer::Python.id());
        assert!(Formatter::new(theme()).format(&mut surface).is_ok());

        assert_eq!(
            surface.calls[..5],
            [
                SurfaceCall::Background("#ffffff".to_string()),
                SurfaceCall::SelectionBackground("#ffffcc".to_string()),
                SurfaceCall::SlotStyle(common::STYLE_LINENUMBER, "fore:#888888".to_string()),
                SurfaceCall::FoldMargin("transparent".to_string()),
                SurfaceCall::FoldMarginHighlight("#ffffc0".to_string()),
            ]
        );
        assert_eq!(surface.style(python::WORD), Some("bold"));
        assert_eq!(surface.calls.len(), 6);
    }

    #[test]
    fn test_pooled_styles_other_lexers_slots() {
        let theme = Theme::new("t").with_style("Keyword", "italic");
        let mut surface = RecordingSurface::new(Lexer::Python.id());
        Formatter::new(theme)
            .with_pooled_table(true)
            .format(&mut surface)
            .ok();

        // python WORD, yaml KEYWORD, R KWORD, JSON KEYWORD
        for slot in [5, 3, 2, 11] {
            assert_eq!(surface.style(slot), Some("italic"));
        }
    }
}
