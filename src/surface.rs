//! Styled text surface abstraction
//!
//! The host control that owns the style slots. Only the calls the
//! formatter needs are modelled here.

use std::collections::BTreeMap;

use crate::error::{Result, StyleError};
use crate::lexer::Lexer;
use crate::slots::SlotId;

/// A text control exposing numeric style slots
pub trait StyledSurface {
    /// The `STC_LEX_*` id of the active lexer
    fn lexer(&self) -> i32;

    /// The surface's name for its active lexer
    fn lexer_language(&self) -> String {
        format!("lexer {}", self.lexer())
    }

    /// Check if the surface can still be styled
    fn is_valid(&self) -> bool {
        true
    }

    /// Set the control's background colour
    fn set_background_color(&mut self, color: &str) -> Result<()>;

    /// Set the selection background colour
    fn set_selection_background(&mut self, color: &str) -> Result<()>;

    /// Set the fold margin colour
    fn set_fold_margin_color(&mut self, color: &str) -> Result<()>;

    /// Set the fold margin highlight colour
    fn set_fold_margin_highlight_color(&mut self, color: &str) -> Result<()>;

    /// Assign an encoded spec to one style slot
    fn assign_slot_style(&mut self, slot: SlotId, spec: &str) -> Result<()>;
}

/// One call made against a `RecordingSurface`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceCall {
    Background(String),
    SelectionBackground(String),
    FoldMargin(String),
    FoldMarginHighlight(String),
    SlotStyle(SlotId, String),
}

/// In-memory surface that records every call
///
/// Keeps both the call log and the resulting state, so callers can
/// check either. Useful as a stand-in for a real control.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    lexer: i32,
    language: Option<String>,
    valid: bool,
    fail_on: Option<SlotId>,
    /// Every call, in order
    pub calls: Vec<SurfaceCall>,
    /// Current spec per slot
    pub styles: BTreeMap<SlotId, String>,
    pub background: Option<String>,
    pub selection_background: Option<String>,
    pub fold_margin: Option<String>,
    pub fold_margin_highlight: Option<String>,
}

impl RecordingSurface {
    /// Create a surface with the given lexer id active
    pub fn new(lexer: i32) -> Self {
        Self {
            lexer,
            valid: true,
            ..Default::default()
        }
    }

    /// Builder: set the name reported for the lexer
    pub fn with_language(mut self, language: &str) -> Self {
        self.language = Some(language.to_string());
        self
    }

    /// Builder: make assignments to `slot` fail
    pub fn failing_on(mut self, slot: SlotId) -> Self {
        self.fail_on = Some(slot);
        self
    }

    /// Mark the surface as destroyed
    pub fn invalidate(&mut self) {
        self.valid = false;
    }

    /// Current spec for a slot
    pub fn style(&self, slot: SlotId) -> Option<&str> {
        self.styles.get(&slot).map(|s| s.as_str())
    }

    /// Only the slot assignments from the call log
    pub fn slot_calls(&self) -> Vec<(SlotId, &str)> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                SurfaceCall::SlotStyle(slot, spec) => Some((*slot, spec.as_str())),
                _ => None,
            })
            .collect()
    }

    /// Forget recorded calls, keeping the current state
    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }
}

impl StyledSurface for RecordingSurface {
    fn lexer(&self) -> i32 {
        self.lexer
    }

    fn lexer_language(&self) -> String {
        match &self.language {
            Some(language) => language.clone(),
            None => Lexer::from_id(self.lexer)
                .map(|lexer| lexer.name().to_string())
                .unwrap_or_else(|| format!("lexer {}", self.lexer)),
        }
    }

    fn is_valid(&self) -> bool {
        self.valid
    }

    fn set_background_color(&mut self, color: &str) -> Result<()> {
        self.calls.push(SurfaceCall::Background(color.to_string()));
        self.background = Some(color.to_string());
        Ok(())
    }

    fn set_selection_background(&mut self, color: &str) -> Result<()> {
        self.calls
            .push(SurfaceCall::SelectionBackground(color.to_string()));
        self.selection_background = Some(color.to_string());
        Ok(())
    }

    fn set_fold_margin_color(&mut self, color: &str) -> Result<()> {
        self.calls.push(SurfaceCall::FoldMargin(color.to_string()));
        self.fold_margin = Some(color.to_string());
        Ok(())
    }

    fn set_fold_margin_highlight_color(&mut self, color: &str) -> Result<()> {
        self.calls
            .push(SurfaceCall::FoldMarginHighlight(color.to_string()));
        self.fold_margin_highlight = Some(color.to_string());
        Ok(())
    }

    fn assign_slot_style(&mut self, slot: SlotId, spec: &str) -> Result<()> {
        if !self.valid || self.fail_on == Some(slot) {
            return Err(StyleError::Surface(format!("cannot style slot {}", slot)));
        }
        self.calls.push(SurfaceCall::SlotStyle(slot, spec.to_string()));
        self.styles.insert(slot, spec.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_calls_and_state() {
        let mut surface = RecordingSurface::new(2);
        surface.assign_slot_style(5, "bold").ok();
        surface.assign_slot_style(5, "italic").ok();
        surface.set_background_color("#ffffff").ok();

        assert_eq!(surface.lexer(), 2);
        assert_eq!(surface.style(5), Some("italic"));
        assert_eq!(surface.slot_calls(), vec![(5, "bold"), (5, "italic")]);
        assert_eq!(surface.background.as_deref(), Some("#ffffff"));
        assert_eq!(surface.calls.len(), 3);
    }

    #[test]
    fn test_failing_slot() {
        let mut surface = RecordingSurface::new(2).failing_on(7);
        assert!(surface.assign_slot_style(6, "").is_ok());
        assert!(matches!(
            surface.assign_slot_style(7, ""),
            Err(StyleError::Surface(_))
        ));
        assert_eq!(surface.style(7), None);
    }

    #[test]
    fn test_lexer_language() {
        assert_eq!(RecordingSurface::new(2).lexer_language(), "python");
        assert_eq!(RecordingSurface::new(9).lexer_language(), "lexer 9");
        assert_eq!(
            RecordingSurface::new(9).with_language("lua").lexer_language(),
            "lua"
        );
    }

    #[test]
    fn test_invalidate() {
        let mut surface = RecordingSurface::new(2);
        assert!(surface.is_valid());
        surface.invalidate();
        assert!(!surface.is_valid());
        assert!(surface.assign_slot_style(0, "").is_err());
    }
}
