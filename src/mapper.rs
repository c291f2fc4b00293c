//! Category to slot style mapping
//!
//! Takes a theme's category specs and a slot table and assigns each
//! category's converted spec to every slot it owns.

use crate::error::Result;
use crate::slots::SlotTable;
use crate::style;
use crate::surface::StyledSurface;
use crate::taxonomy::TokenCategory;

/// Ordered category to spec mapping, as a theme defines it
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaxonomyStyleMap {
    entries: Vec<(TokenCategory, String)>,
}

impl TaxonomyStyleMap {
    /// Create an empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the spec for a category
    ///
    /// A category that is already present keeps its position.
    pub fn insert(&mut self, category: TokenCategory, spec: &str) {
        match self.entries.iter_mut().find(|(c, _)| *c == category) {
            Some((_, existing)) => *existing = spec.to_string(),
            None => self.entries.push((category, spec.to_string())),
        }
    }

    /// Spec for a category
    pub fn get(&self, category: &TokenCategory) -> Option<&str> {
        self.entries
            .iter()
            .find(|(c, _)| c == category)
            .map(|(_, spec)| spec.as_str())
    }

    /// Iterate in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&TokenCategory, &str)> {
        self.entries
            .iter()
            .map(|(category, spec)| (category, spec.as_str()))
    }

    /// Number of categories with a spec
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no category has a spec
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for TaxonomyStyleMap {
    fn from_iter<I: IntoIterator<Item = (&'a str, &'a str)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (name, spec) in iter {
            map.insert(TokenCategory::new(name), spec);
        }
        map
    }
}

/// Applies category specs to surface slots through a slot table
pub struct SlotMapper<'t> {
    table: &'t SlotTable,
}

impl<'t> SlotMapper<'t> {
    /// Create a mapper over a slot table
    pub fn new(table: &'t SlotTable) -> Self {
        Self { table }
    }

    /// Assign every category's spec to each of its slots
    ///
    /// Categories without slots are skipped. Each spec is converted once
    /// per category. A failing assignment stops the run; slots styled
    /// before it keep their new style.
    pub fn apply<S>(&self, styles: &TaxonomyStyleMap, surface: &mut S) -> Result<()>
    where
        S: StyledSurface + ?Sized,
    {
        let _span = tracing::debug_span!("apply_styles", categories = styles.len()).entered();
        let mut assigned = 0usize;

        for (category, spec) in styles.iter() {
            let slots = self.table.slots(category);
            if slots.is_empty() {
                tracing::debug!(category = %category, "no slots, skipping");
                continue;
            }

            let encoded = style::convert(spec);
            tracing::debug!(category = %category, spec, encoded = %encoded, slots = slots.len(), "applying");
            for &slot in slots {
                tracing::trace!(slot, spec = %encoded, "assign slot style");
                surface.assign_slot_style(slot, &encoded)?;
                assigned += 1;
            }
        }

        tracing::debug!(assigned, "slot styles applied");
        Ok(())
    }
}

/// Apply `styles` to `surface` through `table`
pub fn apply<S>(styles: &TaxonomyStyleMap, table: &SlotTable, surface: &mut S) -> Result<()>
where
    S: StyledSurface + ?Sized,
{
    SlotMapper::new(table).apply(styles, surface)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StyleError;
    use crate::surface::RecordingSurface;

    fn cat(name: &str) -> TokenCategory {
        TokenCategory::new(name)
    }

    fn table() -> SlotTable {
        SlotTable::from_entries(vec![
            (cat("Keyword"), vec![10, 21]),
            (cat("Comment"), vec![15]),
            (cat("Name"), vec![]),
        ])
    }

    #[test]
    fn test_one_category_two_slots() {
        let styles: TaxonomyStyleMap = [("Keyword", "#008000")].into_iter().collect();
        let mut surface = RecordingSurface::new(2);
        apply(&styles, &table(), &mut surface).ok();

        assert_eq!(
            surface.slot_calls(),
            vec![(10, "fore:#008000"), (21, "fore:#008000")]
        );
    }

    #[test]
    fn test_unmapped_category_is_noop() {
        let styles: TaxonomyStyleMap = [("Operator", "bold"), ("Name", "italic")]
            .into_iter()
            .collect();
        let mut surface = RecordingSurface::new(2);
        assert!(apply(&styles, &table(), &mut surface).is_ok());
        assert!(surface.calls.is_empty());
    }

    #[test]
    fn test_leading_flags_and_trailing_colours() {
        let styles: TaxonomyStyleMap = [("Keyword", "bold #008000"), ("Comment", "italic #888888")]
            .into_iter()
            .collect();
        let mut surface = RecordingSurface::new(2);
        apply(&styles, &table(), &mut surface).ok();

        assert_eq!(
            surface.slot_calls(),
            vec![(10, "bold"), (21, "bold"), (15, "italic")]
        );
    }

    #[test]
    fn test_trailing_flags_dropped() {
        let styles: TaxonomyStyleMap = [("Keyword", "#008000 bold"), ("Comment", "#888888 italic")]
            .into_iter()
            .collect();
        let mut surface = RecordingSurface::new(2);
        apply(&styles, &table(), &mut surface).ok();

        assert_eq!(
            surface.slot_calls(),
            vec![(10, "fore:#008000"), (21, "fore:#008000"), (15, "fore:#888888")]
        );
    }

    #[test]
    fn test_idempotent() {
        let styles: TaxonomyStyleMap = [("Keyword", "bold"), ("Comment", "bg:")]
            .into_iter()
            .collect();
        let table = table();
        let mut surface = RecordingSurface::new(2);

        apply(&styles, &table, &mut surface).ok();
        let first_calls = surface.slot_calls().len();
        let first_state = surface.styles.clone();

        apply(&styles, &table, &mut surface).ok();
        assert_eq!(surface.slot_calls().len(), first_calls * 2);
        assert_eq!(surface.styles, first_state);
        let calls = surface.slot_calls();
        assert_eq!(calls[..first_calls], calls[first_calls..]);
    }

    #[test]
    fn test_overlapping_slots_last_wins() {
        let table = SlotTable::from_entries(vec![(cat("Keyword"), vec![1]), (cat("Comment"), vec![1])]);
        let styles: TaxonomyStyleMap = [("Keyword", "bold"), ("Comment", "italic")]
            .into_iter()
            .collect();
        let mut surface = RecordingSurface::new(2);
        apply(&styles, &table, &mut surface).ok();
        assert_eq!(surface.style(1), Some("italic"));
    }

    #[test]
    fn test_failure_keeps_earlier_slots() {
        let styles: TaxonomyStyleMap = [("Keyword", "bold"), ("Comment", "italic")]
            .into_iter()
            .collect();
        let mut surface = RecordingSurface::new(2).failing_on(21);
        let result = apply(&styles, &table(), &mut surface);

        assert!(matches!(result, Err(StyleError::Surface(_))));
        assert_eq!(surface.style(10), Some("bold"));
        assert_eq!(surface.style(21), None);
        assert_eq!(surface.style(15), None);
    }

    #[test]
    fn test_empty_spec_assigns_empty_string() {
        let styles: TaxonomyStyleMap = [("Comment", "")].into_iter().collect();
        let mut surface = RecordingSurface::new(2);
        apply(&styles, &table(), &mut surface).ok();
        assert_eq!(surface.slot_calls(), vec![(15, "")]);
    }

    #[test]
    fn test_style_map_insert_replaces() {
        let mut styles = TaxonomyStyleMap::new();
        styles.insert(cat("Keyword"), "bold");
        styles.insert(cat("Comment"), "italic");
        styles.insert(cat("Keyword"), "#000000");

        assert_eq!(styles.len(), 2);
        assert_eq!(styles.get(&cat("Keyword")), Some("#000000"));
        let order: Vec<_> = styles.iter().map(|(c, _)| c.name().to_string()).collect();
        assert_eq!(order, vec!["Keyword", "Comment"]);
    }
}
