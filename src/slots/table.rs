//! Category to slot lookup table

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::lexer::Lexer;
use crate::taxonomy::TokenCategory;

use super::builtin::{Slot, BUILTIN};
use super::ids::SlotId;

/// Ordered mapping from token category to the slots it styles
///
/// Categories keep the order they were first inserted in; each
/// category's slot list keeps its own order with repeats dropped.
#[derive(Debug, Clone, Default)]
pub struct SlotTable {
    entries: Vec<(TokenCategory, Vec<SlotId>)>,
    index: HashMap<TokenCategory, usize>,
}

static PER_LEXER: Lazy<Vec<(Lexer, SlotTable)>> = Lazy::new(|| {
    Lexer::ALL
        .into_iter()
        .map(|lexer| (lexer, SlotTable::from_builtin(|slot| slot.applies_to(lexer))))
        .collect()
});

static POOLED: Lazy<SlotTable> = Lazy::new(|| SlotTable::from_builtin(|_| true));

impl SlotTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from `(category, slots)` pairs
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (TokenCategory, Vec<SlotId>)>,
    {
        let mut table = Self::new();
        for (category, slots) in entries {
            table.insert(category, slots);
        }
        table
    }

    fn from_builtin(keep: impl Fn(&Slot) -> bool) -> Self {
        Self::from_entries(BUILTIN.iter().map(|entry| {
            let slots = entry
                .slots
                .iter()
                .filter(|slot| keep(*slot))
                .map(|slot| slot.id)
                .collect();
            (TokenCategory::new(entry.category), slots)
        }))
    }

    /// The built-in table for one lexer: its own slots plus the shared ones
    pub fn for_lexer(lexer: Lexer) -> &'static SlotTable {
        PER_LEXER
            .iter()
            .find(|(l, _)| *l == lexer)
            .map(|(_, table)| table)
            .unwrap_or_else(Self::pooled)
    }

    /// The built-in table with every lexer's slots pooled per category
    ///
    /// Raw ids are reused between lexers, so several categories claim
    /// the same id here. Applying it leaves whichever category was
    /// applied last in charge of a shared id.
    pub fn pooled() -> &'static SlotTable {
        &POOLED
    }

    /// Add slots for a category, appending if it is already present
    pub fn insert(&mut self, category: TokenCategory, slots: Vec<SlotId>) {
        let idx = match self.index.get(&category) {
            Some(&idx) => idx,
            None => {
                self.entries.push((category.clone(), Vec::new()));
                self.index.insert(category, self.entries.len() - 1);
                self.entries.len() - 1
            }
        };
        let list = &mut self.entries[idx].1;
        for slot in slots {
            if !list.contains(&slot) {
                list.push(slot);
            }
        }
    }

    /// Slots for a category (empty if the category is not listed)
    pub fn slots(&self, category: &TokenCategory) -> &[SlotId] {
        self.index
            .get(category)
            .map(|&idx| self.entries[idx].1.as_slice())
            .unwrap_or(&[])
    }

    /// Check if a category is listed, even with no slots
    pub fn contains(&self, category: &TokenCategory) -> bool {
        self.index.contains_key(category)
    }

    /// Number of categories listed
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no categories are listed
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over categories and their slots in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&TokenCategory, &[SlotId])> {
        self.entries
            .iter()
            .map(|(category, slots)| (category, slots.as_slice()))
    }

    /// Slot ids claimed by more than one category, sorted
    pub fn overlapping_slots(&self) -> Vec<SlotId> {
        let mut owners: HashMap<SlotId, usize> = HashMap::new();
        for (_, slots) in &self.entries {
            for slot in slots {
                *owners.entry(*slot).or_insert(0) += 1;
            }
        }
        let mut shared: Vec<SlotId> = owners
            .into_iter()
            .filter(|(_, count)| *count > 1)
            .map(|(slot, _)| slot)
            .collect();
        shared.sort_unstable();
        shared
    }
}
