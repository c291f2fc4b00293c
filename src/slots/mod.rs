//! Style slots
//!
//! A styled text surface groups characters into numbered style slots.
//! This module holds the wx.stc slot ids and the built-in table telling
//! which token category controls which slots.

pub mod ids;
mod builtin;
mod table;

pub use builtin::{Slot, SlotEntry, SlotScope, BUILTIN};
pub use ids::SlotId;
pub use table::SlotTable;
