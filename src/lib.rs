//! stcstyle - token taxonomy themes for wx.stc style slots
//!
//! Converts theme style specs (`"bold #008000"`) into the spec language
//! of a styled text control and assigns them to every numeric style slot
//! the token category controls.

pub mod config;
pub mod error;
pub mod formatter;
pub mod lexer;
pub mod mapper;
pub mod preview;
pub mod slots;
pub mod style;
pub mod surface;
pub mod taxonomy;
pub mod theme;

pub use error::{Result, StyleError};
pub use formatter::Formatter;
pub use lexer::Lexer;
pub use mapper::{apply, SlotMapper, TaxonomyStyleMap};
pub use slots::{SlotId, SlotTable};
pub use style::{Background, StyleAttributes};
pub use surface::{RecordingSurface, StyledSurface, SurfaceCall};
pub use taxonomy::TokenCategory;
pub use theme::Theme;
