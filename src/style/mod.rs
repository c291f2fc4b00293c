//! Style spec handling
//!
//! This module decodes theme style specs (`"bold #008000"`, `"bg:"`, ...)
//! into attribute records and re-encodes them in the mini-language
//! understood by the wx.stc `StyleSetSpec` primitive.

mod attributes;
mod parser;
mod encoder;

pub use attributes::{Background, StyleAttributes};
pub use parser::parse;
pub use encoder::encode;

/// Parse a theme spec and re-encode it for a styled text surface
pub fn convert(spec: &str) -> String {
    encode(&parse(spec))
}
