//! Encoder for the wx.stc style spec mini-language

use super::attributes::{Background, StyleAttributes};

/// Marker the surface understands as "no background colour"
const CLEAR_BACKGROUND: &str = "None";

/// Encode attributes as a space separated wx.stc spec
///
/// Tokens come out in a fixed order: `fore:`, `back:`, `bold`, `italic`.
/// Unspecified attributes produce nothing.
pub fn encode(attrs: &StyleAttributes) -> String {
    let mut out: Vec<String> = Vec::new();

    if let Some(fg) = &attrs.foreground {
        out.push(format!("fore:{}", fg));
    }
    match &attrs.background {
        Some(Background::Color(color)) => out.push(format!("back:{}", color)),
        Some(Background::Clear) => out.push(format!("back:{}", CLEAR_BACKGROUND)),
        None => {}
    }
    if attrs.bold {
        out.push("bold".to_string());
    }
    if attrs.italic {
        out.push("italic".to_string());
    }

    out.join(" ")
}
