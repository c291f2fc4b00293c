//! Terminal preview of slot assignments
//!
//! Prints one row per slot assignment made on a `RecordingSurface`,
//! with a swatch drawn in the assigned colours.

use std::io::Write;

use crossterm::queue;
use crossterm::style::{Attribute, Color, ContentStyle, Print, PrintStyledContent, StyledContent};
use unicode_width::UnicodeWidthStr;

use crate::error::Result;
use crate::slots::{SlotId, SlotTable};
use crate::surface::RecordingSurface;

const SWATCH: &str = " Sample Text ";

/// Parse `#rrggbb` or `#rgb` into a terminal colour
fn parse_color(value: &str) -> Option<Color> {
    let hex = value.strip_prefix('#').unwrap_or(value);
    if !hex.is_ascii() {
        return None;
    }
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();
    match hex.len() {
        6 => Some(Color::Rgb {
            r: channel(&hex[0..2])?,
            g: channel(&hex[2..4])?,
            b: channel(&hex[4..6])?,
        }),
        3 => {
            let expand = |i: usize| channel(&hex[i..i + 1]).map(|v| v * 17);
            Some(Color::Rgb {
                r: expand(0)?,
                g: expand(1)?,
                b: expand(2)?,
            })
        }
        _ => None,
    }
}

/// Terminal style equivalent of an encoded surface spec
pub fn content_style(spec: &str) -> ContentStyle {
    let mut style = ContentStyle::new();
    for token in spec.split_whitespace() {
        if let Some(value) = token.strip_prefix("fore:") {
            style.foreground_color = parse_color(value);
        } else if let Some(value) = token.strip_prefix("back:") {
            style.background_color = parse_color(value);
        } else if token == "bold" {
            style.attributes.set(Attribute::Bold);
        } else if token == "italic" {
            style.attributes.set(Attribute::Italic);
        }
    }
    style
}

/// Category owning a slot, if any
fn owner<'t>(table: &'t SlotTable, slot: SlotId) -> Option<&'t str> {
    table
        .iter()
        .filter(|(_, slots)| slots.contains(&slot))
        .last()
        .map(|(category, _)| category.name())
}

/// Pad text to a display width
fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(fill))
}

/// Write the preview table for a formatted surface
pub fn render<W: Write>(
    out: &mut W,
    surface: &RecordingSurface,
    table: &SlotTable,
    color: bool,
) -> Result<()> {
    let rows: Vec<(SlotId, &str, &str)> = surface
        .slot_calls()
        .into_iter()
        .map(|(slot, spec)| (slot, owner(table, slot).unwrap_or("-"), spec))
        .collect();

    let name_width = rows
        .iter()
        .map(|(_, name, _)| name.width())
        .max()
        .unwrap_or(0)
        .max("category".width());
    let spec_width = rows
        .iter()
        .map(|(_, _, spec)| spec.width())
        .max()
        .unwrap_or(0)
        .max("spec".width());

    queue!(
        out,
        Print(format!(
            "{:>5}  {}  {}  sample\n",
            "slot",
            pad("category", name_width),
            pad("spec", spec_width)
        ))
    )?;

    for (slot, name, spec) in rows {
        queue!(
            out,
            Print(format!(
                "{:>5}  {}  {}  ",
                slot,
                pad(name, name_width),
                pad(spec, spec_width)
            ))
        )?;
        if color {
            queue!(out, PrintStyledContent(StyledContent::new(content_style(spec), SWATCH)))?;
        } else {
            queue!(out, Print(SWATCH))?;
        }
        queue!(out, Print("\n"))?;
    }

    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::StyledSurface;
    use crate::taxonomy::TokenCategory;

    #[test]
    fn test_parse_color() {
        assert_eq!(
            parse_color("#ff8000"),
            Some(Color::Rgb { r: 255, g: 128, b: 0 })
        );
        assert_eq!(parse_color("abc"), Some(Color::Rgb { r: 170, g: 187, b: 204 }));
        assert_eq!(parse_color("None"), None);
        assert_eq!(parse_color("#3"), None);
    }

    #[test]
    fn test_content_style() {
        let style = content_style("fore:#000000 back:None bold");
        assert_eq!(style.foreground_color, Some(Color::Rgb { r: 0, g: 0, b: 0 }));
        assert_eq!(style.background_color, None);
        assert!(style.attributes.has(Attribute::Bold));
        assert!(!style.attributes.has(Attribute::Italic));
    }

    #[test]
    fn test_render_plain() {
        let table = SlotTable::from_entries(vec![(TokenCategory::new("Keyword"), vec![5])]);
        let mut surface = RecordingSurface::new(2);
        surface.assign_slot_style(5, "bold").ok();
        surface.assign_slot_style(9, "").ok();

        let mut out: Vec<u8> = Vec::new();
        assert!(render(&mut out, &surface, &table, false).is_ok());
        let text = String::from_utf8(out).unwrap_or_default();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with(" slot  category"));
        assert!(lines[1].starts_with("    5  Keyword   bold"));
        assert!(lines[2].starts_with("    9  -"));
    }

    #[test]
    fn test_pad_uses_display_width() {
        assert_eq!(pad("ab", 4), "ab  ");
        assert_eq!(pad("漢", 4), "漢  ");
        assert_eq!(pad("toolong", 3), "toolong");
    }
}
