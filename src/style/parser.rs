//! Style spec parser
//!
//! Every detector is anchored at the start of the whole spec string. A
//! token is only recognised when the spec *begins* with it, so in
//! `"#008000 bold"` the colour is found and the trailing `bold` is not,
//! while `"bold #008000"` yields bold and no colour. Unrecognised text is
//! ignored; parsing never fails.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use super::attributes::{Background, StyleAttributes};

/// A start-anchored pattern for one spec token
struct Detector {
    /// Name for debugging
    name: &'static str,
    /// Compiled pattern (always begins with `\A`)
    pattern: Option<Regex>,
}

impl Detector {
    fn new(name: &'static str, pattern: &str) -> Self {
        Self {
            name,
            pattern: Regex::new(pattern).ok(),
        }
    }

    /// Match at position 0 of the spec, never further in
    fn at_start<'s>(&self, spec: &'s str) -> Option<Captures<'s>> {
        let captures = self.pattern.as_ref()?.captures(spec)?;
        tracing::trace!(detector = self.name, spec, "spec token matched");
        Some(captures)
    }

    fn matches(&self, spec: &str) -> bool {
        self.at_start(spec).is_some()
    }
}

/// The full set of detectors, compiled once
struct Grammar {
    foreground: Detector,
    background: Detector,
    border: Detector,
    bold: Detector,
    nobold: Detector,
    italic: Detector,
    noitalic: Detector,
    underline: Detector,
    nounderline: Detector,
    noinherit: Detector,
}

impl Grammar {
    fn new() -> Self {
        Self {
            foreground: Detector::new("foreground", r"\A#[0-9a-f]{0,6}"),
            background: Detector::new("background", r"\Abg: ?([0-9a-f]{0,3})"),
            border: Detector::new("border", r"\Aborder: ?#?([0-9a-f]{0,6})"),
            bold: Detector::new("bold", r"\Abold"),
            nobold: Detector::new("nobold", r"\Anobold"),
            italic: Detector::new("italic", r"\Aitalic"),
            noitalic: Detector::new("noitalic", r"\Anoitalic"),
            underline: Detector::new("underline", r"\Aunderline"),
            nounderline: Detector::new("nounderline", r"\Anounderline"),
            noinherit: Detector::new("noinherit", r"\Anoinherit"),
        }
    }
}

static GRAMMAR: Lazy<Grammar> = Lazy::new(Grammar::new);

/// Text of capture group 1, empty if it did not take part
fn group(captures: &Captures<'_>) -> String {
    captures.get(1).map_or(String::new(), |m| m.as_str().to_string())
}

/// Parse a theme style spec into attributes
///
/// Hex digits must be lowercase; shorthand colours are kept verbatim
/// (`#abc` stays `#abc`).
pub fn parse(spec: &str) -> StyleAttributes {
    let grammar = &*GRAMMAR;

    let foreground = grammar
        .foreground
        .at_start(spec)
        .and_then(|c| c.get(0).map(|m| m.as_str().to_string()));

    let background = grammar.background.at_start(spec).map(|c| {
        let digits = group(&c);
        if digits.is_empty() {
            Background::Clear
        } else {
            Background::Color(digits)
        }
    });

    let border = grammar.border.at_start(spec).map(|c| group(&c));

    StyleAttributes {
        foreground,
        background,
        bold: grammar.bold.matches(spec) && !grammar.nobold.matches(spec),
        italic: grammar.italic.matches(spec) && !grammar.noitalic.matches(spec),
        underline: grammar.underline.matches(spec) && !grammar.nounderline.matches(spec),
        noinherit: grammar.noinherit.matches(spec),
        border,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_six_digit_foreground() {
        for spec in ["#000000", "#ff0000", "#19177c", "#abcdef"] {
            assert_eq!(parse(spec).foreground.as_deref(), Some(spec));
        }
    }

    #[test]
    fn test_shorthand_foreground_kept() {
        assert_eq!(parse("#04d").foreground.as_deref(), Some("#04d"));
        assert_eq!(parse("#").foreground.as_deref(), Some("#"));
    }

    #[test]
    fn test_foreground_stops_at_uppercase() {
        // only lowercase hex digits are part of the colour
        assert_eq!(parse("#3D7B7B").foreground.as_deref(), Some("#3"));
    }

    #[test]
    fn test_foreground_only_at_start() {
        assert_eq!(parse("bold #008000").foreground, None);
        assert_eq!(parse(" #008000").foreground, None);
    }

    #[test]
    fn test_foreground_ignores_rest_of_spec() {
        let attrs = parse("#ff0000 bold italic");
        assert_eq!(attrs.foreground.as_deref(), Some("#ff0000"));
        assert!(!attrs.bold);
        assert!(!attrs.italic);
    }

    #[test]
    fn test_background_clear() {
        assert_eq!(parse("bg:").background, Some(Background::Clear));
    }

    #[test]
    fn test_background_digits() {
        assert_eq!(
            parse("bg:abc").background,
            Some(Background::Color("abc".to_string()))
        );
        // at most three digits are taken
        assert_eq!(
            parse("bg:ffffff").background,
            Some(Background::Color("fff".to_string()))
        );
    }

    #[test]
    fn test_background_hash_not_a_digit() {
        assert_eq!(parse("bg:#ffffff").background, Some(Background::Clear));
    }

    #[test]
    fn test_background_does_not_set_foreground() {
        let attrs = parse("bg:#f00");
        assert_eq!(attrs.foreground, None);
    }

    #[test]
    fn test_bold_and_nobold() {
        assert!(parse("bold").bold);
        assert!(!parse("nobold").bold);
        assert!(!parse("nobold #b00040").bold);
    }

    #[test]
    fn test_italic_and_noitalic() {
        assert!(parse("italic").italic);
        assert!(!parse("noitalic").italic);
    }

    #[test]
    fn test_bolditalic_is_bold_only() {
        let attrs = parse("bolditalic");
        assert!(attrs.bold);
        assert!(!attrs.italic);
    }

    #[test]
    fn test_bold_italic_is_bold_only() {
        let attrs = parse("bold italic");
        assert!(attrs.bold);
        assert!(!attrs.italic);
    }

    #[test]
    fn test_underline_and_noinherit_parsed() {
        assert!(parse("underline").underline);
        assert!(!parse("nounderline").underline);
        assert!(parse("noinherit").noinherit);
    }

    #[test]
    fn test_border() {
        assert_eq!(parse("border:#ff0000").border.as_deref(), Some("ff0000"));
        assert_eq!(parse("border:").border.as_deref(), Some(""));
        assert_eq!(parse("#000 border:#ff0000").border, None);
    }

    #[test]
    fn test_empty_and_garbage() {
        assert_eq!(parse(""), StyleAttributes::default());
        assert_eq!(parse("not a spec"), StyleAttributes::default());
        assert_eq!(parse("BOLD"), StyleAttributes::default());
    }
}
