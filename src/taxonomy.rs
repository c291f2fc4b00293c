//! Token taxonomy
//!
//! Lexical token categories form a tree addressed by dot-paths
//! (`Keyword`, `Keyword.Reserved`, `Literal.String.Doc`). The tree root
//! (`Token`) is implicit and never written.

use std::fmt;

/// A node in the token category tree
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TokenCategory {
    name: String,
}

/// Short spellings accepted by `TokenCategory::parse`
const ALIASES: &[(&str, &str)] = &[("String", "Literal.String"), ("Number", "Literal.Number")];

impl TokenCategory {
    /// Create a category from its canonical dot-path
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }

    /// Parse a category name as written in a theme
    ///
    /// Strips a leading `Token.` and expands the `String`/`Number`
    /// shorthands to their `Literal.*` paths. Returns `None` for empty
    /// names or names with empty path components.
    pub fn parse(name: &str) -> Option<Self> {
        let name = name.trim();
        let name = name.strip_prefix("Token.").unwrap_or(name);
        if name.is_empty() || name == "Token" || name.split('.').any(str::is_empty) {
            return None;
        }

        for (short, long) in ALIASES {
            if name == *short {
                return Some(Self::new(long));
            }
            if let Some(rest) = name.strip_prefix(short).and_then(|r| r.strip_prefix('.')) {
                return Some(Self::new(&format!("{}.{}", long, rest)));
            }
        }

        Some(Self::new(name))
    }

    /// The canonical dot-path
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The parent category, `None` for top-level categories
    pub fn parent(&self) -> Option<TokenCategory> {
        self.name
            .rsplit_once('.')
            .map(|(parent, _)| TokenCategory::new(parent))
    }

    /// Number of path components (`Keyword` is 1)
    pub fn depth(&self) -> usize {
        self.name.split('.').count()
    }

    /// Check if this category lies strictly below `ancestor`
    pub fn is_descendant_of(&self, ancestor: &TokenCategory) -> bool {
        self.name
            .strip_prefix(ancestor.name.as_str())
            .is_some_and(|rest| rest.starts_with('.'))
    }
}

impl fmt::Display for TokenCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// The standard category tree, parents before children
pub const STANDARD: &[&str] = &[
    "Text",
    "Text.Whitespace",
    "Escape",
    "Error",
    "Other",
    "Keyword",
    "Keyword.Constant",
    "Keyword.Declaration",
    "Keyword.Namespace",
    "Keyword.Pseudo",
    "Keyword.Reserved",
    "Keyword.Type",
    "Name",
    "Name.Attribute",
    "Name.Builtin",
    "Name.Builtin.Pseudo",
    "Name.Class",
    "Name.Constant",
    "Name.Decorator",
    "Name.Entity",
    "Name.Exception",
    "Name.Function",
    "Name.Function.Magic",
    "Name.Property",
    "Name.Label",
    "Name.Namespace",
    "Name.Other",
    "Name.Tag",
    "Name.Variable",
    "Name.Variable.Class",
    "Name.Variable.Global",
    "Name.Variable.Instance",
    "Name.Variable.Magic",
    "Literal",
    "Literal.Date",
    "Literal.String",
    "Literal.String.Affix",
    "Literal.String.Backtick",
    "Literal.String.Char",
    "Literal.String.Delimiter",
    "Literal.String.Doc",
    "Literal.String.Double",
    "Literal.String.Escape",
    "Literal.String.Heredoc",
    "Literal.String.Interpol",
    "Literal.String.Other",
    "Literal.String.Regex",
    "Literal.String.Single",
    "Literal.String.Symbol",
    "Literal.Number",
    "Literal.Number.Bin",
    "Literal.Number.Float",
    "Literal.Number.Hex",
    "Literal.Number.Integer",
    "Literal.Number.Integer.Long",
    "Literal.Number.Oct",
    "Operator",
    "Operator.Word",
    "Punctuation",
    "Comment",
    "Comment.Hashbang",
    "Comment.Multiline",
    "Comment.Preproc",
    "Comment.PreprocFile",
    "Comment.Single",
    "Comment.Special",
    "Generic",
    "Generic.Deleted",
    "Generic.Emph",
    "Generic.Error",
    "Generic.Heading",
    "Generic.Inserted",
    "Generic.Output",
    "Generic.Prompt",
    "Generic.Strong",
    "Generic.Subheading",
    "Generic.Traceback",
];

/// Check if a canonical name is part of the standard tree
pub fn is_standard(name: &str) -> bool {
    STANDARD.contains(&name)
}
