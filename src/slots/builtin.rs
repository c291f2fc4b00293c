//! Built-in category to slot assignments
//!
//! Every supported lexer contributes its slots under the category that
//! owns them. A category listed with no slots has no visual effect on
//! any supported lexer.

use crate::lexer::Lexer;

use super::ids::{common, cpp, html, json, python, r, t3, yaml, SlotId};

/// Namespace a slot id belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotScope {
    /// Predefined styles shared by every lexer
    Common,
    /// Styles private to one lexer
    Lexer(Lexer),
}

/// A slot id qualified by its namespace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Slot {
    pub scope: SlotScope,
    pub id: SlotId,
}

impl Slot {
    /// Check if this slot exists while `lexer` is active
    pub fn applies_to(&self, lexer: Lexer) -> bool {
        match self.scope {
            SlotScope::Common => true,
            SlotScope::Lexer(owner) => owner == lexer,
        }
    }
}

/// One category and the slots it styles
#[derive(Debug)]
pub struct SlotEntry {
    pub category: &'static str,
    pub slots: &'static [Slot],
}

const fn c(id: SlotId) -> Slot {
    Slot { scope: SlotScope::Common, id }
}

const fn py(id: SlotId) -> Slot {
    Slot { scope: SlotScope::Lexer(Lexer::Python), id }
}

const fn cc(id: SlotId) -> Slot {
    Slot { scope: SlotScope::Lexer(Lexer::Cpp), id }
}

const fn ht(id: SlotId) -> Slot {
    Slot { scope: SlotScope::Lexer(Lexer::Html), id }
}

const fn ym(id: SlotId) -> Slot {
    Slot { scope: SlotScope::Lexer(Lexer::Yaml), id }
}

const fn rr(id: SlotId) -> Slot {
    Slot { scope: SlotScope::Lexer(Lexer::R), id }
}

const fn js(id: SlotId) -> Slot {
    Slot { scope: SlotScope::Lexer(Lexer::Json), id }
}

macro_rules! entry {
    ($category:expr, $slots:expr $(,)?) => {
        SlotEntry {
            category: $category,
            slots: $slots,
        }
    };
}

/// The built-in table
pub static BUILTIN: &[SlotEntry] = &[
    entry!(
        "Text",
        &[
            c(common::STYLE_DEFAULT),
            py(python::DEFAULT),
            cc(cpp::DEFAULT),
            ht(t3::DEFAULT),
            ht(t3::X_DEFAULT),
            ht(t3::HTML_DEFAULT),
            ht(html::DEFAULT),
            ht(html::SGML_DEFAULT),
            ht(html::HJ_DEFAULT),
            ht(html::HJA_DEFAULT),
            ht(html::HB_DEFAULT),
            ht(html::HBA_DEFAULT),
            ht(html::HP_DEFAULT),
            ht(html::HPA_DEFAULT),
            ht(html::HPHP_DEFAULT),
            ym(yaml::DEFAULT),
            rr(r::DEFAULT),
            js(json::DEFAULT),
            ym(yaml::TEXT),
        ],
    ),
    entry!("Text.Whitespace", &[c(common::STYLE_INDENTGUIDE)]),
    entry!("Escape", &[]),
    entry!(
        "Keyword",
        &[
            py(python::WORD),
            cc(cpp::WORD),
            ym(yaml::KEYWORD),
            rr(r::KWORD),
            rr(r::BASEKWORD),
            js(json::KEYWORD),
        ],
    ),
    entry!("Keyword.Constant", &[]),
    entry!("Keyword.Declaration", &[py(python::DEFNAME)]),
    entry!("Keyword.Namespace", &[]),
    entry!("Keyword.Pseudo", &[]),
    entry!(
        "Keyword.Reserved",
        &[py(python::WORD2), cc(cpp::WORD2), rr(r::OTHERKWORD)],
    ),
    entry!("Keyword.Type", &[]),
    entry!("Name", &[]),
    entry!("Name.Attribute", &[]),
    entry!("Name.Builtin", &[]),
    entry!("Name.Builtin.Pseudo", &[]),
    entry!("Name.Class", &[py(python::CLASSNAME)]),
    entry!("Name.Constant", &[]),
    entry!("Name.Decorator", &[py(python::DECORATOR)]),
    entry!("Name.Entity", &[]),
    entry!("Name.Exception", &[]),
    entry!("Name.Function", &[]),
    entry!("Name.Function.Magic", &[]),
    entry!("Name.Property", &[js(json::PROPERTYNAME)]),
    entry!("Name.Label", &[]),
    entry!("Name.Namespace", &[]),
    entry!("Name.Other", &[]),
    entry!("Name.Tag", &[ht(t3::HTML_TAG)]),
    entry!(
        "Name.Variable",
        &[
            py(python::IDENTIFIER),
            cc(cpp::IDENTIFIER),
            ym(yaml::IDENTIFIER),
            rr(r::IDENTIFIER),
        ],
    ),
    entry!("Name.Variable.Class", &[cc(cpp::GLOBALCLASS)]),
    entry!("Name.Variable.Global", &[]),
    entry!("Name.Variable.Instance", &[]),
    entry!("Name.Variable.Magic", &[]),
    entry!("Literal", &[cc(cpp::USERLITERAL)]),
    entry!("Literal.Date", &[]),
    entry!(
        "Literal.String",
        &[
            py(python::STRING),
            cc(cpp::STRING),
            ht(t3::HTML_STRING),
            js(json::STRING),
            rr(r::STRING),
        ],
    ),
    entry!("Literal.String.Affix", &[]),
    entry!("Literal.String.Backtick", &[]),
    entry!(
        "Literal.String.Char",
        &[py(python::CHARACTER), cc(cpp::CHARACTER)],
    ),
    entry!("Literal.String.Delimiter", &[]),
    entry!(
        "Literal.String.Doc",
        &[
            py(python::TRIPLE),
            py(python::TRIPLEDOUBLE),
            cc(cpp::COMMENTDOC),
            ym(yaml::DOCUMENT),
        ],
    ),
    entry!("Literal.String.Double", &[rr(r::STRING2)]),
    entry!("Literal.String.Escape", &[cc(cpp::ESCAPESEQUENCE)]),
    entry!("Literal.String.Heredoc", &[]),
    entry!("Literal.String.Interpol", &[]),
    entry!("Literal.String.Other", &[]),
    entry!("Literal.String.Regex", &[cc(cpp::REGEX)]),
    entry!("Literal.String.Single", &[]),
    entry!("Literal.String.Symbol", &[]),
    entry!(
        "Literal.Number",
        &[
            py(python::NUMBER),
            cc(cpp::NUMBER),
            ym(yaml::NUMBER),
            rr(r::NUMBER),
            js(json::NUMBER),
        ],
    ),
    entry!("Literal.Number.Bin", &[]),
    entry!("Literal.Number.Float", &[]),
    entry!("Literal.Number.Hex", &[]),
    entry!("Literal.Number.Integer", &[]),
    entry!("Literal.Number.Integer.Long", &[]),
    entry!("Literal.Number.Oct", &[]),
    entry!(
        "Operator",
        &[
            py(python::OPERATOR),
            cc(cpp::OPERATOR),
            ym(yaml::OPERATOR),
            rr(r::OPERATOR),
            js(json::OPERATOR),
        ],
    ),
    entry!("Operator.Word", &[]),
    entry!("Punctuation", &[]),
    entry!(
        "Comment",
        &[cc(cpp::COMMENT), ym(yaml::COMMENT), rr(r::COMMENT)],
    ),
    entry!("Comment.Hashbang", &[cc(cpp::HASHQUOTEDSTRING)]),
    entry!(
        "Comment.Multiline",
        &[py(python::COMMENTBLOCK), js(json::BLOCKCOMMENT)],
    ),
    entry!("Comment.Preproc", &[cc(cpp::PREPROCESSORCOMMENT)]),
    entry!("Comment.PreprocFile", &[cc(cpp::PREPROCESSORCOMMENTDOC)]),
    entry!(
        "Comment.Single",
        &[py(python::COMMENTLINE), cc(cpp::COMMENTLINE)],
    ),
    entry!("Comment.Special", &[]),
    entry!("Generic", &[]),
    entry!("Generic.Deleted", &[]),
    entry!("Generic.Emph", &[]),
    entry!(
        "Generic.Error",
        &[c(common::STYLE_BRACEBAD), js(json::ERROR), ym(yaml::ERROR)],
    ),
    entry!("Generic.Heading", &[]),
    entry!("Generic.Inserted", &[]),
    entry!("Generic.Output", &[]),
    entry!("Generic.Prompt", &[]),
    entry!("Generic.Strong", &[]),
    entry!("Generic.Subheading", &[]),
    entry!("Generic.Traceback", &[]),
    // Styles with no better home. STYLE_LASTPREDEFINED is the same id as
    // STYLE_FOLDDISPLAYTEXT and is listed once.
    entry!(
        "Other",
        &[
            py(python::STRINGEOL),
            cc(cpp::COMMENTDOCKEYWORD),
            cc(cpp::COMMENTDOCKEYWORDERROR),
            cc(cpp::COMMENTLINEDOC),
            cc(cpp::PREPROCESSOR),
            cc(cpp::STRINGEOL),
            cc(cpp::STRINGRAW),
            cc(cpp::TASKMARKER),
            cc(cpp::TRIPLEVERBATIM),
            cc(cpp::UUID),
            cc(cpp::VERBATIM),
            ym(yaml::REFERENCE),
            rr(r::INFIX),
            rr(r::INFIXEOL),
            js(json::COMPACTIRI),
            js(json::ESCAPESEQUENCE),
            js(json::LDKEYWORD),
            js(json::LINECOMMENT),
            js(json::STRINGEOL),
            js(json::URI),
            c(common::STYLE_BRACELIGHT),
            c(common::STYLE_CALLTIP),
            c(common::STYLE_CONTROLCHAR),
            c(common::STYLE_FOLDDISPLAYTEXT),
            c(common::STYLE_MAX),
        ],
    ),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::taxonomy;

    #[test]
    fn test_categories_are_standard() {
        for entry in BUILTIN {
            assert!(taxonomy::is_standard(entry.category), "{}", entry.category);
        }
    }

    #[test]
    fn test_categories_unique() {
        for (idx, entry) in BUILTIN.iter().enumerate() {
            assert!(
                BUILTIN[..idx].iter().all(|e| e.category != entry.category),
                "{} listed twice",
                entry.category
            );
        }
    }

    #[test]
    fn test_applies_to() {
        assert!(c(common::STYLE_DEFAULT).applies_to(Lexer::Json));
        assert!(py(python::WORD).applies_to(Lexer::Python));
        assert!(!py(python::WORD).applies_to(Lexer::Cpp));
    }

    #[test]
    fn test_every_lexer_has_text_slots() {
        let text = BUILTIN.iter().find(|e| e.category == "Text");
        for lexer in Lexer::ALL {
            assert!(text.is_some_and(|e| e
                .slots
                .iter()
                .any(|s| s.scope == SlotScope::Lexer(lexer))));
        }
    }
}
