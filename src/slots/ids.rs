//! Numeric wx.stc style ids
//!
//! Ids below 32 are private to each lexer and are reused between lexers;
//! the `STYLE_*` ids are shared by every lexer.

/// A numeric style slot on the surface
pub type SlotId = i32;

/// Predefined styles shared by all lexers
pub mod common {
    use super::SlotId;

    pub const STYLE_DEFAULT: SlotId = 32;
    pub const STYLE_LINENUMBER: SlotId = 33;
    pub const STYLE_BRACELIGHT: SlotId = 34;
    pub const STYLE_BRACEBAD: SlotId = 35;
    pub const STYLE_CONTROLCHAR: SlotId = 36;
    pub const STYLE_INDENTGUIDE: SlotId = 37;
    pub const STYLE_CALLTIP: SlotId = 38;
    pub const STYLE_FOLDDISPLAYTEXT: SlotId = 39;
    pub const STYLE_LASTPREDEFINED: SlotId = 39;
    pub const STYLE_MAX: SlotId = 255;
}

pub mod python {
    use super::SlotId;

    pub const DEFAULT: SlotId = 0;
    pub const COMMENTLINE: SlotId = 1;
    pub const NUMBER: SlotId = 2;
    pub const STRING: SlotId = 3;
    pub const CHARACTER: SlotId = 4;
    pub const WORD: SlotId = 5;
    pub const TRIPLE: SlotId = 6;
    pub const TRIPLEDOUBLE: SlotId = 7;
    pub const CLASSNAME: SlotId = 8;
    pub const DEFNAME: SlotId = 9;
    pub const OPERATOR: SlotId = 10;
    pub const IDENTIFIER: SlotId = 11;
    pub const COMMENTBLOCK: SlotId = 12;
    pub const STRINGEOL: SlotId = 13;
    pub const WORD2: SlotId = 14;
    pub const DECORATOR: SlotId = 15;
}

pub mod cpp {
    use super::SlotId;

    pub const DEFAULT: SlotId = 0;
    pub const COMMENT: SlotId = 1;
    pub const COMMENTLINE: SlotId = 2;
    pub const COMMENTDOC: SlotId = 3;
    pub const NUMBER: SlotId = 4;
    pub const WORD: SlotId = 5;
    pub const STRING: SlotId = 6;
    pub const CHARACTER: SlotId = 7;
    pub const UUID: SlotId = 8;
    pub const PREPROCESSOR: SlotId = 9;
    pub const OPERATOR: SlotId = 10;
    pub const IDENTIFIER: SlotId = 11;
    pub const STRINGEOL: SlotId = 12;
    pub const VERBATIM: SlotId = 13;
    pub const REGEX: SlotId = 14;
    pub const COMMENTLINEDOC: SlotId = 15;
    pub const WORD2: SlotId = 16;
    pub const COMMENTDOCKEYWORD: SlotId = 17;
    pub const COMMENTDOCKEYWORDERROR: SlotId = 18;
    pub const GLOBALCLASS: SlotId = 19;
    pub const STRINGRAW: SlotId = 20;
    pub const TRIPLEVERBATIM: SlotId = 21;
    pub const HASHQUOTEDSTRING: SlotId = 22;
    pub const PREPROCESSORCOMMENT: SlotId = 23;
    pub const PREPROCESSORCOMMENTDOC: SlotId = 24;
    pub const USERLITERAL: SlotId = 25;
    pub const TASKMARKER: SlotId = 26;
    pub const ESCAPESEQUENCE: SlotId = 27;
}

/// `STC_T3_*` styles, used for the HTML lexer
pub mod t3 {
    use super::SlotId;

    pub const DEFAULT: SlotId = 0;
    pub const X_DEFAULT: SlotId = 1;
    pub const HTML_TAG: SlotId = 14;
    pub const HTML_DEFAULT: SlotId = 15;
    pub const HTML_STRING: SlotId = 16;
}

/// `STC_H_*` styles of the HTML lexer and its embedded languages
pub mod html {
    use super::SlotId;

    pub const DEFAULT: SlotId = 0;
    pub const SGML_DEFAULT: SlotId = 21;
    pub const HJ_DEFAULT: SlotId = 41;
    pub const HJA_DEFAULT: SlotId = 56;
    pub const HB_DEFAULT: SlotId = 71;
    pub const HBA_DEFAULT: SlotId = 86;
    pub const HP_DEFAULT: SlotId = 96;
    pub const HPA_DEFAULT: SlotId = 106;
    pub const HPHP_DEFAULT: SlotId = 118;
}

pub mod yaml {
    use super::SlotId;

    pub const DEFAULT: SlotId = 0;
    pub const COMMENT: SlotId = 1;
    pub const IDENTIFIER: SlotId = 2;
    pub const KEYWORD: SlotId = 3;
    pub const NUMBER: SlotId = 4;
    pub const REFERENCE: SlotId = 5;
    pub const DOCUMENT: SlotId = 6;
    pub const TEXT: SlotId = 7;
    pub const ERROR: SlotId = 8;
    pub const OPERATOR: SlotId = 9;
}

pub mod r {
    use super::SlotId;

    pub const DEFAULT: SlotId = 0;
    pub const COMMENT: SlotId = 1;
    pub const KWORD: SlotId = 2;
    pub const BASEKWORD: SlotId = 3;
    pub const OTHERKWORD: SlotId = 4;
    pub const NUMBER: SlotId = 5;
    pub const STRING: SlotId = 6;
    pub const STRING2: SlotId = 7;
    pub const OPERATOR: SlotId = 8;
    pub const IDENTIFIER: SlotId = 9;
    pub const INFIX: SlotId = 10;
    pub const INFIXEOL: SlotId = 11;
}

pub mod json {
    use super::SlotId;

    pub const DEFAULT: SlotId = 0;
    pub const NUMBER: SlotId = 1;
    pub const STRING: SlotId = 2;
    pub const STRINGEOL: SlotId = 3;
    pub const PROPERTYNAME: SlotId = 4;
    pub const ESCAPESEQUENCE: SlotId = 5;
    pub const LINECOMMENT: SlotId = 6;
    pub const BLOCKCOMMENT: SlotId = 7;
    pub const OPERATOR: SlotId = 8;
    pub const URI: SlotId = 9;
    pub const COMPACTIRI: SlotId = 10;
    pub const KEYWORD: SlotId = 11;
    pub const LDKEYWORD: SlotId = 12;
    pub const ERROR: SlotId = 13;
}
