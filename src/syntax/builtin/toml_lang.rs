//! TOML language definition

use super::{build, MultilineSpec, PatternSpec};
use crate::syntax::language::LanguageDefinition;
use crate::syntax::tokens::TokenType;

pub(super) const MULTILINE: &[MultilineSpec] = &[
    ("multiline_basic", r#"""""#, r#"""""#, TokenType::String, None),
    ("multiline_literal", r"'''", r"'''", TokenType::String, None),
    ("basic_string", "\"", "\"", TokenType::String, Some('\\')),
    // Literal strings have no escapes
    ("literal_string", "'", "'", TokenType::String, None),
];

pub(super) const PATTERNS: &[PatternSpec] = &[
    ("comment", r"#.*$", TokenType::Comment, 100),
    ("table", r"^\s*\[\[?[^\]]+\]\]?", TokenType::Keyword, 95),
    ("key", r"^\s*([\w\-.]+)\s*=", TokenType::Type, 90),
    ("inline_key", r"[{,]\s*([\w\-.]+)\s*=", TokenType::Type, 89),
    ("boolean", r"\b(true|false)\b", TokenType::Constant, 80),
    (
        "datetime",
        r"\d{4}-\d{2}-\d{2}(?:[T ]\d{2}:\d{2}:\d{2}(?:\.\d+)?(?:Z|[+-]\d{2}:\d{2})?)?",
        TokenType::Number,
        75,
    ),
    ("time", r"\d{2}:\d{2}:\d{2}(?:\.\d+)?", TokenType::Number, 74),
    ("hex", r"\b0x[0-9a-fA-F_]+\b", TokenType::Number, 65),
    ("binary", r"\b0b[01_]+\b", TokenType::Number, 65),
    ("octal", r"\b0o[0-7_]+\b", TokenType::Number, 65),
    ("float", r"[+-]?(?:\d[\d_]*\.\d[\d_]*(?:[eE][+-]?\d+)?|inf|nan)\b", TokenType::Number, 64),
    ("integer", r"[+-]?\d[\d_]*\b", TokenType::Number, 63),
];

/// Create TOML language definition
pub fn toml_language() -> LanguageDefinition {
    build("TOML", &[], MULTILINE, PATTERNS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::rules::LineState;

    #[test]
    fn test_toml_key_value() {
        let lang = toml_language();
        let result = lang.highlight_line("  name = \"codelight\"", LineState::default());

        assert_eq!(result.spans[0].kind, TokenType::Type);
        assert_eq!((result.spans[0].start, result.spans[0].end), (2, 6));
        assert_eq!(result.spans[1].kind, TokenType::String);
    }

    #[test]
    fn test_toml_table_and_comment() {
        let lang = toml_language();

        let result = lang.highlight_line("[dependencies] # deps", LineState::default());
        assert_eq!(result.spans[0].kind, TokenType::Keyword);
        assert_eq!(result.spans[1].kind, TokenType::Comment);
    }

    #[test]
    fn test_toml_multiline_string() {
        let lang = toml_language();
        let first = lang.highlight_line("text = \"\"\"", LineState::default());
        assert!(first.end_state.is_inside_multiline());

        let second = lang.highlight_line("end\"\"\"", first.end_state);
        assert!(second.end_state.is_normal());
        assert_eq!(second.spans[0].kind, TokenType::String);
    }
}
