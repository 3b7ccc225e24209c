//! Rust language definition

use super::{build, MultilineSpec, PatternSpec};
use crate::syntax::language::LanguageDefinition;
use crate::syntax::tokens::TokenType;

pub(super) const MULTILINE: &[MultilineSpec] = &[
    // Nested block comments are not tracked
    ("block_comment", r"/\*", r"\*/", TokenType::Comment, None),
    // Only the single-hash raw string form
    ("raw_string", r##"r#""##, r##""#"##, TokenType::String, None),
    ("string", "\"", "\"", TokenType::String, Some('\\')),
];

pub(super) const PATTERNS: &[PatternSpec] = &[
    ("doc_comment", r"///.*$", TokenType::Comment, 101),
    ("line_comment", r"//.*$", TokenType::Comment, 100),
    ("attribute", r"#!?\[[\w:(),=\s\x22]*\]", TokenType::Attribute, 95),
    ("char", r"'(?:[^'\\]|\\.)'", TokenType::Char, 90),
    ("lifetime", r"'\w+", TokenType::Lifetime, 89),
    ("macro", r"\b\w+!", TokenType::Macro, 85),
    (
        "keyword",
        r"\b(as|async|await|break|const|continue|crate|dyn|else|enum|extern|false|fn|for|if|impl|in|let|loop|match|mod|move|mut|pub|ref|return|self|Self|static|struct|super|trait|true|type|union|unsafe|use|where|while)\b",
        TokenType::Keyword,
        80,
    ),
    (
        "type",
        r"\b(bool|char|str|u8|u16|u32|u64|u128|usize|i8|i16|i32|i64|i128|isize|f32|f64|String|Vec|Box|Rc|Arc|Option|Result|Some|None|Ok|Err)\b",
        TokenType::Type,
        75,
    ),
    ("hex", r"\b0x[0-9a-fA-F_]+\b", TokenType::Number, 65),
    ("binary", r"\b0b[01_]+\b", TokenType::Number, 65),
    ("octal", r"\b0o[0-7_]+\b", TokenType::Number, 65),
    ("float", r"\b\d[\d_]*\.\d[\d_]*(?:[eE][+-]?\d+)?\b", TokenType::Number, 64),
    (
        "integer",
        r"\b\d[\d_]*(?:u8|u16|u32|u64|u128|usize|i8|i16|i32|i64|i128|isize)?\b",
        TokenType::Number,
        63,
    ),
    ("type_name", r"\b[A-Z][a-zA-Z0-9_]*\b", TokenType::Type, 60),
    ("module", r"\b([a-z_][a-z0-9_]*)::", TokenType::Module, 58),
    ("function", r"\b([a-z_][a-zA-Z0-9_]*)\s*\(", TokenType::Function, 55),
    ("operator", r"[+\-*/%&|^!<>=@]+", TokenType::Operator, 40),
];

/// Create Rust language definition
pub fn rust_language() -> LanguageDefinition {
    build("Rust", &["rs"], MULTILINE, PATTERNS)
}
