//! Python language definition

use super::{build, MultilineSpec, PatternSpec};
use crate::syntax::language::LanguageDefinition;
use crate::syntax::tokens::TokenType;

pub(super) const MULTILINE: &[MultilineSpec] = &[
    // Triple quotes must be tried before plain quotes
    ("triple_double", r#"""""#, r#"""""#, TokenType::String, None),
    ("triple_single", r"'''", r"'''", TokenType::String, None),
    ("double_string", "\"", "\"", TokenType::String, Some('\\')),
    ("single_string", "'", "'", TokenType::String, Some('\\')),
];

pub(super) const PATTERNS: &[PatternSpec] = &[
    ("comment", r"#.*$", TokenType::Comment, 100),
    ("decorator", r"@[\w.]+", TokenType::Attribute, 95),
    ("string_prefix", r#"\b([fFrRbBuU]{1,2})["']"#, TokenType::Special, 92),
    (
        "keyword",
        r"\b(and|as|assert|async|await|break|class|continue|def|del|elif|else|except|finally|for|from|global|if|import|in|is|lambda|nonlocal|not|or|pass|raise|return|try|while|with|yield)\b",
        TokenType::Keyword,
        80,
    ),
    ("constant", r"\b(True|False|None)\b", TokenType::Constant, 78),
    ("self", r"\b(self|cls)\b", TokenType::Special, 77),
    (
        "builtin",
        r"\b(abs|all|any|ascii|bin|bool|bytearray|bytes|callable|chr|classmethod|compile|complex|delattr|dict|dir|divmod|enumerate|eval|exec|filter|float|format|frozenset|getattr|globals|hasattr|hash|help|hex|id|input|int|isinstance|issubclass|iter|len|list|locals|map|max|memoryview|min|next|object|oct|open|ord|pow|print|property|range|repr|reversed|round|set|setattr|slice|sorted|staticmethod|str|sum|super|tuple|type|vars|zip)\b",
        TokenType::Function,
        75,
    ),
    ("type_name", r"\b[A-Z][a-z]\w*\b", TokenType::Type, 70),
    ("hex", r"\b0[xX][0-9a-fA-F_]+\b", TokenType::Number, 65),
    ("binary", r"\b0[bB][01_]+\b", TokenType::Number, 65),
    ("octal", r"\b0[oO][0-7_]+\b", TokenType::Number, 65),
    ("float", r"\b\d[\d_]*\.\d[\d_]*(?:[eE][+-]?\d+)?j?\b", TokenType::Number, 64),
    ("integer", r"\b\d[\d_]*j?\b", TokenType::Number, 63),
    ("function", r"\b([A-Za-z_]\w*)\s*\(", TokenType::Function, 55),
    ("operator", r"[+\-*/%&|^!<>=@~]+", TokenType::Operator, 40),
];

/// Create Python language definition
pub fn python_language() -> LanguageDefinition {
    build("Python", &["py", "python3", "py3", "pyw", "pyi"], MULTILINE, PATTERNS)
}
