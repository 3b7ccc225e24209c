//! Markdown language definition

use super::{build, MultilineSpec, PatternSpec};
use crate::syntax::language::LanguageDefinition;
use crate::syntax::tokens::TokenType;

pub(super) const MULTILINE: &[MultilineSpec] = &[
    // Fenced code blocks; the closing fence must start its own line
    ("code_block", r"^```", r"^```", TokenType::String, None),
];

pub(super) const PATTERNS: &[PatternSpec] = &[
    ("header", r"^#{1,6}\s+.*$", TokenType::Keyword, 100),
    ("bold", r"\*\*[^*]+\*\*", TokenType::Type, 90),
    ("bold_underscore", r"__[^_]+__", TokenType::Type, 90),
    ("inline_code", r"`[^`]+`", TokenType::String, 88),
    ("italic", r"\*[^*]+\*", TokenType::Special, 85),
    ("italic_underscore", r"\b_[^_]+_\b", TokenType::Special, 85),
    ("image", r"!\[[^\]]*\]\([^)]+\)", TokenType::Macro, 81),
    ("link", r"\[[^\]]+\]\([^)]+\)", TokenType::Function, 80),
    ("ref_link", r"\[[^\]]+\]\[[^\]]*\]", TokenType::Function, 79),
    ("blockquote", r"^>\s+.*$", TokenType::Comment, 75),
    ("hr", r"^(?:---+|\*\*\*+|___+)\s*$", TokenType::Operator, 70),
    ("list", r"^\s*([-*+])\s", TokenType::Operator, 65),
    ("numbered_list", r"^\s*(\d+\.)\s", TokenType::Operator, 65),
    ("strikethrough", r"~~[^~]+~~", TokenType::Comment, 60),
];

/// Create Markdown language definition
pub fn markdown_language() -> LanguageDefinition {
    build("Markdown", &["md", "mkd"], MULTILINE, PATTERNS)
}
