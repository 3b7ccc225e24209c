//! Token types for syntax highlighting
//!
//! This module defines the lexical categories that can be
//! recognized in source code, their inline styles, and the
//! token pairs produced by tokenizers.

use super::style::{Color, Style};

/// Lexical categories for syntax highlighting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenType {
    /// Source code comments (// or /* */)
    Comment,
    /// String literals ("..." or '...')
    String,
    /// Character literals
    Char,
    /// Numeric literals (integers, floats)
    Number,
    /// Language keywords (if, else, fn, let, etc.)
    Keyword,
    /// Type names (String, i32, etc.)
    Type,
    /// Function names
    Function,
    /// Operators (+, -, *, /, etc.)
    Operator,
    /// Punctuation (, ; : etc.)
    Punctuation,
    /// Preprocessor directives (#include, #define)
    Preprocessor,
    /// Macros (println!, vec!)
    Macro,
    /// Constants and enum variants
    Constant,
    /// Special tokens (escape sequences, etc.)
    Special,
    /// Attributes (#[derive], @decorator)
    Attribute,
    /// Lifetime annotations ('a)
    Lifetime,
    /// Module/namespace names
    Module,
    /// Labels and gotos
    Label,
    /// Default/plain text (no special highlighting)
    Default,
}

impl TokenType {
    /// Get the inline style for this token type
    pub fn default_style(&self) -> Style {
        match self {
            TokenType::Comment => Style::fg(Color::hex(0x60a0b0)).with_italic(),
            TokenType::String => Style::fg(Color::hex(0x4070a0)),
            TokenType::Char => Style::fg(Color::hex(0x4070a0)),
            TokenType::Number => Style::fg(Color::hex(0x40a070)),
            TokenType::Keyword => Style::fg(Color::hex(0x007020)).with_bold(),
            TokenType::Type => Style::fg(Color::hex(0x902000)),
            TokenType::Function => Style::fg(Color::hex(0x06287e)),
            TokenType::Operator => Style::fg(Color::hex(0x666666)),
            TokenType::Punctuation => Style::default(),
            TokenType::Preprocessor => Style::fg(Color::hex(0x007020)),
            TokenType::Macro => Style::fg(Color::hex(0x06287e)).with_bold(),
            TokenType::Constant => Style::fg(Color::hex(0x60add5)),
            TokenType::Special => Style::fg(Color::hex(0x4070a0)).with_bold(),
            TokenType::Attribute => Style::fg(Color::hex(0x555555)).with_bold(),
            TokenType::Lifetime => Style::fg(Color::hex(0xbb60d5)),
            TokenType::Module => Style::fg(Color::hex(0x0e84b5)).with_bold(),
            TokenType::Label => Style::fg(Color::hex(0x002070)).with_underline(),
            TokenType::Default => Style::default(),
        }
    }

    /// Get a human-readable name for this token type
    pub fn name(&self) -> &'static str {
        match self {
            TokenType::Comment => "Comment",
            TokenType::String => "String",
            TokenType::Char => "Char",
            TokenType::Number => "Number",
            TokenType::Keyword => "Keyword",
            TokenType::Type => "Type",
            TokenType::Function => "Function",
            TokenType::Operator => "Operator",
            TokenType::Punctuation => "Punctuation",
            TokenType::Preprocessor => "Preprocessor",
            TokenType::Macro => "Macro",
            TokenType::Constant => "Constant",
            TokenType::Special => "Special",
            TokenType::Attribute => "Attribute",
            TokenType::Lifetime => "Lifetime",
            TokenType::Module => "Module",
            TokenType::Label => "Label",
            TokenType::Default => "Default",
        }
    }

    /// Parse a token type from a string name (for TOML loading)
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Comment" => Some(TokenType::Comment),
            "String" => Some(TokenType::String),
            "Char" => Some(TokenType::Char),
            "Number" => Some(TokenType::Number),
            "Keyword" => Some(TokenType::Keyword),
            "Type" => Some(TokenType::Type),
            "Function" => Some(TokenType::Function),
            "Operator" => Some(TokenType::Operator),
            "Punctuation" => Some(TokenType::Punctuation),
            "Preprocessor" => Some(TokenType::Preprocessor),
            "Macro" => Some(TokenType::Macro),
            "Constant" => Some(TokenType::Constant),
            "Special" => Some(TokenType::Special),
            "Attribute" => Some(TokenType::Attribute),
            "Lifetime" => Some(TokenType::Lifetime),
            "Module" => Some(TokenType::Module),
            "Label" => Some(TokenType::Label),
            "Default" => Some(TokenType::Default),
            _ => None,
        }
    }
}

/// A lexical token: a category and the source text it covers
///
/// The text borrows from the tokenized source and may span lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenType,
    pub text: &'a str,
}

impl<'a> Token<'a> {
    pub fn new(kind: TokenType, text: &'a str) -> Self {
        Self { kind, text }
    }
}
