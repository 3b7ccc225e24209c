//! C/C++ language definition

use super::{build, MultilineSpec, PatternSpec};
use crate::syntax::language::LanguageDefinition;
use crate::syntax::tokens::TokenType;

pub(super) const MULTILINE: &[MultilineSpec] = &[
    ("block_comment", r"/\*", r"\*/", TokenType::Comment, None),
    ("string", "\"", "\"", TokenType::String, Some('\\')),
];

pub(super) const PATTERNS: &[PatternSpec] = &[
    ("line_comment", r"//.*$", TokenType::Comment, 100),
    ("preprocessor", r"^\s*#\s*\w+", TokenType::Preprocessor, 95),
    ("include_path", r"<[\w./]+>", TokenType::String, 92),
    ("char", r"'(?:[^'\\]|\\.)'", TokenType::Char, 90),
    (
        "keyword",
        r"\b(auto|break|case|char|const|continue|default|do|double|else|enum|extern|float|for|goto|if|inline|int|long|register|restrict|return|short|signed|sizeof|static|struct|switch|typedef|union|unsigned|void|volatile|while|_Alignas|_Alignof|_Atomic|_Bool|_Complex|_Generic|_Imaginary|_Noreturn|_Static_assert|_Thread_local)\b",
        TokenType::Keyword,
        80,
    ),
    (
        "cpp_keyword",
        r"\b(alignas|alignof|and|and_eq|asm|bitand|bitor|bool|catch|class|compl|concept|consteval|constexpr|constinit|const_cast|co_await|co_return|co_yield|decltype|delete|dynamic_cast|explicit|export|false|friend|mutable|namespace|new|noexcept|not|not_eq|nullptr|operator|or|or_eq|private|protected|public|reinterpret_cast|requires|static_assert|static_cast|template|this|thread_local|throw|true|try|typeid|typename|using|virtual|xor|xor_eq)\b",
        TokenType::Keyword,
        79,
    ),
    (
        "type",
        r"\b(size_t|ptrdiff_t|intptr_t|uintptr_t|int8_t|int16_t|int32_t|int64_t|uint8_t|uint16_t|uint32_t|uint64_t|FILE)\b",
        TokenType::Type,
        75,
    ),
    ("null", r"\bNULL\b", TokenType::Constant, 74),
    ("hex", r"\b0[xX][0-9a-fA-F]+[uUlL]*\b", TokenType::Number, 65),
    ("float", r"\b\d+\.\d*(?:[eE][+-]?\d+)?[fFlL]?", TokenType::Number, 64),
    ("float_leading_dot", r"\.\d+(?:[eE][+-]?\d+)?[fFlL]?\b", TokenType::Number, 64),
    ("integer", r"\b\d+[uUlL]*\b", TokenType::Number, 63),
    ("label", r"^\s*([A-Za-z_]\w*):[^:]", TokenType::Label, 58),
    ("function", r"\b([A-Za-z_]\w*)\s*\(", TokenType::Function, 55),
    ("operator", r"[+\-*/%&|^!<>=~?:]+", TokenType::Operator, 40),
];

/// Create C language definition (also works for C++)
pub fn c_language() -> LanguageDefinition {
    build("C", &["c++", "cpp", "h", "hpp", "cc", "cxx"], MULTILINE, PATTERNS)
}
