//! Syntax highlighting module
//!
//! Lexical categories and their inline styles, regex-based language
//! definitions, and the tokenizers built on them.

mod style;
mod tokens;
mod rules;
mod language;
mod loader;
mod registry;
mod tokenizer;
mod builtin;

pub use style::{Color, Span, Style};
pub use tokens::{Token, TokenType};
pub use rules::{LineState, MultilineRule, PatternRule, RuleMatch};
pub use language::LanguageDefinition;
pub use registry::LanguageRegistry;
pub use tokenizer::{LanguageTokenizer, PassThroughTokenizer, TokenStream, Tokenizer};
