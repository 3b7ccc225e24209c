//! codelight - syntax-highlighted HTML for code blocks
//!
//! Source text is tokenized by a language definition (or passed through
//! as plain text), then rendered as escaped HTML with inline styles. Any
//! lines named by a range specification such as `"1-3,5"` are wrapped in
//! a highlight span.
//!
//! ```
//! use codelight::{highlight, LanguageRegistry, LineSet, StyleConfig};
//!
//! let registry = LanguageRegistry::builtin();
//! let tokenizer = registry.tokenizer_for(Some("rust"), false).unwrap();
//! let lines = LineSet::parse("2").unwrap();
//! let html = highlight("fn main() {\n    run();\n}", &*tokenizer, &lines, &StyleConfig::default());
//! assert!(html.contains("code-highlighted-line"));
//! ```

pub mod config;
pub mod element;
pub mod error;
pub mod html;
pub mod lines;
pub mod render;
pub mod syntax;

pub use config::Config;
pub use element::CodeElement;
pub use error::{HighlightError, Result};
pub use lines::LineSet;
pub use render::{render, StyleConfig};
pub use syntax::{LanguageRegistry, Token, TokenStream, TokenType, Tokenizer};

/// Tokenize and render source text in one step
pub fn highlight(source: &str, tokenizer: &dyn Tokenizer, highlighted: &LineSet, style: &StyleConfig) -> String {
    render(tokenizer.tokenize(source), highlighted, style)
}
