//! Tokenizer capability
//!
//! A render selects one tokenizer up front and never branches on
//! language per token.

use super::language::LanguageDefinition;
use super::tokens::{Token, TokenType};

/// An ordered, single-pass stream of tokens over a source text
pub type TokenStream<'a> = Box<dyn Iterator<Item = Token<'a>> + 'a>;

/// Converts source text into a lossless token stream
///
/// Concatenating the texts of the returned tokens must reproduce the
/// input exactly.
pub trait Tokenizer: Send + Sync {
    fn tokenize<'a>(&'a self, text: &'a str) -> TokenStream<'a>;
}

/// Emits the whole input as a single plain-text token
///
/// Used when no language is given or highlighting is disabled, so that
/// escaping and line wrapping still run through the renderer.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassThroughTokenizer;

impl Tokenizer for PassThroughTokenizer {
    fn tokenize<'a>(&'a self, text: &'a str) -> TokenStream<'a> {
        Box::new((!text.is_empty()).then(|| Token::new(TokenType::Default, text)).into_iter())
    }
}

/// Tokenizes with a regex-based language definition
#[derive(Clone, Copy)]
pub struct LanguageTokenizer<'l> {
    language: &'l LanguageDefinition,
}

impl<'l> LanguageTokenizer<'l> {
    pub fn new(language: &'l LanguageDefinition) -> Self {
        Self { language }
    }

    pub fn language(&self) -> &'l LanguageDefinition {
        self.language
    }
}

impl Tokenizer for LanguageTokenizer<'_> {
    fn tokenize<'a>(&'a self, text: &'a str) -> TokenStream<'a> {
        Box::new(self.language.tokenize(text))
    }
}
