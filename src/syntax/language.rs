//! Language definitions for syntax highlighting
//!
//! This module provides the LanguageDefinition struct that combines
//! pattern rules and multiline rules for a programming language, and
//! turns whole source texts into lossless token streams.

use std::iter::Peekable;
use std::ops::Range;

use super::rules::{HighlightResult, LineState, MultilineRule, PatternRule};
use super::style::Span;
use super::tokens::{Token, TokenType};

/// A complete language definition for syntax highlighting
pub struct LanguageDefinition {
    /// Language name (e.g., "Rust", "Python")
    pub name: String,
    /// Other names the language is known by (e.g., ["rs"], ["py", "python3"])
    pub aliases: Vec<String>,
    /// Single-line pattern rules, sorted by priority (highest first)
    pub patterns: Vec<PatternRule>,
    /// Multi-line rules for comments, strings, etc.
    pub multiline_rules: Vec<MultilineRule>,
}

impl LanguageDefinition {
    /// Create a new empty language definition
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            aliases: Vec::new(),
            patterns: Vec::new(),
            multiline_rules: Vec::new(),
        }
    }

    /// Add an alias
    pub fn add_alias(&mut self, alias: &str) {
        self.aliases.push(alias.to_string());
    }

    /// Add a pattern rule
    pub fn add_pattern(&mut self, rule: PatternRule) {
        self.patterns.push(rule);
        // Keep sorted by priority (highest first); stable for equal priorities
        self.patterns.sort_by(|a, b| b.priority.cmp(&a.priority));
    }

    /// Add a multiline rule
    ///
    /// Earlier rules win when two start at the same position.
    pub fn add_multiline(&mut self, rule: MultilineRule) {
        self.multiline_rules.push(rule);
    }

    /// Get multiline rule by state ID
    fn get_multiline_rule(&self, state_id: u8) -> Option<&MultilineRule> {
        self.multiline_rules.iter().find(|r| r.state_id == state_id)
    }

    /// Token type of the construct left open by a line, if any
    fn open_construct(&self, state: LineState) -> TokenType {
        if state.is_normal() {
            return TokenType::Default;
        }
        self.get_multiline_rule(state.multiline_id)
            .map_or(TokenType::Default, |rule| rule.token_type)
    }

    /// Highlight a single line of text
    ///
    /// Takes the line text (without its line ending) and the state from
    /// the previous line. Returns ordered, non-overlapping spans and the
    /// state for the next line.
    pub fn highlight_line(&self, text: &str, prev_state: LineState) -> HighlightResult {
        let mut spans = Vec::new();
        let mut pos = 0;

        // Finish a construct carried over from the previous line
        if prev_state.is_inside_multiline() {
            if let Some(rule) = self.get_multiline_rule(prev_state.multiline_id) {
                match rule.find_end(text, 0) {
                    Some(end_pos) => {
                        spans.push(Span::new(0, end_pos, rule.token_type));
                        pos = end_pos;
                    }
                    None => {
                        if !text.is_empty() {
                            spans.push(Span::new(0, text.len(), rule.token_type));
                        }
                        return HighlightResult {
                            spans,
                            end_state: prev_state,
                        };
                    }
                }
            }
        }

        while pos < text.len() {
            // Earliest position where any rule could match, for skipping
            let mut next = text.len();

            // Multiline constructs starting here take precedence
            let mut opened = None;
            for rule in &self.multiline_rules {
                match rule.find_start(text, pos) {
                    Some((start, end)) if start == pos && end > start => {
                        opened = Some((end, rule));
                        break;
                    }
                    Some((start, _)) if start > pos => next = next.min(start),
                    _ => {}
                }
            }

            if let Some((open_end, rule)) = opened {
                match rule.find_end(text, open_end) {
                    Some(close_pos) => {
                        // Complete construct on this line
                        spans.push(Span::new(pos, close_pos, rule.token_type));
                        pos = close_pos;
                        continue;
                    }
                    None => {
                        // Construct continues to next line
                        spans.push(Span::new(pos, text.len(), rule.token_type));
                        return HighlightResult {
                            spans,
                            end_state: LineState::inside(rule.state_id),
                        };
                    }
                }
            }

            // Single-line patterns, highest priority first
            let mut matched = None;
            for rule in &self.patterns {
                match rule.find_at(text, pos) {
                    Some(m) if m.start == pos && m.token_end > pos => {
                        matched = Some((m, rule.token_type));
                        break;
                    }
                    Some(m) if m.start > pos => next = next.min(m.start),
                    Some(_) => next = next.min(next_char_boundary(text, pos)),
                    None => {}
                }
            }

            match matched {
                Some((m, token_type)) => {
                    if m.token_end > m.token_start {
                        spans.push(Span::new(m.token_start, m.token_end, token_type));
                    }
                    pos = m.token_end;
                }
                // Nothing here; skip to the next candidate
                None => pos = next,
            }
        }

        HighlightResult {
            spans,
            end_state: LineState::default(),
        }
    }

    /// Tokenize a whole source text
    ///
    /// Unmatched text becomes `Default` tokens, and a line ending takes the
    /// category of any construct still open at the end of its line.
    /// Adjacent tokens of the same category are merged, so a block comment
    /// spanning lines comes out as a single token. Concatenating the token
    /// texts gives back `text` exactly.
    pub fn tokenize<'a>(&'a self, text: &'a str) -> impl Iterator<Item = Token<'a>> + 'a {
        let pieces = text
            .split_inclusive('\n')
            .scan((LineState::default(), 0usize), move |(state, offset), line| {
                let body = line.trim_end_matches(&['\n', '\r'][..]);
                let base = *offset;
                *offset += line.len();

                let result = self.highlight_line(body, *state);
                *state = result.end_state;
                let eol_kind = self.open_construct(result.end_state);

                Some(line_pieces(base, body.len(), line.len(), &result.spans, eol_kind))
            })
            .flatten();

        Coalesce {
            text,
            pieces: pieces.peekable(),
        }
    }
}

fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .chars()
        .next()
        .map_or(text.len(), |c| pos + c.len_utf8())
}

/// Cover one line with categorized byte ranges (absolute offsets)
fn line_pieces(
    base: usize,
    body_len: usize,
    line_len: usize,
    spans: &[Span],
    eol_kind: TokenType,
) -> Vec<(TokenType, Range<usize>)> {
    let mut pieces = Vec::with_capacity(spans.len() * 2 + 1);
    let mut pos = 0;

    for span in spans {
        debug_assert!(span.start >= pos && span.end <= body_len, "overlapping span {:?}", span);
        if span.start > pos {
            pieces.push((TokenType::Default, base + pos..base + span.start));
        }
        if !span.is_empty() {
            pieces.push((span.kind, base + span.start..base + span.end));
        }
        pos = span.end;
    }
    if body_len > pos {
        pieces.push((TokenType::Default, base + pos..base + body_len));
    }
    if line_len > body_len {
        pieces.push((eol_kind, base + body_len..base + line_len));
    }

    pieces
}

/// Merges adjacent same-category pieces into tokens borrowing from the source
struct Coalesce<'a, I: Iterator<Item = (TokenType, Range<usize>)>> {
    text: &'a str,
    pieces: Peekable<I>,
}

impl<'a, I: Iterator<Item = (TokenType, Range<usize>)>> Iterator for Coalesce<'a, I> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        let (kind, mut range) = self.pieces.next()?;
        loop {
            let end = range.end;
            match self.pieces.next_if(|(k, next)| *k == kind && next.start == end) {
                Some((_, next)) => range.end = next.end,
                None => break,
            }
        }
        Some(Token::new(kind, &self.text[range]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_language() -> LanguageDefinition {
        let mut lang = LanguageDefinition::new("Test");
        lang.add_alias("test");

        // Add line comment
        if let Some(rule) = PatternRule::new("line_comment", r"//.*$", TokenType::Comment, 100) {
            lang.add_pattern(rule);
        }

        // Add numbers
        if let Some(rule) = PatternRule::new("number", r"\b\d+\b", TokenType::Number, 50) {
            lang.add_pattern(rule);
        }

        // Add block comment
        if let Some(rule) = MultilineRule::new("block_comment", r"/\*", r"\*/", TokenType::Comment, 1) {
            lang.add_multiline(rule);
        }

        // Add strings
        if let Some(rule) = MultilineRule::with_escape("string", "\"", "\"", TokenType::String, 2, '\\') {
            lang.add_multiline(rule);
        }

        lang
    }

    fn kinds<'a>(tokens: &[Token<'a>]) -> Vec<(TokenType, &'a str)> {
        tokens.iter().map(|t| (t.kind, t.text)).collect()
    }

    #[test]
    fn test_simple_highlighting() {
        let lang = create_test_language();
        let result = lang.highlight_line("let x = 42;", LineState::default());

        assert!(result.end_state.is_normal());
        // Should have span for "42"
        assert!(result.spans.iter().any(|s| s.start == 8 && s.end == 10));
    }

    #[test]
    fn test_line_comment() {
        let lang = create_test_language();
        let result = lang.highlight_line("code // comment", LineState::default());

        assert!(result.end_state.is_normal());
        // Should have span for "// comment"
        assert!(result.spans.iter().any(|s| s.start == 5 && s.end == 15));
    }

    #[test]
    fn test_number_inside_string_is_not_highlighted() {
        let lang = create_test_language();
        let result = lang.highlight_line(r#"x = "a 5" + 6"#, LineState::default());

        assert_eq!(
            result.spans,
            vec![
                Span::new(4, 9, TokenType::String),
                Span::new(12, 13, TokenType::Number),
            ]
        );
    }

    #[test]
    fn test_multiline_start() {
        let lang = create_test_language();
        let result = lang.highlight_line("code /* comment", LineState::default());

        // Should end in multiline state
        assert!(result.end_state.is_inside_multiline());
        assert_eq!(result.end_state.multiline_id, 1);
    }

    #[test]
    fn test_multiline_continue() {
        let lang = create_test_language();
        let state = LineState::inside(1);
        let result = lang.highlight_line("still in comment", state);

        // Should still be in multiline state
        assert!(result.end_state.is_inside_multiline());
        // Entire line should be styled as comment
        assert_eq!(result.spans, vec![Span::new(0, 16, TokenType::Comment)]);
    }

    #[test]
    fn test_multiline_end() {
        let lang = create_test_language();
        let state = LineState::inside(1);
        let result = lang.highlight_line("end */ code", state);

        // Should return to normal
        assert!(result.end_state.is_normal());
        assert_eq!(result.spans[0], Span::new(0, 6, TokenType::Comment));
    }

    #[test]
    fn test_tokenize_fills_gaps() {
        let lang = create_test_language();
        let tokens: Vec<_> = lang.tokenize("x = 1 // one").collect();

        assert_eq!(
            kinds(&tokens),
            vec![
                (TokenType::Default, "x = "),
                (TokenType::Number, "1"),
                (TokenType::Default, " "),
                (TokenType::Comment, "// one"),
            ]
        );
    }

    #[test]
    fn test_tokenize_merges_multiline_comment() {
        let lang = create_test_language();
        let source = "a /* one\ntwo\nthree */ 7\n";
        let tokens: Vec<_> = lang.tokenize(source).collect();

        assert_eq!(
            kinds(&tokens),
            vec![
                (TokenType::Default, "a "),
                (TokenType::Comment, "/* one\ntwo\nthree */"),
                (TokenType::Default, " "),
                (TokenType::Number, "7"),
                (TokenType::Default, "\n"),
            ]
        );
    }

    #[test]
    fn test_tokenize_is_lossless() {
        let lang = create_test_language();
        let source = "/* a\r\n b */ \"s\\\"\n\" 12\r\n\n// é ü\nx";
        let joined: String = lang.tokenize(source).map(|t| t.text).collect();
        assert_eq!(joined, source);
    }

    #[test]
    fn test_tokenize_empty() {
        let lang = create_test_language();
        assert_eq!(lang.tokenize("").count(), 0);
    }
}
