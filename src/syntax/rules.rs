//! Pattern rules for syntax highlighting
//!
//! This module defines the rule types used to match and tokenize
//! source code for syntax highlighting.

use regex::Regex;

use super::tokens::TokenType;
use crate::error::Result;

/// A single-line pattern rule
///
/// Matches a regex pattern and assigns a token type to the match.
/// If the pattern has a capture group, only the first group is
/// categorized and the rest of the match is left to other rules.
/// Rules are tried in priority order (highest first).
pub struct PatternRule {
    /// Name for debugging
    pub name: String,
    /// Compiled regex pattern
    pub pattern: Regex,
    /// Token type to assign to matches
    pub token_type: TokenType,
    /// Priority (higher = matched first)
    pub priority: i32,
}

impl PatternRule {
    /// Compile a new pattern rule
    pub fn compile(name: &str, pattern: &str, token_type: TokenType, priority: i32) -> Result<Self> {
        Ok(Self {
            name: name.to_string(),
            pattern: Regex::new(pattern)?,
            token_type,
            priority,
        })
    }

    /// Create a new pattern rule, or `None` if the pattern is invalid
    pub fn new(name: &str, pattern: &str, token_type: TokenType, priority: i32) -> Option<Self> {
        Self::compile(name, pattern, token_type, priority).ok()
    }

    /// Find the first match in text at or after a byte position
    ///
    /// Anchors and word boundaries see the whole line, not just the
    /// remainder after `start`.
    pub fn find_at(&self, text: &str, start: usize) -> Option<RuleMatch> {
        if start >= text.len() {
            return None;
        }
        let caps = self.pattern.captures_at(text, start)?;
        let whole = caps.get(0)?;
        let token = caps.get(1).unwrap_or(whole);
        Some(RuleMatch {
            start: whole.start(),
            end: whole.end().max(token.end()),
            token_start: token.start(),
            token_end: token.end(),
        })
    }
}

/// Where a pattern rule matched and which part of the match it categorizes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleMatch {
    /// Start of the whole match
    pub start: usize,
    /// End of the whole match
    pub end: usize,
    /// Start of the categorized part
    pub token_start: usize,
    /// End of the categorized part
    pub token_end: usize,
}

/// A multi-line construct rule (block comments, strings)
///
/// These rules track state across lines for constructs that
/// can span multiple lines.
pub struct MultilineRule {
    /// Name for debugging
    pub name: String,
    /// Pattern that starts the construct
    pub start: Regex,
    /// Pattern that ends the construct
    pub end: Regex,
    /// Token type for this construct
    pub token_type: TokenType,
    /// Escape character (usually backslash)
    pub escape_char: Option<char>,
    /// Unique ID for this multiline state (1-255, 0 = normal)
    pub state_id: u8,
}

impl MultilineRule {
    /// Compile a new multiline rule
    pub fn compile(
        name: &str,
        start_pattern: &str,
        end_pattern: &str,
        token_type: TokenType,
        state_id: u8,
        escape_char: Option<char>,
    ) -> Result<Self> {
        Ok(Self {
            name: name.to_string(),
            start: Regex::new(start_pattern)?,
            end: Regex::new(end_pattern)?,
            token_type,
            escape_char,
            state_id,
        })
    }

    /// Create a new multiline rule
    pub fn new(
        name: &str,
        start_pattern: &str,
        end_pattern: &str,
        token_type: TokenType,
        state_id: u8,
    ) -> Option<Self> {
        Self::compile(name, start_pattern, end_pattern, token_type, state_id, None).ok()
    }

    /// Create a multiline rule with escape support
    pub fn with_escape(
        name: &str,
        start_pattern: &str,
        end_pattern: &str,
        token_type: TokenType,
        state_id: u8,
        escape_char: char,
    ) -> Option<Self> {
        Self::compile(name, start_pattern, end_pattern, token_type, state_id, Some(escape_char)).ok()
    }

    /// Find start of this construct in text
    pub fn find_start(&self, text: &str, start: usize) -> Option<(usize, usize)> {
        if start >= text.len() {
            return None;
        }
        self.start.find_at(text, start).map(|m| (m.start(), m.end()))
    }

    /// Find end of this construct in text, respecting escapes
    ///
    /// Returns the byte offset just past the closing delimiter.
    pub fn find_end(&self, text: &str, start: usize) -> Option<usize> {
        if start >= text.len() {
            return None;
        }

        let Some(escape) = self.escape_char else {
            return self.end.find_at(text, start).map(|m| m.end());
        };

        let mut pos = start;
        while let Some(m) = self.end.find_at(text, pos) {
            // An odd run of escapes right before the delimiter escapes it
            let escapes = text[start..m.start()]
                .chars()
                .rev()
                .take_while(|&c| c == escape)
                .count();
            if escapes % 2 == 0 {
                return Some(m.end());
            }
            if m.end() == pos {
                break;
            }
            pos = m.end();
        }
        None
    }
}

/// Line state for tracking multi-line constructs
///
/// This is carried from line to line to track whether we're inside a
/// multi-line comment, string, etc.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineState {
    /// 0 = normal, non-zero = inside multiline rule with this ID
    pub multiline_id: u8,
}

impl LineState {
    /// Create state for being inside a multiline construct
    pub fn inside(state_id: u8) -> Self {
        Self { multiline_id: state_id }
    }

    /// Check if we're inside a multiline construct
    pub fn is_inside_multiline(&self) -> bool {
        self.multiline_id != 0
    }

    /// Check if we're in normal (no multiline) state
    pub fn is_normal(&self) -> bool {
        self.multiline_id == 0
    }
}

/// Result of highlighting a single line
#[derive(Debug)]
pub struct HighlightResult {
    /// Categorized spans in this line, in order and non-overlapping
    pub spans: Vec<super::style::Span>,
    /// State at end of line (for next line)
    pub end_state: LineState,
}
