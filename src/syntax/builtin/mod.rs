//! Built-in language definitions
//!
//! This module provides syntax highlighting definitions for
//! common programming languages. Each language is a table of rules
//! compiled once when the built-in registry is first used.

mod rust;
mod c;
mod python;
mod toml_lang;
mod markdown;

use super::language::LanguageDefinition;
use super::rules::{MultilineRule, PatternRule};
use super::tokens::TokenType;

/// `(name, start, end, token type, escape char)`; state IDs follow table order
pub(crate) type MultilineSpec = (&'static str, &'static str, &'static str, TokenType, Option<char>);

/// `(name, regex, token type, priority)`
pub(crate) type PatternSpec = (&'static str, &'static str, TokenType, i32);

/// Get all built-in language definitions
pub fn all_languages() -> Vec<LanguageDefinition> {
    vec![
        rust::rust_language(),
        c::c_language(),
        python::python_language(),
        toml_lang::toml_language(),
        markdown::markdown_language(),
    ]
}

/// Assemble a language from rule tables
///
/// Built-in patterns are fixed, so a pattern that fails to compile is a
/// bug; it is logged and skipped rather than taking the language down.
fn build(
    name: &str,
    aliases: &[&str],
    multiline: &[MultilineSpec],
    patterns: &[PatternSpec],
) -> LanguageDefinition {
    let mut lang = LanguageDefinition::new(name);
    for alias in aliases {
        lang.add_alias(alias);
    }

    for (id, &(rule_name, start, end, token_type, escape)) in multiline.iter().enumerate() {
        match MultilineRule::compile(rule_name, start, end, token_type, id as u8 + 1, escape) {
            Ok(rule) => lang.add_multiline(rule),
            Err(e) => tracing::error!(language = name, rule = rule_name, "bad built-in rule: {}", e),
        }
    }

    for &(rule_name, regex, token_type, priority) in patterns {
        match PatternRule::compile(rule_name, regex, token_type, priority) {
            Ok(rule) => lang.add_pattern(rule),
            Err(e) => tracing::error!(language = name, rule = rule_name, "bad built-in rule: {}", e),
        }
    }

    lang
}
