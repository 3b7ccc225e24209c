//! TOML language definition files
//!
//! A language file names the language, its aliases, and its rules:
//!
//! ```toml
//! name = "Lua"
//! aliases = ["lua"]
//!
//! [[pattern]]
//! name = "comment"
//! regex = "--.*$"
//! token = "Comment"
//! priority = 100
//!
//! [[multiline]]
//! name = "string"
//! start = '"'
//! end = '"'
//! token = "String"
//! escape = "\\"
//! ```

use serde::Deserialize;

use super::language::LanguageDefinition;
use super::rules::{MultilineRule, PatternRule};
use super::tokens::TokenType;
use crate::error::{HighlightError, Result};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct LanguageFile {
    name: String,
    #[serde(default)]
    aliases: Vec<String>,
    #[serde(default, rename = "pattern")]
    patterns: Vec<PatternEntry>,
    #[serde(default)]
    multiline: Vec<MultilineEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PatternEntry {
    name: String,
    regex: String,
    token: String,
    #[serde(default)]
    priority: i32,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct MultilineEntry {
    name: String,
    start: String,
    end: String,
    token: String,
    escape: Option<char>,
}

impl LanguageDefinition {
    /// Parse a language definition from TOML
    pub fn from_toml(contents: &str) -> Result<Self> {
        let file: LanguageFile = toml::from_str(contents)?;
        let mut lang = LanguageDefinition::new(&file.name);

        for alias in &file.aliases {
            lang.add_alias(alias);
        }

        if file.multiline.len() > u8::MAX as usize {
            return Err(invalid(&file.name, "too many multiline rules"));
        }
        for (id, entry) in file.multiline.iter().enumerate() {
            let token_type = token_type(&file.name, &entry.token)?;
            let rule = MultilineRule::compile(
                &entry.name,
                &entry.start,
                &entry.end,
                token_type,
                id as u8 + 1,
                entry.escape,
            )?;
            lang.add_multiline(rule);
        }

        for entry in &file.patterns {
            let token_type = token_type(&file.name, &entry.token)?;
            lang.add_pattern(PatternRule::compile(&entry.name, &entry.regex, token_type, entry.priority)?);
        }

        Ok(lang)
    }
}

fn token_type(language: &str, name: &str) -> Result<TokenType> {
    TokenType::from_name(name).ok_or_else(|| invalid(language, &format!("unknown token type \"{}\"", name)))
}

fn invalid(language: &str, message: &str) -> HighlightError {
    HighlightError::LanguageDefinition {
        name: language.to_string(),
        message: message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LUA: &str = r#"
name = "Lua"
aliases = ["lua"]

[[pattern]]
name = "comment"
regex = "--.*$"
token = "Comment"
priority = 100

[[pattern]]
name = "keyword"
regex = '\b(local|function|end|return)\b'
token = "Keyword"
priority = 80

[[multiline]]
name = "string"
start = '"'
end = '"'
token = "String"
escape = "\\"
"#;

    #[test]
    fn test_load_language() {
        let lang = LanguageDefinition::from_toml(LUA).unwrap();

        assert_eq!(lang.name, "Lua");
        assert_eq!(lang.aliases, vec!["lua".to_string()]);
        assert_eq!(lang.patterns.len(), 2);
        assert_eq!(lang.patterns[0].name, "comment");
        assert_eq!(lang.multiline_rules[0].state_id, 1);
        assert_eq!(lang.multiline_rules[0].escape_char, Some('\\'));
    }

    #[test]
    fn test_loaded_language_tokenizes() {
        let lang = LanguageDefinition::from_toml(LUA).unwrap();
        let tokens: Vec<_> = lang.tokenize("local s = \"x\" -- note").collect();

        assert_eq!(tokens[0].kind, TokenType::Keyword);
        assert!(tokens.iter().any(|t| t.kind == TokenType::String && t.text == "\"x\""));
        assert_eq!(tokens.last().map(|t| t.kind), Some(TokenType::Comment));
    }

    #[test]
    fn test_unknown_token_type() {
        let source = "name = \"X\"\n[[pattern]]\nname = \"p\"\nregex = \"x\"\ntoken = \"Bogus\"\n";
        let err = LanguageDefinition::from_toml(source).err().unwrap();
        assert!(matches!(err, HighlightError::LanguageDefinition { .. }));
        assert!(err.to_string().contains("Bogus"));
    }

    #[test]
    fn test_bad_regex() {
        let source = "name = \"X\"\n[[pattern]]\nname = \"p\"\nregex = \"(\"\ntoken = \"Keyword\"\n";
        assert!(matches!(LanguageDefinition::from_toml(source), Err(HighlightError::Regex(_))));
    }

    #[test]
    fn test_bad_toml() {
        assert!(matches!(LanguageDefinition::from_toml("name = "), Err(HighlightError::Toml(_))));
        assert!(matches!(
            LanguageDefinition::from_toml("name = \"X\"\ncolour = 1\n"),
            Err(HighlightError::Toml(_))
        ));
    }
}
