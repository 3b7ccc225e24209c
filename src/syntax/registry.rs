//! Language registry
//!
//! Maps language names and aliases to language definitions. A registry
//! is filled once at startup and only read while rendering, so it can be
//! shared freely between threads.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use once_cell::sync::Lazy;

use super::builtin;
use super::language::LanguageDefinition;
use super::tokenizer::{LanguageTokenizer, PassThroughTokenizer, Tokenizer};
use crate::error::{HighlightError, Result};

static BUILTIN: Lazy<LanguageRegistry> = Lazy::new(LanguageRegistry::with_builtins);

/// Registry of known languages
pub struct LanguageRegistry {
    /// Loaded language definitions
    languages: Vec<LanguageDefinition>,
    /// Lowercase name or alias to index in `languages`
    lookup: HashMap<String, usize>,
}

impl LanguageRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            languages: Vec::new(),
            lookup: HashMap::new(),
        }
    }

    /// Create a registry with the built-in languages
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for lang in builtin::all_languages() {
            registry.add_language(lang);
        }
        registry
    }

    /// Shared registry holding only the built-in languages
    pub fn builtin() -> &'static LanguageRegistry {
        &BUILTIN
    }

    /// Add a language definition
    ///
    /// A later language takes over any name or alias it shares with an
    /// earlier one.
    pub fn add_language(&mut self, lang: LanguageDefinition) {
        let idx = self.languages.len();
        let keys = std::iter::once(&lang.name).chain(lang.aliases.iter());
        for key in keys {
            if let Some(prev) = self.lookup.insert(key.to_lowercase(), idx) {
                tracing::debug!(
                    name = %key,
                    previous = %self.languages[prev].name,
                    "language name overridden"
                );
            }
        }
        tracing::debug!(language = %lang.name, "registered language");
        self.languages.push(lang);
    }

    /// Load every `*.toml` language definition in a directory
    ///
    /// Files that fail to parse are logged and skipped. Returns the
    /// number of languages added.
    pub fn load_dir(&mut self, dir: &Path) -> Result<usize> {
        let mut paths: Vec<_> = fs::read_dir(dir)?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|p| p.extension().and_then(|e| e.to_str()) == Some("toml"))
            .collect();
        paths.sort();

        let mut added = 0;
        for path in paths {
            let contents = fs::read_to_string(&path)?;
            match LanguageDefinition::from_toml(&contents) {
                Ok(lang) => {
                    self.add_language(lang);
                    added += 1;
                }
                Err(e) => tracing::warn!(path = %path.display(), "skipping language file: {}", e),
            }
        }

        Ok(added)
    }

    /// Get a language definition by name or alias (case-insensitive)
    pub fn get_language(&self, name: &str) -> Option<&LanguageDefinition> {
        self.lookup
            .get(&name.to_lowercase())
            .map(|&idx| &self.languages[idx])
    }

    /// Get a language definition, failing with the list of known names
    pub fn resolve(&self, name: &str) -> Result<&LanguageDefinition> {
        self.get_language(name)
            .ok_or_else(|| HighlightError::UnknownLanguage {
                name: name.to_string(),
                supported: self.supported_names().join(","),
            })
    }

    /// Select the tokenizer for one render
    ///
    /// No language, or highlighting switched off, gives the pass-through
    /// tokenizer.
    pub fn tokenizer_for(
        &self,
        language: Option<&str>,
        no_highlight: bool,
    ) -> Result<Box<dyn Tokenizer + '_>> {
        match language {
            Some(name) if !no_highlight => {
                let lang = self.resolve(name)?;
                tracing::debug!(language = %lang.name, "using language tokenizer");
                Ok(Box::new(LanguageTokenizer::new(lang)))
            }
            _ => {
                tracing::debug!("using pass-through tokenizer");
                Ok(Box::new(PassThroughTokenizer))
            }
        }
    }

    /// List language display names, sorted
    pub fn list_languages(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.languages.iter().map(|l| l.name.as_str()).collect();
        names.sort();
        names.dedup();
        names
    }

    /// Every accepted lowercase name and alias, sorted
    pub fn supported_names(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.lookup.keys().map(|s| s.as_str()).collect();
        names.sort();
        names
    }
}

impl Default for LanguageRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::TokenType;

    #[test]
    fn test_lookup_by_name_and_alias() {
        let registry = LanguageRegistry::with_builtins();

        assert_eq!(registry.get_language("rust").map(|l| l.name.as_str()), Some("Rust"));
        assert_eq!(registry.get_language("RS").map(|l| l.name.as_str()), Some("Rust"));
        assert_eq!(registry.get_language("py").map(|l| l.name.as_str()), Some("Python"));
        assert_eq!(registry.get_language("toml").map(|l| l.name.as_str()), Some("TOML"));
        assert_eq!(registry.get_language("md").map(|l| l.name.as_str()), Some("Markdown"));
        assert_eq!(registry.get_language("c++").map(|l| l.name.as_str()), Some("C"));
        assert!(registry.get_language("cobol").is_none());
    }

    #[test]
    fn test_unknown_language_lists_supported() {
        let registry = LanguageRegistry::with_builtins();
        let err = registry.resolve("cobol").err().unwrap();
        let message = err.to_string();

        assert!(message.contains("\"cobol\""));
        assert!(message.contains("python"));
        assert!(message.contains("rust"));
    }

    #[test]
    fn test_tokenizer_selection() {
        let registry = LanguageRegistry::builtin();
        let source = "let x = 1;";

        let colored_tokenizer = registry.tokenizer_for(Some("rust"), false).unwrap();
        let colored: Vec<_> = colored_tokenizer.tokenize(source).collect();
        assert_eq!(colored[0].kind, TokenType::Keyword);

        let plain_tokenizer = registry.tokenizer_for(Some("rust"), true).unwrap();
        let plain: Vec<_> = plain_tokenizer.tokenize(source).collect();
        assert_eq!(plain.len(), 1);
        assert_eq!(plain[0].kind, TokenType::Default);

        let none_tokenizer = registry.tokenizer_for(None, false).unwrap();
        let none: Vec<_> = none_tokenizer.tokenize(source).collect();
        assert_eq!(none.len(), 1);

        assert!(registry.tokenizer_for(Some("cobol"), false).is_err());
        // Disabled highlighting never looks the language up
        assert!(registry.tokenizer_for(Some("cobol"), true).is_ok());
    }

    #[test]
    fn test_later_language_overrides_alias() {
        let mut registry = LanguageRegistry::with_builtins();
        let mut lang = LanguageDefinition::new("Rusty");
        lang.add_alias("rs");
        registry.add_language(lang);

        assert_eq!(registry.get_language("rs").map(|l| l.name.as_str()), Some("Rusty"));
        assert_eq!(registry.get_language("rust").map(|l| l.name.as_str()), Some("Rust"));
    }

    #[test]
    fn test_list_languages() {
        let registry = LanguageRegistry::with_builtins();
        assert_eq!(registry.list_languages(), vec!["C", "Markdown", "Python", "Rust", "TOML"]);
    }

    #[test]
    fn test_registry_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<LanguageRegistry>();
    }
}
