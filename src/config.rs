//! Configuration file support
//!
//! Loads settings from ~/.codelight.conf (or %USERPROFILE%\.codelight.conf on Windows)
//!
//! Format: simple key=value pairs, one per line
//! Lines starting with # are comments
//!
//! Example:
//! ```text
//! # codelight configuration
//! highlight-color = #ffe8a3
//! css-class = mb-2 rounded
//! color = true
//! prevent-select = false
//! language-dir = /home/me/.codelight/languages
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::render::{StyleConfig, DEFAULT_CSS_CLASS, DEFAULT_HIGHLIGHT_COLOR};
use crate::syntax::LanguageRegistry;

/// Configuration settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Background for highlighted lines
    pub highlight_color: String,
    /// Classes on the outer `<pre>`
    pub css_class: String,
    /// Whether tokens get per-category colors
    pub apply_color: bool,
    /// Whether rendered blocks are marked not selectable
    pub prevent_select: bool,
    /// Extra directory of TOML language definitions
    pub language_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            highlight_color: DEFAULT_HIGHLIGHT_COLOR.to_string(),
            css_class: DEFAULT_CSS_CLASS.to_string(),
            apply_color: true,
            prevent_select: false,
            language_dir: None,
        }
    }
}

impl Config {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(windows)]
        {
            std::env::var("USERPROFILE")
                .ok()
                .map(|home| PathBuf::from(home).join(".codelight.conf"))
        }

        #[cfg(not(windows))]
        {
            std::env::var("HOME")
                .ok()
                .map(|home| PathBuf::from(home).join(".codelight.conf"))
        }
    }

    /// Load configuration from the user's config file, if any
    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Config::default(),
        }
    }

    /// Load configuration from a specific file
    ///
    /// A missing or unreadable file yields the defaults.
    pub fn load_from(path: &Path) -> Self {
        let mut config = Config::default();

        match fs::read_to_string(path) {
            Ok(contents) => {
                tracing::debug!(path = %path.display(), "loading config");
                let settings = Self::parse(&contents);
                config.apply(&settings);
            }
            Err(e) => tracing::trace!(path = %path.display(), "no config file: {}", e),
        }

        config
    }

    /// Parse config file contents into key-value pairs
    fn parse(contents: &str) -> HashMap<String, String> {
        let mut settings = HashMap::new();

        for line in contents.lines() {
            let line = line.trim();

            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            match line.split_once('=') {
                Some((key, value)) => {
                    let key = key.trim().to_lowercase();
                    let value = value.trim().to_string();
                    settings.insert(key, value);
                }
                None => tracing::debug!(line, "ignoring config line without '='"),
            }
        }

        settings
    }

    /// Apply settings from parsed config
    fn apply(&mut self, settings: &HashMap<String, String>) {
        for (key, value) in settings {
            match key.as_str() {
                "highlight-color" if !value.is_empty() => self.highlight_color = value.clone(),
                "css-class" => self.css_class = value.clone(),
                "color" => self.apply_color = parse_bool(value),
                "prevent-select" => self.prevent_select = parse_bool(value),
                "language-dir" if !value.is_empty() => self.language_dir = Some(PathBuf::from(value)),
                _ => tracing::debug!(key = %key, "ignoring config setting"),
            }
        }
    }

    /// Render settings derived from this configuration
    pub fn style_config(&self) -> StyleConfig {
        StyleConfig {
            css_class: self.css_class.clone(),
            highlight_color: self.highlight_color.clone(),
            apply_color: self.apply_color,
        }
    }

    /// Built-in languages plus any found in the language directory
    pub fn registry(&self) -> Result<LanguageRegistry> {
        let mut registry = LanguageRegistry::with_builtins();
        if let Some(dir) = &self.language_dir {
            let added = registry.load_dir(dir)?;
            tracing::info!(dir = %dir.display(), added, "loaded language definitions");
        }
        Ok(registry)
    }
}

/// Parse a boolean value from string
fn parse_bool(s: &str) -> bool {
    let s = s.to_lowercase();
    matches!(s.as_str(), "true" | "yes" | "on" | "1")
}
