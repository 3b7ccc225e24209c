//! Error types for codelight

use thiserror::Error;

/// Result type alias for codelight operations
pub type Result<T> = std::result::Result<T, HighlightError>;

/// Highlighting error types
#[derive(Error, Debug)]
pub enum HighlightError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unknown language: \"{name}\". Must be one of {supported}")]
    UnknownLanguage { name: String, supported: String },

    #[error("Unknown file path: \"{0}\"")]
    FileNotFound(String),

    #[error("Existing code cannot be added inside the element when a source file is used")]
    InlineWithSourceFile,

    #[error("A source file was requested but no base path is available")]
    MissingBasePath,

    #[error("Could not parse highlight lines term \"{0}\"; check your syntax")]
    InvalidLineSpec(String),

    #[error("Invalid language definition {name}: {message}")]
    LanguageDefinition { name: String, message: String },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),
}
