//! Error types for scrawl-recog

use thiserror::Error;

/// Errors that can occur during recognition operations
#[derive(Debug, Error)]
pub enum RecogError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] scrawl_core::Error),

    /// No language pack exists for the requested language
    #[error("language pack not found: {language}")]
    LanguagePackNotFound { language: String },

    /// A language pack record failed to parse
    #[error("malformed template record at line {line}: {reason}")]
    MalformedTemplateRecord { line: usize, reason: String },

    /// The image source could not be decoded
    #[error("image decode error: {0}")]
    Decode(#[from] scrawl_io::IoError),

    /// I/O error while reading a language pack
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid parameter provided
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type for recognition operations
pub type RecogResult<T> = Result<T, RecogError>;
