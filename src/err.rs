use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while splitting a template into fragments
/// or while rendering it with a set of results.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemplateError {
    /// A closing delimiter appears before any opening one.
    ///
    /// # Example
    /// Template: `Passed: passed}` → MissingOpenDelimiter('{')
    #[error("There's a missing '{0}' in your template.")]
    MissingOpenDelimiter(char),

    /// An opening delimiter is never closed.
    ///
    /// # Example
    /// Template: `Passed: {passed` → MissingClosedDelimiter('}')
    #[error("There's a missing '{0}' in your template.")]
    MissingClosedDelimiter(char),

    /// Delimiters with nothing (or only whitespace) between them, like `{ }`.
    #[error("Found an empty placeholder at byte {0}")]
    EmptyPlaceholder(usize),

    /// The literal fragments don't surround the interpolation points,
    /// there must be exactly one fragment more than placeholders.
    #[error("Expected {expected} literal fragments for {placeholders} placeholders, got {actual}")]
    FragmentMismatch {
        expected: usize,
        actual: usize,
        placeholders: usize,
    },

    /// A placeholder name that doesn't point to any value.
    #[error("Trying to use a value that doesn't exist: '{0}' doesn't point to any value")]
    UnknownPlaceholder(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Unsupported configuration format: {}", .0.display())]
    UnsupportedFormat(PathBuf),

    #[error("Configuration parsing error: {0}")]
    ParsingError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
