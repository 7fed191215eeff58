//! Error types for tinycmd.
//!
//! Command handlers and the application entry use `TinyResult<T>`, an
//! alias for `anyhow::Result<T>`, so a handler can fail with any error and
//! attach context on the way out. Argument parsing has its own typed error,
//! [`ArgumentError`], because callers match on it.
//!
//! ## Usage Examples
//!
//! Failing from a handler:
//! ```ignore
//! anyhow::bail!("Missing file: {}", path);
//! ```
//!
//! Adding context:
//! ```ignore
//! std::fs::read_to_string(path)
//!     .with_context(|| format!("Failed to read {}", path))?;
//! ```

/// Result type alias using anyhow::Error.
pub type TinyResult<T> = anyhow::Result<T>;

/// Command line rejected by the parser.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ArgumentError {
    #[error("Unexpected option: {0}")]
    UnexpectedOption(String),
    #[error("Argument is not valid unicode: {0}")]
    InvalidUnicode(String),
    #[error("Invalid command line: {0}")]
    Invalid(String),
}
