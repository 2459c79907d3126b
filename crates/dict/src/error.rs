// ABOUTME: Error types for dictionary lookups, rule loading, and TSV export.
// ABOUTME: LookupError carries an ErrorCode with convenience constructors and boolean helpers.

use std::fmt;
use std::path::PathBuf;

/// Error codes representing different categories of lookup failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    InvalidWord,
    Fetch,
    Timeout,
    Decode,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::InvalidWord => "invalid word",
            ErrorCode::Fetch => "fetch error",
            ErrorCode::Timeout => "timeout",
            ErrorCode::Decode => "decode error",
        };
        write!(f, "{}", s)
    }
}

/// The error returned when a single word could not be looked up.
///
/// A lookup that fetched the page but found no definitions is not an error;
/// it surfaces as `Ok(None)` from [`crate::Client::lookup`].
#[derive(Debug, thiserror::Error)]
pub struct LookupError {
    pub code: ErrorCode,
    pub word: String,
    pub op: String,
    #[source]
    pub source: Option<anyhow::Error>,
}

impl fmt::Display for LookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?}: {}", self.op, self.word, self.code)?;
        if let Some(ref src) = self.source {
            write!(f, ": {}", src)?;
        }
        Ok(())
    }
}

impl LookupError {
    fn with_code(
        code: ErrorCode,
        word: impl Into<String>,
        op: impl Into<String>,
        source: Option<anyhow::Error>,
    ) -> Self {
        Self {
            code,
            word: word.into(),
            op: op.into(),
            source,
        }
    }

    /// Create an InvalidWord error.
    pub fn invalid_word(
        word: impl Into<String>,
        op: impl Into<String>,
        source: Option<anyhow::Error>,
    ) -> Self {
        Self::with_code(ErrorCode::InvalidWord, word, op, source)
    }

    /// Create a Fetch error.
    pub fn fetch(
        word: impl Into<String>,
        op: impl Into<String>,
        source: Option<anyhow::Error>,
    ) -> Self {
        Self::with_code(ErrorCode::Fetch, word, op, source)
    }

    /// Create a Timeout error.
    pub fn timeout(
        word: impl Into<String>,
        op: impl Into<String>,
        source: Option<anyhow::Error>,
    ) -> Self {
        Self::with_code(ErrorCode::Timeout, word, op, source)
    }

    /// Create a Decode error.
    pub fn decode(
        word: impl Into<String>,
        op: impl Into<String>,
        source: Option<anyhow::Error>,
    ) -> Self {
        Self::with_code(ErrorCode::Decode, word, op, source)
    }

    /// Replace the word the error is attributed to.
    ///
    /// Page sources only know the URL; the client re-attributes their
    /// errors to the requested word.
    pub fn for_word(mut self, word: impl Into<String>) -> Self {
        self.word = word.into();
        self
    }

    pub fn is_invalid_word(&self) -> bool {
        self.code == ErrorCode::InvalidWord
    }

    pub fn is_fetch(&self) -> bool {
        self.code == ErrorCode::Fetch
    }

    pub fn is_timeout(&self) -> bool {
        self.code == ErrorCode::Timeout
    }

    pub fn is_decode(&self) -> bool {
        self.code == ErrorCode::Decode
    }
}

/// Errors raised while loading a dictionary rule set.
#[derive(Debug, thiserror::Error)]
pub enum RulesError {
    #[error("unknown dictionary preset: {0}")]
    UnknownPreset(String),

    #[error("failed to read rules file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid rules: {0}")]
    Invalid(String),
}

/// Errors raised while building a [`crate::Client`].
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error(transparent)]
    Rules(#[from] RulesError),

    #[error("failed to build HTTP client: {0}")]
    Http(#[from] reqwest::Error),
}

/// Errors raised while writing the flashcard import file.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to write {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
