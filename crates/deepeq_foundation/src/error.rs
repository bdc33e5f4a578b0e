//! Error types for deepeq.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.
//! Almost everything in this crate is total; errors only arise from the
//! strict mapping constructors.

use std::fmt;

use thiserror::Error;

/// The main error type for deepeq operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}{}", DisplayContext(.context.as_deref()))]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional label describing what was being built.
    pub context: Option<String>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Creates a duplicate key error.
    ///
    /// `first` and `duplicate` are positions in the source sequence.
    #[must_use]
    pub fn duplicate_key(key: impl fmt::Debug, first: usize, duplicate: usize) -> Self {
        Self::new(ErrorKind::DuplicateKey {
            key: format!("{key:?}"),
            first,
            duplicate,
        })
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErrorKind {
    /// A key appeared more than once while building a mapping in strict mode.
    #[error("duplicate key {key} at position {duplicate} (first seen at {first})")]
    DuplicateKey {
        /// Debug rendering of the repeated key.
        key: String,
        /// Source position of the first occurrence.
        first: usize,
        /// Source position of the repeated occurrence.
        duplicate: usize,
    },
}

struct DisplayContext<'a>(Option<&'a str>);

impl fmt::Display for DisplayContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(ctx) => write!(f, " while building {ctx}"),
            None => Ok(()),
        }
    }
}

/// Result type alias for deepeq operations.
pub type Result<T> = std::result::Result<T, Error>;
