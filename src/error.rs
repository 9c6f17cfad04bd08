//! Error types for control structure parsing.
//!
//! Every variant is fatal: the parse is aborted and no partial [`Model`] is
//! handed back. Recoverable problems are reported as
//! [`Diagnostic`](crate::diagnostics::Diagnostic)s instead.
//!
//! [`Model`]: crate::model::Model

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Boxed cause carried by the fatal variants.
pub type Cause = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that abort a parse.
#[derive(Debug, Error)]
pub enum ParseError {
    /// No parsing strategy claims the file.
    #[error("No parser found that would support file {}", path.display())]
    UnsupportedFormat { path: PathBuf },

    /// The archive is unreadable, unsafe, or does not hold exactly one model.
    #[error("Malformed archive {}: {reason}", path.display())]
    MalformedArchive {
        path: PathBuf,
        reason: String,
        #[source]
        source: Option<Cause>,
    },

    /// The source document does not have the structure extraction needs.
    #[error("Input does not have the expected structure: {reason}")]
    MalformedSourceGraph {
        reason: String,
        #[source]
        source: Option<Cause>,
    },

    /// The vendor pre-transform failed.
    #[error("Unable to transform vendor export: {reason}")]
    TransformFailure {
        reason: String,
        #[source]
        source: Option<Cause>,
    },

    /// The file could not be read or written.
    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ParseError {
    /// Create an unsupported-format error.
    pub fn unsupported(path: impl AsRef<Path>) -> Self {
        Self::UnsupportedFormat {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Create an archive error without an underlying cause.
    pub fn archive(path: impl AsRef<Path>, reason: impl Into<String>) -> Self {
        Self::MalformedArchive {
            path: path.as_ref().to_path_buf(),
            reason: reason.into(),
            source: None,
        }
    }

    /// Create an archive error chained to its cause.
    pub fn archive_caused(
        path: impl AsRef<Path>,
        reason: impl Into<String>,
        cause: impl Into<Cause>,
    ) -> Self {
        Self::MalformedArchive {
            path: path.as_ref().to_path_buf(),
            reason: reason.into(),
            source: Some(cause.into()),
        }
    }

    /// Create a malformed-source-graph error.
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedSourceGraph {
            reason: reason.into(),
            source: None,
        }
    }

    /// Create a malformed-source-graph error chained to its cause.
    pub fn malformed_caused(reason: impl Into<String>, cause: impl Into<Cause>) -> Self {
        Self::MalformedSourceGraph {
            reason: reason.into(),
            source: Some(cause.into()),
        }
    }

    /// Create a transform error chained to its cause.
    pub fn transform(reason: impl Into<String>, cause: impl Into<Cause>) -> Self {
        Self::TransformFailure {
            reason: reason.into(),
            source: Some(cause.into()),
        }
    }

    /// Create an IO error for the given path.
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}

/// Result alias used throughout the crate.
pub type ParseResult<T> = Result<T, ParseError>;
