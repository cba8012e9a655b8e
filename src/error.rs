//! # Error Module
//!
//! A single error hierarchy covers every user-facing failure of the pipeline:
//!
//! - [`Error::File`] - missing input, missing/unreadable template, write failures
//! - [`Error::Parse`] - the document text could not be decoded
//! - [`Error::Validation`] - one or more required fields are missing or invalid
//!
//! Anything else is an unexpected failure and is handled by the CLI layer.

/// Result type alias for pipeline operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while parsing, validating or generating documentation
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// I/O failure on the input, template or output path
    #[error("{0}")]
    File(String),

    /// The document text could not be decoded into a structured tree
    #[error("{message}")]
    Parse {
        /// Human-readable decoder message
        message: String,
        /// 1-based line of the offending input, when the decoder reports one
        line: Option<usize>,
    },

    /// Required-field violations, in the order the checks ran
    #[error("{}", errors.join(", "))]
    Validation {
        /// Every violation that was found
        errors: Vec<String>,
    },
}

impl Error {
    /// Create a file error
    pub fn file(message: impl Into<String>) -> Self {
        Self::File(message.into())
    }

    /// Create a validation error from the accumulated violation list
    pub fn validation(errors: Vec<String>) -> Self {
        Self::Validation { errors }
    }

    /// Process exit code the CLI reports for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::File(_) => 1,
            Error::Parse { .. } => 2,
            Error::Validation { .. } => 3,
        }
    }
}
