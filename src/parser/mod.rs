//! # Parser Module
//!
//! Loads an OpenAPI document from disk, decodes it into a generic tree and
//! checks the handful of fields the generator depends on.
//!
//! ## Pipeline
//!
//! ```text
//! path → read_source → decode (YAML/JSON) → validate → Document
//! ```
//!
//! Failures are classified as [`Error::File`](crate::Error::File) (the path
//! cannot be read), [`Error::Parse`](crate::Error::Parse) (the text cannot be
//! decoded) or [`Error::Validation`](crate::Error::Validation) (required
//! fields are missing).
//!
//! Validation is exhaustive: the `openapi`, `info` and `paths` checks always
//! all run and the document is rejected with every violation at once.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use transducer::Parser;
//!
//! let mut parser = Parser::new("openapi.yaml");
//! match parser.parse() {
//!     Ok(document) => println!("{:?}", document.info().title()),
//!     Err(e) => eprintln!("{e} ({} violation(s))", parser.errors().len()),
//! }
//! ```

mod load;
mod validate;

#[cfg(test)]
mod tests;

pub use load::{decode, read_source, SourceFormat};
pub use validate::{validate, NOT_A_MAPPING};

use crate::document::Document;
use crate::error::{Error, Result};
use std::path::PathBuf;
use tracing::{debug, info};

/// Parses and validates one OpenAPI document
#[derive(Debug, Clone)]
pub struct Parser {
    path: PathBuf,
    errors: Vec<String>,
}

impl Parser {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Parser {
            path: path.into(),
            errors: Vec::new(),
        }
    }

    /// Read, decode and validate the document.
    ///
    /// # Errors
    ///
    /// - [`Error::File`] if the path does not exist or cannot be read
    /// - [`Error::Parse`] if the text is not valid YAML/JSON
    /// - [`Error::Validation`] if the root is not a mapping or any required
    ///   field is missing or invalid
    pub fn parse(&mut self) -> Result<Document> {
        self.errors.clear();

        let text = read_source(&self.path)?;
        let format = SourceFormat::from_path(&self.path);
        let value = decode(&text, format)?;
        debug!(path = %self.path.display(), ?format, "decoded source document");

        validate(&value, &mut self.errors);
        if !self.valid() {
            info!(
                path = %self.path.display(),
                violations = self.errors.len(),
                "document failed validation"
            );
            return Err(Error::validation(self.errors.clone()));
        }

        Ok(Document::from(value))
    }

    /// Whether the last parse accumulated zero validation errors
    pub fn valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Violations found by the last parse, in check order
    pub fn errors(&self) -> &[String] {
        &self.errors
    }
}

/// Parse and validate source text that is already in memory.
pub fn parse_str(text: &str, format: SourceFormat) -> Result<Document> {
    let value = decode(text, format)?;
    let mut errors = Vec::new();
    validate(&value, &mut errors);
    if errors.is_empty() {
        Ok(Document::from(value))
    } else {
        Err(Error::validation(errors))
    }
}
