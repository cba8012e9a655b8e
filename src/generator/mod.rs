//! # Generator Module
//!
//! The generator turns a validated [`Document`] into Markdown.
//!
//! ## Overview
//!
//! Two rendering paths are available:
//!
//! - **Default layout** - a fixed structure built from [`Formatter`] fragments
//! - **Custom template** - a user-supplied Jinja template receiving the
//!   document as `data` and the formatter as `formatter`
//!
//! ## Default Layout
//!
//! ```text
//! # <title>                      header: description, version, base URL
//! ## Table of Contents           links to every operation and schema
//! ## Endpoints                   one ### section per operation
//! ## Schemas                     one ### section per component schema
//! ```
//!
//! `## Endpoints` is left out when the document declares no paths, and
//! `## Schemas` when it declares no component schemas.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use transducer::{Generator, Parser};
//!
//! # fn main() -> transducer::Result<()> {
//! let document = Parser::new("openapi.yaml").parse()?;
//! Generator::new(document).to_file("docs/openapi.md")?;
//! # Ok(())
//! # }
//! ```
//!
//! With a template:
//!
//! ```rust,no_run
//! # use transducer::{Generator, Parser};
//! # fn main() -> transducer::Result<()> {
//! # let document = Parser::new("openapi.yaml").parse()?;
//! let markdown = Generator::new(document)
//!     .with_template("docs/api.md.j2")
//!     .generate()?;
//! # Ok(())
//! # }
//! ```

mod layout;
mod templates;

pub use layout::{render_default, slug};
pub use templates::render_template;

use crate::document::Document;
use crate::error::{Error, Result};
use crate::formatter::Formatter;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::info;

/// Renders one document to Markdown
#[derive(Debug, Clone)]
pub struct Generator {
    document: Document,
    formatter: Formatter,
    template_path: Option<PathBuf>,
}

impl Generator {
    pub fn new(document: Document) -> Self {
        Generator {
            document,
            formatter: Formatter::new(),
            template_path: None,
        }
    }

    /// Render through the template at `path` instead of the default layout
    pub fn with_template(mut self, path: impl Into<PathBuf>) -> Self {
        self.template_path = Some(path.into());
        self
    }

    /// Produce the Markdown text.
    ///
    /// # Errors
    ///
    /// Only template rendering can fail; see [`render_template`].
    pub fn generate(&self) -> Result<String> {
        match &self.template_path {
            Some(path) => render_template(path, &self.document, self.formatter),
            None => Ok(render_default(&self.document, &self.formatter)),
        }
    }

    /// Generate and write the result to `output_path`, creating missing
    /// parent directories and replacing any existing file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::File`] when a directory cannot be created or the file
    /// cannot be written, and propagates generation errors unchanged.
    pub fn to_file(&self, output_path: impl AsRef<Path>) -> Result<()> {
        let output_path = output_path.as_ref();
        let content = self.generate()?;

        if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| write_error(output_path, &e))?;
        }
        fs::write(output_path, &content).map_err(|e| write_error(output_path, &e))?;

        info!(
            output = %output_path.display(),
            bytes = content.len(),
            "wrote documentation"
        );
        Ok(())
    }
}

fn write_error(path: &Path, err: &io::Error) -> Error {
    if err.kind() == io::ErrorKind::PermissionDenied {
        Error::file(format!("Permission denied: {}", path.display()))
    } else {
        Error::file(format!("Failed to write file: {err}"))
    }
}
