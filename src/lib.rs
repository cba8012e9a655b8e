//! # Transducer
//!
//! **Transducer** turns an [OpenAPI](https://spec.openapis.org/oas/v3.1.0) 3.0/3.1
//! document into Markdown documentation.
//!
//! ## Architecture
//!
//! The library is a three-stage pipeline:
//!
//! - **[`parser`]** - reads YAML/JSON, checks the required fields and yields a [`Document`]
//! - **[`formatter`]** - renders single fragments (endpoint, parameters, body,
//!   responses, schema) as Markdown
//! - **[`generator`]** - assembles the full page with the default layout or a
//!   user template, and writes it to disk
//!
//! Around it sit the [`error`] types, environment [`config`], [`logging`]
//! setup for the binary, and the [`cli`] wrapper.
//!
//! ```mermaid
//! sequenceDiagram
//!     participant CLI as CLI<br/>(transducer)
//!     participant Parser as parser::Parser
//!     participant Generator as generator::Generator
//!     participant Formatter as formatter::Formatter
//!     participant FS as File System
//!
//!     CLI->>Parser: parse("openapi.yaml")
//!     Parser->>FS: read source
//!     Parser->>Parser: decode + validate
//!     Parser-->>CLI: Document
//!     CLI->>Generator: to_file("docs/openapi.md")
//!     Generator->>Formatter: format_endpoint / format_schema
//!     Formatter-->>Generator: Markdown fragments
//!     Generator->>FS: write output
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use transducer::{Generator, Parser};
//!
//! # fn main() -> transducer::Result<()> {
//! let document = Parser::new("openapi.yaml").parse()?;
//! let markdown = Generator::new(document).generate()?;
//! println!("{markdown}");
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod document;
pub mod error;
pub mod formatter;
pub mod generator;
pub mod logging;
pub mod parser;

pub use document::Document;
pub use error::{Error, Result};
pub use formatter::Formatter;
pub use generator::Generator;
pub use parser::Parser;

/// Crate version, as reported by `transducer version`
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
