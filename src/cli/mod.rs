//! # CLI Module
//!
//! The command-line wrapper around the parse → generate pipeline.
//!
//! ## Commands
//!
//! ### `generate`
//!
//! ```bash
//! transducer generate openapi.yaml --output docs/api.md
//! ```
//!
//! Options:
//! - `--output/-o <FILE>` - Output file (default: `docs/openapi.md`, env `TRANSDUCER_OUTPUT`)
//! - `--template/-t <FILE>` - Custom Jinja template (env `TRANSDUCER_TEMPLATE`)
//!
//! ### `version`
//!
//! ```bash
//! transducer version
//! ```
//!
//! ## Exit Codes
//!
//! | Code | Meaning |
//! |------|---------|
//! | 0 | Success |
//! | 1 | File error, including a missing input file |
//! | 2 | Parse error |
//! | 3 | Validation error |
//! | 4 | Any other failure |
//!
//! ## Usage from Code
//!
//! ```rust,no_run
//! use transducer::cli::{run_cli, Cli};
//! use clap::Parser;
//!
//! let code = run_cli(Cli::parse());
//! std::process::exit(code);
//! ```

mod commands;


pub use commands::{
    error_message, execute, exit_code, run_cli, Cli, Commands, InputNotFound, DEFAULT_OUTPUT,
    EXIT_UNEXPECTED,
};
