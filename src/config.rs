//! Runtime configuration read from the environment.
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `TRANSDUCER_LOG_LEVEL` | `warn` | trace/debug/info/warn/error |
//! | `TRANSDUCER_LOG_FORMAT` | `pretty` | `pretty` or `json` |
//! | `TRANSDUCER_LOG_TARGET_FILTER` | unset | extra comma-separated filter directives |
//!
//! `RUST_LOG`, when set, takes precedence over `TRANSDUCER_LOG_LEVEL`.

use std::env;

pub const LOG_LEVEL_VAR: &str = "TRANSDUCER_LOG_LEVEL";
pub const LOG_FORMAT_VAR: &str = "TRANSDUCER_LOG_FORMAT";
pub const LOG_TARGET_FILTER_VAR: &str = "TRANSDUCER_LOG_TARGET_FILTER";

const DEFAULT_LOG_LEVEL: &str = "warn";

/// Log format: pretty for terminals, JSON for log collectors
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl LogFormat {
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "json" => LogFormat::Json,
            _ => LogFormat::Pretty,
        }
    }
}

/// Logging configuration for the binary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Log level: trace/debug/info/warn/error
    pub log_level: String,
    pub format: LogFormat,
    /// Extra filter directives (comma-separated), e.g. `transducer::parser=trace`
    pub target_filter: Option<String>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            format: LogFormat::Pretty,
            target_filter: None,
        }
    }
}

impl LogConfig {
    /// Parse configuration from environment variables with defaults
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a configuration from any key lookup; unset or blank values fall
    /// back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        Self {
            log_level: get(LOG_LEVEL_VAR).unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
            format: get(LOG_FORMAT_VAR)
                .map(|f| LogFormat::parse(&f))
                .unwrap_or_default(),
            target_filter: get(LOG_TARGET_FILTER_VAR),
        }
    }

    /// Raise the level to `debug` (the `--verbose` flag)
    pub fn verbose(mut self) -> Self {
        self.log_level = "debug".to_string();
        self
    }
}
