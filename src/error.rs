//! Error types for substitution, command handling and configuration.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while handling a shell line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VarError {
    /// A `$name` reference has no binding. The whole line is rejected.
    #[error("Variable does not exist: {0}")]
    UndefinedVariable(String),

    /// `set <name>` with no value token after the name.
    #[error("Error, expected a value to assign to variable")]
    MissingAssignmentValue,

    /// Bare `set` with no name.
    #[error("Error, expected a variable name")]
    MissingVariableName,
}

/// Errors raised while loading an explicitly requested config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}
