//! Error types for loading portfolio content and configuration.
//!
//! The command interpreter never fails: mistakes in user input become
//! error entries in the terminal history. These errors only surface while
//! the application is starting up.

use std::path::PathBuf;

use thiserror::Error;

/// Failure to read or validate a content file.
#[derive(Error, Debug)]
pub enum ContentError {
    #[error("failed to read content file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid content JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("duplicate project id '{0}'")]
    DuplicateProjectId(String),

    #[error("project '{0}' has an empty id")]
    EmptyProjectId(String),

    #[error("project id '{0}' contains whitespace")]
    InvalidProjectId(String),
}

/// Failure to interpret an environment or command-line setting.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown theme '{0}' (expected 'standard' or 'void')")]
    InvalidTheme(String),

    #[error("{key} must be a non-negative integer, got '{value}'")]
    InvalidNumber { key: &'static str, value: String },

    #[error("{key} must be a boolean, got '{value}'")]
    InvalidBool { key: &'static str, value: String },
}
