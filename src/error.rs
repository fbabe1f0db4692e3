//! Domain-specific error types for the applet dispatcher.
//!
//! This module provides a structured error hierarchy using [`thiserror`].
//! The dispatcher itself never lets an error escape the process entry point:
//! every variant is mapped to an exit status by [`crate::dispatch::run`] or by
//! the production host.
//!
//! # Error hierarchy
//!
//! ```text
//! DispatchError: malformed argv, unknown applet name
//! ConfigError: backend configuration I/O and TOML parsing
//! BackendError: launching an external applet implementation
//! ```

use std::path::PathBuf;

use thiserror::Error;

/// Failures of the invocation resolver and dispatch algorithm.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    /// The argument vector is empty, or a private invocation carries no
    /// applet name.
    #[error("malformed invocation")]
    MalformedInvocation,

    /// The resolved name matches no entry of the applicable table.
    #[error("{0}: applet not found")]
    AppletNotFound(String),
}

/// Errors that arise from loading the backend configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The config file exists but could not be read.
    #[error("IO error reading config file {path}: {source}")]
    Io {
        /// Path to the file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The config file is not valid TOML or does not match the schema.
    #[error("Invalid config file {path}: {source}")]
    Parse {
        /// Path to the file that failed to parse.
        path: PathBuf,
        /// Underlying TOML error.
        source: toml::de::Error,
    },
}

/// Errors that arise while handing control to an external applet program.
#[derive(Error, Debug)]
pub enum BackendError {
    /// No `[applets.<name>]` entry exists for the applet.
    #[error("{0}: no backend configured")]
    NotConfigured(String),

    /// The configured program could not be located.
    #[error("{applet}: backend program '{program}' not found")]
    NotFound {
        /// Applet whose backend is missing.
        applet: String,
        /// Program as written in the configuration.
        program: String,
    },

    /// The program was found but could not be executed.
    #[error("failed to execute {program}: {source}")]
    Exec {
        /// Resolved program path.
        program: PathBuf,
        /// Underlying I/O error from `exec`/`spawn`.
        source: std::io::Error,
    },
}

impl BackendError {
    /// Exit status reported to the caller for this failure.
    ///
    /// Follows the shell convention: `127` when the program cannot be found,
    /// `126` when it exists but cannot be executed.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::NotConfigured(_) => 1,
            Self::NotFound { .. } => 127,
            Self::Exec { .. } => 126,
        }
    }
}
