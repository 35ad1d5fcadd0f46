//! Error types for mst-analyzer.
//!
//! Only two operations in the server can fail in a way that is not handled
//! on the client socket itself: loading the configuration and binding the
//! listener. Everything past startup reports errors as protocol lines on
//! the offending session and keeps the process alive.

use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur during configuration operations.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Configuration file could not be read.
    #[error("failed to read configuration file: {path}")]
    ReadError {
        /// Path to the configuration file.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Configuration file could not be parsed.
    #[error("failed to parse configuration file: {path}")]
    ParseError {
        /// Path to the configuration file.
        path: PathBuf,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// Configuration file not found.
    #[error("configuration file not found: {path}")]
    NotFound {
        /// Path where the configuration file was expected.
        path: PathBuf,
    },

    /// Configuration validation failed.
    #[error("configuration validation failed: {message}")]
    ValidationError {
        /// Description of the validation failure.
        message: String,
    },
}

/// Errors that can occur while starting the server.
#[derive(Error, Debug)]
pub enum ServerError {
    /// The listening socket could not be bound.
    #[error("failed to bind listener on {addr}")]
    Bind {
        /// Address the server attempted to bind.
        addr: SocketAddr,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The bound listener could not report its local address.
    #[error("failed to query listener address")]
    LocalAddr {
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The listening socket rejected a required option.
    #[error("failed to configure listening socket")]
    Configure {
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },
}
