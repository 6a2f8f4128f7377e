//! Error types for the simulator
//!
//! Every recoverable failure in the crate is a [`SimError`]. Only the shell
//! thread surfaces these to the user; the tick thread logs and carries on.

use std::collections::TryReserveError;

use thiserror::Error;

/// Result type alias for simulator operations
pub type Result<T> = std::result::Result<T, SimError>;

#[derive(Error, Debug)]
pub enum SimError {
    /// The body store could not grow to hold another body
    #[error("could not grow body store to {requested} entries: {source}")]
    Allocation {
        requested: usize,
        #[source]
        source: TryReserveError,
    },

    /// A body was rejected before insertion (non-positive radius or mass)
    #[error("invalid body: {0}")]
    InvalidBody(String),

    /// Scenario file is well-formed YAML but describes an impossible setup
    #[error("configuration error: {0}")]
    Config(String),

    /// First word of a shell line is not a known command
    #[error("command not supported: '{0}'")]
    UnknownCommand(String),

    /// Option parsing failed, or `--help` was requested
    #[error(transparent)]
    Usage(#[from] clap::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("yaml error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl SimError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn invalid_body(msg: impl Into<String>) -> Self {
        Self::InvalidBody(msg.into())
    }
}
