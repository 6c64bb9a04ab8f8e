// src/error.rs
//
// Error types for the loader and transport, and the exit codes they map to.

use std::path::PathBuf;

use thiserror::Error;

/// Process exit code for a malformed invocation.
pub const EXIT_USAGE: u8 = 1;
/// Process exit code when the mapping file cannot be opened.
pub const EXIT_MAPPING: u8 = 2;
/// Process exit code for any failure talking to the serial device.
pub const EXIT_TRANSPORT: u8 = 3;

/// Failure to produce mapping text from a mapping name.
#[derive(Debug, Error)]
pub enum MappingError {
    #[error("couldn't open {}", path.display())]
    NotFound { path: PathBuf },

    #[error("couldn't open {}: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl MappingError {
    /// The file path that was attempted.
    pub fn path(&self) -> &std::path::Path {
        match self {
            MappingError::NotFound { path } | MappingError::Unreadable { path, .. } => path,
        }
    }
}

/// Failure during a serial session. Each variant names the step that failed.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("failed to open {port}: {source}")]
    Open {
        port: String,
        #[source]
        source: serialport::Error,
    },

    #[error("failed to write to {port}: {source}")]
    Write {
        port: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read from {port}: {source}")]
    Read {
        port: String,
        #[source]
        source: std::io::Error,
    },

    #[error("response from {port} is not valid UTF-8: {source}")]
    Decode {
        port: String,
        #[source]
        source: std::string::FromUtf8Error,
    },

    #[error("failed to print response: {0}")]
    Output(#[source] std::io::Error),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Mapping(#[from] MappingError),

    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl Error {
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::Mapping(_) => EXIT_MAPPING,
            Error::Transport(_) => EXIT_TRANSPORT,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
