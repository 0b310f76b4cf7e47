//! Error types for portview.

use std::io;
use thiserror::Error;

/// Result type for portview operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for portview operations.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error (device file access).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Serial port error.
    #[error("Serial port error: {0}")]
    Serial(#[from] serialport::Error),

    /// Host platform has no candidate enumeration strategy.
    #[error("Unsupported platform: {0}")]
    UnsupportedPlatform(String),
}
