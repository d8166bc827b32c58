//! Crate error type.
//!
//! Errors only arise at the terminal boundary. The widget core treats invalid
//! input (out-of-range indices, unmapped keys, unknown values) as no-ops.

use std::io;

/// Errors from the terminal backend and app startup.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("terminal i/o failed: {0}")]
    Io(#[from] io::Error),
    #[error("terminal is {width}x{height}, need at least {min_width}x{min_height}")]
    TerminalTooSmall {
        width: u16,
        height: u16,
        min_width: u16,
        min_height: u16,
    },
    #[error("input stream closed")]
    InputClosed,
}

/// Result alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
