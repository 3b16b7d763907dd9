//! Error types for slice handling, formatting and printing.
//!
//! Most of the crate is infallible: rendering into a buffer either fits or
//! reports that more room is needed. The errors below cover the boundaries
//! where something outside the formatter can go wrong.
//!
//! ## Error Categories
//!
//! - **Out of range**: a NUL-terminated source had no terminator
//! - **Invalid state**: a buffer too small to ever make progress
//! - **Out of memory**: growing an owned buffer failed
//! - **I/O errors**: the byte sink rejected a write
//!
//! ## Examples
//!
//! ```rust
//! use tagprint::{Error, Slice};
//!
//! let result = Slice::from_nul_terminated(b"no terminator");
//! assert!(matches!(result, Err(Error::OutOfRange { .. })));
//! ```

use std::io;
use thiserror::Error;

/// Represents every failure the crate reports instead of panicking.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// No NUL terminator was found within the scanned bytes.
    #[error("Out of range: no NUL terminator within {limit} bytes")]
    OutOfRange { limit: usize },

    /// A buffer or cursor was used in a way that can never succeed.
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Growing an owned buffer failed.
    #[error("Out of memory: could not grow buffer to {requested} bytes")]
    OutOfMemory { requested: usize },

    /// The byte sink failed or stopped accepting bytes.
    #[error("IO error: {0}")]
    Io(String),
}

impl Error {
    /// Creates an invalid state error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tagprint::Error;
    ///
    /// let err = Error::invalid_state("buffer too small");
    /// assert!(err.to_string().contains("buffer too small"));
    /// ```
    pub fn invalid_state(msg: &str) -> Self {
        Error::InvalidState(msg.to_string())
    }

    /// Creates an I/O error for byte sink failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    pub(crate) fn out_of_memory(requested: usize) -> Self {
        Error::OutOfMemory { requested }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::io(&err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
