//! Error types used across the crate.

use thiserror::Error;

/// Errors reported by family constructors and rendering.
#[derive(Debug, Error)]
pub enum Error {
    /// A size parameter is out of the supported range, typically because the
    /// object count for that size would not fit in a `u64`.
    #[error("Invalid size: {0}")]
    Size(String),
    /// The registry was asked for a family name it does not know.
    #[error("Unknown family: {0}")]
    Name(String),
    /// A rendering alphabet with the wrong number of symbols was supplied.
    #[error("Invalid alphabet: {0}")]
    Alphabet(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
