//! Error handling for the gfroots library.
//!
//! This module defines the error types used throughout the field engine and
//! the analysis components built on top of it.

use thiserror::Error;

/// Result type used throughout gfroots.
pub type Result<T> = std::result::Result<T, Error>;

/// Error enum for gfroots.
#[derive(Error, Debug)]
pub enum Error {
    /// The polynomial does not describe a field of at least two elements
    #[error("Degenerate field polynomial {0:#x}: degree must be at least 1")]
    DegeneratePolynomial(u64),

    /// Table validation found log indices that the generator never reached
    #[error(
        "Malformed field: polynomial {polynomial:#x} is not primitive, {} log indices never reached",
        .unvisited.len()
    )]
    MalformedField {
        /// Polynomial the tables were generated from
        polynomial: u64,
        /// Log indices in [0, size - 2] that were never visited, ascending
        unvisited: Vec<u64>,
    },

    /// Lookup tables cannot be built for this degree
    #[error("Unsupported degree {degree} for table-based field, maximum is {max}")]
    UnsupportedDegree {
        /// Requested degree
        degree: u32,
        /// Largest degree that can be tabulated
        max: u32,
    },

    /// Operation not provided by this field representation
    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),

    /// Invalid input data
    #[error("Invalid input data: {0}")]
    InvalidInput(String),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error during serialization/deserialization
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Errors from other sources
    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

impl Error {
    /// Returns `true` if this error means the supplied polynomial cannot define a field.
    ///
    /// Sweeps use this to skip a candidate and move on to the next one.
    pub fn is_rejected_polynomial(&self) -> bool {
        matches!(
            self,
            Error::DegeneratePolynomial(_)
                | Error::MalformedField { .. }
                | Error::UnsupportedDegree { .. }
        )
    }
}
