//! # gfroots
//!
//! gfroots is a binary finite field (GF(2^n)) engine for exploring primitive
//! polynomials and the relationships between the fields they define.
//!
//! ## Features
//!
//! - Field construction from a defining polynomial with validated
//!   discrete-log/antilog tables
//! - Table-free shift-and-reduce arithmetic for degrees up to 63
//! - Cross-field root search: does one field's polynomial have a root in another?
//! - Bit-balance and chip syndrome diagnostics over generator powers
//! - A catalog of known primitive polynomials
//!
//! ## Modules
//!
//! - `config`: Configuration settings
//! - `error`: Error types shared by every module
//! - `galois`: Field arithmetic and table validation
//! - `analysis`: Root search, sweeps, bit balance and chip syndromes
//! - `catalog`: Known primitive polynomials by degree

#![warn(missing_docs, missing_debug_implementations, rust_2018_idioms)]

// Re-export error types
pub use crate::error::{Error, Result};

// Modules
pub mod analysis;
pub mod catalog;
pub mod config;
pub mod error;
pub mod galois;

pub mod prelude {
    //! Prelude module that re-exports commonly used types and functions.

    pub use crate::analysis::{
        analyze_bit_balance, chip_syndromes, sweep, BitBalanceReport, RootReport, RootSearch,
        SweepOutcome, SyndromeTable,
    };
    pub use crate::catalog::primitive_polynomials;
    pub use crate::config::Config;
    pub use crate::error::{Error, Result};
    pub use crate::galois::{
        DirectField, Field, FieldDescriptor, FieldKind, GaloisArithmetic, TableField,
    };
}
