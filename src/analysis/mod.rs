//! # Field Analysis
//!
//! Search and diagnostic components built on the field arithmetic engine.
//! They only consume the `add`/`mul`/`pow` contract and element
//! enumeration, so they work with either field representation unless noted.
//!
//! ## Components
//!
//! - `RootSearch`: roots of one field's defining polynomial inside another field
//! - `sweep`: root search across whole lists of candidate polynomials
//! - `balance`: per-bit tallies over strided generator powers (table fields only)
//! - `syndrome`: chip-weighted syndrome tables for small symbol widths

// Submodules
pub mod balance;
mod roots;
pub mod syndrome;
mod sweep;

// Public exports
pub use balance::{analyze as analyze_bit_balance, BalanceSample, BitBalanceReport};
pub use roots::{RootReport, RootSearch};
pub use sweep::{sweep, RejectedPolynomial, SweepOutcome, SweepSummary};
pub use syndrome::{chip_syndromes, SyndromeTable};
