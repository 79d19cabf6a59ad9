//! Chip syndrome tables.
//!
//! Chip `c` weighs an error symbol `e` by the field element `2^c` (the
//! generator raised to `c`). Listing `e * 2^c` for every nonzero symbol shows
//! which syndromes each chip can produce and whether chips collide.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::galois::GaloisArithmetic;

/// Weighted syndromes for every nonzero symbol of every chip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyndromeTable {
    /// Width of a chip symbol in bits
    pub symbol_bits: u32,
    /// `rows[c][e - 1]` is `e * 2^c`
    pub rows: Vec<Vec<u64>>,
}

impl SyndromeTable {
    /// Returns `true` if no syndrome value appears for two different (chip, symbol) pairs.
    pub fn is_distinct(&self) -> bool {
        let mut seen = std::collections::HashSet::new();
        self.rows.iter().flatten().all(|value| seen.insert(*value))
    }
}

/// Builds the syndrome table for `chips` chips of `symbol_bits`-bit symbols.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] if a chip weight `2^c` or a symbol value
/// does not fit in the field.
pub fn chip_syndromes<F: GaloisArithmetic + ?Sized>(
    field: &F,
    chips: u32,
    symbol_bits: u32,
) -> Result<SyndromeTable> {
    if symbol_bits == 0 || symbol_bits > field.degree() {
        return Err(Error::InvalidInput(format!(
            "Symbol width {} does not fit in {}",
            symbol_bits,
            field.descriptor()
        )));
    }
    if chips > field.degree() {
        return Err(Error::InvalidInput(format!(
            "Chip weight 2^{} is not an element of {}",
            chips - 1,
            field.descriptor()
        )));
    }

    let symbols = 1u64 << symbol_bits;
    let rows = (0..chips)
        .map(|chip| {
            let weight = 1u64 << chip;
            (1..symbols).map(|e| field.mul(e, weight)).collect()
        })
        .collect();

    Ok(SyndromeTable { symbol_bits, rows })
}

fn ordinal(n: usize) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{}{}", n, suffix)
}

impl fmt::Display for SyndromeTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (chip, row) in self.rows.iter().enumerate() {
            writeln!(f, "{} chip", ordinal(chip + 1))?;
            for value in row {
                write!(f, "{:6x} ", value)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
