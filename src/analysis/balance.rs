//! Bit-balance analysis of generator powers.
//!
//! Samples the exponential table at a fixed stride and tallies, per bit
//! position, how many sampled elements have that bit set. The result is a
//! descriptive diagnostic of how evenly a table spreads its bits.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::galois::{GaloisArithmetic, TableField};

/// One sampled generator power.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceSample {
    /// Discrete-log index i of the sample (the element is a^i)
    pub index: u64,
    /// Field element at that index
    pub value: u64,
}

/// Per-bit tallies over a strided sample of the exponential table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BitBalanceReport {
    /// Degree of the analyzed field
    pub degree: u32,
    /// Sampling stride
    pub chip_cnt: u64,
    /// Sampled elements in index order
    pub samples: Vec<BalanceSample>,
    /// `tally[bit]` is the number of samples with `bit` set
    pub tally: Vec<u64>,
    /// Smallest tally across all bit positions
    pub min: u64,
    /// Bit `i` is set iff `tally[i]` is odd
    pub parity: u64,
}

/// Samples log indices `0, chip_cnt, 2 * chip_cnt, ...` below the field size
/// and tallies the set bits of each sampled element.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] if `chip_cnt` is zero.
pub fn analyze(field: &TableField, chip_cnt: u64) -> Result<BitBalanceReport> {
    if chip_cnt == 0 {
        return Err(Error::InvalidInput(
            "Bit-balance stride must be greater than zero".to_string(),
        ));
    }

    let degree = field.degree();
    let step = usize::try_from(chip_cnt).unwrap_or(usize::MAX);
    let mut tally = vec![0u64; degree as usize];

    let samples: Vec<BalanceSample> = (0..field.size())
        .step_by(step)
        .map(|index| BalanceSample {
            index,
            value: field.get_binary(index),
        })
        .collect();

    for sample in &samples {
        for (bit, count) in tally.iter_mut().enumerate() {
            *count += (sample.value >> bit) & 1;
        }
    }

    let min = tally.iter().copied().min().unwrap_or(0);
    let parity = tally
        .iter()
        .enumerate()
        .filter(|&(_, &count)| count % 2 == 1)
        .fold(0u64, |acc, (bit, _)| acc | (1u64 << bit));

    Ok(BitBalanceReport {
        degree,
        chip_cnt,
        samples,
        tally,
        min,
        parity,
    })
}

/// Formats the low `degree` bits of `value`, most significant first, with an
/// underscore between groups of four.
pub fn format_bits(value: u64, degree: u32) -> String {
    let mut out = String::with_capacity(degree as usize * 5 / 4);
    for i in (0..degree).rev() {
        out.push(if (value >> i) & 1 == 1 { '1' } else { '0' });
        if i % 4 == 0 && i != 0 {
            out.push('_');
        }
    }
    out
}

impl fmt::Display for BitBalanceReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for sample in &self.samples {
            writeln!(
                f,
                "a^{:<3} {}",
                sample.index,
                format_bits(sample.value, self.degree)
            )?;
        }

        write!(f, "Min.: {:6} (", self.min)?;
        for count in self.tally.iter().rev() {
            write!(f, "{:6} ", count)?;
        }
        writeln!(f, ")")?;

        writeln!(f, "{}", format_bits(self.parity, self.degree))
    }
}
