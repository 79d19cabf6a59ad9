//! Cross-field root search.
//!
//! Evaluates the defining polynomial of one field, read as a polynomial over
//! GF(2), at every nonzero element of a second field. Every element where the
//! sum vanishes is a root of the first field's polynomial inside the second.

use std::fmt;

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::Config;
use crate::galois::{format_polynomial, FieldDescriptor, GaloisArithmetic, TableField};

/// Outcome of scanning one target field for roots of one polynomial.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RootReport {
    /// Polynomial that was evaluated
    pub source_poly: u64,
    /// Defining polynomial of the field that was scanned
    pub target_poly: u64,
    /// Number of nonzero elements evaluated
    pub scanned: u64,
    /// Every element at which the polynomial evaluated to zero, ascending
    pub roots: Vec<u64>,
}

impl RootReport {
    /// Returns `true` if at least one root was found.
    pub fn has_root(&self) -> bool {
        !self.roots.is_empty()
    }
}

impl fmt::Display for RootReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} in GF(2^{}) with {}: {} of {} elements are roots",
            format_polynomial(self.source_poly),
            u64::BITS - 1 - self.target_poly.leading_zeros(),
            format_polynomial(self.target_poly),
            self.roots.len(),
            self.scanned
        )?;
        if self.has_root() {
            write!(
                f,
                " ({})",
                self.roots.iter().map(|r| format!("{:#x}", r)).join(", ")
            )?;
        }
        Ok(())
    }
}

/// Root search over the whole nonzero domain of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RootSearch {
    progress_interval: u64,
}

impl Default for RootSearch {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl RootSearch {
    /// Creates a root search using the configured progress interval.
    pub fn new(config: &Config) -> Self {
        Self {
            progress_interval: config.progress_interval().max(1),
        }
    }

    /// Sets how many elements pass between progress reports.
    pub fn with_progress_interval(mut self, progress_interval: u64) -> Self {
        self.progress_interval = progress_interval.max(1);
        self
    }

    /// Evaluates `poly` at `a` using the arithmetic of `field`.
    ///
    /// The constant term contributes 1 unconditionally; each set bit `i` in
    /// 63..=1 contributes `a^i`.
    pub fn evaluate<F: GaloisArithmetic + ?Sized>(poly: u64, field: &F, a: u64) -> u64 {
        let mut result = 1;
        for i in (1..u64::BITS).rev() {
            if poly & (1u64 << i) != 0 {
                result = field.add(result, field.pow(a, u64::from(i)));
            }
        }
        result
    }

    /// Scans every nonzero element of `target` for roots of the polynomial of `source`.
    ///
    /// The scan never stops early: all `size - 1` elements are evaluated and
    /// every root is reported.
    pub fn run<F: GaloisArithmetic + ?Sized>(
        &self,
        source: &FieldDescriptor,
        target: &F,
    ) -> RootReport {
        let poly = source.primitive_poly();
        let mut roots = Vec::new();

        for a in target.elements() {
            if Self::evaluate(poly, target, a) == 0 {
                info!("Found root {:#6x} of {} in {}", a, format_polynomial(poly), target.descriptor());
                roots.push(a);
            }
            if a % self.progress_interval == self.progress_interval - 1 {
                info!("Processing {}", a);
            }
        }

        RootReport {
            source_poly: poly,
            target_poly: target.primitive_poly(),
            scanned: target.size() - 1,
            roots,
        }
    }
}

impl TableField {
    /// Returns `true` if this field's polynomial has a root in `field`.
    pub fn has_root<F: GaloisArithmetic + ?Sized>(&self, field: &F) -> bool {
        RootSearch::default().run(self.descriptor(), field).has_root()
    }
}
