//! Direct (table-free) GF(2^n) field.
//!
//! Products are computed on demand by carry-less shift-and-reduce, which is
//! exact for any degree up to 63 and needs no memory beyond the descriptor.

use super::{FieldDescriptor, GaloisArithmetic};
use crate::error::Result;

/// A GF(2^n) field without lookup tables, for large degrees such as 32.
///
/// Division and discrete-log enumeration are not provided; use
/// [`TableField`](super::TableField) when those are needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirectField {
    descriptor: FieldDescriptor,
}

impl DirectField {
    /// Creates a direct field from a raw polynomial value.
    ///
    /// No primitivity check is performed; the caller is trusted to supply an
    /// irreducible polynomial.
    pub fn new(primitive_poly: u64) -> Result<Self> {
        Ok(Self {
            descriptor: FieldDescriptor::new(primitive_poly)?,
        })
    }

    /// Returns the multiplicative inverse of `value`, or `None` for 0.
    ///
    /// Computed as `value^(size - 2)`.
    pub fn inverse(&self, value: u64) -> Option<u64> {
        if value == 0 {
            return None;
        }
        Some(self.pow(value, self.descriptor.size() - 2))
    }
}

impl GaloisArithmetic for DirectField {
    fn descriptor(&self) -> &FieldDescriptor {
        &self.descriptor
    }

    /// Multiplies two field elements by shift-and-reduce.
    ///
    /// For each set bit of `a`, from least significant up, the running
    /// multiple of `b` is accumulated; the multiple is then shifted left and
    /// reduced by the polynomial whenever it overflows into bit `degree`.
    fn mul(&self, a: u64, b: u64) -> u64 {
        let overflow = 1u64 << self.descriptor.degree();
        let poly = self.descriptor.primitive_poly();

        let mut result = 0u64;
        let mut temp = b;
        let mut a = a;

        while a != 0 {
            if a & 1 != 0 {
                result ^= temp;
            }
            temp <<= 1;
            if temp & overflow != 0 {
                temp ^= poly;
            }
            a >>= 1;
        }

        result
    }
}
