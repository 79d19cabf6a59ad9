//! Galois Field implementation for GF(2^n) arithmetic.
//!
//! This module derives a field's shape from the bit pattern of its defining
//! polynomial and provides two interchangeable representations:
//!
//! - [`TableField`]: discrete-log/antilog tables built once and validated,
//!   giving O(1) multiplication and division. Suitable for small degrees.
//! - [`DirectField`]: carry-less shift-and-reduce multiplication computed on
//!   demand, for degrees whose tables would not fit in memory (e.g. 32).
//!
//! Both are reachable through the [`GaloisArithmetic`] trait and the closed
//! [`Field`] enum, which picks a representation from the degree.

use std::fmt;

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::Config;
use crate::error::{Error, Result};

mod direct;
mod table;
mod validator;

pub use direct::DirectField;
pub use table::TableField;
pub use validator::validate_tables;

/// The largest degree for which lookup tables can be built.
pub const MAX_TABLE_DEGREE: u32 = 24;

/// Returns the 0-based index of the highest set bit of `poly`.
///
/// # Arguments
///
/// * `poly` - Defining polynomial, bit `n` being the implicit leading term x^n
///
/// # Errors
///
/// Returns [`Error::DegeneratePolynomial`] for `poly == 0`, which has no degree.
pub fn degree_of(poly: u64) -> Result<u32> {
    if poly == 0 {
        return Err(Error::DegeneratePolynomial(poly));
    }
    Ok(u64::BITS - 1 - poly.leading_zeros())
}

/// Returns the number of elements, 2^degree, of the field defined by `poly`.
pub fn size_of(poly: u64) -> Result<u64> {
    Ok(1u64 << degree_of(poly)?)
}

/// Renders a defining polynomial as `x^n+...+x^1+1`.
///
/// Every set bit from 63 down to 1 becomes a term; the constant term is always written.
pub fn format_polynomial(poly: u64) -> String {
    (1..u64::BITS)
        .rev()
        .filter(|&i| poly & (1u64 << i) != 0)
        .map(|i| format!("x^{}", i))
        .chain(std::iter::once("1".to_string()))
        .join("+")
}

/// Shape of a GF(2^n) field derived from its defining polynomial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FieldDescriptor {
    primitive_poly: u64,
    degree: u32,
    size: u64,
}

impl FieldDescriptor {
    /// Derives degree and size from a raw polynomial value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DegeneratePolynomial`] if the polynomial has degree 0
    /// (values 0 and 1), since such a "field" has fewer than two elements.
    pub fn new(primitive_poly: u64) -> Result<Self> {
        let degree = degree_of(primitive_poly)?;
        if degree == 0 {
            return Err(Error::DegeneratePolynomial(primitive_poly));
        }

        Ok(Self {
            primitive_poly,
            degree,
            size: 1u64 << degree,
        })
    }

    /// Returns the defining polynomial.
    pub fn primitive_poly(&self) -> u64 {
        self.primitive_poly
    }

    /// Returns the degree n of the field.
    pub fn degree(&self) -> u32 {
        self.degree
    }

    /// Returns the number of field elements, 2^n.
    pub fn size(&self) -> u64 {
        self.size
    }

    /// Returns the order of the multiplicative group, 2^n - 1.
    pub fn element_count(&self) -> u64 {
        self.size - 1
    }

    /// Returns `true` if `value` is an element of the field.
    pub fn contains(&self, value: u64) -> bool {
        value < self.size
    }
}

impl fmt::Display for FieldDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GF({}) with {}", self.size, format_polynomial(self.primitive_poly))
    }
}

/// Arithmetic capability shared by every field representation.
///
/// Operands must be elements of the field (`< size()`); this is not checked
/// on the arithmetic path.
pub trait GaloisArithmetic {
    /// Returns the shape of the field.
    fn descriptor(&self) -> &FieldDescriptor;

    /// Multiplies two field elements.
    fn mul(&self, a: u64, b: u64) -> u64;

    /// Returns the degree n of the field.
    fn degree(&self) -> u32 {
        self.descriptor().degree()
    }

    /// Returns the number of field elements.
    fn size(&self) -> u64 {
        self.descriptor().size()
    }

    /// Returns the defining polynomial.
    fn primitive_poly(&self) -> u64 {
        self.descriptor().primitive_poly()
    }

    /// Adds two field elements. Addition and subtraction are both XOR in characteristic 2.
    #[inline]
    fn add(&self, a: u64, b: u64) -> u64 {
        a ^ b
    }

    /// Raises `a` to the non-negative power `p`.
    ///
    /// `pow(a, 0)` is 1 for every `a`, including 0. Root evaluation relies on
    /// this to produce the constant term.
    fn pow(&self, a: u64, p: u64) -> u64 {
        let mut result = 1;
        let mut base = a;
        let mut exponent = p;

        while exponent > 0 {
            if exponent & 1 == 1 {
                result = self.mul(result, base);
            }
            exponent >>= 1;
            if exponent > 0 {
                base = self.mul(base, base);
            }
        }

        result
    }

    /// Iterates over the nonzero elements of the field in integer order.
    fn elements(&self) -> std::ops::Range<u64> {
        1..self.size()
    }
}

/// Which representation a [`Field`] uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldKind {
    /// Discrete-log/antilog tables
    Table,
    /// Shift-and-reduce multiplication without tables
    Direct,
}

/// A GF(2^n) field in one of its two representations.
#[derive(Debug)]
pub enum Field {
    /// Table-based field with O(1) multiply and divide
    Table(TableField),
    /// Table-free field for large degrees
    Direct(DirectField),
}

impl Field {
    /// Creates a field, choosing the representation from the degree.
    ///
    /// Degrees up to [`Config::table_degree_limit`] get validated lookup
    /// tables; larger degrees use direct multiplication.
    ///
    /// # Errors
    ///
    /// Returns an error if the polynomial is degenerate or, for table-based
    /// fields, if validation shows it is not primitive.
    pub fn new(primitive_poly: u64, config: &Config) -> Result<Self> {
        let descriptor = FieldDescriptor::new(primitive_poly)?;
        let field = if descriptor.degree() <= config.table_degree_limit() {
            Self::table(primitive_poly)?
        } else {
            Self::direct(primitive_poly)?
        };
        debug!(
            "Selected {:?} representation for {}",
            field.kind(),
            field.descriptor()
        );
        Ok(field)
    }

    /// Creates a table-based field.
    pub fn table(primitive_poly: u64) -> Result<Self> {
        TableField::new(primitive_poly).map(Self::Table)
    }

    /// Creates a direct (table-free) field.
    pub fn direct(primitive_poly: u64) -> Result<Self> {
        DirectField::new(primitive_poly).map(Self::Direct)
    }

    /// Returns the representation in use.
    pub fn kind(&self) -> FieldKind {
        match self {
            Self::Table(_) => FieldKind::Table,
            Self::Direct(_) => FieldKind::Direct,
        }
    }

    /// Returns the table-based representation, if this is one.
    pub fn as_table(&self) -> Option<&TableField> {
        match self {
            Self::Table(field) => Some(field),
            Self::Direct(_) => None,
        }
    }

    /// Divides `a` by `b`. Returns 0 if either operand is 0.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedOperation`] for a direct field.
    pub fn div(&self, a: u64, b: u64) -> Result<u64> {
        Ok(self.require_table("div")?.div(a, b))
    }

    /// Returns the field element at discrete-log index `i`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedOperation`] for a direct field.
    pub fn get_binary(&self, i: u64) -> Result<u64> {
        Ok(self.require_table("get_binary")?.get_binary(i))
    }

    /// Returns the discrete log of `value`, or `None` for 0.
    pub fn log(&self, value: u64) -> Result<Option<u64>> {
        Ok(self.require_table("log")?.log(value))
    }

    /// Returns the multiplicative inverse of `value`, or `None` for 0.
    pub fn inverse(&self, value: u64) -> Option<u64> {
        match self {
            Self::Table(field) => field.inverse(value),
            Self::Direct(field) => field.inverse(value),
        }
    }

    fn require_table(&self, operation: &str) -> Result<&TableField> {
        self.as_table().ok_or_else(|| {
            Error::UnsupportedOperation(format!(
                "{} requires a table-based field, {} has none",
                operation,
                self.descriptor()
            ))
        })
    }
}

impl GaloisArithmetic for Field {
    fn descriptor(&self) -> &FieldDescriptor {
        match self {
            Self::Table(field) => field.descriptor(),
            Self::Direct(field) => field.descriptor(),
        }
    }

    #[inline]
    fn mul(&self, a: u64, b: u64) -> u64 {
        match self {
            Self::Table(field) => field.mul(a, b),
            Self::Direct(field) => field.mul(a, b),
        }
    }

    fn pow(&self, a: u64, p: u64) -> u64 {
        match self {
            Self::Table(field) => field.pow(a, p),
            Self::Direct(field) => field.pow(a, p),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.descriptor(), f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degree_and_size() {
        assert_eq!(degree_of(0x13).unwrap(), 4);
        assert_eq!(size_of(0x13).unwrap(), 16);
        assert_eq!(degree_of(0x11D).unwrap(), 8);
        assert_eq!(degree_of(0x100400007).unwrap(), 32);
        assert_eq!(size_of(0x100400007).unwrap(), 1 << 32);
        assert_eq!(degree_of(1).unwrap(), 0);
        assert!(degree_of(0).is_err());
    }

    #[test]
    fn test_descriptor_rejects_degenerate() {
        assert!(matches!(
            FieldDescriptor::new(0),
            Err(Error::DegeneratePolynomial(0))
        ));
        assert!(matches!(
            FieldDescriptor::new(1),
            Err(Error::DegeneratePolynomial(1))
        ));

        let gf = FieldDescriptor::new(0x7).unwrap();
        assert_eq!(gf.degree(), 2);
        assert_eq!(gf.element_count(), 3);
        assert!(gf.contains(3));
        assert!(!gf.contains(4));
    }

    #[test]
    fn test_format_polynomial() {
        assert_eq!(format_polynomial(0x13), "x^4+x^1+1");
        assert_eq!(format_polynomial(0x11D), "x^8+x^4+x^3+x^2+1");
        assert_eq!(
            FieldDescriptor::new(0x100400007).unwrap().to_string(),
            "GF(4294967296) with x^32+x^22+x^2+x^1+1"
        );
    }

    #[test]
    fn test_representation_selection() {
        let config = Config::new().with_table_degree_limit(8);

        let small = Field::new(0x11D, &config).unwrap();
        assert_eq!(small.kind(), FieldKind::Table);

        let big = Field::new(0x103DD, &config).unwrap();
        assert_eq!(big.kind(), FieldKind::Direct);
        assert!(big.as_table().is_none());
    }

    #[test]
    fn test_direct_field_lacks_table_operations() {
        let gf = Field::direct(0x13).unwrap();
        assert!(matches!(gf.div(3, 2), Err(Error::UnsupportedOperation(_))));
        assert!(matches!(gf.get_binary(1), Err(Error::UnsupportedOperation(_))));
        assert!(gf.log(3).is_err());
    }

    #[test]
    fn test_representations_agree() {
        let table = Field::table(0x11D).unwrap();
        let direct = Field::direct(0x11D).unwrap();

        for a in 0..256 {
            for b in (0..256).step_by(7) {
                assert_eq!(table.mul(a, b), direct.mul(a, b));
            }
            assert_eq!(table.pow(a, 13), direct.pow(a, 13));
            assert_eq!(table.inverse(a), direct.inverse(a));
        }
    }

    #[test]
    fn test_power_identity() {
        let gf = Field::table(0x13).unwrap();
        for a in 0..16 {
            assert_eq!(gf.pow(a, 0), 1);
            assert_eq!(gf.pow(a, 1), a);
        }
        assert_eq!(gf.pow(0, 5), 0);
    }

    #[test]
    fn test_field_display() {
        let gf = Field::table(0x13).unwrap();
        assert_eq!(gf.to_string(), "GF(16) with x^4+x^1+1");
    }
}
