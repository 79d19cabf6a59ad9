//! Table-based GF(2^n) field.
//!
//! The exponential table maps a power of the generator to its field element
//! and the logarithm table maps each nonzero element back to its exponent.
//! Both are generated once, validated, and never mutated afterwards.

use std::fmt::Write;

use tracing::debug;

use super::validator::validate_tables;
use super::{FieldDescriptor, GaloisArithmetic, MAX_TABLE_DEGREE};
use crate::error::{Error, Result};

/// A GF(2^n) field backed by validated exp/log lookup tables.
#[derive(Debug, Clone)]
pub struct TableField {
    /// Shape of the field.
    descriptor: FieldDescriptor,

    /// Exponential table: index i holds generator^i. The last entry repeats
    /// entry 0 so that index `size - 1` needs no separate wrap.
    exp_table: Vec<u64>,

    /// Logarithm table: the discrete log of each element, `None` for 0.
    log_table: Vec<Option<u64>>,
}

impl TableField {
    /// Creates a table-based field from a raw polynomial value.
    ///
    /// The tables are generated by walking the powers of the generator and
    /// then validated. A polynomial that is not primitive for its degree never
    /// yields a field.
    ///
    /// # Arguments
    ///
    /// * `primitive_poly` - Defining polynomial, e.g. 0x13 for x^4 + x + 1
    ///
    /// # Errors
    ///
    /// * [`Error::DegeneratePolynomial`] for values 0 and 1
    /// * [`Error::UnsupportedDegree`] above [`MAX_TABLE_DEGREE`]
    /// * [`Error::MalformedField`] if the generator does not reach every log index
    pub fn new(primitive_poly: u64) -> Result<Self> {
        let descriptor = FieldDescriptor::new(primitive_poly)?;
        if descriptor.degree() > MAX_TABLE_DEGREE {
            return Err(Error::UnsupportedDegree {
                degree: descriptor.degree(),
                max: MAX_TABLE_DEGREE,
            });
        }

        let (exp_table, log_table) = generate_tables(&descriptor);
        validate_tables(&descriptor, &log_table)?;

        debug!(
            "Generated tables for {} (degree {}, {} elements)",
            descriptor,
            descriptor.degree(),
            descriptor.size()
        );

        Ok(Self {
            descriptor,
            exp_table,
            log_table,
        })
    }

    /// Divides `a` by `b` in the field.
    ///
    /// Returns 0 if either operand is 0; dividing by zero is not an error.
    #[inline]
    pub fn div(&self, a: u64, b: u64) -> u64 {
        if a == 0 || b == 0 {
            return 0;
        }

        let order = self.descriptor.element_count();
        let log_a = self.index_of(a);
        let log_b = self.index_of(b);

        self.exp_table[((log_a + order - log_b) % order) as usize]
    }

    /// Returns the field element at discrete-log index `i`.
    ///
    /// Valid indices are `0..size`; index `size - 1` is the circular copy of index 0.
    #[inline]
    pub fn get_binary(&self, i: u64) -> u64 {
        self.exp_table[i as usize]
    }

    /// Returns generator^`power` for any exponent.
    pub fn exp(&self, power: u64) -> u64 {
        self.exp_table[(power % self.descriptor.element_count()) as usize]
    }

    /// Returns the discrete log of `value`, or `None` for 0 and values outside the field.
    pub fn log(&self, value: u64) -> Option<u64> {
        usize::try_from(value)
            .ok()
            .and_then(|v| self.log_table.get(v).copied().flatten())
    }

    /// Returns the multiplicative inverse of `value`, or `None` for 0.
    pub fn inverse(&self, value: u64) -> Option<u64> {
        self.log(value)
            .map(|log| self.exp_table[(self.descriptor.element_count() - log) as usize])
    }

    /// Returns the exponential table, `size` entries long.
    pub fn exp_table(&self) -> &[u64] {
        &self.exp_table
    }

    /// Returns the logarithm table, indexed by element value.
    pub fn log_table(&self) -> &[Option<u64>] {
        &self.log_table
    }

    /// Renders both tables, sixteen entries per line.
    pub fn render_tables(&self) -> String {
        let mut out = String::new();

        let _ = writeln!(out, "{}", self.descriptor);
        let _ = writeln!(out, "Index : Binary");
        for (i, value) in self.exp_table.iter().enumerate() {
            let _ = write!(out, "{:6}:{:6x}", i, value);
            if i % 16 == 15 {
                out.push('\n');
            }
        }
        if self.exp_table.len() % 16 != 0 {
            out.push('\n');
        }

        let _ = writeln!(out, "Binary : Index");
        for (value, log) in self.log_table.iter().enumerate() {
            match log {
                Some(log) => {
                    let _ = write!(out, "{:6x}:{:6}", value, log);
                }
                None => {
                    let _ = write!(out, "{:6x}:{:>6}", value, "-");
                }
            }
            if value % 16 == 15 {
                out.push('\n');
            }
        }
        if self.log_table.len() % 16 != 0 {
            out.push('\n');
        }

        out
    }

    /// Log of a nonzero element. Validated tables give every nonzero element a log.
    #[inline]
    fn index_of(&self, value: u64) -> u64 {
        self.log_table[value as usize].unwrap_or_default()
    }
}

impl GaloisArithmetic for TableField {
    fn descriptor(&self) -> &FieldDescriptor {
        &self.descriptor
    }

    #[inline]
    fn mul(&self, a: u64, b: u64) -> u64 {
        if a == 0 || b == 0 {
            return 0;
        }

        let order = self.descriptor.element_count();
        self.exp_table[((self.index_of(a) + self.index_of(b)) % order) as usize]
    }

    /// Raises `a` to the power `p` through the log table.
    ///
    /// Agrees with repeated multiplication: `pow(0, 0)` is 1 and `pow(0, p)` is 0 otherwise.
    fn pow(&self, a: u64, p: u64) -> u64 {
        if a == 0 {
            return if p == 0 { 1 } else { 0 };
        }

        let order = self.descriptor.element_count() as u128;
        let log = (self.index_of(a) as u128 * p as u128) % order;
        self.exp_table[log as usize]
    }
}

/// Walks the powers of the generator x to fill both tables.
///
/// Each step shifts the current element left by one; if the bit at position
/// `degree - 1` was set, the polynomial is XORed in to reduce, then the
/// result is masked back to `degree` bits.
fn generate_tables(descriptor: &FieldDescriptor) -> (Vec<u64>, Vec<Option<u64>>) {
    let size = descriptor.size() as usize;
    let mask = descriptor.size() - 1;
    let top_bit = 1u64 << (descriptor.degree() - 1);
    let poly = descriptor.primitive_poly();

    let mut exp_table = vec![0u64; size];
    let mut log_table = vec![None; size];

    let mut x = 1u64;
    for i in 0..size - 1 {
        exp_table[i] = x;
        log_table[x as usize] = Some(i as u64);

        let reduce = if x & top_bit != 0 { poly } else { 0 };
        x = ((x << 1) ^ reduce) & mask;
    }

    exp_table[size - 1] = exp_table[0];
    // 0 is not a power of the generator
    log_table[0] = None;

    (exp_table, log_table)
}
