//! Known primitive polynomials over GF(2).
//!
//! Lists for degrees 2 through 16 and 32, encoded with the leading term
//! included (bit n set for degree n). Every entry up to degree 16 passes
//! table validation; the degree-32 entries are for direct fields.

const DEGREE_2: &[u64] = &[0x7];

const DEGREE_3: &[u64] = &[0xB];

const DEGREE_4: &[u64] = &[0x13];

const DEGREE_5: &[u64] = &[0x25, 0x37, 0x3D];

const DEGREE_6: &[u64] = &[0x43, 0x67, 0x6D];

const DEGREE_7: &[u64] = &[
    0x83, 0x89, 0x8F, 0x9D, 0xBF, 0xCB, 0xD5,
    0xE5, 0xF7,
];

const DEGREE_8: &[u64] = &[0x11D, 0x12B, 0x15F, 0x163, 0x165, 0x169, 0x1E7];

const DEGREE_9: &[u64] = &[
    0x211, 0x22D, 0x259, 0x26F, 0x277, 0x2DB, 0x313,
    0x331, 0x361, 0x36B, 0x385, 0x38F, 0x3E3, 0x3E9,
];

const DEGREE_10: &[u64] = &[
    0x409, 0x41B, 0x46F, 0x50D, 0x519, 0x523, 0x531,
    0x5E5, 0x5FB, 0x613, 0x67F, 0x74D, 0x763, 0x7F9,
];

const DEGREE_11: &[u64] = &[
    0x805, 0x82B, 0x82D, 0x863, 0x88D, 0x925, 0x973,
    0x97F, 0xA13, 0xB93, 0xC0D, 0xC9B, 0xDBB, 0xF0B,
];

const DEGREE_12: &[u64] = &[
    0x1053, 0x120D, 0x130F, 0x1745, 0x1775, 0x1857, 0x1A2B,
    0x1AD1, 0x1AE1, 0x1B91, 0x1BA7, 0x1C27, 0x1D5B, 0x1FBB,
];

const DEGREE_13: &[u64] = &[
    0x201B, 0x22BF, 0x23A3, 0x26B1, 0x274F, 0x2993, 0x2FFF,
    0x3079, 0x31E1, 0x3315, 0x355D, 0x3827, 0x39D3, 0x3A29,
];

const DEGREE_14: &[u64] = &[
    0x4143, 0x4443, 0x46DB, 0x4843, 0x4A65, 0x53F1, 0x5BEB,
    0x5E99, 0x606B, 0x65BF, 0x6877, 0x692F, 0x7CC3, 0x7E61,
];

const DEGREE_15: &[u64] = &[
    0x8003, 0x8011, 0x8081, 0x80CF, 0x8423, 0x8431, 0x8437,
    0x86A9, 0x8729, 0x88C7, 0x900B, 0x903D, 0x99D5, 0xFFFD,
];

const DEGREE_16: &[u64] = &[
    0x103DD, 0x1100B, 0x11085, 0x136C3, 0x138CB, 0x13C47, 0x1450B,
    0x1706D, 0x17481, 0x1846F, 0x18BB7, 0x18CEF, 0x18E47, 0x18F57,
];

const DEGREE_32: &[u64] = &[0x100400007, 0x10076B553, 0x10FC22F87, 0x1100D4E63];

/// Returns the known primitive polynomials of `degree`, or an empty slice.
pub fn primitive_polynomials(degree: u32) -> &'static [u64] {
    match degree {
        2 => DEGREE_2,
        3 => DEGREE_3,
        4 => DEGREE_4,
        5 => DEGREE_5,
        6 => DEGREE_6,
        7 => DEGREE_7,
        8 => DEGREE_8,
        9 => DEGREE_9,
        10 => DEGREE_10,
        11 => DEGREE_11,
        12 => DEGREE_12,
        13 => DEGREE_13,
        14 => DEGREE_14,
        15 => DEGREE_15,
        16 => DEGREE_16,
        32 => DEGREE_32,
        _ => &[],
    }
}

/// Returns every degree with a non-empty catalog entry, ascending.
pub fn degrees() -> impl Iterator<Item = u32> {
    (2..=16).chain(std::iter::once(32))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::galois::{degree_of, GaloisArithmetic, TableField};

    #[test]
    fn test_entries_have_their_degree() {
        for degree in degrees() {
            let polys = primitive_polynomials(degree);
            assert!(!polys.is_empty());
            for &poly in polys {
                assert_eq!(degree_of(poly).unwrap(), degree, "{:#x}", poly);
                assert_eq!(poly & 1, 1, "{:#x} lacks a constant term", poly);
            }
        }
    }

    #[test]
    fn test_small_entries_validate() {
        for degree in 2..=10 {
            for &poly in primitive_polynomials(degree) {
                let gf = TableField::new(poly).unwrap();
                assert_eq!(gf.degree(), degree);
            }
        }
    }

    #[test]
    fn test_unknown_degree_is_empty() {
        assert!(primitive_polynomials(0).is_empty());
        assert!(primitive_polynomials(17).is_empty());
        assert!(primitive_polynomials(64).is_empty());
    }
}
