//! End-to-end tests of the field engine and the analyses built on it.

use gfroots::analysis::SweepSummary;
use gfroots::catalog;
use gfroots::prelude::*;
use proptest::prelude::*;

const GF16: u64 = 0x13;
const GF256: u64 = 0x11D;
const GF2_32: u64 = 0x100400007;

#[test]
fn gf16_tables_are_exact_inverses() {
    let gf = TableField::new(GF16).unwrap();
    assert_eq!(gf.size(), 16);
    assert_eq!(gf.exp_table().len(), 16);
    assert_eq!(gf.exp_table()[0], 1);

    for v in 1..16 {
        let i = gf.log(v).unwrap();
        assert!(i < 15);
        assert_eq!(gf.get_binary(i), v);
    }
    for i in 0..15 {
        assert_eq!(gf.log(gf.get_binary(i)), Some(i));
    }
    assert_eq!(gf.log(0), None);

    // the generator has order 15
    assert_eq!(gf.pow(2, 15), 1);
    assert!((1..15).all(|p| gf.pow(2, p) != 1));
}

#[test]
fn every_small_catalog_polynomial_builds_a_field() {
    for degree in 2..=12 {
        for &poly in catalog::primitive_polynomials(degree) {
            let gf = TableField::new(poly).unwrap_or_else(|e| panic!("{:#x}: {}", poly, e));
            let order = gf.size() - 1;
            for i in 0..order {
                assert_eq!(gf.log(gf.get_binary(i)), Some(i));
            }
        }
    }
}

#[test]
fn validator_lists_unvisited_indices() {
    match TableField::new(0x1F) {
        Err(Error::MalformedField {
            polynomial,
            unvisited,
        }) => {
            assert_eq!(polynomial, 0x1F);
            // the generator cycles with period 5, so only the last lap survives
            assert_eq!(unvisited, (0..10).collect::<Vec<u64>>());
        }
        other => panic!("expected a malformed field, got {:?}", other),
    }
}

#[test]
fn validator_rejects_non_primitive_polynomials() {
    // x^3 + 1 and x^8 + 1 factor; 0x11B is irreducible but x has order 51
    for poly in [0x9, 0x11B, 0x101] {
        let err = TableField::new(poly).unwrap_err();
        assert!(err.is_rejected_polynomial(), "{:#x}: {}", poly, err);
    }
}

#[test]
fn gf16_polynomial_has_four_roots_in_gf256() {
    let source = TableField::new(GF16).unwrap();
    let target = TableField::new(GF256).unwrap();

    let report = RootSearch::default().run(source.descriptor(), &target);
    assert_eq!(report.scanned, 255);
    assert_eq!(report.roots, vec![0x4E, 0x4F, 0x98, 0x99]);
    assert!(source.has_root(&target));

    // each root satisfies x^4 + x + 1 = 0
    for &r in &report.roots {
        let value = target.add(target.add(target.pow(r, 4), r), 1);
        assert_eq!(value, 0);
    }
}

#[test]
fn gf256_polynomial_has_no_roots_in_gf16() {
    let source = TableField::new(GF256).unwrap();
    let target = TableField::new(GF16).unwrap();

    let report = RootSearch::default().run(source.descriptor(), &target);
    assert_eq!(report.scanned, 15);
    assert!(report.roots.is_empty());
    assert!(!source.has_root(&target));
}

#[test]
fn direct_field_of_degree_32() {
    let config = Config::default();
    let gf = Field::new(GF2_32, &config).unwrap();
    assert_eq!(gf.kind(), FieldKind::Direct);
    assert_eq!(gf.degree(), 32);

    for b in [0, 1, 0x1234_5678, 0xFFFF_FFFF, 0x8000_0000] {
        assert_eq!(gf.mul(1, b), b);
    }
    // x * x^31 = x^32 = x^22 + x^2 + x + 1
    assert_eq!(gf.mul(2, 0x8000_0000), 0x40_0007);
    assert_eq!(gf.mul(0xDEAD_BEEF, 0x1234_5678), 0x9F14_AD51);

    let inv = gf.inverse(0xDEAD_BEEF).unwrap();
    assert_eq!(gf.mul(0xDEAD_BEEF, inv), 1);
    assert!(gf.div(1, 2).is_err());
}

#[test]
fn sweep_against_catalog() {
    let sources = catalog::primitive_polynomials(2);
    let targets = [catalog::primitive_polynomials(3), catalog::primitive_polynomials(4)].concat();
    let outcome = sweep(sources, &targets, &Config::default()).unwrap();

    assert!(outcome.rejected.is_empty());
    // GF(4) embeds in GF(16) but not in GF(8)
    let hits: Vec<u64> = outcome.with_roots().map(|r| r.target_poly).collect();
    assert_eq!(hits, vec![GF16]);

    let json = serde_json::to_string(&SweepSummary::from(&outcome)).unwrap();
    assert!(json.contains("\"target_poly\":19"));
}

#[test]
fn bit_balance_and_syndromes_from_config() {
    let config = Config::default();
    let gf = TableField::new(GF16).unwrap();

    let report = analyze_bit_balance(&gf, config.chip_cnt()).unwrap();
    assert_eq!(report.tally, vec![9, 8, 8, 8]);

    let table = chip_syndromes(&gf, config.chips(), config.symbol_bits()).unwrap();
    assert_eq!(table.rows.len(), 3);
    assert!(table.rows.iter().all(|row| row.len() == 15));
}

fn arb_gf256() -> impl Strategy<Value = u64> {
    0u64..256
}

fn arb_nonzero_gf256() -> impl Strategy<Value = u64> {
    1u64..256
}

proptest! {
    #[test]
    fn test_addition_is_an_involution(a in arb_gf256(), b in arb_gf256()) {
        let gf = TableField::new(GF256).unwrap();
        prop_assert_eq!(gf.add(a, b), gf.add(b, a));
        prop_assert_eq!(gf.add(a, a), 0);
    }

    #[test]
    fn test_multiplication_commutativity(a in arb_gf256(), b in arb_gf256()) {
        let gf = TableField::new(GF256).unwrap();
        prop_assert_eq!(gf.mul(a, b), gf.mul(b, a));
    }

    #[test]
    fn test_multiplication_associativity(a in arb_gf256(), b in arb_gf256(), c in arb_gf256()) {
        let gf = TableField::new(GF256).unwrap();
        prop_assert_eq!(gf.mul(gf.mul(a, b), c), gf.mul(a, gf.mul(b, c)));
    }

    #[test]
    fn test_distributivity(a in arb_gf256(), b in arb_gf256(), c in arb_gf256()) {
        let gf = TableField::new(GF256).unwrap();
        prop_assert_eq!(gf.mul(a, gf.add(b, c)), gf.add(gf.mul(a, b), gf.mul(a, c)));
    }

    #[test]
    fn test_product_stays_in_group(a in arb_nonzero_gf256(), b in arb_nonzero_gf256()) {
        let gf = TableField::new(GF256).unwrap();
        let log = gf.log(gf.mul(a, b));
        prop_assert!(matches!(log, Some(i) if i < 255));
    }

    #[test]
    fn test_division_inverse(a in arb_nonzero_gf256(), b in arb_nonzero_gf256()) {
        let gf = TableField::new(GF256).unwrap();
        prop_assert_eq!(gf.div(gf.mul(a, b), b), a);
    }

    #[test]
    fn test_power_identities(a in arb_gf256(), n in 0u64..600, m in 0u64..600) {
        let gf = TableField::new(GF256).unwrap();
        prop_assert_eq!(gf.pow(a, 0), 1);
        prop_assert_eq!(gf.pow(a, 1), a);
        prop_assert_eq!(gf.mul(gf.pow(a, n), gf.pow(a, m)), gf.pow(a, n + m));
    }

    #[test]
    fn test_representations_agree(a in arb_gf256(), b in arb_gf256(), p in 0u64..1000) {
        let table = TableField::new(GF256).unwrap();
        let direct = DirectField::new(GF256).unwrap();
        prop_assert_eq!(table.mul(a, b), direct.mul(a, b));
        prop_assert_eq!(table.pow(a, p), direct.pow(a, p));
        prop_assert_eq!(table.inverse(a), direct.inverse(a));
    }

    #[test]
    fn test_direct_field_axioms(a in 0u64..1 << 32, b in 0u64..1 << 32, c in 0u64..1 << 32) {
        let gf = DirectField::new(GF2_32).unwrap();
        prop_assert!(gf.mul(a, b) < 1 << 32);
        prop_assert_eq!(gf.mul(a, b), gf.mul(b, a));
        prop_assert_eq!(gf.mul(gf.mul(a, b), c), gf.mul(a, gf.mul(b, c)));
        prop_assert_eq!(gf.mul(a, gf.add(b, c)), gf.add(gf.mul(a, b), gf.mul(a, c)));
    }
}
