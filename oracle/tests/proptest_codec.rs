//! Property-based tests for the codec round-trip law and the oracle's
//! division and bitwise identities over random unbounded operands.

use num_bigint::{BigInt, BigUint, Sign};
use num_traits::{Signed, Zero};
use oracle::codec::to_twos_complement;
use oracle::{decode, encode, evaluate, Format, Op};
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

/// Random signed integer of up to 31 magnitude bytes (well past u128).
fn bigint() -> impl Strategy<Value = BigInt> {
    (any::<bool>(), proptest::collection::vec(any::<u8>(), 1..32)).prop_map(|(negative, bytes)| {
        let sign = if negative { Sign::Minus } else { Sign::Plus };
        BigInt::from_biguint(sign, BigUint::from_bytes_be(&bytes))
    })
}

fn bigint_nonzero() -> impl Strategy<Value = BigInt> {
    bigint().prop_filter("nonzero", |v| !v.is_zero())
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    #[test]
    fn prop_roundtrip_decimal(v in bigint()) {
        prop_assert_eq!(decode(&encode(&v, Format::Decimal), Format::Decimal).unwrap(), v);
    }

    #[test]
    fn prop_roundtrip_hex(v in bigint()) {
        prop_assert_eq!(decode(&encode(&v, Format::Hex), Format::Hex).unwrap(), v);
    }

    #[test]
    fn prop_roundtrip_bin(v in bigint()) {
        prop_assert_eq!(decode(&encode(&v, Format::Bin), Format::Bin).unwrap(), v);
    }

    #[test]
    fn prop_opposite_signs_never_collide(v in bigint_nonzero()) {
        for format in [Format::Hex, Format::Bin] {
            prop_assert_ne!(encode(&v, format), encode(&(-&v), format));
        }
    }

    #[test]
    fn prop_division_identity(a in bigint(), b in bigint_nonzero()) {
        let q = evaluate(Op::Div, &a, &b).unwrap();
        let r = evaluate(Op::Rem, &a, &b).unwrap();
        prop_assert_eq!(&q * &b + &r, a.clone());
        // Truncation toward zero: |r| < |b| and r follows a's sign.
        prop_assert!(r.abs() < b.abs());
        prop_assert!(r.is_zero() || r.sign() == a.sign());
    }

    #[test]
    fn prop_xor_self_cancels(a in bigint()) {
        prop_assert_eq!(evaluate(Op::BitXor, &a, &a).unwrap(), BigInt::zero());
    }

    #[test]
    fn prop_bitwise_results_unsigned(a in bigint(), b in bigint()) {
        for op in [Op::BitAnd, Op::BitOr, Op::BitXor] {
            prop_assert!(!evaluate(op, &a, &b).unwrap().is_negative());
        }
    }

    #[test]
    fn prop_and_or_bound_by_operands(a in bigint(), b in bigint()) {
        let wider = to_twos_complement(&a).bits().max(to_twos_complement(&b).bits());
        for op in [Op::BitAnd, Op::BitOr, Op::BitXor] {
            let result = evaluate(op, &a, &b).unwrap();
            prop_assert!(result.magnitude().bits() <= wider);
        }
    }

    #[test]
    fn prop_shl_then_shr_restores_unsigned_form(a in bigint(), s in 0i64..=16) {
        let shift = BigInt::from(s);
        let widened = evaluate(Op::Shl, &a, &shift).unwrap();
        let back = evaluate(Op::Shr, &widened, &shift).unwrap();
        prop_assert_eq!(back, BigInt::from(to_twos_complement(&a)));
    }
}
