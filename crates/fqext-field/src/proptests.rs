//! Property-based tests for extension field arithmetic.

#[cfg(test)]
mod tests {
    use fqext_integers::Integer;
    use proptest::prelude::*;

    use crate::{FqElem, FqField};

    // GF(7^3) with the Conway polynomial x^3 + 6x^2 + 4
    fn field() -> FqField {
        FqField::from_i64_modulus(7, &[4, 0, 6, 1]).unwrap()
    }

    // GF(3^3) and GF(3^6) from their Conway polynomials
    fn subfield() -> FqField {
        FqField::cached_conway(&Integer::new(3), 3).unwrap()
    }

    fn superfield() -> FqField {
        FqField::cached_conway(&Integer::new(3), 6).unwrap()
    }

    fn elem() -> impl Strategy<Value = FqElem> {
        proptest::collection::vec(0i64..7, 3).prop_map(|c| field().from_coeffs(c).unwrap())
    }

    fn nonzero_elem() -> impl Strategy<Value = FqElem> {
        elem().prop_filter("element must be non-zero", |x| !x.is_zero())
    }

    proptest! {
        #[test]
        fn field_add_axioms(a in elem(), b in elem(), c in elem()) {
            prop_assert_eq!(&a + &b, &b + &a);
            prop_assert_eq!(&(&a + &b) + &c, &a + &(&b + &c));
            prop_assert_eq!(&a + &field().zero(), a.clone());
            prop_assert!((&a + &(-&a)).is_zero());
        }

        #[test]
        fn field_mul_axioms(a in elem(), b in elem(), c in elem()) {
            prop_assert_eq!(&a * &b, &b * &a);
            prop_assert_eq!(&(&a * &b) * &c, &a * &(&b * &c));
            prop_assert_eq!(&a * &field().one(), a.clone());
            prop_assert_eq!(&a * &(&b + &c), &(&a * &b) + &(&a * &c));
        }

        #[test]
        fn field_inverse(a in nonzero_elem()) {
            prop_assert!((&a * &a.inv().unwrap()).is_one());
            prop_assert_eq!(&field().one() / &a, a.inv().unwrap());
        }

        #[test]
        fn results_stay_reduced(a in elem(), b in elem()) {
            for x in [&a * &b, &a - &b, a.square(), a.frobenius(2)] {
                prop_assert_eq!(x.coeffs().len(), 3);
                prop_assert!(x.coeffs().iter().all(|c| !c.is_negative() && *c < Integer::new(7)));
            }
        }

        #[test]
        fn power_law(a in nonzero_elem(), m in -400i64..400, n in -400i64..400) {
            let lhs = a.pow_i64(m + n).unwrap();
            let rhs = &a.pow_i64(m).unwrap() * &a.pow_i64(n).unwrap();
            prop_assert_eq!(lhs, rhs);
            prop_assert!(a.pow_i64(0).unwrap().is_one());
            prop_assert_eq!(a.pow_i64(-n).unwrap(), a.pow_i64(n).unwrap().inv().unwrap());
        }

        #[test]
        fn frobenius_is_automorphism(a in elem(), b in elem(), n in -5i64..5) {
            prop_assert_eq!((&a + &b).frobenius(n), &a.frobenius(n) + &b.frobenius(n));
            prop_assert_eq!((&a * &b).frobenius(n), &a.frobenius(n) * &b.frobenius(n));
            prop_assert_eq!(a.frobenius(3), a.clone());
            prop_assert_eq!(a.frobenius(1), a.pow_i64(7).unwrap());
        }

        #[test]
        fn sqrt_round_trip(a in elem()) {
            let square = a.square();
            prop_assert!(square.is_square());
            prop_assert_eq!(square.sqrt(true).unwrap().square(), square);
            let (ok, root) = a.is_square_with_sqrt();
            if ok {
                prop_assert_eq!(root.square(), a);
            }
        }

        #[test]
        fn trace_and_norm_fixed_by_frobenius(a in elem()) {
            let t = a.trace();
            let n = a.norm();
            prop_assert_eq!(t.frobenius(1), t);
            prop_assert_eq!(n.frobenius(1), n);
        }

        #[test]
        fn minimal_polynomial_vanishes(a in elem()) {
            let m = a.minimal_polynomial();
            prop_assert!(m.is_monic());
            prop_assert_eq!(3 % m.degree(), 0);
            let value = m
                .coeffs()
                .iter()
                .rev()
                .fold(field().zero(), |acc, c| &(&acc * &a) + c);
            prop_assert!(value.is_zero());
            let exponent = u32::try_from(3 / m.degree()).unwrap();
            prop_assert_eq!(a.characteristic_polynomial(), m.pow(exponent));
        }

        #[test]
        fn coercion_round_trip(c in proptest::collection::vec(0i64..3, 3)) {
            let small = subfield();
            let large = superfield();
            let a = small.from_coeffs(c).unwrap();
            let up = large.coerce(&a).unwrap();
            prop_assert_eq!(up.field(), &large);
            prop_assert_eq!(small.coerce(&up).unwrap(), a);
        }
    }
}
