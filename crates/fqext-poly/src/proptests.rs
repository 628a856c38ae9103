//! Property-based tests for polynomial arithmetic.

#[cfg(test)]
mod tests {
    use fqext_integers::{Integer, PrimeField};
    use proptest::prelude::*;

    use crate::FpPoly;

    const P: i64 = 101;

    fn field() -> PrimeField {
        PrimeField::new(Integer::new(P)).unwrap()
    }

    // Strategy for generating small polynomials (degree 0-5)
    fn small_poly() -> impl Strategy<Value = FpPoly> {
        proptest::collection::vec(0i64..P, 1..=6).prop_map(|c| FpPoly::from_i64(&field(), &c))
    }

    // Strategy for generating non-zero polynomials
    fn nonzero_poly() -> impl Strategy<Value = FpPoly> {
        small_poly().prop_filter("polynomial must be non-zero", |p| !p.is_zero())
    }

    proptest! {
        #[test]
        fn poly_add_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.add(&b), b.add(&a));
        }

        #[test]
        fn poly_mul_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.mul(&b), b.mul(&a));
        }

        #[test]
        fn poly_mul_associative(a in small_poly(), b in small_poly(), c in small_poly()) {
            prop_assert_eq!(a.mul(&b).mul(&c), a.mul(&b.mul(&c)));
        }

        #[test]
        fn poly_distributive(a in small_poly(), b in small_poly(), c in small_poly()) {
            let left = a.mul(&b.add(&c));
            let right = a.mul(&b).add(&a.mul(&c));
            prop_assert_eq!(left, right);
        }

        #[test]
        fn poly_sub_self_is_zero(a in small_poly()) {
            prop_assert!(a.sub(&a).is_zero());
        }

        #[test]
        fn poly_division_identity(a in small_poly(), b in nonzero_poly()) {
            // a = q * b + r with deg(r) < deg(b) or r = 0
            let (q, r) = a.div_rem(&b).unwrap();
            prop_assert_eq!(q.mul(&b).add(&r), a);
            prop_assert!(r.is_zero() || r.degree() < b.degree());
        }

        #[test]
        fn poly_gcd_divides_both(a in nonzero_poly(), b in nonzero_poly()) {
            let g = a.gcd(&b);
            prop_assert!(g.is_monic());
            prop_assert!(a.rem(&g).unwrap().is_zero());
            prop_assert!(b.rem(&g).unwrap().is_zero());
        }

        #[test]
        fn poly_eval_homomorphism(a in small_poly(), b in small_poly(), x in 0i64..P) {
            let f = field();
            let x = Integer::new(x);
            prop_assert_eq!(a.mul(&b).eval(&x), f.mul(&a.eval(&x), &b.eval(&x)));
        }

        #[test]
        fn poly_pow_mod_matches_pow(a in small_poly(), m in nonzero_poly(), e in 0u32..6) {
            prop_assume!(m.degree() > 0);
            let direct = a.pow(e).rem(&m).unwrap();
            prop_assert_eq!(a.pow_mod(&Integer::from(e), &m), direct);
        }
    }
}
