//! Property-based tests for integer and residue arithmetic.

#[cfg(test)]
mod tests {
    use num_traits::{One, Zero};
    use proptest::prelude::*;

    use crate::{pow_mod, Integer, PrimeField};

    const P: i64 = 998_244_353;

    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    fn residue() -> impl Strategy<Value = i64> {
        0i64..P
    }

    fn field() -> PrimeField {
        PrimeField::new(Integer::new(P)).unwrap()
    }

    proptest! {
        #[test]
        fn integer_distributive(a in small_int(), b in small_int(), c in small_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            let c = Integer::new(c);
            prop_assert_eq!(
                a.clone() * (b.clone() + c.clone()),
                a.clone() * b + a * c
            );
        }

        #[test]
        fn rem_euclid_in_range(a in any::<i64>(), m in 1i64..10_000) {
            let r = Integer::new(a).rem_euclid(&Integer::new(m));
            prop_assert!(!r.is_negative());
            prop_assert!(r < Integer::new(m));
            prop_assert!(((Integer::new(a) - r) % Integer::new(m)).is_zero());
        }

        #[test]
        fn residue_add_sub_inverse(a in residue(), b in residue()) {
            let f = field();
            let a = Integer::new(a);
            let b = Integer::new(b);
            prop_assert_eq!(f.sub(&f.add(&a, &b), &b), a);
        }

        #[test]
        fn residue_inverse(a in 1i64..P) {
            let f = field();
            let a = Integer::new(a);
            let inv = f.inv(&a).expect("inverse should exist for non-zero mod prime");
            prop_assert!(f.mul(&a, &inv).is_one());
        }

        #[test]
        fn residue_fermat_little_theorem(a in 1i64..P) {
            let a = Integer::new(a);
            prop_assert!(pow_mod(&a, &Integer::new(P - 1), &Integer::new(P)).is_one());
        }

        #[test]
        fn residue_square_is_square(a in residue()) {
            let f = field();
            let a = Integer::new(a);
            prop_assert!(f.is_square(&f.mul(&a, &a)));
        }
    }
}
