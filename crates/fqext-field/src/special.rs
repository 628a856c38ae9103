//! Frobenius, trace, norm and square roots.

use fqext_integers::Integer;
use num_traits::One;

use crate::element::FqElem;
use crate::error::{FieldError, FieldResult};
use crate::field::FqField;

impl FqField {
    /// Returns `sigma(a) = a^p` as an element.
    pub(crate) fn frobenius_generator(&self) -> FqElem {
        self.elem_unchecked(self.frobenius_image().to_vec())
    }

    /// Returns `a^(p^k)` by repeated modular composition.
    ///
    /// Uses `a^(p^(i+j)) = (a^(p^i))(a^(p^j))`, so only `O(log k)`
    /// compositions are needed.
    fn generator_frobenius(&self, mut k: u64) -> FqElem {
        let mut result = self.generator();
        let mut base = self.frobenius_generator();
        while k > 0 {
            if k & 1 == 1 {
                result = result.compose(&base);
            }
            k >>= 1;
            if k > 0 {
                base = base.compose(&base);
            }
        }
        result
    }
}

impl FqElem {
    /// Applies the `n`-th power of the Frobenius automorphism, `x^(p^n)`.
    ///
    /// `n` is taken modulo the degree, so negative values give powers of
    /// the inverse automorphism.
    #[must_use]
    pub fn frobenius(&self, n: i64) -> Self {
        let d = i64::try_from(self.field().degree()).unwrap_or(i64::MAX);
        let k = n.rem_euclid(d);
        if k == 0 {
            return self.clone();
        }
        let image = self.field().generator_frobenius(k.unsigned_abs());
        self.compose(&image)
    }

    /// Returns the unique `y` with `y^p = self`.
    #[must_use]
    pub fn pth_root(&self) -> Self {
        self.frobenius(-1)
    }

    /// Returns the Galois conjugates `x, x^p, ..., x^(p^(d-1))`.
    #[must_use]
    pub fn conjugates(&self) -> Vec<Self> {
        let sigma = self.field().frobenius_generator();
        let mut conjugates = Vec::with_capacity(self.field().degree());
        conjugates.push(self.clone());
        for i in 1..self.field().degree() {
            let next = conjugates[i - 1].compose(&sigma);
            conjugates.push(next);
        }
        conjugates
    }

    /// Returns the trace to `F_p`, embedded in the field.
    #[must_use]
    pub fn trace(&self) -> Self {
        self.conjugates()
            .iter()
            .fold(self.field().zero(), |acc, c| acc.add_unchecked(c))
    }

    /// Returns the norm to `F_p`, embedded in the field.
    #[must_use]
    pub fn norm(&self) -> Self {
        self.conjugates()
            .iter()
            .fold(self.field().one(), |acc, c| acc.mul_unchecked(c))
    }

    /// Returns the trace as a residue in `[0, p)`.
    #[must_use]
    pub fn absolute_trace(&self) -> Integer {
        self.trace().coeffs()[0].clone()
    }

    /// Returns the norm as a residue in `[0, p)`.
    #[must_use]
    pub fn absolute_norm(&self) -> Integer {
        self.norm().coeffs()[0].clone()
    }

    /// Returns true if the element is a square.
    ///
    /// Zero and every element in characteristic two are squares; otherwise
    /// Euler's criterion `x^((q-1)/2) = 1` decides.
    #[must_use]
    pub fn is_square(&self) -> bool {
        if self.is_zero() || self.field().prime_field().is_char_two() {
            return true;
        }
        let half = (self.field().order() - &Integer::one()) / Integer::new(2);
        self.pow_nonneg(&half).is_one()
    }

    /// Returns whether the element is a square, together with a root.
    ///
    /// The root is zero when the flag is false.
    #[must_use]
    pub fn is_square_with_sqrt(&self) -> (bool, Self) {
        if self.is_square() {
            (true, self.sqrt_unchecked())
        } else {
            (false, self.field().zero())
        }
    }

    /// Computes a square root.
    ///
    /// With `require_exists` the input is tested first. Without it the
    /// result for a non-square is unspecified. No particular root of the
    /// two is preferred.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::NotASquare`] if `require_exists` is set and the
    /// element is not a square.
    pub fn sqrt(&self, require_exists: bool) -> FieldResult<Self> {
        if require_exists && !self.is_square() {
            return Err(FieldError::NotASquare);
        }
        Ok(self.sqrt_unchecked())
    }

    fn sqrt_unchecked(&self) -> Self {
        if self.is_zero() {
            return self.clone();
        }
        if self.field().prime_field().is_char_two() {
            return self.pth_root();
        }

        let q = self.field().order();
        let four = Integer::new(4);
        if q.rem_euclid(&four) == Integer::new(3) {
            // x^((q+1)/4) squares to x * x^((q-1)/2) = x
            return self.pow_nonneg(&((q + &Integer::one()) / four));
        }
        self.cipolla()
    }

    /// Cipolla's method: with `t^2 - x` a non-square `w^2`, the element
    /// `(t + w)^((q+1)/2)` of `F_q[w]` lies in `F_q` and squares to `x`.
    fn cipolla(&self) -> Self {
        let field = self.field();
        let q = field.order();
        let half = (q - &Integer::one()) / Integer::new(2);

        let mut found = None;
        for t in field.elements() {
            let w2 = &t.square() - self;
            if w2.is_zero() {
                return t;
            }
            if !w2.pow_nonneg(&half).is_one() {
                found = Some((t, w2));
                break;
            }
        }
        let Some((t, w2)) = found else {
            return field.zero();
        };

        // Elements of F_q[w] / (w^2 - w2) as pairs (u, v) = u + v w
        let mul = |(a, b): (&Self, &Self), (c, d): (&Self, &Self)| -> (Self, Self) {
            let re = &(a * c) + &(&(b * d) * &w2);
            let im = &(a * d) + &(b * c);
            (re, im)
        };

        let exp = (q + &Integer::one()) / Integer::new(2);
        let mut acc = (field.one(), field.zero());
        for i in (0..exp.bit_len()).rev() {
            acc = mul((&acc.0, &acc.1), (&acc.0, &acc.1));
            if exp.bit(i) {
                acc = mul((&acc.0, &acc.1), (&t, &field.one()));
            }
        }
        // acc.1 vanishes only when x is a square; otherwise acc.0 is arbitrary
        acc.0
    }
}

#[cfg(test)]
mod tests {
    use num_traits::Zero;

    use super::*;

    fn gf81() -> FqField {
        // Conway polynomial x^4 + 2x^3 + 2
        FqField::from_i64_modulus(3, &[2, 0, 0, 2, 1]).unwrap()
    }

    fn gf25() -> FqField {
        FqField::from_i64_modulus(5, &[2, 4, 1]).unwrap()
    }

    #[test]
    fn test_frobenius_matches_power() {
        let f = gf81();
        let x = f.from_coeffs([1i64, 2, 0, 1]).unwrap();
        let mut expected = x.clone();
        for n in 0..8 {
            assert_eq!(x.frobenius(n), expected, "n = {n}");
            expected = expected.pow_i64(3).unwrap();
        }
    }

    #[test]
    fn test_frobenius_wraps() {
        let f = gf81();
        let x = f.from_coeffs([2i64, 1, 1, 0]).unwrap();
        assert_eq!(x.frobenius(4), x);
        assert_eq!(x.frobenius(-1), x.frobenius(3));
        assert_eq!(x.frobenius(1_000_000_001), x.frobenius(1));
        assert_eq!(x.pth_root().pow_i64(3).unwrap(), x);
    }

    #[test]
    fn test_trace_and_norm_in_prime_field() {
        let f = gf81();
        for x in f.elements().step_by(7) {
            let t = x.trace();
            let n = x.norm();
            assert!(t.coeffs()[1..].iter().all(Zero::is_zero));
            assert!(n.coeffs()[1..].iter().all(Zero::is_zero));
            assert_eq!(x.absolute_trace(), t.coeffs()[0]);
        }
        // trace of 1 is d mod p = 1, norm of the generator is (-1)^4 * 2 = 2
        assert_eq!(f.one().absolute_trace(), Integer::new(1));
        assert_eq!(f.generator().absolute_norm(), Integer::new(2));
    }

    #[test]
    fn test_norm_is_multiplicative() {
        let f = gf25();
        let a = f.generator();
        let b = f.from_coeffs([3i64, 1]).unwrap();
        assert_eq!((&a * &b).norm(), &a.norm() * &b.norm());
    }

    #[test]
    fn test_sqrt_q_one_mod_four() {
        // q = 25 ≡ 1 (mod 4) goes through Cipolla
        let f = gf25();
        let mut squares = 0;
        for x in f.elements() {
            let (ok, r) = x.is_square_with_sqrt();
            if ok {
                squares += 1;
                assert_eq!(r.square(), x);
            } else {
                assert!(r.is_zero());
                assert_eq!(x.sqrt(true), Err(FieldError::NotASquare));
            }
        }
        assert_eq!(squares, 13);
    }

    #[test]
    fn test_sqrt_q_three_mod_four() {
        let f = FqField::from_i64_modulus(7, &[4, 0, 6, 1]).unwrap(); // q = 343
        for x in f.elements().step_by(11) {
            if x.is_square() {
                assert_eq!(x.sqrt(true).unwrap().square(), x);
            }
        }
    }

    #[test]
    fn test_unchecked_sqrt_of_non_square() {
        // q = 25 takes Cipolla, q = 343 the (q+1)/4 power
        let f = gf25();
        let non_squares: Vec<_> = f.elements().filter(|x| !x.is_square()).collect();
        assert_eq!(non_squares.len(), 12);
        for x in &non_squares {
            let r = x.sqrt(false).unwrap();
            assert_ne!(r.square(), *x);
        }

        let f = FqField::from_i64_modulus(7, &[4, 0, 6, 1]).unwrap();
        for x in f.elements().step_by(13).filter(|x| !x.is_square()) {
            assert!(x.sqrt(false).is_ok());
        }
    }

    #[test]
    fn test_sqrt_char_two() {
        let f = FqField::from_i64_modulus(2, &[1, 1, 0, 0, 1]).unwrap();
        for x in f.elements() {
            assert!(x.is_square());
            assert_eq!(x.sqrt(true).unwrap().square(), x);
        }
    }

    #[test]
    fn test_conjugates_of_prime_field_element() {
        let f = gf25();
        let c = f.from_i64(3);
        assert!(c.conjugates().iter().all(|x| *x == c));
        assert_eq!(c.trace(), f.from_i64(6));
    }
}
