//! Modular arithmetic over a runtime prime.
//!
//! `PrimeField` is the context object for `F_p`: residues are plain
//! `Integer` values kept in `[0, p)`, and every operation goes through
//! the context, so coefficient vectors do not repeat the modulus.

use num_traits::{One, Zero};
use std::fmt;

use crate::primality::is_probable_prime;
use crate::Integer;

/// Computes `base^exp mod m` for non-negative `exp`.
///
/// # Panics
///
/// Panics if `exp` is negative or `m` is zero.
#[must_use]
pub fn pow_mod(base: &Integer, exp: &Integer, m: &Integer) -> Integer {
    assert!(!exp.is_negative(), "negative exponent");
    if m.is_one() {
        return Integer::zero();
    }

    let mut result = Integer::one();
    let mut base = base.rem_euclid(m);
    for i in 0..exp.bit_len() {
        if exp.bit(i) {
            result = (&result * &base).rem_euclid(m);
        }
        base = (&base * &base).rem_euclid(m);
    }

    result
}

/// The prime field `Z/pZ` with a runtime-determined prime.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct PrimeField {
    p: Integer,
}

impl PrimeField {
    /// Creates the field of integers modulo `p`.
    ///
    /// Returns `None` if `p` is not prime.
    #[must_use]
    pub fn new(p: Integer) -> Option<Self> {
        if is_probable_prime(&p) {
            Some(Self { p })
        } else {
            None
        }
    }

    /// Returns the characteristic `p`.
    #[must_use]
    pub fn characteristic(&self) -> &Integer {
        &self.p
    }

    /// Returns true if the characteristic is two.
    #[must_use]
    pub fn is_char_two(&self) -> bool {
        self.p == Integer::new(2)
    }

    /// Reduces an arbitrary integer into `[0, p)`.
    #[must_use]
    pub fn reduce(&self, value: &Integer) -> Integer {
        value.rem_euclid(&self.p)
    }

    /// Reduces a machine integer into `[0, p)`.
    #[must_use]
    pub fn from_i64(&self, value: i64) -> Integer {
        self.reduce(&Integer::new(value))
    }

    /// Returns true if `a` is a canonical residue.
    #[must_use]
    pub fn is_reduced(&self, a: &Integer) -> bool {
        !a.is_negative() && *a < self.p
    }

    /// Computes `a + b mod p` for reduced operands.
    #[must_use]
    pub fn add(&self, a: &Integer, b: &Integer) -> Integer {
        let sum = a + b;
        if sum >= self.p {
            sum - &self.p
        } else {
            sum
        }
    }

    /// Computes `a - b mod p` for reduced operands.
    #[must_use]
    pub fn sub(&self, a: &Integer, b: &Integer) -> Integer {
        let diff = a - b;
        if diff.is_negative() {
            diff + &self.p
        } else {
            diff
        }
    }

    /// Computes `-a mod p` for a reduced operand.
    #[must_use]
    pub fn neg(&self, a: &Integer) -> Integer {
        if a.is_zero() {
            Integer::zero()
        } else {
            &self.p - a
        }
    }

    /// Computes `a * b mod p`.
    #[must_use]
    pub fn mul(&self, a: &Integer, b: &Integer) -> Integer {
        (a * b).rem_euclid(&self.p)
    }

    /// Computes the multiplicative inverse using the extended Euclidean algorithm.
    ///
    /// Returns `None` for zero.
    #[must_use]
    pub fn inv(&self, a: &Integer) -> Option<Integer> {
        let a = self.reduce(a);
        if a.is_zero() {
            return None;
        }

        let mut t = Integer::zero();
        let mut new_t = Integer::one();
        let mut r = self.p.clone();
        let mut new_r = a;

        while !new_r.is_zero() {
            let quotient = &r / &new_r;
            let next_t = &t - &(&quotient * &new_t);
            t = std::mem::replace(&mut new_t, next_t);
            let next_r = &r - &(&quotient * &new_r);
            r = std::mem::replace(&mut new_r, next_r);
        }

        if !r.is_one() {
            return None;
        }

        Some(self.reduce(&t))
    }

    /// Computes `a^exp mod p`, inverting first for negative exponents.
    ///
    /// Returns `None` when `a` is zero and `exp` is negative.
    #[must_use]
    pub fn pow(&self, a: &Integer, exp: &Integer) -> Option<Integer> {
        if exp.is_negative() {
            let inv = self.inv(a)?;
            return Some(pow_mod(&inv, &-exp, &self.p));
        }
        Some(pow_mod(a, exp, &self.p))
    }

    /// Euler's criterion. Every residue is a square in characteristic two.
    #[must_use]
    pub fn is_square(&self, a: &Integer) -> bool {
        let a = self.reduce(a);
        if a.is_zero() || self.is_char_two() {
            return true;
        }
        let exp = (&self.p - &Integer::one()) / Integer::new(2);
        pow_mod(&a, &exp, &self.p).is_one()
    }
}

impl fmt::Debug for PrimeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PrimeField({})", self.p)
    }
}

impl fmt::Display for PrimeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GF({})", self.p)
    }
}
