//! Dense univariate polynomials over a prime field.
//!
//! Every polynomial carries its `PrimeField`, so arithmetic needs no
//! extra context argument. Mixing polynomials over different primes is a
//! programming error and panics.

use fqext_integers::{Integer, PrimeField};
use num_traits::{One, Zero};
use std::fmt;

use crate::kernels::mul_coeffs;

/// A dense univariate polynomial over `F_p`.
///
/// Coefficients are stored in ascending degree order, reduced, and without
/// trailing zeros (the zero polynomial keeps a single zero coefficient).
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct FpPoly {
    field: PrimeField,
    coeffs: Vec<Integer>,
}

impl FpPoly {
    /// Creates a new polynomial, reducing coefficients modulo `p`.
    #[must_use]
    pub fn new(field: &PrimeField, coeffs: Vec<Integer>) -> Self {
        let coeffs = coeffs.iter().map(|c| field.reduce(c)).collect();
        Self::from_reduced(field.clone(), coeffs)
    }

    /// Creates a polynomial from machine integers.
    #[must_use]
    pub fn from_i64(field: &PrimeField, coeffs: &[i64]) -> Self {
        let coeffs = coeffs.iter().map(|&c| field.from_i64(c)).collect();
        Self::from_reduced(field.clone(), coeffs)
    }

    /// Creates a polynomial from coefficients already in `[0, p)`.
    pub(crate) fn from_reduced(field: PrimeField, mut coeffs: Vec<Integer>) -> Self {
        // Normalize: remove trailing zeros
        while coeffs.len() > 1 && coeffs.last().is_some_and(Zero::is_zero) {
            coeffs.pop();
        }
        if coeffs.is_empty() {
            coeffs.push(Integer::zero());
        }
        Self { field, coeffs }
    }

    /// Creates the zero polynomial.
    #[must_use]
    pub fn zero(field: &PrimeField) -> Self {
        Self {
            field: field.clone(),
            coeffs: vec![Integer::zero()],
        }
    }

    /// Creates the constant polynomial 1.
    #[must_use]
    pub fn one(field: &PrimeField) -> Self {
        Self {
            field: field.clone(),
            coeffs: vec![Integer::one()],
        }
    }

    /// Creates a constant polynomial.
    #[must_use]
    pub fn constant(field: &PrimeField, c: &Integer) -> Self {
        Self::new(field, vec![c.clone()])
    }

    /// Creates the polynomial x.
    #[must_use]
    pub fn x(field: &PrimeField) -> Self {
        Self::monomial(field, &Integer::one(), 1)
    }

    /// Creates the monomial c * x^n.
    #[must_use]
    pub fn monomial(field: &PrimeField, c: &Integer, n: usize) -> Self {
        let mut coeffs = vec![Integer::zero(); n + 1];
        coeffs[n] = c.clone();
        Self::new(field, coeffs)
    }

    /// Returns the coefficient field.
    #[must_use]
    pub fn field(&self) -> &PrimeField {
        &self.field
    }

    /// Returns the degree of the polynomial (0 for the zero polynomial).
    #[must_use]
    pub fn degree(&self) -> usize {
        self.coeffs.len() - 1
    }

    /// Returns true if this is the zero polynomial.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.coeffs.len() == 1 && self.coeffs[0].is_zero()
    }

    /// Returns true if this is the constant 1.
    #[must_use]
    pub fn is_one(&self) -> bool {
        self.coeffs.len() == 1 && self.coeffs[0].is_one()
    }

    /// Returns true if the leading coefficient is 1.
    #[must_use]
    pub fn is_monic(&self) -> bool {
        self.leading_coeff().is_one()
    }

    /// Returns the leading coefficient.
    #[must_use]
    pub fn leading_coeff(&self) -> &Integer {
        &self.coeffs[self.coeffs.len() - 1]
    }

    /// Returns the coefficient of x^i (zero beyond the degree).
    #[must_use]
    pub fn coeff(&self, i: usize) -> Integer {
        self.coeffs.get(i).cloned().unwrap_or_else(Integer::zero)
    }

    /// Returns all coefficients.
    #[must_use]
    pub fn coeffs(&self) -> &[Integer] {
        &self.coeffs
    }

    /// Consumes the polynomial, returning its coefficients.
    #[must_use]
    pub fn into_coeffs(self) -> Vec<Integer> {
        self.coeffs
    }

    /// Evaluates the polynomial at a point using Horner's method.
    #[must_use]
    pub fn eval(&self, x: &Integer) -> Integer {
        let x = self.field.reduce(x);
        let mut result = Integer::zero();
        for c in self.coeffs.iter().rev() {
            result = self.field.add(&self.field.mul(&result, &x), c);
        }
        result
    }

    fn check_field(&self, other: &Self) {
        assert!(
            self.field == other.field,
            "polynomials over different prime fields"
        );
    }

    /// Adds two polynomials.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        self.check_field(other);
        let len = self.coeffs.len().max(other.coeffs.len());
        let zero = Integer::zero();
        let result = (0..len)
            .map(|i| {
                let a = self.coeffs.get(i).unwrap_or(&zero);
                let b = other.coeffs.get(i).unwrap_or(&zero);
                self.field.add(a, b)
            })
            .collect();
        Self::from_reduced(self.field.clone(), result)
    }

    /// Negates a polynomial.
    #[must_use]
    pub fn neg(&self) -> Self {
        let result = self.coeffs.iter().map(|c| self.field.neg(c)).collect();
        Self::from_reduced(self.field.clone(), result)
    }

    /// Subtracts two polynomials.
    #[must_use]
    pub fn sub(&self, other: &Self) -> Self {
        self.add(&other.neg())
    }

    /// Multiplies two polynomials.
    ///
    /// Selects schoolbook or Karatsuba based on operand size.
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        self.check_field(other);
        if self.is_zero() || other.is_zero() {
            return Self::zero(&self.field);
        }
        let product = mul_coeffs(&self.coeffs, &other.coeffs, &self.field);
        Self::from_reduced(self.field.clone(), product)
    }

    /// Multiplies by a scalar.
    #[must_use]
    pub fn scale(&self, c: &Integer) -> Self {
        let c = self.field.reduce(c);
        if c.is_zero() {
            return Self::zero(&self.field);
        }
        let result = self.coeffs.iter().map(|x| self.field.mul(x, &c)).collect();
        Self::from_reduced(self.field.clone(), result)
    }

    /// Raises the polynomial to a non-negative integer power.
    #[must_use]
    pub fn pow(&self, n: u32) -> Self {
        let mut result = Self::one(&self.field);
        let mut base = self.clone();
        let mut exp = n;

        while exp > 0 {
            if exp & 1 == 1 {
                result = result.mul(&base);
            }
            exp >>= 1;
            if exp > 0 {
                base = base.mul(&base);
            }
        }

        result
    }

    /// Divides with remainder.
    ///
    /// Returns `None` if `divisor` is zero.
    #[must_use]
    pub fn div_rem(&self, divisor: &Self) -> Option<(Self, Self)> {
        self.check_field(divisor);
        if divisor.is_zero() {
            return None;
        }
        if self.is_zero() || self.degree() < divisor.degree() {
            return Some((Self::zero(&self.field), self.clone()));
        }

        let field = &self.field;
        let lead_inv = field.inv(divisor.leading_coeff())?;
        let dd = divisor.degree();
        let deg_diff = self.degree() - dd;
        let mut remainder = self.coeffs.clone();
        let mut quotient = vec![Integer::zero(); deg_diff + 1];

        for i in (0..=deg_diff).rev() {
            let coeff = field.mul(&remainder[i + dd], &lead_inv);
            if coeff.is_zero() {
                continue;
            }
            for (j, d) in divisor.coeffs.iter().enumerate() {
                remainder[i + j] = field.sub(&remainder[i + j], &field.mul(&coeff, d));
            }
            quotient[i] = coeff;
        }

        remainder.truncate(dd.max(1));
        Some((
            Self::from_reduced(field.clone(), quotient),
            Self::from_reduced(field.clone(), remainder),
        ))
    }

    /// Returns the remainder of division, or `None` for a zero divisor.
    #[must_use]
    pub fn rem(&self, divisor: &Self) -> Option<Self> {
        self.div_rem(divisor).map(|(_, r)| r)
    }

    /// Scales the polynomial to leading coefficient 1. Zero stays zero.
    #[must_use]
    pub fn make_monic(&self) -> Self {
        if self.is_zero() {
            return self.clone();
        }
        match self.field.inv(self.leading_coeff()) {
            Some(inv) => self.scale(&inv),
            None => self.clone(),
        }
    }

    /// Computes the monic greatest common divisor.
    #[must_use]
    pub fn gcd(&self, other: &Self) -> Self {
        let mut a = self.clone();
        let mut b = other.clone();

        while !b.is_zero() {
            let r = match a.rem(&b) {
                Some(r) => r,
                None => break,
            };
            a = b;
            b = r;
        }

        a.make_monic()
    }

    /// Computes the inverse of `self` modulo `modulus` with the extended
    /// Euclidean algorithm.
    ///
    /// Returns `None` if the two are not coprime or `modulus` is zero.
    #[must_use]
    pub fn inv_mod(&self, modulus: &Self) -> Option<Self> {
        let mut r0 = modulus.clone();
        let mut r1 = self.rem(modulus)?;
        let mut s0 = Self::zero(&self.field);
        let mut s1 = Self::one(&self.field);

        while !r1.is_zero() {
            let (q, r) = r0.div_rem(&r1)?;
            let s = s0.sub(&q.mul(&s1));
            r0 = std::mem::replace(&mut r1, r);
            s0 = std::mem::replace(&mut s1, s);
        }

        // r0 is the gcd up to a unit
        if r0.degree() != 0 || r0.is_zero() {
            return None;
        }
        let unit = self.field.inv(&r0.coeffs[0])?;
        s0.scale(&unit).rem(modulus)
    }

    /// Computes `self^exp mod modulus` for a non-negative exponent.
    ///
    /// # Panics
    ///
    /// Panics if `modulus` is zero or `exp` is negative.
    #[must_use]
    pub fn pow_mod(&self, exp: &Integer, modulus: &Self) -> Self {
        assert!(!exp.is_negative(), "negative exponent");
        let reduce = |p: &Self| p.rem(modulus).expect("modulus must be non-zero");

        let mut result = reduce(&Self::one(&self.field));
        let mut base = reduce(self);
        for i in 0..exp.bit_len() {
            if exp.bit(i) {
                result = reduce(&result.mul(&base));
            }
            base = reduce(&base.mul(&base));
        }
        result
    }
}

impl fmt::Debug for FpPoly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FpPoly({self} over {})", self.field)
    }
}

impl fmt::Display for FpPoly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }

        let mut terms = Vec::new();
        for (i, c) in self.coeffs.iter().enumerate().rev() {
            if c.is_zero() {
                continue;
            }
            let term = match (i, c.is_one()) {
                (0, _) => format!("{c}"),
                (1, true) => "x".to_string(),
                (1, false) => format!("{c}*x"),
                (_, true) => format!("x^{i}"),
                (_, false) => format!("{c}*x^{i}"),
            };
            terms.push(term);
        }

        write!(f, "{}", terms.join(" + "))
    }
}
