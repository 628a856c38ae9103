//! Elements of `GF(p^d)` and their core arithmetic.
//!
//! An element is a vector of exactly `d` canonical residues, the
//! coefficients of its representative polynomial of degree `< d`. Every
//! operation returns a fully reduced element.

use std::fmt;
use std::hash::{Hash, Hasher};

use fqext_integers::{trial_factor, Integer};
use fqext_poly::{mul_coeffs, reduce_by_monic, FpPoly};
use num_traits::{One, Zero};

use crate::config::FactorBound;
use crate::error::{FieldError, FieldResult};
use crate::field::FqField;

/// An element of a finite field extension.
#[derive(Clone)]
pub struct FqElem {
    field: FqField,
    /// Coefficients `c_0 + c_1 a + ... + c_{d-1} a^{d-1}`, always of length `d`.
    coeffs: Vec<Integer>,
}

impl FqElem {
    pub(crate) fn from_raw(field: FqField, coeffs: Vec<Integer>) -> Self {
        Self { field, coeffs }
    }

    /// Returns the field this element belongs to.
    #[must_use]
    pub fn field(&self) -> &FqField {
        &self.field
    }

    /// Returns the `d` coefficients, low to high.
    #[must_use]
    pub fn coeffs(&self) -> &[Integer] {
        &self.coeffs
    }

    /// Consumes the element, returning its coefficients.
    #[must_use]
    pub fn into_coeffs(self) -> Vec<Integer> {
        self.coeffs
    }

    /// Returns the coefficient of `a^i`.
    ///
    /// Indices at or beyond the degree read as zero.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::NegativeIndex`] if `i < 0`.
    pub fn coeff(&self, i: i64) -> FieldResult<Integer> {
        let idx = usize::try_from(i).map_err(|_| FieldError::NegativeIndex(i))?;
        Ok(self.coeffs.get(idx).cloned().unwrap_or_else(Integer::zero))
    }

    /// Returns the representative polynomial over `F_p`.
    #[must_use]
    pub fn lift(&self) -> FpPoly {
        FpPoly::new(self.field.prime_field(), self.coeffs.clone())
    }

    /// Returns true if this is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.coeffs.iter().all(Zero::is_zero)
    }

    /// Returns true if this is one.
    #[must_use]
    pub fn is_one(&self) -> bool {
        self.coeffs[0].is_one() && self.coeffs[1..].iter().all(Zero::is_zero)
    }

    /// Returns true if this is invertible, i.e. non-zero.
    #[must_use]
    pub fn is_unit(&self) -> bool {
        !self.is_zero()
    }

    /// Returns true if this is the field generator.
    #[must_use]
    pub fn is_gen(&self) -> bool {
        *self == self.field.generator()
    }

    fn check_field(&self, other: &Self) -> FieldResult<()> {
        if self.field == other.field {
            Ok(())
        } else {
            Err(FieldError::FieldMismatch)
        }
    }

    pub(crate) fn assert_same_field(&self, other: &Self) {
        assert!(self.field == other.field, "operands belong to different fields");
    }

    pub(crate) fn add_unchecked(&self, other: &Self) -> Self {
        let prime = self.field.prime_field();
        let coeffs = self
            .coeffs
            .iter()
            .zip(&other.coeffs)
            .map(|(a, b)| prime.add(a, b))
            .collect();
        self.field.elem_unchecked(coeffs)
    }

    pub(crate) fn sub_unchecked(&self, other: &Self) -> Self {
        let prime = self.field.prime_field();
        let coeffs = self
            .coeffs
            .iter()
            .zip(&other.coeffs)
            .map(|(a, b)| prime.sub(a, b))
            .collect();
        self.field.elem_unchecked(coeffs)
    }

    pub(crate) fn neg_unchecked(&self) -> Self {
        let prime = self.field.prime_field();
        let coeffs = self.coeffs.iter().map(|c| prime.neg(c)).collect();
        self.field.elem_unchecked(coeffs)
    }

    pub(crate) fn mul_unchecked(&self, other: &Self) -> Self {
        let prime = self.field.prime_field();
        let mut product = mul_coeffs(&self.coeffs, &other.coeffs, prime);
        reduce_by_monic(&mut product, self.field.modulus().coeffs(), prime);
        self.field.elem_unchecked(product)
    }

    pub(crate) fn div_or_panic(&self, other: &Self) -> Self {
        match other.inv() {
            Ok(inv) => self.mul_unchecked(&inv),
            Err(e) => panic!("{e}"),
        }
    }

    /// Adds two elements.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::FieldMismatch`] if the fields differ.
    pub fn try_add(&self, other: &Self) -> FieldResult<Self> {
        self.check_field(other)?;
        Ok(self.add_unchecked(other))
    }

    /// Subtracts two elements.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::FieldMismatch`] if the fields differ.
    pub fn try_sub(&self, other: &Self) -> FieldResult<Self> {
        self.check_field(other)?;
        Ok(self.sub_unchecked(other))
    }

    /// Multiplies two elements.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::FieldMismatch`] if the fields differ.
    pub fn try_mul(&self, other: &Self) -> FieldResult<Self> {
        self.check_field(other)?;
        Ok(self.mul_unchecked(other))
    }

    /// Divides two elements.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::FieldMismatch`] if the fields differ and
    /// [`FieldError::DivisionByZero`] if `other` is zero.
    pub fn try_div(&self, other: &Self) -> FieldResult<Self> {
        self.check_field(other)?;
        Ok(self.mul_unchecked(&other.inv()?))
    }

    /// Exact division `self / other`. Same as [`FqElem::try_div`].
    ///
    /// # Errors
    ///
    /// See [`FqElem::try_div`].
    pub fn divexact(&self, other: &Self) -> FieldResult<Self> {
        self.try_div(other)
    }

    /// Tests whether `other` divides `self`, returning the quotient.
    ///
    /// Zero is divisible by everything with quotient zero; a non-zero
    /// element is not divisible by zero.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::FieldMismatch`] if the fields differ.
    pub fn divides(&self, other: &Self) -> FieldResult<(bool, Self)> {
        self.check_field(other)?;
        if self.is_zero() {
            return Ok((true, self.field.zero()));
        }
        if other.is_zero() {
            return Ok((false, self.field.zero()));
        }
        Ok((true, self.try_div(other)?))
    }

    /// Squares the element.
    #[must_use]
    pub fn square(&self) -> Self {
        self.mul_unchecked(self)
    }

    /// Computes the multiplicative inverse.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::DivisionByZero`] for zero.
    pub fn inv(&self) -> FieldResult<Self> {
        if self.is_zero() {
            return Err(FieldError::DivisionByZero);
        }
        let inv = self
            .lift()
            .inv_mod(self.field.modulus())
            .ok_or(FieldError::DivisionByZero)?;
        Ok(self.field.reduce_poly(&inv))
    }

    /// Raises to an integer power. Negative exponents invert first and
    /// `0^0` is one.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::DivisionByZero`] for zero with a negative exponent.
    pub fn pow(&self, exp: &Integer) -> FieldResult<Self> {
        if exp.is_negative() {
            return Ok(self.inv()?.pow_nonneg(&-exp));
        }
        Ok(self.pow_nonneg(exp))
    }

    /// Raises to a machine-integer power, see [`FqElem::pow`].
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::DivisionByZero`] for zero with a negative exponent.
    pub fn pow_i64(&self, exp: i64) -> FieldResult<Self> {
        self.pow(&Integer::new(exp))
    }

    /// Square-and-multiply for a non-negative exponent.
    ///
    /// The exponent is reduced modulo `q - 1` for non-zero bases.
    pub(crate) fn pow_nonneg(&self, exp: &Integer) -> Self {
        if exp.is_zero() {
            return self.field.one();
        }
        if self.is_zero() {
            return self.field.zero();
        }

        let group_order = self.field.order() - &Integer::one();
        let exp = if *exp >= group_order {
            exp.rem_euclid(&group_order)
        } else {
            exp.clone()
        };

        let mut result = self.field.one();
        for i in (0..exp.bit_len()).rev() {
            result = result.square();
            if exp.bit(i) {
                result = result.mul_unchecked(self);
            }
        }
        result
    }

    /// Evaluates the representative polynomial of `self` at `h`.
    ///
    /// With `h = a^(p^k)` this is the `k`-th Frobenius image of `self`.
    pub(crate) fn compose(&self, h: &Self) -> Self {
        let prime = self.field.prime_field();
        let mut result = self.field.zero();
        for c in self.coeffs.iter().rev() {
            result = result.mul_unchecked(h);
            result.coeffs[0] = prime.add(&result.coeffs[0], c);
        }
        result
    }

    /// Returns the multiplicative order with the default factoring bound.
    ///
    /// Returns `None` for zero, or when `q - 1` cannot be factored by
    /// trial division.
    #[must_use]
    pub fn multiplicative_order(&self) -> Option<Integer> {
        self.multiplicative_order_with(&FactorBound::default())
    }

    /// Same as [`FqElem::multiplicative_order`] with an explicit bound.
    #[must_use]
    pub fn multiplicative_order_with(&self, bound: &FactorBound) -> Option<Integer> {
        if self.is_zero() {
            return None;
        }
        let group_order = self.field.order() - &Integer::one();
        let factorization = trial_factor(&group_order, bound.trial_division_bound);
        if !factorization.is_complete() {
            return None;
        }

        let mut order = group_order;
        for (r, _) in &factorization.factors {
            while (&order % r).is_zero() {
                let candidate = &order / r;
                if !self.pow_nonneg(&candidate).is_one() {
                    break;
                }
                order = candidate;
            }
        }
        Some(order)
    }

    /// Overwrites `self` with a copy of `other`.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::FieldMismatch`] if the fields differ; `self` is
    /// left untouched.
    pub fn set_from(&mut self, other: &Self) -> FieldResult<()> {
        self.check_field(other)?;
        self.coeffs.clone_from(&other.coeffs);
        Ok(())
    }

    /// Adds `other` into `self`.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::FieldMismatch`] if the fields differ; `self` is
    /// left untouched.
    pub fn add_in_place(&mut self, other: &Self) -> FieldResult<()> {
        self.check_field(other)?;
        let prime = self.field.prime_field().clone();
        for (a, b) in self.coeffs.iter_mut().zip(&other.coeffs) {
            *a = prime.add(a, b);
        }
        Ok(())
    }

    /// Subtracts `other` from `self`.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::FieldMismatch`] if the fields differ; `self` is
    /// left untouched.
    pub fn sub_in_place(&mut self, other: &Self) -> FieldResult<()> {
        self.check_field(other)?;
        let prime = self.field.prime_field().clone();
        for (a, b) in self.coeffs.iter_mut().zip(&other.coeffs) {
            *a = prime.sub(a, b);
        }
        Ok(())
    }

    /// Multiplies `self` by `other`.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::FieldMismatch`] if the fields differ; `self` is
    /// left untouched.
    pub fn mul_in_place(&mut self, other: &Self) -> FieldResult<()> {
        self.check_field(other)?;
        let prime = self.field.prime_field();
        let mut product = mul_coeffs(&self.coeffs, &other.coeffs, prime);
        reduce_by_monic(&mut product, self.field.modulus().coeffs(), prime);
        self.coeffs = product;
        Ok(())
    }

    /// Negates `self`.
    pub fn neg_in_place(&mut self) {
        let prime = self.field.prime_field().clone();
        for c in &mut self.coeffs {
            *c = prime.neg(c);
        }
    }

    /// Sets `self` to zero.
    pub fn set_zero(&mut self) {
        for c in &mut self.coeffs {
            c.set_zero();
        }
    }

    /// Sets `self` to one.
    pub fn set_one(&mut self) {
        self.set_zero();
        self.coeffs[0].set_one();
    }
}

impl PartialEq for FqElem {
    fn eq(&self, other: &Self) -> bool {
        self.coeffs == other.coeffs && self.field == other.field
    }
}

impl Eq for FqElem {}

impl Hash for FqElem {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.coeffs.hash(state);
    }
}

impl fmt::Display for FqElem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let var = self.field.var();
        let mut terms = Vec::new();

        for (i, c) in self.coeffs.iter().enumerate().rev() {
            if c.is_zero() {
                continue;
            }
            let term = match (i, c.is_one()) {
                (0, _) => format!("{c}"),
                (1, true) => var.to_string(),
                (1, false) => format!("{c}*{var}"),
                (_, true) => format!("{var}^{i}"),
                (_, false) => format!("{c}*{var}^{i}"),
            };
            terms.push(term);
        }

        if terms.is_empty() {
            write!(f, "0")
        } else {
            write!(f, "{}", terms.join(" + "))
        }
    }
}

impl fmt::Debug for FqElem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FqElem({self} in {})", self.field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gf16() -> FqField {
        FqField::from_i64_modulus(2, &[1, 1, 0, 0, 1]).unwrap()
    }

    fn gf9() -> FqField {
        FqField::from_i64_modulus(3, &[1, 0, 1]).unwrap()
    }

    #[test]
    fn test_generator_squared() {
        // a^2 = -1 in F_3[x]/(x^2 + 1)
        let f = gf9();
        let a = f.generator();
        assert_eq!(a.square(), f.from_i64(-1));
        assert!(a.is_gen());
        assert!(!f.one().is_gen());
    }

    #[test]
    fn test_reduction_keeps_length() {
        let f = gf16();
        let a = f.generator();
        let a4 = a.pow_i64(4).unwrap();
        // a^4 = a + 1
        assert_eq!(a4.coeffs().len(), 4);
        assert_eq!(a4, f.from_coeffs([1i64, 1, 0, 0]).unwrap());
    }

    #[test]
    fn test_inverse() {
        let f = gf16();
        let a = f.generator();
        let inv = a.inv().unwrap();
        assert!(a.try_mul(&inv).unwrap().is_one());
        // a^-1 = a^3 + 1 since a^4 + a = 1
        assert_eq!(inv, f.from_coeffs([1i64, 0, 0, 1]).unwrap());
        assert_eq!(f.zero().inv(), Err(FieldError::DivisionByZero));
    }

    #[test]
    fn test_pow_conventions() {
        let f = gf9();
        assert!(f.zero().pow_i64(0).unwrap().is_one());
        assert!(f.zero().pow_i64(5).unwrap().is_zero());
        assert_eq!(f.zero().pow_i64(-1), Err(FieldError::DivisionByZero));

        let b = f.from_coeffs([1i64, 1]).unwrap();
        assert_eq!(b.pow_i64(-3).unwrap(), b.pow_i64(3).unwrap().inv().unwrap());
        assert!(b.pow_i64(8).unwrap().is_one());
        // huge exponents reduce modulo q - 1
        let big = Integer::new(8).pow(40) + Integer::new(3);
        assert_eq!(b.pow(&big).unwrap(), b.pow_i64(3).unwrap());
    }

    #[test]
    fn test_divides() {
        let f = gf9();
        let a = f.generator();
        assert_eq!(f.zero().divides(&f.zero()).unwrap(), (true, f.zero()));
        assert_eq!(a.divides(&f.zero()).unwrap(), (false, f.zero()));
        let (ok, q) = a.divides(&f.from_i64(2)).unwrap();
        assert!(ok);
        assert_eq!(q * 2i64, a);
    }

    #[test]
    fn test_field_mismatch() {
        let a = gf9().one();
        let b = FqField::from_i64_modulus(3, &[2, 2, 1]).unwrap().one();
        assert_eq!(a.try_add(&b), Err(FieldError::FieldMismatch));
        assert_eq!(a.try_div(&b), Err(FieldError::FieldMismatch));
        let mut c = a.clone();
        assert_eq!(c.mul_in_place(&b), Err(FieldError::FieldMismatch));
        assert_eq!(c, a);
    }

    #[test]
    fn test_coeff_access() {
        let f = gf9();
        let x = f.from_coeffs([2i64, 1]).unwrap();
        assert_eq!(x.coeff(0).unwrap(), Integer::new(2));
        assert_eq!(x.coeff(7).unwrap(), Integer::zero());
        assert_eq!(x.coeff(-1), Err(FieldError::NegativeIndex(-1)));
        assert_eq!(x.lift().coeffs(), &[Integer::new(2), Integer::new(1)]);
    }

    #[test]
    fn test_in_place_ops() {
        let f = gf16();
        let a = f.generator();
        let mut x = f.one();
        x.add_in_place(&a).unwrap();
        assert_eq!(x, f.one().try_add(&a).unwrap());
        x.mul_in_place(&a).unwrap();
        assert_eq!(x, a.square().try_add(&a).unwrap());
        x.neg_in_place();
        x.sub_in_place(&a).unwrap();
        x.set_one();
        assert!(x.is_one());
        x.set_zero();
        assert!(x.is_zero());
        x.set_from(&a).unwrap();
        assert_eq!(x, a);
    }

    #[test]
    fn test_multiplicative_order() {
        let f = gf16();
        assert_eq!(f.generator().multiplicative_order(), Some(Integer::new(15)));
        assert_eq!(f.one().multiplicative_order(), Some(Integer::one()));
        assert_eq!(f.zero().multiplicative_order(), None);
        // a^3 has order 5
        let a3 = f.generator().pow_i64(3).unwrap();
        assert_eq!(a3.multiplicative_order(), Some(Integer::new(5)));
    }

    #[test]
    fn test_display() {
        let f = FqField::from_i64_modulus(3, &[1, 2, 0, 1]).unwrap();
        let x = f.from_coeffs([1i64, 1, 2]).unwrap();
        assert_eq!(x.to_string(), "2*a^2 + a + 1");
        assert_eq!(f.zero().to_string(), "0");
        assert_eq!(f.with_var("z").generator().to_string(), "z");
    }
}
