//! Dense polynomials with coefficients in an extension field.
//!
//! Only the operations needed for minimal polynomials and root finding
//! are provided. Coefficients are stored low to high without trailing
//! zeros; the zero polynomial has no coefficients.

use fqext_integers::Integer;

use crate::element::FqElem;
use crate::field::FqField;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct ExtPoly {
    field: FqField,
    coeffs: Vec<FqElem>,
}

impl ExtPoly {
    pub(crate) fn new(field: &FqField, mut coeffs: Vec<FqElem>) -> Self {
        while coeffs.last().is_some_and(FqElem::is_zero) {
            coeffs.pop();
        }
        Self {
            field: field.clone(),
            coeffs,
        }
    }

    pub(crate) fn zero(field: &FqField) -> Self {
        Self::new(field, Vec::new())
    }

    pub(crate) fn one(field: &FqField) -> Self {
        Self::new(field, vec![field.one()])
    }

    /// The linear polynomial `c1 t + c0`.
    pub(crate) fn linear(c0: FqElem, c1: FqElem) -> Self {
        let field = c0.field().clone();
        Self::new(&field, vec![c0, c1])
    }

    /// Returns `prod (t - r)` over the given roots.
    pub(crate) fn from_roots<'a>(field: &FqField, roots: impl IntoIterator<Item = &'a FqElem>) -> Self {
        let mut result = Self::one(field);
        for r in roots {
            result = result.mul(&Self::linear(-r, field.one()));
        }
        result
    }

    pub(crate) fn is_zero(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// Degree, or `None` for the zero polynomial.
    pub(crate) fn degree(&self) -> Option<usize> {
        self.coeffs.len().checked_sub(1)
    }

    pub(crate) fn coeffs(&self) -> &[FqElem] {
        &self.coeffs
    }

    pub(crate) fn coeff(&self, i: usize) -> FqElem {
        self.coeffs.get(i).cloned().unwrap_or_else(|| self.field.zero())
    }

    pub(crate) fn add(&self, other: &Self) -> Self {
        let len = self.coeffs.len().max(other.coeffs.len());
        let coeffs = (0..len).map(|i| &self.coeff(i) + &other.coeff(i)).collect();
        Self::new(&self.field, coeffs)
    }

    pub(crate) fn sub(&self, other: &Self) -> Self {
        let len = self.coeffs.len().max(other.coeffs.len());
        let coeffs = (0..len).map(|i| &self.coeff(i) - &other.coeff(i)).collect();
        Self::new(&self.field, coeffs)
    }

    pub(crate) fn mul(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return Self::zero(&self.field);
        }
        let mut coeffs = vec![self.field.zero(); self.coeffs.len() + other.coeffs.len() - 1];
        for (i, a) in self.coeffs.iter().enumerate() {
            if a.is_zero() {
                continue;
            }
            for (j, b) in other.coeffs.iter().enumerate() {
                coeffs[i + j] += a * b;
            }
        }
        Self::new(&self.field, coeffs)
    }

    pub(crate) fn scale(&self, c: &FqElem) -> Self {
        Self::new(&self.field, self.coeffs.iter().map(|x| x * c).collect())
    }

    pub(crate) fn make_monic(&self) -> Self {
        match self.coeffs.last().map(FqElem::inv) {
            Some(Ok(inv)) => self.scale(&inv),
            _ => self.clone(),
        }
    }

    /// Division with remainder. Returns `None` for a zero divisor.
    pub(crate) fn div_rem(&self, divisor: &Self) -> Option<(Self, Self)> {
        let dd = divisor.degree()?;
        let lead_inv = divisor.coeffs[dd].inv().ok()?;

        let mut remainder = self.coeffs.clone();
        if remainder.len() <= dd {
            return Some((Self::zero(&self.field), self.clone()));
        }

        let mut quotient = vec![self.field.zero(); remainder.len() - dd];
        for i in (0..quotient.len()).rev() {
            let c = &remainder[i + dd] * &lead_inv;
            if c.is_zero() {
                continue;
            }
            for (j, d) in divisor.coeffs.iter().enumerate() {
                remainder[i + j] -= &c * d;
            }
            quotient[i] = c;
        }

        remainder.truncate(dd);
        Some((Self::new(&self.field, quotient), Self::new(&self.field, remainder)))
    }

    pub(crate) fn rem(&self, divisor: &Self) -> Option<Self> {
        self.div_rem(divisor).map(|(_, r)| r)
    }

    /// Monic greatest common divisor.
    pub(crate) fn gcd(&self, other: &Self) -> Self {
        let mut a = self.clone();
        let mut b = other.clone();
        while let Some(r) = a.rem(&b) {
            a = std::mem::replace(&mut b, r);
        }
        a.make_monic()
    }

    /// Computes `self^exp mod modulus` for non-negative `exp`.
    pub(crate) fn pow_mod(&self, exp: &Integer, modulus: &Self) -> Option<Self> {
        let mut result = Self::one(&self.field).rem(modulus)?;
        let base = self.rem(modulus)?;
        for i in (0..exp.bit_len()).rev() {
            result = result.mul(&result).rem(modulus)?;
            if exp.bit(i) {
                result = result.mul(&base).rem(modulus)?;
            }
        }
        Some(result)
    }

    /// Evaluates at a point by Horner's rule.
    pub(crate) fn eval(&self, x: &FqElem) -> FqElem {
        let mut result = self.field.zero();
        for c in self.coeffs.iter().rev() {
            result = &(&result * x) + c;
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gf9() -> FqField {
        FqField::from_i64_modulus(3, &[1, 0, 1]).unwrap()
    }

    #[test]
    fn test_from_roots_vanishes() {
        let f = gf9();
        let a = f.generator();
        let roots = [a.clone(), f.from_i64(2), &a + 1i64];
        let p = ExtPoly::from_roots(&f, &roots);
        assert_eq!(p.degree(), Some(3));
        for r in &roots {
            assert!(p.eval(r).is_zero());
        }
        assert!(!p.eval(&f.zero()).is_zero());
    }

    #[test]
    fn test_div_rem_and_gcd() {
        let f = gf9();
        let a = f.generator();
        let p = ExtPoly::from_roots(&f, &[a.clone(), f.one()]);
        let q = ExtPoly::from_roots(&f, &[a.clone(), f.from_i64(2)]);

        let (quot, rem) = p.mul(&q).div_rem(&q).unwrap();
        assert_eq!(quot, p);
        assert!(rem.is_zero());

        let g = p.gcd(&q);
        assert_eq!(g, ExtPoly::from_roots(&f, &[a]));
        assert!(p.div_rem(&ExtPoly::zero(&f)).is_none());
    }

    #[test]
    fn test_pow_mod() {
        // t^9 ≡ t modulo any product of distinct linear factors over GF(9)
        let f = gf9();
        let m = ExtPoly::from_roots(&f, &[f.generator(), f.one(), f.zero()]);
        let t = ExtPoly::linear(f.zero(), f.one());
        assert_eq!(t.pow_mod(&Integer::new(9), &m).unwrap(), t);
    }
}
