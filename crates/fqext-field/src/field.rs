//! The field context `GF(p^d) = F_p[x] / (f)`.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, OnceLock};

use fqext_integers::{Integer, PrimeField, Rational};
use fqext_poly::FpPoly;
use num_traits::{One, Zero};
use rand::Rng;
use tracing::instrument;

use crate::config::FactorBound;
use crate::conway::default_modulus;
use crate::element::FqElem;
use crate::error::{FieldError, FieldResult};

/// Shared, immutable data behind an [`FqField`] handle.
struct FieldData {
    /// The prime subfield.
    prime: PrimeField,
    /// Monic irreducible modulus of degree `degree`.
    modulus: FpPoly,
    degree: usize,
    /// `p^degree`, computed once.
    order: Integer,
    /// Display name of the generator.
    var: String,
    /// Coefficients of `a^p`, the image of the generator under Frobenius.
    frobenius_image: OnceLock<Vec<Integer>>,
}

/// A finite field `GF(p^d)` defined by a monic irreducible modulus.
///
/// `FqField` is a cheap handle around shared immutable data, so cloning it
/// and storing it in every element is fine. Two handles compare equal when
/// they have the same characteristic and modulus; the display variable is
/// not part of the identity.
#[derive(Clone)]
pub struct FqField(Arc<FieldData>);

impl FqField {
    /// Creates the field `F_p[x] / (modulus)`.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::InvalidCharacteristic`] if `characteristic` is not
    /// prime, and [`FieldError::InvalidModulus`] if the modulus lives over a
    /// different prime, is constant, is not monic, or is reducible.
    #[instrument(level = "debug", skip(modulus), fields(degree = modulus.degree()))]
    pub fn new(characteristic: Integer, modulus: FpPoly) -> FieldResult<Self> {
        let prime = PrimeField::new(characteristic.clone())
            .ok_or(FieldError::InvalidCharacteristic(characteristic))?;

        if *modulus.field() != prime {
            return Err(FieldError::InvalidModulus(format!(
                "modulus has coefficients in {}, expected {prime}",
                modulus.field()
            )));
        }
        if modulus.degree() == 0 {
            return Err(FieldError::InvalidModulus("modulus is constant".into()));
        }
        if !modulus.is_monic() {
            return Err(FieldError::InvalidModulus(format!("{modulus} is not monic")));
        }
        if !modulus.is_irreducible() {
            return Err(FieldError::InvalidModulus(format!("{modulus} is reducible")));
        }

        Ok(Self::from_parts(prime, modulus, "a".to_string()))
    }

    /// Creates a field from machine-sized characteristic and modulus coefficients.
    ///
    /// # Errors
    ///
    /// Same as [`FqField::new`].
    pub fn from_i64_modulus(characteristic: i64, modulus: &[i64]) -> FieldResult<Self> {
        let p = Integer::new(characteristic);
        let prime = PrimeField::new(p.clone()).ok_or_else(|| FieldError::InvalidCharacteristic(p.clone()))?;
        Self::new(p, FpPoly::from_i64(&prime, modulus))
    }

    /// Creates `GF(p^d)` with a canonical modulus.
    ///
    /// Uses the built-in Conway polynomial when one is tabulated, and for
    /// `d == 1` the polynomial `x - g` with `g` the least primitive root.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::InvalidCharacteristic`] if `p` is not prime, and
    /// [`FieldError::UnsupportedDegree`] if no modulus is available.
    pub fn conway(characteristic: Integer, degree: usize) -> FieldResult<Self> {
        Self::conway_with(characteristic, degree, &FactorBound::default())
    }

    /// Same as [`FqField::conway`] with an explicit factoring bound.
    ///
    /// # Errors
    ///
    /// Same as [`FqField::conway`].
    pub fn conway_with(characteristic: Integer, degree: usize, bound: &FactorBound) -> FieldResult<Self> {
        let prime = PrimeField::new(characteristic.clone())
            .ok_or_else(|| FieldError::InvalidCharacteristic(characteristic.clone()))?;
        let coeffs = default_modulus(&characteristic, degree, bound).ok_or(FieldError::UnsupportedDegree {
            characteristic,
            degree,
        })?;
        let modulus = FpPoly::new(&prime, coeffs);
        Ok(Self::from_parts(prime, modulus, "a".to_string()))
    }

    fn from_parts(prime: PrimeField, modulus: FpPoly, var: String) -> Self {
        let degree = modulus.degree();
        let order = prime.characteristic().pow(u32::try_from(degree).unwrap_or(u32::MAX));
        Self(Arc::new(FieldData {
            prime,
            modulus,
            degree,
            order,
            var,
            frobenius_image: OnceLock::new(),
        }))
    }

    /// Returns a copy of this field that prints its generator as `var`.
    #[must_use]
    pub fn with_var(&self, var: &str) -> Self {
        Self::from_parts(self.0.prime.clone(), self.0.modulus.clone(), var.to_string())
    }

    /// Returns the characteristic `p`.
    #[must_use]
    pub fn characteristic(&self) -> &Integer {
        self.0.prime.characteristic()
    }

    /// Returns the number of elements `p^d`.
    #[must_use]
    pub fn order(&self) -> &Integer {
        &self.0.order
    }

    /// Returns the extension degree `d`.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.0.degree
    }

    /// Returns the defining polynomial.
    #[must_use]
    pub fn modulus(&self) -> &FpPoly {
        &self.0.modulus
    }

    /// Returns the prime subfield context.
    #[must_use]
    pub fn prime_field(&self) -> &PrimeField {
        &self.0.prime
    }

    /// Returns the display name of the generator.
    #[must_use]
    pub fn var(&self) -> &str {
        &self.0.var
    }

    /// Returns true if the extension degree is one.
    #[must_use]
    pub fn is_prime_field(&self) -> bool {
        self.0.degree == 1
    }

    /// Returns true if both handles share the same allocation.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// Returns the coefficients of `a^p`, computing them on first use.
    pub(crate) fn frobenius_image(&self) -> &[Integer] {
        self.0.frobenius_image.get_or_init(|| {
            let power = self.generator().pow_nonneg(self.characteristic());
            power.into_coeffs()
        })
    }

    /// Builds an element from `d` reduced coefficients.
    pub(crate) fn elem_unchecked(&self, coeffs: Vec<Integer>) -> FqElem {
        debug_assert_eq!(coeffs.len(), self.degree());
        FqElem::from_raw(self.clone(), coeffs)
    }

    /// Returns the zero element.
    #[must_use]
    pub fn zero(&self) -> FqElem {
        self.elem_unchecked(vec![Integer::zero(); self.degree()])
    }

    /// Returns the multiplicative identity.
    #[must_use]
    pub fn one(&self) -> FqElem {
        let mut coeffs = vec![Integer::zero(); self.degree()];
        coeffs[0] = Integer::one();
        self.elem_unchecked(coeffs)
    }

    /// Returns the generator `a`, the class of `x` modulo the modulus.
    ///
    /// It generates the multiplicative group when the modulus is primitive,
    /// which holds for every field built by [`FqField::conway`] but not in
    /// general.
    #[must_use]
    pub fn generator(&self) -> FqElem {
        self.reduce_poly(&FpPoly::x(self.prime_field()))
    }

    /// Embeds a machine integer through the prime subfield.
    #[must_use]
    pub fn from_i64(&self, n: i64) -> FqElem {
        self.from_integer(&Integer::new(n))
    }

    /// Embeds an integer through the prime subfield.
    #[must_use]
    pub fn from_integer(&self, n: &Integer) -> FqElem {
        let mut coeffs = vec![Integer::zero(); self.degree()];
        coeffs[0] = self.prime_field().reduce(n);
        self.elem_unchecked(coeffs)
    }

    /// Embeds a rational `n / d` as `n * d^(-1)`.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::DivisionByZero`] if `p` divides the denominator.
    pub fn from_rational(&self, r: &Rational) -> FieldResult<FqElem> {
        let num = self.from_integer(&r.numerator());
        let den = self.from_integer(&r.denominator());
        num.divexact(&den)
    }

    /// Builds an element from exactly `d` coefficients, low to high.
    ///
    /// Coefficients are reduced modulo `p`.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::LengthMismatch`] if the length is not `d`.
    pub fn from_coeffs<T: Into<Integer>>(&self, coeffs: impl IntoIterator<Item = T>) -> FieldResult<FqElem> {
        let prime = self.prime_field();
        let coeffs: Vec<Integer> = coeffs.into_iter().map(|c| prime.reduce(&c.into())).collect();
        if coeffs.len() != self.degree() {
            return Err(FieldError::LengthMismatch {
                expected: self.degree(),
                got: coeffs.len(),
            });
        }
        Ok(self.elem_unchecked(coeffs))
    }

    /// Reduces a polynomial of any degree modulo the modulus.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::CharacteristicMismatch`] if the polynomial is over
    /// a different prime field.
    pub fn from_poly(&self, poly: &FpPoly) -> FieldResult<FqElem> {
        if poly.field() != self.prime_field() {
            return Err(FieldError::CharacteristicMismatch {
                left: poly.field().characteristic().clone(),
                right: self.characteristic().clone(),
            });
        }
        Ok(self.reduce_poly(poly))
    }

    pub(crate) fn reduce_poly(&self, poly: &FpPoly) -> FqElem {
        let mut coeffs = poly.coeffs().to_vec();
        fqext_poly::reduce_by_monic(&mut coeffs, self.modulus().coeffs(), self.prime_field());
        self.elem_unchecked(coeffs)
    }

    /// Samples a uniformly random element.
    pub fn random<R: Rng + ?Sized>(&self, rng: &mut R) -> FqElem {
        let coeffs = (0..self.degree()).map(|_| random_residue(self.prime_field(), rng)).collect();
        self.elem_unchecked(coeffs)
    }

    /// Enumerates every element, starting from zero.
    ///
    /// Elements come in order of their base-`p` index `c_0 + c_1 p + ...`.
    /// Only practical for small fields.
    #[must_use]
    pub fn elements(&self) -> Elements {
        Elements {
            field: self.clone(),
            next: Some(vec![Integer::zero(); self.degree()]),
        }
    }
}

/// Draws a residue in `[0, p)` with 64 extra random bits to keep the bias
/// negligible.
fn random_residue<R: Rng + ?Sized>(prime: &PrimeField, rng: &mut R) -> Integer {
    let limbs = prime.characteristic().bit_len() / 64 + 2;
    let radix = Integer::new(2).pow(64);
    let mut acc = Integer::zero();
    for _ in 0..limbs {
        acc = acc * &radix + Integer::from(rng.gen::<u64>());
    }
    prime.reduce(&acc)
}

/// Iterator over all elements of a field, see [`FqField::elements`].
pub struct Elements {
    field: FqField,
    next: Option<Vec<Integer>>,
}

impl Iterator for Elements {
    type Item = FqElem;

    fn next(&mut self) -> Option<FqElem> {
        let current = self.next.take()?;

        let prime = self.field.prime_field();
        let mut successor = current.clone();
        let mut carried = true;
        for c in &mut successor {
            *c = prime.add(c, &Integer::one());
            if !c.is_zero() {
                carried = false;
                break;
            }
        }
        if !carried {
            self.next = Some(successor);
        }

        Some(self.field.elem_unchecked(current))
    }
}

impl PartialEq for FqField {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || (self.0.prime == other.0.prime && self.0.modulus == other.0.modulus)
    }
}

impl Eq for FqField {}

impl Hash for FqField {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.prime.hash(state);
        self.0.modulus.hash(state);
    }
}

impl fmt::Debug for FqField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FqField")
            .field("characteristic", self.characteristic())
            .field("modulus", &self.modulus().coeffs())
            .field("var", &self.var())
            .finish()
    }
}

impl fmt::Display for FqField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GF({}^{})", self.characteristic(), self.degree())
    }
}
