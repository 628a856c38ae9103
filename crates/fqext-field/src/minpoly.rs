//! Minimal and characteristic polynomials over the prime field.

use fqext_poly::FpPoly;
use num_traits::Zero;
use smallvec::SmallVec;
use tracing::instrument;

use crate::element::FqElem;
use crate::ext_poly::ExtPoly;

impl FqElem {
    /// Returns the minimal polynomial of the element over `F_p`.
    ///
    /// This is the product of `t - c` over the Frobenius orbit
    /// `x, x^p, x^(p^2), ...`, which closes after `m | d` steps. The result is
    /// monic of degree `m`.
    #[must_use]
    #[instrument(level = "trace", skip(self), fields(field = %self.field()))]
    pub fn minimal_polynomial(&self) -> FpPoly {
        let sigma = self.field().frobenius_generator();

        let mut orbit: SmallVec<[FqElem; 8]> = SmallVec::new();
        orbit.push(self.clone());
        loop {
            let next = orbit[orbit.len() - 1].compose(&sigma);
            if orbit.contains(&next) {
                break;
            }
            orbit.push(next);
        }

        let product = ExtPoly::from_roots(self.field(), &orbit);

        // Galois-stable, so every coefficient lies in F_p
        let coeffs = product
            .coeffs()
            .iter()
            .map(|c| {
                debug_assert!(c.coeffs()[1..].iter().all(Zero::is_zero));
                c.coeffs()[0].clone()
            })
            .collect();
        FpPoly::new(self.field().prime_field(), coeffs)
    }

    /// Returns the characteristic polynomial of multiplication by the
    /// element, `minpoly^(d / m)`.
    #[must_use]
    pub fn characteristic_polynomial(&self) -> FpPoly {
        let minpoly = self.minimal_polynomial();
        let exponent = self.field().degree() / minpoly.degree();
        minpoly.pow(u32::try_from(exponent).unwrap_or(u32::MAX))
    }
}
