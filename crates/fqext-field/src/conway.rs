//! Conway polynomials and primitive roots for the `(p, d)` constructor.
//!
//! Fields built from a Conway polynomial have a generator that is a
//! primitive element, and the polynomials are compatible across degrees.

use fqext_integers::{pow_mod, trial_factor, Integer};
use num_traits::One;
use tracing::debug;

use crate::config::FactorBound;

/// Conway polynomials `C_{p,d}`, coefficients low to high.
const CONWAY_TABLE: &[(u32, &[u8])] = &[
    (2, &[1, 1]),
    (2, &[1, 1, 1]),
    (2, &[1, 1, 0, 1]),
    (2, &[1, 1, 0, 0, 1]),
    (2, &[1, 0, 1, 0, 0, 1]),
    (2, &[1, 1, 0, 1, 1, 0, 1]),
    (2, &[1, 1, 0, 0, 0, 0, 0, 1]),
    (2, &[1, 0, 1, 1, 1, 0, 0, 0, 1]),
    (2, &[1, 0, 0, 0, 1, 0, 0, 0, 0, 1]),
    (2, &[1, 1, 1, 1, 0, 1, 1, 0, 0, 0, 1]),
    (2, &[1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 1]),
    (2, &[1, 1, 0, 1, 0, 1, 1, 1, 0, 0, 0, 0, 1]),
    (3, &[1, 1]),
    (3, &[2, 2, 1]),
    (3, &[1, 2, 0, 1]),
    (3, &[2, 0, 0, 2, 1]),
    (3, &[1, 2, 0, 0, 0, 1]),
    (3, &[2, 2, 1, 0, 2, 0, 1]),
    (3, &[1, 0, 2, 0, 0, 0, 0, 1]),
    (3, &[2, 2, 2, 0, 1, 2, 0, 0, 1]),
    (5, &[3, 1]),
    (5, &[2, 4, 1]),
    (5, &[3, 3, 0, 1]),
    (5, &[2, 4, 4, 0, 1]),
    (5, &[3, 4, 0, 0, 0, 1]),
    (5, &[2, 0, 1, 4, 1, 0, 1]),
    (7, &[4, 1]),
    (7, &[3, 6, 1]),
    (7, &[4, 0, 6, 1]),
    (7, &[3, 4, 5, 0, 1]),
    (7, &[4, 1, 0, 0, 0, 1]),
    (11, &[9, 1]),
    (11, &[2, 7, 1]),
    (11, &[9, 2, 0, 1]),
    (11, &[2, 10, 8, 0, 1]),
    (13, &[11, 1]),
    (13, &[2, 12, 1]),
    (13, &[11, 2, 0, 1]),
    (13, &[2, 12, 3, 0, 1]),
];

/// Looks up the tabulated Conway polynomial for `GF(p^d)`.
#[must_use]
pub fn conway_polynomial(p: &Integer, degree: usize) -> Option<Vec<Integer>> {
    let p = u32::try_from(p.to_u64()?).ok()?;
    CONWAY_TABLE
        .iter()
        .find(|(q, coeffs)| *q == p && coeffs.len() == degree + 1)
        .map(|(_, coeffs)| coeffs.iter().map(|&c| Integer::from(u32::from(c))).collect())
}

/// Returns the least primitive root modulo the prime `p`.
///
/// Returns `None` when `p - 1` does not factor completely within the
/// trial-division bound.
#[must_use]
pub fn primitive_root(p: &Integer, bound: &FactorBound) -> Option<Integer> {
    let two = Integer::new(2);
    if *p == two {
        return Some(Integer::one());
    }

    let group_order = p - &Integer::one();
    let factorization = trial_factor(&group_order, bound.trial_division_bound);
    if !factorization.is_complete() {
        return None;
    }
    let cofactors: Vec<Integer> = factorization
        .primes()
        .iter()
        .map(|q| &group_order / q)
        .collect();

    let mut g = two;
    while g < *p {
        if cofactors.iter().all(|e| !pow_mod(&g, e, p).is_one()) {
            return Some(g);
        }
        g = g + Integer::one();
    }
    None
}

/// Chooses a defining polynomial for `GF(p^d)`.
///
/// Tries the Conway table first, then `x - g` for a primitive root `g` when
/// `d == 1`.
pub(crate) fn default_modulus(p: &Integer, degree: usize, bound: &FactorBound) -> Option<Vec<Integer>> {
    if let Some(coeffs) = conway_polynomial(p, degree) {
        debug!(%p, degree, "conway table hit");
        return Some(coeffs);
    }
    if degree == 1 {
        let g = primitive_root(p, bound)?;
        debug!(%p, root = %g, "using linear modulus at primitive root");
        return Some(vec![p - &g, Integer::one()]);
    }
    None
}
