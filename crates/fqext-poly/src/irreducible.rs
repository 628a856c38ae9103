//! Rabin's irreducibility test over `F_p`.

use fqext_integers::prime_divisors;
use tracing::instrument;

use crate::FpPoly;

impl FpPoly {
    /// Returns true if the polynomial is irreducible over `F_p`.
    ///
    /// A polynomial `f` of degree `n` is irreducible iff
    /// `x^(p^n) ≡ x (mod f)` and `gcd(x^(p^(n/r)) - x, f) = 1` for every
    /// prime `r | n`. Constants are never irreducible.
    #[must_use]
    #[instrument(level = "trace", skip(self), fields(degree = self.degree()))]
    pub fn is_irreducible(&self) -> bool {
        let n = self.degree();
        if n == 0 {
            return false;
        }
        if n == 1 {
            return true;
        }

        let f = self.make_monic();
        let field = f.field().clone();
        let p = field.characteristic().clone();
        let x = FpPoly::x(&field);

        // powers[k] = x^(p^k) mod f for k = 0..=n
        let mut powers = Vec::with_capacity(n + 1);
        powers.push(x.rem(&f).expect("modulus is non-zero"));
        for k in 1..=n {
            let next = powers[k - 1].pow_mod(&p, &f);
            powers.push(next);
        }

        if powers[n] != powers[0] {
            return false;
        }

        prime_divisors(n).iter().all(|&r| {
            let diff = powers[n / r].sub(&x);
            diff.gcd(&f).is_one()
        })
    }
}
