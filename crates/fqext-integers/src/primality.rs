//! Primality testing and small-prime factoring.
//!
//! Field construction needs to validate the characteristic, and a few
//! algorithms (primitive roots, multiplicative orders, Rabin's
//! irreducibility test) need the prime divisors of a number. Full
//! factorization is out of reach for large inputs, so `trial_factor`
//! reports whatever cofactor it could not split.

use num_traits::{One, Zero};
use smallvec::SmallVec;

use crate::modular::pow_mod;
use crate::Integer;

const SMALL_PRIMES: [u64; 25] = [
    2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79, 83, 89, 97,
];

// Deterministic for n < 3.3 * 10^24 (first thirteen primes as witnesses).
const WITNESSES: [u64; 13] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41];

/// Returns true if `n` is (very probably) prime.
///
/// Runs trial division by small primes followed by Miller-Rabin with a
/// fixed witness set.
#[must_use]
pub fn is_probable_prime(n: &Integer) -> bool {
    if n.signum() <= 0 || n.is_one() {
        return false;
    }

    for &p in &SMALL_PRIMES {
        let p = Integer::from(p);
        if *n == p {
            return true;
        }
        if (n % &p).is_zero() {
            return false;
        }
    }

    // n - 1 = d * 2^s with d odd
    let n_minus_one = n - &Integer::one();
    let mut d = n_minus_one.clone();
    let mut s = 0u32;
    while d.is_even() {
        d = d / Integer::new(2);
        s += 1;
    }

    'witness: for &a in &WITNESSES {
        let a = Integer::from(a);
        let mut x = pow_mod(&a, &d, n);
        if x.is_one() || x == n_minus_one {
            continue;
        }
        for _ in 1..s {
            x = (&x * &x).rem_euclid(n);
            if x == n_minus_one {
                continue 'witness;
            }
        }
        return false;
    }

    true
}

/// Result of trial division.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrialFactorization {
    /// Prime factors found, with multiplicity.
    pub factors: Vec<(Integer, u32)>,
    /// The part of the input not split by trial division.
    ///
    /// Either one, or a number with no prime factor below the bound.
    pub cofactor: Integer,
}

impl TrialFactorization {
    /// Returns true if the input was factored completely.
    ///
    /// A leftover cofactor that is itself prime counts as fully factored;
    /// in that case it has already been moved into `factors`.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cofactor.is_one()
    }

    /// Returns the distinct prime divisors found.
    #[must_use]
    pub fn primes(&self) -> Vec<Integer> {
        self.factors.iter().map(|(p, _)| p.clone()).collect()
    }
}

/// Factors `n` by trial division up to `bound`.
///
/// A cofactor left over after trial division that passes the primality
/// test is recorded as a prime factor.
///
/// # Panics
///
/// Panics if `n` is not positive.
#[must_use]
pub fn trial_factor(n: &Integer, bound: u64) -> TrialFactorization {
    assert!(n.is_positive(), "can only factor positive integers");

    let mut factors = Vec::new();
    let mut rest = n.clone();
    let mut candidate = 2u64;

    while candidate <= bound {
        let c = Integer::from(candidate);
        if &c * &c > rest {
            break;
        }
        let mut exp = 0u32;
        while (&rest % &c).is_zero() {
            rest = rest / &c;
            exp += 1;
        }
        if exp > 0 {
            factors.push((c, exp));
        }
        candidate += if candidate == 2 { 1 } else { 2 };
    }

    if !rest.is_one() && is_probable_prime(&rest) {
        factors.push((rest, 1));
        rest = Integer::one();
    }

    TrialFactorization {
        factors,
        cofactor: rest,
    }
}

/// Returns the distinct prime divisors of a machine-sized integer.
#[must_use]
pub fn prime_divisors(mut n: usize) -> SmallVec<[usize; 8]> {
    let mut primes = SmallVec::new();
    let mut d = 2;

    while d <= n / d {
        if n % d == 0 {
            primes.push(d);
            while n % d == 0 {
                n /= d;
            }
        }
        d += 1;
    }
    if n > 1 {
        primes.push(n);
    }

    primes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_primes() {
        let primes: Vec<i64> = (0..60).filter(|&n| is_probable_prime(&Integer::new(n))).collect();
        assert_eq!(
            primes,
            vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59]
        );
    }

    #[test]
    fn test_mersenne_primes() {
        let m61 = Integer::new(2).pow(61) - Integer::one();
        let m127 = Integer::new(2).pow(127) - Integer::one();
        assert!(is_probable_prime(&m61));
        assert!(is_probable_prime(&m127));
        // 2^67 - 1 = 193707721 * 761838257287
        let m67 = Integer::new(2).pow(67) - Integer::one();
        assert!(!is_probable_prime(&m67));
    }

    #[test]
    fn test_carmichael_rejected() {
        assert!(!is_probable_prime(&Integer::new(561)));
        assert!(!is_probable_prime(&Integer::new(3_215_031_751)));
    }

    #[test]
    fn test_trial_factor() {
        // 2^4 - 1 = 3 * 5
        let f = trial_factor(&Integer::new(15), 1000);
        assert!(f.is_complete());
        assert_eq!(f.primes(), vec![Integer::new(3), Integer::new(5)]);

        // 360 = 2^3 * 3^2 * 5
        let f = trial_factor(&Integer::new(360), 1000);
        assert_eq!(
            f.factors,
            vec![
                (Integer::new(2), 3),
                (Integer::new(3), 2),
                (Integer::new(5), 1)
            ]
        );
    }

    #[test]
    fn test_trial_factor_leaves_hard_cofactor() {
        // 1000003 * 1000033, both above the bound
        let n = Integer::new(1_000_003) * Integer::new(1_000_033);
        let f = trial_factor(&n, 100);
        assert!(!f.is_complete());
        assert_eq!(f.cofactor, n);
    }

    #[test]
    fn test_prime_divisors() {
        assert_eq!(prime_divisors(12).as_slice(), &[2, 3]);
        assert_eq!(prime_divisors(7).as_slice(), &[7]);
        assert!(prime_divisors(1).is_empty());
    }
}
