//! Slice-level multiplication and reduction kernels.
//!
//! Products are accumulated over the integers and reduced modulo `p`
//! once at the end, so the inner loops never pay for a division.
//! Field elements call these directly on their fixed-length buffers.

use fqext_integers::{Integer, PrimeField};
use num_traits::Zero;

/// Tunables for coefficient multiplication.
#[derive(Clone, Debug)]
pub struct PolyMulConfig {
    /// Operand length at which Karatsuba replaces schoolbook.
    pub karatsuba_threshold: usize,
}

impl Default for PolyMulConfig {
    fn default() -> Self {
        Self {
            karatsuba_threshold: 32,
        }
    }
}

/// Multiplies two coefficient slices and reduces the product modulo `p`.
///
/// The result has length `a.len() + b.len() - 1` (or is empty when either
/// operand is empty). Trailing zeros are kept.
#[must_use]
pub fn mul_coeffs(a: &[Integer], b: &[Integer], field: &PrimeField) -> Vec<Integer> {
    mul_coeffs_with(a, b, field, &PolyMulConfig::default())
}

/// Same as [`mul_coeffs`] with an explicit configuration.
#[must_use]
pub fn mul_coeffs_with(
    a: &[Integer],
    b: &[Integer],
    field: &PrimeField,
    config: &PolyMulConfig,
) -> Vec<Integer> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }

    let mut product = if a.len().min(b.len()) < config.karatsuba_threshold {
        mul_schoolbook(a, b)
    } else {
        mul_karatsuba(a, b, config.karatsuba_threshold)
    };

    for c in &mut product {
        *c = field.reduce(c);
    }
    product
}

/// Schoolbook multiplication over Z: O(n²).
fn mul_schoolbook(a: &[Integer], b: &[Integer]) -> Vec<Integer> {
    let mut result = vec![Integer::zero(); a.len() + b.len() - 1];

    for (i, ai) in a.iter().enumerate() {
        if ai.is_zero() {
            continue;
        }
        for (j, bj) in b.iter().enumerate() {
            result[i + j] = &result[i + j] + &(ai * bj);
        }
    }

    result
}

/// Karatsuba multiplication over Z: O(n^1.58).
fn mul_karatsuba(a: &[Integer], b: &[Integer], threshold: usize) -> Vec<Integer> {
    let n = a.len();
    let m = b.len();

    if n.min(m) < threshold.max(2) {
        return mul_schoolbook(a, b);
    }

    let half = n.max(m).div_ceil(2);

    // Split: a = a0 + a1*x^half, b = b0 + b1*x^half
    let (a0, a1) = a.split_at(half.min(n));
    let (b0, b1) = b.split_at(half.min(m));

    // z0 = a0*b0, z2 = a1*b1, z1 = (a0+a1)*(b0+b1) - z0 - z2
    let z0 = mul_karatsuba(a0, b0, threshold);
    let z2 = if a1.is_empty() || b1.is_empty() {
        Vec::new()
    } else {
        mul_karatsuba(a1, b1, threshold)
    };
    let z1_sum = mul_karatsuba(&add_slices(a0, a1), &add_slices(b0, b1), threshold);

    let mut result = vec![Integer::zero(); n + m - 1];
    for (i, c) in z0.iter().enumerate() {
        result[i] = &result[i] + c;
        result[i + half] = &result[i + half] - c;
    }
    for (i, c) in z2.iter().enumerate() {
        result[i + 2 * half] = &result[i + 2 * half] + c;
        result[i + half] = &result[i + half] - c;
    }
    for (i, c) in z1_sum.iter().enumerate() {
        if i + half < result.len() {
            result[i + half] = &result[i + half] + c;
        }
    }

    result
}

fn add_slices(a: &[Integer], b: &[Integer]) -> Vec<Integer> {
    let len = a.len().max(b.len());
    (0..len)
        .map(|i| match (a.get(i), b.get(i)) {
            (Some(x), Some(y)) => x + y,
            (Some(x), None) | (None, Some(x)) => x.clone(),
            (None, None) => Integer::zero(),
        })
        .collect()
}

/// Reduces `coeffs` modulo a monic polynomial of degree `n = modulus.len() - 1`.
///
/// Afterwards `coeffs` has length exactly `n` and every entry is a
/// canonical residue. Entries on input may be unreduced.
///
/// # Panics
///
/// Panics if `modulus` is shorter than two coefficients.
pub fn reduce_by_monic(coeffs: &mut Vec<Integer>, modulus: &[Integer], field: &PrimeField) {
    assert!(modulus.len() >= 2, "modulus must have degree >= 1");
    let n = modulus.len() - 1;

    // x^n ≡ -(m_0 + m_1 x + ... + m_{n-1} x^{n-1})
    for i in (n..coeffs.len()).rev() {
        let c = field.reduce(&coeffs[i]);
        if c.is_zero() {
            continue;
        }
        for (j, m) in modulus[..n].iter().enumerate() {
            if m.is_zero() {
                continue;
            }
            let k = i - n + j;
            coeffs[k] = &coeffs[k] - &(&c * m);
        }
    }

    coeffs.truncate(n);
    coeffs.resize(n, Integer::zero());
    for c in coeffs.iter_mut() {
        *c = field.reduce(c);
    }
}
