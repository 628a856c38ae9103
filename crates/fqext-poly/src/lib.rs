//! # fqext-poly
//!
//! Dense univariate polynomial arithmetic over prime fields.
//!
//! This crate provides:
//! - `FpPoly`, a normalized dense polynomial carrying its `PrimeField`
//! - Slice kernels used directly by extension-field elements
//! - Rabin's irreducibility test
//!
//! ## Algorithm Selection
//!
//! Multiplication selects its algorithm from the shorter operand:
//! - Length < 32: Schoolbook O(n²)
//! - Length >= 32: Karatsuba O(n^1.58)
//!
//! The threshold is adjustable through [`PolyMulConfig`].

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod dense;
pub mod irreducible;
pub mod kernels;

#[cfg(test)]
mod proptests;

pub use dense::FpPoly;
pub use kernels::{mul_coeffs, mul_coeffs_with, reduce_by_monic, PolyMulConfig};
