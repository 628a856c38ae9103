//! # fqext-integers
//!
//! Arbitrary precision integer arithmetic and prime-field residues for fqext.
//!
//! This crate wraps `dashu` to provide:
//! - Arbitrary precision integers (`Integer`)
//! - Arbitrary precision rationals (`Rational`)
//! - Arithmetic modulo a runtime prime (`PrimeField`)
//! - Primality testing and trial factoring
//!
//! ## Performance Notes
//!
//! - Small integers (fitting in two machine words) stay inline
//! - Residues are reduced eagerly, so sums never exceed `2p`

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod integer;
pub mod modular;
pub mod primality;
pub mod rational;

#[cfg(test)]
mod proptests;

pub use integer::Integer;
pub use modular::{pow_mod, PrimeField};
pub use primality::{is_probable_prime, prime_divisors, trial_factor, TrialFactorization};
pub use rational::Rational;
