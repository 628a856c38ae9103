//! # fqext
//!
//! Finite field extensions `GF(p^d)` over a prime chosen at runtime.
//!
//! fqext represents an extension as `F_p[x] / (f)` for a monic irreducible
//! `f` of degree `d`, with `p` an arbitrary precision prime.
//!
//! ## Features
//!
//! - **Runtime Characteristic**: `p` is a value, not a type parameter
//! - **Canonical Fields**: built-in Conway polynomials for small `p` and `d`
//! - **Special Functions**: Frobenius, trace, norm, square roots
//! - **Minimal Polynomials**: via the Frobenius orbit
//! - **Embeddings**: deterministic maps between subfields and extensions
//!
//! ## Quick Start
//!
//! ```rust
//! use fqext::prelude::*;
//!
//! let f = FqField::conway(Integer::new(3), 2).unwrap();
//! let a = f.generator();
//! let b = &(&a * &a) + 1i64;
//!
//! assert_eq!(b.frobenius(2), b);
//! assert!(b.square().is_square());
//! assert_eq!(a.minimal_polynomial(), f.modulus().clone());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use fqext_field as field;
pub use fqext_integers as integers;
pub use fqext_poly as poly;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use fqext_field::{
        Embedding, FactorBound, FieldCache, FieldError, FieldResult, FqElem, FqField,
    };
    pub use fqext_integers::{Integer, PrimeField, Rational};
    pub use fqext_poly::FpPoly;
}
