//! # fqext-field
//!
//! Arithmetic in finite field extensions `GF(p^d) = F_p[x] / (f)` where the
//! prime `p` is chosen at runtime and may be arbitrarily large.
//!
//! This crate provides:
//! - `FqField`, a shared field context built from `(p, f)` or from `(p, d)`
//! - `FqElem`, an element stored as exactly `d` reduced coefficients
//! - Frobenius powers, trace, norm, square roots and minimal polynomials
//! - Embeddings between fields of the same characteristic
//! - A thread-safe cache of fields and embeddings
//!
//! ## Error Model
//!
//! Operator overloads (`+`, `-`, `*`, `/`) panic when the operands live in
//! different fields or when dividing by zero. Every operator has a `try_*`
//! counterpart returning [`FieldResult`].
//!
//! ## Example
//!
//! ```
//! use fqext_field::FqField;
//!
//! let f = FqField::from_i64_modulus(2, &[1, 1, 0, 0, 1]).unwrap();
//! let a = f.generator();
//! assert!(a.pow_i64(15).unwrap().is_one());
//! assert_eq!(f.to_string(), "GF(2^4)");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod cache;
pub mod config;
pub mod conway;
pub mod element;
pub mod embedding;
pub mod error;
mod ext_poly;
pub mod field;
mod linalg;
pub mod minpoly;
pub mod ops;
pub mod serial;
pub mod special;

#[cfg(test)]
mod proptests;

pub use cache::FieldCache;
pub use config::FactorBound;
pub use conway::{conway_polynomial, primitive_root};
pub use element::FqElem;
pub use embedding::Embedding;
pub use error::{FieldError, FieldResult};
pub use field::{Elements, FqField};
pub use serial::{ElementRepr, FieldDescriptor};
