//! Embeddings between fields of the same characteristic.
//!
//! An embedding `A -> B` with `deg A | deg B` is fixed by the image of the
//! generator of `A`, which must be a root of `A`'s modulus in `B`. Roots are
//! found by equal-degree splitting and the smallest one (by coefficients) is
//! taken, so the choice is reproducible.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, instrument};

use fqext_integers::Integer;
use num_traits::One;

use crate::element::FqElem;
use crate::error::{FieldError, FieldResult};
use crate::ext_poly::ExtPoly;
use crate::field::FqField;
use crate::linalg::solve;

/// Upper bound on random splitting attempts per root search.
const MAX_SPLIT_ATTEMPTS: usize = 10_000;

/// A field homomorphism from a subfield into a larger field.
#[derive(Clone, Debug)]
pub struct Embedding {
    source: FqField,
    target: FqField,
    /// Image `b` of the source generator.
    image: FqElem,
    /// Powers `b^0, ..., b^(m-1)`.
    basis: Vec<FqElem>,
}

impl Embedding {
    /// Constructs an embedding of `source` into `target`.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::CharacteristicMismatch`] if the characteristics
    /// differ and [`FieldError::IncompatibleDegrees`] if the source degree
    /// does not divide the target degree. [`FieldError::RootNotFound`] means
    /// root finding gave up before splitting off a linear factor.
    #[instrument(level = "debug", skip_all, fields(source = %source, target = %target))]
    pub fn new(source: &FqField, target: &FqField) -> FieldResult<Self> {
        if source.characteristic() != target.characteristic() {
            return Err(FieldError::CharacteristicMismatch {
                left: source.characteristic().clone(),
                right: target.characteristic().clone(),
            });
        }
        if target.degree() % source.degree() != 0 {
            return Err(FieldError::IncompatibleDegrees {
                from: source.degree(),
                to: target.degree(),
            });
        }

        let image = if source == target {
            target.generator()
        } else if source.is_prime_field() {
            // x - g has the single root g
            target.from_integer(&source.generator().coeffs()[0])
        } else {
            let modulus: Vec<FqElem> = source
                .modulus()
                .coeffs()
                .iter()
                .map(|c| target.from_integer(c))
                .collect();
            let modulus = ExtPoly::new(target, modulus);
            let root = linear_roots(&modulus, target)
                .into_iter()
                .min_by(|a, b| a.coeffs().cmp(b.coeffs()))
                .ok_or(FieldError::RootNotFound { degree: source.degree() })?;
            debug_assert!(modulus.eval(&root).is_zero());
            debug!(root = %root, "selected image of the generator");
            root
        };

        let mut basis = Vec::with_capacity(source.degree());
        let mut power = target.one();
        for _ in 0..source.degree() {
            let next = &power * &image;
            basis.push(std::mem::replace(&mut power, next));
        }

        Ok(Self {
            source: source.clone(),
            target: target.clone(),
            image,
            basis,
        })
    }

    /// Returns the source field.
    #[must_use]
    pub fn source(&self) -> &FqField {
        &self.source
    }

    /// Returns the target field.
    #[must_use]
    pub fn target(&self) -> &FqField {
        &self.target
    }

    /// Returns the image of the source generator.
    #[must_use]
    pub fn image(&self) -> &FqElem {
        &self.image
    }

    /// Maps an element of the source field into the target field.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::FieldMismatch`] if `x` is not in the source field.
    pub fn apply(&self, x: &FqElem) -> FieldResult<FqElem> {
        if *x.field() != self.source {
            return Err(FieldError::FieldMismatch);
        }
        let mut result = self.target.zero();
        for (c, b) in x.coeffs().iter().zip(&self.basis) {
            result += b * c;
        }
        Ok(result)
    }

    /// Pulls an element of the target field back into the source field.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::FieldMismatch`] if `y` is not in the target field
    /// and [`FieldError::NotInSubfield`] if `y` is not in the image.
    pub fn preimage(&self, y: &FqElem) -> FieldResult<FqElem> {
        if *y.field() != self.target {
            return Err(FieldError::FieldMismatch);
        }

        // Row j: coefficient j of each basis element
        let rows: Vec<Vec<Integer>> = (0..self.target.degree())
            .map(|j| self.basis.iter().map(|b| b.coeffs()[j].clone()).collect())
            .collect();
        let solution = solve(&rows, y.coeffs(), self.target.prime_field()).ok_or(FieldError::NotInSubfield)?;
        self.source.from_coeffs(solution)
    }
}

/// Finds all roots of a polynomial that splits into distinct linear factors.
fn linear_roots(f: &ExtPoly, field: &FqField) -> Vec<FqElem> {
    let mut rng = ChaCha8Rng::seed_from_u64(123);
    let mut attempts = 0;
    let mut pending = vec![f.make_monic()];
    let mut roots = Vec::new();

    while let Some(g) = pending.pop() {
        match g.degree() {
            None | Some(0) => {}
            Some(1) => roots.push(-&g.coeff(0)),
            Some(_) => {
                if attempts >= MAX_SPLIT_ATTEMPTS {
                    break;
                }
                attempts += 1;
                match try_split(&g, field, &mut rng) {
                    Some((a, b)) => {
                        pending.push(a);
                        pending.push(b);
                    }
                    None => pending.push(g),
                }
            }
        }
    }

    roots
}

/// Attempts one random split of a product of distinct linear factors.
fn try_split(f: &ExtPoly, field: &FqField, rng: &mut ChaCha8Rng) -> Option<(ExtPoly, ExtPoly)> {
    let n = f.degree()?;
    let a = ExtPoly::new(field, (0..n).map(|_| field.random(rng)).collect());
    if a.degree().unwrap_or(0) == 0 {
        return None;
    }

    let h = if field.prime_field().is_char_two() {
        // Trace map: a + a^2 + a^4 + ... + a^(2^(k-1)) with q = 2^k
        let mut trace = a.clone();
        let mut current = a;
        for _ in 1..field.degree() {
            current = current.mul(&current).rem(f)?;
            trace = trace.add(&current);
        }
        trace
    } else {
        let exp = (field.order() - &Integer::one()) / Integer::new(2);
        a.pow_mod(&exp, f)?.sub(&ExtPoly::one(field))
    };

    let g = f.gcd(&h);
    let dg = g.degree()?;
    if dg > 0 && dg < n {
        let other = f.div_rem(&g)?.0;
        Some((g, other.make_monic()))
    } else {
        None
    }
}

impl FqField {
    /// Maps an element of another field into this one.
    ///
    /// Elements of this field are returned unchanged. Smaller fields embed
    /// through [`Embedding`]; elements of larger fields are pulled back,
    /// which requires them to lie in the image of this field.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::CharacteristicMismatch`],
    /// [`FieldError::IncompatibleDegrees`] when neither degree divides the
    /// other, and [`FieldError::NotInSubfield`] when pulling back an element
    /// outside the subfield.
    pub fn coerce(&self, x: &FqElem) -> FieldResult<FqElem> {
        let source = x.field();
        if source == self {
            return Ok(self.elem_unchecked(x.coeffs().to_vec()));
        }
        if source.characteristic() != self.characteristic() {
            return Err(FieldError::CharacteristicMismatch {
                left: source.characteristic().clone(),
                right: self.characteristic().clone(),
            });
        }

        let (from, to) = (source.degree(), self.degree());
        // Equal degrees use one embedding for both directions so that
        // coercing back and forth is the identity.
        let upward = from < to || (from == to && source.modulus().coeffs() < self.modulus().coeffs());
        if upward {
            if to % from != 0 {
                return Err(FieldError::IncompatibleDegrees { from, to });
            }
            crate::cache::FieldCache::global().embedding(source, self)?.apply(x)
        } else {
            if from % to != 0 {
                return Err(FieldError::IncompatibleDegrees { from, to });
            }
            crate::cache::FieldCache::global().embedding(self, source)?.preimage(x)
        }
    }
}
