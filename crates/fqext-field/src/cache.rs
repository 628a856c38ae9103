//! Process-wide cache of field contexts and embeddings.
//!
//! Lookups take a read lock; misses build the value outside any lock and
//! then insert it, keeping whichever entry landed first so concurrent
//! callers share one handle.

use std::sync::{Arc, OnceLock};

use fqext_integers::Integer;
use fqext_poly::FpPoly;
use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use tracing::trace;

use crate::embedding::Embedding;
use crate::error::FieldResult;
use crate::field::FqField;

/// A thread-safe cache of fields keyed by their defining data.
#[derive(Default)]
pub struct FieldCache {
    /// Fields keyed by characteristic and modulus coefficients.
    by_modulus: RwLock<FxHashMap<(Integer, Vec<Integer>), FqField>>,
    /// Canonical fields keyed by characteristic and degree.
    by_degree: RwLock<FxHashMap<(Integer, usize), FqField>>,
    embeddings: RwLock<FxHashMap<(FqField, FqField), Arc<Embedding>>>,
}

impl FieldCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the process-wide cache.
    pub fn global() -> &'static FieldCache {
        static GLOBAL: OnceLock<FieldCache> = OnceLock::new();
        GLOBAL.get_or_init(FieldCache::new)
    }

    /// Returns the field `F_p[x] / (modulus)`, constructing it on a miss.
    ///
    /// # Errors
    ///
    /// Propagates construction errors from [`FqField::new`]; failures are
    /// not cached.
    pub fn field(&self, characteristic: &Integer, modulus: &FpPoly) -> FieldResult<FqField> {
        let key = (characteristic.clone(), modulus.coeffs().to_vec());
        if let Some(field) = self.by_modulus.read().get(&key) {
            trace!(%characteristic, "field cache hit");
            return Ok(field.clone());
        }

        trace!(%characteristic, "field cache miss");
        let field = FqField::new(characteristic.clone(), modulus.clone())?;
        Ok(self.by_modulus.write().entry(key).or_insert(field).clone())
    }

    /// Returns the canonical field `GF(p^d)`, constructing it on a miss.
    ///
    /// # Errors
    ///
    /// Propagates construction errors from [`FqField::conway`].
    pub fn conway(&self, characteristic: &Integer, degree: usize) -> FieldResult<FqField> {
        let key = (characteristic.clone(), degree);
        if let Some(field) = self.by_degree.read().get(&key) {
            trace!(%characteristic, degree, "field cache hit");
            return Ok(field.clone());
        }

        trace!(%characteristic, degree, "field cache miss");
        let field = FqField::conway(characteristic.clone(), degree)?;
        Ok(self.by_degree.write().entry(key).or_insert(field).clone())
    }

    /// Returns the embedding `source -> target`, constructing it on a miss.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`Embedding::new`].
    pub fn embedding(&self, source: &FqField, target: &FqField) -> FieldResult<Arc<Embedding>> {
        let key = (source.clone(), target.clone());
        if let Some(embedding) = self.embeddings.read().get(&key) {
            return Ok(Arc::clone(embedding));
        }

        let embedding = Arc::new(Embedding::new(source, target)?);
        Ok(Arc::clone(self.embeddings.write().entry(key).or_insert(embedding)))
    }

    /// Returns the number of cached fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_modulus.read().len() + self.by_degree.read().len()
    }

    /// Returns true if no fields are cached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drops every cached field and embedding.
    pub fn clear(&self) {
        self.by_modulus.write().clear();
        self.by_degree.write().clear();
        self.embeddings.write().clear();
    }
}

impl FqField {
    /// Like [`FqField::new`], but shares one handle per `(p, modulus)`
    /// through the global cache.
    ///
    /// # Errors
    ///
    /// Same as [`FqField::new`].
    pub fn cached(characteristic: &Integer, modulus: &FpPoly) -> FieldResult<Self> {
        FieldCache::global().field(characteristic, modulus)
    }

    /// Like [`FqField::conway`], but shares one handle per `(p, d)` through
    /// the global cache.
    ///
    /// # Errors
    ///
    /// Same as [`FqField::conway`].
    pub fn cached_conway(characteristic: &Integer, degree: usize) -> FieldResult<Self> {
        FieldCache::global().conway(characteristic, degree)
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use fqext_integers::PrimeField;

    use super::*;
    use crate::error::FieldError;

    #[test]
    fn test_hits_share_handle() {
        let cache = FieldCache::new();
        let p = Integer::new(7);
        let m = FpPoly::from_i64(&PrimeField::new(p.clone()).unwrap(), &[1, 0, 1]);

        let a = cache.field(&p, &m).unwrap();
        let b = cache.field(&p, &m).unwrap();
        assert!(a.ptr_eq(&b));
        assert_eq!(cache.len(), 1);

        let c = cache.conway(&p, 2).unwrap();
        assert_eq!(c.modulus().coeffs(), FpPoly::from_i64(c.prime_field(), &[3, 6, 1]).coeffs());
        assert!(c.ptr_eq(&cache.conway(&p, 2).unwrap()));
        assert_eq!(cache.len(), 2);

        cache.clear();
        assert!(cache.is_empty());
    }

    #[test]
    fn test_errors_are_not_cached() {
        let cache = FieldCache::new();
        let p = Integer::new(5);
        let m = FpPoly::from_i64(&PrimeField::new(p.clone()).unwrap(), &[1, 0, 1]);
        assert!(matches!(cache.field(&p, &m), Err(FieldError::InvalidModulus(_))));
        assert!(cache.is_empty());
    }

    #[test]
    fn test_concurrent_lookups_agree() {
        let p = Integer::new(3);
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let p = p.clone();
                thread::spawn(move || FqField::cached_conway(&p, 5).unwrap())
            })
            .collect();
        let fields: Vec<FqField> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        for f in &fields {
            assert!(f.ptr_eq(&fields[0]));
            assert_eq!(f.degree(), 5);
        }
    }
}
