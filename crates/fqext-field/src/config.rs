//! Tunables for the field layer.

/// Bounds for the trial-division factoring used by primitive-root search
/// and multiplicative orders.
#[derive(Clone, Debug)]
pub struct FactorBound {
    /// Largest trial divisor tried before giving up on a full factorization.
    pub trial_division_bound: u64,
}

impl Default for FactorBound {
    fn default() -> Self {
        Self {
            trial_division_bound: 1 << 20,
        }
    }
}

impl FactorBound {
    /// Creates a bound with the given largest trial divisor.
    #[must_use]
    pub fn new(trial_division_bound: u64) -> Self {
        Self {
            trial_division_bound,
        }
    }
}
