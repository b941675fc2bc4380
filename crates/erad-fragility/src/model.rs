//! The continuous-model seam shared by every distribution kind.

use std::fmt;

use erad_core::errors::DistributionError;
use rand::{Rng, RngCore};

/// A univariate continuous distribution over plain magnitudes.
///
/// Units are handled one level up by [`crate::ProbabilityModel`]; models only
/// see numbers already expressed in their native unit.
pub trait ContinuousModel: fmt::Debug + Send + Sync {
    /// Family or model name, e.g. `"lognorm"` or `"Darestani2019"`.
    fn name(&self) -> &str;

    /// Cumulative probability at `x`, in `[0, 1]`.
    fn cdf(&self, x: f64) -> f64;

    /// Draw one variate. Advances `rng` and has no other side effects.
    fn sample(&self, rng: &mut dyn RngCore) -> Result<f64, DistributionError>;

    /// Draw `n` variates in sequence.
    fn sample_n(&self, n: usize, rng: &mut dyn RngCore) -> Result<Vec<f64>, DistributionError> {
        (0..n).map(|_| self.sample(rng)).collect()
    }
}

/// Uniform draw on the open interval (0, 1), suitable for inverse-CDF
/// sampling where both endpoints map to infinities.
pub(crate) fn open_unit(rng: &mut dyn RngCore) -> f64 {
    let u: f64 = rng.gen();
    if u > 0.0 {
        u
    } else {
        f64::MIN_POSITIVE
    }
}
