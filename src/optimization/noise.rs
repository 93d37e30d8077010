//! Gaussian control-noise generation with deterministic seeding support.

use ndarray::ArrayViewMut2;
use rand::prelude::*;
use rand::rngs::SmallRng;
use rand_distr::StandardNormal;

/// Seedable Gaussian sampler feeding the control perturbations.
///
/// A seed of 0 draws the RNG state from entropy; any other value gives a
/// fully reproducible stream.
#[derive(Clone)]
pub struct NoiseGenerator {
    rng: SmallRng,
}

impl NoiseGenerator {
    pub fn new(seed: u64) -> Self {
        let rng = if seed == 0 {
            SmallRng::from_entropy()
        } else {
            SmallRng::seed_from_u64(seed)
        };
        Self { rng }
    }

    /// Draw a single zero-mean Gaussian sample.
    #[inline]
    pub fn gaussian(&mut self, stddev: f32) -> f32 {
        if stddev == 0.0 {
            return 0.0;
        }
        let n: f32 = self.rng.sample(StandardNormal);
        n * stddev
    }

    /// Fill a column view with zero-mean Gaussian samples.
    ///
    /// Elements are written in the view's logical order, so the stream of
    /// draws (and therefore the whole optimizer) is reproducible for a
    /// fixed seed.
    pub fn fill_gaussian(&mut self, view: &mut ArrayViewMut2<'_, f32>, stddev: f32) {
        for v in view.iter_mut() {
            *v = self.gaussian(stddev);
        }
    }
}

impl std::fmt::Debug for NoiseGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NoiseGenerator").finish_non_exhaustive()
    }
}
