//! Synthetic population generation.
//!
//! A population is the fixed, immutable data-generating artifact every
//! study resamples from: two paired columns `(x, y)` whose population
//! correlation equals a caller-chosen effect size.

use rand::SeedableRng;
use rand_distr::{Distribution, StandardNormal};
use rand_xoshiro::Xoshiro256PlusPlus;

use crate::error::{Error, Result};
use crate::statistics::pearson_r;

/// A fixed-size synthetic population of paired observations.
///
/// Generated once, then treated as read-only: studies draw subsamples
/// from it arbitrarily many times without mutating it.
#[derive(Debug, Clone, PartialEq)]
pub struct Population {
    x: Vec<f64>,
    y: Vec<f64>,
    true_effect: Option<f64>,
}

impl Population {
    /// Generate a population with a known true correlation.
    ///
    /// `x` is i.i.d. standard normal and
    /// `y = true_effect * x + sqrt(1 - true_effect²) * noise` with
    /// independent standard normal noise. The noise is scaled so the
    /// population correlation equals `true_effect` exactly, not just
    /// approximately for small effects.
    ///
    /// Deterministic: the same `size`, `true_effect`, and `seed` always
    /// produce byte-identical columns.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` if `size == 0` or `true_effect` is outside
    /// [-1, 1] or not finite.
    pub fn generate(size: usize, true_effect: f64, seed: u64) -> Result<Self> {
        if size == 0 {
            return Err(Error::invalid("size", "population size must be positive"));
        }
        if !true_effect.is_finite() || !(-1.0..=1.0).contains(&true_effect) {
            return Err(Error::invalid(
                "true_effect",
                format!("must be in [-1, 1], got {true_effect}"),
            ));
        }

        let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
        let noise_scale = (1.0 - true_effect * true_effect).sqrt();

        let mut x = Vec::with_capacity(size);
        let mut y = Vec::with_capacity(size);
        for _ in 0..size {
            let xi: f64 = StandardNormal.sample(&mut rng);
            let noise: f64 = StandardNormal.sample(&mut rng);
            x.push(xi);
            y.push(true_effect * xi + noise_scale * noise);
        }

        Ok(Self {
            x,
            y,
            true_effect: Some(true_effect),
        })
    }

    /// Wrap externally supplied paired columns as a population.
    ///
    /// Useful for resampling studies over observed data, where no
    /// generating effect size is known.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` if the columns differ in length or are empty.
    pub fn from_xy(x: Vec<f64>, y: Vec<f64>) -> Result<Self> {
        if x.len() != y.len() {
            return Err(Error::invalid(
                "population",
                format!("columns differ in length: {} vs {}", x.len(), y.len()),
            ));
        }
        if x.is_empty() {
            return Err(Error::invalid("population", "columns must be non-empty"));
        }
        Ok(Self {
            x,
            y,
            true_effect: None,
        })
    }

    /// Number of paired observations.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Whether the population is empty. Never true for a constructed one.
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// The generating effect size, if this population was synthesized.
    pub fn true_effect(&self) -> Option<f64> {
        self.true_effect
    }

    /// Independent variable column.
    pub fn x(&self) -> &[f64] {
        &self.x
    }

    /// Dependent variable column.
    pub fn y(&self) -> &[f64] {
        &self.y
    }

    /// Pearson correlation over the entire population.
    ///
    /// For a generated population this converges to the true effect as
    /// the size grows (within about ±0.02 at size 10,000).
    ///
    /// # Errors
    ///
    /// `DegenerateSample` if either column is constant, `InvalidParameter`
    /// for a single-observation population.
    pub fn empirical_correlation(&self) -> Result<f64> {
        pearson_r(&self.x, &self.y)
    }
}
