//! Subsample drawing.
//!
//! Each trial draws a fresh sample of distinct index positions from the
//! population, uniformly without replacement within the draw. Across
//! trials the same population is resampled freely.

use rand::Rng;

use crate::error::{Error, Result};
use crate::population::Population;

/// A subsample of paired observations copied out of a population.
///
/// Created per trial and discarded once its statistic is computed.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    x: Vec<f64>,
    y: Vec<f64>,
}

impl Sample {
    /// Number of paired observations.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Whether the sample is empty. Never true for a drawn sample.
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Independent variable column.
    pub fn x(&self) -> &[f64] {
        &self.x
    }

    /// Dependent variable column.
    pub fn y(&self) -> &[f64] {
        &self.y
    }
}

/// Draw `sample_size` distinct observations uniformly without replacement.
///
/// # Errors
///
/// `InvalidParameter` if `sample_size <= 1` (a correlation needs at least
/// two observations) or `sample_size` exceeds the population size.
pub fn draw_sample<R: Rng + ?Sized>(
    population: &Population,
    sample_size: usize,
    rng: &mut R,
) -> Result<Sample> {
    if sample_size <= 1 {
        return Err(Error::invalid(
            "sample_size",
            format!("must be at least 2 for a correlation, got {sample_size}"),
        ));
    }
    if sample_size > population.len() {
        return Err(Error::invalid(
            "sample_size",
            format!(
                "cannot draw {sample_size} observations without replacement from a \
                 population of {}",
                population.len()
            ),
        ));
    }

    let indices = rand::seq::index::sample(rng, population.len(), sample_size);

    let mut x = Vec::with_capacity(sample_size);
    let mut y = Vec::with_capacity(sample_size);
    for i in indices {
        x.push(population.x()[i]);
        y.push(population.y()[i]);
    }

    Ok(Sample { x, y })
}
