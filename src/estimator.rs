//! Main `PowerEstimator` entry point and builder.

use crate::analysis;
use crate::config::StudyConfig;
use crate::error::{Error, Result};
use crate::population::Population;
use crate::study::{run_study, StudySummary};

/// Main entry point for power estimation.
///
/// Wraps a [`StudyConfig`] behind a builder so the common case is a
/// one-liner: configure, run, read `empirical_power` off the summary.
///
/// # Example
///
/// ```
/// use potentia::PowerEstimator;
///
/// let summary = PowerEstimator::new()
///     .true_effect(-0.13)
///     .sample_size(200)
///     .n_trials(250)
///     .seed(2024)
///     .run()
///     .unwrap();
///
/// assert!(summary.empirical_power > 0.0 && summary.empirical_power < 1.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct PowerEstimator {
    config: StudyConfig,
}

impl PowerEstimator {
    /// Create with default configuration.
    pub fn new() -> Self {
        Self {
            config: StudyConfig::default(),
        }
    }

    /// Create with the quick preset (few trials, small population).
    pub fn quick() -> Self {
        Self {
            config: StudyConfig::quick(),
        }
    }

    /// Create with the thorough preset (many trials, tight estimates).
    pub fn thorough() -> Self {
        Self {
            config: StudyConfig::thorough(),
        }
    }

    /// Create from an explicit configuration.
    pub fn from_config(config: StudyConfig) -> Self {
        Self { config }
    }

    /// Set the population size.
    pub fn population_size(mut self, size: usize) -> Self {
        self.config = self.config.population_size(size);
        self
    }

    /// Set the true effect size.
    pub fn true_effect(mut self, effect: f64) -> Self {
        self.config = self.config.true_effect(effect);
        self
    }

    /// Set the significance level.
    pub fn alpha(mut self, alpha: f64) -> Self {
        self.config = self.config.alpha(alpha);
        self
    }

    /// Set the per-trial sample size.
    pub fn sample_size(mut self, size: usize) -> Self {
        self.config = self.config.sample_size(size);
        self
    }

    /// Set the number of trials.
    pub fn n_trials(mut self, n: usize) -> Self {
        self.config = self.config.n_trials(n);
        self
    }

    /// Set the study seed.
    pub fn seed(mut self, seed: u64) -> Self {
        self.config = self.config.seed(seed);
        self
    }

    /// Set the target power for sample-size lookups.
    pub fn target_power(mut self, power: f64) -> Self {
        self.config = self.config.target_power(power);
        self
    }

    /// Get the current configuration.
    pub fn config(&self) -> &StudyConfig {
        &self.config
    }

    /// Generate the configured population and run the study against it.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` if the configuration fails validation;
    /// `DegenerateSample` if a trial draws a zero-variance sample.
    pub fn run(&self) -> Result<StudySummary> {
        self.config.validate()?;
        let population = Population::generate(
            self.config.population_size,
            self.config.true_effect,
            self.config.seed,
        )?;
        self.run_on(&population)
    }

    /// Run the configured study against an existing population.
    ///
    /// Lets callers resample one population across several studies
    /// (for example to compare sample sizes) without regenerating it.
    ///
    /// # Errors
    ///
    /// As [`PowerEstimator::run`].
    pub fn run_on(&self, population: &Population) -> Result<StudySummary> {
        run_study(
            population,
            self.config.sample_size,
            self.config.n_trials,
            self.config.alpha,
            self.config.seed,
        )
    }

    /// Theoretical (Fisher z) power for the configured effect, sample
    /// size, and alpha.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` if the configured values are outside the
    /// formula's domain.
    pub fn theoretical_power(&self) -> Result<f64> {
        analysis::theoretical_power(
            self.config.true_effect,
            self.config.sample_size,
            self.config.alpha,
        )
    }

    /// Minimum sample size reaching the configured target power.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` if `target_power` was never set, or if the
    /// configured effect/alpha/target combination is out of domain.
    pub fn required_sample_size(&self) -> Result<usize> {
        let target = self.config.target_power.ok_or_else(|| {
            Error::invalid(
                "target_power",
                "set a target power before asking for a required sample size",
            )
        })?;
        analysis::required_sample_size(self.config.true_effect, self.config.alpha, target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_delegates_to_config() {
        let estimator = PowerEstimator::new()
            .true_effect(0.2)
            .sample_size(50)
            .n_trials(10)
            .seed(5);
        assert_eq!(estimator.config().true_effect, 0.2);
        assert_eq!(estimator.config().sample_size, 50);
        assert_eq!(estimator.config().n_trials, 10);
        assert_eq!(estimator.config().seed, 5);
    }

    #[test]
    fn test_run_produces_full_summary() {
        let summary = PowerEstimator::quick()
            .n_trials(20)
            .sample_size(40)
            .run()
            .unwrap();
        assert_eq!(summary.trials.len(), 20);
        assert_eq!(summary.sample_size, 40);
    }

    #[test]
    fn test_required_sample_size_needs_target() {
        let err = PowerEstimator::new().required_sample_size().unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidParameter {
                param: "target_power",
                ..
            }
        ));

        let n = PowerEstimator::new()
            .true_effect(0.3)
            .target_power(0.8)
            .required_sample_size()
            .unwrap();
        assert!(n > 4);
    }

    #[test]
    fn test_invalid_config_rejected_before_sampling() {
        let mut config = StudyConfig::default();
        config.sample_size = config.population_size + 1;
        let err = PowerEstimator::from_config(config).run().unwrap_err();
        assert!(matches!(err, Error::InvalidParameter { .. }));
    }
}
