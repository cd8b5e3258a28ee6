//! Closed-form power analysis.
//!
//! Analytical counterparts to the simulation: theoretical power of the
//! two-sided Pearson correlation test and the minimum sample size that
//! reaches a target power, both via the Fisher z approximation.

mod power;

pub use power::{required_sample_size, theoretical_power};
