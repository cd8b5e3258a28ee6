//! # potentia
//!
//! Estimate the statistical power of a Pearson correlation test by
//! Monte-Carlo simulation.
//!
//! The crate builds a synthetic population with a known true
//! correlation, repeatedly draws random subsamples from it, runs a
//! two-sided significance test on each draw, and reports the fraction of
//! draws that reached significance:
//! - Empirical power with the full per-trial sequence (in draw order)
//! - Closed-form (Fisher z) power and required-sample-size lookups
//! - Deterministic, seedable runs: the same seed reproduces every trial
//!
//! ## Quick Start
//!
//! ```
//! use potentia::PowerEstimator;
//!
//! let summary = PowerEstimator::quick()
//!     .true_effect(0.3)
//!     .sample_size(100)
//!     .seed(42)
//!     .run()
//!     .unwrap();
//!
//! println!("empirical power: {:.2}", summary.empirical_power);
//! ```
//!
//! ## How many observations do I need?
//!
//! ```
//! use potentia::analysis::required_sample_size;
//!
//! // Smallest n detecting |r| = 0.3 with 80% power at alpha = 0.05
//! let n = required_sample_size(0.3, 0.05, 0.8).unwrap();
//! assert!(n > 50 && n < 100);
//! ```
//!
//! ## Reproducibility
//!
//! Every trial derives its own sub-seed from the study seed and trial
//! index, so summaries are identical between the serial path and the
//! optional `parallel` feature (rayon), and trials are always recorded
//! in draw order.

#![warn(missing_docs)]
#![warn(clippy::all)]

// Core modules
mod config;
mod error;
mod estimator;
mod population;
mod sample;
mod study;

// Functional modules
pub mod analysis;
pub mod output;
pub mod statistics;

// Re-exports for public API
pub use analysis::{required_sample_size, theoretical_power};
pub use config::StudyConfig;
pub use error::{Error, Result};
pub use estimator::PowerEstimator;
pub use population::Population;
pub use sample::{draw_sample, Sample};
pub use statistics::{correlation_test, pearson_r, CorrelationTest};
pub use study::{run_study, StudySummary, TrialResult};
