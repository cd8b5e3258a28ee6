//! Statistical primitives for power estimation.
//!
//! This module provides the numerical infrastructure the study loop and
//! the closed-form power analysis are built on:
//! - Pearson correlation and its two-sided significance test
//! - Standard normal CDF and quantile function
//! - Student-t tail probabilities via the regularized incomplete beta

mod correlation;
mod distributions;

pub use correlation::{correlation_test, pearson_r, CorrelationTest};
pub use distributions::{
    inverse_normal_cdf, normal_cdf, regularized_incomplete_beta, student_t_two_sided_pvalue,
};
