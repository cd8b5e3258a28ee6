//! Statistical properties of the power estimator.
//!
//! These tests compare Monte-Carlo estimates against the Fisher z closed
//! form with tolerances sized for the trial counts used: the binomial
//! standard error at 1,000 trials is under 0.016, and the population's
//! realized correlation sits within about ±0.01 of the generating
//! effect at size 10,000.

use potentia::analysis::{required_sample_size, theoretical_power};
use potentia::{run_study, Error, Population};

const SEED: u64 = 20_240_817;

#[test]
fn empirical_power_tracks_closed_form() {
    // Reference scenario: |r| = 0.13, N = 10,000, n = 200, alpha = 0.05.
    let population = Population::generate(10_000, -0.13, SEED).unwrap();
    let realized = population.empirical_correlation().unwrap();
    let expected = theoretical_power(realized, 200, 0.05).unwrap();

    let summary = run_study(&population, 200, 1_000, 0.05, SEED).unwrap();

    assert!(
        (summary.empirical_power - expected).abs() < 0.06,
        "empirical power {} vs closed form {expected} at realized r = {realized}",
        summary.empirical_power
    );
    // Sanity band for the nominal effect: closed form gives ~0.45.
    assert!(
        summary.empirical_power > 0.30 && summary.empirical_power < 0.60,
        "power {} outside plausible band",
        summary.empirical_power
    );
}

#[test]
fn power_is_monotone_in_sample_size() {
    let population = Population::generate(10_000, 0.13, SEED).unwrap();

    let small = run_study(&population, 50, 1_000, 0.05, SEED).unwrap();
    let large = run_study(&population, 500, 1_000, 0.05, SEED).unwrap();

    // Closed form: ~0.14 at n=50 vs ~0.83 at n=500. The gap dwarfs
    // Monte-Carlo noise, so require a decisive separation.
    assert!(
        large.empirical_power > small.empirical_power + 0.3,
        "power did not grow with sample size: {} vs {}",
        small.empirical_power,
        large.empirical_power
    );
}

#[test]
fn analytical_sample_size_delivers_target_power() {
    let target = 0.95;
    let n = required_sample_size(-0.13, 0.05, target).unwrap();

    let population = Population::generate(10_000, -0.13, SEED).unwrap();
    let realized = population.empirical_correlation().unwrap();
    let expected = theoretical_power(realized, n, 0.05).unwrap();

    let summary = run_study(&population, n, 2_000, 0.05, SEED).unwrap();

    assert!(
        (summary.empirical_power - expected).abs() < 0.04,
        "empirical power {} vs closed form {expected} at n = {n}",
        summary.empirical_power
    );
    // The realized population correlation wanders ~±0.01 around the
    // generating effect, so the target is hit up to that wobble.
    assert!(
        summary.empirical_power > 0.85,
        "empirical power {} far below target {target} at n = {n}",
        summary.empirical_power
    );
}

#[test]
fn required_sample_size_closed_form_value() {
    // Fisher z inversion for |r| = 0.13, alpha = 0.05, power 0.95.
    let n = required_sample_size(-0.13, 0.05, 0.95).unwrap();
    assert!((760..=768).contains(&n), "got {n}");

    // Sign of the effect must not matter.
    assert_eq!(n, required_sample_size(0.13, 0.05, 0.95).unwrap());
}

#[test]
fn null_effect_rejection_rate_equals_alpha() {
    // With a zero true effect the "power" is the false-positive rate.
    let population = Population::generate(10_000, 0.0, SEED).unwrap();
    let summary = run_study(&population, 200, 1_000, 0.05, SEED).unwrap();

    assert!(
        (summary.empirical_power - 0.05).abs() < 0.03,
        "false-positive rate {} should be near alpha",
        summary.empirical_power
    );
}

#[test]
fn degenerate_population_aborts_without_partial_summary() {
    let population =
        Population::from_xy((0..100).map(f64::from).collect(), vec![3.0; 100]).unwrap();

    let result = run_study(&population, 10, 50, 0.05, SEED);
    assert_eq!(result, Err(Error::DegenerateSample { variable: "y" }));
}

#[test]
fn boundary_effect_is_always_significant() {
    // A perfectly correlated population must short-circuit to p = 0 on
    // every draw, never NaN.
    let population = Population::generate(1_000, 1.0, SEED).unwrap();
    let summary = run_study(&population, 20, 100, 0.05, SEED).unwrap();

    assert_eq!(summary.empirical_power, 1.0);
    for trial in &summary.trials {
        assert_eq!(trial.p_value, 0.0);
        assert!(!trial.r.is_nan());
    }
}
