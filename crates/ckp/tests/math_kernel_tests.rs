#![cfg(feature = "dev")]
//! Tests for Gaussian kernel density estimation.
//!
//! These tests verify the mathematical kernel functions used by the
//! correntropy statistic:
//! - Scalar Gaussian kernel values and normalization
//! - Fixed-bandwidth density estimation at one and many query points
//! - Heteroscedastic density at zero
//! - Cutoff and symmetry behavior

use approx::assert_relative_eq;

use ckp::internals::math::kernel::{
    density_at_zero, gaussian, GaussianKde, GAUSSIAN_CUTOFF, SQRT_2PI,
};

// ============================================================================
// Scalar Kernel Tests
// ============================================================================

/// The kernel peaks at zero with the Gaussian normalization value.
#[test]
fn test_gaussian_peak_value() {
    let w = 0.5_f64;
    assert_relative_eq!(gaussian(0.0, w), 1.0 / (w * SQRT_2PI), epsilon = 1e-15);
}

/// The kernel is symmetric around zero.
#[test]
fn test_gaussian_symmetry() {
    for &x in &[0.1_f64, 0.7, 1.3, 2.9] {
        assert_relative_eq!(gaussian(x, 1.0), gaussian(-x, 1.0));
    }
}

/// One normalized sigma away drops the kernel by exp(-1/2).
#[test]
fn test_gaussian_one_sigma() {
    let w = 0.3_f64;
    let expected = (-0.5_f64).exp() / (w * SQRT_2PI);
    assert_relative_eq!(gaussian(w, w), expected, epsilon = 1e-15);
}

/// Beyond the cutoff the kernel is exactly zero.
#[test]
fn test_gaussian_cutoff() {
    let w = 1.0_f64;
    assert_eq!(gaussian(GAUSSIAN_CUTOFF + 0.1, w), 0.0);
    assert!(gaussian(GAUSSIAN_CUTOFF - 0.1, w) > 0.0);
}

// ============================================================================
// Fixed-Bandwidth Estimator Tests
// ============================================================================

/// A single difference at zero yields the full kernel peak.
#[test]
fn test_kde_single_difference() {
    let diffs = [0.0_f64];
    let kde = GaussianKde::new(&diffs, 0.2);
    assert_relative_eq!(kde.density_at(0.0), 1.0 / (0.2 * SQRT_2PI), epsilon = 1e-15);
}

/// The estimate averages the kernels of all differences.
#[test]
fn test_kde_averages_kernels() {
    let diffs = [-0.4_f64, 0.4];
    let h = 0.5;
    let kde = GaussianKde::new(&diffs, h);

    let expected = (gaussian(0.0 - (-0.4), h) + gaussian(0.0 - 0.4, h)) / 2.0;
    assert_relative_eq!(kde.density_at(0.0), expected, epsilon = 1e-15);
}

/// An empty difference set yields zero density, not an error.
#[test]
fn test_kde_empty_differences() {
    let diffs: [f64; 0] = [];
    let kde = GaussianKde::new(&diffs, 0.5);
    assert_eq!(kde.density_at(0.0), 0.0);
}

/// Vectorized evaluation matches pointwise evaluation.
#[test]
fn test_kde_density_many_matches_pointwise() {
    let diffs: Vec<f64> = (-5..=5).map(|i| i as f64 * 0.2).collect();
    let kde = GaussianKde::new(&diffs, 0.37);

    let queries: Vec<f64> = (-10..=10).map(|i| i as f64 * 0.15).collect();
    let mut out = vec![0.0; queries.len()];
    kde.density_many(&queries, &mut out);

    for (&q, &o) in queries.iter().zip(out.iter()) {
        assert_relative_eq!(o, kde.density_at(q));
    }
}

/// Densities integrate to roughly one over a wide query range.
#[test]
fn test_kde_integrates_to_one() {
    let diffs = [-0.3_f64, 0.1, 0.4];
    let kde = GaussianKde::new(&diffs, 0.25);

    let step = 0.01;
    let mut integral = 0.0;
    let mut x = -4.0;
    while x <= 4.0 {
        integral += kde.density_at(x) * step;
        x += step;
    }

    assert_relative_eq!(integral, 1.0, epsilon = 1e-3);
}

// ============================================================================
// Heteroscedastic Estimator Tests
// ============================================================================

/// With uniform widths the heteroscedastic form matches the fixed form.
#[test]
fn test_density_at_zero_uniform_widths() {
    let diffs = [-0.2_f64, 0.0, 0.3];
    let widths = [0.4_f64; 3];
    let kde = GaussianKde::new(&diffs, 0.4);

    assert_relative_eq!(
        density_at_zero(&diffs, &widths),
        kde.density_at(0.0),
        epsilon = 1e-15
    );
}

/// Wider kernels flatten the contribution of their differences.
#[test]
fn test_density_at_zero_downweights_wide_pairs() {
    let diffs = [0.0_f64];
    let narrow = density_at_zero(&diffs, &[0.1_f64]);
    let wide = density_at_zero(&diffs, &[1.0_f64]);
    assert!(narrow > wide);
}
