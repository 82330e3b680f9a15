#![cfg(feature = "dev")]
//! Tests for kernel bandwidth selection rules.
//!
//! These tests verify the data-driven bandwidth rules and their degenerate
//! failure modes:
//! - Noise-scaled rule values and the all-zero-uncertainty trigger
//! - Silverman rule values and the collapsed-spread trigger
//! - Fixed bandwidth pass-through and rejection
//! - In-place order statistics

use approx::assert_relative_eq;

use ckp::internals::math::bandwidth::{median_inplace, quantile_inplace, BandwidthRule};
use ckp::internals::primitives::errors::CkpError;

// ============================================================================
// Order Statistic Tests
// ============================================================================

/// Median of an odd-length slice is the middle value.
#[test]
fn test_median_odd() {
    let mut vals = [3.0_f64, 1.0, 2.0];
    assert_relative_eq!(median_inplace(&mut vals), 2.0);
}

/// Median of an even-length slice averages the two middle values.
#[test]
fn test_median_even() {
    let mut vals = [4.0_f64, 1.0, 3.0, 2.0];
    assert_relative_eq!(median_inplace(&mut vals), 2.5);
}

/// Quantiles pick the nearest-rank order statistic.
#[test]
fn test_quantiles() {
    let mut vals: Vec<f64> = (1..=9).map(|i| i as f64).collect();
    assert_relative_eq!(quantile_inplace(&mut vals, 0.25), 3.0);
    let mut vals: Vec<f64> = (1..=9).map(|i| i as f64).collect();
    assert_relative_eq!(quantile_inplace(&mut vals, 0.75), 7.0);
}

// ============================================================================
// Noise-Scaled Rule Tests
// ============================================================================

/// Rule metadata: names.
#[test]
fn test_rule_names() {
    assert_eq!(BandwidthRule::<f64>::noise_scaled().name(), "NoiseScaled");
    assert_eq!(BandwidthRule::<f64>::silverman().name(), "Silverman");
    assert_eq!(BandwidthRule::Fixed(0.1_f64).name(), "Fixed");
}

/// The noise-scaled bandwidth is sqrt(2) times the median uncertainty.
#[test]
fn test_noise_scaled_value() {
    let mags = [0.0_f64; 5];
    let uncertainties = [0.1_f64, 0.2, 0.3, 0.4, 0.5];
    let mut scratch = Vec::new();

    let h = BandwidthRule::noise_scaled()
        .compute(&mags, &uncertainties, &mut scratch)
        .unwrap();
    assert_relative_eq!(h, 2.0_f64.sqrt() * 0.3, epsilon = 1e-12);
}

/// The multiplier scales the data-driven width.
#[test]
fn test_noise_scaled_multiplier() {
    let mags = [0.0_f64; 3];
    let uncertainties = [0.2_f64; 3];
    let mut scratch = Vec::new();

    let unit = BandwidthRule::noise_scaled()
        .compute(&mags, &uncertainties, &mut scratch)
        .unwrap();
    let doubled = BandwidthRule::NoiseScaled { multiplier: 2.0 }
        .compute(&mags, &uncertainties, &mut scratch)
        .unwrap();
    assert_relative_eq!(doubled, 2.0 * unit, epsilon = 1e-12);
}

/// All-zero uncertainties collapse the bandwidth and raise the error.
#[test]
fn test_noise_scaled_degenerate_on_zero_uncertainties() {
    let mags = [1.0_f64, 2.0, 3.0];
    let uncertainties = [0.0_f64; 3];
    let mut scratch = Vec::new();

    let err = BandwidthRule::<f64>::noise_scaled()
        .compute(&mags, &uncertainties, &mut scratch)
        .unwrap_err();
    assert_eq!(err, CkpError::DegenerateBandwidth { bandwidth: 0.0 });
}

/// A healthy input raises no error.
#[test]
fn test_noise_scaled_healthy_input() {
    let mags = [1.0_f64, 2.0, 3.0];
    let uncertainties = [0.05_f64, 0.07, 0.06];
    let mut scratch = Vec::new();

    let h = BandwidthRule::noise_scaled()
        .compute(&mags, &uncertainties, &mut scratch)
        .unwrap();
    assert!(h > 0.0 && h.is_finite());
}

// ============================================================================
// Silverman Rule Tests
// ============================================================================

/// The Silverman bandwidth follows the plug-in formula on whitened input.
#[test]
fn test_silverman_value() {
    // Whitened-like magnitudes with a wide interquartile range, so the
    // spread term saturates at 1 and h = 0.9 * n^(-1/5)
    let mags = [-2.0_f64, -1.0, 0.0, 1.0, 2.0];
    let uncertainties = [0.1_f64; 5];
    let mut scratch = Vec::new();

    let h = BandwidthRule::silverman()
        .compute(&mags, &uncertainties, &mut scratch)
        .unwrap();
    let expected = 0.9 * (5.0_f64).powf(-0.2);
    assert_relative_eq!(h, expected, epsilon = 1e-12);
}

/// A collapsed interquartile range degenerates the Silverman rule.
#[test]
fn test_silverman_degenerate_on_flat_spread() {
    // Identical central values: IQR = 0
    let mags = [0.0_f64; 6];
    let uncertainties = [0.1_f64; 6];
    let mut scratch = Vec::new();

    let err = BandwidthRule::<f64>::silverman()
        .compute(&mags, &uncertainties, &mut scratch)
        .unwrap_err();
    assert!(matches!(err, CkpError::DegenerateBandwidth { .. }));
}

// ============================================================================
// Fixed Rule Tests
// ============================================================================

/// A valid fixed bandwidth passes through unchanged.
#[test]
fn test_fixed_pass_through() {
    let mut scratch = Vec::new();
    let h = BandwidthRule::Fixed(0.42_f64)
        .compute(&[], &[], &mut scratch)
        .unwrap();
    assert_relative_eq!(h, 0.42);
}

/// Non-positive or non-finite fixed bandwidths are rejected.
#[test]
fn test_fixed_rejects_degenerate() {
    let mut scratch = Vec::new();
    for h in [0.0_f64, -1.0, f64::NAN, f64::INFINITY] {
        let err = BandwidthRule::Fixed(h)
            .compute(&[], &[], &mut scratch)
            .unwrap_err();
        assert!(matches!(err, CkpError::DegenerateBandwidth { .. }));
    }
}
