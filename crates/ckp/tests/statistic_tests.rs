#![cfg(feature = "dev")]
//! Tests for the correntropy statistic.
//!
//! These tests verify the statistic on controlled folded views:
//! - Bounds and ordering (clustered vs. structureless folds)
//! - Determinism
//! - Standard vs. weighted variant behavior
//! - Folding into reusable buffers

use approx::assert_relative_eq;

use ckp::internals::algorithms::folding::fold_into;
use ckp::internals::algorithms::statistic::{CorrentropyContext, StatisticKind};
use ckp::internals::primitives::buffer::FoldBuffer;

/// Evaluate the statistic on already-ordered magnitudes.
fn evaluate(mags: &[f64], uncertainties: &[f64], bandwidth: f64, kind: StatisticKind) -> f64 {
    let ctx = CorrentropyContext {
        mags,
        uncertainties,
        bandwidth,
        kind,
    };
    let mut diffs = Vec::new();
    let mut widths = Vec::new();
    ctx.evaluate(&mut diffs, &mut widths)
}

// ============================================================================
// Bounds and Ordering Tests
// ============================================================================

/// Identical magnitudes (perfect clustering) score exactly 1.
#[test]
fn test_perfect_clustering_scores_one() {
    let mags = [0.5_f64; 12];
    let uncertainties = [0.0_f64; 12];

    let s = evaluate(&mags, &uncertainties, 0.1, StatisticKind::Standard);
    assert_relative_eq!(s, 1.0, epsilon = 1e-12);
}

/// Tightly clustered differences score close to 1.
#[test]
fn test_tight_clustering_scores_high() {
    let mags: Vec<f64> = (0..20).map(|i| 0.001 * i as f64).collect();
    let uncertainties = vec![0.0; 20];

    let s = evaluate(&mags, &uncertainties, 0.1, StatisticKind::Standard);
    assert!(s > 0.9, "clustered fold should score high, got {s}");
}

/// Widely spread differences score near 0.
#[test]
fn test_spread_differences_score_low() {
    // Alternating unit-variance-like values: every consecutive difference
    // is about two standard deviations
    let mags: Vec<f64> = (0..40).map(|i| if i % 2 == 0 { 1.0 } else { -1.0 }).collect();
    let uncertainties = vec![0.0; 40];

    let s = evaluate(&mags, &uncertainties, 0.1, StatisticKind::Standard);
    assert!(s < 0.1, "structureless fold should score low, got {s}");
}

/// The clustered fold always outranks the scrambled fold of the same values.
#[test]
fn test_clustered_beats_scrambled() {
    let sorted: Vec<f64> = (0..30).map(|i| (i as f64 / 30.0 * 6.28).sin()).collect();
    // Deterministic scramble: interleave the two halves so consecutive
    // values are far apart
    let mut interleaved = Vec::with_capacity(30);
    for i in 0..15 {
        interleaved.push(sorted[i]);
        interleaved.push(sorted[29 - i]);
    }
    let uncertainties = vec![0.0; 30];

    let mut ordered = sorted.clone();
    ordered.sort_by(|a, b| a.partial_cmp(b).unwrap());

    let s_ordered = evaluate(&ordered, &uncertainties, 0.2, StatisticKind::Standard);
    let s_interleaved = evaluate(&interleaved, &uncertainties, 0.2, StatisticKind::Standard);

    assert!(
        s_ordered > s_interleaved,
        "ordered {s_ordered} should beat interleaved {s_interleaved}"
    );
}

// ============================================================================
// Determinism Tests
// ============================================================================

/// Repeated evaluation of the same fold is bit-identical.
#[test]
fn test_statistic_deterministic() {
    let mags: Vec<f64> = (0..25).map(|i| ((i * 37) % 25) as f64 / 25.0).collect();
    let uncertainties: Vec<f64> = (0..25).map(|i| 0.01 + 0.001 * i as f64).collect();

    let a = evaluate(&mags, &uncertainties, 0.15, StatisticKind::Weighted);
    let b = evaluate(&mags, &uncertainties, 0.15, StatisticKind::Weighted);
    assert_eq!(a.to_bits(), b.to_bits());
}

// ============================================================================
// Variant Tests
// ============================================================================

/// With zero uncertainties the weighted variant equals the standard one.
#[test]
fn test_weighted_equals_standard_at_zero_uncertainty() {
    let mags: Vec<f64> = (0..15).map(|i| (i as f64 * 0.4).cos()).collect();
    let uncertainties = vec![0.0; 15];

    let standard = evaluate(&mags, &uncertainties, 0.2, StatisticKind::Standard);
    let weighted = evaluate(&mags, &uncertainties, 0.2, StatisticKind::Weighted);
    assert_relative_eq!(standard, weighted, epsilon = 1e-14);
}

/// Uniform per-point noise widens every pair identically, so the weighted
/// statistic equals the standard statistic at the propagated bandwidth
/// `sqrt(h^2 + 2 u^2)`.
#[test]
fn test_weighted_uniform_noise_equals_widened_standard() {
    let mags: Vec<f64> = (0..18).map(|i| (i as f64 * 0.9).sin()).collect();
    let u = 0.3_f64;
    let h = 0.2_f64;
    let uncertainties = vec![u; 18];
    let zero = vec![0.0; 18];

    let weighted = evaluate(&mags, &uncertainties, h, StatisticKind::Weighted);
    let widened = (h * h + 2.0 * u * u).sqrt();
    let standard = evaluate(&mags, &zero, widened, StatisticKind::Standard);

    assert_relative_eq!(weighted, standard, epsilon = 1e-14);
}

/// Variant metadata: names and default.
#[test]
fn test_statistic_kind_metadata() {
    assert_eq!(StatisticKind::Standard.name(), "Standard");
    assert_eq!(StatisticKind::Weighted.name(), "Weighted");
    assert_eq!(StatisticKind::default(), StatisticKind::Standard);
}

/// The variant flag round-trips through its grid-pass encoding.
#[test]
fn test_statistic_kind_flag_roundtrip() {
    assert_eq!(
        StatisticKind::from_u8(StatisticKind::Standard.to_u8()),
        StatisticKind::Standard
    );
    assert_eq!(
        StatisticKind::from_u8(StatisticKind::Weighted.to_u8()),
        StatisticKind::Weighted
    );
    assert_eq!(StatisticKind::from_u8(250), StatisticKind::Standard);
}

// ============================================================================
// Folding Tests
// ============================================================================

/// Folding reorders magnitudes by ascending phase.
#[test]
fn test_fold_into_orders_by_phase() {
    // frequency 1: phases are the fractional parts of the timestamps
    let times = [0.9_f64, 0.1, 1.5, 2.3];
    let mags = [9.0_f64, 1.0, 5.0, 3.0];
    let uncertainties = [0.9_f64, 0.1, 0.5, 0.3];

    let mut buf = FoldBuffer::with_capacity(4);
    fold_into(&times, &mags, &uncertainties, 1.0, &mut buf);

    // Phases: 0.9, 0.1, 0.5, 0.3 -> order 1, 3, 2, 0
    assert_eq!(buf.mags.as_vec(), &vec![1.0, 3.0, 5.0, 9.0]);
    assert_eq!(buf.uncertainties.as_vec(), &vec![0.1, 0.3, 0.5, 0.9]);
}

/// Identical phases keep a deterministic (index) order.
#[test]
fn test_fold_into_ties_deterministic() {
    // frequency 1: timestamps 0.5 and 1.5 and 2.5 share phase 0.5
    let times = [0.5_f64, 1.5, 2.5, 0.25];
    let mags = [10.0_f64, 20.0, 30.0, 1.0];
    let uncertainties = [0.0_f64; 4];

    let mut buf = FoldBuffer::with_capacity(4);
    fold_into(&times, &mags, &uncertainties, 1.0, &mut buf);

    // Phase 0.25 first, then the tied 0.5 group in original index order
    assert_eq!(buf.mags.as_vec(), &vec![1.0, 10.0, 20.0, 30.0]);
}

/// Negative timestamps still fold into [0, 1).
#[test]
fn test_fold_negative_timestamps() {
    let times = [-0.75_f64, -0.25, 0.25];
    let mags = [1.0_f64, 2.0, 3.0];
    let uncertainties = [0.0_f64; 3];

    let mut buf = FoldBuffer::with_capacity(3);
    fold_into(&times, &mags, &uncertainties, 1.0, &mut buf);

    for &p in buf.phases.iter() {
        assert!((0.0..1.0).contains(&p));
    }
    // Phases: 0.25, 0.75, 0.25 -> ties break by index
    assert_eq!(buf.mags.as_vec(), &vec![1.0, 3.0, 2.0]);
}
