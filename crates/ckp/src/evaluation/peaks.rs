//! Periodogram peak selection.
//!
//! ## Purpose
//!
//! This module finds the local maxima of a periodogram and ranks them by
//! statistic value. The top-ranked maxima seed the local refinement stage.
//!
//! ## Design notes
//!
//! * **Sentinel tolerance**: Failed grid frequencies hold NaN; a NaN
//!   neighbor is treated as negative infinity so that finite values next to
//!   a sentinel can still qualify as peaks.
//! * **Plateau handling**: A point qualifies when it strictly exceeds its
//!   left neighbor and is at least its right neighbor, so flat-topped peaks
//!   contribute their leftmost point exactly once.
//! * **Determinism**: Ranking ties break toward the lower index (lower
//!   frequency).
//! * **Fallback**: If the scan rules produce no candidate, the global
//!   finite maximum is returned, so refinement always has a seed when any
//!   value is finite.
//!
//! ## Non-goals
//!
//! * This module does not refine frequencies (see `engine::refine`).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::cmp::Ordering;
use num_traits::Float;

/// Indices of the local maxima of `power`, ranked by descending value.
///
/// Non-finite entries never qualify and are treated as negative infinity
/// when they appear as neighbors. Endpoints qualify against their single
/// neighbor. If no interior or boundary maximum exists, the global finite
/// maximum is returned; an all-sentinel input yields an empty vector.
pub fn peak_indices<T: Float>(power: &[T]) -> Vec<usize> {
    let n = power.len();
    let mut peaks: Vec<usize> = Vec::new();

    let at = |i: usize| -> T {
        if power[i].is_finite() {
            power[i]
        } else {
            T::neg_infinity()
        }
    };

    for i in 0..n {
        if !power[i].is_finite() {
            continue;
        }
        let left_ok = i == 0 || at(i) > at(i - 1);
        let right_ok = i + 1 == n || at(i) >= at(i + 1);
        if left_ok && right_ok {
            peaks.push(i);
        }
    }

    // Fall back to the global finite maximum so callers always get a seed
    // when any value is finite.
    if peaks.is_empty() {
        let mut best: Option<usize> = None;
        for i in 0..n {
            if !power[i].is_finite() {
                continue;
            }
            best = match best {
                Some(b) if power[b] >= power[i] => Some(b),
                _ => Some(i),
            };
        }
        if let Some(b) = best {
            peaks.push(b);
        }
    }

    // Rank by descending value, ties toward the lower frequency
    peaks.sort_by(|&a, &b| {
        power[b]
            .partial_cmp(&power[a])
            .unwrap_or(Ordering::Equal)
            .then(a.cmp(&b))
    });

    peaks
}

/// The `k` best-ranked peak indices.
pub fn top_peaks<T: Float>(power: &[T], k: usize) -> Vec<usize> {
    let mut peaks = peak_indices(power);
    peaks.truncate(k);
    peaks
}
