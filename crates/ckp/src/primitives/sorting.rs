//! Sorting utilities for time series and folded phases.
//!
//! ## Purpose
//!
//! This module provides the two orderings the engine relies on: sorting raw
//! observations by timestamp at construction time, and re-ranking folded
//! phases at every trial frequency of a grid scan.
//!
//! ## Design notes
//!
//! * **Stability**: Timestamp sorting is stable to preserve the relative order
//!   of duplicate timestamps.
//! * **Determinism**: The phase argsort breaks ties on the original index, so
//!   an unstable (allocation-free) sort still yields a reproducible order.
//! * **Efficiency**: The phase argsort reuses a caller-owned index buffer;
//!   the grid scan performs one argsort per trial frequency and must not
//!   allocate per iteration.
//!
//! ## Invariants
//!
//! * Sorted timestamps are non-decreasing.
//! * The index buffer after `argsort_by_phase` is a permutation of `0..n`.
//!
//! ## Non-goals
//!
//! * This module does not perform data validation or phase folding.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use core::cmp::Ordering;
use num_traits::Float;

// ============================================================================
// Data Structures
// ============================================================================

/// Result of sorting raw observation columns by timestamp.
pub struct SortedColumns<T> {
    /// Sorted timestamps.
    pub times: Vec<T>,

    /// Magnitudes reordered to match the sorted timestamps.
    pub mags: Vec<T>,

    /// Uncertainties reordered to match the sorted timestamps.
    pub uncertainties: Vec<T>,

    /// Whether any reordering actually occurred.
    pub resorted: bool,
}

// ============================================================================
// Sorting Functions
// ============================================================================

/// Sort observation columns by timestamp in ascending order.
///
/// 1. Checks if the data is already sorted (fast path, no copy reordering).
/// 2. Pairs timestamps with original indices and stable-sorts the pairs.
///    - Only the timestamp and index are sorted to keep the tuple small and
///      reduce data movement.
/// 3. Gathers all three columns through the permutation.
pub fn sort_by_time<T: Float>(times: &[T], mags: &[T], uncertainties: &[T]) -> SortedColumns<T> {
    // Fast path: already sorted by time
    let is_sorted = times.windows(2).all(|w| w[0] <= w[1]);
    if is_sorted {
        return SortedColumns {
            times: times.to_vec(),
            mags: mags.to_vec(),
            uncertainties: uncertainties.to_vec(),
            resorted: false,
        };
    }

    // Stable sort of (timestamp, original index) pairs preserves the relative
    // order of duplicate timestamps.
    let mut pairs: Vec<(T, usize)> = times.iter().enumerate().map(|(i, &t)| (t, i)).collect();
    pairs.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));

    SortedColumns {
        times: pairs.iter().map(|p| p.0).collect(),
        mags: pairs.iter().map(|p| mags[p.1]).collect(),
        uncertainties: pairs.iter().map(|p| uncertainties[p.1]).collect(),
        resorted: true,
    }
}

/// Rank `order` so that `phases[order[0]] <= phases[order[1]] <= ...`.
///
/// The caller provides `order` as a reusable buffer; it is refilled with
/// `0..n` and sorted in place. Ties on phase are broken by the original
/// index, which makes `sort_unstable_by` deterministic without the scratch
/// allocation a stable sort would need.
#[inline]
pub fn argsort_by_phase<T: Float>(phases: &[T], order: &mut Vec<usize>) {
    let n = phases.len();

    order.clear();
    order.extend(0..n);

    order.sort_unstable_by(|&a, &b| {
        phases[a]
            .partial_cmp(&phases[b])
            .unwrap_or(Ordering::Equal)
            .then(a.cmp(&b))
    });
}
