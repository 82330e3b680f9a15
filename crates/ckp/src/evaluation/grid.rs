//! Trial frequency grid derivation.
//!
//! ## Purpose
//!
//! This module derives the ordered set of trial frequencies a grid scan
//! evaluates. The natural frequency resolution of an irregularly sampled
//! series is the reciprocal of its time baseline; the oversampling factor
//! packs that resolution more densely.
//!
//! ## Design notes
//!
//! * **Step rule**: `step = 1 / (oversampling * baseline)`.
//! * **Reconstruction, not accumulation**: Each grid frequency is computed
//!   as `min + k * step` from its integer index, so long grids do not
//!   accumulate floating-point drift.
//! * **Inclusive cover**: The grid starts at `freq_min` and ends at the
//!   last step that does not exceed `freq_max` (within floating-point
//!   tolerance of the step rule).
//!
//! ## Invariants
//!
//! * Frequencies are strictly increasing and all positive.
//! * The grid is never empty (it contains at least `freq_min`).
//!
//! ## Non-goals
//!
//! * This module does not evaluate statistics.
//! * This module does not validate the frequency range (the validator does).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// ============================================================================
// Frequency Grid
// ============================================================================

/// An ordered, strictly increasing set of trial frequencies.
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyGrid<T> {
    frequencies: Vec<T>,
    step: T,
}

impl<T: Float> FrequencyGrid<T> {
    /// Derive a grid from a frequency range, a time baseline, and an
    /// oversampling factor.
    ///
    /// The caller guarantees `0 < freq_min < freq_max`, `baseline > 0`, and
    /// `oversampling > 0` (enforced by the validator upstream).
    pub fn derive(freq_min: T, freq_max: T, baseline: T, oversampling: T) -> Self {
        let step = (oversampling * baseline).recip();

        // Number of whole steps that stay within the range. The relative
        // epsilon keeps a span that is an exact multiple of the step from
        // losing its last point to rounding.
        let span = freq_max - freq_min;
        let steps = (span / step) * (T::one() + T::from(1e-9).unwrap());
        let count = steps.floor().to_usize().unwrap_or(0);

        let frequencies = (0..=count)
            .map(|k| freq_min + T::from(k).unwrap() * step)
            .collect();

        Self { frequencies, step }
    }

    /// The trial frequencies, in ascending order.
    #[inline]
    pub fn frequencies(&self) -> &[T] {
        &self.frequencies
    }

    /// The grid spacing.
    #[inline]
    pub fn step(&self) -> T {
        self.step
    }

    /// Number of trial frequencies.
    #[inline]
    pub fn len(&self) -> usize {
        self.frequencies.len()
    }

    /// Whether the grid holds no frequencies (never true after `derive`).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }

    /// Consume the grid, returning the frequency vector.
    #[inline]
    pub fn into_frequencies(self) -> Vec<T> {
        self.frequencies
    }
}
