//! Time series container for light-curve observations.
//!
//! ## Purpose
//!
//! This module provides the owned, validated container every other component
//! operates on: timestamps, magnitudes, and per-point uncertainties, sorted
//! by timestamp, together with the whitening transform that makes the
//! correntropy statistic shift- and scale-invariant.
//!
//! ## Design notes
//!
//! * **Validate-then-own**: Construction validates shape, finiteness, and
//!   sign, then copies the columns; caller arrays are never mutated.
//! * **Sorted**: Columns are stable-sorted by timestamp if needed and the
//!   container records whether resorting occurred.
//! * **Weighting**: Inverse-variance weights are used for the mean and
//!   standard deviation when every uncertainty is strictly positive;
//!   otherwise weights fall back to uniform so that zero uncertainties do
//!   not poison the normalization.
//!
//! ## Key concepts
//!
//! * **Baseline**: Total observed time span, `max(t) - min(t)`; it sets the
//!   natural frequency resolution of a grid scan.
//! * **Whitening**: `(m - mean_w) / std_w` with uncertainties scaled by the
//!   same factor, computed once per series.
//!
//! ## Invariants
//!
//! * Length >= 2, all values finite, uncertainties >= 0.
//! * Timestamps are non-decreasing after construction.
//! * The container is read-only during a computation.
//!
//! ## Non-goals
//!
//! * This module does not fold phases or evaluate statistics.
//! * This module does not read light-curve files.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;
#[cfg(not(feature = "std"))]
use alloc::vec;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::CkpError;
use crate::primitives::sorting::sort_by_time;

// ============================================================================
// Time Series Container
// ============================================================================

/// An irregularly sampled, noisy time series, sorted by timestamp.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeSeries<T> {
    times: Vec<T>,
    mags: Vec<T>,
    uncertainties: Vec<T>,
    weighted: bool,
    resorted: bool,
}

impl<T: Float> TimeSeries<T> {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Build a time series from raw observation columns.
    ///
    /// Columns are validated (equal lengths, finite values, non-negative
    /// uncertainties, at least 2 points) and stable-sorted by timestamp if
    /// they are not already sorted. The caller's arrays are left untouched.
    pub fn from_arrays(
        times: &[T],
        mags: &[T],
        uncertainties: &[T],
    ) -> Result<Self, CkpError> {
        validate_columns(times, mags, uncertainties)?;

        let sorted = sort_by_time(times, mags, uncertainties);
        Ok(Self {
            times: sorted.times,
            mags: sorted.mags,
            uncertainties: sorted.uncertainties,
            weighted: true,
            resorted: sorted.resorted,
        })
    }

    /// Build an unweighted time series (uniform unit uncertainty).
    pub fn from_unweighted(times: &[T], mags: &[T]) -> Result<Self, CkpError> {
        let uniform = vec![T::one(); times.len()];
        let mut series = Self::from_arrays(times, mags, &uniform)?;
        series.weighted = false;
        Ok(series)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Number of observations.
    #[inline]
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// Whether the series holds no observations (never true after construction).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Timestamps, sorted ascending.
    #[inline]
    pub fn times(&self) -> &[T] {
        &self.times
    }

    /// Magnitudes, in timestamp order.
    #[inline]
    pub fn mags(&self) -> &[T] {
        &self.mags
    }

    /// Per-point uncertainties, in timestamp order.
    #[inline]
    pub fn uncertainties(&self) -> &[T] {
        &self.uncertainties
    }

    /// Whether construction had to reorder the observations.
    #[inline]
    pub fn resorted(&self) -> bool {
        self.resorted
    }

    /// Whether per-point uncertainties were supplied (vs. uniform unit).
    #[inline]
    pub fn is_weighted(&self) -> bool {
        self.weighted
    }

    /// Total observed time span, `max(t) - min(t)`.
    #[inline]
    pub fn baseline(&self) -> T {
        match (self.times.first(), self.times.last()) {
            (Some(&first), Some(&last)) => last - first,
            _ => T::zero(),
        }
    }

    // ========================================================================
    // Weighted Moments
    // ========================================================================

    /// Weighted mean of the magnitudes.
    ///
    /// Weights are inverse variances `1 / u^2` when every uncertainty is
    /// strictly positive, uniform otherwise.
    pub fn weighted_mean(&self) -> T {
        let (sum, total) = self.fold_weighted(|m| m);
        sum / total
    }

    /// Weighted standard deviation of the magnitudes around the weighted mean.
    pub fn weighted_std(&self) -> T {
        let mean = self.weighted_mean();
        let (sum, total) = self.fold_weighted(|m| {
            let d = m - mean;
            d * d
        });
        (sum / total).sqrt()
    }

    /// Accumulate `f(m_i) * w_i` and `w_i` over all observations.
    fn fold_weighted<F: Fn(T) -> T>(&self, f: F) -> (T, T) {
        let use_inverse_variance =
            self.weighted && self.uncertainties.iter().all(|&u| u > T::zero());

        let mut sum = T::zero();
        let mut total = T::zero();
        for i in 0..self.mags.len() {
            let w = if use_inverse_variance {
                T::one() / (self.uncertainties[i] * self.uncertainties[i])
            } else {
                T::one()
            };
            sum = sum + f(self.mags[i]) * w;
            total = total + w;
        }
        (sum, total)
    }

    // ========================================================================
    // Whitening
    // ========================================================================

    /// Whiten the series: subtract the weighted mean and divide magnitudes
    /// and uncertainties by the weighted standard deviation.
    ///
    /// Fails with [`CkpError::DegenerateBandwidth`] when the magnitude
    /// spread collapses (constant magnitudes), since no finite-bandwidth
    /// density estimate exists for such a series.
    pub fn normalized(&self) -> Result<NormalizedSeries<T>, CkpError> {
        let mean = self.weighted_mean();
        let scale = self.weighted_std();

        if !(scale > T::zero()) || !scale.is_finite() {
            return Err(CkpError::DegenerateBandwidth {
                bandwidth: scale.to_f64().unwrap_or(f64::NAN),
            });
        }

        let mags = self.mags.iter().map(|&m| (m - mean) / scale).collect();
        let uncertainties = self.uncertainties.iter().map(|&u| u / scale).collect();

        Ok(NormalizedSeries {
            mags,
            uncertainties,
        })
    }
}

// ============================================================================
// Normalized View
// ============================================================================

/// Whitened magnitude and uncertainty columns, in timestamp order.
///
/// Computed once per series and shared (read-only) by every frequency
/// evaluation of a grid scan.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedSeries<T> {
    /// Magnitudes with the weighted mean removed, scaled to unit weighted
    /// standard deviation.
    pub mags: Vec<T>,

    /// Uncertainties divided by the weighted standard deviation.
    pub uncertainties: Vec<T>,
}

// ============================================================================
// Input Validation
// ============================================================================

/// Minimum number of observations for any statistic to be defined.
pub const MIN_POINTS: usize = 2;

fn validate_columns<T: Float>(
    times: &[T],
    mags: &[T],
    uncertainties: &[T],
) -> Result<(), CkpError> {
    // Check 1: Non-empty arrays
    if times.is_empty() || mags.is_empty() || uncertainties.is_empty() {
        return Err(CkpError::EmptyInput);
    }

    // Check 2: Matching lengths
    let n = times.len();
    if n != mags.len() || n != uncertainties.len() {
        return Err(CkpError::InputShape {
            times_len: n,
            mags_len: mags.len(),
            uncertainties_len: uncertainties.len(),
        });
    }

    // Check 3: Sufficient points
    if n < MIN_POINTS {
        return Err(CkpError::TooFewPoints {
            got: n,
            min: MIN_POINTS,
        });
    }

    // Check 4: All values finite, uncertainties non-negative
    // (combined loop for cache locality)
    for i in 0..n {
        if !times[i].is_finite() {
            return Err(CkpError::InvalidValue(format!(
                "times[{}]={}",
                i,
                times[i].to_f64().unwrap_or(f64::NAN)
            )));
        }
        if !mags[i].is_finite() {
            return Err(CkpError::InvalidValue(format!(
                "mags[{}]={}",
                i,
                mags[i].to_f64().unwrap_or(f64::NAN)
            )));
        }
        if !uncertainties[i].is_finite() {
            return Err(CkpError::InvalidValue(format!(
                "uncertainties[{}]={}",
                i,
                uncertainties[i].to_f64().unwrap_or(f64::NAN)
            )));
        }
        if uncertainties[i] < T::zero() {
            return Err(CkpError::NegativeUncertainty {
                index: i,
                value: uncertainties[i].to_f64().unwrap_or(f64::NAN),
            });
        }
    }

    Ok(())
}
