//! Kernel bandwidth selection rules.
//!
//! This module provides the data-driven rules that turn a whitened series
//! into the single kernel bandwidth used by every frequency evaluation.
//! The bandwidth depends only on the magnitude and uncertainty
//! distributions, never on folding, so it is computed once per series.
//!
//! Two data-driven rules are provided. `NoiseScaled` ties the kernel width
//! to the measurement noise (the propagated uncertainty of a typical pair)
//! and is the default for the weighted statistic. `Silverman` applies the
//! classic plug-in rule to the whitened magnitudes and is the default for
//! the standard statistic. Both degenerate to an error, never to a silent
//! zero-width kernel.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::cmp::Ordering::Equal;
use num_traits::Float;

// Internal dependencies
use crate::primitives::buffer::VecExt;
use crate::primitives::errors::CkpError;

// ============================================================================
// Rule Constants
// ============================================================================

/// Silverman plug-in prefactor.
const SILVERMAN_FACTOR: f64 = 0.9;

/// Normal-consistency divisor for the interquartile range.
const IQR_NORMAL: f64 = 1.34;

/// Square root of 2, the propagation factor for a pair of equal uncertainties.
const SQRT_2: f64 = 1.4142135623730950488016887242096980785696718753769_f64;

// ============================================================================
// Bandwidth Rules
// ============================================================================

/// Rule for deriving the kernel bandwidth from a whitened series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BandwidthRule<T> {
    /// Noise-scaled rule: `h = multiplier * sqrt(2) * median(u)`.
    ///
    /// `u` are the whitened uncertainties; `sqrt(2) * median(u)` is the
    /// propagated uncertainty of a typical equal-noise pair. Degenerates
    /// when the median uncertainty is zero (e.g. all-zero uncertainties).
    NoiseScaled {
        /// Scale factor applied to the data-driven width (default 1).
        multiplier: T,
    },

    /// Silverman plug-in rule on the whitened magnitudes:
    /// `h = multiplier * 0.9 * min(1, IQR / 1.34) * n^(-1/5)`.
    ///
    /// The whitened magnitudes have unit weighted standard deviation, so the
    /// scale term reduces to `min(1, IQR / 1.34)`. Degenerates when the
    /// interquartile range collapses to zero.
    Silverman {
        /// Scale factor applied to the data-driven width (default 1).
        multiplier: T,
    },

    /// A caller-supplied bandwidth, used as-is.
    ///
    /// Degenerates unless the value is finite and strictly positive.
    Fixed(T),
}

impl<T: Float> BandwidthRule<T> {
    /// Noise-scaled rule with unit multiplier.
    #[inline]
    pub fn noise_scaled() -> Self {
        Self::NoiseScaled {
            multiplier: T::one(),
        }
    }

    /// Silverman rule with unit multiplier.
    #[inline]
    pub fn silverman() -> Self {
        Self::Silverman {
            multiplier: T::one(),
        }
    }

    /// Get the name of the rule.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::NoiseScaled { .. } => "NoiseScaled",
            Self::Silverman { .. } => "Silverman",
            Self::Fixed(_) => "Fixed",
        }
    }

    /// Compute the bandwidth for a whitened series.
    ///
    /// `mags` and `uncertainties` are the whitened columns; `scratch` is a
    /// reusable buffer for the in-place quantile selection. Returns
    /// [`CkpError::DegenerateBandwidth`] whenever the resulting bandwidth is
    /// not finite and strictly positive.
    pub fn compute(
        &self,
        mags: &[T],
        uncertainties: &[T],
        scratch: &mut Vec<T>,
    ) -> Result<T, CkpError> {
        let h = match *self {
            Self::NoiseScaled { multiplier } => {
                scratch.assign_slice(uncertainties);
                let median = median_inplace(scratch);
                multiplier * T::from(SQRT_2).unwrap() * median
            }
            Self::Silverman { multiplier } => {
                scratch.assign_slice(mags);
                let q1 = quantile_inplace(scratch, 0.25);
                scratch.assign_slice(mags);
                let q3 = quantile_inplace(scratch, 0.75);

                let iqr_scale = (q3 - q1) / T::from(IQR_NORMAL).unwrap();
                let spread = T::one().min(iqr_scale);
                let n_factor = T::from(mags.len()).unwrap().powf(T::from(-0.2).unwrap());

                multiplier * T::from(SILVERMAN_FACTOR).unwrap() * spread * n_factor
            }
            Self::Fixed(h) => h,
        };

        if !h.is_finite() || h <= T::zero() {
            return Err(CkpError::DegenerateBandwidth {
                bandwidth: h.to_f64().unwrap_or(f64::NAN),
            });
        }

        Ok(h)
    }
}

// ============================================================================
// In-Place Order Statistics
// ============================================================================

/// Compute the median in-place using Quickselect.
pub fn median_inplace<T: Float>(vals: &mut [T]) -> T {
    let n = vals.len();
    if n == 0 {
        return T::zero();
    }

    let mid = n / 2;

    if n % 2 == 0 {
        // Even length: average of the two middle values
        vals.select_nth_unstable_by(mid, |a, b| a.partial_cmp(b).unwrap_or(Equal));
        let upper = vals[mid];

        // Largest value in the lower half
        let mut lower = vals[0];
        let mut i = 1;
        while i < mid {
            if vals[i] > lower {
                lower = vals[i];
            }
            i += 1;
        }

        (lower + upper) / T::from(2.0).unwrap_or_else(|| T::one() + T::one())
    } else {
        // Odd length: middle value
        vals.select_nth_unstable_by(mid, |a, b| a.partial_cmp(b).unwrap_or(Equal));
        vals[mid]
    }
}

/// Compute the nearest-rank `q`-quantile in-place using Quickselect.
///
/// `q` must be in `[0, 1]`; the rank is `round(q * (n - 1))`.
pub fn quantile_inplace<T: Float>(vals: &mut [T], q: f64) -> T {
    let n = vals.len();
    if n == 0 {
        return T::zero();
    }

    let rank = (q * (n - 1) as f64).round() as usize;
    let rank = rank.min(n - 1);

    vals.select_nth_unstable_by(rank, |a, b| a.partial_cmp(b).unwrap_or(Equal));
    vals[rank]
}
