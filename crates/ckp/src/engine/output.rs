//! Output types for periodogram computation and refinement.
//!
//! ## Purpose
//!
//! This module defines the [`Periodogram`] produced by a grid scan and the
//! [`OptimizationResult`] produced by local refinement. Both are immutable
//! once constructed and expose their contents as plain numeric sequences
//! for downstream plotting and selection tooling.
//!
//! ## Design notes
//!
//! * **Grid order**: Periodogram entries are stored in frequency-grid order
//!   regardless of how the scan executed.
//! * **Sentinel**: A trial frequency whose evaluation failed holds `NaN` in
//!   the power column; consumers skip non-finite entries.
//! * **Ergonomics**: Implements `Display` for human-readable output.
//!
//! ## Invariants
//!
//! * `frequencies` and `power` always have equal length.
//! * `frequencies` exactly matches the grid the scan was built from.
//! * Refinement samples are stored in visit order.
//!
//! ## Non-goals
//!
//! * This module does not perform calculations; it only stores results.
//! * This module does not provide serialization logic.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{Debug, Display, Formatter, Result};
use num_traits::Float;

// Internal dependencies
use crate::evaluation::peaks::top_peaks;

// ============================================================================
// Periodogram
// ============================================================================

/// A correntropy periodogram: one statistic value per trial frequency.
#[derive(Debug, Clone, PartialEq)]
pub struct Periodogram<T> {
    frequencies: Vec<T>,
    power: Vec<T>,
    step: T,
    bandwidth: T,
}

impl<T: Float> Periodogram<T> {
    /// Assemble a periodogram from a finished grid scan.
    pub(crate) fn new(frequencies: Vec<T>, power: Vec<T>, step: T, bandwidth: T) -> Self {
        debug_assert_eq!(frequencies.len(), power.len());
        Self {
            frequencies,
            power,
            step,
            bandwidth,
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Number of grid entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.frequencies.len()
    }

    /// Whether the periodogram holds no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }

    /// Trial frequencies, in grid order.
    #[inline]
    pub fn frequencies(&self) -> &[T] {
        &self.frequencies
    }

    /// Statistic values, in grid order. Failed entries hold `NaN`.
    #[inline]
    pub fn power(&self) -> &[T] {
        &self.power
    }

    /// Both columns as parallel numeric sequences.
    #[inline]
    pub fn as_arrays(&self) -> (&[T], &[T]) {
        (&self.frequencies, &self.power)
    }

    /// The grid spacing the scan used.
    #[inline]
    pub fn step(&self) -> T {
        self.step
    }

    /// The kernel bandwidth the scan used.
    #[inline]
    pub fn bandwidth(&self) -> T {
        self.bandwidth
    }

    // ========================================================================
    // Query Methods
    // ========================================================================

    /// The best finite entry, as `(frequency, value)`.
    pub fn peak(&self) -> Option<(T, T)> {
        let mut best: Option<usize> = None;
        for i in 0..self.power.len() {
            if !self.power[i].is_finite() {
                continue;
            }
            best = match best {
                Some(b) if self.power[b] >= self.power[i] => Some(b),
                _ => Some(i),
            };
        }
        best.map(|i| (self.frequencies[i], self.power[i]))
    }

    /// The `k` best-ranked local maxima, as `(frequency, value)` pairs.
    pub fn top_k(&self, k: usize) -> Vec<(T, T)> {
        top_peaks(&self.power, k)
            .into_iter()
            .map(|i| (self.frequencies[i], self.power[i]))
            .collect()
    }

    /// Number of grid entries holding the failure sentinel.
    pub fn sentinel_count(&self) -> usize {
        self.power.iter().filter(|p| !p.is_finite()).count()
    }
}

// ============================================================================
// Periodogram Display
// ============================================================================

impl<T: Float + Display + Debug> Display for Periodogram<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Grid frequencies: {}", self.len())?;
        writeln!(f, "  Grid step:        {}", self.step)?;
        writeln!(f, "  Bandwidth:        {}", self.bandwidth)?;
        if self.sentinel_count() > 0 {
            writeln!(f, "  Failed entries:   {}", self.sentinel_count())?;
        }
        if let Some((freq, value)) = self.peak() {
            writeln!(f, "  Peak:             {} (value {})", freq, value)?;
        }
        writeln!(f)?;

        writeln!(f, "Periodogram:")?;
        writeln!(f, "{:>14} {:>14}", "Frequency", "Value")?;
        writeln!(f, "{:-<29}", "")?;

        // Show first 10 and last 10 rows if more than 20 entries
        let n = self.len();
        let show_all = n <= 20;
        let rows_to_show: Vec<usize> = if show_all {
            (0..n).collect()
        } else {
            (0..10).chain(n - 10..n).collect()
        };

        let mut prev_idx = 0;
        for (i, &idx) in rows_to_show.iter().enumerate() {
            if i > 0 && idx != prev_idx + 1 {
                writeln!(f, "{:>14}", "...")?;
            }
            prev_idx = idx;

            writeln!(
                f,
                "{:>14.6} {:>14.6}",
                self.frequencies[idx], self.power[idx]
            )?;
        }

        Ok(())
    }
}

// ============================================================================
// Optimization Result
// ============================================================================

/// The outcome of local frequency refinement.
#[derive(Debug, Clone, PartialEq)]
pub struct OptimizationResult<T> {
    /// The best frequency found across all seeds.
    pub frequency: T,

    /// The statistic value at the best frequency.
    pub value: T,

    /// Whether the winning seed's search converged within the iteration
    /// budget. A `false` value still carries the best point found so far.
    pub converged: bool,

    /// Every `(frequency, value)` pair visited during the search, across
    /// all seeds, in visit order.
    pub samples: Vec<(T, T)>,
}

impl<T: Float + Display> Display for OptimizationResult<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Refinement:")?;
        writeln!(f, "  Best frequency: {}", self.frequency)?;
        writeln!(f, "  Value:          {}", self.value)?;
        writeln!(f, "  Converged:      {}", self.converged)?;
        writeln!(f, "  Samples:        {}", self.samples.len())?;
        Ok(())
    }
}
