//! Local refinement of the best grid frequencies.
//!
//! ## Purpose
//!
//! This module sharpens the periodogram's best candidates beyond the grid
//! resolution. Each seed (a top-ranked grid peak) anchors a bounded
//! golden-section maximization of the statistic over one grid step on
//! either side; the best refined point across all seeds wins.
//!
//! ## Design notes
//!
//! * **Derivative-free**: Golden-section needs only statistic evaluations,
//!   which reuse the same fold-and-evaluate machinery as the grid scan.
//! * **Budgeted**: Each seed search stops when the bracket width drops
//!   below the tolerance or the iteration cap is reached; exhausting the
//!   cap yields the best point found so far with `converged = false`,
//!   never an error.
//! * **Sentinel-safe**: A non-finite statistic value inside the bracket is
//!   ranked below every finite value, so a pathological fold cannot win.
//! * **Deterministic**: Exact value ties across seeds break toward the
//!   lower frequency.
//!
//! ## Invariants
//!
//! * Search brackets are clamped to stay strictly positive.
//! * Every probed `(frequency, value)` pair is recorded in visit order.
//!
//! ## Non-goals
//!
//! * This module does not select the seeds (see `evaluation::peaks`).
//! * This module does not impose a wall-clock budget; callers may bound
//!   the iteration cap instead.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::executor::evaluate_frequency;
use crate::engine::output::{OptimizationResult, Periodogram};
use crate::evaluation::peaks::top_peaks;
use crate::primitives::buffer::FoldBuffer;
use crate::primitives::errors::CkpError;

// ============================================================================
// Constants
// ============================================================================

/// Inverse golden ratio, the bracket shrink factor per iteration.
const INV_PHI: f64 = 0.6180339887498948482045868343656381177203091798058_f64;

/// Default tolerance as a fraction of the grid step.
const DEFAULT_TOLERANCE_FRACTION: f64 = 1e-3;

// ============================================================================
// Parameters
// ============================================================================

/// Parameters for the refinement stage.
#[derive(Debug, Clone, Copy)]
pub struct RefineParams<T> {
    /// Number of seeds taken from the periodogram.
    pub top_k: usize,

    /// Bracket-width tolerance; `None` selects `grid step * 1e-3`.
    pub tolerance: Option<T>,

    /// Iteration cap per seed.
    pub max_iterations: usize,
}

// ============================================================================
// Refinement
// ============================================================================

/// Refine the best periodogram frequencies by local search.
///
/// `times`, `mags`, and `uncertainties` are the sorted timestamps and the
/// whitened columns of the series the periodogram was computed from, and
/// `bandwidth`/`statistic_flag` must match that run so the refined values
/// are comparable to the grid values.
#[allow(clippy::too_many_arguments)]
pub fn refine<T: Float>(
    times: &[T],
    mags: &[T],
    uncertainties: &[T],
    bandwidth: T,
    statistic_flag: u8,
    periodogram: &Periodogram<T>,
    params: &RefineParams<T>,
) -> Result<OptimizationResult<T>, CkpError> {
    let seeds = top_peaks(periodogram.power(), params.top_k);
    if seeds.is_empty() {
        return Err(CkpError::NonFinitePeriodogram);
    }

    let step = periodogram.step();
    let tolerance = params
        .tolerance
        .unwrap_or_else(|| step * T::from(DEFAULT_TOLERANCE_FRACTION).unwrap());

    let mut buf = FoldBuffer::with_capacity(times.len());
    let mut samples: Vec<(T, T)> = Vec::new();

    let mut best: Option<SeedOutcome<T>> = None;
    for &seed_idx in &seeds {
        let seed = periodogram.frequencies()[seed_idx];
        let lo = (seed - step).max(T::min_positive_value());
        let hi = seed + step;

        let outcome = golden_section_max(
            |f, b| {
                evaluate_frequency(times, mags, uncertainties, bandwidth, statistic_flag, f, b)
            },
            lo,
            hi,
            tolerance,
            params.max_iterations,
            &mut buf,
            &mut samples,
        );

        best = match best {
            None => Some(outcome),
            Some(current) if outcome.beats(&current) => Some(outcome),
            Some(current) => Some(current),
        };
    }

    // seeds is non-empty, so best is always populated
    let winner = best.ok_or(CkpError::NonFinitePeriodogram)?;

    Ok(OptimizationResult {
        frequency: winner.frequency,
        value: winner.value,
        converged: winner.converged,
        samples,
    })
}

// ============================================================================
// Golden-Section Search
// ============================================================================

/// Outcome of one seed's bounded search.
#[derive(Debug, Clone, Copy)]
struct SeedOutcome<T> {
    frequency: T,
    value: T,
    converged: bool,
}

impl<T: Float> SeedOutcome<T> {
    /// Whether this outcome beats `other`: higher value wins, exact value
    /// ties break toward the lower frequency. Non-finite values lose to
    /// everything finite.
    fn beats(&self, other: &Self) -> bool {
        match (self.value.is_finite(), other.value.is_finite()) {
            (true, false) => return true,
            (false, _) => return false,
            _ => {}
        }
        if self.value > other.value {
            return true;
        }
        self.value == other.value && self.frequency < other.frequency
    }
}

/// Maximize `objective` over `[lo, hi]` by golden-section search.
///
/// Probes two interior points per bracket, keeps the sub-bracket containing
/// the larger value, and reuses the surviving interior evaluation so each
/// iteration costs one statistic evaluation. Every probe is appended to
/// `samples`.
fn golden_section_max<T, F>(
    mut objective: F,
    lo: T,
    hi: T,
    tolerance: T,
    max_iterations: usize,
    buf: &mut FoldBuffer<T>,
    samples: &mut Vec<(T, T)>,
) -> SeedOutcome<T>
where
    T: Float,
    F: FnMut(T, &mut FoldBuffer<T>) -> T,
{
    let inv_phi = T::from(INV_PHI).unwrap();

    let mut a = lo;
    let mut b = hi;
    let mut c = b - inv_phi * (b - a);
    let mut d = a + inv_phi * (b - a);

    let mut probe = |f: T, fold: &mut FoldBuffer<T>, samples: &mut Vec<(T, T)>| -> T {
        let v = objective(f, fold);
        samples.push((f, v));
        v
    };

    let mut fc = probe(c, buf, samples);
    let mut fd = probe(d, buf, samples);

    // Track the best probe seen; the final bracket midpoint is not
    // guaranteed to beat an interior evaluation when the cap is hit early.
    let mut best_f = if ranked(fc) >= ranked(fd) { c } else { d };
    let mut best_v = if ranked(fc) >= ranked(fd) { fc } else { fd };

    for _ in 0..max_iterations {
        if (b - a) <= tolerance {
            break;
        }

        if ranked(fc) > ranked(fd) {
            b = d;
            d = c;
            fd = fc;
            c = b - inv_phi * (b - a);
            fc = probe(c, buf, samples);
        } else {
            a = c;
            c = d;
            fc = fd;
            d = a + inv_phi * (b - a);
            fd = probe(d, buf, samples);
        }

        let (f, v) = if ranked(fc) >= ranked(fd) { (c, fc) } else { (d, fd) };
        if ranked(v) > ranked(best_v) || (v == best_v && f < best_f) {
            best_f = f;
            best_v = v;
        }
    }
    let converged = (b - a) <= tolerance;

    SeedOutcome {
        frequency: best_f,
        value: best_v,
        converged,
    }
}

/// Rank a statistic value for comparisons: the `NaN` sentinel sorts below
/// every finite value.
#[inline]
fn ranked<T: Float>(value: T) -> T {
    if value.is_finite() {
        value
    } else {
        T::neg_infinity()
    }
}
