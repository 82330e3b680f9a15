//! Execution engine for correntropy periodogram computation.
//!
//! ## Purpose
//!
//! This module provides the core execution engine that orchestrates a
//! periodogram run. It whitens the series, derives the kernel bandwidth
//! once, derives the trial frequency grid, and drives the fold-and-evaluate
//! loop over the grid. The grid scan itself is replaceable through a
//! function-pointer hook so extension crates can substitute a parallel
//! implementation.
//!
//! ## Design notes
//!
//! * Driven entirely by an explicit [`CkpConfig`]; no process-wide state.
//! * The bandwidth and whitened columns are computed once per series and
//!   shared read-only by every frequency evaluation.
//! * A single [`FoldBuffer`] is recycled across the whole sequential scan;
//!   parallel scans hold one buffer per worker.
//! * Per-frequency failures are recorded as the `NaN` sentinel and never
//!   abort the scan; only the one-time whitening/bandwidth computation can
//!   fail a run.
//! * Generic over `Float` types to support f32 and f64.
//!
//! ## Invariants
//!
//! * The output power column has exactly one entry per grid frequency, in
//!   grid order, regardless of how the scan executed.
//! * The series is read-only for the duration of a run.
//!
//! ## Non-goals
//!
//! * This module does not validate configuration (handled by `validator`).
//! * This module does not refine frequencies (handled by `refine`).
//! * This module does not handle parallel execution directly (extension
//!   crates inject it through the grid-pass hook).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::folding::fold_into;
use crate::algorithms::statistic::{CorrentropyContext, StatisticKind};
use crate::evaluation::grid::FrequencyGrid;
use crate::math::bandwidth::BandwidthRule;
use crate::primitives::buffer::FoldBuffer;
use crate::primitives::errors::CkpError;
use crate::primitives::series::{NormalizedSeries, TimeSeries};

// Publicly re-exported for extension crates
pub use crate::engine::output::Periodogram;

// ============================================================================
// Type Definitions
// ============================================================================

/// Signature for a custom grid-scan pass.
///
/// Extension crates substitute this to parallelize the scan. The pass must
/// write one statistic value (or the `NaN` sentinel) per trial frequency,
/// by grid index.
#[doc(hidden)]
pub type GridPassFn<T> = fn(
    &[T],     // timestamps (sorted)
    &[T],     // whitened magnitudes
    &[T],     // whitened uncertainties
    T,        // kernel bandwidth
    u8,       // statistic flag (StatisticKind encoding)
    &[T],     // trial frequencies
    &mut [T], // power output, grid order
);

// ============================================================================
// Configuration
// ============================================================================

/// Default oversampling factor for grid derivation.
pub const DEFAULT_OVERSAMPLING: f64 = 5.0;

/// Default number of refinement seeds.
pub const DEFAULT_TOP_K: usize = 5;

/// Default refinement iteration cap.
pub const DEFAULT_MAX_ITERATIONS: usize = 100;

/// Configuration for a periodogram run.
#[derive(Debug, Clone)]
pub struct CkpConfig<T> {
    /// Minimum trial frequency (exclusive of zero).
    pub freq_min: T,

    /// Maximum trial frequency.
    pub freq_max: T,

    /// Oversampling factor relative to the baseline resolution.
    pub oversampling: T,

    /// Statistic variant to evaluate.
    pub statistic: StatisticKind,

    /// Bandwidth rule; `None` selects the variant's default rule
    /// (`NoiseScaled` for weighted, `Silverman` for standard).
    pub bandwidth_rule: Option<BandwidthRule<T>>,

    /// Number of refinement seeds taken from the periodogram.
    pub top_k: usize,

    /// Refinement bracket-width tolerance; `None` selects
    /// `grid step * 1e-3`.
    pub refine_tolerance: Option<T>,

    /// Refinement iteration cap per seed.
    pub refine_max_iterations: usize,

    // ++++++++++++++++++++++++++++++++++++++
    // +               DEV                  +
    // ++++++++++++++++++++++++++++++++++++++
    /// Custom grid-scan pass (enables parallel execution).
    #[doc(hidden)]
    pub custom_grid_pass: Option<GridPassFn<T>>,

    /// Whether a parallel pass was requested.
    #[doc(hidden)]
    pub parallel: bool,
}

impl<T: Float> Default for CkpConfig<T> {
    fn default() -> Self {
        Self {
            freq_min: T::from(1e-3).unwrap(),
            freq_max: T::from(10.0).unwrap(),
            oversampling: T::from(DEFAULT_OVERSAMPLING).unwrap(),
            statistic: StatisticKind::default(),
            bandwidth_rule: None,
            top_k: DEFAULT_TOP_K,
            refine_tolerance: None,
            refine_max_iterations: DEFAULT_MAX_ITERATIONS,
            custom_grid_pass: None,
            parallel: false,
        }
    }
}

impl<T: Float> CkpConfig<T> {
    /// The bandwidth rule in effect: the configured rule, or the variant's
    /// default.
    pub fn effective_bandwidth_rule(&self) -> BandwidthRule<T> {
        self.bandwidth_rule.unwrap_or(match self.statistic {
            StatisticKind::Weighted => BandwidthRule::noise_scaled(),
            StatisticKind::Standard => BandwidthRule::silverman(),
        })
    }
}

// ============================================================================
// Executor Output
// ============================================================================

/// Output from a periodogram run.
#[derive(Debug, Clone)]
pub struct ExecutorOutput<T> {
    /// The finished periodogram, in grid order.
    pub periodogram: Periodogram<T>,

    /// The kernel bandwidth the run used.
    pub bandwidth: T,

    /// The whitened columns, reusable by the refinement stage.
    pub normalized: NormalizedSeries<T>,
}

// ============================================================================
// Executor
// ============================================================================

/// Unified executor for periodogram computation.
#[derive(Debug, Clone)]
pub struct CkpExecutor<T> {
    config: CkpConfig<T>,
}

impl<T: Float> CkpExecutor<T> {
    /// Create an executor from a configuration.
    pub fn from_config(config: CkpConfig<T>) -> Self {
        Self { config }
    }

    /// The configuration in effect.
    #[inline]
    pub fn config(&self) -> &CkpConfig<T> {
        &self.config
    }

    // ========================================================================
    // Main Entry Point
    // ========================================================================

    /// Compute the periodogram of `series`.
    ///
    /// Whitens the series and derives the bandwidth once, derives the grid,
    /// then scans it. The one-time steps surface their errors; individual
    /// frequency failures are recorded as the `NaN` sentinel.
    pub fn run(&self, series: &TimeSeries<T>) -> Result<ExecutorOutput<T>, CkpError> {
        // One-time whitening; fails for degenerate magnitude spreads
        let normalized = series.normalized()?;

        // One-time bandwidth; fails when the rule degenerates
        let mut scratch = Vec::with_capacity(series.len());
        let bandwidth = self.config.effective_bandwidth_rule().compute(
            &normalized.mags,
            &normalized.uncertainties,
            &mut scratch,
        )?;

        // Grid derivation needs a positive baseline
        let baseline = series.baseline();
        if !(baseline > T::zero()) {
            return Err(CkpError::InvalidValue(
                "time baseline is zero; all timestamps coincide".into(),
            ));
        }
        let grid = FrequencyGrid::derive(
            self.config.freq_min,
            self.config.freq_max,
            baseline,
            self.config.oversampling,
        );
        let step = grid.step();
        let frequencies = grid.into_frequencies();

        // Grid scan: custom pass (e.g. parallel) or the sequential pass
        let mut power = vec![T::nan(); frequencies.len()];
        if let Some(callback) = self.config.custom_grid_pass {
            callback(
                series.times(),
                &normalized.mags,
                &normalized.uncertainties,
                bandwidth,
                self.config.statistic.to_u8(),
                &frequencies,
                &mut power,
            );
        } else {
            let mut buf = FoldBuffer::with_capacity(series.len());
            grid_pass(
                series.times(),
                &normalized.mags,
                &normalized.uncertainties,
                bandwidth,
                self.config.statistic.to_u8(),
                &frequencies,
                &mut power,
                &mut buf,
            );
        }

        Ok(ExecutorOutput {
            periodogram: Periodogram::new(frequencies, power, step, bandwidth),
            bandwidth,
            normalized,
        })
    }
}

// ============================================================================
// Grid Scan
// ============================================================================

/// Perform a sequential fold-and-evaluate pass over the whole grid.
///
/// One [`FoldBuffer`] is recycled across every trial frequency. Matches the
/// [`GridPassFn`] shape except for the explicit buffer parameter.
#[allow(clippy::too_many_arguments)]
pub fn grid_pass<T: Float>(
    times: &[T],
    mags: &[T],
    uncertainties: &[T],
    bandwidth: T,
    statistic_flag: u8,
    frequencies: &[T],
    power: &mut [T],
    buf: &mut FoldBuffer<T>,
) {
    debug_assert_eq!(frequencies.len(), power.len());

    for (&frequency, out) in frequencies.iter().zip(power.iter_mut()) {
        *out = evaluate_frequency(
            times,
            mags,
            uncertainties,
            bandwidth,
            statistic_flag,
            frequency,
            buf,
        );
    }
}

/// Fold at one trial frequency and evaluate the statistic.
///
/// Returns the `NaN` sentinel instead of any non-finite statistic value, so
/// a single pathological fold never aborts a batch.
#[inline]
pub fn evaluate_frequency<T: Float>(
    times: &[T],
    mags: &[T],
    uncertainties: &[T],
    bandwidth: T,
    statistic_flag: u8,
    frequency: T,
    buf: &mut FoldBuffer<T>,
) -> T {
    fold_into(times, mags, uncertainties, frequency, buf);

    let ctx = CorrentropyContext {
        mags: &buf.mags,
        uncertainties: &buf.uncertainties,
        bandwidth,
        kind: StatisticKind::from_u8(statistic_flag),
    };
    let value = ctx.evaluate(buf.diffs.as_vec_mut(), buf.widths.as_vec_mut());

    if value.is_finite() {
        value
    } else {
        T::nan()
    }
}
