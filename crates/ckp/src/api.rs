//! High-level API for correntropy periodogram estimation.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point: a fluent
//! builder for configuring the estimator, the validated model it produces,
//! and the two one-shot convenience functions for computing and refining a
//! periodogram with default settings.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Validated**: Parameters are validated when `.build()` is called.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ## Key concepts
//!
//! * **Configuration Flow**: `Ckp::new()` → chained setters → `.build()` →
//!   [`CkpModel`] → `.periodogram(&series)` / `.refine(&series, &pgram)`.
//! * **Duplicate detection**: Setting the same parameter twice is an error
//!   surfaced at `.build()`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::executor::{CkpConfig, CkpExecutor, GridPassFn};
use crate::engine::refine::{refine, RefineParams};
use crate::engine::validator::Validator;

// Publicly re-exported types
pub use crate::algorithms::statistic::StatisticKind;
pub use crate::engine::output::{OptimizationResult, Periodogram};
pub use crate::math::bandwidth::BandwidthRule;
pub use crate::primitives::errors::CkpError;
pub use crate::primitives::series::TimeSeries;

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring a correntropy periodogram estimator.
#[derive(Debug, Clone)]
pub struct CkpBuilder<T> {
    /// Minimum trial frequency.
    pub freq_min: Option<T>,

    /// Maximum trial frequency.
    pub freq_max: Option<T>,

    /// Oversampling factor relative to the baseline resolution.
    pub oversampling: Option<T>,

    /// Statistic variant (standard vs. uncertainty-weighted).
    pub statistic: Option<StatisticKind>,

    /// Bandwidth rule; defaults to the variant's data-driven rule.
    pub bandwidth_rule: Option<BandwidthRule<T>>,

    /// Number of refinement seeds.
    pub top_k: Option<usize>,

    /// Refinement bracket-width tolerance.
    pub refine_tolerance: Option<T>,

    /// Refinement iteration cap per seed.
    pub refine_max_iterations: Option<usize>,

    // ======================================
    // DEV
    // ======================================
    /// Custom grid-scan pass function.
    #[doc(hidden)]
    pub custom_grid_pass: Option<GridPassFn<T>>,

    /// Parallel execution hint.
    #[doc(hidden)]
    pub parallel: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for CkpBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> CkpBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            freq_min: None,
            freq_max: None,
            oversampling: None,
            statistic: None,
            bandwidth_rule: None,
            top_k: None,
            refine_tolerance: None,
            refine_max_iterations: None,
            custom_grid_pass: None,
            parallel: None,
            duplicate_param: None,
        }
    }

    /// Set the trial frequency range `[min, max]`.
    pub fn frequency_range(mut self, min: T, max: T) -> Self {
        if self.freq_min.is_some() || self.freq_max.is_some() {
            self.duplicate_param = Some("frequency_range");
        }
        self.freq_min = Some(min);
        self.freq_max = Some(max);
        self
    }

    /// Set the oversampling factor for grid derivation.
    pub fn oversampling(mut self, oversampling: T) -> Self {
        if self.oversampling.is_some() {
            self.duplicate_param = Some("oversampling");
        }
        self.oversampling = Some(oversampling);
        self
    }

    /// Set the statistic variant.
    pub fn statistic(mut self, kind: StatisticKind) -> Self {
        if self.statistic.is_some() {
            self.duplicate_param = Some("statistic");
        }
        self.statistic = Some(kind);
        self
    }

    /// Set the bandwidth rule.
    pub fn bandwidth(mut self, rule: BandwidthRule<T>) -> Self {
        if self.bandwidth_rule.is_some() {
            self.duplicate_param = Some("bandwidth");
        }
        self.bandwidth_rule = Some(rule);
        self
    }

    /// Set the number of refinement seeds.
    pub fn top_k(mut self, top_k: usize) -> Self {
        if self.top_k.is_some() {
            self.duplicate_param = Some("top_k");
        }
        self.top_k = Some(top_k);
        self
    }

    /// Set the refinement bracket-width tolerance.
    pub fn refine_tolerance(mut self, tolerance: T) -> Self {
        if self.refine_tolerance.is_some() {
            self.duplicate_param = Some("refine_tolerance");
        }
        self.refine_tolerance = Some(tolerance);
        self
    }

    /// Set the refinement iteration cap per seed.
    pub fn refine_max_iterations(mut self, max_iterations: usize) -> Self {
        if self.refine_max_iterations.is_some() {
            self.duplicate_param = Some("refine_max_iterations");
        }
        self.refine_max_iterations = Some(max_iterations);
        self
    }

    // ==========================
    // Development Options
    // ==========================

    /// Set a custom grid-scan pass function (only for dev).
    #[doc(hidden)]
    pub fn custom_grid_pass(mut self, pass: GridPassFn<T>) -> Self {
        self.custom_grid_pass = Some(pass);
        self
    }

    /// Set parallel execution hint (only for dev).
    #[doc(hidden)]
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = Some(parallel);
        self
    }

    // ========================================================================
    // Build Method
    // ========================================================================

    /// Validate the configuration and build the estimator.
    pub fn build(self) -> Result<CkpModel<T>, CkpError> {
        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let defaults = CkpConfig::<T>::default();
        let config = CkpConfig {
            freq_min: self.freq_min.unwrap_or(defaults.freq_min),
            freq_max: self.freq_max.unwrap_or(defaults.freq_max),
            oversampling: self.oversampling.unwrap_or(defaults.oversampling),
            statistic: self.statistic.unwrap_or_default(),
            bandwidth_rule: self.bandwidth_rule,
            top_k: self.top_k.unwrap_or(defaults.top_k),
            refine_tolerance: self.refine_tolerance,
            refine_max_iterations: self
                .refine_max_iterations
                .unwrap_or(defaults.refine_max_iterations),
            custom_grid_pass: self.custom_grid_pass,
            parallel: self.parallel.unwrap_or(false),
        };

        // Validate parameters
        Validator::validate_frequency_range(config.freq_min, config.freq_max)?;
        Validator::validate_oversampling(config.oversampling)?;
        Validator::validate_top_k(config.top_k)?;
        Validator::validate_max_iterations(config.refine_max_iterations)?;
        if let Some(tol) = config.refine_tolerance {
            Validator::validate_tolerance(tol)?;
        }
        match config.bandwidth_rule {
            Some(BandwidthRule::Fixed(h)) => Validator::validate_fixed_bandwidth(h)?,
            Some(BandwidthRule::NoiseScaled { multiplier })
            | Some(BandwidthRule::Silverman { multiplier }) => {
                Validator::validate_multiplier(multiplier)?
            }
            None => {}
        }

        Ok(CkpModel { config })
    }
}

// ============================================================================
// Model
// ============================================================================

/// A validated correntropy periodogram estimator.
#[derive(Debug)]
pub struct CkpModel<T> {
    config: CkpConfig<T>,
}

impl<T: Float> CkpModel<T> {
    /// Compute the periodogram of `series` over the configured grid.
    pub fn periodogram(&self, series: &TimeSeries<T>) -> Result<Periodogram<T>, CkpError> {
        let executor = CkpExecutor::from_config(self.config.clone());
        Ok(executor.run(series)?.periodogram)
    }

    /// Refine the best frequencies of a previously computed periodogram.
    ///
    /// The whitening and bandwidth are re-derived from `series` with the
    /// model's configuration, so the refined values are comparable to the
    /// grid values of a periodogram computed by the same model.
    pub fn refine(
        &self,
        series: &TimeSeries<T>,
        periodogram: &Periodogram<T>,
    ) -> Result<OptimizationResult<T>, CkpError> {
        let normalized = series.normalized()?;
        let mut scratch = Vec::with_capacity(series.len());
        let bandwidth = self.config.effective_bandwidth_rule().compute(
            &normalized.mags,
            &normalized.uncertainties,
            &mut scratch,
        )?;

        let params = RefineParams {
            top_k: self.config.top_k,
            tolerance: self.config.refine_tolerance,
            max_iterations: self.config.refine_max_iterations,
        };

        refine(
            series.times(),
            &normalized.mags,
            &normalized.uncertainties,
            bandwidth,
            self.config.statistic.to_u8(),
            periodogram,
            &params,
        )
    }
}

// ============================================================================
// Convenience Functions
// ============================================================================

/// Compute a correntropy periodogram with default settings.
///
/// The grid spans `[freq_min, freq_max]` with a step of
/// `1 / (oversampling * baseline)`; `weighted` selects the
/// uncertainty-weighted statistic variant.
pub fn compute_periodogram<T: Float>(
    series: &TimeSeries<T>,
    freq_min: T,
    freq_max: T,
    oversampling: T,
    weighted: bool,
) -> Result<Periodogram<T>, CkpError> {
    let kind = if weighted {
        StatisticKind::Weighted
    } else {
        StatisticKind::Standard
    };

    CkpBuilder::new()
        .frequency_range(freq_min, freq_max)
        .oversampling(oversampling)
        .statistic(kind)
        .build()?
        .periodogram(series)
}

/// Refine the `top_k` best frequencies of a periodogram with default
/// settings.
///
/// The statistic variant is inferred from the series: weighted when
/// per-point uncertainties were supplied, standard otherwise.
pub fn refine_best_frequencies<T: Float>(
    series: &TimeSeries<T>,
    periodogram: &Periodogram<T>,
    top_k: usize,
) -> Result<OptimizationResult<T>, CkpError> {
    let kind = if series.is_weighted() {
        StatisticKind::Weighted
    } else {
        StatisticKind::Standard
    };

    CkpBuilder::new()
        .statistic(kind)
        .top_k(top_k)
        .build()?
        .refine(series, periodogram)
}
