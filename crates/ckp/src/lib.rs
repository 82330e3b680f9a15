//! # CKP — Correntropy Kernelized Periodograms for Rust
//!
//! An information-theoretic periodogram engine for irregularly sampled,
//! noisy astronomical time series (light curves), built on correntropy
//! rather than classical least-squares spectral estimation.
//!
//! ## What is a correntropy periodogram?
//!
//! A periodogram scores a set of trial frequencies by how much periodic
//! structure the data shows at each one. The correntropy kernelized
//! periodogram folds the time series at every trial frequency, takes the
//! consecutive magnitude differences of the phase-ordered points, and
//! measures, through a Gaussian kernel density estimate, how strongly
//! those differences concentrate near zero. Same-phase points of a truly
//! periodic signal have nearly identical magnitudes, so the density at zero
//! peaks at the true frequency. Because the measure is built on kernel
//! densities rather than squared residuals, it stays robust under
//! non-Gaussian, heteroscedastic measurement noise.
//!
//! ## Quick Start
//!
//! ```rust
//! use ckp::prelude::*;
//!
//! let times = vec![0.0, 0.13, 0.34, 0.57, 0.81, 1.02, 1.33, 1.51, 1.78, 2.05];
//! let mags = vec![0.9, 0.1, -0.8, -0.2, 0.7, 0.9, -0.6, -0.9, 0.3, 0.8];
//! let uncertainties = vec![0.05; 10];
//!
//! let series = TimeSeries::from_arrays(&times, &mags, &uncertainties)?;
//!
//! // One-shot: periodogram over [0.5, 4.0] with 5x oversampling
//! let pgram = compute_periodogram(&series, 0.5, 4.0, 5.0, true)?;
//! let refined = refine_best_frequencies(&series, &pgram, 3)?;
//!
//! println!("best frequency: {}", refined.frequency);
//! # Result::<(), CkpError>::Ok(())
//! ```
//!
//! ### Full Configuration
//!
//! ```rust
//! use ckp::prelude::*;
//!
//! # let times: Vec<f64> = (0..50).map(|i| i as f64 * 0.17).collect();
//! # let mags: Vec<f64> = times.iter().map(|t| (t * 12.0).sin()).collect();
//! # let uncertainties = vec![0.02; 50];
//! let series = TimeSeries::from_arrays(&times, &mags, &uncertainties)?;
//!
//! let model = Ckp::new()
//!     .frequency_range(0.1, 5.0)            // Trial frequencies
//!     .oversampling(10.0)                   // Grid density vs. baseline
//!     .statistic(Weighted)                  // Uncertainty-weighted variant
//!     .bandwidth(BandwidthRule::noise_scaled())
//!     .top_k(5)                             // Refinement seeds
//!     .refine_max_iterations(200)
//!     .build()?;
//!
//! let pgram = model.periodogram(&series)?;
//! let refined = model.refine(&series, &pgram)?;
//! # Result::<(), CkpError>::Ok(())
//! ```
//!
//! ### Result and Error Handling
//!
//! Every fallible operation returns `Result<_, CkpError>`; the `?` operator
//! is idiomatic. Malformed input (mismatched lengths, NaN values) fails at
//! construction; a degenerate kernel bandwidth fails the run before the
//! scan starts; a single pathological trial frequency only marks its own
//! grid entry with the `NaN` sentinel.
//!
//! ## Parallelism
//!
//! This crate is sequential and `no_std`-capable. The companion `fastCkp`
//! crate injects a rayon-parallel grid scan through this crate's execution
//! hook and is the recommended entry point for large grids.
//!
//! ## References
//!
//! - Huijse, P. et al. (2012). "An Information Theoretic Algorithm for
//!   Finding Periodicities in Stellar Light Curves"
//! - Principe, J. C. (2010). "Information Theoretic Learning: Renyi's
//!   Entropy and Kernel Perspectives"

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - data structures and basic utilities.
mod primitives;

// Layer 2: Math - pure mathematical functions.
mod math;

// Layer 3: Algorithms - folding and the correntropy statistic.
mod algorithms;

// Layer 4: Evaluation - grid derivation and peak selection.
mod evaluation;

// Layer 5: Engine - orchestration and execution control.
mod engine;

// High-level fluent API for periodogram estimation.
mod api;

// Standard CKP prelude.
pub mod prelude {
    pub use crate::api::{
        compute_periodogram, refine_best_frequencies, BandwidthRule, CkpBuilder as Ckp, CkpError,
        CkpModel, OptimizationResult, Periodogram, StatisticKind,
        StatisticKind::{Standard, Weighted},
        TimeSeries,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing
// purposes. It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod evaluation {
        pub use crate::evaluation::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
