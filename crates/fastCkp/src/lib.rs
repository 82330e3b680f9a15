//! # fastCkp — Parallel Correntropy Kernelized Periodograms
//!
//! A parallel front-end for the `ckp` correntropy periodogram engine. The
//! grid scan (folding the series and evaluating the statistic at every
//! trial frequency) is embarrassingly parallel across frequencies, and
//! this crate distributes it over all available CPU cores with `rayon`.
//!
//! ## Quick Start
//!
//! ```rust
//! use fastCkp::prelude::*;
//!
//! let times: Vec<f64> = (0..200).map(|i| i as f64 * 0.07).collect();
//! let mags: Vec<f64> = times.iter().map(|t| (t * 12.0).sin()).collect();
//! let uncertainties = vec![0.02; 200];
//!
//! let series = TimeSeries::from_arrays(&times, &mags, &uncertainties)?;
//!
//! // Build the model; the grid scan runs in parallel by default
//! let model = Ckp::new()
//!     .frequency_range(0.5, 5.0)
//!     .oversampling(10.0)
//!     .statistic(Weighted)
//!     .build()?;
//!
//! let pgram = model.periodogram(&series)?;
//! let refined = model.refine(&series, &pgram)?;
//!
//! println!("best frequency: {}", refined.frequency);
//! # Result::<(), CkpError>::Ok(())
//! ```
//!
//! ### ndarray Integration
//!
//! `fastCkp` accepts contiguous 1-D [ndarray](https://docs.rs/ndarray)
//! arrays (as well as slices and vectors) when building a time series:
//!
//! ```rust
//! use fastCkp::prelude::*;
//! use ndarray::Array1;
//!
//! let times = Array1::from_iter((0..100).map(|i| i as f64 * 0.11));
//! let mags = times.mapv(|t| (t * 6.0).sin());
//! let uncertainties = Array1::from_elem(100, 0.05);
//!
//! let series = time_series(&times, &mags, &uncertainties)?;
//! let pgram = Ckp::new().frequency_range(0.2, 3.0).build()?.periodogram(&series)?;
//! # Result::<(), CkpError>::Ok(())
//! ```
//!
//! ## Ordering Guarantee
//!
//! The periodogram is always in frequency-grid order, regardless of how the
//! parallel scan interleaved its workers. The series view and bandwidth are
//! shared read-only; every worker owns its private fold buffer.
//!
//! ## Sequential Fallback
//!
//! Disable the default `cpu` feature to fall back to the sequential engine
//! while keeping the same API surface.

#![allow(non_snake_case)]

// Input abstractions for slices, vectors, and ndarray.
mod input;

// Parallel execution engine.
mod engine;

// High-level fluent API with the parallel pass pre-wired.
mod api;

// Standard fastCkp prelude.
pub mod prelude {
    pub use crate::api::Ckp;
    pub use crate::input::{time_series, CkpInput};
    pub use ckp::prelude::{
        compute_periodogram, refine_best_frequencies, BandwidthRule, CkpError, CkpModel,
        OptimizationResult, Periodogram, StatisticKind,
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
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod input {
        pub use crate::input::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
