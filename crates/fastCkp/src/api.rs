//! High-level API for periodogram estimation with parallel execution.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point for correntropy
//! periodograms with heavy-duty parallel execution. It re-uses the base
//! `ckp` builder and pre-wires the rayon grid-scan pass into it.
//!
//! ## Design notes
//!
//! * **Fluent Integration**: Re-uses the base `ckp` builder pattern.
//! * **Parallel-First**: Defaults to parallel execution of the grid scan.
//! * **Transparent**: The returned builder and model are the base types;
//!   only the injected grid pass differs.
//!
//! ## Key concepts
//!
//! * **Parallel Support**: Uses `rayon` to distribute trial frequencies
//!   across CPU cores (feature `cpu`, enabled by default).
//! * **Feature-Gated**: Without the `cpu` feature the entry point degrades
//!   to the sequential base builder.

// Feature-gated imports
#[cfg(feature = "cpu")]
use crate::engine::executor::grid_pass_parallel;

// External dependencies
use num_traits::Float;

// Publicly re-exported types
pub use ckp::internals::api::CkpBuilder;

// ============================================================================
// Entry Point
// ============================================================================

/// Entry point for parallel periodogram estimation.
///
/// `Ckp::new()` returns the base `ckp` builder with the rayon grid-scan
/// pass already injected; all configuration methods and the resulting
/// model are the base crate's.
#[derive(Debug, Clone, Copy)]
pub struct Ckp;

impl Ckp {
    /// Create a builder with the parallel grid scan pre-wired.
    #[cfg(feature = "cpu")]
    pub fn new<T>() -> CkpBuilder<T>
    where
        T: Float + Send + Sync,
    {
        CkpBuilder::new()
            .custom_grid_pass(grid_pass_parallel::<T>)
            .parallel(true)
    }

    /// Create a sequential builder (the `cpu` feature is disabled).
    #[cfg(not(feature = "cpu"))]
    pub fn new<T>() -> CkpBuilder<T>
    where
        T: Float,
    {
        CkpBuilder::new()
    }
}
