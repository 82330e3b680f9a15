//! Input abstractions for periodogram estimation.
//!
//! ## Purpose
//!
//! This module provides a unified abstraction over numeric input
//! containers, allowing time-series construction from multiple data
//! formats (slices, vectors, ndarray) through a single interface.
//!
//! ## Design notes
//!
//! * **Zero-copy where possible**: Provides direct slice access to underlying data buffers.
//! * **Interoperability**: Bridges standard Rust collections with specialized numerical libraries.
//! * **Fail-fast validation**: Ensures memory continuity for array types before processing.
//!
//! ## Key concepts
//!
//! * **CkpInput Trait**: The core abstraction that requires types to provide a contiguous slice view.
//! * **Memory Continuity**: Essential for the fold-and-evaluate inner loops.
//!
//! ## Invariants
//!
//! * Returned slices must represent all elements in the input container.
//! * Inputs must be contiguous in memory; non-contiguous inputs return an error.
//!
//! ## Non-goals
//!
//! * This module does not perform data cleaning or imputation.
//! * This module does not handle data reshaping or dimensionality reduction.

// External dependencies
use ndarray::{ArrayBase, Data, Ix1};
use num_traits::Float;

// Export dependencies from ckp crate
use ckp::prelude::{CkpError, TimeSeries};

/// Trait for types that can be used as input columns for a time series.
pub trait CkpInput<T: Float> {
    /// Convert the input to a contiguous slice.
    fn as_ckp_slice(&self) -> Result<&[T], CkpError>;
}

impl<T: Float> CkpInput<T> for [T] {
    fn as_ckp_slice(&self) -> Result<&[T], CkpError> {
        Ok(self)
    }
}

impl<T: Float> CkpInput<T> for Vec<T> {
    fn as_ckp_slice(&self) -> Result<&[T], CkpError> {
        Ok(self.as_slice())
    }
}

impl<T: Float, S> CkpInput<T> for ArrayBase<S, Ix1>
where
    S: Data<Elem = T>,
{
    fn as_ckp_slice(&self) -> Result<&[T], CkpError> {
        self.as_slice().ok_or_else(|| {
            CkpError::InvalidInput("ndarray input must be contiguous in memory".to_string())
        })
    }
}

/// Build a [`TimeSeries`] from any supported input containers.
pub fn time_series<T, A, B, C>(
    times: &A,
    mags: &B,
    uncertainties: &C,
) -> Result<TimeSeries<T>, CkpError>
where
    T: Float,
    A: CkpInput<T> + ?Sized,
    B: CkpInput<T> + ?Sized,
    C: CkpInput<T> + ?Sized,
{
    TimeSeries::from_arrays(
        times.as_ckp_slice()?,
        mags.as_ckp_slice()?,
        uncertainties.as_ckp_slice()?,
    )
}
