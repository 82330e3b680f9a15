//! Parameter validation for periodogram configuration.
//!
//! ## Purpose
//!
//! This module provides validation functions for estimator configuration:
//! frequency range, oversampling, bandwidth, refinement parameters, and
//! builder hygiene. Input-array validation lives with the time-series
//! container, which owns construction.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Invariants
//!
//! * All validated parameters satisfy their respective mathematical constraints.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not sort, transform, or filter input data.
//! * This module does not provide automatic correction of invalid inputs.
//! * This module does not perform the grid scan or refinement itself.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::CkpError;

// ============================================================================
// Validator
// ============================================================================

/// Maximum refinement iterations accepted by the configuration.
const MAX_ITERATIONS: usize = 10_000;

/// Validation utility for periodogram configuration.
///
/// Provides static methods for validating estimator parameters. All methods
/// return `Result<(), CkpError>` and fail fast upon identifying the first
/// violation.
pub struct Validator;

impl Validator {
    /// Validate the trial frequency range.
    pub fn validate_frequency_range<T: Float>(min: T, max: T) -> Result<(), CkpError> {
        if !min.is_finite() || !max.is_finite() || min <= T::zero() || min >= max {
            return Err(CkpError::InvalidFrequencyRange {
                min: min.to_f64().unwrap_or(f64::NAN),
                max: max.to_f64().unwrap_or(f64::NAN),
            });
        }
        Ok(())
    }

    /// Validate the oversampling factor.
    pub fn validate_oversampling<T: Float>(oversampling: T) -> Result<(), CkpError> {
        if !oversampling.is_finite() || oversampling <= T::zero() {
            return Err(CkpError::InvalidOversampling(
                oversampling.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate a caller-supplied fixed bandwidth.
    pub fn validate_fixed_bandwidth<T: Float>(bandwidth: T) -> Result<(), CkpError> {
        if !bandwidth.is_finite() || bandwidth <= T::zero() {
            return Err(CkpError::InvalidBandwidth(
                bandwidth.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate a bandwidth-rule multiplier.
    pub fn validate_multiplier<T: Float>(multiplier: T) -> Result<(), CkpError> {
        if !multiplier.is_finite() || multiplier <= T::zero() {
            return Err(CkpError::InvalidBandwidth(
                multiplier.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate the number of refinement seeds.
    pub fn validate_top_k(top_k: usize) -> Result<(), CkpError> {
        if top_k == 0 {
            return Err(CkpError::InvalidTopK(top_k));
        }
        Ok(())
    }

    /// Validate the refinement convergence tolerance.
    pub fn validate_tolerance<T: Float>(tolerance: T) -> Result<(), CkpError> {
        if !tolerance.is_finite() || tolerance <= T::zero() {
            return Err(CkpError::InvalidTolerance(
                tolerance.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate the refinement iteration cap.
    pub fn validate_max_iterations(max_iterations: usize) -> Result<(), CkpError> {
        if max_iterations == 0 || max_iterations > MAX_ITERATIONS {
            return Err(CkpError::InvalidMaxIterations(max_iterations));
        }
        Ok(())
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), CkpError> {
        if let Some(param) = duplicate_param {
            return Err(CkpError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}
