//! Error types for periodogram operations.
//!
//! ## Purpose
//!
//! This module defines error conditions that can occur while constructing a
//! time series, configuring the estimator, or computing a correntropy
//! periodogram.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors include relevant values (e.g., actual vs. expected lengths).
//! * **Deferred**: Configuration errors are often caught and stored during builder setup.
//! * **No-std**: Supports `no_std` environments by using `alloc` for dynamic messages.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Input validation**: Empty arrays, mismatched lengths, non-finite values.
//! 2. **Parameter validation**: Invalid frequency range, oversampling, tolerance, or seed count.
//! 3. **Numerical degeneracy**: Kernel bandwidths that collapse to zero or below.
//!
//! ## Invariants
//!
//! * All variants provide sufficient context for diagnosis.
//! * Error messages are consistent in tone and formatting.
//! * Numeric values in errors use `f64` regardless of the working precision.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or fallback strategies.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for correntropy periodogram operations.
#[derive(Debug, Clone, PartialEq)]
pub enum CkpError {
    /// Input arrays are empty; a periodogram requires at least 2 points.
    EmptyInput,

    /// Generic invalid input error with a descriptive message.
    InvalidInput(String),

    /// Timestamp, magnitude, and uncertainty arrays must have the same length.
    InputShape {
        /// Number of elements in the timestamp array.
        times_len: usize,
        /// Number of elements in the magnitude array.
        mags_len: usize,
        /// Number of elements in the uncertainty array.
        uncertainties_len: usize,
    },

    /// Input data contains NaN or infinite values.
    InvalidValue(String),

    /// Number of points is below the minimum requirement.
    TooFewPoints {
        /// Number of points provided.
        got: usize,
        /// Minimum required points.
        min: usize,
    },

    /// Per-point uncertainties must be non-negative.
    NegativeUncertainty {
        /// Index of the offending value.
        index: usize,
        /// The offending value.
        value: f64,
    },

    /// The kernel bandwidth collapsed to zero or below.
    ///
    /// Raised by the one-time bandwidth computation for a series, e.g. when
    /// every uncertainty is zero or the magnitude spread is degenerate.
    DegenerateBandwidth {
        /// The bandwidth value that was computed.
        bandwidth: f64,
    },

    /// Frequency range must satisfy `0 < min < max`.
    InvalidFrequencyRange {
        /// The minimum trial frequency.
        min: f64,
        /// The maximum trial frequency.
        max: f64,
    },

    /// Oversampling factor must be positive and finite.
    InvalidOversampling(f64),

    /// A fixed bandwidth must be positive and finite.
    InvalidBandwidth(f64),

    /// Refinement requires at least one seed frequency.
    InvalidTopK(usize),

    /// Convergence tolerance must be positive and finite.
    InvalidTolerance(f64),

    /// Refinement requires at least 1 iteration and at most 10_000.
    InvalidMaxIterations(usize),

    /// Every grid value is the failure sentinel; no seeds can be selected.
    NonFinitePeriodogram,

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for CkpError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::EmptyInput => write!(f, "Input arrays are empty"),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            Self::InputShape {
                times_len,
                mags_len,
                uncertainties_len,
            } => {
                write!(
                    f,
                    "Length mismatch: times has {times_len} points, magnitudes has {mags_len}, uncertainties has {uncertainties_len}"
                )
            }
            Self::InvalidValue(s) => write!(f, "Invalid numeric value: {s}"),
            Self::TooFewPoints { got, min } => {
                write!(f, "Too few points: got {got}, need at least {min}")
            }
            Self::NegativeUncertainty { index, value } => {
                write!(
                    f,
                    "Negative uncertainty: uncertainties[{index}]={value} (must be >= 0)"
                )
            }
            Self::DegenerateBandwidth { bandwidth } => {
                write!(f, "Degenerate kernel bandwidth: {bandwidth} (must be > 0)")
            }
            Self::InvalidFrequencyRange { min, max } => {
                write!(
                    f,
                    "Invalid frequency range: [{min}, {max}] (must satisfy 0 < min < max)"
                )
            }
            Self::InvalidOversampling(os) => {
                write!(f, "Invalid oversampling: {os} (must be > 0 and finite)")
            }
            Self::InvalidBandwidth(h) => {
                write!(f, "Invalid bandwidth: {h} (must be > 0 and finite)")
            }
            Self::InvalidTopK(k) => {
                write!(f, "Invalid top_k: {k} (must be at least 1)")
            }
            Self::InvalidTolerance(tol) => {
                write!(f, "Invalid tolerance: {tol} (must be > 0 and finite)")
            }
            Self::InvalidMaxIterations(iters) => {
                write!(
                    f,
                    "Invalid max_iterations: {iters} (must be in [1, 10000])"
                )
            }
            Self::NonFinitePeriodogram => {
                write!(
                    f,
                    "Periodogram contains no finite values; cannot select seed frequencies"
                )
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for CkpError {}
