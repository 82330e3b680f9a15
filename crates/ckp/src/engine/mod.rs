//! Layer 5: Engine
//!
//! This layer orchestrates periodogram computation: it validates
//! configuration, whitens the series and derives the bandwidth once, drives
//! the grid scan (sequentially, or through an injected parallel pass), and
//! runs the local refinement of the best candidates.

/// Configuration validation.
pub mod validator;

/// Execution engine and grid-scan pass.
pub mod executor;

/// Local refinement of the best grid frequencies.
pub mod refine;

/// Output types (periodogram, refinement result).
pub mod output;
