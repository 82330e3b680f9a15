//! Layer 4: Evaluation
//!
//! This layer derives the trial frequency grid from the series baseline and
//! selects candidate peaks from a finished periodogram. It prepares and
//! post-processes grid scans but does not run them (the engine does).

/// Trial frequency grid derivation.
pub mod grid;

/// Periodogram peak selection.
pub mod peaks;
