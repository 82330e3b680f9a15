//! Parallel execution engine.
//!
//! Holds the rayon-backed grid-scan pass that `fastCkp` injects into the
//! `ckp` execution engine.

/// Parallel grid-scan pass.
pub mod executor;
