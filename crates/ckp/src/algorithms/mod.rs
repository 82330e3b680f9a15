//! Layer 3: Algorithms
//!
//! This layer implements the core logic of the engine: folding a series at
//! a trial frequency and evaluating the correntropy statistic on the folded
//! result. It contains the "business logic" of the periodogram but is
//! orchestrated by the engine layer.

// Phase folding into reusable buffers.
pub mod folding;

// The correntropy periodicity statistic.
pub mod statistic;
