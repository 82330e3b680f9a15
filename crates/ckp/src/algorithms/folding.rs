//! Phase folding of a time series at a trial frequency.
//!
//! ## Purpose
//!
//! This module turns a time series plus one trial frequency into the
//! phase-ordered view the correntropy statistic consumes: fold every
//! timestamp into `[0, 1)`, rank the points by phase, and gather the
//! magnitude and uncertainty columns through that ranking.
//!
//! ## Design notes
//!
//! * **Ephemeral**: The folded view lives in a [`FoldBuffer`] and is
//!   overwritten at the next frequency; it is never persisted.
//! * **Allocation-free**: All arrays come from the buffer, which the grid
//!   scan reuses across thousands of frequencies.
//! * **Determinism**: The phase argsort breaks ties on observation index,
//!   so identical phases always produce the same ordering.
//!
//! ## Invariants
//!
//! * After `fold_into`, `buf.mags` and `buf.uncertainties` are in ascending
//!   phase order and have the series length.
//!
//! ## Non-goals
//!
//! * This module does not evaluate the statistic.
//! * This module does not validate the frequency (grid construction does).

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::phase::fold_phase;
use crate::primitives::buffer::FoldBuffer;
use crate::primitives::sorting::argsort_by_phase;

/// Fold `times` at `frequency` and gather `mags`/`uncertainties` into
/// ascending phase order inside `buf`.
pub fn fold_into<T: Float>(
    times: &[T],
    mags: &[T],
    uncertainties: &[T],
    frequency: T,
    buf: &mut FoldBuffer<T>,
) {
    let n = times.len();
    buf.prepare(n);

    // Fold every timestamp into the unit phase interval
    for (phase, &t) in buf.phases.iter_mut().zip(times.iter()) {
        *phase = fold_phase(t, frequency);
    }

    // Rank points by phase
    argsort_by_phase(&buf.phases, buf.order.as_vec_mut());

    // Gather the magnitude and uncertainty columns through the ranking
    for k in 0..n {
        let src = buf.order[k];
        buf.mags[k] = mags[src];
        buf.uncertainties[k] = uncertainties[src];
    }
}
