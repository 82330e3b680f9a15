//! Phase-folding arithmetic.
//!
//! Folding maps a timestamp onto the unit phase interval of a trial
//! frequency: `phase = frac(t * f)`. The engine folds the same series at
//! every grid frequency, so this stays a branch-light scalar operation.

// External dependencies
use num_traits::Float;

/// Fold a timestamp at a trial frequency into `[0, 1)`.
///
/// Uses `x - floor(x)` rather than `fract` so that negative timestamps also
/// land in `[0, 1)`. Rounding can push the result to exactly 1 when
/// `t * f` sits just below an integer; that case wraps to 0.
#[inline]
pub fn fold_phase<T: Float>(t: T, frequency: T) -> T {
    let x = t * frequency;
    let phase = x - x.floor();
    if phase >= T::one() {
        T::zero()
    } else {
        phase
    }
}
