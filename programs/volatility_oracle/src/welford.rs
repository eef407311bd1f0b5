//! Online mean and variance of log-return samples (Welford's algorithm).
//!
//! Samples and the running mean are 1e8 fixed-point; the sum of squared
//! deviations is the product of two such values (1e16).
//!
//! While the sample count is below the window cap the update is the textbook
//! Welford recurrence. Once the cap is reached the count is held and the
//! accumulator becomes an exponentially reweighted window of size `n`:
//!
//! ```text
//! delta = x - mean
//! mean' = mean + delta / n
//! dsq'  = dsq - floor(dsq / n) + delta * (x - mean')
//! ```
//!
//! so every older contribution to `dsq` decays by `(n - 1) / n` per update.
//! All divisions truncate toward zero. The bounds of the persisted fields are
//! enforced by `AccumulatorRecord`'s setters, not here.
//!
//! Because the running mean is truncated at every step, `stdev` can differ from
//! the exact population standard deviation of the same samples. For short
//! series the gap stays within 1 unit at 1e8; over long random series it has
//! been observed up to just under 2 units.
use crate::errors::ErrorCode;
use crate::math::fixed_point::isqrt;
use anchor_lang::prelude::*;

/// Result of folding one sample into the running statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WelfordState {
    pub count: u64,
    pub mean: i128,
    pub dsq: u128,
}

/// Folds `sample` into `(count, mean, dsq)`.
///
/// # Errors
/// * `ErrorCode::InvalidWindowSize` - If `window_cap` is zero
/// * `ErrorCode::MeanOutOfRange` - If the mean arithmetic overflows
/// * `ErrorCode::SumOfSquaresOutOfRange` - If the squared-deviation arithmetic overflows
pub fn update(
    count: u64,
    mean: i128,
    dsq: u128,
    sample: i128,
    window_cap: u64,
) -> Result<WelfordState> {
    require!(window_cap > 0, ErrorCode::InvalidWindowSize);

    let at_cap = count >= window_cap;
    let new_count = if at_cap {
        window_cap
    } else {
        count.checked_add(1).ok_or(ErrorCode::SampleCountOverflow)?
    };

    let delta = sample.checked_sub(mean).ok_or(ErrorCode::MeanOutOfRange)?;
    let new_mean = mean
        .checked_add(delta / new_count as i128)
        .ok_or(ErrorCode::MeanOutOfRange)?;

    // delta and (sample - new_mean) never have opposite signs
    let deviation = sample
        .checked_sub(new_mean)
        .ok_or(ErrorCode::MeanOutOfRange)?;
    let increment = delta
        .checked_mul(deviation)
        .ok_or(ErrorCode::SumOfSquaresOutOfRange)?;
    let increment = u128::try_from(increment)
        .map_err(|_| error!(ErrorCode::SumOfSquaresOutOfRange))?;

    let retained = if at_cap { dsq - dsq / window_cap as u128 } else { dsq };
    let new_dsq = retained
        .checked_add(increment)
        .ok_or(ErrorCode::SumOfSquaresOutOfRange)?;

    Ok(WelfordState {
        count: new_count,
        mean: new_mean,
        dsq: new_dsq,
    })
}

/// Population standard deviation `sqrt(dsq / count)` in 1e8 scale, 0 with no samples.
pub fn stdev(count: u64, dsq: u128) -> u128 {
    if count == 0 {
        return 0;
    }
    isqrt(dsq / count as u128)
}
