/// Volatility Oracle Core
///
/// The commit state machine. Per oracle the state is implicit:
///
/// - `Idle`: the clock is outside every commit window
/// - `CommitEligible`: inside a window and the period has no sample yet
/// - `Committed`: this period's sample has been accepted
///
/// A commit validates the window, prices the pool, turns the price change into
/// a log-return, folds it into the accumulator and persists record and price
/// together. Every step works on a scratch copy; the account is only written
/// after all of them succeed.
use crate::constants::{LOG_RESCALE, WAD};
use crate::errors::ErrorCode;
use crate::math::fixed_point::ln_wad;
use crate::math::full_math::{mul_div, to_u128};
use crate::price_source::PriceSource;
use crate::state::{Accumulator, AccumulatorRecord, VolatilityOracle};
use crate::twap;
use crate::welford;
use anchor_lang::prelude::*;
use primitive_types::U256;

/// Event emitted for every accepted sample
#[event]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VolatilityCommitted {
    /// The oracle configuration account
    pub oracle: Pubkey,

    /// Samples held after this commit
    pub count: u16,

    /// Canonical period boundary recorded
    pub commit_timestamp: u64,

    /// Running mean of log-returns (1e8)
    pub mean: i128,

    /// Sum of squared deviations (1e16)
    pub dsq: u128,

    /// TWAP recorded as the new last price
    pub price: u128,

    /// Who submitted the commit
    pub committer: Pubkey,
}

/// `price / last_price` in WAD, or 0 when there is no previous price.
pub fn period_return(price: u128, last_price: u128) -> Result<u128> {
    if last_price == 0 {
        return Ok(0);
    }
    let ratio = mul_div(U256::from(price), U256::from(WAD), U256::from(last_price))?;
    to_u128(ratio)
}

/// `ln(period_return)` rescaled from 1e18 to 1e8 (truncating), 0 for a zero return.
pub fn log_return(period_return: u128) -> Result<i128> {
    if period_return == 0 {
        return Ok(0);
    }
    Ok(ln_wad(period_return)? / LOG_RESCALE)
}

/// Accepts one sample for `oracle` at `now`.
///
/// # Arguments
/// * `oracle` - The oracle configuration
/// * `oracle_key` - Address of `oracle`, recorded in the event
/// * `accumulator` - The oracle's accumulator; untouched on error
/// * `source` - The pool's observation feed
/// * `now` - Current unix time in seconds
/// * `committer` - Signer of the commit, recorded in the event
///
/// # Errors
/// * `ErrorCode::NotInCommitPhase` / `ErrorCode::AlreadyCommitted` - Scheduling
/// * `ErrorCode::SampleCountOverflow` / `ErrorCode::MeanOutOfRange` /
///   `ErrorCode::SumOfSquaresOutOfRange` - Field bounds
/// * Any TWAP error from the price source
pub fn commit<S: PriceSource>(
    oracle: &VolatilityOracle,
    oracle_key: Pubkey,
    accumulator: &mut Accumulator,
    source: &S,
    now: u64,
    committer: Pubkey,
) -> Result<VolatilityCommitted> {
    let current = accumulator.record();

    let commit_timestamp = oracle
        .scheduler()?
        .commit_timestamp(now, current.last_timestamp())?;

    let price = twap::twap(source, &oracle.base_mint, oracle.base_decimals)?;
    let sample = log_return(period_return(price, accumulator.last_price())?)?;

    let state = welford::update(
        current.count() as u64,
        current.mean(),
        current.dsq(),
        sample,
        oracle.window_size as u64,
    )?;

    let mut next = current;
    next.set_count(state.count)?;
    next.set_last_timestamp(commit_timestamp)?;
    next.set_mean(state.mean)?;
    next.set_dsq(state.dsq)?;

    accumulator.store(next, price);

    Ok(VolatilityCommitted {
        oracle: oracle_key,
        count: next.count(),
        commit_timestamp,
        mean: next.mean(),
        dsq: next.dsq(),
        price,
        committer,
    })
}

/// Per-period standard deviation of log-returns (1e8).
pub fn current_stdev(record: &AccumulatorRecord) -> u128 {
    welford::stdev(record.count() as u64, record.dsq())
}

/// Standard deviation scaled to a year by `sqrt(periods per year)` (1e8).
pub fn annualized_stdev(oracle: &VolatilityOracle, record: &AccumulatorRecord) -> Result<u128> {
    current_stdev(record)
        .checked_mul(oracle.annualization_factor)
        .ok_or(ErrorCode::MathOverflow.into())
}
