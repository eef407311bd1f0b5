/// TWAP Calculator Module
///
/// Derives a time-weighted average price for the tracked pool from the two
/// extreme entries of the feed's observation ring: the newest slot (at the
/// write cursor) and the oldest slot still held (the one after the cursor, or
/// slot 0 while the ring has not wrapped yet).
///
/// The average tick is `floor((newest - oldest) / duration)`; the quote for one
/// whole unit of base currency follows the pool's token order.
use crate::constants::{MAX_TICK, MIN_TICK};
use crate::errors::ErrorCode;
use crate::math::fixed_point::floor_div;
use crate::math::full_math::{mul_div, to_u128};
use crate::math::tick_math::sqrt_ratio_at_tick;
use crate::price_source::{ObservationView, PriceSource};
use anchor_lang::prelude::*;
use primitive_types::U256;

/// Average tick between two cumulative-tick readings.
///
/// # Arguments
/// * `oldest_tick_cumulative` - Cumulative tick of the older observation
/// * `newest_tick_cumulative` - Cumulative tick of the newer observation
/// * `duration` - Seconds between the two observations
///
/// # Errors
/// * `ErrorCode::InsufficientObservations` - If `duration` is zero
/// * `ErrorCode::TickOutOfRange` - If the average falls outside the tick range
pub fn average_tick(
    oldest_tick_cumulative: i64,
    newest_tick_cumulative: i64,
    duration: u32,
) -> Result<i32> {
    if duration == 0 {
        return err!(ErrorCode::InsufficientObservations);
    }

    let tick_delta = newest_tick_cumulative
        .checked_sub(oldest_tick_cumulative)
        .ok_or(ErrorCode::MathOverflow)?;

    let tick = floor_div(tick_delta, duration as i64)?;

    if tick < MIN_TICK as i64 || tick > MAX_TICK as i64 {
        return err!(ErrorCode::TickOutOfRange);
    }

    Ok(tick as i32)
}

/// Locates the oldest and newest initialized observations in the ring.
///
/// # Returns
/// * `(oldest, newest)`
pub fn oldest_and_newest<S: PriceSource>(source: &S) -> Result<(ObservationView, ObservationView)> {
    let cardinality = source.observation_cardinality();
    if cardinality == 0 {
        return err!(ErrorCode::InsufficientObservations);
    }

    let index = source.observation_index();
    let newest = source.observation(index)?;
    if !newest.initialized {
        return err!(ErrorCode::InsufficientObservations);
    }

    let oldest_index = ((index as u32 + 1) % cardinality as u32) as u16;
    let mut oldest = source.observation(oldest_index)?;

    // The ring has not wrapped yet: everything after the cursor is empty
    if !oldest.initialized {
        oldest = source.observation(0)?;
    }

    Ok((oldest, newest))
}

/// Quote for `base_amount` of base currency at `tick`, in quote currency units.
///
/// `base_is_token_0` selects the direction: the pool's tick prices token0 in
/// units of token1, so a token1 base takes the reciprocal.
pub fn quote_at_tick(tick: i32, base_amount: u128, base_is_token_0: bool) -> Result<u128> {
    let sqrt_ratio_x96 = sqrt_ratio_at_tick(tick)?;
    let base_amount = U256::from(base_amount);

    // Square without overflow while the sqrt ratio fits in 128 bits
    let quote = if sqrt_ratio_x96 <= U256::from(u128::MAX) {
        let ratio_x192 = sqrt_ratio_x96 * sqrt_ratio_x96;
        let one_x192 = U256::one() << 192;
        if base_is_token_0 {
            mul_div(ratio_x192, base_amount, one_x192)?
        } else {
            mul_div(one_x192, base_amount, ratio_x192)?
        }
    } else {
        let ratio_x128 = mul_div(sqrt_ratio_x96, sqrt_ratio_x96, U256::one() << 64)?;
        let one_x128 = U256::one() << 128;
        if base_is_token_0 {
            mul_div(ratio_x128, base_amount, one_x128)?
        } else {
            mul_div(one_x128, base_amount, ratio_x128)?
        }
    };

    to_u128(quote)
}

/// Time-weighted price of one whole unit of `base_mint`, recomputed live from
/// the price source.
///
/// # Arguments
/// * `source` - The pool's observation feed
/// * `base_mint` - Mint being priced; must be one of the pool's tokens
/// * `base_decimals` - Decimal scale of `base_mint`
pub fn twap<S: PriceSource>(source: &S, base_mint: &Pubkey, base_decimals: u8) -> Result<u128> {
    let (token_0, token_1) = source.token_mints();
    let base_is_token_0 = if *base_mint == token_0 {
        true
    } else if *base_mint == token_1 {
        false
    } else {
        return err!(ErrorCode::CurrencyNotInPair);
    };

    let (oldest, newest) = oldest_and_newest(source)?;
    // 32-bit timestamps wrap; a zero span is rejected by average_tick
    let duration = newest.block_timestamp.wrapping_sub(oldest.block_timestamp);

    let tick = average_tick(oldest.tick_cumulative, newest.tick_cumulative, duration)?;

    let base_amount = 10u128
        .checked_pow(base_decimals as u32)
        .ok_or(ErrorCode::MathOverflow)?;

    quote_at_tick(tick, base_amount, base_is_token_0)
}
