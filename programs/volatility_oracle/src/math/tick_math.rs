//! Tick to sqrt-price conversion in Q64.96.
//!
//! `sqrt(1.0001^tick) * 2^96` is built by binary exponentiation over a table
//! of `1 / sqrt(1.0001)^(2^i)` in Q128.128, then inverted for positive ticks
//! and rounded up when narrowing to Q64.96. The result is bit-identical to the
//! AMM's own tick math, so TWAP quotes agree with the pool.
use crate::constants::{MAX_TICK, MIN_TICK};
use crate::errors::ErrorCode;
use anchor_lang::prelude::*;
use primitive_types::U256;

/// `1 / sqrt(1.0001)^(2^i)` in Q128.128 for `i` in `1..20`.
/// Bit 0 is handled separately since its starting value replaces `2^128`.
const INVERSE_POWERS: [u128; 19] = [
    0xfff97272373d413259a46990580e213a,
    0xfff2e50f5f656932ef12357cf3c7fdcc,
    0xffe5caca7e10e4e61c3624eaa0941cd0,
    0xffcb9843d60f6159c9db58835c926644,
    0xff973b41fa98c081472e6896dfb254c0,
    0xff2ea16466c96a3843ec78b326b52861,
    0xfe5dee046a99a2a811c461f1969c3053,
    0xfcbe86c7900a88aedcffc83b479aa3a4,
    0xf987a7253ac413176f2b074cf7815e54,
    0xf3392b0822b70005940c7a398e4b70f3,
    0xe7159475a2c29b7443b29c7fa6e889d9,
    0xd097f3bdfd2022b8845ad8f792aa5825,
    0xa9f746462d870fdf8a65dc1f90e061e5,
    0x70d869a156d2a1b890bb3df62baf32f7,
    0x31be135f97d08fd981231505542fcfa6,
    0x9aa508b5b7a84e1c677de54f3e99bc9,
    0x5d6af8dedb81196699c329225ee604,
    0x2216e584f5fa1ea926041bedfe98,
    0x48a170391f7dc42444e8fa2,
];

/// `1 / sqrt(1.0001)` in Q128.128.
const INVERSE_SQRT_BASE: u128 = 0xfffcb933bd6fad37aa2d162d1a594001;

/// Returns `sqrt(1.0001^tick)` as a Q64.96 number.
///
/// # Errors
/// * `ErrorCode::TickOutOfRange` - If `tick` is outside `[MIN_TICK, MAX_TICK]`
pub fn sqrt_ratio_at_tick(tick: i32) -> Result<U256> {
    if !(MIN_TICK..=MAX_TICK).contains(&tick) {
        return err!(ErrorCode::TickOutOfRange);
    }

    let abs_tick = tick.unsigned_abs();

    let mut ratio = if abs_tick & 0x1 != 0 {
        U256::from(INVERSE_SQRT_BASE)
    } else {
        U256::one() << 128
    };

    for (i, factor) in INVERSE_POWERS.iter().enumerate() {
        if abs_tick & (1u32 << (i + 1)) != 0 {
            ratio = (ratio * U256::from(*factor)) >> 128;
        }
    }

    if tick > 0 {
        ratio = U256::MAX / ratio;
    }

    // Q128.128 -> Q64.96, rounding up so the price never under-reports
    let remainder = ratio & U256::from(u32::MAX);
    let round_up = if remainder.is_zero() {
        U256::zero()
    } else {
        U256::one()
    };
    let sqrt_price_x96 = (ratio >> 32) + round_up;

    Ok(sqrt_price_x96)
}
