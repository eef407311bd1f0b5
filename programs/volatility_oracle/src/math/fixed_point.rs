//! # volatility_oracle::math::fixed_point
//!
//! Deterministic integer kernels for the volatility pipeline.
//!
//! - `floor_div`: signed division rounded toward negative infinity, used for the
//!   time-weighted average tick. Rust's `/` truncates toward zero, which differs
//!   for negative non-exact quotients.
//! - `log2_wad` / `ln_wad`: binary-logarithm based natural log on 1e18
//!   fixed-point inputs. `ln(x) = log2(x) * 1e18 / log2(e)`, with the
//!   fractional bits of `log2` obtained by iterative squaring; every division
//!   truncates toward zero.
//! - `isqrt`: floor of the square root by Newton iteration.
use crate::constants::WAD;
use crate::errors::ErrorCode;
use anchor_lang::prelude::*;

/// 0.5 in WAD.
const HALF_WAD: u128 = WAD / 2;

/// 2.0 in WAD.
const DOUBLE_WAD: u128 = WAD * 2;

/// log2(e) in WAD.
const LOG2_E: i128 = 1_442_695_040_888_963_407;

/// Divides `numerator` by `denominator`, rounding toward negative infinity.
///
/// `floor_div(-7, 2) == -4` where truncating division gives `-3`.
///
/// # Errors
/// * `ErrorCode::DivisionByZero` - If `denominator` is zero
/// * `ErrorCode::MathOverflow` - For `i64::MIN / -1`
pub fn floor_div(numerator: i64, denominator: i64) -> Result<i64> {
    if denominator == 0 {
        return err!(ErrorCode::DivisionByZero);
    }

    let quotient = numerator
        .checked_div(denominator)
        .ok_or(ErrorCode::MathOverflow)?;

    if numerator % denominator != 0 && ((numerator < 0) != (denominator < 0)) {
        return quotient.checked_sub(1).ok_or(ErrorCode::MathOverflow.into());
    }

    Ok(quotient)
}

/// Index of the most significant set bit. `value` must be non-zero.
#[inline(always)]
fn most_significant_bit(value: u128) -> u32 {
    127 - value.leading_zeros()
}

/// Binary logarithm of a WAD number, returned in WAD.
///
/// Inputs below 1.0 are handled through `log2(x) = -log2(1/x)`.
///
/// # Errors
/// * `ErrorCode::InvalidLogInput` - If `x` is zero
pub fn log2_wad(x: u128) -> Result<i128> {
    if x == 0 {
        return err!(ErrorCode::InvalidLogInput);
    }

    let (sign, x) = if x >= WAD { (1i128, x) } else { (-1i128, WAD * WAD / x) };

    // Integer part: floor(log2(x / WAD))
    let n = most_significant_bit(x / WAD);
    let mut result = n as i128 * WAD as i128;

    // y is in [1.0, 2.0)
    let mut y = x >> n;
    if y == WAD {
        return Ok(result * sign);
    }

    // Fractional part, one bit per squaring
    let mut delta = HALF_WAD as i128;
    while delta > 0 {
        y = y * y / WAD;
        if y >= DOUBLE_WAD {
            result += delta;
            y >>= 1;
        }
        delta >>= 1;
    }

    Ok(result * sign)
}

/// Natural logarithm of a WAD number, returned in WAD.
///
/// # Errors
/// * `ErrorCode::InvalidLogInput` - If `x` is zero
pub fn ln_wad(x: u128) -> Result<i128> {
    let log2 = log2_wad(x)?;
    let scaled = log2
        .checked_mul(WAD as i128)
        .ok_or(ErrorCode::MathOverflow)?;
    Ok(scaled / LOG2_E)
}

/// Calculates the integer square root of a u128 number by Newton iteration.
/// Returns floor(sqrt(n)).
pub fn isqrt(n: u128) -> u128 {
    if n < 2 {
        return n;
    }

    // Start from a power of two that is known to be >= sqrt(n)
    let bits = 128 - n.leading_zeros();
    let mut x = 1u128 << bits.div_ceil(2);

    loop {
        let y = (x + n / x) / 2;
        if y >= x {
            return x;
        }
        x = y;
    }
}
