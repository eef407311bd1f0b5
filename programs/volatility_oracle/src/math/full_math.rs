//! 512-bit intermediate multiplication and division.
//!
//! Mirrors the `FullMath.mulDiv` contract used by concentrated-liquidity price
//! feeds: the product `a * b` is formed exactly before dividing, and the
//! quotient is floored. Overflow of the final 256-bit result is an error.
use crate::errors::ErrorCode;
use anchor_lang::prelude::*;
use primitive_types::{U256, U512};

/// Computes `floor(a * b / denominator)` with a full-width intermediate.
pub fn mul_div(a: U256, b: U256, denominator: U256) -> Result<U256> {
    if denominator.is_zero() {
        return err!(ErrorCode::DivisionByZero);
    }

    let product: U512 = a.full_mul(b);
    let quotient = product / U512::from(denominator);

    U256::try_from(quotient).map_err(|_| error!(ErrorCode::MathOverflow))
}

/// Narrows a 256-bit value to `u128`, failing instead of truncating.
pub fn to_u128(value: U256) -> Result<u128> {
    if value > U256::from(u128::MAX) {
        return err!(ErrorCode::MathOverflow);
    }
    Ok(value.as_u128())
}
