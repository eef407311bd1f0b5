use crate::constants::{MAX_MANUAL_VOLATILITY, MIN_MANUAL_VOLATILITY};
use crate::errors::ErrorCode;
use anchor_lang::prelude::*;

/// Singleton holding the identity allowed to override volatility.
///
/// PDA of `[MANUAL_ORACLE_SEED]`.
#[account]
#[derive(Default, Debug)]
pub struct ManualVolOracle {
    pub bump: u8,
    pub admin: Pubkey,
}

impl ManualVolOracle {
    pub const LEN: usize = 8 + 1 + 32;

    /// Fails closed unless `caller` is the stored admin.
    pub fn authorize(&self, caller: &Pubkey) -> Result<()> {
        require!(
            self.admin != Pubkey::default() && self.admin == *caller,
            ErrorCode::Unauthorized
        );
        Ok(())
    }
}

/// Administrator-supplied annualized volatility for one pool, 1e8 scale.
///
/// PDA of `[MANUAL_VOLATILITY_SEED, pool]`.
#[account]
#[derive(Default, Debug)]
pub struct ManualVolatility {
    pub bump: u8,
    pub pool: Pubkey,
    pub annualized_vol: u64,
}

impl ManualVolatility {
    pub const LEN: usize = 8 + 1 + 32 + 8;

    pub fn set(&mut self, pool: Pubkey, bump: u8, annualized_vol: u64) -> Result<()> {
        validate_manual_volatility(annualized_vol)?;
        self.pool = pool;
        self.bump = bump;
        self.annualized_vol = annualized_vol;
        Ok(())
    }
}

/// Accepts values in `[50%, 400%]` at 1e8 scale.
pub fn validate_manual_volatility(annualized_vol: u64) -> Result<()> {
    require!(
        annualized_vol >= MIN_MANUAL_VOLATILITY,
        ErrorCode::VolatilityTooLow
    );
    require!(
        annualized_vol <= MAX_MANUAL_VOLATILITY,
        ErrorCode::VolatilityTooHigh
    );
    Ok(())
}
